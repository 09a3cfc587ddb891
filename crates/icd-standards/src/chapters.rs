#![deny(unsafe_code)]

use icd_model::CodeRange;

/// A contiguous interval of diagnosis codes grouped under one chapter name.
///
/// Bounds are inclusive and ordered (`start <= end`) under byte-wise string
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRange {
    pub name: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

impl CategoryRange {
    /// True when the queried range is fully nested inside this chapter.
    pub fn contains_range(&self, range: &CodeRange) -> bool {
        range.start.as_str() >= self.start && range.end.as_str() <= self.end
    }
}

/// The ICD-11 top-level chapter ranges, in chapter order.
pub const CHAPTERS: &[CategoryRange] = &[
    CategoryRange {
        name: "Certain infectious or parasitic diseases",
        start: "1A00",
        end: "1H0Z",
    },
    CategoryRange {
        name: "Neoplasms",
        start: "2A00",
        end: "2F9Z",
    },
    CategoryRange {
        name: "Diseases of the blood or blood-forming organs",
        start: "3A00",
        end: "3C0Z",
    },
    CategoryRange {
        name: "Diseases of the immune system",
        start: "4A00",
        end: "4B4Z",
    },
    CategoryRange {
        name: "Endocrine, nutritional or metabolic diseases",
        start: "5A00",
        end: "5D46",
    },
    CategoryRange {
        name: "Mental, behavioral and neurodevelopmental disorders",
        start: "6A00",
        end: "6E8Z",
    },
    CategoryRange {
        name: "Sleep-wake disorders",
        start: "7A00",
        end: "7B2Z",
    },
    CategoryRange {
        name: "Diseases of the nervous system",
        start: "8A00",
        end: "8E7Z",
    },
    CategoryRange {
        name: "Diseases of the visual system",
        start: "9A00",
        end: "9E1Z",
    },
    CategoryRange {
        name: "Diseases of the ear or mastoid process",
        start: "AA00",
        end: "AC0Z",
    },
    CategoryRange {
        name: "Diseases of the circulatory system",
        start: "BA00",
        end: "BE2Z",
    },
    CategoryRange {
        name: "Diseases of the respiratory system",
        start: "CA00",
        end: "CB7Z",
    },
    CategoryRange {
        name: "Diseases of the digestive system",
        start: "DA00",
        end: "DE2Z",
    },
    CategoryRange {
        name: "Diseases of the skin",
        start: "EA00",
        end: "EM0Z",
    },
    CategoryRange {
        name: "Diseases of the musculoskeletal system or connective tissue",
        start: "FA00",
        end: "FC0Z",
    },
    CategoryRange {
        name: "Diseases of genitourinary system",
        start: "GA00",
        end: "GC8Z",
    },
    CategoryRange {
        name: "Conditions related to sexual health",
        start: "HA00",
        end: "HA8Z",
    },
    CategoryRange {
        name: "Pregnancy, childbirth or puerperium",
        start: "JA00",
        end: "JB6Z",
    },
    CategoryRange {
        name: "Certain conditions originating in perinatal period",
        start: "KA00",
        end: "KD5Z",
    },
    CategoryRange {
        name: "Developmental anomalies",
        start: "LA00",
        end: "LD9Z",
    },
    CategoryRange {
        name: "Symptoms, signs or clinical findings not elsewhere classified",
        start: "MA00",
        end: "MH2Y",
    },
    CategoryRange {
        name: "Injury, poisoning or certain consequences of external causes",
        start: "NA00",
        end: "NF2Z",
    },
    CategoryRange {
        name: "External causes of morbidity or mortality",
        start: "PA00",
        end: "PL2Z",
    },
    CategoryRange {
        name: "Factors influencing health status or contact with health services",
        start: "QA00",
        end: "QF4Z",
    },
    CategoryRange {
        name: "Codes for special purposes",
        start: "RA00",
        end: "RA26",
    },
    CategoryRange {
        name: "Supplementary chapter: Traditional medicine conditions (Module 1)",
        start: "SA00",
        end: "ST2Z",
    },
    CategoryRange {
        name: "Supplementary section for functioning assessment",
        start: "VA00",
        end: "VC50",
    },
    CategoryRange {
        name: "Extension codes",
        start: "XA0060",
        end: "XY9U",
    },
];

/// The full chapter table in declaration order.
pub fn chapters() -> &'static [CategoryRange] {
    CHAPTERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_well_formed() {
        assert_eq!(chapters().len(), 28);
        for chapter in chapters() {
            assert!(
                chapter.start <= chapter.end,
                "{}: {} > {}",
                chapter.name,
                chapter.start,
                chapter.end
            );
            assert!(!chapter.name.is_empty());
        }
    }

    #[test]
    fn chapter_ranges_are_pairwise_disjoint() {
        let mut sorted: Vec<&CategoryRange> = chapters().iter().collect();
        sorted.sort_by_key(|chapter| chapter.start);
        for pair in sorted.windows(2) {
            assert!(
                pair[0].end < pair[1].start,
                "{:?} overlaps {:?}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn chapter_names_are_unique() {
        for (index, chapter) in chapters().iter().enumerate() {
            assert!(
                chapters()
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.name != chapter.name)
            );
        }
    }
}
