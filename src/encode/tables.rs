//! Fixed category tables.
//!
//! Each table maps a label to the integer code the model saw at training time.
//! Entries keep the order in which the form offers them, which is not code order.

use crate::domain::Category;

/// Immutable label → code mapping for one categorical feature.
#[derive(Debug)]
pub struct CategoryTable {
    category: Category,
    entries: &'static [(&'static str, u8)],
}

impl CategoryTable {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Code for an exact (case-sensitive) label.
    pub fn code(&self, label: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, code)| *code)
    }

    pub fn entries(&self) -> &'static [(&'static str, u8)] {
        self.entries
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(label, _)| *label)
    }

    pub fn label_at(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).map(|(label, _)| *label)
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(known, _)| *known == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub static WORKCLASS: CategoryTable = CategoryTable {
    category: Category::Workclass,
    entries: &[
        ("Private", 3),
        ("Self-emp-not-inc", 5),
        ("Local-gov", 1),
        ("State-gov", 2),
        ("Without-pay", 6),
        ("Self-emp-inc", 4),
        ("Federal-gov", 0),
    ],
};

pub static EDUCATION: CategoryTable = CategoryTable {
    category: Category::Education,
    entries: &[
        ("10th", 6),
        ("11th", 7),
        ("12th", 8),
        ("HS-grad", 9),
        ("Some-college", 10),
        ("Assoc-acdm", 11),
        ("Assoc-voc", 12),
        ("Bachelors", 13),
        ("Masters", 14),
        ("Doctorate", 15),
        ("Prof-school", 16),
    ],
};

pub static MARITAL_STATUS: CategoryTable = CategoryTable {
    category: Category::MaritalStatus,
    entries: &[
        ("Never-married", 2),
        ("Married-civ-spouse", 4),
        ("Divorced", 0),
        ("Separated", 5),
        ("Married-spouse-absent", 6),
        ("Widowed", 3),
        ("Married-AF-spouse", 1),
    ],
};

pub static OCCUPATION: CategoryTable = CategoryTable {
    category: Category::Occupation,
    entries: &[
        ("Prof-specialty", 8),
        ("Craft-repair", 2),
        ("Exec-managerial", 1),
        ("Adm-clerical", 0),
        ("Sales", 9),
        ("Tech-support", 6),
        ("Other-service", 5),
        ("Machine-op-inspct", 7),
        ("Transport-moving", 11),
        ("Handlers-cleaners", 4),
        ("Farming-fishing", 10),
        ("Priv-house-serv", 3),
    ],
};

pub static GENDER: CategoryTable = CategoryTable {
    category: Category::Gender,
    entries: &[("Male", 1), ("Female", 0)],
};

pub static NATIVE_COUNTRY: CategoryTable = CategoryTable {
    category: Category::NativeCountry,
    entries: &[
        ("United-States", 39),
        ("Mexico", 0),
        ("Philippines", 26),
        ("Germany", 30),
        ("Canada", 11),
        ("Cuba", 2),
        ("India", 19),
        ("Puerto-Rico", 33),
        ("El-Salvador", 9),
        ("South", 35),
        ("China", 3),
        ("Columbia", 5),
        ("Jamaica", 23),
        ("Japan", 24),
        ("Italy", 22),
        ("Dominican-Republic", 8),
        ("Vietnam", 40),
        ("Haiti", 31),
        ("Guatemala", 4),
        ("Honduras", 6),
        ("Trinadad&Tobago", 36),
        ("Laos", 14),
        ("Peru", 20),
        ("Cambodia", 12),
        ("Iran", 29),
        ("Nicaragua", 13),
        ("Poland", 27),
        ("Portugal", 32),
        ("Ecuador", 7),
        ("Scotland", 21),
        ("France", 10),
        ("Thailand", 37),
        ("England", 1),
        ("Yugoslavia", 17),
        ("Taiwan", 28),
        ("Outlying-US(Guam-USVI-etc)", 38),
        ("Hong", 41),
        ("Greece", 34),
        ("Hungary", 25),
        ("Ireland", 18),
        ("Holand-Netherlands", 15),
        ("Other", 16),
    ],
};

/// The table for a categorical feature.
pub fn table(category: Category) -> &'static CategoryTable {
    match category {
        Category::Workclass => &WORKCLASS,
        Category::Education => &EDUCATION,
        Category::MaritalStatus => &MARITAL_STATUS,
        Category::Occupation => &OCCUPATION,
        Category::Gender => &GENDER,
        Category::NativeCountry => &NATIVE_COUNTRY,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn codes_match_published_values() {
        assert_eq!(WORKCLASS.code("Private"), Some(3));
        assert_eq!(WORKCLASS.code("Federal-gov"), Some(0));
        assert_eq!(EDUCATION.code("Bachelors"), Some(13));
        assert_eq!(EDUCATION.code("Prof-school"), Some(16));
        assert_eq!(MARITAL_STATUS.code("Married-civ-spouse"), Some(4));
        assert_eq!(OCCUPATION.code("Transport-moving"), Some(11));
        assert_eq!(GENDER.code("Female"), Some(0));
        assert_eq!(GENDER.code("Male"), Some(1));
        assert_eq!(NATIVE_COUNTRY.code("United-States"), Some(39));
        assert_eq!(NATIVE_COUNTRY.code("Hong"), Some(41));
        assert_eq!(NATIVE_COUNTRY.code("Outlying-US(Guam-USVI-etc)"), Some(38));
    }

    #[test]
    fn every_label_has_its_published_code() {
        let published: [(&CategoryTable, &[(&str, u8)]); 6] = [
            (
                &WORKCLASS,
                &[
                    ("Private", 3),
                    ("Self-emp-not-inc", 5),
                    ("Local-gov", 1),
                    ("State-gov", 2),
                    ("Without-pay", 6),
                    ("Self-emp-inc", 4),
                    ("Federal-gov", 0),
                ],
            ),
            (
                &EDUCATION,
                &[
                    ("10th", 6),
                    ("11th", 7),
                    ("12th", 8),
                    ("HS-grad", 9),
                    ("Some-college", 10),
                    ("Assoc-acdm", 11),
                    ("Assoc-voc", 12),
                    ("Bachelors", 13),
                    ("Masters", 14),
                    ("Doctorate", 15),
                    ("Prof-school", 16),
                ],
            ),
            (
                &MARITAL_STATUS,
                &[
                    ("Never-married", 2),
                    ("Married-civ-spouse", 4),
                    ("Divorced", 0),
                    ("Separated", 5),
                    ("Married-spouse-absent", 6),
                    ("Widowed", 3),
                    ("Married-AF-spouse", 1),
                ],
            ),
            (
                &OCCUPATION,
                &[
                    ("Prof-specialty", 8),
                    ("Craft-repair", 2),
                    ("Exec-managerial", 1),
                    ("Adm-clerical", 0),
                    ("Sales", 9),
                    ("Tech-support", 6),
                    ("Other-service", 5),
                    ("Machine-op-inspct", 7),
                    ("Transport-moving", 11),
                    ("Handlers-cleaners", 4),
                    ("Farming-fishing", 10),
                    ("Priv-house-serv", 3),
                ],
            ),
            (
                &GENDER,
                &[
                    ("Male", 1),
                    ("Female", 0),
                ],
            ),
            (
                &NATIVE_COUNTRY,
                &[
                    ("United-States", 39),
                    ("Mexico", 0),
                    ("Philippines", 26),
                    ("Germany", 30),
                    ("Canada", 11),
                    ("Cuba", 2),
                    ("India", 19),
                    ("Puerto-Rico", 33),
                    ("El-Salvador", 9),
                    ("South", 35),
                    ("China", 3),
                    ("Columbia", 5),
                    ("Jamaica", 23),
                    ("Japan", 24),
                    ("Italy", 22),
                    ("Dominican-Republic", 8),
                    ("Vietnam", 40),
                    ("Haiti", 31),
                    ("Guatemala", 4),
                    ("Honduras", 6),
                    ("Trinadad&Tobago", 36),
                    ("Laos", 14),
                    ("Peru", 20),
                    ("Cambodia", 12),
                    ("Iran", 29),
                    ("Nicaragua", 13),
                    ("Poland", 27),
                    ("Portugal", 32),
                    ("Ecuador", 7),
                    ("Scotland", 21),
                    ("France", 10),
                    ("Thailand", 37),
                    ("England", 1),
                    ("Yugoslavia", 17),
                    ("Taiwan", 28),
                    ("Outlying-US(Guam-USVI-etc)", 38),
                    ("Hong", 41),
                    ("Greece", 34),
                    ("Hungary", 25),
                    ("Ireland", 18),
                    ("Holand-Netherlands", 15),
                    ("Other", 16),
                ],
            ),
        ];

        for (table, expected) in published {
            let mut actual = table.entries().to_vec();
            let mut expected = expected.to_vec();
            actual.sort_unstable();
            expected.sort_unstable();
            assert_eq!(actual, expected, "{:?}", table.category());
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(WORKCLASS.code("private"), None);
        assert_eq!(WORKCLASS.code(" Private"), None);
        assert_eq!(WORKCLASS.code("Retired"), None);
    }

    #[test]
    fn every_table_has_unique_labels_and_codes() {
        for category in Category::ALL {
            let t = table(category);
            assert_eq!(t.category(), category);
            assert!(!t.is_empty());

            let labels: HashSet<_> = t.labels().collect();
            let codes: HashSet<_> = t.entries().iter().map(|(_, c)| *c).collect();
            assert_eq!(labels.len(), t.len(), "duplicate label in {category:?}");
            assert_eq!(codes.len(), t.len(), "duplicate code in {category:?}");
        }
    }

    #[test]
    fn gapless_tables_cover_zero_to_len() {
        // Education codes start at 6 (lower grades are not offered); the rest
        // are dense label encodings.
        for category in Category::ALL {
            if category == Category::Education {
                continue;
            }
            let t = table(category);
            let mut codes: Vec<u8> = t.entries().iter().map(|(_, c)| *c).collect();
            codes.sort_unstable();
            let expected: Vec<u8> = (0..t.len() as u8).collect();
            assert_eq!(codes, expected, "{category:?}");
        }
    }

    #[test]
    fn position_and_label_at_agree() {
        let idx = NATIVE_COUNTRY.position("Canada").unwrap();
        assert_eq!(NATIVE_COUNTRY.label_at(idx), Some("Canada"));
        assert_eq!(NATIVE_COUNTRY.len(), 42);
    }
}
