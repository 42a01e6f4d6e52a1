//! Data models for congress lookups

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `members` columns that never appear in the biography table
pub const EXCLUDED_BIO_FIELDS: [&str; 5] = ["bioguide_id", "image", "fec_id", "bioname", "icpsr"];

/// Title stored for bills that have no title
pub const NO_TITLE_SENTINEL: &str = "None";

/// Legislator row as read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Legislator {
    pub bioguide_id: String,
    pub full_name: String,
    pub state_abbrev: String,
    pub district_code: Option<i64>,
    pub party: Option<String>,
    pub left_right_ideology: Option<f64>,
    pub image: Option<String>,
    pub bioname: Option<String>,
}

impl Legislator {
    /// Dropdown label, e.g. `Jane Doe (CA-12)`.
    ///
    /// District `0` marks senators and at-large seats, which show the state only.
    pub fn display_label(&self) -> String {
        match self.district_code.unwrap_or(0) {
            0 => format!("{} ({})", self.full_name, self.state_abbrev),
            district => format!("{} ({}-{})", self.full_name, self.state_abbrev, district),
        }
    }

    pub fn to_option(&self) -> MemberOption {
        MemberOption {
            label: self.display_label(),
            value: self.bioguide_id.clone(),
        }
    }
}

/// One entry of the selection dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberOption {
    pub label: String,
    pub value: String,
}

/// One label/value line of a transposed biography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioField {
    pub label: String,
    pub value: String,
}

/// Biography of a single legislator, one field per displayed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biography {
    pub legislator_id: String,
    pub fields: Vec<BioField>,
}

impl Biography {
    /// Transposes `(column, value)` pairs into biography fields, dropping
    /// identifier, image and internal columns. Column order is preserved.
    pub fn from_columns<I>(legislator_id: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let fields = columns
            .into_iter()
            .filter(|(label, _)| !is_excluded_bio_field(label))
            .map(|(label, value)| BioField { label, value })
            .collect();

        Self {
            legislator_id: legislator_id.into(),
            fields,
        }
    }
}

/// Column names compare case-insensitively, matching SQL identifiers.
pub fn is_excluded_bio_field(column: &str) -> bool {
    EXCLUDED_BIO_FIELDS
        .iter()
        .any(|excluded| excluded.eq_ignore_ascii_case(column))
}

/// Sponsored bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub bill_title: String,
    #[serde(rename = "introducedDate")]
    pub introduced_date: Option<String>,
    pub url: Option<String>,
}

/// Agreement between the selected legislator and one comparison partner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct VoteComparison {
    pub comparison_member: String,
    pub agree: f64,
    pub left_right_ideology: Option<f64>,
    pub party: Option<String>,
}

/// tf-idf weight of a keyword or phrase in a legislator's bills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct KeywordScore {
    pub keyword: String,
    pub tf_idf: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn legislator(district: Option<i64>) -> Legislator {
        Legislator {
            bioguide_id: "N000188".to_string(),
            full_name: "Donald Norcross".to_string(),
            state_abbrev: "NJ".to_string(),
            district_code: district,
            party: Some("Democrat".to_string()),
            left_right_ideology: Some(-0.38),
            image: None,
            bioname: Some("NORCROSS, Donald".to_string()),
        }
    }

    #[test]
    fn label_includes_district() {
        assert_eq!(legislator(Some(1)).display_label(), "Donald Norcross (NJ-1)");
        assert_eq!(legislator(Some(10)).display_label(), "Donald Norcross (NJ-10)");
    }

    #[test]
    fn label_drops_zero_district() {
        assert_eq!(legislator(Some(0)).display_label(), "Donald Norcross (NJ)");
        assert_eq!(legislator(None).display_label(), "Donald Norcross (NJ)");
    }

    #[test]
    fn option_uses_bioguide_id_as_value() {
        let option = legislator(Some(1)).to_option();
        assert_eq!(
            option,
            MemberOption {
                label: "Donald Norcross (NJ-1)".to_string(),
                value: "N000188".to_string(),
            }
        );
    }

    #[test]
    fn biography_strips_internal_columns_in_order() {
        let columns = vec![
            ("bioguide_id".to_string(), "N000188".to_string()),
            ("full_name".to_string(), "Donald Norcross".to_string()),
            ("image".to_string(), "https://example.org/n.jpg".to_string()),
            ("state_abbrev".to_string(), "NJ".to_string()),
            ("ICPSR".to_string(), "21559".to_string()),
            ("party".to_string(), "Democrat".to_string()),
        ];

        let bio = Biography::from_columns("N000188", columns);

        assert_eq!(
            bio.fields,
            vec![
                BioField {
                    label: "full_name".to_string(),
                    value: "Donald Norcross".to_string()
                },
                BioField {
                    label: "state_abbrev".to_string(),
                    value: "NJ".to_string()
                },
                BioField {
                    label: "party".to_string(),
                    value: "Democrat".to_string()
                },
            ]
        );
    }

    #[test]
    fn bill_serializes_original_date_key() {
        let bill = Bill {
            bill_title: "Apprenticeship Act".to_string(),
            introduced_date: Some("2021-02-05".to_string()),
            url: None,
        };
        let json = serde_json::to_value(&bill).unwrap();
        assert_eq!(json["introducedDate"], "2021-02-05");
    }

    fn column_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("bioguide_id".to_string()),
            Just("image".to_string()),
            Just("fec_id".to_string()),
            Just("bioname".to_string()),
            Just("icpsr".to_string()),
            "[a-z_]{1,20}",
        ]
    }

    proptest! {
        #[test]
        fn biography_never_exposes_excluded_fields(
            columns in prop::collection::vec((column_name(), "[ -~]{0,20}"), 0..20)
        ) {
            let bio = Biography::from_columns("X000001", columns.clone());

            for field in &bio.fields {
                prop_assert!(!is_excluded_bio_field(&field.label));
            }
            let kept = columns.iter().filter(|(c, _)| !is_excluded_bio_field(c)).count();
            prop_assert_eq!(bio.fields.len(), kept);
        }

        #[test]
        fn label_never_ends_with_zero_district(
            name in "[A-Z][a-z]{1,10} [A-Z][a-z]{1,10}",
            state in "[A-Z]{2}",
            district in 0i64..60,
        ) {
            let mut member = legislator(Some(district));
            member.full_name = name.clone();
            member.state_abbrev = state.clone();

            let label = member.display_label();
            prop_assert!(label.starts_with(&name));
            prop_assert!(!label.ends_with("-0)"));
            if district == 0 {
                prop_assert_eq!(label, format!("{} ({})", name, state));
            }
        }
    }
}
