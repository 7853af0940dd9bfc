use serde::{Deserialize, Serialize};

/// A boolean-ish service marker as stored by the external data layer:
/// `"1"`/`true`/`1` mean set, everything else (including absence) means unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl Flag {
    pub fn set() -> Self {
        Flag::Bool(true)
    }

    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Number(n) => *n != 0,
            Flag::Text(t) => t == "1" || t.eq_ignore_ascii_case("true"),
        }
    }
}

impl Default for Flag {
    fn default() -> Self {
        Flag::Text(String::new())
    }
}

/// A dealer entry as projected from the external store. Every field is
/// independently optional; an empty field simply omits its markup fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealerRecord {
    pub company_name: String,
    /// Multi-line postal address; line breaks are preserved in the output.
    pub company_address: String,
    pub company_phone: String,
    pub website: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Explicit map URL; takes precedence over coordinates and address.
    pub custom_map_link: String,
    pub docks: Flag,
    pub lifts: Flag,
    pub trailers: Flag,
    pub sub_locations: Vec<SubLocation>,
}

impl DealerRecord {
    /// The three service offerings in display order, paired with whether
    /// each is set on this record.
    pub fn services(&self) -> [(&'static str, bool); 3] {
        [
            ("Docks", self.docks.is_set()),
            ("Lifts", self.lifts.is_set()),
            ("Trailers", self.trailers.is_set()),
        ]
    }
}

/// A secondary address/contact belonging to a parent dealer. Carries no
/// identity beyond its position in the owning dealer's sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubLocation {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub docks: Flag,
    pub lifts: Flag,
    pub trailers: Flag,
}

impl SubLocation {
    pub fn services(&self) -> [(&'static str, bool); 3] {
        [
            ("Docks", self.docks.is_set()),
            ("Lifts", self.lifts.is_set()),
            ("Trailers", self.trailers.is_set()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_truthiness() {
        assert!(Flag::Bool(true).is_set());
        assert!(Flag::Number(1).is_set());
        assert!(Flag::Text("1".to_string()).is_set());
        assert!(Flag::Text("true".to_string()).is_set());

        assert!(!Flag::Bool(false).is_set());
        assert!(!Flag::Number(0).is_set());
        assert!(!Flag::Text(String::new()).is_set());
        assert!(!Flag::Text("0".to_string()).is_set());
        assert!(!Flag::default().is_set());
    }

    #[test]
    fn dealer_deserializes_mixed_flag_scalars() {
        let yaml = r#"
company_name: "Harbor Supply Co."
docks: "1"
lifts: true
trailers: ""
"#;
        let dealer: DealerRecord = serde_yaml::from_str(yaml).unwrap();
        assert!(dealer.docks.is_set());
        assert!(dealer.lifts.is_set());
        assert!(!dealer.trailers.is_set());
        assert!(dealer.sub_locations.is_empty());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let dealer: DealerRecord = serde_yaml::from_str("company_name: Acme").unwrap();
        assert_eq!(dealer.company_name, "Acme");
        assert!(dealer.company_address.is_empty());
        assert!(dealer.latitude.is_none());
        assert_eq!(dealer.services().iter().filter(|(_, set)| *set).count(), 0);
    }
}
