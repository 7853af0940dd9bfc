use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stylesheet::rules;

/// One of the three structural presentations for a set of dealers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Grid,
    List,
    Compact,
}

impl Layout {
    /// Resolves a requested layout name. Unknown names fall back to `Grid`,
    /// never an error.
    pub fn resolve(name: &str) -> Layout {
        match name {
            "grid" => Layout::Grid,
            "list" => Layout::List,
            "compact" => Layout::Compact,
            _ => Layout::Grid,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Layout::Grid => "grid",
            Layout::List => "list",
            Layout::Compact => "compact",
        }
    }
}

/// Presentation configuration read once per page load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub use_icons: bool,
    pub default_layout: Layout,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            use_icons: true,
            default_layout: Layout::Grid,
        }
    }
}

/// A stored style value of any scalar shape. The external store keeps
/// everything as strings; YAML authors write numbers and booleans directly,
/// so all scalar shapes stringify on ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SettingValue {
    fn into_stored(self) -> String {
        match self {
            SettingValue::Bool(true) => "1".to_string(),
            SettingValue::Bool(false) => "0".to_string(),
            SettingValue::Int(n) => n.to_string(),
            SettingValue::Float(f) => f.to_string(),
            SettingValue::Text(t) => t,
        }
    }
}

/// Flat mapping of style option keys to stored values. Reads fall back to
/// the documented defaults in [`rules::STYLE_RULES`]; only stored values
/// that differ from those defaults produce CSS output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, SettingValue>",
    into = "BTreeMap<String, String>"
)]
pub struct StyleSettings {
    values: BTreeMap<String, String>,
}

impl StyleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under `key`, replacing any previous one.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// The stored value, if one was saved for `key`.
    pub fn stored(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The effective value: stored if present, else the documented default.
    pub fn get(&self, key: &str) -> &str {
        self.stored(key)
            .or_else(|| rules::default_for(key))
            .unwrap_or("")
    }

    /// True when no stored value overrides the documented default for `key`.
    pub fn is_default(&self, key: &str) -> bool {
        match (self.stored(key), rules::default_for(key)) {
            (Some(stored), Some(default)) => stored == default,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    pub fn inherit_theme_styles(&self) -> bool {
        is_truthy(self.get(rules::INHERIT_THEME_KEY))
    }

    pub fn custom_css(&self) -> &str {
        self.stored(rules::CUSTOM_CSS_KEY).unwrap_or("")
    }

    /// Iterates over stored entries (not defaults), for validation.
    pub fn stored_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, SettingValue>> for StyleSettings {
    fn from(map: BTreeMap<String, SettingValue>) -> Self {
        Self {
            values: map
                .into_iter()
                .map(|(k, v)| (k, v.into_stored()))
                .collect(),
        }
    }
}

impl From<StyleSettings> for BTreeMap<String, String> {
    fn from(settings: StyleSettings) -> Self {
        settings.values
    }
}

/// Stored-value truthiness: the external store writes `"1"`/`"0"` but older
/// rows may carry `"true"`/`"yes"`.
pub(crate) fn is_truthy(value: &str) -> bool {
    !matches!(value, "" | "0" | "false" | "no")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_grid() {
        assert_eq!(Layout::resolve("list"), Layout::List);
        assert_eq!(Layout::resolve("compact"), Layout::Compact);
        assert_eq!(Layout::resolve("carousel"), Layout::Grid);
        assert_eq!(Layout::resolve(""), Layout::Grid);
    }

    #[test]
    fn get_falls_back_to_documented_default() {
        let settings = StyleSettings::new();
        assert_eq!(settings.get("header_color"), "#0073aa");
        assert_eq!(settings.get("box_shadow"), "light");
        assert!(settings.is_default("header_color"));
    }

    #[test]
    fn stored_value_overrides_default() {
        let mut settings = StyleSettings::new();
        settings.set("header_color", "#123456");
        assert_eq!(settings.get("header_color"), "#123456");
        assert!(!settings.is_default("header_color"));
    }

    #[test]
    fn storing_the_default_still_counts_as_default() {
        let mut settings = StyleSettings::new();
        settings.set("card_padding", "20");
        assert!(settings.is_default("card_padding"));
    }

    #[test]
    fn yaml_scalars_stringify() {
        let yaml = r##"
heading_font_size: 32
transition_speed: 0.5
inherit_theme_styles: true
header_color: "#222222"
"##;
        let settings: StyleSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.get("heading_font_size"), "32");
        assert_eq!(settings.get("transition_speed"), "0.5");
        assert!(settings.inherit_theme_styles());
        assert_eq!(settings.get("header_color"), "#222222");
    }

    #[test]
    fn truthiness() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("yes"));
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
    }
}
