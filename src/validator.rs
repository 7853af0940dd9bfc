//! Opt-in validation of settings and dealer records. The render and
//! compile paths never call into this module: they fall back silently on
//! anything unrecognised. Validation exists for the CLI and for embedders
//! that want to reject bad configuration at the boundary.

use regex::Regex;
use std::sync::OnceLock;

use crate::dealer::DealerRecord;
use crate::error::{DirectoryError, DirectoryResult};
use crate::settings::StyleSettings;
use crate::stylesheet::rules;

const COLOR_KEYS: &[&str] = &[
    "header_color",
    "card_background",
    "button_color",
    "text_color",
    "secondary_text_color",
    "border_color",
    "button_text_color",
    "icon_color",
    "link_color",
    "hover_background",
];

const PIXEL_KEYS: &[(&str, f64)] = &[
    ("heading_font_size", 72.0),
    ("body_font_size", 72.0),
    ("card_padding", 100.0),
    ("card_margin", 100.0),
    ("grid_gap", 100.0),
    ("border_radius", 100.0),
    ("border_width", 20.0),
    ("icon_size", 64.0),
];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "none"];
const SHADOW_LEVELS: &[&str] = &["none", "light", "medium", "heavy"];
const HOVER_LEVELS: &[&str] = &["none", "lift", "scale", "shadow"];

pub fn validate_color(value: &str, _property: &str) -> DirectoryResult<()> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

    const NAMED_COLORS: &[&str] = &["white", "black", "transparent", "inherit"];

    if hex_regex.is_match(value) || NAMED_COLORS.contains(&value) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidColor {
            value: value.to_string(),
            reason: format!(
                "must be a 6-digit hex color (e.g., #0073aa) or one of: {}",
                NAMED_COLORS.join(", ")
            ),
        })
    }
}

fn validate_number(property: &str, value: &str, max: f64) -> DirectoryResult<()> {
    match value.parse::<f64>() {
        Ok(n) if (0.0..=max).contains(&n) => Ok(()),
        _ => Err(DirectoryError::ValueOutOfRange {
            property: property.to_string(),
            value: value.to_string(),
            range: format!("0-{}", max),
        }),
    }
}

fn validate_level(property: &str, value: &str, levels: &[&str]) -> DirectoryResult<()> {
    if levels.contains(&value) {
        Ok(())
    } else {
        Err(DirectoryError::InvalidEnum {
            property: property.to_string(),
            value: value.to_string(),
            expected: levels.join(", "),
        })
    }
}

/// Validates every stored style entry: known key, well-formed color,
/// in-range number, or documented level, as appropriate.
pub fn validate_settings(settings: &StyleSettings) -> DirectoryResult<()> {
    for (key, value) in settings.stored_entries() {
        if !rules::is_known_key(key) {
            return Err(DirectoryError::ValidationError(format!(
                "unknown style setting '{}'",
                key
            )));
        }
        if COLOR_KEYS.contains(&key) {
            validate_color(value, key)?;
            continue;
        }
        if let Some((_, max)) = PIXEL_KEYS.iter().find(|(k, _)| *k == key) {
            validate_number(key, value, *max)?;
            continue;
        }
        match key {
            "line_height" => validate_number(key, value, 3.0)?,
            "transition_speed" => validate_number(key, value, 10.0)?,
            "heading_font_weight" => {
                // numeric weights or the two named values
                if !matches!(value, "normal" | "bold")
                    && value.parse::<u16>().map_or(true, |w| {
                        !(100..=900).contains(&w) || w % 100 != 0
                    })
                {
                    return Err(DirectoryError::InvalidEnum {
                        property: key.to_string(),
                        value: value.to_string(),
                        expected: "normal, bold, 100-900 in increments of 100".to_string(),
                    });
                }
            }
            "border_style" => validate_level(key, value, BORDER_STYLES)?,
            "box_shadow" => validate_level(key, value, SHADOW_LEVELS)?,
            "hover_effect" => validate_level(key, value, HOVER_LEVELS)?,
            _ => {}
        }
    }
    Ok(())
}

/// Validates a dealer record: the company name is the one required field;
/// coordinates must be in range when present.
pub fn validate_dealer(dealer: &DealerRecord) -> DirectoryResult<()> {
    if dealer.company_name.trim().is_empty() {
        return Err(DirectoryError::MissingField {
            record: "dealer".to_string(),
            field: "company_name".to_string(),
        });
    }
    if let Some(lat) = dealer.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DirectoryError::ValueOutOfRange {
                property: "latitude".to_string(),
                value: lat.to_string(),
                range: "-90 to 90".to_string(),
            });
        }
    }
    if let Some(lng) = dealer.longitude {
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DirectoryError::ValueOutOfRange {
                property: "longitude".to_string(),
                value: lng.to_string(),
                range: "-180 to 180".to_string(),
            });
        }
    }
    Ok(())
}
