use super::presets;

/// A single resolved CSS rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    /// Full CSS selector, possibly grouped, e.g. `.dealer-card:hover`
    pub selector: String,
    /// CSS declarations, e.g. `[("background-color", "#0073aa")]`
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    fn one(selector: &str, property: &str, value: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: vec![(property.to_string(), value.to_string())],
        }
    }

    fn many(selector: &str, declarations: Vec<(String, String)>) -> Self {
        Self {
            selector: selector.to_string(),
            declarations,
        }
    }
}

/// One entry of the override table: a style key, its documented default,
/// and the function producing the CSS rules for a non-default value.
pub struct StyleRule {
    pub key: &'static str,
    pub default: &'static str,
    pub emit: fn(&str) -> Vec<CssRule>,
}

/// Control keys handled outside the per-key diffing loop.
pub const INHERIT_THEME_KEY: &str = "inherit_theme_styles";
pub const INHERIT_THEME_DEFAULT: &str = "0";
pub const CUSTOM_CSS_KEY: &str = "custom_css";
pub const CUSTOM_CSS_DEFAULT: &str = "";

/// The override table, in emission order: colors, typography, spacing,
/// effects. Single source of truth for key names and documented defaults.
pub const STYLE_RULES: &[StyleRule] = &[
    // --- Colors ---
    StyleRule {
        key: "header_color",
        default: "#0073aa",
        emit: emit_header_color,
    },
    StyleRule {
        key: "card_background",
        default: "#ffffff",
        emit: emit_card_background,
    },
    StyleRule {
        key: "button_color",
        default: "#0073aa",
        emit: emit_button_color,
    },
    StyleRule {
        key: "text_color",
        default: "#333333",
        emit: emit_text_color,
    },
    StyleRule {
        key: "secondary_text_color",
        default: "#666666",
        emit: emit_secondary_text_color,
    },
    StyleRule {
        key: "border_color",
        default: "#dddddd",
        emit: emit_border_color,
    },
    StyleRule {
        key: "button_text_color",
        default: "#ffffff",
        emit: emit_button_text_color,
    },
    StyleRule {
        key: "icon_color",
        default: "#0073aa",
        emit: emit_icon_color,
    },
    StyleRule {
        key: "link_color",
        default: "#0073aa",
        emit: emit_link_color,
    },
    StyleRule {
        key: "hover_background",
        default: "#f9f9f9",
        emit: emit_hover_background,
    },
    // --- Typography ---
    StyleRule {
        key: "heading_font_size",
        default: "24",
        emit: emit_heading_font_size,
    },
    StyleRule {
        key: "body_font_size",
        default: "14",
        emit: emit_body_font_size,
    },
    StyleRule {
        key: "heading_font_weight",
        default: "bold",
        emit: emit_heading_font_weight,
    },
    StyleRule {
        key: "line_height",
        default: "1.6",
        emit: emit_line_height,
    },
    // --- Spacing ---
    StyleRule {
        key: "card_padding",
        default: "20",
        emit: emit_card_padding,
    },
    StyleRule {
        key: "card_margin",
        default: "15",
        emit: emit_card_margin,
    },
    StyleRule {
        key: "grid_gap",
        default: "20",
        emit: emit_grid_gap,
    },
    // --- Effects ---
    StyleRule {
        key: "border_radius",
        default: "8",
        emit: emit_border_radius,
    },
    StyleRule {
        key: "border_width",
        default: "1",
        emit: emit_border_width,
    },
    StyleRule {
        key: "border_style",
        default: "solid",
        emit: emit_border_style,
    },
    StyleRule {
        key: "box_shadow",
        default: "light",
        emit: emit_box_shadow,
    },
    StyleRule {
        key: "hover_effect",
        default: "lift",
        emit: emit_hover_effect,
    },
    StyleRule {
        key: "transition_speed",
        default: "0.3",
        emit: emit_transition_speed,
    },
    StyleRule {
        key: "icon_size",
        default: "24",
        emit: emit_icon_size,
    },
];

/// The documented default for a known style key, control keys included.
pub fn default_for(key: &str) -> Option<&'static str> {
    if key == INHERIT_THEME_KEY {
        return Some(INHERIT_THEME_DEFAULT);
    }
    if key == CUSTOM_CSS_KEY {
        return Some(CUSTOM_CSS_DEFAULT);
    }
    STYLE_RULES
        .iter()
        .find(|rule| rule.key == key)
        .map(|rule| rule.default)
}

pub fn is_known_key(key: &str) -> bool {
    default_for(key).is_some()
}

// --- Colors ---

fn emit_header_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card-header",
        "background-color",
        value,
    )]
}

fn emit_card_background(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "background-color", value)]
}

fn emit_button_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-website-button",
        "background-color",
        value,
    )]
}

fn emit_text_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "color", value)]
}

fn emit_secondary_text_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card .dealer-contact", "color", value)]
}

fn emit_border_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "border-color", value)]
}

fn emit_button_text_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-website-button", "color", value)]
}

fn emit_icon_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-service-icon.active", "color", value)]
}

fn emit_link_color(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card a", "color", value)]
}

fn emit_hover_background(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card:hover",
        "background-color",
        value,
    )]
}

// --- Typography ---

fn emit_heading_font_size(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card-header h3",
        "font-size",
        &px(value),
    )]
}

fn emit_body_font_size(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card-body", "font-size", &px(value))]
}

fn emit_heading_font_weight(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card-header h3", "font-weight", value)]
}

fn emit_line_height(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card-body", "line-height", value)]
}

// --- Spacing ---

fn emit_card_padding(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card-header, .dealer-card-body",
        "padding",
        &px(value),
    )]
}

fn emit_card_margin(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "margin-bottom", &px(value))]
}

fn emit_grid_gap(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-layout-grid", "gap", &px(value))]
}

// --- Effects ---

/// Fans out to the card, the card header (top corners only), and the
/// website button.
fn emit_border_radius(value: &str) -> Vec<CssRule> {
    let radius = px(value);
    vec![
        CssRule::one(".dealer-card", "border-radius", &radius),
        CssRule::one(
            ".dealer-card-header",
            "border-radius",
            &format!("{} {} 0 0", radius, radius),
        ),
        CssRule::one(".dealer-website-button", "border-radius", &radius),
    ]
}

fn emit_border_width(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "border-width", &px(value))]
}

fn emit_border_style(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(".dealer-card", "border-style", value)]
}

fn emit_box_shadow(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card",
        "box-shadow",
        presets::box_shadow(value),
    )]
}

fn emit_hover_effect(value: &str) -> Vec<CssRule> {
    let declarations = presets::hover_effect(value)
        .iter()
        .map(|(prop, val)| (prop.to_string(), val.to_string()))
        .collect();
    vec![CssRule::many(".dealer-card:hover", declarations)]
}

fn emit_transition_speed(value: &str) -> Vec<CssRule> {
    vec![CssRule::one(
        ".dealer-card, .dealer-website-button",
        "transition",
        &format!("all {}s ease", value),
    )]
}

fn emit_icon_size(value: &str) -> Vec<CssRule> {
    vec![CssRule::many(
        ".dealer-service-icon",
        vec![
            ("font-size".to_string(), px(value)),
            ("line-height".to_string(), "1".to_string()),
        ],
    )]
}

fn px(value: &str) -> String {
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_keys() {
        let mut seen = std::collections::HashSet::new();
        for rule in STYLE_RULES {
            assert!(seen.insert(rule.key), "duplicate key {}", rule.key);
        }
    }

    #[test]
    fn default_lookup_covers_control_keys() {
        assert_eq!(default_for("inherit_theme_styles"), Some("0"));
        assert_eq!(default_for("custom_css"), Some(""));
        assert_eq!(default_for("grid_gap"), Some("20"));
        assert_eq!(default_for("no_such_key"), None);
    }

    #[test]
    fn border_radius_fans_out_to_three_rules() {
        let rules = emit_border_radius("10");
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].selector, ".dealer-card");
        assert_eq!(rules[1].selector, ".dealer-card-header");
        assert_eq!(
            rules[1].declarations[0],
            ("border-radius".to_string(), "10px 10px 0 0".to_string())
        );
        assert_eq!(rules[2].selector, ".dealer-website-button");
    }
}
