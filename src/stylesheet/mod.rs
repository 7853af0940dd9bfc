//! # Settings-to-CSS compiler
//!
//! Turns a flat style-options mapping into an additive CSS override block.
//! Only declarations whose stored value differs from the documented default
//! are emitted; with theme inheritance on, a fixed theme-relative block is
//! returned instead and all per-key diffing is skipped.
//!
//! ## Usage
//! ```ignore
//! let css = dealer_directory::compile_stylesheet(&settings);
//! // inject `css` after the base stylesheet in <style>
//! ```

pub mod presets;
pub mod rules;

pub use rules::{CssRule, StyleRule, STYLE_RULES};

use crate::settings::StyleSettings;
use crate::theme::THEME_INHERIT_STYLES;

/// The static default stylesheet the override block layers on. Values here
/// mirror the documented defaults in [`rules::STYLE_RULES`].
pub const BASE_STYLES: &str = ".dealer-directory{margin:0 auto;}\
.dealer-layout-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:20px;}\
.dealer-layout-list{display:flex;flex-direction:column;}\
.dealer-layout-compact{display:flex;flex-direction:column;}\
.dealer-card{background-color:#ffffff;color:#333333;border:1px solid #dddddd;border-radius:8px;margin-bottom:15px;box-shadow:0 1px 3px rgba(0,0,0,0.1);transition:all 0.3s ease;overflow:hidden;}\
.dealer-card:hover{background-color:#f9f9f9;transform:translateY(-4px);}\
.dealer-card-header{background-color:#0073aa;padding:20px;border-radius:8px 8px 0 0;}\
.dealer-card-header h3{color:#ffffff;font-size:24px;font-weight:bold;margin:0;}\
.dealer-card-body{padding:20px;font-size:14px;line-height:1.6;}\
.dealer-card a{color:#0073aa;}\
.dealer-contact{color:#666666;}\
.dealer-website-button{display:inline-block;background-color:#0073aa;color:#ffffff;border-radius:8px;padding:8px 16px;text-decoration:none;transition:all 0.3s ease;}\
.dealer-services{display:flex;gap:8px;}\
.dealer-service-icon{font-size:24px;line-height:1;opacity:0.25;}\
.dealer-service-icon.active{color:#0073aa;opacity:1;}\
.dealer-services-list{margin:0;padding-left:20px;}\
.dealer-no-services{color:#666666;font-style:italic;}\
.dealer-sub-locations{border-top:1px solid #dddddd;margin-top:12px;padding-top:12px;}\
.dealer-sub-location{margin-bottom:10px;}\
.dealer-row{display:flex;flex-wrap:wrap;gap:16px;align-items:flex-start;}\
.dealer-row-col{flex:1 1 200px;}\
.dealer-compact-item{padding:10px 0;border-radius:0;border-width:0 0 1px 0;box-shadow:none;}\
.dealer-compact-item:hover{transform:none;}\
.dealer-compact-main{display:flex;gap:12px;align-items:baseline;}\
.dealer-compact-main h3{margin:0;font-size:16px;}\
.dealer-no-results{color:#666666;font-style:italic;}";

/// Compiles the style settings into an override CSS block.
///
/// Returns an empty string when no stored value differs from its documented
/// default, no custom CSS is set, and theme inheritance is off.
pub fn compile_stylesheet(settings: &StyleSettings) -> String {
    if settings.inherit_theme_styles() {
        return THEME_INHERIT_STYLES.to_string();
    }

    let mut emitted: Vec<CssRule> = Vec::new();
    for rule in STYLE_RULES {
        if let Some(stored) = settings.stored(rule.key) {
            if stored != rule.default {
                emitted.extend((rule.emit)(stored));
            }
        }
    }

    let mut css = render_css(&emitted);

    let custom = settings.custom_css();
    if !custom.trim().is_empty() {
        css.push_str("/* custom css */\n");
        css.push_str(custom);
        if !custom.ends_with('\n') {
            css.push('\n');
        }
    }

    css
}

fn render_css(emitted: &[CssRule]) -> String {
    let mut css = String::new();
    for rule in emitted {
        css.push_str(&rule.selector);
        css.push_str(" {");
        for (prop, val) in &rule.declarations {
            css.push(' ');
            css.push_str(prop);
            css.push_str(": ");
            css.push_str(val);
            css.push(';');
        }
        css.push_str(" }\n");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_defaults_compile_to_empty() {
        assert_eq!(compile_stylesheet(&StyleSettings::new()), "");
    }

    #[test]
    fn storing_default_values_emits_nothing() {
        let mut settings = StyleSettings::new();
        settings.set("header_color", "#0073aa");
        settings.set("box_shadow", "light");
        assert_eq!(compile_stylesheet(&settings), "");
    }

    #[test]
    fn single_override_emits_single_rule() {
        let mut settings = StyleSettings::new();
        settings.set("card_background", "#000000");
        assert_eq!(
            compile_stylesheet(&settings),
            ".dealer-card { background-color: #000000; }\n"
        );
    }

    #[test]
    fn inherit_theme_returns_fixed_block() {
        let mut settings = StyleSettings::new();
        settings.set("inherit_theme_styles", "1");
        settings.set("card_background", "#000000");
        assert_eq!(compile_stylesheet(&settings), THEME_INHERIT_STYLES);
    }

    #[test]
    fn custom_css_fires_without_other_overrides() {
        let mut settings = StyleSettings::new();
        settings.set("custom_css", ".dealer-card { outline: 1px dashed red; }");
        let css = compile_stylesheet(&settings);
        assert!(css.starts_with("/* custom css */\n"));
        assert!(css.contains("outline: 1px dashed red"));
        assert!(css.ends_with('\n'));
    }
}
