/// Theme-relative override block emitted when `inherit_theme_styles` is on.
///
/// References the site theme's palette custom properties with hard-coded
/// fallbacks; covers the card header, the website button (with hover
/// opacity), and the card body. Per-key overrides are ignored entirely in
/// this mode.
pub const THEME_INHERIT_STYLES: &str = ".dealer-card-header{background-color:var(--theme-palette-primary,#0073aa);color:var(--theme-palette-background,#ffffff);}\
.dealer-website-button{background-color:var(--theme-palette-primary,#0073aa);color:var(--theme-palette-background,#ffffff);}\
.dealer-website-button:hover{opacity:0.8;}\
.dealer-card{background-color:var(--theme-palette-background,#ffffff);color:var(--theme-palette-text,#333333);}";

/// Builds a palette token reference with a fallback color.
pub fn palette_var(token: &str, fallback: &str) -> String {
    format!("var(--theme-palette-{}, {})", token, fallback)
}
