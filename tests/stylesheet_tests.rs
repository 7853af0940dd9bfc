use dealer_directory::{
    compile_stylesheet, load_directory, StyleSettings, BASE_STYLES, THEME_INHERIT_STYLES,
};
use pretty_assertions::assert_eq;

#[test]
fn all_defaults_compile_to_empty_string() {
    let style: StyleSettings = serde_yaml::from_str("{}").unwrap();
    assert_eq!(compile_stylesheet(&style), "");
}

#[test]
fn explicit_default_values_compile_to_empty_string() {
    let yaml = r##"
header_color: "#0073aa"
heading_font_size: 24
line_height: 1.6
box_shadow: light
inherit_theme_styles: 0
custom_css: ""
"##;
    let style: StyleSettings = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(compile_stylesheet(&style), "");
}

#[test]
fn theme_inheritance_ignores_every_other_override() {
    let yaml = r##"
inherit_theme_styles: 1
header_color: "#000000"
card_background: "#111111"
custom_css: ".dealer-card { display: none; }"
"##;
    let style: StyleSettings = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(compile_stylesheet(&style), THEME_INHERIT_STYLES);
}

#[test]
fn border_radius_fans_out_to_card_header_and_button() {
    let mut style = StyleSettings::new();
    style.set("border_radius", "12");
    let css = compile_stylesheet(&style);
    assert_eq!(
        css,
        ".dealer-card { border-radius: 12px; }\n\
         .dealer-card-header { border-radius: 12px 12px 0 0; }\n\
         .dealer-website-button { border-radius: 12px; }\n"
    );
}

#[test]
fn transition_speed_covers_card_and_button() {
    let mut style = StyleSettings::new();
    style.set("transition_speed", "0.5");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card, .dealer-website-button { transition: all 0.5s ease; }\n"
    );
}

#[test]
fn shadow_levels_map_through_lookup_table() {
    let mut style = StyleSettings::new();
    style.set("box_shadow", "heavy");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card { box-shadow: 0 10px 25px rgba(0,0,0,0.25); }\n"
    );

    style.set("box_shadow", "none");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card { box-shadow: none; }\n"
    );
}

#[test]
fn hover_levels_map_through_lookup_table() {
    let mut style = StyleSettings::new();
    style.set("hover_effect", "scale");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card:hover { transform: scale(1.02); }\n"
    );
}

#[test]
fn unknown_levels_fall_back_to_default_level_values() {
    let mut style = StyleSettings::new();
    style.set("box_shadow", "glow");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card { box-shadow: 0 1px 3px rgba(0,0,0,0.1); }\n"
    );

    let mut style = StyleSettings::new();
    style.set("hover_effect", "wobble");
    assert_eq!(
        compile_stylesheet(&style),
        ".dealer-card:hover { transform: translateY(-4px); }\n"
    );
}

#[test]
fn output_order_is_colors_typography_spacing_effects_custom() {
    let yaml = r##"
border_width: 3
grid_gap: 32
heading_font_size: 30
header_color: "#222222"
custom_css: "/* site tweaks */"
"##;
    let style: StyleSettings = serde_yaml::from_str(yaml).unwrap();
    let css = compile_stylesheet(&style);

    let color = css.find("background-color: #222222").unwrap();
    let typography = css.find("font-size: 30px").unwrap();
    let spacing = css.find("gap: 32px").unwrap();
    let effects = css.find("border-width: 3px").unwrap();
    let custom = css.find("/* custom css */").unwrap();

    assert!(color < typography);
    assert!(typography < spacing);
    assert!(spacing < effects);
    assert!(effects < custom);
    assert!(css.contains("/* site tweaks */"));
}

#[test]
fn custom_css_appends_even_without_overrides() {
    let mut style = StyleSettings::new();
    style.set("custom_css", ".dealer-card { outline: none; }");
    assert_eq!(
        compile_stylesheet(&style),
        "/* custom css */\n.dealer-card { outline: none; }\n"
    );
}

#[test]
fn numeric_yaml_scalars_diff_against_string_defaults() {
    let same: StyleSettings = serde_yaml::from_str("heading_font_size: 24").unwrap();
    assert_eq!(compile_stylesheet(&same), "");

    let changed: StyleSettings = serde_yaml::from_str("heading_font_size: 30").unwrap();
    assert_eq!(
        compile_stylesheet(&changed),
        ".dealer-card-header h3 { font-size: 30px; }\n"
    );
}

#[test]
fn page_style_block_layers_overrides_on_base() {
    let yaml = r##"
style:
  card_background: "#fafafa"
dealers:
  - company_name: "Acme Marine"
"##;
    let doc = load_directory(yaml).unwrap();
    let page = doc.render_page();
    assert_eq!(page.matches("<style>").count(), 1);
    assert!(page.contains(BASE_STYLES));
    assert!(page.contains(".dealer-card { background-color: #fafafa; }"));
    let base = page.find(BASE_STYLES).unwrap();
    let overrides = page.find(".dealer-card { background-color: #fafafa; }").unwrap();
    assert!(base < overrides);
}
