//! Named level tables for the two settings that map to concrete CSS values
//! rather than being inserted literally. Unknown levels resolve to the
//! documented default level's value, never an error.

/// `box_shadow` levels: none / light / medium / heavy.
pub fn box_shadow(level: &str) -> &'static str {
    match level {
        "none" => "none",
        "medium" => "0 4px 6px rgba(0,0,0,0.15)",
        "heavy" => "0 10px 25px rgba(0,0,0,0.25)",
        // "light" and anything unrecognised
        _ => "0 1px 3px rgba(0,0,0,0.1)",
    }
}

/// `hover_effect` levels: none / lift / scale / shadow, as declarations for
/// the card's `:hover` state.
pub fn hover_effect(level: &str) -> &'static [(&'static str, &'static str)] {
    match level {
        "none" => &[("transform", "none")],
        "scale" => &[("transform", "scale(1.02)")],
        "shadow" => &[("box-shadow", "0 8px 24px rgba(0,0,0,0.18)")],
        // "lift" and anything unrecognised
        _ => &[("transform", "translateY(-4px)")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_shadow_levels() {
        assert_eq!(box_shadow("none"), "none");
        assert_eq!(box_shadow("light"), "0 1px 3px rgba(0,0,0,0.1)");
        assert_eq!(box_shadow("medium"), "0 4px 6px rgba(0,0,0,0.15)");
        assert_eq!(box_shadow("heavy"), "0 10px 25px rgba(0,0,0,0.25)");
    }

    #[test]
    fn unknown_levels_fall_back_to_defaults() {
        assert_eq!(box_shadow("glow"), box_shadow("light"));
        assert_eq!(hover_effect("wobble"), hover_effect("lift"));
    }

    #[test]
    fn hover_effect_levels() {
        assert_eq!(hover_effect("none"), &[("transform", "none")]);
        assert_eq!(hover_effect("scale"), &[("transform", "scale(1.02)")]);
        assert_eq!(
            hover_effect("shadow"),
            &[("box-shadow", "0 8px 24px rgba(0,0,0,0.18)")]
        );
    }
}
