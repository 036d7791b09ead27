//! Property-based tests for colorcode using proptest.

use colorcode::{format, parse, ColorCodeStyle, ColorComponents};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// RGB components exactly representable at 8-bit channel precision.
fn rgb_8bit() -> impl Strategy<Value = ColorComponents> {
    (0u8..=255, 0u8..=255, 0u8..=255).prop_map(|(r, g, b)| {
        ColorComponents::rgb(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            1.0,
        )
    })
}

/// HSL components exactly representable at integer degree/percent precision.
fn hsl_integer() -> impl Strategy<Value = ColorComponents> {
    (0u16..360, 0u8..=100, 0u8..=100).prop_map(|(h, s, l)| {
        ColorComponents::hsl(
            h as f64 / 360.0,
            s as f64 / 100.0,
            l as f64 / 100.0,
            1.0,
        )
    })
}

fn reparse(text: &str) -> (ColorComponents, ColorCodeStyle) {
    parse(text).unwrap_or_else(|e| panic!("own output {:?} should parse: {}", text, e))
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Hex output round-trips 8-bit RGB exactly.
    #[test]
    fn hex_round_trips_8bit_rgb(color in rgb_8bit()) {
        let text = format(&color, ColorCodeStyle::Hex).unwrap();
        let (back, style) = reparse(&text);
        prop_assert_eq!(style, ColorCodeStyle::Hex);
        prop_assert_eq!(back, color);
    }

    /// rgb() output round-trips 8-bit RGB exactly.
    #[test]
    fn css_rgb_round_trips_8bit_rgb(color in rgb_8bit()) {
        let text = format(&color, ColorCodeStyle::CssRgb).unwrap();
        let (back, style) = reparse(&text);
        prop_assert_eq!(style, ColorCodeStyle::CssRgb);
        prop_assert_eq!(back, color);
    }

    /// rgba() also round-trips the alpha: the compact rendering is the
    /// shortest form that recovers the identical f64.
    #[test]
    fn css_rgba_round_trips_alpha(
        color in rgb_8bit(),
        alpha in 0.0f64..=1.0,
    ) {
        let (r, g, b, _) = color.to_rgb();
        let color = ColorComponents::rgb(r, g, b, alpha);
        let text = format(&color, ColorCodeStyle::CssRgba).unwrap();
        let (back, style) = reparse(&text);
        prop_assert_eq!(style, ColorCodeStyle::CssRgba);
        prop_assert_eq!(back, color);
    }

    /// Short hex round-trips any color built from 4-bit channels.
    #[test]
    fn short_hex_round_trips_4bit_rgb(
        r in 0u8..=15,
        g in 0u8..=15,
        b in 0u8..=15,
    ) {
        let color = ColorComponents::rgb(
            (r * 17) as f64 / 255.0,
            (g * 17) as f64 / 255.0,
            (b * 17) as f64 / 255.0,
            1.0,
        );
        let text = format(&color, ColorCodeStyle::ShortHex).unwrap();
        let (back, style) = reparse(&text);
        prop_assert_eq!(style, ColorCodeStyle::ShortHex);
        prop_assert_eq!(back, color);
    }

    /// Short hex is within 1/15 of the original for arbitrary 8-bit colors.
    #[test]
    fn short_hex_is_coarse_but_close(color in rgb_8bit()) {
        let text = format(&color, ColorCodeStyle::ShortHex).unwrap();
        let (back, _) = reparse(&text);
        let (r, g, b, _) = color.to_rgb();
        let (r2, g2, b2, _) = back.to_rgb();
        prop_assert!((r - r2).abs() <= 1.0 / 15.0);
        prop_assert!((g - g2).abs() <= 1.0 / 15.0);
        prop_assert!((b - b2).abs() <= 1.0 / 15.0);
    }

    /// hsl() round-trips integer-precision HSL, modulo the rule that zero
    /// saturation renders (and therefore re-parses) with hue 0.
    #[test]
    fn css_hsl_round_trips_integer_hsl(color in hsl_integer()) {
        let text = format(&color, ColorCodeStyle::CssHsl).unwrap();
        let (back, style) = reparse(&text);
        prop_assert_eq!(style, ColorCodeStyle::CssHsl);

        let (h, s, l, _) = color.to_hsl();
        let expected_hue = if s == 0.0 { 0.0 } else { h };
        let (h2, s2, l2, _) = back.to_hsl();
        prop_assert!((h2 - expected_hue).abs() < 1e-9);
        prop_assert!((s2 - s).abs() < 1e-9);
        prop_assert!((l2 - l).abs() < 1e-9);
    }

    /// Detection is idempotent: reformatting a parsed result at its detected
    /// style and re-parsing detects the same style again.
    #[test]
    fn detection_is_idempotent(color in rgb_8bit()) {
        for style in [
            ColorCodeStyle::Hex,
            ColorCodeStyle::ShortHex,
            ColorCodeStyle::CssRgb,
            ColorCodeStyle::CssRgba,
            ColorCodeStyle::CssHsl,
            ColorCodeStyle::CssHsla,
        ] {
            let text = format(&color, style).unwrap();
            let (parsed, detected) = reparse(&text);
            prop_assert_eq!(detected, style);

            let text2 = format(&parsed, detected).unwrap();
            let (_, detected2) = reparse(&text2);
            prop_assert_eq!(detected2, style);
        }
    }

    /// Any integer degree count normalizes to the same hue as its value
    /// reduced into [0, 360).
    #[test]
    fn hue_accepts_any_integer_degrees(h in -10_000i32..10_000) {
        let (color, _) = parse(&format!("hsl({},50%,50%)", h)).unwrap();
        let reduced = h.rem_euclid(360);
        let (expected, _) = parse(&format!("hsl({},50%,50%)", reduced)).unwrap();
        prop_assert_eq!(color, expected);
    }

    /// Formatting a parsed color as a keyword either names the exact same
    /// 24-bit value or yields no representation at all.
    #[test]
    fn keyword_formatting_is_exact(color in rgb_8bit()) {
        if let Some(name) = format(&color, ColorCodeStyle::CssKeyword) {
            let (back, style) = reparse(&name);
            prop_assert_eq!(style, ColorCodeStyle::CssKeyword);
            prop_assert_eq!(back, color);
        }
    }

    /// The parser never panics, whatever the input.
    #[test]
    fn parse_never_panics(input in "\\PC{0,40}") {
        let _ = parse(&input);
    }
}
