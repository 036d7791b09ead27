//! Canonical rendering of color codes.
//!
//! The inverse of [`parse`](crate::parse): given normalized components and a
//! requested [`ColorCodeStyle`], produce the canonical text for that style.
//! Output is always lowercase, with no whitespace and no leading zeros
//! beyond the fixed-width hex digits. Integer fields are computed by scaling
//! the normalized float and rounding to the nearest integer, ties away from
//! zero; the alpha of `rgba()`/`hsla()` renders in the shortest decimal form
//! that round-trips (`0.5`, `1`, ...).
//!
//! Formatting is total for every style except [`CssKeyword`]: a color whose
//! 24-bit value has no keyword yields `None`, which is an absence of
//! representation, not an error.
//!
//! [`CssKeyword`]: ColorCodeStyle::CssKeyword
//!
//! # Example
//!
//! ```rust
//! use colorcode::{format, ColorCodeStyle, ColorComponents};
//!
//! let red = ColorComponents::rgb(1.0, 0.0, 0.0, 1.0);
//! assert_eq!(format(&red, ColorCodeStyle::Hex), Some("#ff0000".to_string()));
//! assert_eq!(format(&red, ColorCodeStyle::CssHsl), Some("hsl(0,100%,50%)".to_string()));
//! assert_eq!(format(&red, ColorCodeStyle::CssKeyword), Some("red".to_string()));
//!
//! let offbeat = ColorComponents::rgb(0.5, 0.25, 0.125, 1.0);
//! assert_eq!(format(&offbeat, ColorCodeStyle::CssKeyword), None);
//! ```

use crate::keyword;
use crate::model::{ColorCodeStyle, ColorComponents};

/// Renders `components` in the requested `style`.
///
/// Every scalar passes the finite guard first (NaN and ±infinity become
/// `0.0`), so this never fails on a structurally valid value. `None` is
/// returned only for [`ColorCodeStyle::CssKeyword`] when no keyword maps to
/// the exact 24-bit value.
pub fn format(components: &ColorComponents, style: ColorCodeStyle) -> Option<String> {
    let c = components.sanitized();
    match style {
        ColorCodeStyle::Hex => {
            let (r, g, b) = rgb_bytes(&c);
            Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
        }
        ColorCodeStyle::ShortHex => {
            let (r, g, b) = rgb_bytes(&c);
            Some(format!("#{:x}{:x}{:x}", r / 16, g / 16, b / 16))
        }
        ColorCodeStyle::CssRgb => {
            let (r, g, b) = rgb_bytes(&c);
            Some(format!("rgb({},{},{})", r, g, b))
        }
        ColorCodeStyle::CssRgba => {
            let (r, g, b) = rgb_bytes(&c);
            Some(format!("rgba({},{},{},{})", r, g, b, c.alpha()))
        }
        ColorCodeStyle::CssHsl => {
            let (h, s, l) = hsl_fields(&c);
            Some(format!("hsl({},{}%,{}%)", h, s, l))
        }
        ColorCodeStyle::CssHsla => {
            let (h, s, l) = hsl_fields(&c);
            Some(format!("hsla({},{}%,{}%,{})", h, s, l, c.alpha()))
        }
        ColorCodeStyle::CssKeyword => {
            let (r, g, b) = rgb_bytes(&c);
            let packed = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
            keyword::lookup_by_value(packed).map(String::from)
        }
    }
}

/// Scales a normalized value to an integer field, rounding to nearest with
/// ties away from zero.
fn scaled(v: f64, scale: f64) -> i64 {
    (v * scale).round() as i64
}

fn rgb_bytes(c: &ColorComponents) -> (i64, i64, i64) {
    let (r, g, b, _) = c.to_rgb();
    (scaled(r, 255.0), scaled(g, 255.0), scaled(b, 255.0))
}

/// Integer degree and percentage fields for `hsl()`/`hsla()`. Hue is
/// undefined for a fully desaturated color, so zero saturation forces the
/// rendered hue to 0 whatever the stored hue.
fn hsl_fields(c: &ColorComponents) -> (i64, i64, i64) {
    let (h, s, l, _) = c.to_hsl();
    let hue = if s == 0.0 { 0 } else { scaled(h, 360.0) };
    (hue, scaled(s, 100.0), scaled(l, 100.0))
}
