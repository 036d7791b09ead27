//! Color code detection and parsing.
//!
//! Supports the seven CSS3 textual color shapes:
//!
//! - Hex: `#ff6b35` (the `#` is optional)
//! - Short hex: `#f80`
//! - RGB function: `rgb(255, 107, 53)`
//! - RGB with alpha: `rgba(255, 107, 53, 0.5)`
//! - HSL function: `hsl(120, 50%, 50%)`
//! - HSL with alpha: `hsla(120, 50%, 50%, 0.5)`
//! - Keyword: `red`, `cornflowerblue`, ... (the 147-entry CSS3 table)
//!
//! Detection tries the shapes in that order against the trimmed input;
//! whitespace around every number, `%`, and comma is insignificant, and hex
//! digits, the function tokens, and keywords are case-insensitive. The first
//! shape whose outer form matches claims the input: a `rgb(...)` string with
//! a channel out of range is an invalid `rgb()`, it does not fall through to
//! keyword lookup.
//!
//! # Example
//!
//! ```rust
//! use colorcode::{parse, ColorCodeStyle, ColorComponents};
//!
//! let (color, style) = parse("#FF0000").unwrap();
//! assert_eq!(style, ColorCodeStyle::Hex);
//! assert_eq!(color, ColorComponents::rgb(1.0, 0.0, 0.0, 1.0));
//!
//! assert!(parse("rgb(256,0,0)").is_err());
//! ```

use crate::error::ParseError;
use crate::keyword;
use crate::model::{ColorCodeStyle, ColorComponents};

/// Parses a color code, returning the normalized components and the
/// detected style.
///
/// Fails with [`ParseError::InvalidFormat`] when the input matches none of
/// the seven shapes or a numeric field violates its range: channels are
/// integers 0–255, percentages integers 0–100, hue any integer number of
/// degrees (normalized into `[0°, 360°)`). The trailing alpha of `rgba()`/
/// `hsla()` is any decimal and is deliberately not clamped to `[0, 1]`.
pub fn parse(input: &str) -> Result<(ColorComponents, ColorCodeStyle), ParseError> {
    let s = input.trim();
    let invalid = || ParseError::InvalidFormat(s.to_string());

    // Hex forms first; the leading # is optional on both.
    let bare = s.strip_prefix('#').unwrap_or(s);
    if bare.len() == 6 && is_hex(bare) {
        let color = decode_hex_pairs(bare).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::Hex));
    }
    if bare.len() == 3 && is_hex(bare) {
        let color = decode_hex_digits(bare).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::ShortHex));
    }

    // Function forms, matched case-insensitively on the token.
    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgb") {
        let color = parse_rgb_args(&args).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::CssRgb));
    }
    if let Some(args) = function_args(&lower, "rgba") {
        let color = parse_rgba_args(&args).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::CssRgba));
    }
    if let Some(args) = function_args(&lower, "hsl") {
        let color = parse_hsl_args(&args).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::CssHsl));
    }
    if let Some(args) = function_args(&lower, "hsla") {
        let color = parse_hsla_args(&args).ok_or_else(invalid)?;
        return Ok((color, ColorCodeStyle::CssHsla));
    }

    // Everything else is tried as a keyword.
    if let Some(value) = keyword::lookup_by_name(s) {
        return Ok((rgb_from_packed(value), ColorCodeStyle::CssKeyword));
    }

    Err(invalid())
}

fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decodes `rrggbb` (already verified to be 6 hex digits).
fn decode_hex_pairs(hex: &str) -> Option<ColorComponents> {
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(rgb_from_bytes(r, g, b))
}

/// Decodes `rgb` short form: each digit `d` expands to `d*16 + d`.
fn decode_hex_digits(hex: &str) -> Option<ColorComponents> {
    let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
    let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
    let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
    Some(rgb_from_bytes(r, g, b))
}

/// Splits `name(a, b, c)` into its comma-separated arguments, each trimmed.
/// Returns `None` unless the string is exactly the token, `(`, and a
/// trailing `)`.
fn function_args<'a>(lower: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = lower
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_rgb_args(args: &[&str]) -> Option<ColorComponents> {
    if args.len() != 3 {
        return None;
    }
    let r = parse_channel(args[0])?;
    let g = parse_channel(args[1])?;
    let b = parse_channel(args[2])?;
    Some(ColorComponents::rgb(r, g, b, 1.0))
}

fn parse_rgba_args(args: &[&str]) -> Option<ColorComponents> {
    if args.len() != 4 {
        return None;
    }
    let r = parse_channel(args[0])?;
    let g = parse_channel(args[1])?;
    let b = parse_channel(args[2])?;
    let alpha = args[3].parse::<f64>().ok()?;
    Some(ColorComponents::rgb(r, g, b, alpha))
}

fn parse_hsl_args(args: &[&str]) -> Option<ColorComponents> {
    if args.len() != 3 {
        return None;
    }
    let h = parse_degrees(args[0])?;
    let s = parse_percent(args[1])?;
    let l = parse_percent(args[2])?;
    Some(ColorComponents::hsl(h, s, l, 1.0))
}

fn parse_hsla_args(args: &[&str]) -> Option<ColorComponents> {
    if args.len() != 4 {
        return None;
    }
    let h = parse_degrees(args[0])?;
    let s = parse_percent(args[1])?;
    let l = parse_percent(args[2])?;
    let alpha = args[3].parse::<f64>().ok()?;
    Some(ColorComponents::hsl(h, s, l, alpha))
}

/// An integer channel 0–255, normalized to `[0.0, 1.0]`.
fn parse_channel(s: &str) -> Option<f64> {
    let n = s.parse::<u8>().ok()?;
    Some(n as f64 / 255.0)
}

/// An integer percentage 0–100 with a `%` suffix, normalized to
/// `[0.0, 1.0]`. Whitespace between the number and the `%` is allowed.
fn parse_percent(s: &str) -> Option<f64> {
    let n = s.strip_suffix('%')?.trim_end().parse::<u8>().ok()?;
    if n > 100 {
        return None;
    }
    Some(n as f64 / 100.0)
}

/// An integer number of degrees, any sign and magnitude, normalized into
/// `[0°, 360°)` and then to the `[0.0, 1.0)` hue fraction.
fn parse_degrees(s: &str) -> Option<f64> {
    let d = s.parse::<i64>().ok()?;
    Some(d.rem_euclid(360) as f64 / 360.0)
}

fn rgb_from_bytes(r: u8, g: u8, b: u8) -> ColorComponents {
    ColorComponents::rgb(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        1.0,
    )
}

/// Unpacks a 24-bit `0xRRGGBB` keyword value.
fn rgb_from_packed(value: u32) -> ColorComponents {
    rgb_from_bytes(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}
