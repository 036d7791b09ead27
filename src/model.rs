//! Normalized color representations and model conversions.
//!
//! # Concept: Normalized Components
//!
//! Every textual color code, whatever its encoding (0–255 channels, 0–100%
//! percentages, 0–360° degrees), normalizes to plain `f64` fields in
//! `[0.0, 1.0]`. [`ColorComponents`] is a closed sum over the three native
//! models:
//!
//! | Variant | Fields |
//! |---------|--------|
//! | [`Rgb`](ColorComponents::Rgb) | red, green, blue, alpha |
//! | [`Hsl`](ColorComponents::Hsl) | hue, saturation, lightness, alpha |
//! | [`Hsb`](ColorComponents::Hsb) | hue, saturation, brightness, alpha |
//!
//! Hue lives in `[0.0, 1.0)`, representing `[0°, 360°)`. A value is immutable
//! once constructed and owns its four scalars; equality is value equality.
//!
//! # Model Conversions
//!
//! Formatting may need a view the stored variant does not natively hold
//! (e.g. rendering an HSB color as `hsl(...)`). The conversions between the
//! three models are the standard colorimetric formulas: lightness and
//! brightness from the max/min channels, chroma from their difference, hue
//! computed piecewise by which channel is maximal. They are exact algebraic
//! functions; nothing is lost beyond floating-point rounding.
//!
//! # Example
//!
//! ```rust
//! use colorcode::ColorComponents;
//!
//! // Pure red, whichever model you view it through.
//! let red = ColorComponents::rgb(1.0, 0.0, 0.0, 1.0);
//! let (h, s, l, _) = red.to_hsl();
//! assert_eq!((h, s, l), (0.0, 1.0, 0.5));
//! ```

use serde::{Deserialize, Serialize};

// ─── Style tag ──────────────────────────────────────────────────────────────

/// Which textual CSS3 notation a color code uses.
///
/// Produced by [`parse`](crate::parse) alongside the decoded components, and
/// consumed by [`format`](crate::format) as the requested output style. Pure
/// classification tag; carries no data.
///
/// Serialized under the CSS-facing names: `hex`, `shortHex`, `cssRGB`,
/// `cssRGBa`, `cssHSL`, `cssHSLa`, `cssKeyword`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorCodeStyle {
    /// Six hex digits with optional `#`: `#rrggbb`.
    #[serde(rename = "hex")]
    Hex,
    /// Three hex digits with optional `#`: `#rgb`.
    #[serde(rename = "shortHex")]
    ShortHex,
    /// `rgb(R,G,B)` with integer channels 0–255.
    #[serde(rename = "cssRGB")]
    CssRgb,
    /// `rgba(R,G,B,A)` with a trailing decimal alpha.
    #[serde(rename = "cssRGBa")]
    CssRgba,
    /// `hsl(H,S%,L%)` with integer degrees and percentages.
    #[serde(rename = "cssHSL")]
    CssHsl,
    /// `hsla(H,S%,L%,A)` with a trailing decimal alpha.
    #[serde(rename = "cssHSLa")]
    CssHsla,
    /// One of the 147 CSS3 keyword names, e.g. `cornflowerblue`.
    #[serde(rename = "cssKeyword")]
    CssKeyword,
}

// ─── Components ─────────────────────────────────────────────────────────────

/// A normalized color value in one of the three native models.
///
/// Exactly one variant is active; the [`Formatter`](crate::format) matches
/// exhaustively, so adding a model is a compile-time-visible change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorComponents {
    /// Red/green/blue, each in `[0.0, 1.0]`.
    Rgb {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
    /// Hue in `[0.0, 1.0)` for `[0°, 360°)`; saturation and lightness in
    /// `[0.0, 1.0]`.
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
        alpha: f64,
    },
    /// Same ranges as HSL, with brightness in place of lightness.
    Hsb {
        hue: f64,
        saturation: f64,
        brightness: f64,
        alpha: f64,
    },
}

impl ColorComponents {
    /// Creates an RGB value. Channels are expected in `[0.0, 1.0]`.
    pub fn rgb(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        ColorComponents::Rgb {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an HSL value. Hue is the normalized `[0.0, 1.0)` fraction of
    /// a full turn, not degrees.
    pub fn hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        ColorComponents::Hsl {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Creates an HSB (a.k.a. HSV) value.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        ColorComponents::Hsb {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// The alpha component, regardless of the active model.
    pub fn alpha(&self) -> f64 {
        match *self {
            ColorComponents::Rgb { alpha, .. }
            | ColorComponents::Hsl { alpha, .. }
            | ColorComponents::Hsb { alpha, .. } => alpha,
        }
    }

    /// This color viewed as `(red, green, blue, alpha)`, converting from
    /// HSL/HSB if needed.
    pub fn to_rgb(&self) -> (f64, f64, f64, f64) {
        match *self {
            ColorComponents::Rgb {
                red,
                green,
                blue,
                alpha,
            } => (red, green, blue, alpha),
            ColorComponents::Hsl {
                hue,
                saturation,
                lightness,
                alpha,
            } => {
                let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
                (r, g, b, alpha)
            }
            ColorComponents::Hsb {
                hue,
                saturation,
                brightness,
                alpha,
            } => {
                let (r, g, b) = hsb_to_rgb(hue, saturation, brightness);
                (r, g, b, alpha)
            }
        }
    }

    /// This color viewed as `(hue, saturation, lightness, alpha)`,
    /// converting from RGB/HSB if needed.
    pub fn to_hsl(&self) -> (f64, f64, f64, f64) {
        match *self {
            ColorComponents::Hsl {
                hue,
                saturation,
                lightness,
                alpha,
            } => (hue, saturation, lightness, alpha),
            _ => {
                let (r, g, b, alpha) = self.to_rgb();
                let (h, s, l) = rgb_to_hsl(r, g, b);
                (h, s, l, alpha)
            }
        }
    }

    /// A copy with the finite guard applied to every field: NaN and
    /// ±infinity become `0.0`. Formatting runs on the sanitized copy so the
    /// arithmetic below never sees a non-finite input.
    pub(crate) fn sanitized(&self) -> Self {
        match *self {
            ColorComponents::Rgb {
                red,
                green,
                blue,
                alpha,
            } => ColorComponents::rgb(finite(red), finite(green), finite(blue), finite(alpha)),
            ColorComponents::Hsl {
                hue,
                saturation,
                lightness,
                alpha,
            } => ColorComponents::hsl(
                finite(hue),
                finite(saturation),
                finite(lightness),
                finite(alpha),
            ),
            ColorComponents::Hsb {
                hue,
                saturation,
                brightness,
                alpha,
            } => ColorComponents::hsb(
                finite(hue),
                finite(saturation),
                finite(brightness),
                finite(alpha),
            ),
        }
    }
}

// ─── Finite guard ───────────────────────────────────────────────────────────

/// Non-finite (NaN, ±∞) values collapse to `0.0`.
pub(crate) fn finite(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

// ─── RGB ↔ HSL ──────────────────────────────────────────────────────────────

/// Piecewise hue from the RGB channels, in `[0.0, 1.0)`.
///
/// `max` and `delta` are the maximum channel and the chroma (`max - min`);
/// callers guarantee `delta > 0` (a zero chroma means hue is undefined and
/// is reported as `0.0` by the callers themselves).
fn rgb_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h / 6.0
}

fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;
    if delta == 0.0 {
        return (0.0, 0.0, lightness);
    }
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    (rgb_hue(r, g, b, max, delta), saturation, lightness)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// One RGB channel from the two HSL intermediates and a hue offset.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── RGB ↔ HSB ──────────────────────────────────────────────────────────────

fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
