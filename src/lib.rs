//! # Colorcode - CSS3 Color Code Parsing and Formatting
//!
//! `colorcode` converts between the textual color codes of the CSS Color
//! Module level 3 and a normalized in-memory value, in both directions. It
//! accepts user-typed or stored color strings and tells you what they mean,
//! and renders a color back into any of the six textual styles.
//!
//! ## Core Concepts
//!
//! - [`parse`]: detect which of the seven shapes a string uses (hex, short
//!   hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`, keyword), validate its
//!   fields, and normalize them
//! - [`ColorComponents`]: the normalized value, a closed sum over the RGB,
//!   HSL, and HSB models, each carrying alpha in `[0.0, 1.0]` fields
//! - [`ColorCodeStyle`]: which textual style a string used, and which style
//!   to render
//! - [`format`]: the inverse rendering, converting between color models as
//!   needed
//! - [`keyword`]: the 147-entry CSS3 keyword table with lookups in both
//!   directions
//!
//! ## Quick Start
//!
//! ```rust
//! use colorcode::{format, parse, ColorCodeStyle};
//!
//! // Detect and normalize a color string.
//! let (color, style) = parse("#FF8000").unwrap();
//! assert_eq!(style, ColorCodeStyle::Hex);
//!
//! // Render it in another style.
//! assert_eq!(
//!     format(&color, ColorCodeStyle::CssRgb),
//!     Some("rgb(255,128,0)".to_string()),
//! );
//!
//! // Keywords work both ways.
//! let (tomato, _) = parse("tomato").unwrap();
//! assert_eq!(format(&tomato, ColorCodeStyle::Hex), Some("#ff6347".to_string()));
//! assert_eq!(
//!     format(&tomato, ColorCodeStyle::CssKeyword),
//!     Some("tomato".to_string()),
//! );
//! ```
//!
//! ## Guarantees
//!
//! Every call is a pure, synchronous function of its arguments and the
//! immutable keyword table; there is no shared mutable state, so calls may
//! run concurrently without coordination. [`parse`] either yields a fully
//! validated value or [`ParseError::InvalidFormat`], never a partial result.
//! [`format`] is total apart from the keyword style, where a color without
//! an exact keyword yields `None`.

mod error;
mod format;
pub mod keyword;
mod model;
mod parse;

pub use error::ParseError;
pub use format::format;
pub use model::{ColorCodeStyle, ColorComponents};
pub use parse::parse;
