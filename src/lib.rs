//! Color harmonies to pair with an outfit.
//!
//! Starting from the [`Color`] of a garment already worn, compute the
//! colors that go with it: the [complementary](Color::complementary)
//! hue, the [analogous](Color::analogous) and
//! [triadic](Color::triadic) sets, and a set of safe neutrals
//! ([`build_neutrals`]).  [`generate_color_plan`] bundles them into a
//! [`Palette`] together with styling [`Suggestion`]s.
//!
//! ```
//! use wardrobe_harmony::{generate_color_plan, EngineRequest, Formality};
//! let plan = generate_color_plan(&EngineRequest {
//!     base_colors: vec!["#1F2937".into()],
//!     formality: Formality::Formal,
//!     ..Default::default()
//! })?;
//! assert_eq!(plan.suggestions[0].title, "Accessory");
//! # Ok::<(), wardrobe_harmony::FormatError>(())
//! ```
//!
//! All functions are pure: no state is kept between calls.

use std::{fmt, str::FromStr};
use rgb::{RGB, RGB8};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::trace;

mod plan;
pub use plan::{build_neutrals, generate_color_plan,
               EngineRequest, EngineResult, Palette, Suggestion,
               DEFAULT_BASE, FALLBACK_NEUTRAL};
pub use plan::ty::{Formality, HarmonyType, MetalPreference};

/// Error returned when a string is not a hexadecimal color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: {kind}")]
pub struct FormatError {
    input: String,
    kind: FormatErrorKind,
}

/// Why a color string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// The string (without its leading `#`) is neither 3 nor 6 bytes long.
    #[error("expected 3 or 6 hexadecimal digits")]
    InvalidLength,
    /// A character is not in `0-9a-fA-F`.
    #[error("not a hexadecimal digit")]
    InvalidDigit,
}

impl FormatError {
    /// The rejected string.
    pub fn input(&self) -> &str { &self.input }

    /// Why the string was rejected.
    pub fn kind(&self) -> FormatErrorKind { self.kind }
}

/// Parse `#RGB` or `#RRGGBB` (the `#` is optional) into its channels.
///
/// The short form is expanded by duplicating each digit, so `#ABC`
/// is `#AABBCC`.
///
/// ```
/// use wardrobe_harmony::hex_to_rgb;
/// let c = hex_to_rgb("#1f2937")?;
/// assert_eq!((c.r, c.g, c.b), (0x1F, 0x29, 0x37));
/// # Ok::<(), wardrobe_harmony::FormatError>(())
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<RGB8, FormatError> {
    let err = |kind| FormatError { input: hex.to_string(), kind };
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(err(FormatErrorKind::InvalidLength));
    }
    let n: Vec<u8> = digits.bytes()
        .map(|c| (c as char).to_digit(16).map(|d| d as u8)
             .ok_or_else(|| err(FormatErrorKind::InvalidDigit)))
        .collect::<Result<_, _>>()?;
    let rgb = match n[..] {
        [r, g, b] => RGB8 { r: 17 * r, g: 17 * g, b: 17 * b },
        [r1, r0, g1, g0, b1, b0] =>
            RGB8 { r: r1 << 4 | r0, g: g1 << 4 | g0, b: b1 << 4 | b0 },
        _ => return Err(err(FormatErrorKind::InvalidLength)),
    };
    Ok(rgb)
}

/// Return the color with channels `r`, `g`, `b` (in \[0, 255\]).
/// Each channel is rounded then clamped to \[0, 255\].
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> Color {
    // `as` saturates and sends NaN to 0.
    let channel = |x: f64| x.round().clamp(0., 255.) as u8;
    Color::new(channel(r), channel(g), channel(b))
}

/// Canonical uppercase `#RRGGBB` form of a color string.
///
/// ```
/// assert_eq!(wardrobe_harmony::normalize("#abc")?, "#AABBCC");
/// # Ok::<(), wardrobe_harmony::FormatError>(())
/// ```
pub fn normalize(hex: &str) -> Result<String, FormatError> {
    Ok(hex.parse::<Color>()?.to_string())
}

/// Shift the hue of `rgb` by `degrees`, keeping saturation and
/// lightness.  Every harmony is computed with this function.
pub fn rotate_hue(rgb: RGB8, degrees: f64) -> Color {
    let c = RGB { r: rgb.r as f64 / 255., g: rgb.g as f64 / 255.,
                  b: rgb.b as f64 / 255. };
    let RGB { r, g, b } = Hsl::from_rgb(c).rotate(degrees).to_rgb();
    let rotated = rgb_to_hex(255. * r, 255. * g, 255. * b);
    trace!(from = %Color(rgb), degrees, to = %rotated, "rotated hue");
    rotated
}

/// The type for colors in the HSL color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue as a fraction of a full turn, in \[0, 1).
    pub h: f64,
    /// The saturation in \[0, 1\].
    pub s: f64,
    /// The lightness in \[0, 1\].
    pub l: f64,
}

impl Hsl {
    /// Convert an RGB color with channels in \[0, 1\].  Grays have a
    /// hue and saturation of 0.
    pub fn from_rgb(c: RGB<f64>) -> Hsl {
        let max = c.r.max(c.g).max(c.b);
        let min = c.r.min(c.g).min(c.b);
        let l = (max + min) / 2.;
        if max == min {
            return Hsl { h: 0., s: 0., l }
        }
        let d = max - min;
        let s = if l > 0.5 { d / (2. - max - min) } else { d / (max + min) };
        let h = {
            if max == c.r { (c.g - c.b) / d + if c.g < c.b { 6. } else { 0. } }
            else if max == c.g { (c.b - c.r) / d + 2. }
            else { (c.r - c.g) / d + 4. } };
        Hsl { h: h / 6., s, l }
    }

    /// Convert back to an RGB color with channels in \[0, 1\].
    pub fn to_rgb(&self) -> RGB<f64> {
        let Hsl { h, s, l } = *self;
        if s == 0. {
            return RGB { r: l, g: l, b: l }
        }
        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        RGB { r: hue_to_channel(p, q, h + 1. / 3.),
              g: hue_to_channel(p, q, h),
              b: hue_to_channel(p, q, h - 1. / 3.) }
    }

    /// Add `degrees` to the hue, wrapping around the color wheel.
    pub fn rotate(self, degrees: f64) -> Hsl {
        let mut h = (self.h + degrees / 360.) % 1.;
        if h < 0. { h += 1. }
        Hsl { h, ..self }
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0. { t += 1. }
    if t > 1. { t -= 1. }
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}

/// A 24-bit RGB color.
///
/// Parsed from `#RGB` or `#RRGGBB` strings and always displayed in the
/// canonical uppercase `#RRGGBB` form.
///
/// ```
/// use wardrobe_harmony::Color;
/// let c: Color = "#f00".parse()?;
/// assert_eq!(c.to_string(), "#FF0000");
/// assert_eq!(c.complementary().to_string(), "#00FFFF");
/// # Ok::<(), wardrobe_harmony::FormatError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(RGB8);

impl Color {
    /// The color with the given red, green and blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Color(RGB8 { r, g, b }) }

    /// The red, green and blue channels.
    #[inline]
    pub fn rgb(self) -> RGB8 { self.0 }

    /// The color in the HSL color space.
    pub fn hsl(self) -> Hsl {
        Hsl::from_rgb(RGB { r: self.0.r as f64 / 255.,
                            g: self.0.g as f64 / 255.,
                            b: self.0.b as f64 / 255. })
    }

    /// Perceived brightness in \[0, 1\].
    pub fn luma(self) -> f64 {
        let RGB8 { r, g, b } = self.0;
        (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) / 255.
    }

    /// See [`rotate_hue`].
    #[inline]
    pub fn rotate_hue(self, degrees: f64) -> Color { rotate_hue(self.0, degrees) }

    /// The color opposite on the hue wheel (180°).
    pub fn complementary(self) -> Color { self.rotate_hue(180.) }

    /// The hues 30° on either side, with `self` in the middle:
    /// `[-30°, self, +30°]`.
    pub fn analogous(self) -> [Color; 3] {
        [self.rotate_hue(-30.), self, self.rotate_hue(30.)]
    }

    /// `self` followed by the hues 120° away: `[self, +120°, -120°]`.
    pub fn triadic(self) -> [Color; 3] {
        [self, self.rotate_hue(120.), self.rotate_hue(-120.)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { hex_to_rgb(s).map(Color) }
}

impl From<RGB8> for Color {
    #[inline]
    fn from(c: RGB8) -> Self { Color(c) }
}

impl From<Color> for RGB8 {
    #[inline]
    fn from(c: Color) -> Self { c.0 }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Base colors offered to pick from when no photo is available.
pub const PRESETS: [Color; 10] = [
    Color::new(0x1F, 0x29, 0x37), Color::new(0x11, 0x18, 0x27),
    Color::new(0x0E, 0xA5, 0xE9), Color::new(0xEF, 0x44, 0x44),
    Color::new(0x10, 0xB9, 0x81), Color::new(0xF5, 0x9E, 0x0B),
    Color::new(0x8B, 0x5C, 0xF6), Color::new(0xF4, 0x72, 0xB6),
    Color::new(0x94, 0xA3, 0xB8), Color::new(0xD9, 0x77, 0x06),
];
