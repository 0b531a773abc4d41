//! Fill colors for emitted elements.
//!
//! The markup consumes colors in several forms: bare color tokens known to the
//! renderer (`ConvColor`), palette macros (`\ConvColor`), inline mixing
//! expressions (`{rgb:green,1;black,3}`) and, through [`Color`], any CSS color
//! which is converted to an explicit 8-bit RGB expression.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use serde::Deserialize;

use crate::Error;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#ff0000"`,
    /// `"rgb(255, 0, 0)"` or `"red"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_rgb8(), [255, 0, 0]);
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, Error> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| Error::InvalidColor {
                value: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the 8-bit sRGB components, ignoring alpha.
    pub fn to_rgb8(self) -> [u8; 3] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "{{rgb,255:red,{r};green,{g};blue,{b}}}")
    }
}

/// A fill value as it appears in a `fill=` or `bandfill=` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub enum Fill {
    /// Color name known to the renderer, emitted verbatim.
    Named(String),
    /// Palette macro, emitted as `\name`.
    Macro(String),
    /// Inline color expression, emitted verbatim.
    Mix(String),
    /// CSS color, emitted as an explicit RGB expression.
    Rgb(Color),
}

impl Fill {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn macro_ref(name: impl Into<String>) -> Self {
        Self::Macro(name.into())
    }

    pub fn mix(expr: impl Into<String>) -> Self {
        Self::Mix(expr.into())
    }

    /// Convolution palette entry.
    pub fn conv() -> Self {
        Self::macro_ref("ConvColor")
    }

    /// Convolution followed by an activation.
    pub fn conv_relu() -> Self {
        Self::macro_ref("ConvReluColor")
    }

    pub fn pool() -> Self {
        Self::macro_ref("PoolColor")
    }

    pub fn unpool() -> Self {
        Self::macro_ref("UnpoolColor")
    }

    /// Input and output image layers.
    pub fn in_out() -> Self {
        Self::mix("{rgb:green,1;black,3}")
    }

    /// Residual blocks.
    pub fn residual() -> Self {
        Self::mix("{rgb:white,1;black,3}")
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Macro(name) => write!(f, "\\{name}"),
            Self::Mix(expr) => f.write_str(expr),
            Self::Rgb(color) => write!(f, "{color}"),
        }
    }
}

impl FromStr for Fill {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix('\\') {
            Ok(Self::macro_ref(name))
        } else if s.starts_with('{') {
            Ok(Self::mix(s))
        } else if s.starts_with('#') || s.contains('(') {
            Color::new(s).map(Self::Rgb)
        } else {
            Ok(Self::named(s))
        }
    }
}

impl TryFrom<String> for Fill {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
