//! Global font-size directive.

use std::{convert::Infallible, fmt, str::FromStr};

use log::trace;
use serde::Deserialize;

/// Font size commands understood by the renderer.
///
/// Parsed names may omit the leading backslash. Anything unrecognized is kept
/// as [`FontSize::Custom`] and emitted verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FontSize {
    Tiny,
    ScriptSize,
    FootnoteSize,
    Small,
    #[default]
    NormalSize,
    /// `\large`
    Large,
    /// `\Large`
    Larger,
    /// `\LARGE`
    Largest,
    /// `\huge`
    Huge,
    /// `\Huge`
    Huger,
    Custom(String),
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let command = match self {
            Self::Tiny => r"\tiny",
            Self::ScriptSize => r"\scriptsize",
            Self::FootnoteSize => r"\footnotesize",
            Self::Small => r"\small",
            Self::NormalSize => r"\normalsize",
            Self::Large => r"\large",
            Self::Larger => r"\Large",
            Self::Largest => r"\LARGE",
            Self::Huge => r"\huge",
            Self::Huger => r"\Huge",
            Self::Custom(directive) => directive,
        };
        f.write_str(command)
    }
}

impl FromStr for FontSize {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = match s.strip_prefix('\\').unwrap_or(s) {
            "tiny" => Self::Tiny,
            "scriptsize" => Self::ScriptSize,
            "footnotesize" => Self::FootnoteSize,
            "small" => Self::Small,
            "normalsize" => Self::NormalSize,
            "large" => Self::Large,
            "Large" => Self::Larger,
            "LARGE" => Self::Largest,
            "huge" => Self::Huge,
            "Huge" => Self::Huger,
            _ => Self::Custom(s.to_string()),
        };
        Ok(size)
    }
}

impl From<String> for FontSize {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(size) => size,
            Err(never) => match never {},
        }
    }
}

/// Emit a `\tikzset` directive selecting `size` for the rest of the picture.
pub fn to_scale_font(size: &FontSize) -> String {
    trace!(size:%; "Emitting font scale");

    format!(
        r"
\tikzset{{font={size}}}
"
    )
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::draw::test_utils::is_balanced;

    fn font_size_strategy() -> impl Strategy<Value = FontSize> {
        prop_oneof![
            prop::sample::select(vec![
                FontSize::Tiny,
                FontSize::ScriptSize,
                FontSize::FootnoteSize,
                FontSize::Small,
                FontSize::NormalSize,
                FontSize::Large,
                FontSize::Larger,
                FontSize::Largest,
                FontSize::Huge,
                FontSize::Huger,
            ]),
            (1u32..40, 1u32..48).prop_map(|(size, skip)| {
                FontSize::Custom(format!(r"\fontsize{{{size}}}{{{skip}}}\selectfont"))
            }),
        ]
    }

    /// Font directives are balanced, stable and round-trip through their command name.
    fn check_font_output(size: FontSize) -> Result<(), TestCaseError> {
        let markup = to_scale_font(&size);
        prop_assert!(is_balanced(&markup), "unbalanced markup: {markup}");
        prop_assert_eq!(&markup, &to_scale_font(&size));
        prop_assert_eq!(FontSize::from(size.to_string()), size);
        Ok(())
    }

    proptest! {
        #[test]
        fn font_output_is_well_formed(size in font_size_strategy()) {
            check_font_output(size)?;
        }
    }
}
