//! Scalar-or-sequence label values.
//!
//! A layer may consist of several parallel branches, each with its own filter
//! count or thickness. [`LabelSet`] models that parameter as a tagged union of
//! a single [`Label`] or a sequence of them, and [`format_labels`] normalizes
//! either form into the comma-joined list the markup expects.
//!
//! # Example
//!
//! ```
//! use strata_core::label::{LabelSet, format_labels};
//!
//! assert_eq!(format_labels(&LabelSet::from(64)), "64");
//! assert_eq!(format_labels(&LabelSet::from([32, 32])), "32, 32");
//! assert_eq!(format_labels(&LabelSet::from(Vec::<i64>::new())), "");
//! ```

use std::{fmt, slice};

use serde::Deserialize;

/// Placeholder used where a numeric label is intentionally suppressed.
pub const BLANK: &str = " ";

/// A single label value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Label {
    /// Returns the blank placeholder label.
    pub fn blank() -> Self {
        Self::Text(BLANK.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One label or an ordered sequence of labels.
///
/// A bare scalar behaves exactly like a one-element sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LabelSet {
    Scalar(Label),
    Sequence(Vec<Label>),
}

impl LabelSet {
    /// Number of entries after normalization.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(labels) => labels.len(),
        }
    }

    /// Returns `true` for an empty sequence. A scalar is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the normalized entries in order.
    pub fn iter(&self) -> slice::Iter<'_, Label> {
        match self {
            Self::Scalar(label) => slice::from_ref(label).iter(),
            Self::Sequence(labels) => labels.iter(),
        }
    }

    /// Returns a sequence of [`BLANK`] placeholders with the same cardinality.
    pub fn blanked(&self) -> Self {
        Self::Sequence(vec![Label::blank(); self.len()])
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl fmt::Display for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, label) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{label}")?;
        }
        Ok(())
    }
}

/// Join the textual form of every entry with `", "`, preserving order.
pub fn format_labels(labels: &LabelSet) -> String {
    labels.to_string()
}

impl From<Label> for LabelSet {
    fn from(label: Label) -> Self {
        Self::Scalar(label)
    }
}

impl From<Vec<Label>> for LabelSet {
    fn from(labels: Vec<Label>) -> Self {
        Self::Sequence(labels)
    }
}

macro_rules! impl_label_from {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {
        $(
            impl From<$ty> for Label {
                fn from(value: $ty) -> Self {
                    Self::$variant($conv(value))
                }
            }

            impl From<$ty> for LabelSet {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Label::from(value))
                }
            }

            impl<const N: usize> From<[$ty; N]> for LabelSet {
                fn from(values: [$ty; N]) -> Self {
                    Self::Sequence(values.into_iter().map(Label::from).collect())
                }
            }

            impl From<Vec<$ty>> for LabelSet {
                fn from(values: Vec<$ty>) -> Self {
                    Self::Sequence(values.into_iter().map(Label::from).collect())
                }
            }
        )*
    };
}

impl_label_from! {
    i64 => Int(|v| v),
    i32 => Int(i64::from),
    u32 => Int(i64::from),
    u16 => Int(i64::from),
    u8 => Int(i64::from),
    f64 => Float(|v| v),
    f32 => Float(f64::from),
    String => Text(|v| v),
    &str => Text(str::to_string),
}
