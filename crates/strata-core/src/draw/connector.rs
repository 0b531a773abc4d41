//! Arrows between named elements.
//!
//! Connectors reference elements only by name; whether those names exist is
//! resolved by the renderer. The `connection` and `copyconnection` styles and
//! the `\midarrow` / `\copymidarrow` markers are expected to be defined by the
//! document preamble.

use log::trace;
use serde::Deserialize;

/// A curved skip connection from the east side of `of` to the east side of `to`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skip {
    of: String,
    to: String,
    /// Outgoing angle in degrees. The incoming angle is `180 - angle`.
    #[serde(default = "default_angle")]
    angle: f64,
    /// Horizontal shift, in cm, applied to both endpoints.
    #[serde(default)]
    xoffset: f64,
}

fn default_angle() -> f64 {
    60.0
}

impl Skip {
    pub fn new(of: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            of: of.into(),
            to: to.into(),
            angle: default_angle(),
            xoffset: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_xoffset(mut self, xoffset: f64) -> Self {
        self.xoffset = xoffset;
        self
    }

    pub fn of(&self) -> &str {
        &self.of
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    /// Angle at which the path enters the destination.
    pub fn in_angle(&self) -> f64 {
        180.0 - self.angle
    }
}

/// Emit a curved `copyconnection` path for `skip`.
///
/// # Examples
///
/// ```
/// use strata_core::draw::{Skip, to_curved_skip};
///
/// let markup = to_curved_skip(&Skip::new("ccr_b1", "ccr_b5"));
/// assert!(markup.contains("to [out=60,in=120]"));
/// ```
pub fn to_curved_skip(skip: &Skip) -> String {
    trace!(of = skip.of, to = skip.to; "Emitting curved skip");

    let Skip {
        of,
        to,
        angle,
        xoffset,
    } = skip;
    let in_angle = skip.in_angle();

    format!(
        r"
\draw [copyconnection]
    ([xshift={xoffset}cm] {of}-east)
    to [out={angle},in={in_angle}]
    node {{\copymidarrow}}
    ([xshift={xoffset}cm] {to}-east);
"
    )
}

/// Emit a straight `connection` arrow from the east side of `of` to the west
/// side of `to`.
pub fn to_connection(of: &str, to: &str) -> String {
    trace!(of, to; "Emitting connection");

    format!(
        r"
\draw [connection]  ({of}-east)    -- node {{\midarrow}} ({to}-west);
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::test_utils::is_balanced;

    #[test]
    fn test_curved_skip_defaults() {
        let markup = to_curved_skip(&Skip::new("a", "b"));
        let expected = r"
\draw [copyconnection]
    ([xshift=0cm] a-east)
    to [out=60,in=120]
    node {\copymidarrow}
    ([xshift=0cm] b-east);
";
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_curved_skip_angle_and_offset() {
        let markup = to_curved_skip(&Skip::new("a", "b").with_angle(45.0).with_xoffset(-0.5));
        assert!(markup.contains("to [out=45,in=135]"));
        assert!(markup.contains("([xshift=-0.5cm] a-east)"));
        assert!(markup.contains("([xshift=-0.5cm] b-east);"));
    }

    #[test]
    fn test_connection() {
        let markup = to_connection("conv1", "conv2");
        assert_eq!(
            markup,
            "\n\\draw [connection]  (conv1-east)    -- node {\\midarrow} (conv2-west);\n"
        );
        assert!(is_balanced(&markup));
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::draw::test_utils::is_balanced;

    fn skip_strategy() -> impl Strategy<Value = Skip> {
        (
            "[a-z][a-z0-9_]{0,11}",
            "[a-z][a-z0-9_]{0,11}",
            -360.0f64..360.0,
            -10.0f64..10.0,
        )
            .prop_map(|(of, to, angle, xoffset)| {
                Skip::new(of, to).with_angle(angle).with_xoffset(xoffset)
            })
    }

    /// Skip output is balanced, stable across calls and names both endpoints.
    fn check_skip_output(skip: Skip) -> Result<(), TestCaseError> {
        let markup = to_curved_skip(&skip);
        prop_assert!(is_balanced(&markup), "unbalanced markup: {markup}");
        prop_assert_eq!(&markup, &to_curved_skip(&skip));
        for expected in [
            format!("] {}-east)\n", skip.of()),
            format!("] {}-east);", skip.to()),
        ] {
            prop_assert!(markup.contains(&expected), "missing `{expected}` in {markup}");
        }
        Ok(())
    }

    /// The incoming angle always mirrors the outgoing angle around 90 degrees.
    fn check_angle_symmetry(angle: i32) -> Result<(), TestCaseError> {
        let markup = to_curved_skip(&Skip::new("a", "b").with_angle(f64::from(angle)));
        let expected = format!("to [out={angle},in={}]", 180 - angle);
        prop_assert!(markup.contains(&expected), "missing `{expected}` in {markup}");
        Ok(())
    }

    proptest! {
        #[test]
        fn angle_symmetry(angle in -360i32..360) {
            check_angle_symmetry(angle)?;
        }

        #[test]
        fn skip_output_is_well_formed(skip in skip_strategy()) {
            check_skip_output(skip)?;
        }

        #[test]
        fn connection_output_is_balanced(
            of in "[a-z][a-z0-9_]{0,11}",
            to in "[a-z][a-z0-9_]{0,11}",
        ) {
            let markup = to_connection(&of, &to);
            prop_assert!(is_balanced(&markup), "unbalanced markup: {markup}");
            prop_assert_eq!(&markup, &to_connection(&of, &to));
        }
    }
}
