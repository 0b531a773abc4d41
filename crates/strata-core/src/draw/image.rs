//! Flat 2-D image placed on the canvas plane.

use log::trace;
use serde::Deserialize;

use crate::position::Position;

/// An image drawn on the `z=0` plane at `to`.
///
/// Width and height are in cm. The resource path is not checked.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatImage {
    path: String,
    #[serde(default = "default_to")]
    to: Position,
    #[serde(default = "default_size")]
    width: f64,
    #[serde(default = "default_size")]
    height: f64,
    #[serde(default = "default_name")]
    name: String,
}

fn default_to() -> Position {
    Position::at(-3, 0, 0)
}

fn default_size() -> f64 {
    8.0
}

fn default_name() -> String {
    "temp".to_string()
}

impl FlatImage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            to: default_to(),
            width: default_size(),
            height: default_size(),
            name: default_name(),
        }
    }

    pub fn with_to(mut self, to: impl Into<Position>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Emit a canvas-plane node holding `image`.
pub fn to_flat_image(image: &FlatImage) -> String {
    trace!(name = image.name, path = image.path; "Emitting flat image");

    let FlatImage {
        path,
        to,
        width,
        height,
        name,
    } = image;

    format!(
        r"
\node[canvas is xy plane at z=0] ({name}) at {to}{{
    \includegraphics[width={width}cm,height={height}cm]{{{path}}}
}};
"
    )
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::draw::test_utils::is_balanced;

    fn image_strategy() -> impl Strategy<Value = FlatImage> {
        (
            "[a-z0-9_/]{1,16}\\.(png|jpg)",
            "[a-z][a-z0-9_]{0,11}",
            (-20i32..20, -20i32..20, -20i32..20),
            0.1f64..50.0,
            0.1f64..50.0,
        )
            .prop_map(|(path, name, (x, y, z), width, height)| {
                FlatImage::new(path)
                    .with_name(name)
                    .with_to(Position::at(x, y, z))
                    .with_size(width, height)
            })
    }

    /// Image output is balanced, stable and carries name and path verbatim.
    fn check_image_output(image: FlatImage) -> Result<(), TestCaseError> {
        let markup = to_flat_image(&image);
        prop_assert!(is_balanced(&markup), "unbalanced markup: {markup}");
        prop_assert_eq!(&markup, &to_flat_image(&image));
        for expected in [
            format!("({}) at ", image.name),
            format!("]{{{}}}", image.path),
        ] {
            prop_assert!(markup.contains(&expected), "missing `{expected}` in {markup}");
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn image_output_is_well_formed(image in image_strategy()) {
            check_image_output(image)?;
        }
    }
}
