//! Declarative diagram description.
//!
//! A [`Diagram`] is an ordered list of [`Layer`]s. Each layer maps to exactly
//! one core emitter or adapter, and the diagram's markup is the concatenation
//! of the layers' fragments in declaration order.
//!
//! In TOML every layer is a `[[layers]]` table tagged by `kind`:
//!
//! ```toml
//! [[layers]]
//! kind = "conv_relu"
//! name = "ccr_b1"
//! n_filer = [64, 64]
//! width = [2, 2]
//!
//! [[layers]]
//! kind = "curved_skip"
//! of = "ccr_b1"
//! to = "ccr_b5"
//! ```

use std::fmt;

use indexmap::IndexSet;
use serde::Deserialize;

use strata_core::{
    draw::{
        BandedBlock, Block, FlatImage, FontSize, Skip, to_box, to_connection, to_curved_skip,
        to_flat_image, to_right_banded_box, to_scale_font,
    },
    label::LabelSet,
    layers::{to_conv_relu, to_in_out, to_pool, to_rrdb, to_upsample},
};

/// One element or directive of a diagram.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum Layer {
    #[serde(rename = "box")]
    Block(Block),
    #[serde(rename = "right_banded_box")]
    BandedBlock(BandedBlock),
    InOut(Block),
    Rrdb(Block),
    ConvRelu(BandedBlock),
    Upsample(Block),
    Pool(Block),
    CurvedSkip(Skip),
    Connection {
        of: String,
        to: String,
    },
    FlatImage(FlatImage),
    ScaleFont {
        #[serde(default)]
        font: FontSize,
    },
}

impl Layer {
    /// Emit the markup fragment for this layer.
    pub fn to_markup(&self) -> String {
        match self {
            Self::Block(block) => to_box(block),
            Self::BandedBlock(block) => to_right_banded_box(block),
            Self::InOut(block) => to_in_out(block.clone()),
            Self::Rrdb(block) => to_rrdb(block.clone()),
            Self::ConvRelu(block) => to_conv_relu(block.clone()),
            Self::Upsample(block) => to_upsample(block.clone()),
            Self::Pool(block) => to_pool(block.clone()),
            Self::CurvedSkip(skip) => to_curved_skip(skip),
            Self::Connection { of, to } => to_connection(of, to),
            Self::FlatImage(image) => to_flat_image(image),
            Self::ScaleFont { font } => to_scale_font(font),
        }
    }

    /// Name this layer declares for later anchors, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Block(block)
            | Self::InOut(block)
            | Self::Rrdb(block)
            | Self::Upsample(block)
            | Self::Pool(block) => Some(block.name()),
            Self::BandedBlock(block) | Self::ConvRelu(block) => Some(block.name()),
            Self::FlatImage(image) => Some(image.name()),
            Self::CurvedSkip(_) | Self::Connection { .. } | Self::ScaleFont { .. } => None,
        }
    }

    /// Names of other elements this layer points at.
    pub fn references(&self) -> Vec<&str> {
        match self {
            Self::CurvedSkip(skip) => vec![skip.of(), skip.to()],
            Self::Connection { of, to } => vec![of.as_str(), to.as_str()],
            _ => Vec::new(),
        }
    }

    fn branch_labels(&self) -> Option<(&LabelSet, &LabelSet)> {
        match self {
            Self::Block(block)
            | Self::InOut(block)
            | Self::Rrdb(block)
            | Self::Upsample(block)
            | Self::Pool(block) => Some((block.n_filer(), block.width())),
            Self::BandedBlock(block) | Self::ConvRelu(block) => {
                Some((block.n_filer(), block.width()))
            }
            _ => None,
        }
    }
}

/// Conditions the emitters accept but the renderer will likely draw wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Two layers declare the same name; anchors become ambiguous.
    DuplicateName { name: String },
    /// A layer has a different number of filter labels and branch widths.
    CardinalityMismatch {
        name: String,
        labels: usize,
        widths: usize,
    },
    /// A connector points at a name no layer declares.
    UnknownReference { name: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => write!(f, "duplicate element name `{name}`"),
            Self::CardinalityMismatch {
                name,
                labels,
                widths,
            } => write!(
                f,
                "element `{name}` has {labels} filter label(s) but {widths} width(s)"
            ),
            Self::UnknownReference { name } => {
                write!(f, "connector references unknown element `{name}`")
            }
        }
    }
}

/// An ordered list of layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Diagram {
    #[serde(default)]
    layers: Vec<Layer>,
}

impl Diagram {
    pub fn new(layers: Vec<Layer>) -> Self {
        Self { layers }
    }

    /// Append a layer.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Concatenated fragments of every layer, in order.
    pub fn to_markup(&self) -> String {
        self.layers.iter().map(Layer::to_markup).collect()
    }

    /// Report conditions that are accepted but unlikely to render correctly.
    ///
    /// This never rejects a diagram.
    pub fn check(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let mut names = IndexSet::new();

        for layer in &self.layers {
            let Some(name) = layer.name() else {
                continue;
            };

            if !names.insert(name) {
                warnings.push(Warning::DuplicateName {
                    name: name.to_string(),
                });
            }

            if let Some((labels, widths)) = layer.branch_labels() {
                if labels.len() != widths.len() {
                    warnings.push(Warning::CardinalityMismatch {
                        name: name.to_string(),
                        labels: labels.len(),
                        widths: widths.len(),
                    });
                }
            }
        }

        for reference in self.layers.iter().flat_map(Layer::references) {
            if !names.contains(reference) {
                warnings.push(Warning::UnknownReference {
                    name: reference.to_string(),
                });
            }
        }

        warnings
    }
}

impl FromIterator<Layer> for Diagram {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
