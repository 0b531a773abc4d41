//! Plain volumetric block.

use log::trace;
use serde::Deserialize;

use crate::{
    color::Fill,
    label::{Label, LabelSet},
    position::Position,
};

/// Parameters of a plain block.
///
/// Only `name` is required; it must be unique across a diagram because later
/// elements address this one through its anchors. Every other field has a
/// default matching a 64-filter convolution on a 256-wide input:
///
/// | Field | Default |
/// |---|---|
/// | `s_filer` | `256` |
/// | `n_filer` | `64` |
/// | `offset`, `to` | `(0,0,0)` |
/// | `width` | `2` |
/// | `height`, `depth` | `40` |
/// | `caption` | `" "` |
/// | `fill` | `ConvColor` |
///
/// `n_filer` and `width` may each be a sequence, one entry per parallel
/// branch. Their cardinalities are not compared.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub(crate) name: String,
    #[serde(default = "default_s_filer")]
    pub(crate) s_filer: Label,
    #[serde(default = "default_n_filer")]
    pub(crate) n_filer: LabelSet,
    #[serde(default)]
    pub(crate) offset: Position,
    #[serde(default)]
    pub(crate) to: Position,
    #[serde(default = "default_width")]
    pub(crate) width: LabelSet,
    #[serde(default = "default_extent")]
    pub(crate) height: f64,
    #[serde(default = "default_extent")]
    pub(crate) depth: f64,
    #[serde(default = "default_caption")]
    pub(crate) caption: String,
    #[serde(default = "default_fill")]
    pub(crate) fill: Fill,
}

pub(crate) fn default_s_filer() -> Label {
    Label::Int(256)
}

fn default_n_filer() -> LabelSet {
    LabelSet::from(64)
}

fn default_width() -> LabelSet {
    LabelSet::from(2)
}

pub(crate) fn default_extent() -> f64 {
    40.0
}

pub(crate) fn default_caption() -> String {
    " ".to_string()
}

fn default_fill() -> Fill {
    Fill::named("ConvColor")
}

impl Block {
    /// Create a block with default geometry and labels.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            s_filer: default_s_filer(),
            n_filer: default_n_filer(),
            offset: Position::default(),
            to: Position::default(),
            width: default_width(),
            height: default_extent(),
            depth: default_extent(),
            caption: default_caption(),
            fill: default_fill(),
        }
    }

    pub fn with_s_filer(mut self, s_filer: impl Into<Label>) -> Self {
        self.s_filer = s_filer.into();
        self
    }

    pub fn with_n_filer(mut self, n_filer: impl Into<LabelSet>) -> Self {
        self.n_filer = n_filer.into();
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Position>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn with_to(mut self, to: impl Into<Position>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_width(mut self, width: impl Into<LabelSet>) -> Self {
        self.width = width.into();
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_filer(&self) -> &LabelSet {
        &self.n_filer
    }

    pub fn width(&self) -> &LabelSet {
        &self.width
    }

    pub fn fill(&self) -> &Fill {
        &self.fill
    }
}

/// Emit a `Box` pic for `block`.
///
/// # Examples
///
/// ```
/// use strata_core::draw::{Block, to_box};
///
/// let markup = to_box(&Block::new("conv1").with_caption("conv1"));
/// assert!(markup.contains("name=conv1,"));
/// assert!(markup.contains("zlabel=256,"));
/// ```
pub fn to_box(block: &Block) -> String {
    trace!(name = block.name; "Emitting box");

    let Block {
        name,
        s_filer,
        n_filer,
        offset,
        to,
        width,
        height,
        depth,
        caption,
        fill,
    } = block;

    format!(
        r"
\pic[shift={{ {offset} }}] at {to}{{
    Box={{
        name={name},
        caption={caption},
        xlabel={{ {n_filer}, }},
        zlabel={s_filer},
        fill={fill},
        height={height},
        width={{ {width} }},
        depth={depth}
        }}
    }};
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::test_utils::is_balanced;

    #[test]
    fn test_box_defaults() {
        let markup = to_box(&Block::new("conv1"));
        let expected = r"
\pic[shift={ (0,0,0) }] at (0,0,0){
    Box={
        name=conv1,
        caption= ,
        xlabel={ 64, },
        zlabel=256,
        fill=ConvColor,
        height=40,
        width={ 2 },
        depth=40
        }
    };
";
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_box_scalar_labels() {
        let block = Block::new("conv1")
            .with_width(2)
            .with_height(40.0)
            .with_depth(40.0)
            .with_n_filer(64)
            .with_s_filer(256);
        let markup = to_box(&block);

        assert!(markup.contains("xlabel={ 64, },"));
        assert!(markup.contains("zlabel=256,"));
    }

    #[test]
    fn test_box_multi_branch() {
        let block = Block::new("pool1")
            .with_n_filer([16, 32])
            .with_width([1.5, 3.0]);
        let markup = to_box(&block);

        assert!(markup.contains("xlabel={ 16, 32, },"));
        assert!(markup.contains("width={ 1.5, 3 },"));
    }

    #[test]
    fn test_box_positions_are_verbatim() {
        let block = Block::new("conv2")
            .with_offset("(1,0,0)")
            .with_to("(conv1-east)");
        let markup = to_box(&block);

        assert!(markup.contains(r"\pic[shift={ (1,0,0) }] at (conv1-east){"));
    }

    #[test]
    fn test_box_fractional_extents() {
        let markup = to_box(&Block::new("b").with_height(12.5).with_depth(0.25));
        assert!(markup.contains("height=12.5,"));
        assert!(markup.contains("depth=0.25\n"));
    }

    #[test]
    fn test_box_is_balanced_and_idempotent() {
        let block = Block::new("conv1").with_fill(Fill::conv());
        let first = to_box(&block);
        assert!(is_balanced(&first));
        assert_eq!(first, to_box(&block));
    }
}
