//! Volumetric block with an attached band.
//!
//! The band stands for an operation fused onto the layer, typically an
//! activation following a convolution. Branch widths are independent, so a
//! convolution branch and a skip branch can be drawn with different
//! thicknesses inside one element.

use log::trace;
use serde::Deserialize;

use super::block::{default_caption, default_extent, default_s_filer};
use crate::{
    color::Fill,
    label::{Label, LabelSet},
    position::Position,
};

/// Parameters of a banded block.
///
/// Same fields as [`Block`](super::Block) plus `bandfill`. Defaults describe
/// three 64-filter branches of width 2; `fill` defaults to `ConvColor` and
/// `bandfill` to `ConvReluColor`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandedBlock {
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
    #[serde(default = "default_bandfill")]
    pub(crate) bandfill: Fill,
}

fn default_n_filer() -> LabelSet {
    LabelSet::from([64, 64, 64])
}

fn default_width() -> LabelSet {
    LabelSet::from([2, 2, 2])
}

fn default_fill() -> Fill {
    Fill::named("ConvColor")
}

fn default_bandfill() -> Fill {
    Fill::named("ConvReluColor")
}

impl BandedBlock {
    /// Create a banded block with default geometry and labels.
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
            bandfill: default_bandfill(),
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

    pub fn with_bandfill(mut self, bandfill: Fill) -> Self {
        self.bandfill = bandfill;
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

    pub fn bandfill(&self) -> &Fill {
        &self.bandfill
    }
}

/// Emit a `RightBandedBox` pic for `block`.
pub fn to_right_banded_box(block: &BandedBlock) -> String {
    trace!(name = block.name; "Emitting banded box");

    let BandedBlock {
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
        bandfill,
    } = block;

    format!(
        r"
\pic[shift={{ {offset} }}] at {to}{{
RightBandedBox={{
    name={name},
    caption={caption},
    xlabel={{ {n_filer}, }},
    zlabel={s_filer},
    fill={fill},
    bandfill={bandfill},
    height={height},
    width={{ {width} }},
    depth={depth}
    }}
}};
"
    )
}
