//! Layer-type adapters.
//!
//! Thin wrappers over [`to_box`] and [`to_right_banded_box`] that fix the fill
//! convention for a layer role. Geometry and labels are forwarded unchanged;
//! any fill set on the input is replaced.
//!
//! | Adapter | Base | Fill |
//! |---|---|---|
//! | [`to_in_out`] | box | `{rgb:green,1;black,3}` |
//! | [`to_rrdb`] | box | `{rgb:white,1;black,3}`, filter labels blanked |
//! | [`to_conv_relu`] | banded box | `\ConvColor`, band `\ConvReluColor` |
//! | [`to_upsample`] | box | `\UnpoolColor` |
//! | [`to_pool`] | box | `\PoolColor` |

use crate::{
    color::Fill,
    draw::{BandedBlock, Block, to_box, to_right_banded_box},
};

/// Input or output image layer.
pub fn to_in_out(block: Block) -> String {
    to_box(&block.with_fill(Fill::in_out()))
}

/// Residual-in-residual dense block.
///
/// Every filter label is replaced by a blank placeholder so the branch count
/// stays visible without numbers.
pub fn to_rrdb(block: Block) -> String {
    let n_filer = block.n_filer.blanked();
    to_box(&block.with_n_filer(n_filer).with_fill(Fill::residual()))
}

/// Convolution followed by an activation, drawn as a banded block.
pub fn to_conv_relu(block: BandedBlock) -> String {
    to_right_banded_box(
        &block
            .with_fill(Fill::conv())
            .with_bandfill(Fill::conv_relu()),
    )
}

/// Nearest-neighbour upsampling layer.
pub fn to_upsample(block: Block) -> String {
    to_box(&block.with_fill(Fill::unpool()))
}

/// Pooling layer.
pub fn to_pool(block: Block) -> String {
    to_box(&block.with_fill(Fill::pool()))
}
