//! Markup emitters for diagram elements.
//!
//! # Overview
//!
//! Exported emitters:
//! - [`to_box`]: plain volumetric block described by a [`Block`]
//! - [`to_right_banded_box`]: block with a fused band described by a [`BandedBlock`]
//! - [`to_curved_skip`] / [`to_connection`]: arrows between named anchors
//! - [`to_flat_image`]: flat image placed on the canvas plane
//! - [`to_scale_font`]: global font directive
//!
//! Every emitter returns an owned, self-contained fragment. Fragments start
//! with a newline so they can be concatenated without separators.

mod banded_block;
mod block;
mod connector;
mod font;
mod image;

pub use banded_block::{BandedBlock, to_right_banded_box};
pub use block::{Block, to_box};
pub use connector::{Skip, to_connection, to_curved_skip};
pub use font::{FontSize, to_scale_font};
pub use image::{FlatImage, to_flat_image};
