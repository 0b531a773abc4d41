//! Strata Core Types and Emitters
//!
//! This crate turns the logical parameters of a pipeline layer into TikZ
//! markup fragments. It includes:
//!
//! - **Labels**: Scalar-or-sequence label values and their formatter ([`label`] module)
//! - **Positions**: Opaque coordinate expressions and anchor helpers ([`position`] module)
//! - **Colors**: Fill tokens, macros and CSS colors ([`color::Fill`])
//! - **Draw**: Primitive, connector and auxiliary emitters ([`draw`] module)
//! - **Layers**: Layer-type adapters over the primitives ([`layers`] module)
//!
//! Every emitter is a pure function of its arguments. Fragments are
//! self-contained and can be concatenated in any order by the caller.
//!
//! # Example
//!
//! ```
//! use strata_core::draw::{Block, to_box};
//!
//! let conv1 = Block::new("conv1").with_n_filer(64);
//! let markup = to_box(&conv1);
//! assert!(markup.contains("xlabel={ 64, }"));
//! ```

pub mod color;
pub mod draw;
pub mod label;
pub mod layers;
pub mod position;

mod error;

pub use error::Error;
