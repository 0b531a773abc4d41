//! Strata - declarative TikZ diagrams of layered pipelines.
//!
//! Describes a network architecture as an ordered list of layers and turns it
//! into markup for the TikZ renderer. The primitive emitters live in
//! [`strata_core`] and are re-exported here; this crate adds the TOML
//! description format, configuration and document assembly.

pub mod config;
pub mod diagram;
pub mod document;

mod error;

pub use strata_core::{color, draw, label, layers, position};

pub use error::StrataError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use diagram::Diagram;
use document::Document;

/// Builder for parsing and rendering Strata diagrams.
///
/// # Examples
///
/// ```rust
/// use strata::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     [[layers]]
///     kind = "in_out"
///     name = "input"
///     n_filer = 3
///     width = 1
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
/// let tex = builder.render(&diagram).expect("Failed to render");
/// assert!(tex.contains("name=input,"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML diagram description.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::Parse` for malformed TOML, unknown layer kinds,
    /// missing required fields such as `name`, or invalid colors.
    pub fn parse(&self, source: &str) -> Result<Diagram, StrataError> {
        info!("Parsing diagram");

        let diagram: Diagram =
            toml::from_str(source).map_err(|err| StrataError::new_parse_error(err, source))?;

        debug!(layers = diagram.layers().len(); "Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render only the concatenated fragments of `diagram`, without preamble.
    ///
    /// Conditions the emitters accept but the renderer is likely to draw
    /// wrong are logged as warnings.
    pub fn render_fragments(&self, diagram: &Diagram) -> String {
        for warning in diagram.check() {
            warn!(warning:%; "Diagram will likely render incorrectly");
        }

        diagram.to_markup()
    }

    /// Render `diagram` as a complete standalone document.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::Config` if the configured palette is invalid.
    pub fn render(&self, diagram: &Diagram) -> Result<String, StrataError> {
        info!(layers = diagram.layers().len(); "Rendering diagram");

        let mut document = Document::new(&self.config).map_err(StrataError::Config)?;
        document.push(self.render_fragments(diagram));
        let tex = document.render();

        info!(bytes = tex.len(); "Document rendered successfully");
        Ok(tex)
    }
}
