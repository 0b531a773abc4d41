//! Configuration types for Strata document assembly.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining document and style settings.
//! - [`DocumentConfig`] - Controls the standalone document header.
//! - [`StyleConfig`] - Controls the color palette and the picture-wide font.
//!
//! # Example
//!
//! ```
//! # use strata::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.document().layers_path(), "../layers/");
//! assert!(config.style().palette().is_ok());
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use strata_core::draw::FontSize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Document header section.
    #[serde(default)]
    document: DocumentConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(document: DocumentConfig, style: StyleConfig) -> Self {
        Self { document, style }
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Settings for the standalone document wrapping the picture.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Directory holding the renderer's layer definitions, relative to the
    /// output document.
    #[serde(default = "default_layers_path")]
    layers_path: String,

    /// Border around the standalone picture.
    #[serde(default = "default_border")]
    border: String,
}

fn default_layers_path() -> String {
    "../layers/".to_string()
}

fn default_border() -> String {
    "8pt".to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            layers_path: default_layers_path(),
            border: default_border(),
        }
    }
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`].
    pub fn new(layers_path: impl Into<String>, border: impl Into<String>) -> Self {
        Self {
            layers_path: layers_path.into(),
            border: border.into(),
        }
    }

    pub fn layers_path(&self) -> &str {
        &self.layers_path
    }

    pub fn border(&self) -> &str {
        &self.border
    }
}

/// Visual styling configuration.
///
/// Palette entries override built-in color definitions with the same name
/// or add new ones. Values are color expressions understood by the renderer,
/// e.g. `"rgb:yellow,5;red,2.5;white,5"`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Font applied to the whole picture, if any.
    #[serde(default)]
    font: Option<FontSize>,

    /// Extra or replacement color definitions, in declaration order.
    #[serde(default)]
    palette: IndexMap<String, String>,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(font: Option<FontSize>, palette: IndexMap<String, String>) -> Self {
        Self { font, palette }
    }

    /// Returns the picture-wide font, or `None` to keep the renderer default.
    pub fn font(&self) -> Option<&FontSize> {
        self.font.as_ref()
    }

    /// Returns the configured palette entries.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not a valid macro name (ASCII letters
    /// only) or a value is empty.
    pub fn palette(&self) -> Result<&IndexMap<String, String>, String> {
        for (name, value) in &self.palette {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(format!(
                    "Invalid palette name `{name}`: only ASCII letters are allowed"
                ));
            }
            if value.trim().is_empty() {
                return Err(format!("Palette entry `{name}` has an empty color"));
            }
        }
        Ok(&self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.document().layers_path(), "../layers/");
        assert_eq!(config.document().border(), "8pt");
        assert!(config.style().font().is_none());
        assert!(config.style().palette().unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [document]
            border = "4pt"

            [style]
            font = "Large"

            [style.palette]
            SumColor = "rgb:blue,5;green,15"
            "#,
        )
        .unwrap();

        assert_eq!(config.document().layers_path(), "../layers/");
        assert_eq!(config.document().border(), "4pt");
        assert_eq!(config.style().font(), Some(&FontSize::Larger));
        assert_eq!(
            config.style().palette().unwrap().get("SumColor").map(String::as_str),
            Some("rgb:blue,5;green,15")
        );
    }

    #[test]
    fn test_invalid_palette_name() {
        let mut palette = IndexMap::new();
        palette.insert("Conv_2".to_string(), "red".to_string());
        let style = StyleConfig::new(None, palette);
        assert!(style.palette().is_err());
    }
}
