//! Standalone document assembly.
//!
//! Fragments emitted by the core reference palette macros, connection styles
//! and arrow markers that only exist once the document preamble defines them.
//! [`Document`] wraps a sequence of fragments with that preamble and closes
//! the picture afterwards.

use indexmap::IndexMap;
use log::debug;

use strata_core::draw::to_scale_font;

use crate::config::AppConfig;

/// Built-in color definitions, in emission order.
const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("ConvColor", "rgb:yellow,5;red,2.5;white,5"),
    ("ConvReluColor", "rgb:yellow,5;red,5;white,5"),
    ("PoolColor", "rgb:red,1;black,0.3"),
    ("UnpoolColor", "rgb:blue,2;green,1;black,0.3"),
    ("FcColor", "rgb:blue,5;red,2.5;white,5"),
    ("FcReluColor", "rgb:blue,5;red,5;white,4"),
    ("SoftmaxColor", "rgb:magenta,5;black,7"),
    ("SumColor", "rgb:blue,5;green,15"),
    ("edgecolor", "rgb:blue,4;red,1;green,4;black,3"),
];

const MARKERS: &str = r"\newcommand{\midarrow}{\tikz \draw[-Stealth,line width=0.8mm,draw=\edgecolor] (-0.3,0) -- ++(0.3,0);}
\newcommand{\copymidarrow}{\tikz \draw[-Stealth,line width=0.8mm,draw={rgb:blue,4;red,1;green,1;black,3}] (-0.3,0) -- ++(0.3,0);}
";

const CONNECTION_STYLES: &str = r"\tikzstyle{connection}=[ultra thick,every node/.style={sloped,allow upside down},draw=\edgecolor,opacity=0.7]
\tikzstyle{copyconnection}=[ultra thick,every node/.style={sloped,allow upside down},draw={rgb:blue,4;red,1;green,1;black,3},opacity=0.7]
";

/// A picture under construction.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    config: &'a AppConfig,
    palette: IndexMap<&'a str, &'a str>,
    fragments: Vec<String>,
}

impl<'a> Document<'a> {
    /// Create an empty document.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is invalid.
    pub fn new(config: &'a AppConfig) -> Result<Self, String> {
        let mut palette: IndexMap<&str, &str> = DEFAULT_PALETTE.iter().copied().collect();
        for (name, value) in config.style().palette()? {
            palette.insert(name.as_str(), value.as_str());
        }

        Ok(Self {
            config,
            palette,
            fragments: Vec::new(),
        })
    }

    /// Append a fragment to the picture body.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Number of fragments in the body.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the full document.
    pub fn render(&self) -> String {
        let document = self.config.document();
        debug!(
            fragments = self.fragments.len(),
            palette = self.palette.len();
            "Assembling document"
        );

        let mut out = format!(
            r"\documentclass[border={border}, multi, tikz]{{standalone}}
\usepackage{{import}}
\subimport{{{layers}}}{{init}}
\usetikzlibrary{{positioning}}
\usetikzlibrary{{3d}} %for including external image

",
            border = document.border(),
            layers = document.layers_path(),
        );

        for (name, value) in &self.palette {
            out.push_str(&format!("\\def\\{name}{{{value}}}\n"));
        }
        out.push_str(MARKERS);
        out.push('\n');

        out.push_str("\\begin{document}\n\\begin{tikzpicture}\n");
        out.push_str(CONNECTION_STYLES);
        if let Some(font) = self.config.style().font() {
            out.push_str(&to_scale_font(font));
        }

        for fragment in &self.fragments {
            out.push_str(fragment);
        }

        out.push_str("\n\\end{tikzpicture}\n\\end{document}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use strata_core::draw::{Block, FontSize, to_box};

    use super::*;
    use crate::config::{DocumentConfig, StyleConfig};

    #[test]
    fn test_empty_document_structure() {
        let config = AppConfig::default();
        let document = Document::new(&config).unwrap();
        let out = document.render();

        assert!(out.starts_with(r"\documentclass[border=8pt, multi, tikz]{standalone}"));
        assert!(out.contains(r"\subimport{../layers/}{init}"));
        assert!(out.contains(r"\def\ConvColor{rgb:yellow,5;red,2.5;white,5}"));
        assert!(out.contains(r"\tikzstyle{copyconnection}="));
        assert!(out.contains(r"\newcommand{\copymidarrow}"));
        assert!(out.ends_with("\\end{tikzpicture}\n\\end{document}\n"));
        assert!(!out.contains(r"\tikzset{font="));
    }

    #[test]
    fn test_fragments_in_body() {
        let config = AppConfig::default();
        let mut document = Document::new(&config).unwrap();
        document.push(to_box(&Block::new("conv1")));
        assert_eq!(document.len(), 1);

        let out = document.render();
        let begin = out.find(r"\begin{tikzpicture}").unwrap();
        let body = out.find("name=conv1").unwrap();
        let end = out.find(r"\end{tikzpicture}").unwrap();
        assert!(begin < body && body < end);
    }

    #[test]
    fn test_palette_override_and_font() {
        let mut palette = IndexMap::new();
        palette.insert("ConvColor".to_string(), "rgb:red,1".to_string());
        palette.insert("NormColor".to_string(), "rgb:green,3".to_string());
        let config = AppConfig::new(
            DocumentConfig::new("layers/", "2pt"),
            StyleConfig::new(Some(FontSize::Small), palette),
        );

        let out = Document::new(&config).unwrap().render();
        assert!(out.contains(r"\def\ConvColor{rgb:red,1}"));
        assert!(!out.contains(r"\def\ConvColor{rgb:yellow"));
        assert!(out.contains(r"\def\NormColor{rgb:green,3}"));
        assert!(out.contains(r"\subimport{layers/}{init}"));
        assert!(out.contains("border=2pt"));
        assert!(out.contains(r"\tikzset{font=\small}"));
    }

    #[test]
    fn test_invalid_palette_is_rejected() {
        let mut palette = IndexMap::new();
        palette.insert("bad name".to_string(), "red".to_string());
        let config = AppConfig::new(DocumentConfig::default(), StyleConfig::new(None, palette));
        assert!(Document::new(&config).is_err());
    }
}
