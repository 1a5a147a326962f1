//! Exporting the current arc.
//!
//! Nothing written here is ever read back; these are one-way exports.

use std::path::Path;

use arcparams::{escape_attribute, ArcParameters};

use crate::edit_session::ArcSession;

/// File types offered by the save panel.
pub const SVG_EXTENSION: &str = "svg";
pub const JSON_EXTENSION: &str = "json";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Svg,
    Json,
}

#[derive(Debug, Clone)]
pub enum ExportError {
    UnknownFormat(String),
}

type BoxErr = Box<dyn std::error::Error>;

impl Format {
    /// Pick a format from the extension of `path`.
    pub fn for_path(path: &Path) -> Result<Format, ExportError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            SVG_EXTENSION => Ok(Format::Svg),
            JSON_EXTENSION => Ok(Format::Json),
            _ => Err(ExportError::UnknownFormat(ext.to_owned())),
        }
    }
}

/// Write the session to `path`, in the format its extension names.
pub fn export(path: &Path, session: &ArcSession) -> Result<(), BoxErr> {
    let contents = match Format::for_path(path)? {
        Format::Svg => svg_document(session.surface.description()),
        Format::Json => to_json(session.model.params())?,
    };
    std::fs::write(path, contents.as_bytes())?;
    Ok(())
}

/// A standalone SVG document drawing `description`.
pub fn svg_document(description: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500" viewBox="0 0 500 500">
  <path d="{}" fill="none" stroke="#4b4eff" stroke-width="2" />
</svg>
"##,
        escape_attribute(description)
    )
}

pub fn to_json(params: &ArcParameters) -> Result<String, BoxErr> {
    serde_json::to_string_pretty(params).map_err(Into::into)
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExportError::UnknownFormat(ext) if ext.is_empty() => {
                write!(f, "Missing file extension, expected .svg or .json")
            }
            ExportError::UnknownFormat(ext) => write!(f, "Unknown file extension '.{}'", ext),
        }
    }
}

impl std::error::Error for ExportError {}

#[cfg(test)]
mod tests {
    use super::*;
    use arcparams::Field;

    #[test]
    fn formats() {
        assert_eq!(Format::for_path(Path::new("arc.svg")).unwrap(), Format::Svg);
        assert_eq!(Format::for_path(Path::new("a/b/arc.JSON")).unwrap(), Format::Json);
        assert!(Format::for_path(Path::new("arc.png")).is_err());
        assert!(Format::for_path(Path::new("arc")).is_err());
    }

    #[test]
    fn svg_contains_description() {
        let session = ArcSession::new();
        let doc = svg_document(session.surface.description());
        assert!(doc.contains(r#"d="M 10 315 L 110 215 a30 50 0 0 1 162.55 162.45 L 315 10""#));
    }

    #[test]
    fn svg_escapes_raw_text() {
        let mut session = ArcSession::new();
        session.notify(Field::Rx, "\"<1>\"");
        let doc = svg_document(session.surface.description());
        assert!(doc.contains("a&quot;&lt;1&gt;&quot; 50"));
    }

    #[test]
    fn json_export() {
        let mut session = ArcSession::new();
        session.notify(Field::XAxisRotation, "45");
        let json = to_json(session.model.params()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["xAxisRotation"], "45");
        assert_eq!(value["sweepFlag"], true);
    }
}
