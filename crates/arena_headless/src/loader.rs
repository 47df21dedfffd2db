//! Catalog loading from RON files.
//!
//! The core defines the template types and does no IO; this module reads
//! and parses the data files.

use std::fs;
use std::path::Path;

use arena_core::catalog::{Catalog, UnitTemplate};
use arena_core::error::{ArenaError, Result};

/// Parse a catalog from RON text. `origin` labels the source in errors.
pub fn parse_catalog(source: &str, origin: &str) -> Result<Catalog> {
    let templates: Vec<UnitTemplate> = ron::from_str(source).map_err(|e| {
        ArenaError::CatalogParse {
            path: origin.to_string(),
            message: e.to_string(),
        }
    })?;
    tracing::info!(origin, templates = templates.len(), "catalog loaded");
    Ok(Catalog::new(templates))
}

/// Load a catalog from a RON file on disk.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let origin = path.display().to_string();
    let source = fs::read_to_string(path).map_err(|e| ArenaError::CatalogParse {
        path: origin.clone(),
        message: e.to_string(),
    })?;
    parse_catalog(&source, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::catalog::builtin_catalog;

    #[test]
    fn parse_round_trips_builtin_templates() {
        let templates = builtin_catalog().templates().to_vec();
        let text = ron::to_string(&templates).expect("serialize catalog");

        let catalog = parse_catalog(&text, "builtin").expect("parse catalog");
        assert_eq!(catalog.len(), templates.len());
        assert!(catalog.find("Garen").is_some());
        assert_eq!(catalog.find("Ahri").unwrap(), builtin_catalog().find("Ahri").unwrap());
    }

    #[test]
    fn malformed_input_surfaces_parse_error() {
        let err = parse_catalog("not ron at all {", "bad.ron").unwrap_err();
        assert!(matches!(err, ArenaError::CatalogParse { ref path, .. } if path == "bad.ron"));
    }

    #[test]
    fn missing_file_surfaces_parse_error() {
        let err = load_catalog(Path::new("/definitely/not/here.ron")).unwrap_err();
        assert!(matches!(err, ArenaError::CatalogParse { .. }));
    }
}
