//! Deck files.
//!
//! A deck is an ordered list of card definitions stored as JSONC, either as
//! a bare array or as `{ "cards": [...] }`.

use crate::action::{ActionProps, ActionSpec};
use crate::config::strip_jsonc_comments;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Bare(Vec<ActionProps>),
    Wrapped { cards: Vec<ActionProps> },
}

/// Parse deck contents into card specs, keeping file order.
pub fn parse_deck(content: &str) -> Result<Vec<ActionSpec>, serde_json::Error> {
    let file: DeckFile = serde_json::from_str(&strip_jsonc_comments(content))?;
    let props = match file {
        DeckFile::Bare(cards) | DeckFile::Wrapped { cards } => cards,
    };
    Ok(props.into_iter().map(ActionSpec::from).collect())
}

/// Load a deck file.
///
/// A missing file is an error: without cards there is nothing to show.
pub fn load_deck(path: &Path) -> Result<Vec<ActionSpec>, DeckError> {
    let content = fs::read_to_string(path).map_err(|source| DeckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let specs = parse_deck(&content).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), cards = specs.len(), "loaded deck");
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::spec::{ActionKind, Variation};
    use tempfile::TempDir;

    #[test]
    fn test_parse_bare_array() {
        let specs = parse_deck(
            r#"[
                // first card
                {"title": "Docs", "type": "external", "url": "https://example.com"},
                {"title": "Search", "type": "internal", "query": "neural nets"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            specs,
            vec![
                ActionSpec::external("Docs", "https://example.com"),
                ActionSpec::internal("Search", "neural nets"),
            ]
        );
    }

    #[test]
    fn test_parse_wrapped_object() {
        let specs = parse_deck(
            r#"{"cards": [
                {"title": "Models", "type": "variations", "variations": [{"name": "A", "query": "foo"}]},
                {"title": "Broken", "type": "nope"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            specs[0].kind,
            ActionKind::Variations {
                items: vec![Variation::new("A", "foo")]
            }
        );
        assert_eq!(specs[1].kind, ActionKind::Inert);
    }

    #[test]
    fn test_load_deck_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = load_deck(&temp_dir.path().join("absent.jsonc"));
        assert!(matches!(missing, Err(DeckError::Read { .. })));

        let bad_path = temp_dir.path().join("bad.jsonc");
        fs::write(&bad_path, "{ not json").unwrap();
        let bad = load_deck(&bad_path);
        assert!(matches!(bad, Err(DeckError::Parse { .. })));
    }

    #[test]
    fn test_load_deck_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("deck.jsonc");
        fs::write(
            &path,
            r#"[{"title": "About", "type": "info", "message": "See https://example.com"}]"#,
        )
        .unwrap();

        let specs = load_deck(&path).unwrap();
        assert_eq!(specs, vec![ActionSpec::info("About", "See https://example.com")]);
    }
}
