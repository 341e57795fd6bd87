//! Action card definitions.
//!
//! `ActionProps` is the loose wire shape found in deck files; `ActionSpec`
//! is the closed form the widget works with.

use serde::{Deserialize, Serialize};

/// A named, pre-defined search query offered in the variation picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Label shown in the picker
    pub name: String,
    /// Search term used when this variation is selected
    pub query: String,
}

impl Variation {
    #[allow(dead_code)] // Convenience for building decks in code
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
        }
    }
}

/// What a card does, with exactly the payload each behavior needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Opens `url` in a new browsing context
    External { url: String },
    /// Navigates to the internal search view for `query`
    Internal { query: String },
    /// Offers a picker of variations, each navigating to its own query
    Variations { items: Vec<Variation> },
    /// Static informational text
    Info { message: String },
    /// Static placeholder text
    Placeholder { message: String },
    /// Button with nothing bound to it.
    ///
    /// Unknown kinds and button kinds missing their target end up here.
    Inert,
}

/// Configuration for one rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub title: String,
    pub kind: ActionKind,
}

impl ActionSpec {
    pub fn new(title: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }

    /// Card opening `url`; an empty `url` gives an inert card.
    pub fn external(title: impl Into<String>, url: impl Into<String>) -> Self {
        let kind = match present(Some(url.into())) {
            Some(url) => ActionKind::External { url },
            None => ActionKind::Inert,
        };
        Self::new(title, kind)
    }

    /// Card searching for `query`; an empty `query` gives an inert card.
    pub fn internal(title: impl Into<String>, query: impl Into<String>) -> Self {
        let kind = match present(Some(query.into())) {
            Some(query) => ActionKind::Internal { query },
            None => ActionKind::Inert,
        };
        Self::new(title, kind)
    }

    pub fn variations(title: impl Into<String>, items: Vec<Variation>) -> Self {
        Self::new(title, ActionKind::Variations { items })
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            title,
            ActionKind::Info {
                message: message.into(),
            },
        )
    }

    pub fn placeholder(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            title,
            ActionKind::Placeholder {
                message: message.into(),
            },
        )
    }

    /// Short name of the kind, matching the `type` values of deck files.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ActionKind::External { .. } => "external",
            ActionKind::Internal { .. } => "internal",
            ActionKind::Variations { .. } => "variations",
            ActionKind::Info { .. } => "info",
            ActionKind::Placeholder { .. } => "placeholder",
            ActionKind::Inert => "inert",
        }
    }
}

/// Card entry as it appears in a deck file.
///
/// Every field except `title` is optional; which ones matter depends on
/// `type`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionProps {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Empty strings count as absent, the same as a missing field.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl From<ActionProps> for ActionSpec {
    fn from(props: ActionProps) -> Self {
        let title = props.title;
        match props.kind.as_deref() {
            Some("external") => Self::external(title, props.url.unwrap_or_default()),
            Some("internal") => Self::internal(title, props.query.unwrap_or_default()),
            Some("variations") => Self::variations(title, props.variations.unwrap_or_default()),
            Some("info") => Self::info(title, props.message.unwrap_or_default()),
            Some("placeholder") => Self::placeholder(title, props.message.unwrap_or_default()),
            _ => Self::new(title, ActionKind::Inert),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(json: &str) -> ActionProps {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_external_with_url() {
        let spec = ActionSpec::from(props(
            r#"{"title": "Docs", "type": "external", "url": "https://example.com"}"#,
        ));
        assert_eq!(spec, ActionSpec::external("Docs", "https://example.com"));
    }

    #[test]
    fn test_button_kinds_without_target_are_inert() {
        let no_url = ActionSpec::from(props(r#"{"title": "Docs", "type": "external"}"#));
        assert_eq!(no_url.kind, ActionKind::Inert);

        let empty_query = ActionSpec::from(props(
            r#"{"title": "Find", "type": "internal", "query": ""}"#,
        ));
        assert_eq!(empty_query.kind, ActionKind::Inert);
    }

    #[test]
    fn test_constructors_reject_empty_targets() {
        assert_eq!(ActionSpec::external("Docs", "").kind, ActionKind::Inert);
        assert_eq!(ActionSpec::internal("Find", "").kind, ActionKind::Inert);
        assert_eq!(ActionSpec::external("Docs", "").title, "Docs");
    }

    #[test]
    fn test_unknown_or_missing_type_is_inert() {
        let unknown = ActionSpec::from(props(r#"{"title": "X", "type": "carousel"}"#));
        assert_eq!(unknown.kind, ActionKind::Inert);
        assert_eq!(unknown.title, "X");

        let missing = ActionSpec::from(props(r#"{"title": "Y", "url": "https://a.b"}"#));
        assert_eq!(missing.kind, ActionKind::Inert);
    }

    #[test]
    fn test_irrelevant_fields_are_dropped() {
        let spec = ActionSpec::from(props(
            r#"{"title": "Note", "type": "info", "message": "hello", "url": "https://a.b"}"#,
        ));
        assert_eq!(spec, ActionSpec::info("Note", "hello"));
    }

    #[test]
    fn test_variations_keep_order_and_default_to_empty() {
        let spec = ActionSpec::from(props(
            r#"{"title": "Models", "type": "variations", "variations": [
                {"name": "B", "query": "bar"},
                {"name": "A", "query": "foo"}
            ]}"#,
        ));
        assert_eq!(
            spec.kind,
            ActionKind::Variations {
                items: vec![Variation::new("B", "bar"), Variation::new("A", "foo")]
            }
        );

        let empty = ActionSpec::from(props(r#"{"title": "Models", "type": "variations"}"#));
        assert_eq!(empty.kind, ActionKind::Variations { items: vec![] });
    }

    #[test]
    fn test_text_kinds_default_to_empty_message() {
        let spec = ActionSpec::from(props(r#"{"title": "Soon", "type": "placeholder"}"#));
        assert_eq!(spec, ActionSpec::placeholder("Soon", ""));
        assert_eq!(spec.kind_name(), "placeholder");
    }
}
