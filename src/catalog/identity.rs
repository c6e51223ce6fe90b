use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier for an example entry (e.g., `html-doctype`).
///
/// Keys are referenced by external navigation, so they never change once
/// published. The segment before the first `-` names the topic the example
/// belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExampleKey(pub String);

impl ExampleKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Topic prefix of the key: `html` for `html-doctype`, `fastapi` for
    /// `fastapi-crud`. A key without a `-` is its own topic.
    pub fn topic(&self) -> &str {
        self.0
            .split_once('-')
            .map_or(self.0.as_str(), |(topic, _)| topic)
    }

    /// Returns true when the key matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self.0.split('-').all(|segment| {
                !segment.is_empty()
                    && segment
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            })
    }
}

impl Borrow<str> for ExampleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subject language or technology label attached to an example.
///
/// Not every label is a programming language; some entries use it as a
/// category tag ("Process", "Checklist"). Known labels keep serialization
/// consistent; `Other` preserves any label the content introduces later.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Language {
    Html,
    Css,
    JavaScript,
    TypeScript,
    Python,
    Bash,
    Markdown,
    Text,
    Process,
    Prompting,
    Rag,
    Tooling,
    Workflow,
    Evaluation,
    Ops,
    Checklist,
    Video,
    Other(String),
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_label(&value))
    }
}

impl Language {
    pub fn as_str(&self) -> &str {
        match self {
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Bash => "Bash",
            Language::Markdown => "Markdown",
            Language::Text => "Text",
            Language::Process => "Process",
            Language::Prompting => "Prompting",
            Language::Rag => "RAG",
            Language::Tooling => "Tooling",
            Language::Workflow => "Workflow",
            Language::Evaluation => "Evaluation",
            Language::Ops => "Ops",
            Language::Checklist => "Checklist",
            Language::Video => "Video",
            Language::Other(value) => value.as_str(),
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value {
            "HTML" => Language::Html,
            "CSS" => Language::Css,
            "JavaScript" => Language::JavaScript,
            "TypeScript" => Language::TypeScript,
            "Python" => Language::Python,
            "Bash" => Language::Bash,
            "Markdown" => Language::Markdown,
            "Text" => Language::Text,
            "Process" => Language::Process,
            "Prompting" => Language::Prompting,
            "RAG" => Language::Rag,
            "Tooling" => Language::Tooling,
            "Workflow" => Language::Workflow,
            "Evaluation" => Language::Evaluation,
            "Ops" => Language::Ops,
            "Checklist" => Language::Checklist,
            "Video" => Language::Video,
            other => Language::Other(other.to_string()),
        }
    }

    /// True for labels naming something that can be written as source text,
    /// false for category tags and unknown labels.
    pub fn is_source_language(&self) -> bool {
        matches!(
            self,
            Language::Html
                | Language::Css
                | Language::JavaScript
                | Language::TypeScript
                | Language::Python
                | Language::Bash
                | Language::Markdown
        )
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_round_trips_known_and_unknown() {
        let known = Language::Rag;
        let json = serde_json::to_string(&known).unwrap();
        assert_eq!(json, "\"RAG\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, known);

        let custom_json = "\"Rust\"";
        let parsed: Language = serde_json::from_str(custom_json).unwrap();
        assert_eq!(parsed, Language::Other("Rust".to_string()));
        let serialized = serde_json::to_string(&parsed).unwrap();
        assert_eq!(serialized, custom_json);
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Language::from_label("HTML"), Language::Html);
        assert_eq!(
            Language::from_label("html"),
            Language::Other("html".to_string())
        );
    }

    #[test]
    fn category_tags_are_not_source_languages() {
        assert!(Language::Python.is_source_language());
        assert!(Language::Html.is_source_language());
        assert!(!Language::Process.is_source_language());
        assert!(!Language::Other("Rust".into()).is_source_language());
    }

    #[test]
    fn key_topic_is_first_segment() {
        assert_eq!(ExampleKey::new("html-doctype").topic(), "html");
        assert_eq!(ExampleKey::new("rag-deployment-checklist").topic(), "rag");
        assert_eq!(ExampleKey::new("standalone").topic(), "standalone");
    }

    #[test]
    fn key_shape_checks() {
        assert!(ExampleKey::new("js-dom-select").is_well_formed());
        assert!(ExampleKey::new("tw2-grid").is_well_formed());
        assert!(!ExampleKey::new("").is_well_formed());
        assert!(!ExampleKey::new("Html-Doctype").is_well_formed());
        assert!(!ExampleKey::new("html--doctype").is_well_formed());
        assert!(!ExampleKey::new("-html").is_well_formed());
        assert!(!ExampleKey::new("html doctype").is_well_formed());
    }

    #[test]
    fn key_serializes_transparently() {
        let key = ExampleKey::new("js-closures");
        let serialized = serde_json::to_string(&key).unwrap();
        assert_eq!(serialized, "\"js-closures\"");
        let parsed: ExampleKey = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, key);
    }
}
