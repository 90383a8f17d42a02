// =============================================================================
// Factory Method: documents
// =============================================================================

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CreationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Report,
    Resume,
    Letter,
    Invoice,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::Report => "Report",
            DocumentKind::Resume => "Resume",
            DocumentKind::Letter => "Letter",
            DocumentKind::Invoice => "Invoice",
        };
        f.write_str(label)
    }
}

pub trait Document {
    fn kind(&self) -> DocumentKind;

    fn open(&self) -> String {
        format!("{} document opened.", self.kind())
    }
}

pub struct Report;
pub struct Resume;
pub struct Letter;
pub struct Invoice;

impl Document for Report {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Report
    }
}

impl Document for Resume {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Resume
    }
}

impl Document for Letter {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Letter
    }
}

impl Document for Invoice {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Invoice
    }
}

// =============================================================================
// Creators
// =============================================================================

pub trait DocumentCreator: Send + Sync {
    fn create_document(&self) -> Box<dyn Document>;

    /// Menu label; the kind of document this creator produces.
    fn label(&self) -> String {
        self.create_document().kind().to_string()
    }
}

pub struct ReportCreator;
pub struct ResumeCreator;
pub struct LetterCreator;
pub struct InvoiceCreator;

impl DocumentCreator for ReportCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(Report)
    }
}

impl DocumentCreator for ResumeCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(Resume)
    }
}

impl DocumentCreator for LetterCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(Letter)
    }
}

impl DocumentCreator for InvoiceCreator {
    fn create_document(&self) -> Box<dyn Document> {
        Box::new(Invoice)
    }
}

/// Menu keys mapped to creators. Keys are unique; registering an existing
/// key replaces its creator.
#[derive(Default)]
pub struct CreatorRegistry {
    creators: BTreeMap<String, Box<dyn DocumentCreator>>,
}

impl CreatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("1", ReportCreator);
        registry.register("2", ResumeCreator);
        registry.register("3", LetterCreator);
        registry.register("4", InvoiceCreator);
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, creator: impl DocumentCreator + 'static) {
        self.creators.insert(key.into(), Box::new(creator));
    }

    pub fn get(&self, choice: &str) -> Option<&dyn DocumentCreator> {
        self.creators.get(choice.trim()).map(|creator| &**creator)
    }

    pub fn create(&self, choice: &str) -> Result<Box<dyn Document>, CreationError> {
        let creator = self
            .get(choice)
            .ok_or_else(|| CreationError::InvalidChoice(choice.trim().to_string()))?;
        let document = creator.create_document();
        log::info!("created {} document from menu choice {}", document.kind(), choice.trim());
        Ok(document)
    }

    /// `(key, label)` pairs in key order.
    pub fn choices(&self) -> Vec<(String, String)> {
        self.creators
            .iter()
            .map(|(key, creator)| (key.clone(), creator.label()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_messages() {
        assert_eq!(Report.open(), "Report document opened.");
        assert_eq!(Resume.open(), "Resume document opened.");
        assert_eq!(Letter.open(), "Letter document opened.");
        assert_eq!(Invoice.open(), "Invoice document opened.");
    }

    #[test]
    fn test_standard_registry_choices() {
        let registry = CreatorRegistry::standard();
        let labels: Vec<String> = registry.choices().into_iter().map(|(_, label)| label).collect();
        assert_eq!(labels, ["Report", "Resume", "Letter", "Invoice"]);
    }

    #[test]
    fn test_create_by_choice() {
        let registry = CreatorRegistry::standard();
        let doc = registry.create("3").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Letter);
        assert_eq!(doc.open(), "Letter document opened.");
    }

    #[test]
    fn test_unknown_choice() {
        let registry = CreatorRegistry::standard();
        assert!(matches!(
            registry.create("0"),
            Err(CreationError::InvalidChoice(choice)) if choice == "0"
        ));
        assert!(registry.get("report").is_none());
    }

    #[test]
    fn test_register_replaces_existing_key() {
        let mut registry = CreatorRegistry::standard();
        registry.register("1", InvoiceCreator);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.create("1").unwrap().kind(), DocumentKind::Invoice);
    }

    #[test]
    fn test_empty_registry() {
        let registry = CreatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.create("1").is_err());
    }
}
