//! Document sources: fetch a meeting-log export and cut out the match log.

use std::collections::HashMap;
use std::path::PathBuf;

use matchlog_core::{MatchLogError, Result, Token};

use crate::markdown::{tokenize, window, Markers};

/// Anything that can produce the Markdown export of a document.
pub trait DocumentSource {
    fn fetch_markdown(&self, document_id: &str) -> Result<String>;

    fn markers(&self) -> &Markers;

    /// Tokens between the match-log marker heading and the template marker
    /// heading, both excluded.
    fn fetch_match_log_tokens(&self, document_id: &str) -> Result<Vec<Token>> {
        let markdown = self.fetch_markdown(document_id)?;
        let tokens = tokenize(&markdown);
        let region = window(&tokens, self.markers())?;
        tracing::info!(document_id, tokens = region.len(), "source: match log tokens fetched");
        Ok(region.to_vec())
    }
}

/// Reads `<dir>/<document_id>.md`.
#[derive(Debug, Clone)]
pub struct MarkdownDirSource {
    dir: PathBuf,
    markers: Markers,
}

impl MarkdownDirSource {
    pub fn new(dir: impl Into<PathBuf>, markers: Markers) -> Self {
        Self {
            dir: dir.into(),
            markers,
        }
    }

    pub fn path_for(&self, document_id: &str) -> PathBuf {
        self.dir.join(format!("{document_id}.md"))
    }
}

impl DocumentSource for MarkdownDirSource {
    fn fetch_markdown(&self, document_id: &str) -> Result<String> {
        let path = self.path_for(document_id);
        if !path.is_file() {
            return Err(MatchLogError::lookup("document", path.display().to_string()));
        }
        tracing::debug!(path = %path.display(), "source: reading export");
        std::fs::read_to_string(&path).map_err(|e| MatchLogError::io(path.display(), e))
    }

    fn markers(&self) -> &Markers {
        &self.markers
    }
}

/// In-memory documents keyed by id.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String>,
    markers: Markers,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, document_id: impl Into<String>, markdown: impl Into<String>) -> Self {
        self.documents.insert(document_id.into(), markdown.into());
        self
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }
}

impl DocumentSource for StaticSource {
    fn fetch_markdown(&self, document_id: &str) -> Result<String> {
        self.documents
            .get(document_id)
            .cloned()
            .ok_or_else(|| MatchLogError::lookup("document", document_id))
    }

    fn markers(&self) -> &Markers {
        &self.markers
    }
}
