//! Roster: the ordered list of known participants used to place names into
//! fixed spreadsheet columns.
//!
//! The roster is configuration data, not a constant: tests and other sheets
//! can inject their own ordering.

use serde::Deserialize;

use crate::error::{MatchLogError, Result};

/// One roster column: a canonical name plus known spelling variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Column index of `name` (canonical name or alias), after trimming.
    pub fn resolve(&self, name: &str) -> Result<usize> {
        let name = name.trim();
        self.entries
            .iter()
            .position(|entry| entry.matches(name))
            .ok_or_else(|| MatchLogError::lookup("roster member", name))
    }

    pub fn canonical(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }
}

impl From<Vec<RosterEntry>> for Roster {
    fn from(entries: Vec<RosterEntry>) -> Self {
        Self::new(entries)
    }
}
