//! Cell card, its create/update inputs, and derived read models.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::primitives::{contains_ignore_case, CellId, Source};

/// Number of body characters included in a cell summary.
const SUMMARY_BODY_CHARS: usize = 60;

/// A titled text card stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub title: String,
    pub body: String,
    pub room: String,
    pub sources: Vec<Source>,
    /// Symmetric links to other cells, in insertion order.
    pub links: IndexSet<CellId>,
}

impl Cell {
    /// Short one-line label: the title followed by the start of the body.
    pub fn summary(&self) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(SUMMARY_BODY_CHARS).collect();
        if chars.next().is_some() {
            format!("{} - {}…", self.title, head)
        } else {
            format!("{} - {}", self.title, head)
        }
    }

    /// Case-insensitive substring match against title or body.
    pub fn matches(&self, term: &str) -> bool {
        contains_ignore_case(&self.title, term) || contains_ignore_case(&self.body, term)
    }

    pub fn is_linked_to(&self, other: &CellId) -> bool {
        self.links.contains(other)
    }
}

/// Input for creating a cell. The repository assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellDraft {
    pub title: String,
    pub body: String,
    pub room: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl CellDraft {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            room: room.into(),
            sources: Vec::new(),
        }
    }

    /// Attach an initial source.
    pub fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Names of required fields that are empty or whitespace-only.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        empty_fields(&self.title, &self.body, &self.room)
    }
}

/// Input for replacing the title, body and room of an existing cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub id: CellId,
    pub title: String,
    pub body: String,
    pub room: String,
}

impl CellUpdate {
    pub fn empty_fields(&self) -> Vec<&'static str> {
        empty_fields(&self.title, &self.body, &self.room)
    }
}

fn empty_fields(title: &str, body: &str, room: &str) -> Vec<&'static str> {
    [("title", title), ("body", body), ("room", room)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// A linked cell as shown on a card: id plus title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellLink {
    pub id: CellId,
    pub title: String,
}

/// A room and the cells that belong to it, derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionOfCells {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl CollectionOfCells {
    pub fn count(&self) -> usize {
        self.cells.len()
    }
}
