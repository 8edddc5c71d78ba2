//! Collection views over discovered notes.
//!
//! A scan yields two aligned views: notes grouped by category in discovery
//! order, and a flat sequence the recency selection works over. Keeping both
//! means reordering one never disturbs the other.

use serde::{Deserialize, Serialize};

use crate::note::Til;

/// Notes of one category, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category name (the immediate parent directory of its notes).
    pub name: String,

    /// Notes discovered under this category.
    pub tils: Vec<Til>,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilCollection {
    /// Category groups, ordered by when the walk first saw each category.
    pub categories: Vec<CategoryGroup>,

    /// All notes in discovery order.
    pub tils: Vec<Til>,

    /// Root-relative paths of every markdown file the walk saw, including
    /// `readme.md` files that never become notes.
    pub paths: Vec<String>,
}

impl TilCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tils.len()
    }

    /// Whether the scan found no notes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tils.is_empty()
    }

    /// Record a markdown path the walk saw, whether or not it becomes a note.
    pub fn record_path(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Append a note to the flat view and to its category group, creating
    /// the group the first time its category appears.
    pub fn push(&mut self, til: Til) {
        if let Some(group) = self
            .categories
            .iter_mut()
            .find(|group| group.name == til.category)
        {
            group.tils.push(til.clone());
        } else {
            self.categories.push(CategoryGroup {
                name: til.category.clone(),
                tils: vec![til.clone()],
            });
        }
        self.tils.push(til);
    }
}
