//! Todo Filter
//!
//! The subset of todos currently displayed, derived from the URL fragment.

use serde::{Deserialize, Serialize};

use super::Todo;

/// Which todos the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters, in the order their links are shown
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Resolve the filter from a URL fragment.
    ///
    /// Matching is by substring: anything containing "active" is Active,
    /// anything containing "completed" is Completed, everything else
    /// (including an empty fragment) is All.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.contains("active") {
            Filter::Active
        } else if fragment.contains("completed") {
            Filter::Completed
        } else {
            Filter::All
        }
    }

    /// Fragment written to the address bar when this filter is chosen
    pub fn fragment(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}
