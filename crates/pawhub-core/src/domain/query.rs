//! Collection query values.
//!
//! A query is an immutable value describing filter parameters. Two
//! unequal queries are different logical collections: the feed discards
//! everything it accumulated when its query changes.

use crate::types::Species;

/// Filter parameters for the pet listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetQuery {
    /// Free-text search over name and description.
    pub search: Option<String>,

    /// Restrict to one listing category.
    pub category: Option<Species>,
}

impl PetQuery {
    /// The unfiltered listing.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn category(category: Species) -> Self {
        Self {
            search: None,
            category: Some(category),
        }
    }

    /// Set the search text, treating blank input as no filter.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }
}

/// Filter parameters for the campaign listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignQuery {
    /// Free-text search over pet name and description.
    pub search: Option<String>,
}

impl CampaignQuery {
    /// The unfiltered listing.
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the search text, treating blank input as no filter.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_no_filter() {
        assert_eq!(PetQuery::all().with_search("   "), PetQuery::all());
        assert_ne!(PetQuery::all().with_search("husky"), PetQuery::all());
    }
}
