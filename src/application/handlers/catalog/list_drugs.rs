//! ListDrugsHandler - catalog query for drug pickers.

use crate::domain::catalog::{selectable_drugs, Drug};

/// Query for the drugs a picker should offer.
#[derive(Debug, Clone, Default)]
pub struct ListDrugsQuery {
    /// Drug to leave out, usually the already-selected source.
    pub exclude: Option<String>,
}

/// Handler for catalog listings.
#[derive(Debug, Default)]
pub struct ListDrugsHandler;

impl ListDrugsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: ListDrugsQuery) -> Vec<&'static Drug> {
        selectable_drugs(query.exclude.as_deref())
    }
}
