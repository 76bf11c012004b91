//! Catalog query handlers.

mod list_drugs;

pub use list_drugs::{ListDrugsHandler, ListDrugsQuery};
