//! Category Records

use jiff::Timestamp;

use crate::{domain::products::records::ProductUuid, uuids::TypedUuid};

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,

    /// Products that reference this category, in the order they were linked.
    pub products: Vec<ProductUuid>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
