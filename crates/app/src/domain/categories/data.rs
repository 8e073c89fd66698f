//! Categories Data

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}
