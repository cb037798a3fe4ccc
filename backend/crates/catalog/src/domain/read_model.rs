//! Read Models
//!
//! Listing shapes with references resolved by the store: category name
//! joined from the catalog, creator identity joined from the credential
//! store. The presentation layer decides which parts each audience sees.

use crate::domain::entity::item::Item;

/// Creator identity for the admin listing (never exposed publicly)
#[derive(Debug, Clone)]
pub struct CreatorInfo {
    pub username: String,
    pub email: String,
}

/// Item with resolved references
#[derive(Debug, Clone)]
pub struct ItemView {
    pub item: Item,
    /// Resolved category name; absent if the reference dangles
    pub category_name: Option<String>,
    /// Resolved creator; absent if the account vanished
    pub created_by: Option<CreatorInfo>,
}
