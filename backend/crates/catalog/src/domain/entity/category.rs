//! Category Entity
//!
//! Catalog grouping with a unique name. Deleting a category cascades to
//! every item referencing it.

use chrono::{DateTime, Utc};
use kernel::id::CategoryId;

use crate::domain::value_object::category_name::CategoryName;

/// Category entity
#[derive(Debug, Clone)]
pub struct Category {
    /// Internal UUID identifier
    pub category_id: CategoryId,
    /// Unique name
    pub name: CategoryName,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(name: CategoryName) -> Self {
        let now = Utc::now();

        Self {
            category_id: CategoryId::new(),
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the category
    pub fn rename(&mut self, name: CategoryName) {
        self.name = name;
        self.updated_at = Utc::now();
    }
}
