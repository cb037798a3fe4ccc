//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CatalogAppState;
pub use router::{
    admin_catalog_router, admin_catalog_router_generic, public_catalog_router,
    public_catalog_router_generic,
};
