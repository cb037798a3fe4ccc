//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AuthContext, AuthMiddlewareState, require_admin, require_shopper_auth};
pub use router::{
    admin_auth_router, admin_auth_router_generic, user_auth_router, user_auth_router_generic,
};
