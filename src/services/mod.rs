//! Application service layer.
//!
//! Services own the business rules and translate storage errors into the
//! domain vocabulary. They sit between the gRPC handlers and the repository.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
