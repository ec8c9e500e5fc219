//! Business logic services
//!
//! The toggle protocol and the notification coalescing it drives live
//! here; everything else reaches the services through `ServiceContext`.

pub mod context;
pub mod error;
pub mod notification;
pub mod reaction;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use notification::NotificationService;
pub use reaction::ReactionService;
