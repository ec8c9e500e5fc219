//! In-process memory backend
//!
//! One shared state implementing every repository trait. Used by tests and
//! embedded deployments; the single state lock is what lets the
//! notification coalescing step read the reaction rows and write the
//! notification row in one critical section.

mod backend;

pub use backend::{AllowAllAccess, MemoryBackend, StaticSettings};
