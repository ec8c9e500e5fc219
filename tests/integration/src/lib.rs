//! Integration test utilities for the reaction core
//!
//! This crate provides fixtures for driving the services end to end over
//! the in-process memory backend.

pub mod fixtures;

pub use fixtures::*;
