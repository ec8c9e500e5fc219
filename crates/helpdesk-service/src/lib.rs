//! # helpdesk-service
//!
//! Application layer containing the reaction toggle protocol, notification
//! coalescing, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    NotificationService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
