//! Slack payload construction.
//!
//! This module provides:
//! - The webhook wire format ([`NotificationPayload`], [`Attachment`])
//! - Payload assembly from validated settings ([`build`], [`render`])
//! - Encoding errors ([`PayloadError`])

mod builder;
mod error;
mod model;

#[cfg(test)]
mod builder_tests;

pub use builder::{build, render};
pub use error::PayloadError;
pub use model::{Attachment, NotificationPayload};
