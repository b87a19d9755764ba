//! Webhook layer for delivering notifications to Slack.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Posting payloads to an incoming webhook ([`WebhookSender`], [`SlackWebhook`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod sender_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
pub use sender::{SlackWebhook, WebhookSender};
