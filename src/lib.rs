//! Slack Notify: build-pipeline Slack notifications
//!
//! A library for turning build-step inputs into a Slack incoming webhook
//! message and delivering it, choosing success or failure variants of each
//! message attribute from the build status.

pub mod config;
pub mod payload;
pub mod webhook;
