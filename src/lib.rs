//! Slack mrkdwn to Markdown conversion.
//!
//! [`mrkdwn_to_md`] rewrites bold, strikethrough, links, user and channel
//! mentions, and emoji shortcodes into standard Markdown. The `ToMarkdown`
//! agent wraps it for use in Modular Agent flows.

#![recursion_limit = "256"]

mod agents;
pub mod emoji;
pub mod mrkdwn;
pub mod users;

pub use mrkdwn::{Rule, convert_with, mrkdwn_to_md};
pub use users::UserDirectory;
