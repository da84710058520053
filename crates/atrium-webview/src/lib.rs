//! Webview integration for Atrium panels.
//!
//! Panels render in web content and style themselves with the utility
//! classes carried by the style token table. This crate holds the bridge
//! that hands the table to them.

pub mod theme_bridge;

pub use theme_bridge::{generate_class_list, generate_token_injection_js, tokens_to_json};
