//! Theme bridge: style token delivery for webview panels.
//!
//! Renders the token table into the formats the web side consumes: a JSON
//! object of name/value pairs and a JavaScript snippet that publishes the
//! table to the page.

mod generate;

pub use generate::{generate_class_list, generate_token_injection_js, tokens_to_json};
