//! Atrium style tokens.
//!
//! The fixed table of semantic style tokens the UI layer styles itself with.
//! Values are CSS utility class strings (or raw color literals) consumed by
//! webview panels. The table is defined once, never mutates, and is shared
//! freely across threads.
//!
//! # Quick Start
//!
//! ```rust
//! use atrium_theme::{resolve, StyleToken};
//!
//! assert_eq!(StyleToken::CardShadow.class(), "shadow-lg");
//! assert_eq!(resolve("mainBg").unwrap(), "#f4f1eb");
//! ```

pub mod errors;
pub mod tokens;

// Re-export core types for convenience
pub use errors::ThemeError;
pub use tokens::{resolve, StyleToken};

pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_serializes_to_wire_name() {
        let json = serde_json::to_string(&StyleToken::AccentText).unwrap();
        assert_eq!(json, "\"accentText\"");
    }

    #[test]
    fn token_deserializes_from_wire_name() {
        let token: StyleToken = serde_json::from_str("\"hoverTranslate\"").unwrap();
        assert_eq!(token, StyleToken::HoverTranslate);
    }

    #[test]
    fn unknown_wire_name_fails_to_deserialize() {
        let result = serde_json::from_str::<StyleToken>("\"doesNotExist\"");
        assert!(result.is_err());
    }

    #[test]
    fn serde_names_match_name_accessor() {
        for token in StyleToken::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.name()));
        }
    }
}
