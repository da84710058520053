//! The style token table.
//!
//! A closed set of named tokens, each carrying the utility class string (or
//! color literal) panels apply for that role. The table is a process-wide
//! constant; there is no mutation path and no setter API.

mod lookup;
mod table;

pub use lookup::resolve;
pub use table::StyleToken;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ThemeError;
    use std::collections::HashSet;

    #[test]
    fn resolve_background_tokens() {
        assert_eq!(resolve("mainBg").unwrap(), "#f4f1eb");
        assert_eq!(resolve("cardBg").unwrap(), "from-white to-gray-50");
    }

    #[test]
    fn resolve_text_and_interactive_tokens() {
        assert_eq!(resolve("accentText").unwrap(), "text-[#ffcb21]");
        assert_eq!(resolve("transition").unwrap(), "transition-all duration-300");
    }

    #[test]
    fn resolve_unknown_token_fails() {
        let err = resolve("doesNotExist").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken(ref name) if name == "doesNotExist"));
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert!(resolve("mainbg").is_err());
        assert!(resolve("MainBg").is_err());
    }

    #[test]
    fn every_token_has_a_non_empty_class() {
        for token in StyleToken::ALL {
            assert!(!token.class().is_empty(), "{} has an empty class", token.name());
        }
    }

    #[test]
    fn token_names_are_unique() {
        let names: HashSet<&str> = StyleToken::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), StyleToken::ALL.len());
    }

    #[test]
    fn from_name_round_trips_every_token() {
        for token in StyleToken::ALL {
            assert_eq!(StyleToken::from_name(token.name()).unwrap(), token);
        }
    }
}
