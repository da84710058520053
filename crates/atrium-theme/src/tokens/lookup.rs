//! Name-based token lookup.
//!
//! Entry point for token names that arrive as strings (bridge traffic, panel
//! IPC). Known names resolve through a compile-time perfect hash; unknown
//! names surface as [`ThemeError::UnknownToken`], never as a default value.

use super::table::StyleToken;
use crate::errors::ThemeError;
use phf::phf_map;

/// Wire name to token, for every entry in the table.
static TOKENS_BY_NAME: phf::Map<&'static str, StyleToken> = phf_map! {
    "mainBg" => StyleToken::MainBg,
    "cardBg" => StyleToken::CardBg,
    "whiteBg" => StyleToken::WhiteBg,
    "iconBg" => StyleToken::IconBg,
    "changeBg" => StyleToken::ChangeBg,
    "chartBg" => StyleToken::ChartBg,
    "primaryBg" => StyleToken::PrimaryBg,
    "grayBg" => StyleToken::GrayBg,
    "hoverBg" => StyleToken::HoverBg,
    "redBg" => StyleToken::RedBg,
    "statusBg" => StyleToken::StatusBg,
    "iconText" => StyleToken::IconText,
    "changeText" => StyleToken::ChangeText,
    "titleText" => StyleToken::TitleText,
    "valueText" => StyleToken::ValueText,
    "primaryText" => StyleToken::PrimaryText,
    "grayText" => StyleToken::GrayText,
    "mutedText" => StyleToken::MutedText,
    "accentText" => StyleToken::AccentText,
    "cardBorder" => StyleToken::CardBorder,
    "cardShadow" => StyleToken::CardShadow,
    "cardShadowHover" => StyleToken::CardShadowHover,
    "floatShadow" => StyleToken::FloatShadow,
    "hoverScale" => StyleToken::HoverScale,
    "hoverTranslate" => StyleToken::HoverTranslate,
    "transition" => StyleToken::Transition,
};

impl StyleToken {
    /// Look up a token by its camelCase wire name.
    pub fn from_name(name: &str) -> Result<StyleToken, ThemeError> {
        TOKENS_BY_NAME
            .get(name)
            .copied()
            .ok_or_else(|| ThemeError::UnknownToken(name.to_string()))
    }
}

/// Resolve a token name to its class string.
///
/// The string-keyed equivalent of [`StyleToken::class`] for callers outside
/// the type system.
pub fn resolve(name: &str) -> Result<&'static str, ThemeError> {
    StyleToken::from_name(name).map(StyleToken::class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_map_covers_exactly_the_token_set() {
        assert_eq!(TOKENS_BY_NAME.len(), StyleToken::ALL.len());
        for token in StyleToken::ALL {
            assert_eq!(TOKENS_BY_NAME.get(token.name()).copied(), Some(token));
        }
    }

    #[test]
    fn from_name_reports_the_requested_name() {
        let err = StyleToken::from_name("cardBrder").unwrap_err();
        assert_eq!(err.to_string(), "unknown style token: cardBrder");
    }

    #[test]
    fn resolve_does_not_trim_whitespace() {
        assert!(resolve(" mainBg").is_err());
        assert!(resolve("mainBg ").is_err());
    }

    #[test]
    fn resolve_empty_name_fails() {
        assert!(resolve("").is_err());
    }
}
