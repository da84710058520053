//! Token definitions and class values.
//!
//! Tokens are grouped by role (background, text, border and shadow,
//! interactive states). The grouping is declaration order and comments only;
//! entries are independent of each other.

use serde::{Deserialize, Serialize};

/// A named style token understood by the UI layer.
///
/// Serializes to its camelCase wire name (e.g. [`StyleToken::CardShadow`]
/// becomes `"cardShadow"`), which is the name panels use over the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleToken {
    // Background
    MainBg,
    CardBg,
    WhiteBg,
    IconBg,
    ChangeBg,
    ChartBg,
    PrimaryBg,
    GrayBg,
    HoverBg,
    RedBg,
    StatusBg,

    // Text
    IconText,
    ChangeText,
    TitleText,
    ValueText,
    PrimaryText,
    GrayText,
    MutedText,
    AccentText,

    // Border and shadow
    CardBorder,
    CardShadow,
    CardShadowHover,
    FloatShadow,

    // Interactive states
    HoverScale,
    HoverTranslate,
    Transition,
}

impl StyleToken {
    /// Every token, in declaration order.
    pub const ALL: [StyleToken; 26] = [
        StyleToken::MainBg,
        StyleToken::CardBg,
        StyleToken::WhiteBg,
        StyleToken::IconBg,
        StyleToken::ChangeBg,
        StyleToken::ChartBg,
        StyleToken::PrimaryBg,
        StyleToken::GrayBg,
        StyleToken::HoverBg,
        StyleToken::RedBg,
        StyleToken::StatusBg,
        StyleToken::IconText,
        StyleToken::ChangeText,
        StyleToken::TitleText,
        StyleToken::ValueText,
        StyleToken::PrimaryText,
        StyleToken::GrayText,
        StyleToken::MutedText,
        StyleToken::AccentText,
        StyleToken::CardBorder,
        StyleToken::CardShadow,
        StyleToken::CardShadowHover,
        StyleToken::FloatShadow,
        StyleToken::HoverScale,
        StyleToken::HoverTranslate,
        StyleToken::Transition,
    ];

    /// The utility class string (or color literal) for this token.
    pub const fn class(self) -> &'static str {
        match self {
            StyleToken::MainBg => "#f4f1eb",
            StyleToken::CardBg => "from-white to-gray-50",
            StyleToken::WhiteBg => "bg-white",
            StyleToken::IconBg => "#22262b",
            StyleToken::ChangeBg => "from-emerald-500 to-emerald-600",
            StyleToken::ChartBg => "from-blue-500 to-blue-400",
            StyleToken::PrimaryBg => "from-[#1d2328] to-[#2a3138]",
            StyleToken::GrayBg => "bg-gray-50",
            StyleToken::HoverBg => "hover:bg-slate-50",
            StyleToken::RedBg => "hover:bg-red-50",
            StyleToken::StatusBg => "from-blue-500 to-blue-600",
            StyleToken::IconText => "text-white",
            StyleToken::ChangeText => "text-white",
            StyleToken::TitleText => "text-gray-500",
            StyleToken::ValueText => "text-gray-900",
            StyleToken::PrimaryText => "text-[#1d2328]",
            StyleToken::GrayText => "text-gray-600",
            StyleToken::MutedText => "text-text-muted",
            StyleToken::AccentText => "text-[#ffcb21]",
            StyleToken::CardBorder => "border-gray-100",
            StyleToken::CardShadow => "shadow-lg",
            StyleToken::CardShadowHover => "shadow-xl",
            StyleToken::FloatShadow => "shadow-float",
            StyleToken::HoverScale => "hover:scale-105",
            StyleToken::HoverTranslate => "hover:-translate-y-0.5",
            StyleToken::Transition => "transition-all duration-300",
        }
    }

    /// The camelCase wire name for this token.
    pub const fn name(self) -> &'static str {
        match self {
            StyleToken::MainBg => "mainBg",
            StyleToken::CardBg => "cardBg",
            StyleToken::WhiteBg => "whiteBg",
            StyleToken::IconBg => "iconBg",
            StyleToken::ChangeBg => "changeBg",
            StyleToken::ChartBg => "chartBg",
            StyleToken::PrimaryBg => "primaryBg",
            StyleToken::GrayBg => "grayBg",
            StyleToken::HoverBg => "hoverBg",
            StyleToken::RedBg => "redBg",
            StyleToken::StatusBg => "statusBg",
            StyleToken::IconText => "iconText",
            StyleToken::ChangeText => "changeText",
            StyleToken::TitleText => "titleText",
            StyleToken::ValueText => "valueText",
            StyleToken::PrimaryText => "primaryText",
            StyleToken::GrayText => "grayText",
            StyleToken::MutedText => "mutedText",
            StyleToken::AccentText => "accentText",
            StyleToken::CardBorder => "cardBorder",
            StyleToken::CardShadow => "cardShadow",
            StyleToken::CardShadowHover => "cardShadowHover",
            StyleToken::FloatShadow => "floatShadow",
            StyleToken::HoverScale => "hoverScale",
            StyleToken::HoverTranslate => "hoverTranslate",
            StyleToken::Transition => "transition",
        }
    }
}

impl std::fmt::Display for StyleToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
