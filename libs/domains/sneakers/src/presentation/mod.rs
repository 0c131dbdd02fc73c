//! Presentation Formatter
//!
//! Pure functions and small configuration records that turn catalog data into
//! display-ready text and HTML fragments. Nothing here mutates its input or
//! touches the catalog.
//!
//! Option names (sizes, themes, styles) are case-insensitive. Use [`lenient`]
//! where an unknown name should fall back to the default instead of failing:
//!
//! ```
//! use domain_sneakers::presentation::{PriceSize, lenient};
//!
//! assert_eq!(lenient::<PriceSize>("XLARGE"), PriceSize::XLarge);
//! assert_eq!(lenient::<PriceSize>("huge"), PriceSize::Medium);
//! ```

pub mod card;
pub mod condition;
pub mod price;
pub mod size;

use std::str::FromStr;
use thiserror::Error;

pub use card::{CardSize, SneakerCard};
pub use condition::{BadgeSize, ConditionBadge, ConditionStyle, abbreviation, condition_style};
pub use price::{
    PriceComparison, PriceSize, PriceTag, PriceTheme, PriceTier, currency_symbol,
    discount_percentage, format_amount,
};
pub use size::{SizeConversions, SizeStyle, SizeSystem, SizeTag, SizeTheme, convert, format_size};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("No sneaker supplied to render")]
    MissingSneaker,
}

/// Parse an option name, falling back to the default for unknown names
pub fn lenient<T: FromStr + Default>(name: &str) -> T {
    name.trim().parse().unwrap_or_default()
}

/// Round to `places` decimals with midpoints going away from zero.
///
/// `format!("{:.1}")` rounds exact midpoints to even, so `9.25` would print
/// as `9.2`; rounding first gives `9.3`.
pub(crate) fn round_half_away(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Join CSS classes, skipping empty entries
pub(crate) fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn escape(text: &str) -> String {
    handlebars::html_escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_falls_back_to_default() {
        assert_eq!(lenient::<SizeStyle>(" Button "), SizeStyle::Button);
        assert_eq!(lenient::<SizeStyle>("pill"), SizeStyle::Badge);
        assert_eq!(lenient::<CardSize>(""), CardSize::Medium);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_half_away(9.25, 1), 9.3);
        assert_eq!(round_half_away(-9.25, 1), -9.3);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(9.24, 1), 9.2);
    }

    #[test]
    fn test_class_list_skips_blanks() {
        assert_eq!(class_list(&["badge", "", " bg-dark ", "  "]), "badge bg-dark");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }
}
