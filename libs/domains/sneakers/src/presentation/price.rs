//! Price formatting and price tags.

use strum::{Display, EnumString};

use super::{class_list, escape, round_half_away};

const ANIMATION_STYLE: &str = "<style>\
.price-animated { animation: priceSlideIn 0.5s ease-out; }\
@keyframes priceSlideIn { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }\
</style>";

/// Whole amounts without decimals, anything else with two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", round_half_away(amount, 2))
    }
}

/// Symbol for an ISO currency code; unknown codes render as `"{code} "`
pub fn currency_symbol(code: &str) -> String {
    match code.trim().to_ascii_uppercase().as_str() {
        "EUR" => "€".to_string(),
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        "CAD" => "C$".to_string(),
        "AUD" => "A$".to_string(),
        "CHF" => "CHF".to_string(),
        _ => format!("{} ", code),
    }
}

/// `(original - current) / original * 100`, or 0 when there is no original price
pub fn discount_percentage(original: f64, current: f64) -> f64 {
    if original == 0.0 {
        return 0.0;
    }
    (original - current) / original * 100.0
}

/// How the current price compares to an original price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceComparison {
    /// Cheaper than the original, by this many percent
    Markdown(f64),
    /// More expensive than the original, by this many percent
    Markup(f64),
}

impl PriceComparison {
    /// `None` when both prices are equal
    pub fn between(original: f64, current: f64) -> Option<Self> {
        let discount = discount_percentage(original, current);
        if current < original {
            Some(PriceComparison::Markdown(discount))
        } else if current > original {
            Some(PriceComparison::Markup(discount.abs()))
        } else {
            None
        }
    }

    fn badge(self) -> String {
        match self {
            PriceComparison::Markdown(percent) => format!(
                " <small class=\"badge bg-danger ms-1\">-{:.0}%</small>",
                percent.round()
            ),
            PriceComparison::Markup(percent) => format!(
                " <small class=\"badge bg-warning text-dark ms-1\">+{:.0}%</small>",
                percent.round()
            ),
        }
    }
}

/// Qualitative price range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Premium,
    Notable,
    Affordable,
}

impl PriceTier {
    /// 500 and up is premium, 200 and up notable, 50 and below affordable
    pub fn for_amount(amount: f64) -> Option<Self> {
        if amount >= 500.0 {
            Some(PriceTier::Premium)
        } else if amount >= 200.0 {
            Some(PriceTier::Notable)
        } else if amount <= 50.0 {
            Some(PriceTier::Affordable)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Premium => "Premium price",
            PriceTier::Notable => "Notable price",
            PriceTier::Affordable => "Affordable price",
        }
    }

    fn icon(self) -> String {
        let class = match self {
            PriceTier::Premium => "fas fa-fire text-danger",
            PriceTier::Notable => "fas fa-star text-warning",
            PriceTier::Affordable => "fas fa-tag text-success",
        };
        format!(" <i class=\"{} ms-1\" title=\"{}\"></i>", class, self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PriceSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl PriceSize {
    fn class(self) -> &'static str {
        match self {
            PriceSize::Small => "h6",
            PriceSize::Medium => "h5",
            PriceSize::Large => "h4",
            PriceSize::XLarge => "h3",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PriceTheme {
    #[default]
    Success,
    Primary,
    Warning,
    Danger,
    Muted,
}

impl PriceTheme {
    fn text_class(self) -> &'static str {
        match self {
            PriceTheme::Success => "text-success",
            PriceTheme::Primary => "text-primary",
            PriceTheme::Warning => "text-warning",
            PriceTheme::Danger => "text-danger",
            PriceTheme::Muted => "text-muted",
        }
    }

    fn highlight_class(self) -> &'static str {
        match self {
            PriceTheme::Success => "bg-success text-white",
            PriceTheme::Primary => "bg-primary text-white",
            PriceTheme::Warning => "bg-warning text-dark",
            PriceTheme::Danger => "bg-danger text-white",
            PriceTheme::Muted => "bg-light text-dark",
        }
    }
}

/// `<span class="price-tag ...">` with optional comparison and tier icon
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTag {
    pub amount: f64,
    pub currency: String,
    pub show_currency_symbol: bool,
    pub show_currency_code: bool,
    pub size: PriceSize,
    pub theme: PriceTheme,
    pub highlighted: bool,
    pub css_class: String,
    pub original_price: Option<f64>,
    pub animated: bool,
}

impl PriceTag {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            currency: "EUR".to_string(),
            show_currency_symbol: true,
            show_currency_code: false,
            size: PriceSize::default(),
            theme: PriceTheme::default(),
            highlighted: false,
            css_class: String::new(),
            original_price: None,
            animated: false,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Amount with symbol and/or code, no markup
    pub fn text(&self) -> String {
        let mut text = format!("{}{}", self.symbol(), format_amount(self.amount));
        if self.show_currency_code {
            text.push(' ');
            text.push_str(&self.currency);
        }
        text
    }

    pub fn render(&self) -> String {
        let highlight = if self.highlighted {
            class_list(&[self.theme.highlight_class(), "px-2 py-1 rounded"])
        } else {
            String::new()
        };
        let classes = class_list(&[
            "price-tag",
            self.size.class(),
            self.theme.text_class(),
            &highlight,
            if self.animated { "price-animated" } else { "" },
            &self.css_class,
            "mb-0",
        ]);

        let mut content = escape(&self.text());

        if let Some(original) = self.original_price {
            if let Some(comparison) = PriceComparison::between(original, self.amount) {
                content.push_str(&format!(
                    " <small class=\"text-muted text-decoration-line-through\">{}{}</small>",
                    escape(&self.symbol()),
                    format_amount(original)
                ));
                content.push_str(&comparison.badge());
            }
        }

        if let Some(tier) = PriceTier::for_amount(self.amount) {
            content.push_str(&tier.icon());
        }

        let mut html = format!("<span class=\"{}\">{}</span>", escape(&classes), content);
        if self.animated {
            html.push_str(ANIMATION_STYLE);
        }
        html
    }

    fn symbol(&self) -> String {
        if self.show_currency_symbol {
            currency_symbol(&self.currency)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_drops_decimals_for_whole_numbers() {
        assert_eq!(format_amount(250.0), "250");
        assert_eq!(format_amount(250.5), "250.50");
        assert_eq!(format_amount(0.01), "0.01");
        assert_eq!(format_amount(0.125), "0.13");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("usd"), "$");
        assert_eq!(currency_symbol("CNY"), "¥");
        assert_eq!(currency_symbol("CHF"), "CHF");
        assert_eq!(currency_symbol("SEK"), "SEK ");
    }

    #[test]
    fn test_discount_percentage() {
        assert_eq!(discount_percentage(300.0, 240.0), 20.0);
        assert_eq!(discount_percentage(0.0, 240.0), 0.0);
        assert_eq!(discount_percentage(100.0, 150.0), -50.0);
    }

    #[test]
    fn test_price_comparison() {
        assert_eq!(
            PriceComparison::between(300.0, 240.0),
            Some(PriceComparison::Markdown(20.0))
        );
        assert_eq!(
            PriceComparison::between(100.0, 150.0),
            Some(PriceComparison::Markup(50.0))
        );
        assert_eq!(PriceComparison::between(100.0, 100.0), None);
    }

    #[test]
    fn test_price_tiers() {
        assert_eq!(PriceTier::for_amount(500.0), Some(PriceTier::Premium));
        assert_eq!(PriceTier::for_amount(499.99), Some(PriceTier::Notable));
        assert_eq!(PriceTier::for_amount(200.0), Some(PriceTier::Notable));
        assert_eq!(PriceTier::for_amount(120.0), None);
        assert_eq!(PriceTier::for_amount(50.0), Some(PriceTier::Affordable));
    }

    #[test]
    fn test_default_price_tag() {
        assert_eq!(
            PriceTag::new(120.0).render(),
            "<span class=\"price-tag h5 text-success mb-0\">€120</span>"
        );
    }

    #[test]
    fn test_markdown_tag_shows_original_and_discount() {
        let tag = PriceTag {
            original_price: Some(300.0),
            ..PriceTag::new(240.0)
        };
        let html = tag.render();

        assert!(html.contains("€240"));
        assert!(html.contains("<small class=\"text-muted text-decoration-line-through\">€300</small>"));
        assert!(html.contains("badge bg-danger ms-1\">-20%</small>"));
        assert!(html.contains("fa-star"));
    }

    #[test]
    fn test_markup_tag() {
        let tag = PriceTag {
            original_price: Some(100.0),
            ..PriceTag::new(150.0)
        };
        assert!(tag.render().contains("+50%"));
    }

    #[test]
    fn test_equal_original_price_is_ignored() {
        let tag = PriceTag {
            original_price: Some(120.0),
            ..PriceTag::new(120.0)
        };
        assert!(!tag.render().contains("line-through"));
    }

    #[test]
    fn test_styled_price_tag() {
        let tag = PriceTag {
            show_currency_code: true,
            size: PriceSize::XLarge,
            theme: PriceTheme::Danger,
            highlighted: true,
            animated: true,
            ..PriceTag::new(650.5).with_currency("USD")
        };
        let html = tag.render();

        assert!(html.starts_with(
            "<span class=\"price-tag h3 text-danger bg-danger text-white px-2 py-1 rounded price-animated mb-0\">$650.50 USD"
        ));
        assert!(html.contains("fa-fire"));
        assert!(html.ends_with("</style>"));
    }

    #[test]
    fn test_without_symbol() {
        let tag = PriceTag {
            show_currency_symbol: false,
            show_currency_code: true,
            ..PriceTag::new(80.0)
        };
        assert_eq!(tag.text(), "80 EUR");
    }
}
