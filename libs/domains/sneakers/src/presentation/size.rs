//! Shoe size conversion and size tags.
//!
//! Conversions are fixed linear approximations. They are one-way: converting
//! US to EU and back does not necessarily give the starting size.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use super::{class_list, escape, round_half_away};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum SizeSystem {
    #[default]
    Us,
    Eu,
    Uk,
    Cm,
}

/// Convert `size` from one system to another.
///
/// Pairs without a formula (anything into US, or a system into itself)
/// return the size unchanged.
pub fn convert(size: f64, from: SizeSystem, to: SizeSystem) -> f64 {
    use SizeSystem::*;

    match (from, to) {
        (Us, Eu) => size + 32.5,
        (Uk, Eu) => size + 33.5,
        (Cm, Eu) => (size - 12.0) * 1.5 + 35.0,
        (Us, Uk) => size - 1.0,
        (Eu, Uk) => size - 33.5,
        (Cm, Uk) => (size - 23.0) / 0.667,
        (Us, Cm) => size * 0.667 + 23.0,
        (Eu, Cm) => (size - 35.0) / 1.5 + 12.0,
        (Uk, Cm) => size * 0.667 + 23.5,
        _ => size,
    }
}

/// Whole sizes without decimals, anything else with one (midpoints round up)
pub fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{:.0}", size)
    } else {
        format!("{:.1}", round_half_away(size, 1))
    }
}

/// A US size expressed in every system, formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SizeConversions {
    pub us: String,
    pub eu: String,
    pub uk: String,
    pub cm: String,
}

impl SizeConversions {
    pub fn from_us(size: f64) -> Self {
        let to = |system| format_size(convert(size, SizeSystem::Us, system));
        Self {
            us: format_size(size),
            eu: to(SizeSystem::Eu),
            uk: to(SizeSystem::Uk),
            cm: to(SizeSystem::Cm),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SizeStyle {
    #[default]
    Badge,
    Text,
    Button,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SizeTheme {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
    Info,
    Light,
    Dark,
    Muted,
}

impl SizeTheme {
    fn badge_class(self) -> &'static str {
        match self {
            SizeTheme::Secondary => "bg-secondary",
            SizeTheme::Success => "bg-success",
            SizeTheme::Warning => "bg-warning text-dark",
            SizeTheme::Danger => "bg-danger",
            SizeTheme::Info => "bg-info",
            SizeTheme::Light => "bg-light text-dark",
            SizeTheme::Dark => "bg-dark",
            _ => "bg-primary",
        }
    }

    fn text_class(self) -> &'static str {
        match self {
            SizeTheme::Secondary => "text-secondary",
            SizeTheme::Success => "text-success",
            SizeTheme::Warning => "text-warning",
            SizeTheme::Danger => "text-danger",
            SizeTheme::Info => "text-info",
            SizeTheme::Muted => "text-muted",
            _ => "text-primary",
        }
    }

    fn button_class(self) -> &'static str {
        match self {
            SizeTheme::Secondary => "btn-secondary",
            SizeTheme::Success => "btn-success",
            SizeTheme::Warning => "btn-warning",
            SizeTheme::Danger => "btn-danger",
            SizeTheme::Info => "btn-info",
            SizeTheme::Light => "btn-light",
            SizeTheme::Dark => "btn-dark",
            _ => "btn-primary",
        }
    }
}

/// Size label rendered as a badge, plain text or a disabled button
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTag {
    pub size: f64,
    pub system: SizeSystem,
    pub show_conversions: bool,
    pub style: SizeStyle,
    pub theme: SizeTheme,
    pub show_system_label: bool,
    pub css_class: String,
    pub show_availability: bool,
    pub stock_level: Option<u32>,
}

impl SizeTag {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            system: SizeSystem::default(),
            show_conversions: false,
            style: SizeStyle::default(),
            theme: SizeTheme::default(),
            show_system_label: true,
            css_class: String::new(),
            show_availability: false,
            stock_level: None,
        }
    }

    pub fn render(&self) -> String {
        let content = self.content();
        let css = self.css_class.as_str();

        match self.style {
            SizeStyle::Badge => {
                let classes = class_list(&["badge", self.theme.badge_class(), css]);
                format!("<span class=\"{}\">{}</span>", escape(&classes), content)
            }
            SizeStyle::Text => {
                let classes = class_list(&["size-text", self.theme.text_class(), "fw-bold", css]);
                format!("<span class=\"{}\">{}</span>", escape(&classes), content)
            }
            SizeStyle::Button => {
                let classes = class_list(&["btn btn-sm", self.theme.button_class(), css]);
                format!(
                    "<button class=\"{}\" type=\"button\" disabled=\"disabled\">{}</button>",
                    escape(&classes),
                    content
                )
            }
        }
    }

    fn content(&self) -> String {
        let mut content = if self.show_system_label {
            format!("{} {}", self.system, format_size(self.size))
        } else {
            format_size(self.size)
        };

        if self.show_availability {
            if let Some(stock) = self.stock_level {
                content.push_str(if stock > 0 {
                    "<i class=\"fas fa-check text-success ms-1\"></i>"
                } else {
                    "<i class=\"fas fa-times text-danger ms-1\"></i>"
                });
            }
        }

        if self.show_conversions {
            for target in [SizeSystem::Eu, SizeSystem::Uk, SizeSystem::Cm] {
                if target == self.system {
                    continue;
                }
                let converted = format_size(convert(self.size, self.system, target));
                let label = match target {
                    SizeSystem::Cm => format!("{} CM", converted),
                    _ => format!("{} {}", target, converted),
                };
                content.push_str(&format!("<br><small class=\"text-muted\">{}</small>", label));
            }
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_conversion_formulas() {
        use SizeSystem::*;

        assert!(close(convert(9.0, Us, Eu), 41.5));
        assert!(close(convert(8.0, Uk, Eu), 41.5));
        assert!(close(convert(26.0, Cm, Eu), 56.0));
        assert!(close(convert(9.0, Us, Uk), 8.0));
        assert!(close(convert(42.0, Eu, Uk), 8.5));
        assert!(close(convert(29.67, Cm, Uk), 6.67 / 0.667));
        assert!(close(convert(9.0, Us, Cm), 29.003));
        assert!(close(convert(41.0, Eu, Cm), 16.0));
        assert!(close(convert(8.0, Uk, Cm), 28.836));
    }

    #[test]
    fn test_conversion_is_not_round_trip() {
        let eu = convert(9.0, SizeSystem::Us, SizeSystem::Eu);
        let uk = convert(eu, SizeSystem::Eu, SizeSystem::Uk);
        let cm_direct = convert(9.0, SizeSystem::Us, SizeSystem::Cm);
        let cm_via_uk = convert(uk, SizeSystem::Uk, SizeSystem::Cm);
        assert!(!close(cm_direct, cm_via_uk));
    }

    #[test]
    fn test_same_or_unsupported_target_is_unchanged() {
        assert_eq!(convert(9.0, SizeSystem::Eu, SizeSystem::Eu), 9.0);
        assert_eq!(convert(42.0, SizeSystem::Eu, SizeSystem::Us), 42.0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(9.0), "9");
        assert_eq!(format_size(9.5), "9.5");
        assert_eq!(format_size(29.003), "29.0");
    }

    #[test]
    fn test_format_size_rounds_quarter_sizes_up() {
        assert_eq!(format_size(9.25), "9.3");
        assert_eq!(format_size(7.25), "7.3");
        assert_eq!(format_size(convert(8.75, SizeSystem::Us, SizeSystem::Eu)), "41.3");
        assert_eq!(SizeConversions::from_us(8.75).eu, "41.3");
    }

    #[test]
    fn test_system_parsing_is_case_insensitive() {
        assert_eq!("eu".parse::<SizeSystem>().unwrap(), SizeSystem::Eu);
        assert_eq!("CM".parse::<SizeSystem>().unwrap(), SizeSystem::Cm);
        assert_eq!(SizeSystem::Uk.to_string(), "UK");
        assert!("jp".parse::<SizeSystem>().is_err());
    }

    #[test]
    fn test_size_conversions_from_us() {
        assert_eq!(
            SizeConversions::from_us(9.0),
            SizeConversions {
                us: "9".to_string(),
                eu: "41.5".to_string(),
                uk: "8".to_string(),
                cm: "29.0".to_string(),
            }
        );
    }

    #[test]
    fn test_default_badge() {
        assert_eq!(
            SizeTag::new(10.0).render(),
            "<span class=\"badge bg-primary\">US 10</span>"
        );
    }

    #[test]
    fn test_text_style_with_conversions() {
        let tag = SizeTag {
            style: SizeStyle::Text,
            theme: SizeTheme::Muted,
            show_conversions: true,
            ..SizeTag::new(9.0)
        };

        assert_eq!(
            tag.render(),
            "<span class=\"size-text text-muted fw-bold\">US 9\
             <br><small class=\"text-muted\">EU 41.5</small>\
             <br><small class=\"text-muted\">UK 8</small>\
             <br><small class=\"text-muted\">29.0 CM</small></span>"
        );
    }

    #[test]
    fn test_conversions_skip_own_system() {
        let tag = SizeTag {
            system: SizeSystem::Eu,
            show_conversions: true,
            ..SizeTag::new(42.0)
        };
        let html = tag.render();

        assert!(html.starts_with("<span class=\"badge bg-primary\">EU 42"));
        assert!(!html.contains("<small class=\"text-muted\">EU"));
        assert!(html.contains("UK 8.5"));
        assert!(html.contains("16.7 CM"));
    }

    #[test]
    fn test_button_with_availability() {
        let tag = SizeTag {
            style: SizeStyle::Button,
            theme: SizeTheme::Dark,
            show_system_label: false,
            show_availability: true,
            stock_level: Some(0),
            ..SizeTag::new(8.5)
        };

        assert_eq!(
            tag.render(),
            "<button class=\"btn btn-sm btn-dark\" type=\"button\" disabled=\"disabled\">8.5\
             <i class=\"fas fa-times text-danger ms-1\"></i></button>"
        );
    }
}
