//! Condition badges.

use strum::{Display, EnumString};

use super::{class_list, escape};
use crate::models::Condition;

/// Visual treatment for a condition grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionStyle {
    pub badge_class: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Styling used for any grade without its own entry
pub const UNSPECIFIED_STYLE: ConditionStyle = ConditionStyle {
    badge_class: "bg-secondary text-white",
    icon: "fas fa-question",
    description: "Condition not specified",
};

pub fn condition_style(condition: Condition) -> ConditionStyle {
    match condition {
        Condition::DeadStock => ConditionStyle {
            badge_class: "bg-success text-white",
            icon: "fas fa-star",
            description: "New, never worn - flawless with original packaging",
        },
        Condition::NearMint => ConditionStyle {
            badge_class: "bg-primary text-white",
            icon: "fas fa-thumbs-up",
            description: "Light signs of wear - very good overall condition",
        },
        Condition::Excellent => ConditionStyle {
            badge_class: "bg-primary text-white",
            icon: "fas fa-check",
            description: "Worn a few times - some signs of wear but well kept",
        },
        Condition::VeryGood => ConditionStyle {
            badge_class: "bg-secondary text-white",
            icon: "fas fa-check-circle",
            description: "Regular wear - visible use but in good shape",
        },
        Condition::Good => ConditionStyle {
            badge_class: "bg-warning text-dark",
            icon: "fas fa-minus-circle",
            description: "Heavy wear - visible marks but still wearable",
        },
        Condition::Fair => ConditionStyle {
            badge_class: "bg-warning text-dark",
            icon: "fas fa-exclamation",
            description: "Marked wear - frequent use with visible damage",
        },
        Condition::Poor => ConditionStyle {
            badge_class: "bg-danger text-white",
            icon: "fas fa-times",
            description: "Very worn - damaged, mostly for parts or restoration",
        },
        // VeryNearDeadStock has no styling of its own
        _ => UNSPECIFIED_STYLE,
    }
}

/// Short collector code, `?` for grades without one
pub fn abbreviation(condition: Condition) -> &'static str {
    match condition {
        Condition::DeadStock => "DS",
        Condition::NearMint => "NM",
        Condition::Excellent => "EX",
        Condition::VeryGood => "VG",
        Condition::Good => "G",
        Condition::Fair => "F",
        Condition::Poor => "P",
        _ => "?",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn class(self) -> &'static str {
        match self {
            BadgeSize::Small => "badge-sm",
            BadgeSize::Medium => "",
            BadgeSize::Large => "badge-lg",
        }
    }
}

/// `<span class="badge ...">` showing a condition grade
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionBadge {
    pub condition: Condition,
    pub show_icon: bool,
    pub size: BadgeSize,
    pub abbreviated: bool,
    pub css_class: String,
    pub show_tooltip: bool,
}

impl ConditionBadge {
    pub fn new(condition: Condition) -> Self {
        Self {
            condition,
            show_icon: true,
            size: BadgeSize::default(),
            abbreviated: false,
            css_class: String::new(),
            show_tooltip: true,
        }
    }

    pub fn render(&self) -> String {
        let style = condition_style(self.condition);
        let classes = class_list(&["badge", style.badge_class, self.size.class(), &self.css_class]);

        let tooltip = if self.show_tooltip {
            format!(
                " title=\"{}\" data-bs-toggle=\"tooltip\" data-bs-placement=\"top\"",
                escape(style.description)
            )
        } else {
            String::new()
        };

        let text = if self.abbreviated {
            abbreviation(self.condition)
        } else {
            self.condition.display_name()
        };

        let content = if self.show_icon {
            format!("<i class=\"{} me-1\"></i>{}", style.icon, escape(text))
        } else {
            escape(text)
        };

        format!(
            "<span class=\"{}\"{}>{}</span>",
            escape(&classes),
            tooltip,
            content
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::lenient;

    #[test]
    fn test_every_graded_condition_has_its_own_style() {
        for condition in Condition::ALL {
            let style = condition_style(condition);
            if condition == Condition::VeryNearDeadStock {
                assert_eq!(style, UNSPECIFIED_STYLE);
            } else {
                assert_ne!(style, UNSPECIFIED_STYLE, "{:?}", condition);
            }
        }
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(abbreviation(Condition::DeadStock), "DS");
        assert_eq!(abbreviation(Condition::VeryGood), "VG");
        assert_eq!(abbreviation(Condition::Poor), "P");
        assert_eq!(abbreviation(Condition::VeryNearDeadStock), "?");
    }

    #[test]
    fn test_default_badge() {
        let html = ConditionBadge::new(Condition::DeadStock).render();
        assert_eq!(
            html,
            "<span class=\"badge bg-success text-white\" \
             title=\"New, never worn - flawless with original packaging\" \
             data-bs-toggle=\"tooltip\" data-bs-placement=\"top\">\
             <i class=\"fas fa-star me-1\"></i>Dead Stock (DS)</span>"
        );
    }

    #[test]
    fn test_abbreviated_badge_without_icon_or_tooltip() {
        let badge = ConditionBadge {
            abbreviated: true,
            show_icon: false,
            show_tooltip: false,
            size: lenient("SMALL"),
            css_class: "ms-2".to_string(),
            ..ConditionBadge::new(Condition::Good)
        };

        assert_eq!(
            badge.render(),
            "<span class=\"badge bg-warning text-dark badge-sm ms-2\">G</span>"
        );
    }

    #[test]
    fn test_unstyled_grade_renders_fallback() {
        let html = ConditionBadge::new(Condition::VeryNearDeadStock).render();
        assert!(html.contains("fas fa-question"));
        assert!(html.contains("Condition not specified"));
    }
}
