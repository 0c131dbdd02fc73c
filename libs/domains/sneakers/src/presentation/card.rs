//! Catalog card for a single sneaker.

use strum::{Display, EnumString};

use super::condition::ConditionBadge;
use super::price::currency_symbol;
use super::size::format_size;
use super::{PresentationError, class_list, escape, round_half_away};
use crate::models::Sneaker;

/// Descriptions longer than this are cut unless the full text is requested
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CardSize {
    fn class(self) -> &'static str {
        match self {
            CardSize::Small => "card-small",
            CardSize::Medium => "card-medium",
            CardSize::Large => "card-large",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SneakerCard {
    pub show_actions: bool,
    pub css_class: String,
    pub size: CardSize,
    pub show_full_description: bool,
    /// Currency code for the price line
    pub currency: String,
}

impl Default for SneakerCard {
    fn default() -> Self {
        Self {
            show_actions: true,
            css_class: String::new(),
            size: CardSize::default(),
            show_full_description: false,
            currency: "EUR".to_string(),
        }
    }
}

impl SneakerCard {
    /// Render the card.
    ///
    /// # Errors
    /// [`PresentationError::MissingSneaker`] when there is nothing to render;
    /// callers drop the card rather than fail the page.
    pub fn render(&self, sneaker: Option<&Sneaker>) -> Result<String, PresentationError> {
        let sneaker = sneaker.ok_or(PresentationError::MissingSneaker)?;

        let classes = class_list(&[
            "card sneaker-card h-100 shadow-sm",
            &self.css_class,
            self.size.class(),
        ]);

        let mut html = format!("<div class=\"{}\">", escape(&classes));
        self.push_header(&mut html, sneaker);
        self.push_body(&mut html, sneaker);

        html.push_str("<div class=\"card-footer bg-transparent border-top-0\"><small class=\"text-muted\">");
        html.push_str(&format!(
            "<i class=\"fas fa-calendar-plus me-1\"></i>Added on {}",
            sneaker.added_date.format("%d %b %Y")
        ));
        html.push_str("</small></div></div>");

        Ok(html)
    }

    fn push_header(&self, html: &mut String, sneaker: &Sneaker) {
        html.push_str("<div class=\"card-img-top-wrapper position-relative\">");

        match sneaker.image_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => html.push_str(&format!(
                "<img src=\"{}\" alt=\"{} {}\" class=\"card-img-top sneaker-image\" style=\"height: 200px; object-fit: cover;\">",
                escape(url),
                escape(sneaker.brand.display_name()),
                escape(&sneaker.model)
            )),
            None => html.push_str(
                "<div class=\"card-img-placeholder d-flex align-items-center justify-content-center bg-light\" style=\"height: 200px;\">\
                 <i class=\"fas fa-image text-muted fa-3x\"></i></div>",
            ),
        }

        if sneaker.is_limited {
            html.push_str(
                "<div class=\"position-absolute top-0 end-0 m-2\">\
                 <span class=\"badge bg-warning text-dark\"><i class=\"fas fa-gem me-1\"></i>Limited Edition</span></div>",
            );
        }

        html.push_str("<div class=\"position-absolute top-0 start-0 m-2\">");
        html.push_str(&ConditionBadge::new(sneaker.condition).render());
        html.push_str("</div></div>");
    }

    fn push_body(&self, html: &mut String, sneaker: &Sneaker) {
        html.push_str("<div class=\"card-body d-flex flex-column\">");
        html.push_str(&format!(
            "<h5 class=\"card-title text-primary mb-1\">{}</h5>\
             <h6 class=\"card-subtitle mb-2 text-muted\">{}</h6>",
            escape(sneaker.brand.display_name()),
            escape(&sneaker.model)
        ));

        if !sneaker.colorway.is_empty() {
            html.push_str(&format!(
                "<p class=\"text-muted small mb-2\">Colorway: {}</p>",
                escape(&sneaker.colorway)
            ));
        }

        html.push_str(&format!(
            "<div class=\"row g-2 mb-3 small\">\
             <div class=\"col-6\"><strong>Size:</strong> US {}</div>\
             <div class=\"col-6\"><strong>Category:</strong> {}</div></div>",
            format_size(sneaker.size),
            escape(sneaker.category.display_name())
        ));

        if let Some(description) = sneaker.description.as_deref().filter(|d| !d.is_empty()) {
            html.push_str(&format!(
                "<p class=\"card-text small text-muted flex-grow-1\">{}</p>",
                escape(&self.description_text(description))
            ));
        }

        html.push_str("<div class=\"mt-auto\"><div class=\"d-flex justify-content-between align-items-center mb-2\">");
        html.push_str(&format!(
            "<span class=\"h5 text-success mb-0\">{}{:.2}</span><small class=\"text-muted\">{}</small></div>",
            escape(&currency_symbol(&self.currency)),
            round_half_away(sneaker.price, 2),
            sneaker.release_date.format("%b %Y")
        ));

        if let Some(stock) = sneaker.stock_quantity {
            let (class, text) = if stock > 0 {
                ("text-success", format!("{} in stock", stock))
            } else {
                ("text-danger", "Out of stock".to_string())
            };
            html.push_str(&format!(
                "<small class=\"{}\"><i class=\"fas fa-boxes me-1\"></i>{}</small>",
                class, text
            ));
        }

        if self.show_actions {
            let id = sneaker.id;
            html.push_str(&format!(
                "<div class=\"btn-group w-100 mt-3\" role=\"group\">\
                 <a href=\"/sneakers/{id}\" class=\"btn btn-outline-info btn-sm\"><i class=\"fas fa-eye me-1\"></i>View</a>\
                 <a href=\"/sneakers/{id}/edit\" class=\"btn btn-outline-warning btn-sm\"><i class=\"fas fa-edit me-1\"></i>Edit</a>\
                 <a href=\"/sneakers/{id}/delete\" class=\"btn btn-outline-danger btn-sm\"><i class=\"fas fa-trash me-1\"></i>Delete</a>\
                 </div>"
            ));
        }

        html.push_str("</div></div>");
    }

    fn description_text(&self, description: &str) -> String {
        if self.show_full_description || description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
            description.to_string()
        } else {
            let preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", preview)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_sneakers;
    use chrono::Utc;

    fn chicago() -> Sneaker {
        sample_sneakers(Utc::now()).remove(0)
    }

    #[test]
    fn test_missing_sneaker_is_an_error() {
        assert_eq!(
            SneakerCard::default().render(None),
            Err(PresentationError::MissingSneaker)
        );
    }

    #[test]
    fn test_card_structure() {
        let sneaker = chicago();
        let html = SneakerCard::default().render(Some(&sneaker)).unwrap();

        assert!(html.starts_with("<div class=\"card sneaker-card h-100 shadow-sm card-medium\">"));
        assert!(html.contains("<img src=\"https://images.stockx.com/images/Air-Jordan-1-Retro-High-Chicago-2015.jpg\""));
        assert!(html.contains("Limited Edition"));
        assert!(html.contains("fas fa-star"));
        assert!(html.contains("Colorway: Chicago"));
        assert!(html.contains("<strong>Size:</strong> US 9</div>"));
        assert!(html.contains("€180.00"));
        assert!(html.contains("May 2015"));
        assert!(html.contains("2 in stock"));
        assert!(html.contains("href=\"/sneakers/1/delete\""));
        assert!(html.contains("href=\"/sneakers/1/edit\""));
        assert!(html.contains("Added on "));
        assert!(html.ends_with("</small></div></div>"));
    }

    #[test]
    fn test_card_without_image_or_actions() {
        let mut sneaker = chicago();
        sneaker.image_url = None;
        sneaker.is_limited = false;
        sneaker.stock_quantity = Some(0);

        let card = SneakerCard {
            show_actions: false,
            size: CardSize::Small,
            css_class: "featured".to_string(),
            ..SneakerCard::default()
        };
        let html = card.render(Some(&sneaker)).unwrap();

        assert!(html.starts_with("<div class=\"card sneaker-card h-100 shadow-sm featured card-small\">"));
        assert!(html.contains("card-img-placeholder"));
        assert!(!html.contains("Limited Edition"));
        assert!(html.contains("Out of stock"));
        assert!(!html.contains("btn-group"));
    }

    #[test]
    fn test_long_description_is_truncated() {
        let mut sneaker = chicago();
        sneaker.description = Some("é".repeat(150));

        let html = SneakerCard::default().render(Some(&sneaker)).unwrap();
        assert!(html.contains(&format!("{}...", "é".repeat(100))));

        let full = SneakerCard {
            show_full_description: true,
            ..SneakerCard::default()
        };
        let html = full.render(Some(&sneaker)).unwrap();
        assert!(html.contains(&"é".repeat(150)));
        assert!(!html.contains("..."));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut sneaker = chicago();
        sneaker.model = "<script>alert(1)</script>".to_string();

        let html = SneakerCard::default().render(Some(&sneaker)).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
