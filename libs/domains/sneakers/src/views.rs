//! HTML page rendering.
//!
//! Handlebars templates for the catalog pages. Fragments produced by the
//! presentation module are already escaped and are inserted with `{{{ }}}`;
//! everything else goes through Handlebars' own escaping.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::{SneakerError, SneakerResult};
use crate::forms::{FormErrors, SneakerForm};
use crate::models::{Brand, Category, Condition, Sneaker, SneakerFilter, SneakerId};
use crate::presentation::{
    BadgeSize, ConditionBadge, PriceSize, PriceTag, PriceTheme, SizeTag, SneakerCard,
};
use crate::service::DEFAULT_RECENT_COUNT;
use crate::store::CatalogOverview;

/// Display preferences shared by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// ISO code used for prices
    pub currency: String,
    /// Number of sneakers in the home page "recently added" list
    pub recent_count: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

/// One-shot message shown above a page's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A requested id is not in the catalog
    Missing(SneakerId),
    /// An edit form was posted for a different id than its URL
    IdMismatch,
    /// The search query could not be understood
    InvalidFilter,
    /// Full name of the sneaker just added
    Created(String),
    /// Full name of the sneaker just changed
    Updated(String),
    Deleted(SneakerId),
}

impl Notice {
    fn alert(&self) -> Alert {
        let (level, message) = match self {
            Notice::Missing(id) => ("danger", format!("Sneaker {} was not found.", id)),
            Notice::IdMismatch => ("danger", "Invalid sneaker identifier.".to_string()),
            Notice::InvalidFilter => (
                "warning",
                "Some search options were not recognised and were ignored.".to_string(),
            ),
            Notice::Created(name) => ("success", format!("{} was added to the collection.", name)),
            Notice::Updated(name) => ("success", format!("{} was updated.", name)),
            Notice::Deleted(id) => ("success", format!("Sneaker {} was deleted.", id)),
        };
        Alert { level, message }
    }
}

/// Whether a form adds a sneaker or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Edit(SneakerId),
}

#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

#[derive(Serialize)]
struct LayoutData<'a> {
    title: &'a str,
    body: &'a str,
    alert: Option<Alert>,
}

#[derive(Serialize)]
struct HomeData {
    total: usize,
    featured: Vec<String>,
    recent: Vec<String>,
}

#[derive(Serialize)]
struct SelectOption {
    value: String,
    label: &'static str,
    selected: bool,
}

#[derive(Serialize)]
struct IndexData {
    cards: Vec<String>,
    count: usize,
    filtered: bool,
    term: String,
    brands: Vec<SelectOption>,
    categories: Vec<SelectOption>,
    conditions: Vec<SelectOption>,
}

#[derive(Serialize)]
struct DetailsData {
    id: SneakerId,
    full_name: String,
    brand: &'static str,
    model: String,
    colorway: String,
    category: &'static str,
    image_url: String,
    condition_badge: String,
    price_tag: String,
    size_tag: String,
    release_date: String,
    added_date: String,
    description: Option<String>,
    is_limited: bool,
    stock: Option<String>,
}

#[derive(Serialize)]
struct DeleteData {
    id: SneakerId,
    full_name: String,
    card: String,
}

#[derive(Serialize)]
struct FormData<'a> {
    heading: String,
    action: String,
    cancel: String,
    id: Option<SneakerId>,
    values: &'a SneakerForm,
    is_limited: bool,
    errors: &'a std::collections::BTreeMap<String, String>,
    brands: Vec<SelectOption>,
    categories: Vec<SelectOption>,
    conditions: Vec<SelectOption>,
}

#[derive(Serialize)]
struct NotFoundData<'a> {
    path: &'a str,
}

const PAGES: [(&str, &str); 7] = [
    ("layout", LAYOUT_TEMPLATE),
    ("home", HOME_TEMPLATE),
    ("index", INDEX_TEMPLATE),
    ("details", DETAILS_TEMPLATE),
    ("form", FORM_TEMPLATE),
    ("delete", DELETE_TEMPLATE),
    ("not_found", NOT_FOUND_TEMPLATE),
];

/// Renders complete HTML pages
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
    settings: DisplaySettings,
}

impl PageRenderer {
    /// Create a renderer with all page templates registered.
    pub fn new(settings: DisplaySettings) -> SneakerResult<Self> {
        let mut handlebars = Handlebars::new();

        for (name, template) in PAGES {
            handlebars
                .register_template_string(name, template)
                .map_err(|e| SneakerError::Render(format!("Failed to register {}: {}", name, e)))?;
        }

        Ok(Self {
            handlebars,
            settings,
        })
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn render_home(&self, overview: &CatalogOverview) -> SneakerResult<String> {
        debug!(total = overview.total, "Rendering home page");

        let data = HomeData {
            total: overview.total,
            featured: self.cards(&overview.featured),
            recent: self.cards(&overview.recent),
        };
        self.page("Sneaker Collection", "home", &data, None)
    }

    /// Catalog listing with the search form
    pub fn render_index(
        &self,
        sneakers: &[Sneaker],
        filter: &SneakerFilter,
        notice: Option<&Notice>,
    ) -> SneakerResult<String> {
        debug!(count = sneakers.len(), "Rendering catalog index");

        let data = IndexData {
            cards: self.cards(sneakers),
            count: sneakers.len(),
            filtered: !filter.is_empty(),
            term: filter.term().unwrap_or_default().to_string(),
            brands: options(&Brand::ALL, filter.brand, |b| b.display_name()),
            categories: options(&Category::ALL, filter.category, |c| c.display_name()),
            conditions: options(&Condition::ALL, filter.condition, |c| c.display_name()),
        };
        self.page("My Collection", "index", &data, notice)
    }

    pub fn render_details(
        &self,
        sneaker: &Sneaker,
        notice: Option<&Notice>,
    ) -> SneakerResult<String> {
        debug!(sneaker_id = sneaker.id, "Rendering details page");

        let badge = ConditionBadge {
            size: BadgeSize::Large,
            ..ConditionBadge::new(sneaker.condition)
        };
        let price = PriceTag {
            size: PriceSize::XLarge,
            theme: PriceTheme::Success,
            ..PriceTag::new(sneaker.price).with_currency(&self.settings.currency)
        };
        let size = SizeTag {
            show_conversions: true,
            show_availability: true,
            stock_level: sneaker.stock_quantity,
            ..SizeTag::new(sneaker.size)
        };

        let data = DetailsData {
            id: sneaker.id,
            full_name: sneaker.full_name(),
            brand: sneaker.brand.display_name(),
            model: sneaker.model.clone(),
            colorway: sneaker.colorway.clone(),
            category: sneaker.category.display_name(),
            image_url: sneaker.display_image_url().to_string(),
            condition_badge: badge.render(),
            price_tag: price.render(),
            size_tag: size.render(),
            release_date: sneaker.release_date.format("%d %B %Y").to_string(),
            added_date: sneaker.added_date.format("%d %B %Y").to_string(),
            description: sneaker.description.clone().filter(|d| !d.is_empty()),
            is_limited: sneaker.is_limited,
            stock: sneaker.stock_quantity.map(|n| {
                if n > 0 {
                    format!("{} in stock", n)
                } else {
                    "Out of stock".to_string()
                }
            }),
        };
        self.page(&sneaker.full_name(), "details", &data, notice)
    }

    pub fn render_delete(&self, sneaker: &Sneaker) -> SneakerResult<String> {
        let card = SneakerCard {
            show_actions: false,
            show_full_description: true,
            currency: self.settings.currency.clone(),
            ..SneakerCard::default()
        };

        let data = DeleteData {
            id: sneaker.id,
            full_name: sneaker.full_name(),
            card: card.render(Some(sneaker)).unwrap_or_default(),
        };
        self.page("Delete sneaker", "delete", &data, None)
    }

    /// Add or edit form, filled with `values` and showing `errors` per field
    pub fn render_form(
        &self,
        mode: FormMode,
        values: &SneakerForm,
        errors: &FormErrors,
    ) -> SneakerResult<String> {
        debug!(?mode, errors = errors.fields().len(), "Rendering sneaker form");

        let (title, heading, action, cancel, id) = match mode {
            FormMode::New => (
                "Add a sneaker",
                "Add a sneaker".to_string(),
                "/sneakers/new".to_string(),
                "/sneakers".to_string(),
                None,
            ),
            FormMode::Edit(id) => (
                "Edit sneaker",
                format!("Edit {}", values.model.trim()),
                format!("/sneakers/{}/edit", id),
                format!("/sneakers/{}", id),
                Some(id),
            ),
        };

        let data = FormData {
            heading,
            action,
            cancel,
            id,
            values,
            is_limited: values.is_limited.is_some(),
            errors: errors.fields(),
            brands: raw_options(&Brand::ALL, &values.brand, |b| b.display_name()),
            categories: raw_options(&Category::ALL, &values.category, |c| c.display_name()),
            conditions: raw_options(&Condition::ALL, &values.condition, |c| c.display_name()),
        };
        self.page(title, "form", &data, None)
    }

    pub fn render_not_found(&self, path: &str) -> SneakerResult<String> {
        self.page("Page not found", "not_found", &NotFoundData { path }, None)
    }

    fn cards(&self, sneakers: &[Sneaker]) -> Vec<String> {
        let card = SneakerCard {
            currency: self.settings.currency.clone(),
            ..SneakerCard::default()
        };
        sneakers
            .iter()
            .filter_map(|s| card.render(Some(s)).ok())
            .collect()
    }

    fn page<T: Serialize>(
        &self,
        title: &str,
        template: &str,
        data: &T,
        notice: Option<&Notice>,
    ) -> SneakerResult<String> {
        let body = self.handlebars.render(template, data)?;
        let layout = LayoutData {
            title,
            body: &body,
            alert: notice.map(Notice::alert),
        };
        Ok(self.handlebars.render("layout", &layout)?)
    }
}

fn options<T>(all: &[T], selected: Option<T>, label: impl Fn(&T) -> &'static str) -> Vec<SelectOption>
where
    T: Copy + PartialEq + std::fmt::Display,
{
    all.iter()
        .map(|value| SelectOption {
            value: value.to_string(),
            label: label(value),
            selected: selected == Some(*value),
        })
        .collect()
}

// Form values arrive as text; a select keeps whatever the user picked.
fn raw_options<T>(all: &[T], selected: &str, label: impl Fn(&T) -> &'static str) -> Vec<SelectOption>
where
    T: std::fmt::Display,
{
    all.iter()
        .map(|value| {
            let value_text = value.to_string();
            SelectOption {
                selected: value_text.eq_ignore_ascii_case(selected.trim()),
                value: value_text,
                label: label(value),
            }
        })
        .collect()
}

const LAYOUT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{title}} - Sneaker Collection</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css">
</head>
<body>
<nav class="navbar navbar-expand navbar-dark bg-dark mb-4">
<div class="container">
<a class="navbar-brand" href="/"><i class="fas fa-shoe-prints me-2"></i>Sneaker Collection</a>
<div class="navbar-nav">
<a class="nav-link" href="/sneakers">Collection</a>
<a class="nav-link" href="/sneakers/new">Add</a>
<a class="nav-link" href="/swagger-ui">API</a>
</div>
</div>
</nav>
<main class="container">
{{#if alert}}<div class="alert alert-{{alert.level}} alert-dismissible" role="alert">{{alert.message}}</div>
{{/if}}
{{{body}}}
</main>
</body>
</html>
"#;

const HOME_TEMPLATE: &str = r#"<div class="p-4 mb-4 bg-light rounded-3">
<h1 class="display-5">Sneaker Collection</h1>
<p class="lead">{{total}} pairs in the collection.</p>
<a href="/sneakers" class="btn btn-primary">Browse the collection</a>
</div>
{{#if featured}}
<h2 class="h4 mb-3"><i class="fas fa-gem me-2"></i>Featured</h2>
<div class="row row-cols-1 row-cols-md-2 row-cols-lg-4 g-4 mb-5">
{{#each featured}}<div class="col">{{{this}}}</div>
{{/each}}
</div>
{{/if}}
<h2 class="h4 mb-3"><i class="fas fa-clock me-2"></i>Recently added</h2>
{{#if recent}}
<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
{{#each recent}}<div class="col">{{{this}}}</div>
{{/each}}
</div>
{{else}}
<p class="text-muted">The collection is empty.</p>
{{/if}}
"#;

const INDEX_TEMPLATE: &str = r#"<div class="d-flex justify-content-between align-items-center mb-3">
<h1 class="h3 mb-0">My Collection</h1>
<a href="/sneakers/new" class="btn btn-success"><i class="fas fa-plus me-1"></i>Add a sneaker</a>
</div>
<form method="get" action="/sneakers" class="row g-2 mb-4">
<div class="col-md-4"><input type="search" name="q" value="{{term}}" class="form-control" placeholder="Model, colorway, brand..."></div>
<div class="col-md-2"><select name="brand" class="form-select"><option value="">All brands</option>
{{#each brands}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select></div>
<div class="col-md-2"><select name="category" class="form-select"><option value="">All categories</option>
{{#each categories}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select></div>
<div class="col-md-2"><select name="condition" class="form-select"><option value="">All conditions</option>
{{#each conditions}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select></div>
<div class="col-md-2 d-flex gap-2"><button type="submit" class="btn btn-primary">Search</button>
{{#if filtered}}<a href="/sneakers" class="btn btn-outline-secondary">Reset</a>{{/if}}</div>
</form>
<p class="text-muted">{{count}} result(s)</p>
{{#if cards}}
<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">
{{#each cards}}<div class="col">{{{this}}}</div>
{{/each}}
</div>
{{else}}
<p class="text-muted">No sneakers match your search.</p>
{{/if}}
"#;

const DETAILS_TEMPLATE: &str = r#"<nav aria-label="breadcrumb"><ol class="breadcrumb">
<li class="breadcrumb-item"><a href="/sneakers">Collection</a></li>
<li class="breadcrumb-item active" aria-current="page">{{full_name}}</li>
</ol></nav>
<div class="row g-4">
<div class="col-md-6"><img src="{{image_url}}" alt="{{full_name}}" class="img-fluid rounded shadow-sm"></div>
<div class="col-md-6">
<h1 class="h3">{{brand}} {{model}}</h1>
<p class="text-muted">{{colorway}}</p>
<p>{{{condition_badge}}}{{#if is_limited}} <span class="badge bg-warning text-dark"><i class="fas fa-gem me-1"></i>Limited Edition</span>{{/if}}</p>
<p>{{{price_tag}}}</p>
<p>{{{size_tag}}}</p>
<dl class="row">
<dt class="col-sm-4">Category</dt><dd class="col-sm-8">{{category}}</dd>
<dt class="col-sm-4">Release date</dt><dd class="col-sm-8">{{release_date}}</dd>
<dt class="col-sm-4">Added on</dt><dd class="col-sm-8">{{added_date}}</dd>
{{#if stock}}<dt class="col-sm-4">Stock</dt><dd class="col-sm-8">{{stock}}</dd>{{/if}}
</dl>
{{#if description}}<p>{{description}}</p>{{/if}}
<a href="/sneakers" class="btn btn-outline-secondary">Back</a>
<a href="/sneakers/{{id}}/edit" class="btn btn-outline-warning">Edit</a>
<a href="/sneakers/{{id}}/delete" class="btn btn-outline-danger">Delete</a>
</div>
</div>
"#;

const FORM_TEMPLATE: &str = r#"<h1 class="h3 mb-3">{{heading}}</h1>
{{#if errors}}<div class="alert alert-danger" role="alert">Please correct the highlighted fields.</div>{{/if}}
<form method="post" action="{{action}}" class="row g-3" novalidate>
{{#if id}}<input type="hidden" name="id" value="{{id}}">{{/if}}
<div class="col-md-4"><label for="brand" class="form-label">Brand</label>
<select id="brand" name="brand" class="form-select{{#if errors.brand}} is-invalid{{/if}}"><option value="">Choose...</option>
{{#each brands}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select>{{#if errors.brand}}<div class="invalid-feedback">{{errors.brand}}</div>{{/if}}</div>
<div class="col-md-4"><label for="model" class="form-label">Model</label>
<input id="model" name="model" value="{{values.model}}" class="form-control{{#if errors.model}} is-invalid{{/if}}">
{{#if errors.model}}<div class="invalid-feedback">{{errors.model}}</div>{{/if}}</div>
<div class="col-md-4"><label for="colorway" class="form-label">Colorway</label>
<input id="colorway" name="colorway" value="{{values.colorway}}" class="form-control{{#if errors.colorway}} is-invalid{{/if}}">
{{#if errors.colorway}}<div class="invalid-feedback">{{errors.colorway}}</div>{{/if}}</div>
<div class="col-md-3"><label for="size" class="form-label">Size (US)</label>
<input id="size" name="size" value="{{values.size}}" inputmode="decimal" class="form-control{{#if errors.size}} is-invalid{{/if}}">
{{#if errors.size}}<div class="invalid-feedback">{{errors.size}}</div>{{/if}}</div>
<div class="col-md-3"><label for="price" class="form-label">Price</label>
<input id="price" name="price" value="{{values.price}}" inputmode="decimal" class="form-control{{#if errors.price}} is-invalid{{/if}}">
{{#if errors.price}}<div class="invalid-feedback">{{errors.price}}</div>{{/if}}</div>
<div class="col-md-3"><label for="condition" class="form-label">Condition</label>
<select id="condition" name="condition" class="form-select{{#if errors.condition}} is-invalid{{/if}}"><option value="">Choose...</option>
{{#each conditions}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select>{{#if errors.condition}}<div class="invalid-feedback">{{errors.condition}}</div>{{/if}}</div>
<div class="col-md-3"><label for="category" class="form-label">Category</label>
<select id="category" name="category" class="form-select{{#if errors.category}} is-invalid{{/if}}"><option value="">Choose...</option>
{{#each categories}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>{{/each}}
</select>{{#if errors.category}}<div class="invalid-feedback">{{errors.category}}</div>{{/if}}</div>
<div class="col-md-4"><label for="release_date" class="form-label">Release date</label>
<input id="release_date" name="release_date" type="date" value="{{values.release_date}}" class="form-control{{#if errors.release_date}} is-invalid{{/if}}">
{{#if errors.release_date}}<div class="invalid-feedback">{{errors.release_date}}</div>{{/if}}</div>
<div class="col-md-4"><label for="stock_quantity" class="form-label">Stock</label>
<input id="stock_quantity" name="stock_quantity" value="{{values.stock_quantity}}" inputmode="numeric" class="form-control{{#if errors.stock_quantity}} is-invalid{{/if}}">
{{#if errors.stock_quantity}}<div class="invalid-feedback">{{errors.stock_quantity}}</div>{{/if}}</div>
<div class="col-md-4 d-flex align-items-end"><div class="form-check">
<input id="is_limited" name="is_limited" type="checkbox" class="form-check-input"{{#if is_limited}} checked{{/if}}>
<label for="is_limited" class="form-check-label">Limited edition</label></div></div>
<div class="col-12"><label for="image_url" class="form-label">Image URL</label>
<input id="image_url" name="image_url" value="{{values.image_url}}" class="form-control{{#if errors.image_url}} is-invalid{{/if}}">
{{#if errors.image_url}}<div class="invalid-feedback">{{errors.image_url}}</div>{{/if}}</div>
<div class="col-12"><label for="description" class="form-label">Description</label>
<textarea id="description" name="description" rows="3" class="form-control{{#if errors.description}} is-invalid{{/if}}">{{values.description}}</textarea>
{{#if errors.description}}<div class="invalid-feedback">{{errors.description}}</div>{{/if}}</div>
<div class="col-12 d-flex gap-2"><button type="submit" class="btn btn-primary"><i class="fas fa-save me-1"></i>Save</button>
<a href="{{cancel}}" class="btn btn-outline-secondary">Cancel</a></div>
</form>
"#;

const DELETE_TEMPLATE: &str = r#"<h1 class="h3 text-danger">Delete sneaker</h1>
<div class="alert alert-warning">Are you sure you want to delete <strong>{{full_name}}</strong>? This cannot be undone.</div>
<div class="row"><div class="col-md-4 mb-3">{{{card}}}</div></div>
<form method="post" action="/sneakers/{{id}}/delete">
<button type="submit" class="btn btn-danger"><i class="fas fa-trash me-1"></i>Delete</button>
<a href="/sneakers/{{id}}" class="btn btn-outline-secondary">Cancel</a>
</form>
"#;

const NOT_FOUND_TEMPLATE: &str = r#"<div class="text-center py-5">
<h1 class="display-6">Page not found</h1>
<p class="text-muted">Nothing lives at <code>{{path}}</code>.</p>
<a href="/sneakers" class="btn btn-primary">Back to the collection</a>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CatalogStore;

    fn renderer() -> PageRenderer {
        PageRenderer::new(DisplaySettings::default()).unwrap()
    }

    #[test]
    fn test_home_page_lists_featured_and_recent() {
        let store = CatalogStore::seeded();
        let overview = store.overview(6);

        let html = renderer().render_home(&overview).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("8 pairs in the collection."));
        assert_eq!(html.matches("sneaker-card").count(), 10);
    }

    #[test]
    fn test_index_keeps_search_selections() {
        let store = CatalogStore::seeded();
        let filter = SneakerFilter {
            q: Some("air".to_string()),
            brand: Some(Brand::Jordan),
            ..Default::default()
        };

        let html = renderer()
            .render_index(&store.search(&filter), &filter, None)
            .unwrap();

        assert!(html.contains("value=\"air\""));
        assert!(html.contains("<option value=\"jordan\" selected>Jordan</option>"));
        assert!(html.contains("2 result(s)"));
        assert!(html.contains("Reset"));
        assert!(!html.contains("alert-danger"));
    }

    #[test]
    fn test_index_shows_missing_flash() {
        let html = renderer()
            .render_index(&[], &SneakerFilter::default(), Some(&Notice::Missing(42)))
            .unwrap();

        assert!(html.contains("Sneaker 42 was not found."));
        assert!(html.contains("No sneakers match your search."));
    }

    #[test]
    fn test_details_page() {
        let store = CatalogStore::seeded();
        let sneaker = store.get_by_id(6).unwrap();

        let html = renderer().render_details(sneaker, None).unwrap();
        assert!(html.contains("New Balance 990v3"));
        assert!(html.contains("/images/sneaker-placeholder.jpg"));
        assert!(html.contains("€185"));
        assert!(html.contains("EU 43.5"));
        assert!(html.contains("2 in stock"));
    }

    #[test]
    fn test_details_page_uses_display_currency() {
        let renderer = PageRenderer::new(DisplaySettings {
            currency: "GBP".to_string(),
            ..DisplaySettings::default()
        })
        .unwrap();
        let store = CatalogStore::seeded();

        let html = renderer
            .render_details(store.get_by_id(1).unwrap(), None)
            .unwrap();
        assert!(html.contains("£180"));
    }

    #[test]
    fn test_delete_page_posts_back() {
        let store = CatalogStore::seeded();
        let html = renderer().render_delete(store.get_by_id(3).unwrap()).unwrap();

        assert!(html.contains("action=\"/sneakers/3/delete\""));
        assert!(html.contains("sneaker-card"));
        assert!(!html.contains("btn-group"));
    }

    #[test]
    fn test_new_form_starts_empty() {
        let html = renderer()
            .render_form(FormMode::New, &SneakerForm::default(), &FormErrors::default())
            .unwrap();

        assert!(html.contains("action=\"/sneakers/new\""));
        assert!(!html.contains("name=\"id\""));
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains(" selected>"));
    }

    #[test]
    fn test_edit_form_keeps_values_and_errors() {
        let store = CatalogStore::seeded();
        let mut values = SneakerForm::from(store.get_by_id(4).unwrap());
        values.size = "<big>".to_string();
        let errors = values.parse().unwrap_err();

        let html = renderer()
            .render_form(FormMode::Edit(4), &values, &errors)
            .unwrap();

        assert!(html.contains("action=\"/sneakers/4/edit\""));
        assert!(html.contains("<input type=\"hidden\" name=\"id\" value=\"4\">"));
        assert!(html.contains("value=\"&lt;big&gt;\""));
        assert!(html.contains("Enter a US size such as 9.5."));
        assert!(html.contains("<option value=\"nike\" selected>Nike</option>"));
        assert!(html.contains("Please correct the highlighted fields."));
    }

    #[test]
    fn test_success_notice_is_escaped() {
        let notice = Notice::Created("Vans <Sk8-Hi>".to_string());
        let html = renderer()
            .render_index(&[], &SneakerFilter::default(), Some(&notice))
            .unwrap();

        assert!(html.contains("alert-success"));
        assert!(html.contains("Vans &lt;Sk8-Hi&gt; was added to the collection."));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = renderer().render_not_found("/<oops>").unwrap();
        assert!(html.contains("&lt;oops&gt;"));
    }
}
