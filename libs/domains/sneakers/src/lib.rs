//! Sneakers Domain
//!
//! An in-memory sneaker catalog together with the presentation helpers that
//! turn sneakers into cards, badges, price tags and size tags.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐
//! │  Handlers   │   │    Pages    │  ← JSON endpoints / HTML pages
//! └──────┬──────┘   └──────┬──────┘
//!        │                 │ Views (handlebars) + Presentation
//! ┌──────▼─────────────────▼──────┐
//! │            Service            │  ← Error mapping, tracing
//! └───────────────┬───────────────┘
//!                 │
//! ┌───────────────▼───────────────┐
//! │          Repository           │  ← Trait + shared in-memory store
//! └───────────────┬───────────────┘
//!                 │
//! ┌───────────────▼───────────────┐
//! │         CatalogStore          │  ← Ids, search, featured, recent
//! └───────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_sneakers::{
//!     DisplaySettings, InMemorySneakerRepository, PageRenderer, SneakerService, handlers, pages,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = SneakerService::new(InMemorySneakerRepository::seeded());
//! let settings = DisplaySettings::default();
//!
//! let api = handlers::router(service.clone(), settings.clone());
//! let html = pages::router(service, PageRenderer::new(settings)?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod presentation;
pub mod repository;
pub mod seed;
pub mod service;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use error::{SneakerError, SneakerResult};
pub use handlers::ApiDoc;
pub use models::{Brand, Category, Condition, Sneaker, SneakerFilter, SneakerId, SneakerInput};
pub use repository::{InMemorySneakerRepository, SneakerRepository};
pub use service::SneakerService;
pub use store::{CatalogOverview, CatalogStore};
pub use views::{DisplaySettings, PageRenderer};
