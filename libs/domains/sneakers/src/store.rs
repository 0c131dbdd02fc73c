//! Catalog Store - the authoritative in-memory sneaker collection
//!
//! Plain synchronous data structure. It trusts its input: validation happens
//! in [`crate::service::SneakerService`] before anything reaches the store.
//! Shared access goes through [`crate::repository::InMemorySneakerRepository`],
//! which puts the store behind a single lock.

use chrono::{DateTime, Utc};

use crate::models::{Sneaker, SneakerFilter, SneakerId, SneakerInput};
use crate::seed;

/// Maximum number of sneakers in the featured set
pub const FEATURED_LIMIT: usize = 4;

/// Price above which a sneaker is featured even when not limited
pub const FEATURED_PRICE_THRESHOLD: f64 = 200.0;

/// Everything the home page shows, taken from one state of the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogOverview {
    pub featured: Vec<Sneaker>,
    pub recent: Vec<Sneaker>,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    sneakers: Vec<Sneaker>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records. Ids are taken as given.
    pub fn with_sneakers(sneakers: Vec<Sneaker>) -> Self {
        Self { sneakers }
    }

    /// Store holding the sample collection
    pub fn seeded() -> Self {
        Self::with_sneakers(seed::sample_sneakers(Utc::now()))
    }

    pub fn len(&self) -> usize {
        self.sneakers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sneakers.is_empty()
    }

    /// All sneakers, most recently added first
    pub fn list_all(&self) -> Vec<Sneaker> {
        newest_first(self.sneakers.iter())
    }

    pub fn get_by_id(&self, id: SneakerId) -> Option<&Sneaker> {
        self.sneakers.iter().find(|s| s.id == id)
    }

    /// Highest id plus one, or 1 for an empty store
    pub fn next_id(&self) -> SneakerId {
        self.sneakers
            .iter()
            .map(|s| s.id)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn add(&mut self, input: SneakerInput) -> Sneaker {
        self.add_at(input, Utc::now())
    }

    /// Add with an explicit `added_date`
    pub fn add_at(&mut self, input: SneakerInput, added_date: DateTime<Utc>) -> Sneaker {
        let sneaker = input.into_sneaker(self.next_id(), added_date);
        self.sneakers.push(sneaker.clone());
        sneaker
    }

    /// Replace the record with the same id, keeping its `added_date`.
    ///
    /// Returns `None` and changes nothing when the id is unknown.
    pub fn update(&mut self, mut sneaker: Sneaker) -> Option<Sneaker> {
        let existing = self.sneakers.iter_mut().find(|s| s.id == sneaker.id)?;
        sneaker.added_date = existing.added_date;
        *existing = sneaker.clone();
        Some(sneaker)
    }

    /// Remove and return the record, if present
    pub fn delete(&mut self, id: SneakerId) -> Option<Sneaker> {
        let index = self.sneakers.iter().position(|s| s.id == id)?;
        Some(self.sneakers.remove(index))
    }

    /// Sneakers matching every active filter, most recently added first
    pub fn search(&self, filter: &SneakerFilter) -> Vec<Sneaker> {
        let term = filter.term().map(str::to_lowercase);

        newest_first(self.sneakers.iter().filter(|s| {
            if let Some(term) = &term {
                if !matches_term(s, term) {
                    return false;
                }
            }
            if let Some(brand) = filter.brand {
                if s.brand != brand {
                    return false;
                }
            }
            if let Some(category) = filter.category {
                if s.category != category {
                    return false;
                }
            }
            if let Some(condition) = filter.condition {
                if s.condition != condition {
                    return false;
                }
            }
            true
        }))
    }

    /// Limited or high-priced sneakers, most expensive first
    pub fn featured(&self) -> Vec<Sneaker> {
        let mut featured: Vec<Sneaker> = self
            .sneakers
            .iter()
            .filter(|s| s.is_limited || s.price > FEATURED_PRICE_THRESHOLD)
            .cloned()
            .collect();

        featured.sort_by(|a, b| b.price.total_cmp(&a.price));
        featured.truncate(FEATURED_LIMIT);
        featured
    }

    /// The `count` most recently added sneakers
    pub fn recent(&self, count: usize) -> Vec<Sneaker> {
        let mut recent = self.list_all();
        recent.truncate(count);
        recent
    }

    pub fn overview(&self, recent_count: usize) -> CatalogOverview {
        CatalogOverview {
            featured: self.featured(),
            recent: self.recent(recent_count),
            total: self.len(),
        }
    }
}

// `term` is already lowercased
fn matches_term(sneaker: &Sneaker, term: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(term);

    contains(&sneaker.model)
        || contains(&sneaker.colorway)
        || contains(sneaker.brand.display_name())
        || contains(&format!("{:?}", sneaker.brand))
        || sneaker.description.as_deref().is_some_and(contains)
}

// Stable sort keeps insertion order among equal dates.
fn newest_first<'a>(sneakers: impl Iterator<Item = &'a Sneaker>) -> Vec<Sneaker> {
    let mut sorted: Vec<Sneaker> = sneakers.cloned().collect();
    sorted.sort_by(|a, b| b.added_date.cmp(&a.added_date));
    sorted
}
