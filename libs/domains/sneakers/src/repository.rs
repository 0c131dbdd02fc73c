use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::SneakerResult;
use crate::models::{Sneaker, SneakerFilter, SneakerId, SneakerInput};
use crate::store::{CatalogOverview, CatalogStore};

/// Repository trait for Sneaker persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SneakerRepository: Send + Sync {
    /// All sneakers, most recently added first
    async fn list(&self) -> SneakerResult<Vec<Sneaker>>;

    /// Get a sneaker by ID
    async fn get_by_id(&self, id: SneakerId) -> SneakerResult<Option<Sneaker>>;

    /// Add a sneaker; the repository assigns id and added date
    async fn create(&self, input: SneakerInput) -> SneakerResult<Sneaker>;

    /// Replace a sneaker, keeping its added date. `None` when the id is unknown.
    async fn update(&self, sneaker: Sneaker) -> SneakerResult<Option<Sneaker>>;

    /// Delete a sneaker by ID, returning whether anything was removed
    async fn delete(&self, id: SneakerId) -> SneakerResult<bool>;

    /// Sneakers matching a filter, most recently added first
    async fn search(&self, filter: SneakerFilter) -> SneakerResult<Vec<Sneaker>>;

    /// Featured set
    async fn featured(&self) -> SneakerResult<Vec<Sneaker>>;

    /// The `count` most recently added sneakers
    async fn recent(&self, count: usize) -> SneakerResult<Vec<Sneaker>>;

    /// Id the next created sneaker will receive
    async fn next_id(&self) -> SneakerResult<SneakerId>;

    /// Number of sneakers in the catalog
    async fn count(&self) -> SneakerResult<usize>;

    /// Featured, recent and total read together
    async fn overview(&self, recent_count: usize) -> SneakerResult<CatalogOverview>;
}

/// In-memory implementation of SneakerRepository
///
/// Every operation takes the lock exactly once, so compound steps such as
/// "pick next id, then insert" cannot interleave.
#[derive(Debug, Default, Clone)]
pub struct InMemorySneakerRepository {
    store: Arc<RwLock<CatalogStore>>,
}

impl InMemorySneakerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Repository preloaded with the sample collection
    pub fn seeded() -> Self {
        Self::with_store(CatalogStore::seeded())
    }
}

#[async_trait]
impl SneakerRepository for InMemorySneakerRepository {
    async fn list(&self) -> SneakerResult<Vec<Sneaker>> {
        Ok(self.store.read().await.list_all())
    }

    async fn get_by_id(&self, id: SneakerId) -> SneakerResult<Option<Sneaker>> {
        Ok(self.store.read().await.get_by_id(id).cloned())
    }

    async fn create(&self, input: SneakerInput) -> SneakerResult<Sneaker> {
        let sneaker = self.store.write().await.add(input);

        tracing::info!(sneaker_id = sneaker.id, "Created sneaker");
        Ok(sneaker)
    }

    async fn update(&self, sneaker: Sneaker) -> SneakerResult<Option<Sneaker>> {
        let id = sneaker.id;
        let updated = self.store.write().await.update(sneaker);

        match &updated {
            Some(_) => tracing::info!(sneaker_id = id, "Updated sneaker"),
            None => tracing::debug!(sneaker_id = id, "Update skipped, sneaker not in catalog"),
        }
        Ok(updated)
    }

    async fn delete(&self, id: SneakerId) -> SneakerResult<bool> {
        let removed = self.store.write().await.delete(id).is_some();

        if removed {
            tracing::info!(sneaker_id = id, "Deleted sneaker");
        }
        Ok(removed)
    }

    async fn search(&self, filter: SneakerFilter) -> SneakerResult<Vec<Sneaker>> {
        Ok(self.store.read().await.search(&filter))
    }

    async fn featured(&self) -> SneakerResult<Vec<Sneaker>> {
        Ok(self.store.read().await.featured())
    }

    async fn recent(&self, count: usize) -> SneakerResult<Vec<Sneaker>> {
        Ok(self.store.read().await.recent(count))
    }

    async fn next_id(&self) -> SneakerResult<SneakerId> {
        Ok(self.store.read().await.next_id())
    }

    async fn count(&self) -> SneakerResult<usize> {
        Ok(self.store.read().await.len())
    }

    async fn overview(&self, recent_count: usize) -> SneakerResult<CatalogOverview> {
        Ok(self.store.read().await.overview(recent_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Brand, Category, Condition};
    use chrono::NaiveDate;

    fn input(model: &str) -> SneakerInput {
        SneakerInput {
            brand: Brand::Puma,
            model: model.to_string(),
            colorway: "Red".to_string(),
            size: 10.0,
            price: 95.0,
            condition: Condition::NearMint,
            category: Category::Retro,
            release_date: NaiveDate::from_ymd_opt(2019, 6, 1).unwrap(),
            image_url: None,
            description: None,
            is_limited: false,
            stock_quantity: Some(4),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemorySneakerRepository::new();

        let first = repo.create(input("Suede")).await.unwrap();
        let second = repo.create(input("Clyde")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.next_id().await.unwrap(), 3);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = InMemorySneakerRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("Model {}", i))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemorySneakerRepository::seeded();
        let ghost = input("Ghost").into_sneaker(77, chrono::Utc::now());

        assert!(repo.update(ghost).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let repo = InMemorySneakerRepository::seeded();

        assert!(repo.delete(2).await.unwrap());
        assert!(!repo.delete(2).await.unwrap());
        assert!(repo.get_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overview_agrees_with_concurrent_writes() {
        let repo = InMemorySneakerRepository::new();

        let writers: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("Model {}", i))).await })
            })
            .collect();

        for _ in 0..16 {
            let overview = repo.overview(usize::MAX).await.unwrap();
            assert_eq!(overview.recent.len(), overview.total);
            tokio::task::yield_now().await;
        }

        for writer in writers {
            writer.await.unwrap().unwrap();
        }
        let overview = repo.overview(6).await.unwrap();
        assert_eq!(overview.total, 16);
        assert_eq!(overview.recent.len(), 6);
    }
}
