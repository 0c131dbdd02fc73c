//! Sneaker Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{SneakerError, SneakerResult};
use crate::models::{Sneaker, SneakerFilter, SneakerId, SneakerInput};
use crate::repository::SneakerRepository;
use crate::store::CatalogOverview;

/// Default size of the "recently added" list
pub const DEFAULT_RECENT_COUNT: usize = 6;

/// Sneaker service providing business logic operations
///
/// Input is validated here; the repository and store below trust what they
/// receive.
pub struct SneakerService<R: SneakerRepository> {
    repository: Arc<R>,
}

impl<R: SneakerRepository> SneakerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List the whole catalog, or search it when any filter is set
    #[instrument(skip(self))]
    pub async fn list_sneakers(&self, filter: SneakerFilter) -> SneakerResult<Vec<Sneaker>> {
        if filter.is_empty() {
            self.repository.list().await
        } else {
            self.repository.search(filter).await
        }
    }

    #[instrument(skip(self))]
    pub async fn get_sneaker(&self, id: SneakerId) -> SneakerResult<Sneaker> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(SneakerError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(model = %input.model))]
    pub async fn create_sneaker(&self, input: SneakerInput) -> SneakerResult<Sneaker> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace every field except the id and added date.
    ///
    /// The store ignores updates for unknown ids; that case is reported as
    /// `NotFound` here.
    #[instrument(skip(self, input))]
    pub async fn update_sneaker(&self, id: SneakerId, input: SneakerInput) -> SneakerResult<Sneaker> {
        input.validate()?;

        // added_date is overwritten by the store with the stored value
        let sneaker = input.into_sneaker(id, chrono::Utc::now());
        self.repository
            .update(sneaker)
            .await?
            .ok_or(SneakerError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete_sneaker(&self, id: SneakerId) -> SneakerResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(SneakerError::NotFound(id))
        }
    }

    #[instrument(skip(self))]
    pub async fn featured_sneakers(&self) -> SneakerResult<Vec<Sneaker>> {
        self.repository.featured().await
    }

    #[instrument(skip(self))]
    pub async fn recent_sneakers(&self, count: usize) -> SneakerResult<Vec<Sneaker>> {
        self.repository.recent(count).await
    }

    #[instrument(skip(self))]
    pub async fn next_id(&self) -> SneakerResult<SneakerId> {
        self.repository.next_id().await
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> SneakerResult<usize> {
        self.repository.count().await
    }

    #[instrument(skip(self))]
    pub async fn overview(&self, recent_count: usize) -> SneakerResult<CatalogOverview> {
        self.repository.overview(recent_count).await
    }
}

impl<R: SneakerRepository> Clone for SneakerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Brand, Category, Condition};
    use crate::repository::MockSneakerRepository;
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;

    fn valid_input() -> SneakerInput {
        SneakerInput {
            brand: Brand::Asics,
            model: "Gel-Lyte III".to_string(),
            colorway: "Salmon Toe".to_string(),
            size: 9.5,
            price: 160.0,
            condition: Condition::NearMint,
            category: Category::Running,
            release_date: NaiveDate::from_ymd_opt(2013, 4, 6).unwrap(),
            image_url: None,
            description: None,
            is_limited: true,
            stock_quantity: Some(1),
        }
    }

    #[tokio::test]
    async fn test_list_without_filter_lists_all() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));
        mock_repo.expect_search().never();

        let service = SneakerService::new(mock_repo);
        let sneakers = service.list_sneakers(SneakerFilter::default()).await.unwrap();

        assert!(sneakers.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_filter_searches() {
        let filter = SneakerFilter {
            brand: Some(Brand::Vans),
            ..Default::default()
        };

        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_list().never();
        mock_repo
            .expect_search()
            .with(eq(filter.clone()))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = SneakerService::new(mock_repo);
        service.list_sneakers(filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_term_counts_as_no_filter() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_list().times(1).returning(|| Ok(vec![]));
        mock_repo.expect_search().never();

        let service = SneakerService::new(mock_repo);
        let filter = SneakerFilter {
            q: Some("   ".to_string()),
            ..Default::default()
        };
        service.list_sneakers(filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_missing_sneaker_is_not_found() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(12))
            .returning(|_| Ok(None));

        let service = SneakerService::new(mock_repo);
        let err = service.get_sneaker(12).await.unwrap_err();

        assert!(matches!(err, SneakerError::NotFound(12)));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_before_repository() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_create().never();

        let service = SneakerService::new(mock_repo);
        let mut input = valid_input();
        input.price = 10_000.0;

        let err = service.create_sneaker(input).await.unwrap_err();
        assert!(matches!(err, SneakerError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_valid_input() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(input.into_sneaker(9, Utc::now())));

        let service = SneakerService::new(mock_repo);
        let sneaker = service.create_sneaker(valid_input()).await.unwrap();

        assert_eq!(sneaker.id, 9);
        assert_eq!(sneaker.model, "Gel-Lyte III");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_update().times(1).returning(|_| Ok(None));

        let service = SneakerService::new(mock_repo);
        let err = service.update_sneaker(40, valid_input()).await.unwrap_err();

        assert!(matches!(err, SneakerError::NotFound(40)));
    }

    #[tokio::test]
    async fn test_update_targets_path_id() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo
            .expect_update()
            .withf(|sneaker| sneaker.id == 3)
            .times(1)
            .returning(|sneaker| Ok(Some(sneaker)));

        let service = SneakerService::new(mock_repo);
        let updated = service.update_sneaker(3, valid_input()).await.unwrap();

        assert_eq!(updated.id, 3);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo.expect_delete().with(eq(5)).returning(|_| Ok(false));

        let service = SneakerService::new(mock_repo);
        assert!(matches!(
            service.delete_sneaker(5).await,
            Err(SneakerError::NotFound(5))
        ));
    }

    #[tokio::test]
    async fn test_overview_is_a_single_repository_read() {
        let mut mock_repo = MockSneakerRepository::new();
        mock_repo
            .expect_overview()
            .with(eq(DEFAULT_RECENT_COUNT))
            .times(1)
            .returning(|_| {
                Ok(CatalogOverview {
                    featured: vec![],
                    recent: vec![],
                    total: 8,
                })
            });
        mock_repo.expect_featured().never();
        mock_repo.expect_recent().never();
        mock_repo.expect_count().never();

        let service = SneakerService::new(mock_repo);
        let overview = service.overview(DEFAULT_RECENT_COUNT).await.unwrap();

        assert_eq!(overview.total, 8);
        assert!(overview.featured.is_empty());
    }
}
