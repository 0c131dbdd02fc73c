use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::error::SneakerResult;
use crate::models::{Brand, Category, Condition, Sneaker, SneakerFilter, SneakerId, SneakerInput};
use crate::presentation::{
    PriceTag, PriceTier, SizeConversions, SneakerCard, abbreviation, condition_style,
};
use crate::repository::SneakerRepository;
use crate::service::SneakerService;
use crate::views::DisplaySettings;

/// OpenAPI documentation for the Sneakers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_sneakers,
        create_sneaker,
        featured_sneakers,
        recent_sneakers,
        next_id,
        count_sneakers,
        get_sneaker,
        update_sneaker,
        delete_sneaker,
        display_sneaker,
    ),
    components(
        schemas(
            Sneaker,
            SneakerInput,
            SneakerFilter,
            Brand,
            Category,
            Condition,
            SneakerDisplay,
            ConditionDisplay,
            SizeConversions,
            CountResponse,
            NextIdResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Sneakers", description = "Sneaker catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Shared state for the JSON endpoints
pub struct ApiState<R: SneakerRepository> {
    pub service: SneakerService<R>,
    pub settings: DisplaySettings,
}

type SharedState<R> = State<Arc<ApiState<R>>>;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NextIdResponse {
    pub next_id: SneakerId,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentParams {
    /// How many sneakers to return (defaults to the configured count)
    pub count: Option<usize>,
}

/// Condition styling as shown on badges
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConditionDisplay {
    pub name: String,
    pub abbreviation: String,
    pub badge_class: String,
    pub icon: String,
    pub description: String,
}

/// Display-ready rendition of a sneaker
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SneakerDisplay {
    pub id: SneakerId,
    pub full_name: String,
    pub image_url: String,
    /// Price with currency symbol, e.g. `€180`
    pub price: String,
    /// `Premium price`, `Notable price` or `Affordable price`
    pub price_tier: Option<String>,
    pub condition: ConditionDisplay,
    /// The US size in every sizing system
    pub sizes: SizeConversions,
    /// Catalog card markup
    pub card_html: String,
}

impl SneakerDisplay {
    pub fn new(sneaker: &Sneaker, settings: &DisplaySettings) -> Self {
        let style = condition_style(sneaker.condition);
        let card = SneakerCard {
            currency: settings.currency.clone(),
            ..SneakerCard::default()
        };

        Self {
            id: sneaker.id,
            full_name: sneaker.full_name(),
            image_url: sneaker.display_image_url().to_string(),
            price: PriceTag::new(sneaker.price)
                .with_currency(&settings.currency)
                .text(),
            price_tier: PriceTier::for_amount(sneaker.price).map(|t| t.label().to_string()),
            condition: ConditionDisplay {
                name: sneaker.condition.display_name().to_string(),
                abbreviation: abbreviation(sneaker.condition).to_string(),
                badge_class: style.badge_class.to_string(),
                icon: style.icon.to_string(),
                description: style.description.to_string(),
            },
            sizes: SizeConversions::from_us(sneaker.size),
            card_html: card.render(Some(sneaker)).unwrap_or_default(),
        }
    }
}

/// Create the sneakers router with all JSON endpoints
pub fn router<R: SneakerRepository + 'static>(
    service: SneakerService<R>,
    settings: DisplaySettings,
) -> Router {
    let state = Arc::new(ApiState { service, settings });

    Router::new()
        .route("/", get(list_sneakers).post(create_sneaker))
        .route("/featured", get(featured_sneakers))
        .route("/recent", get(recent_sneakers))
        .route("/next-id", get(next_id))
        .route("/count", get(count_sneakers))
        .route(
            "/{id}",
            get(get_sneaker).put(update_sneaker).delete(delete_sneaker),
        )
        .route("/{id}/display", get(display_sneaker))
        .with_state(state)
}

/// List sneakers, optionally filtered
#[utoipa::path(
    get,
    path = "",
    tag = "Sneakers",
    params(SneakerFilter),
    responses(
        (status = 200, description = "Sneakers, most recently added first", body = Vec<Sneaker>),
        (status = 400, description = "Unknown brand, category or condition", body = axum_helpers::ErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_sneakers<R: SneakerRepository>(
    State(state): SharedState<R>,
    query: Result<Query<SneakerFilter>, QueryRejection>,
) -> SneakerResult<Json<Vec<Sneaker>>> {
    let Query(filter) = query?;
    let sneakers = state.service.list_sneakers(filter).await?;
    Ok(Json(sneakers))
}

/// Add a sneaker to the catalog
#[utoipa::path(
    post,
    path = "",
    tag = "Sneakers",
    request_body = SneakerInput,
    responses(
        (status = 201, description = "Sneaker added", body = Sneaker),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_sneaker<R: SneakerRepository>(
    State(state): SharedState<R>,
    ValidatedJson(input): ValidatedJson<SneakerInput>,
) -> SneakerResult<impl IntoResponse> {
    let sneaker = state.service.create_sneaker(input).await?;
    Ok((StatusCode::CREATED, Json(sneaker)))
}

/// Featured sneakers: limited or high-priced, most expensive first
#[utoipa::path(
    get,
    path = "/featured",
    tag = "Sneakers",
    responses(
        (status = 200, description = "Up to four featured sneakers", body = Vec<Sneaker>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn featured_sneakers<R: SneakerRepository>(
    State(state): SharedState<R>,
) -> SneakerResult<Json<Vec<Sneaker>>> {
    Ok(Json(state.service.featured_sneakers().await?))
}

/// Most recently added sneakers
#[utoipa::path(
    get,
    path = "/recent",
    tag = "Sneakers",
    params(RecentParams),
    responses(
        (status = 200, description = "Recently added sneakers", body = Vec<Sneaker>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn recent_sneakers<R: SneakerRepository>(
    State(state): SharedState<R>,
    Query(params): Query<RecentParams>,
) -> SneakerResult<Json<Vec<Sneaker>>> {
    let count = params.count.unwrap_or(state.settings.recent_count);
    Ok(Json(state.service.recent_sneakers(count).await?))
}

/// Id the next added sneaker will receive
#[utoipa::path(
    get,
    path = "/next-id",
    tag = "Sneakers",
    responses(
        (status = 200, description = "Next id", body = NextIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn next_id<R: SneakerRepository>(
    State(state): SharedState<R>,
) -> SneakerResult<Json<NextIdResponse>> {
    let next_id = state.service.next_id().await?;
    Ok(Json(NextIdResponse { next_id }))
}

/// Number of sneakers in the catalog
#[utoipa::path(
    get,
    path = "/count",
    tag = "Sneakers",
    responses(
        (status = 200, description = "Sneaker count", body = CountResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_sneakers<R: SneakerRepository>(
    State(state): SharedState<R>,
) -> SneakerResult<Json<CountResponse>> {
    let count = state.service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// Get a sneaker by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Sneakers",
    params(
        ("id" = u32, Path, description = "Sneaker ID")
    ),
    responses(
        (status = 200, description = "Sneaker found", body = Sneaker),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_sneaker<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<Json<Sneaker>> {
    Ok(Json(state.service.get_sneaker(id).await?))
}

/// Replace a sneaker; the added date is kept
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Sneakers",
    params(
        ("id" = u32, Path, description = "Sneaker ID")
    ),
    request_body = SneakerInput,
    responses(
        (status = 200, description = "Sneaker updated", body = Sneaker),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_sneaker<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<SneakerInput>,
) -> SneakerResult<Json<Sneaker>> {
    Ok(Json(state.service.update_sneaker(id, input).await?))
}

/// Delete a sneaker
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Sneakers",
    params(
        ("id" = u32, Path, description = "Sneaker ID")
    ),
    responses(
        (status = 204, description = "Sneaker deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_sneaker<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<impl IntoResponse> {
    state.service.delete_sneaker(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Display-ready view of a sneaker
#[utoipa::path(
    get,
    path = "/{id}/display",
    tag = "Sneakers",
    params(
        ("id" = u32, Path, description = "Sneaker ID")
    ),
    responses(
        (status = 200, description = "Formatted sneaker", body = SneakerDisplay),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn display_sneaker<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<Json<SneakerDisplay>> {
    let sneaker = state.service.get_sneaker(id).await?;
    Ok(Json(SneakerDisplay::new(&sneaker, &state.settings)))
}
