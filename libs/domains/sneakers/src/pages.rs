//! Server-rendered HTML pages.
//!
//! Browsing, add/edit forms and delete confirmation. Writes answer with a
//! `303 See Other` back to a page that shows the outcome as a notice.

use axum::{
    Form, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use axum_helpers::IdPath;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{SneakerError, SneakerResult};
use crate::forms::{FormErrors, SneakerForm};
use crate::models::{SneakerFilter, SneakerId, empty_string_as_none};
use crate::repository::SneakerRepository;
use crate::service::SneakerService;
use crate::views::{FormMode, Notice, PageRenderer};

pub struct PageState<R: SneakerRepository> {
    pub service: SneakerService<R>,
    pub renderer: PageRenderer,
}

type SharedState<R> = State<Arc<PageState<R>>>;

/// One-shot notice carried in the query string after a redirect
#[derive(Debug, Default, Deserialize)]
pub struct FlashParams {
    /// Id a previous request could not find
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub missing: Option<SneakerId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub created: Option<SneakerId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub updated: Option<SneakerId>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub deleted: Option<SneakerId>,
    /// Set when an edit form named another id than its URL
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub mismatch: Option<bool>,
}

/// Create the HTML page router
pub fn router<R: SneakerRepository + 'static>(
    service: SneakerService<R>,
    renderer: PageRenderer,
) -> Router {
    let state = Arc::new(PageState { service, renderer });

    Router::new()
        .route("/", get(home::<R>))
        .route("/sneakers", get(index::<R>))
        .route("/sneakers/new", get(new_form::<R>).post(create::<R>))
        .route("/sneakers/{id}", get(details::<R>))
        .route("/sneakers/{id}/edit", get(edit_form::<R>).post(update::<R>))
        .route(
            "/sneakers/{id}/delete",
            get(confirm_delete::<R>).post(delete::<R>),
        )
        .fallback(not_found::<R>)
        .with_state(state)
}

fn missing_redirect(id: SneakerId) -> Response {
    Redirect::to(&format!("/sneakers?missing={}", id)).into_response()
}

// Malformed flash parameters are ignored
fn flash_or_default(flash: Result<Query<FlashParams>, QueryRejection>) -> FlashParams {
    flash.map(|Query(flash)| flash).unwrap_or_default()
}

impl<R: SneakerRepository> PageState<R> {
    /// Turn flash parameters into the notice to show, looking up names of
    /// sneakers that still exist
    async fn notice(&self, flash: &FlashParams) -> SneakerResult<Option<Notice>> {
        if let Some(id) = flash.missing {
            return Ok(Some(Notice::Missing(id)));
        }
        if flash.mismatch == Some(true) {
            return Ok(Some(Notice::IdMismatch));
        }
        if let Some(id) = flash.deleted {
            return Ok(Some(Notice::Deleted(id)));
        }

        let (id, created) = match (flash.created, flash.updated) {
            (Some(id), _) => (id, true),
            (None, Some(id)) => (id, false),
            (None, None) => return Ok(None),
        };
        match self.service.get_sneaker(id).await {
            Ok(sneaker) if created => Ok(Some(Notice::Created(sneaker.full_name()))),
            Ok(sneaker) => Ok(Some(Notice::Updated(sneaker.full_name()))),
            Err(SneakerError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn form_page(
        &self,
        mode: FormMode,
        values: &SneakerForm,
        errors: &FormErrors,
    ) -> SneakerResult<Response> {
        let html = self.renderer.render_form(mode, values, errors)?;
        let status = if errors.is_empty() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };
        Ok((status, Html(html)).into_response())
    }
}

async fn home<R: SneakerRepository>(
    State(state): SharedState<R>,
) -> SneakerResult<Html<String>> {
    let recent_count = state.renderer.settings().recent_count;
    let overview = state.service.overview(recent_count).await?;
    Ok(Html(state.renderer.render_home(&overview)?))
}

async fn index<R: SneakerRepository>(
    State(state): SharedState<R>,
    filter: Result<Query<SneakerFilter>, QueryRejection>,
    flash: Result<Query<FlashParams>, QueryRejection>,
) -> SneakerResult<Html<String>> {
    let (filter, notice) = match filter {
        Ok(Query(filter)) => (filter, state.notice(&flash_or_default(flash)).await?),
        Err(rejection) => {
            tracing::info!(error = %rejection.body_text(), "Ignoring unrecognised search options");
            (SneakerFilter::default(), Some(Notice::InvalidFilter))
        }
    };

    let sneakers = state.service.list_sneakers(filter.clone()).await?;
    Ok(Html(state.renderer.render_index(
        &sneakers,
        &filter,
        notice.as_ref(),
    )?))
}

async fn details<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
    flash: Result<Query<FlashParams>, QueryRejection>,
) -> SneakerResult<Response> {
    let sneaker = match state.service.get_sneaker(id).await {
        Ok(sneaker) => sneaker,
        Err(SneakerError::NotFound(_)) => return Ok(missing_redirect(id)),
        Err(e) => return Err(e),
    };

    let notice = (flash_or_default(flash).updated == Some(id))
        .then(|| Notice::Updated(sneaker.full_name()));
    let html = state.renderer.render_details(&sneaker, notice.as_ref())?;
    Ok(Html(html).into_response())
}

async fn new_form<R: SneakerRepository>(State(state): SharedState<R>) -> SneakerResult<Response> {
    state.form_page(FormMode::New, &SneakerForm::default(), &FormErrors::default())
}

async fn create<R: SneakerRepository>(
    State(state): SharedState<R>,
    Form(form): Form<SneakerForm>,
) -> SneakerResult<Response> {
    let input = match form.parse() {
        Ok(input) => input,
        Err(errors) => return state.form_page(FormMode::New, &form, &errors),
    };

    match state.service.create_sneaker(input).await {
        Ok(sneaker) => {
            Ok(Redirect::to(&format!("/sneakers?created={}", sneaker.id)).into_response())
        }
        Err(SneakerError::Validation(errors)) => {
            state.form_page(FormMode::New, &form, &FormErrors::from(&errors))
        }
        Err(e) => Err(e),
    }
}

async fn edit_form<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<Response> {
    match state.service.get_sneaker(id).await {
        Ok(sneaker) => state.form_page(
            FormMode::Edit(id),
            &SneakerForm::from(&sneaker),
            &FormErrors::default(),
        ),
        Err(SneakerError::NotFound(_)) => Ok(missing_redirect(id)),
        Err(e) => Err(e),
    }
}

async fn update<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
    Form(form): Form<SneakerForm>,
) -> SneakerResult<Response> {
    if form.sneaker_id() != Some(id) {
        tracing::warn!(sneaker_id = id, form_id = %form.id, "Edit form posted for another id");
        return Ok(Redirect::to("/sneakers?mismatch=true").into_response());
    }

    let input = match form.parse() {
        Ok(input) => input,
        Err(errors) => return state.form_page(FormMode::Edit(id), &form, &errors),
    };

    match state.service.update_sneaker(id, input).await {
        Ok(_) => Ok(Redirect::to(&format!("/sneakers/{}?updated={}", id, id)).into_response()),
        Err(SneakerError::NotFound(_)) => Ok(missing_redirect(id)),
        Err(SneakerError::Validation(errors)) => {
            state.form_page(FormMode::Edit(id), &form, &FormErrors::from(&errors))
        }
        Err(e) => Err(e),
    }
}

async fn confirm_delete<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<Response> {
    match state.service.get_sneaker(id).await {
        Ok(sneaker) => Ok(Html(state.renderer.render_delete(&sneaker)?).into_response()),
        Err(SneakerError::NotFound(_)) => Ok(missing_redirect(id)),
        Err(e) => Err(e),
    }
}

async fn delete<R: SneakerRepository>(
    State(state): SharedState<R>,
    IdPath(id): IdPath,
) -> SneakerResult<Response> {
    match state.service.delete_sneaker(id).await {
        Ok(()) => Ok(Redirect::to(&format!("/sneakers?deleted={}", id)).into_response()),
        Err(SneakerError::NotFound(_)) => Ok(missing_redirect(id)),
        Err(e) => Err(e),
    }
}

async fn not_found<R: SneakerRepository>(
    State(state): SharedState<R>,
    uri: Uri,
) -> SneakerResult<Response> {
    let html = state.renderer.render_not_found(uri.path())?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
