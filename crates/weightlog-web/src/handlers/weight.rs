//! Weight page handlers.
//!
//! Every handler ends in one of two ways: a rendered page with a status code,
//! or a redirect. Failures re-render the page the user came from with the
//! error message; the status code follows the error kind.

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, error, warn};

use weightlog_core::error::AppError;
use weightlog_core::types::WeightId;
use weightlog_entity::weight::Weight;

use crate::dto::WeightForm;
use crate::error::{error_response, status_for};
use crate::extractors::parse_weight_id;
use crate::state::AppState;
use crate::views::{View, ViewModel};

const DUPLICATE_DATE: &str = "Weight already in the database";

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    match state.weights.find_all().await {
        Ok(weights) => {
            debug!(count = weights.len(), "Listing weights");
            render(&state, View::Index, &ViewModel::list(weights), StatusCode::OK)
        }
        Err(e) => {
            error!(error = %e, "Failed to list weights");
            render(
                &state,
                View::Index,
                &ViewModel::failure(e.message),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// GET /weight/{id}
pub async fn detail(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    match load(&state, &raw_id).await {
        Ok(weight) => render(&state, View::Detail, &ViewModel::record(weight), StatusCode::OK),
        Err(response) => response,
    }
}

/// GET /weight/new
pub async fn new_form(State(state): State<AppState>) -> Response {
    render(
        &state,
        View::New,
        &ViewModel::form(None, WeightForm::default()),
        StatusCode::OK,
    )
}

/// POST /weight/insert
pub async fn insert(
    State(state): State<AppState>,
    body: Result<Form<WeightForm>, FormRejection>,
) -> Response {
    let form = match read_form(body) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let candidate = match form.parse().and_then(|c| c.validate().map(|()| c)) {
        Ok(candidate) => candidate,
        Err(e) => return form_failure(&state, View::New, None, form, e),
    };

    match state.weights.find_by_date(&candidate.date).await {
        Ok(existing) => {
            warn!(date = %candidate.date, existing_id = %existing.id, "Duplicate weight date");
            return form_failure(
                &state,
                View::New,
                None,
                form,
                AppError::conflict(DUPLICATE_DATE),
            );
        }
        Err(e) if e.is_not_found() => {}
        Err(e) => return form_failure(&state, View::New, None, form, e),
    }

    match state.weights.save(&candidate).await {
        Ok(weight) => {
            debug!(id = %weight.id, date = %weight.date, "Created weight");
            redirect(&format!("/weight/{}", weight.id), StatusCode::MOVED_PERMANENTLY)
        }
        Err(e) => form_failure(&state, View::New, None, form, e),
    }
}

/// GET /weight/{id}/edit
pub async fn edit_form(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    match load(&state, &raw_id).await {
        Ok(weight) => render(&state, View::Edit, &ViewModel::record(weight), StatusCode::OK),
        Err(response) => response,
    }
}

/// POST /weight/{id}/update
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Form<WeightForm>, FormRejection>,
) -> Response {
    let id = match parse_weight_id(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Rejected weight update");
            return redirect("/", StatusCode::BAD_REQUEST);
        }
    };
    let form = match read_form(body) {
        Ok(form) => form,
        Err(response) => return response,
    };

    let candidate = match form.parse().and_then(|c| c.validate().map(|()| c)) {
        Ok(candidate) => candidate,
        Err(e) => return form_failure(&state, View::Edit, Some(id), form, e),
    };

    match state.weights.update(id, &candidate).await {
        Ok(weight) => {
            debug!(id = %weight.id, date = %weight.date, "Updated weight");
            redirect(&format!("/weight/{}", weight.id), StatusCode::MOVED_PERMANENTLY)
        }
        Err(e) => form_failure(&state, View::Edit, Some(id), form, e),
    }
}

/// POST /weight/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_weight_id(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "Rejected weight delete");
            return redirect("/", StatusCode::BAD_REQUEST);
        }
    };

    match state.weights.delete(id).await {
        Ok(()) => {
            debug!(%id, "Deleted weight");
            redirect("/", StatusCode::MOVED_PERMANENTLY)
        }
        Err(e) if e.is_not_found() => {
            warn!(%id, "Weight to delete not found");
            redirect("/", StatusCode::NOT_FOUND)
        }
        Err(e) => storage_failure(&state, e),
    }
}

/// Unwrap a submitted form.
///
/// A body that is not a readable form counts as an empty one, so the usual
/// field errors apply. Only an oversized body is refused outright.
fn read_form(body: Result<Form<WeightForm>, FormRejection>) -> Result<WeightForm, Response> {
    match body {
        Ok(Form(form)) => Ok(form),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!(error = %rejection.body_text(), "Weight form too large");
            Err(rejection.into_response())
        }
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Unreadable weight form");
            Ok(WeightForm::default())
        }
    }
}

/// Resolve the `{id}` segment to a stored record.
///
/// A malformed id redirects home with 400, a missing record with 404.
async fn load(state: &AppState, raw_id: &str) -> Result<Weight, Response> {
    let id: WeightId = parse_weight_id(raw_id).map_err(|e| {
        warn!(error = %e, "Rejected weight id");
        redirect("/", StatusCode::BAD_REQUEST)
    })?;

    state.weights.find_by_id(id).await.map_err(|e| {
        if e.is_not_found() {
            warn!(%id, "Weight not found");
            redirect("/", StatusCode::NOT_FOUND)
        } else {
            storage_failure(state, e)
        }
    })
}

/// Re-render a form with the submitted values and the error.
fn form_failure(
    state: &AppState,
    view: View,
    id: Option<WeightId>,
    form: WeightForm,
    err: AppError,
) -> Response {
    let status = status_for(err.kind);
    if status.is_server_error() {
        error!(view = %view, error = %err, "Weight form failed");
    } else {
        warn!(view = %view, kind = %err.kind, error = %err, "Weight form rejected");
    }
    render(
        state,
        view,
        &ViewModel::form(id, form).with_error(err.message),
        status,
    )
}

/// Storage failure outside a form: show it on the list page.
fn storage_failure(state: &AppState, err: AppError) -> Response {
    error!(error = %err, "Weight storage failed");
    render(
        state,
        View::Index,
        &ViewModel::failure(err.message),
        status_for(err.kind),
    )
}

fn render(state: &AppState, view: View, model: &ViewModel, status: StatusCode) -> Response {
    match state.views.render(view, model) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => error_response(e),
    }
}

fn redirect(location: &str, status: StatusCode) -> Response {
    (status, [(header::LOCATION, location.to_string())]).into_response()
}
