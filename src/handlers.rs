use crate::dashboard::build_dashboard;
use crate::errors::AppError;
use crate::models::{DashboardResponse, DateRange, FilterRequest, FilterResponse, RangeQuery};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        Query, State,
    },
    response::{Html, Redirect},
    Form, Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let filter = filter_response(&state).await;
    let page = render_index(&filter).map_err(AppError::internal)?;
    Ok(Html(page))
}

pub async fn get_filter(State(state): State<AppState>) -> Json<FilterResponse> {
    Json(filter_response(&state).await)
}

pub async fn set_filter(
    State(state): State<AppState>,
    payload: Result<Json<FilterRequest>, JsonRejection>,
) -> Result<Json<FilterResponse>, AppError> {
    let Json(payload) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    confirm_filter(&state, payload).await?;
    Ok(Json(filter_response(&state).await))
}

pub async fn submit_filter_form(
    State(state): State<AppState>,
    payload: Result<Form<FilterRequest>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(payload) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    confirm_filter(&state, payload).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DashboardResponse>, AppError> {
    let range = match (query.start, query.end) {
        (Some(start), Some(end)) => DateRange::new(start, end)?,
        (None, None) => state.current_filter().await,
        _ => return Err(AppError::bad_request("start and end must be given together")),
    };

    Ok(Json(build_dashboard(&state.data, range)?))
}

async fn confirm_filter(state: &AppState, payload: FilterRequest) -> Result<DateRange, AppError> {
    match state.apply_filter(payload.start, payload.end).await {
        Ok(range) => {
            info!(start = %range.start, end = %range.end, "date filter applied");
            Ok(range)
        }
        Err(err) => {
            warn!("date filter rejected: {err}");
            Err(err.into())
        }
    }
}

async fn filter_response(state: &AppState) -> FilterResponse {
    FilterResponse::new(state.current_filter().await, state.data.date_bounds())
}
