use axum::{
    Json,
    extract::{
        OriginalUri, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
};
use std::sync::Arc;

use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/exchange
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuoteResponse>>, ApiError> {
    let quotes = state.service.list_all().await?;
    Ok(Json(quotes.into_iter().map(QuoteResponse::from).collect()))
}

/// POST /api/exchange
///
/// Responds 201 with a `Location` pointing at `<request path>/<id>`.
pub async fn create_quote(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<QuoteResponse>), ApiError> {
    let Json(request) = payload?;
    let quote = state.service.create(request.into()).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), quote.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(quote.into()),
    ))
}

/// GET /api/exchange/profile/search?profile=LOW&date=2025-05-09
pub async fn profile_search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ProfileSearchParams>, QueryRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;
    let result = state.service.profile(query).await?;
    Ok(Json(result.into()))
}
