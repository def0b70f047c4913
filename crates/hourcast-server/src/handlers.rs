use crate::error::ServerError;
use crate::negotiate::{format_from_headers, single_zip};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use hourcast_weather::{normalize, render, Format};
use tracing::instrument;

/// `GET /?zip=<code>`
#[instrument(skip(state, headers))]
pub async fn report_by_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ServerError> {
    let zip = single_zip(&params)?;
    report(&state, zip, format_from_headers(&headers)).await
}

/// `GET /<code>`
#[instrument(skip(state, headers))]
pub async fn report_by_path(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(zip): Path<String>,
) -> Result<Response, ServerError> {
    report(&state, &zip, format_from_headers(&headers)).await
}

pub async fn health_check() -> &'static str {
    "ok"
}

async fn report(state: &AppState, zip: &str, format: Format) -> Result<Response, ServerError> {
    let raw = state.source.forecast(zip).await?;
    let forecast = normalize(&raw)?;

    tracing::info!(
        "Rendering {:?} report for {} ({} hours, {} alerts)",
        format,
        zip,
        forecast.hourly.len(),
        forecast.alerts.len()
    );

    Ok((
        [(header::CONTENT_TYPE, format.content_type())],
        render(&forecast, format),
    )
        .into_response())
}
