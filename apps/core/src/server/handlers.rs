//! Request handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use futures::future::join_all;
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::AppState;
use crate::database;
use crate::error::AppError;
use crate::models::{AnalyzeRequest, SearchParams, StoredAnalysis};

pub async fn root() -> Json<Value> {
    Json(json!({
        "ok": true,
        "message": "Knowledge extractor is running. POST /analyze to analyze text, GET /search to query.",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Analyze one text or a batch and persist every result.
///
/// A batch is all-or-nothing: the records are stored in a single transaction
/// and returned in input order.
#[instrument(skip_all)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Vec<StoredAnalysis>>, AppError> {
    let Json(req) = payload?;
    let inputs = req.inputs()?;
    let title = req.title.as_deref();

    let records = join_all(
        inputs
            .iter()
            .map(|text| state.analyzer.analyze(text, title)),
    )
    .await
    .into_iter()
    .collect::<Result<Vec<_>, _>>()?;

    let mut tx = state.pool.begin().await?;
    let mut stored = Vec::with_capacity(records.len());
    for record in &records {
        stored.push(database::insert_analysis(&mut *tx, record).await?);
    }
    tx.commit().await?;

    info!("Stored {} analyses", stored.len());
    Ok(Json(stored))
}

#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<StoredAnalysis>>, AppError> {
    let results =
        database::search_analyses(&state.pool, params.topic(), params.keyword()).await?;
    Ok(Json(results))
}

pub async fn get_analysis(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StoredAnalysis>, AppError> {
    match database::get_analysis(&state.pool, id).await {
        Ok(analysis) => Ok(Json(analysis)),
        Err(sqlx::Error::RowNotFound) => {
            Err(AppError::NotFound(format!("Analysis {} not found", id)))
        }
        Err(e) => Err(e.into()),
    }
}
