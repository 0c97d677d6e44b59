use super::errors::{ApiError, PageError};
use super::render;
use crate::config::{ServerArgs, UPLOAD_FIELD};
use crate::document::Document;
use crate::stats::{Analysis, Analyzer, Report};
use axum::extract::rejection::QueryRejection;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, Query, State};
use axum::response::{Html, Redirect};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::time::Duration;

/// Immutable configuration cloned into every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub max_upload_bytes: usize,
    pub static_dir: PathBuf,
    pub request_timeout: Duration,
}

impl From<&ServerArgs> for AppState {
    fn from(args: &ServerArgs) -> Self {
        AppState {
            analyzer: args.analysis.analyzer(),
            max_upload_bytes: args.max_upload_bytes,
            static_dir: args.static_dir.clone(),
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TermsParams {
    pub limit: Option<usize>,
}

pub async fn index() -> Html<String> {
    Html(render::index_page())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// The upload endpoint only accepts form posts; browsers landing here go home.
pub async fn upload_redirect() -> Redirect {
    Redirect::to("/")
}

pub async fn upload_page(
    State(state): State<AppState>,
    params: Result<Query<TermsParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Html<String>, PageError> {
    let params = params.map_err(ApiError::from)?;
    let multipart = multipart.map_err(ApiError::from)?;
    let (filename, analysis) = handle_upload(&state, params, multipart).await?;
    Ok(Html(render::result_page(&filename, &analysis)))
}

pub async fn upload_terms(
    State(state): State<AppState>,
    params: Result<Query<TermsParams>, QueryRejection>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Report>, ApiError> {
    let (filename, analysis) = handle_upload(&state, params?, multipart?).await?;
    Ok(Json(Report { filename, analysis }))
}

async fn handle_upload(
    state: &AppState,
    Query(params): Query<TermsParams>,
    multipart: Multipart,
) -> Result<(String, Analysis), ApiError> {
    let mut analyzer = state.analyzer;
    if let Some(limit) = params.limit {
        if limit == 0 {
            return Err(ApiError::BadRequest("limit must be at least 1".to_string()));
        }
        analyzer.limit = limit;
    }

    let document = read_upload(multipart).await?;
    tracing::info!(
        filename = %document.filename,
        bytes = document.raw_contents.len(),
        "received upload"
    );
    let filename = document.filename.clone();
    let analysis = analyze(analyzer, document).await?;
    tracing::info!(
        filename = %filename,
        total_tokens = analysis.total_tokens,
        distinct_terms = analysis.distinct_terms,
        "analysis complete"
    );
    Ok((filename, analysis))
}

async fn read_upload(mut multipart: Multipart) -> Result<Document, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await?;
        return Ok(Document::new(filename, bytes.to_vec()));
    }
    Err(ApiError::BadRequest(format!(
        "missing multipart field '{}'",
        UPLOAD_FIELD
    )))
}

// Scoring is CPU-bound and sized by the upload, so it runs off the async workers.
async fn analyze(analyzer: Analyzer, document: Document) -> Result<Analysis, ApiError> {
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&document.raw_contents))
        .await
        .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))??;
    Ok(analysis)
}
