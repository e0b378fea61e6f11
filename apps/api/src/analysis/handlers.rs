use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::analysis::pipeline::{AnalysisError, AnalysisReport, Document};
use crate::errors::AppError;
use crate::profile::catalog::{RoleProfile, SkillCategory};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RolesResponse {
    pub roles: Vec<RoleProfile>,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub categories: BTreeMap<SkillCategory, Vec<String>>,
    pub total_terms: usize,
}

/// POST /api/v1/analyze
///
/// Multipart fields: `file` (the PDF) and `role` (role name, optional).
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut role = String::new();
    let mut upload: Option<Document> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "role" => {
                role = field.text().await.map_err(multipart_error)?;
            }
            "file" => {
                let filename = field.file_name().map(str::to_string);
                let bytes: Bytes = field.bytes().await.map_err(multipart_error)?;
                upload = Some(Document { bytes, filename });
            }
            _ => {}
        }
    }

    let document =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;
    if document.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    match state.analyzer.analyze(document, &role).await {
        Ok(report) => Ok(Json(report)),
        Err(AnalysisError::NoText) => Err(AppError::Unparseable(
            "Could not extract text from the document. It may be scanned, encrypted or corrupted."
                .to_string(),
        )),
    }
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.catalog.roles().to_vec(),
    })
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    let categories = state.catalog.categories().clone();
    let total_terms = categories.values().map(Vec::len).sum();
    Json(CatalogResponse {
        categories,
        total_terms,
    })
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Malformed multipart body: {}", e.body_text()))
    }
}
