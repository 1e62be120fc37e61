//! Axum route handlers for the upload page.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use tracing::{info, warn};

use crate::analysis::sections::parse_analysis_sections;
use crate::analysis::upload::{validate_upload, AnalyseForm, UploadedFile};
use crate::errors::AppError;
use crate::state::AppState;
use crate::views::IndexPage;

/// GET /
pub async fn handle_index() -> Html<String> {
    IndexPage::empty().render_html()
}

/// POST /analyse
///
/// Validate upload → extract text → model analysis → parse sections → render.
pub async fn handle_analyse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let form = AnalyseForm::from_multipart(multipart).await?;

    let UploadedFile { filename, data } = match validate_upload(form.resume) {
        Ok(file) => file,
        Err(e) => {
            warn!("Rejected upload: {e}");
            return Err(e);
        }
    };
    info!(%filename, bytes = data.len(), "Received resume upload");

    // Text extraction is CPU-bound; the buffer is moved in and freed there.
    let extractor = state.extractor.clone();
    let resume_text = tokio::task::spawn_blocking(move || extractor.extract(data))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in text extraction: {e}"))
        })??;

    let raw_analysis = state
        .analyst
        .analyse(&resume_text, &form.job_description)
        .await?;

    let sections = parse_analysis_sections(&raw_analysis);
    info!(sections = sections.len(), "Analysis complete");

    Ok(IndexPage::with_sections(&sections).render_html())
}
