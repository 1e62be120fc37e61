//! Multipart collection and upload validation for `POST /analyse`.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const ALLOWED_EXTENSION: &str = "pdf";

pub const NO_FILE_MESSAGE: &str = "No file was uploaded. Please select a PDF resume.";
pub const EMPTY_FILENAME_MESSAGE: &str = "No file selected. Please choose a PDF file.";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Only PDF files are accepted.";

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// The fields of the analysis form.
#[derive(Debug, Default)]
pub struct AnalyseForm {
    pub resume: Option<UploadedFile>,
    /// Already trimmed.
    pub job_description: String,
}

impl AnalyseForm {
    /// Reads every field of the multipart body. Unknown fields are skipped, and
    /// a `resume` part without a filename is a text field, not an upload.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyseForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("resume") => {
                    let Some(filename) = field.file_name().map(str::to_owned) else {
                        continue;
                    };
                    let data = field.bytes().await?;
                    form.resume = Some(UploadedFile { filename, data });
                }
                Some("job_description") => {
                    form.job_description = field.text().await?.trim().to_string();
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Checks that a PDF was uploaded and hands it back.
pub fn validate_upload(resume: Option<UploadedFile>) -> Result<UploadedFile, AppError> {
    let file = resume.ok_or_else(|| AppError::Validation(NO_FILE_MESSAGE.to_string()))?;

    if file.filename.is_empty() {
        return Err(AppError::Validation(EMPTY_FILENAME_MESSAGE.to_string()));
    }
    if !allowed_file(&file.filename) {
        return Err(AppError::Validation(INVALID_TYPE_MESSAGE.to_string()));
    }

    Ok(file)
}

/// True when the text after the last `.` is `pdf`, ignoring case.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
}
