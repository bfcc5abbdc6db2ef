//! Drawing Commands
//!
//! Bindings for `/drawings`, including the multipart PDF upload.

use reqwest::multipart::{Form, Part};

use crate::models::{Drawing, PdfFile};
use super::{ApiError, HttpApi};

const DRAWINGS: &str = "drawings";
const PDF_MIME: &str = "application/pdf";

/// All drawings, most recent first (server-side order)
pub async fn list_drawings(api: &HttpApi) -> Result<Vec<Drawing>, ApiError> {
    api.fetch_json(api.get(DRAWINGS)).await
}

pub async fn upload_drawing(api: &HttpApi, file: &PdfFile, drawing_no: &str) -> Result<Drawing, ApiError> {
    let form = upload_form(file, drawing_no)?;
    api.fetch_json(api.post(DRAWINGS).multipart(form)).await
}

/// Multipart body: `file` (the PDF) and `drawingNo`
fn upload_form(file: &PdfFile, drawing_no: &str) -> Result<Form, ApiError> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(PDF_MIME)?;
    Ok(Form::new()
        .part("file", part)
        .text("drawingNo", drawing_no.to_string()))
}
