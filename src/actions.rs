//! Command Handlers
//!
//! User-triggered operations against the drawing API. Validation happens
//! before any request is made; every failure maps to one generic notice.

use thiserror::Error;

use crate::commands::{AdminApi, ApiError};
use crate::models::{Customer, Drawing, PdfFile};

/// A failed user action. `Display` is the notice shown to the user; the
/// underlying `ApiError` only goes to the console.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please enter a customer name")]
    EmptyCustomerName,
    #[error("Please select a PDF")]
    NoFileSelected,
    #[error("Error adding customer")]
    AddCustomer(#[source] ApiError),
    #[error("Error uploading drawing")]
    UploadDrawing(#[source] ApiError),
}

impl ActionError {
    /// Request-level cause, if the action got as far as the network
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ActionError::AddCustomer(e) | ActionError::UploadDrawing(e) => Some(e),
            _ => None,
        }
    }
}

/// Create a customer from the name input. Blank names never reach the API.
pub async fn add_customer<A: AdminApi>(api: &A, name: &str) -> Result<Customer, ActionError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ActionError::EmptyCustomerName);
    }
    api.create_customer(name).await.map_err(ActionError::AddCustomer)
}

/// Upload the selected PDF under `drawing_no`
pub async fn upload_drawing<A: AdminApi>(
    api: &A,
    file: Option<&PdfFile>,
    drawing_no: &str,
) -> Result<Drawing, ActionError> {
    let file = file.ok_or(ActionError::NoFileSelected)?;
    api.upload_drawing(file, drawing_no)
        .await
        .map_err(ActionError::UploadDrawing)
}

pub fn customer_added_notice(customer: &Customer) -> String {
    format!("Customer Added: {}", customer.name)
}

pub const DRAWING_UPLOADED_NOTICE: &str = "Drawing uploaded successfully!";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every call; fails all requests when `fail` is set
    #[derive(Default)]
    struct RecordingApi {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl RecordingApi {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.fail { Err(ApiError::Status(500)) } else { Ok(()) }
        }
    }

    impl AdminApi for RecordingApi {
        async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
            self.record("list_customers".into())?;
            Ok(vec![])
        }

        async fn create_customer(&self, name: &str) -> Result<Customer, ApiError> {
            self.record(format!("create_customer:{}", name))?;
            Ok(Customer { id: "c1".into(), name: name.into() })
        }

        async fn list_drawings(&self) -> Result<Vec<Drawing>, ApiError> {
            self.record("list_drawings".into())?;
            Ok(vec![])
        }

        async fn upload_drawing(&self, file: &PdfFile, drawing_no: &str) -> Result<Drawing, ApiError> {
            self.record(format!("upload_drawing:{}:{}", file.name, drawing_no))?;
            Ok(Drawing {
                id: "d1".into(),
                drawing_no: drawing_no.into(),
                file_path: format!("uploads/{}", file.name),
                created_at: Utc.with_ymd_and_hms(2024, 6, 4, 9, 0, 0).unwrap(),
            })
        }
    }

    fn pdf(name: &str) -> PdfFile {
        PdfFile { name: name.to_string(), bytes: b"%PDF-1.7".to_vec() }
    }

    #[test]
    fn test_blank_customer_name_sends_nothing() {
        let api = RecordingApi::default();
        for name in ["", "   ", "\t\n"] {
            let result = block_on(add_customer(&api, name));
            assert!(matches!(result, Err(ActionError::EmptyCustomerName)));
        }
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_add_customer_returns_created_record() {
        let api = RecordingApi::default();
        let customer = block_on(add_customer(&api, "  Acme Tooling ")).unwrap();
        assert_eq!(customer.id, "c1");
        assert_eq!(customer.name, "Acme Tooling");
        assert_eq!(api.calls(), vec!["create_customer:Acme Tooling"]);
        assert_eq!(customer_added_notice(&customer), "Customer Added: Acme Tooling");
    }

    #[test]
    fn test_add_customer_failure_is_generic_notice() {
        let api = RecordingApi::failing();
        let err = block_on(add_customer(&api, "Acme")).unwrap_err();
        assert_eq!(err.to_string(), "Error adding customer");
        assert!(matches!(err.api_error(), Some(ApiError::Status(500))));
    }

    #[test]
    fn test_upload_without_file_sends_nothing() {
        let api = RecordingApi::default();
        let err = block_on(upload_drawing(&api, None, "DWG-1")).unwrap_err();
        assert!(matches!(err, ActionError::NoFileSelected));
        assert_eq!(err.to_string(), "Please select a PDF");
        assert!(err.api_error().is_none());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_upload_sends_file_and_drawing_no() {
        let api = RecordingApi::default();
        let file = pdf("A.123.pdf");
        let drawing = block_on(upload_drawing(&api, Some(&file), "A.123")).unwrap();
        assert_eq!(drawing.drawing_no, "A.123");
        assert_eq!(api.calls(), vec!["upload_drawing:A.123.pdf:A.123"]);
    }

    #[test]
    fn test_upload_failure_is_generic_notice() {
        let api = RecordingApi::failing();
        let file = pdf("A123.pdf");
        let err = block_on(upload_drawing(&api, Some(&file), "A123")).unwrap_err();
        assert_eq!(err.to_string(), "Error uploading drawing");
    }
}
