//! Frontend Models
//!
//! Data structures matching the drawing API's JSON documents.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Record identifier as sent by the API: document stores emit a string
/// `_id`, others a numeric `id`
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<WireId> for String {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Text(s) => s,
            WireId::Signed(n) => n.to_string(),
            WireId::Unsigned(n) => n.to_string(),
        }
    }
}

/// `_id` wins; `id` is the fallback (and may duplicate `_id`)
fn pick_id(underscore: Option<WireId>, plain: Option<WireId>) -> Result<String, String> {
    underscore
        .or(plain)
        .map(String::from)
        .ok_or_else(|| "record has neither `_id` nor `id`".to_string())
}

/// Customer record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireCustomer")]
pub struct Customer {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Deserialize)]
struct WireCustomer {
    #[serde(rename = "_id")]
    underscore_id: Option<WireId>,
    id: Option<WireId>,
    name: String,
}

impl TryFrom<WireCustomer> for Customer {
    type Error = String;

    fn try_from(wire: WireCustomer) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: pick_id(wire.underscore_id, wire.id)?,
            name: wire.name,
        })
    }
}

/// Body for `POST /customers`
#[derive(Debug, Clone, Serialize)]
pub struct NewCustomer<'a> {
    pub name: &'a str,
}

/// Uploaded drawing record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireDrawing")]
pub struct Drawing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "drawingNo")]
    pub drawing_no: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct WireDrawing {
    #[serde(rename = "_id")]
    underscore_id: Option<WireId>,
    id: Option<WireId>,
    #[serde(rename = "drawingNo")]
    drawing_no: String,
    #[serde(rename = "filePath")]
    file_path: String,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl TryFrom<WireDrawing> for Drawing {
    type Error = String;

    fn try_from(wire: WireDrawing) -> Result<Self, Self::Error> {
        Ok(Drawing {
            id: pick_id(wire.underscore_id, wire.id)?,
            drawing_no: wire.drawing_no,
            file_path: wire.file_path,
            created_at: wire.created_at,
        })
    }
}

impl Drawing {
    /// Upload time in the viewer's local time zone
    pub fn uploaded_at_local(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// A PDF picked in the file input, read fully into memory
#[derive(Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PdfFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}
