//! API Configuration
//!
//! Endpoint origins baked in at build time, overridable through
//! `DRAWING_ADMIN_API_URL` / `DRAWING_ADMIN_FILES_URL` when running trunk.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
const DEFAULT_FILE_BASE: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_MS: u32 = 30_000;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the JSON API, e.g. `http://localhost:5000/api`
    pub api_base: String,
    /// Origin that serves uploaded files by their stored path
    pub file_base: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(
            option_env!("DRAWING_ADMIN_API_URL").unwrap_or(DEFAULT_API_BASE),
            option_env!("DRAWING_ADMIN_FILES_URL").unwrap_or(DEFAULT_FILE_BASE),
        )
    }
}

impl ApiConfig {
    pub fn new(api_base: &str, file_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            file_base: file_base.trim_end_matches('/').to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// URL of an API resource, `resource` without leading slash
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base, resource)
    }

    /// Link to an uploaded file under the files origin
    pub fn file_url(&self, file_path: &str) -> String {
        let path = file_path
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}", self.file_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("http://api.local/api/", "http://api.local/");
        assert_eq!(config.endpoint("drawings"), "http://api.local/api/drawings");
        assert_eq!(config.file_base, "http://api.local");
    }

    #[test]
    fn test_file_url() {
        let config = ApiConfig::new(DEFAULT_API_BASE, DEFAULT_FILE_BASE);
        assert_eq!(
            config.file_url("uploads/DWG-1.pdf"),
            "http://localhost:5000/uploads/DWG-1.pdf"
        );
        assert_eq!(
            config.file_url("/uploads/Bracket Rev#2.pdf"),
            "http://localhost:5000/uploads/Bracket%20Rev%232.pdf"
        );
        assert_eq!(
            config.file_url("uploads\\1717500000-A.123.pdf"),
            "http://localhost:5000/uploads/1717500000-A.123.pdf"
        );
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(ApiConfig::new("a", "b").timeout_ms, 30_000);
    }
}
