//! Drawing Number Derivation
//!
//! Default drawing number from an uploaded file's name.

/// Strip the final dot-delimited segment: `"A.123.pdf"` -> `"A.123"`.
/// Names without a dot pass through unchanged.
pub fn drawing_no_from_filename(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension() {
        assert_eq!(drawing_no_from_filename("A123.pdf"), "A123");
        assert_eq!(drawing_no_from_filename("DWG-1001.PDF"), "DWG-1001");
    }

    #[test]
    fn test_keeps_inner_dots() {
        assert_eq!(drawing_no_from_filename("A.123.pdf"), "A.123");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(drawing_no_from_filename("noext"), "noext");
        assert_eq!(drawing_no_from_filename(""), "");
    }

    #[test]
    fn test_dotfile_and_trailing_dot() {
        assert_eq!(drawing_no_from_filename(".pdf"), "");
        assert_eq!(drawing_no_from_filename("bracket."), "bracket");
    }
}
