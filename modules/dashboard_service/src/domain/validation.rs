//! Request precondition checks

use crate::contract::DashboardError;

/// Accept `value` only if it is present and not the empty string.
///
/// Whitespace-only values are accepted as-is.
pub fn require_non_empty(value: Option<String>, message: &str) -> Result<String, DashboardError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DashboardError::validation(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty(Some("x".into()), "m").unwrap(), "x");
        assert_eq!(require_non_empty(Some(" ".into()), "m").unwrap(), " ");
        assert_eq!(
            require_non_empty(Some(String::new()), "Description is required"),
            Err(DashboardError::validation("Description is required"))
        );
        assert!(require_non_empty(None, "m").is_err());
    }
}
