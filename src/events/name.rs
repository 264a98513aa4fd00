//! Channel-name validation.
//!
//! Names identify broadcast channels and are matched exactly (case-sensitive).
//! Registration and removal both reject empty or whitespace-only names; raise
//! does not validate — an unknown name is a defined no-op, not an error.

use crate::error::EventError;

/// Rejects empty and whitespace-only event names.
pub(crate) fn validate_event_name(name: &str) -> Result<(), EventError> {
    if name.trim().is_empty() {
        return Err(EventError::InvalidEventName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_accepted() {
        assert!(validate_event_name("TestEvent").is_ok());
    }

    #[test]
    fn test_inner_whitespace_accepted() {
        assert!(validate_event_name("Test Event").is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = validate_event_name("").unwrap_err();
        assert!(matches!(err, EventError::InvalidEventName { name } if name.is_empty()));
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        for name in [" ", "   ", "\t", "\n", " \t \n "] {
            assert!(
                validate_event_name(name).is_err(),
                "name {name:?} should be rejected"
            );
        }
    }
}
