use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid occurrence {occurrence}: must be between 1 and 5")]
    InvalidOccurrence { occurrence: u32 },

    #[error("Invalid date: {year}-{month:02} is not representable")]
    InvalidDate { year: i32, month: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_occurrence_message() {
        let err = CalendarError::InvalidOccurrence { occurrence: 6 };
        assert_eq!(err.to_string(), "Invalid occurrence 6: must be between 1 and 5");
    }

    #[test]
    fn invalid_date_message() {
        let err = CalendarError::InvalidDate {
            year: 2026,
            month: 13,
        };
        assert_eq!(err.to_string(), "Invalid date: 2026-13 is not representable");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
