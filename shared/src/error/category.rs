//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Organisation errors
/// - 4xxx: Fleet errors
/// - 5xxx: Network errors
/// - 6xxx: Schedule errors
/// - 8xxx: Employee errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Organisation errors (3xxx)
    Organisation,
    /// Fleet errors (4xxx)
    Fleet,
    /// Network errors (5xxx)
    Network,
    /// Schedule errors (6xxx)
    Schedule,
    /// Employee errors (8xxx)
    Employee,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Organisation,
            4000..5000 => Self::Fleet,
            5000..6000 => Self::Network,
            6000..7000 => Self::Schedule,
            8000..9000 => Self::Employee,
            _ => Self::System,
        }
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(
            ErrorCategory::from(ErrorCode::ValidationFailed),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::InvalidCredentials),
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::PermissionDenied),
            ErrorCategory::Permission
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::BusNotFound),
            ErrorCategory::Fleet
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::StopInUse),
            ErrorCategory::Network
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::EmployeeNotFound),
            ErrorCategory::Employee
        );
        assert_eq!(
            ErrorCategory::from(ErrorCode::DatabaseError),
            ErrorCategory::System
        );
    }
}
