//! Unified error codes for the fleet back-office
//!
//! Error codes are shared between the server and the admin frontend.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Organisation errors
//! - 4xxx: Fleet errors
//! - 5xxx: Network errors
//! - 6xxx: Schedule errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Account is disabled
    AccountDisabled = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,

    // ==================== 3xxx: Organisation ====================
    /// Department not found
    DepartmentNotFound = 3001,
    /// Department name already exists
    DepartmentNameExists = 3002,
    /// Department is referenced by employees or grants
    DepartmentInUse = 3003,
    /// Position not found
    PositionNotFound = 3101,
    /// Position name already exists
    PositionNameExists = 3102,
    /// Position is referenced by employees
    PositionInUse = 3103,
    /// Permission not found in the reference list
    PermissionNotFound = 3201,

    // ==================== 4xxx: Fleet ====================
    /// Bus not found
    BusNotFound = 4001,
    /// Plate number already exists
    PlateNumberExists = 4002,
    /// Bus is referenced by schedules
    BusInService = 4003,

    // ==================== 5xxx: Network ====================
    /// Route not found
    RouteNotFound = 5001,
    /// Route name already exists
    RouteNameExists = 5002,
    /// Route is referenced by schedules
    RouteInService = 5003,
    /// Stop not found
    StopNotFound = 5101,
    /// Stop name already exists
    StopNameExists = 5102,
    /// Stop is assigned to routes
    StopInUse = 5103,

    // ==================== 6xxx: Schedule ====================
    /// Schedule entry not found
    ScheduleNotFound = 6001,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee username already exists
    EmployeeUsernameExists = 8002,
    /// Cannot delete self
    EmployeeCannotDeleteSelf = 8003,
    /// Employee is referenced by schedules as a driver
    EmployeeIsDriver = 8004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",
            ErrorCode::AccountDisabled => "Account has been disabled",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",

            // Organisation
            ErrorCode::DepartmentNotFound => "Department not found",
            ErrorCode::DepartmentNameExists => "Department name already exists",
            ErrorCode::DepartmentInUse => "Department is in use",
            ErrorCode::PositionNotFound => "Position not found",
            ErrorCode::PositionNameExists => "Position name already exists",
            ErrorCode::PositionInUse => "Position is in use",
            ErrorCode::PermissionNotFound => "Permission not found",

            // Fleet
            ErrorCode::BusNotFound => "Bus not found",
            ErrorCode::PlateNumberExists => "Plate number already exists",
            ErrorCode::BusInService => "Bus is referenced by schedules",

            // Network
            ErrorCode::RouteNotFound => "Route not found",
            ErrorCode::RouteNameExists => "Route name already exists",
            ErrorCode::RouteInService => "Route is referenced by schedules",
            ErrorCode::StopNotFound => "Stop not found",
            ErrorCode::StopNameExists => "Stop name already exists",
            ErrorCode::StopInUse => "Stop is assigned to routes",

            // Schedule
            ErrorCode::ScheduleNotFound => "Schedule entry not found",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeUsernameExists => "Username already exists",
            ErrorCode::EmployeeCannotDeleteSelf => "Cannot delete your own account",
            ErrorCode::EmployeeIsDriver => "Employee is referenced by schedules as a driver",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            1005 => Self::AccountDisabled,
            2001 => Self::PermissionDenied,
            3001 => Self::DepartmentNotFound,
            3002 => Self::DepartmentNameExists,
            3003 => Self::DepartmentInUse,
            3101 => Self::PositionNotFound,
            3102 => Self::PositionNameExists,
            3103 => Self::PositionInUse,
            3201 => Self::PermissionNotFound,
            4001 => Self::BusNotFound,
            4002 => Self::PlateNumberExists,
            4003 => Self::BusInService,
            5001 => Self::RouteNotFound,
            5002 => Self::RouteNameExists,
            5003 => Self::RouteInService,
            5101 => Self::StopNotFound,
            5102 => Self::StopNameExists,
            5103 => Self::StopInUse,
            6001 => Self::ScheduleNotFound,
            8001 => Self::EmployeeNotFound,
            8002 => Self::EmployeeUsernameExists,
            8003 => Self::EmployeeCannotDeleteSelf,
            8004 => Self::EmployeeIsDriver,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9005 => Self::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::InvalidCredentials,
            ErrorCode::PermissionDenied,
            ErrorCode::DepartmentInUse,
            ErrorCode::PlateNumberExists,
            ErrorCode::StopInUse,
            ErrorCode::ScheduleNotFound,
            ErrorCode::EmployeeUsernameExists,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::InvalidCredentials).unwrap();
        assert_eq!(json, "1002");
        let back: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ErrorCode::InvalidCredentials);
    }
}
