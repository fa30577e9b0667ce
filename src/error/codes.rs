//! Error code constants.
//!
//! - 3xxx: Validation errors
//! - 4xxx: Resource errors
//! - 5xxx: Storage/availability errors

/// Numeric error code carried in the response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Bad request / malformed body or path.
    pub const BAD_REQUEST: Self = Self(3001);

    /// User not found.
    pub const NOT_FOUND: Self = Self(4001);

    /// Storage backend error.
    pub const STORAGE_ERROR: Self = Self(5001);

    /// Storage unreachable on the readiness probe.
    pub const SERVICE_UNAVAILABLE: Self = Self(5003);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::BAD_REQUEST.as_i32(), 3001);
        assert_eq!(ErrorCode::NOT_FOUND.as_i32(), 4001);
        assert_eq!(ErrorCode::STORAGE_ERROR.to_string(), "5001");
        assert_eq!(i32::from(ErrorCode::SERVICE_UNAVAILABLE), 5003);
    }
}
