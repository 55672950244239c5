//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::OrderNotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::OrderEmpty
            | Self::MenuItemNotFound
            | Self::SizeNotFound
            | Self::ExtraNotFound => StatusCode::BAD_REQUEST,

            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::FaxDeliveryFailed => StatusCode::BAD_GATEWAY,

            Self::InternalError | Self::IdentityExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
