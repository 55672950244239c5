//! Ticket printing types

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

use crate::utils::AppError;

/// Ticket rendering failure
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Rendered ticket, ready to be served or faxed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDocument {
    /// File name presented to the fax service / browser
    pub filename: String,
    /// MIME type of `bytes`
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl TicketDocument {
    pub fn plain_text(filename: impl Into<String>, text: String) -> Self {
        Self {
            filename: filename.into(),
            content_type: "text/plain; charset=utf-8",
            bytes: text.into_bytes(),
        }
    }

    pub fn pdf(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf",
            bytes,
        }
    }

    /// Base64 body for JSON transports
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}
