//! 传真发送
//!
//! - [`FaxDispatcher`] - 发送接口
//! - [`SipgateFaxDispatcher`] - sipgate 风格 JSON 接口 (basic auth + base64 正文)

mod sipgate;

use async_trait::async_trait;
use thiserror::Error;

use crate::printing::TicketDocument;

pub use sipgate::SipgateFaxDispatcher;

/// 传真发送错误 - 可恢复，原样返回给调用方
#[derive(Debug, Error)]
pub enum FaxError {
    #[error("fax recipient is not configured")]
    MissingRecipient,

    #[error("fax request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("fax service rejected the document ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait FaxDispatcher: Send + Sync {
    async fn send(&self, recipient: &str, document: &TicketDocument) -> Result<(), FaxError>;
}
