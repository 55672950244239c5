use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{FaxDispatcher, FaxError};
use crate::printing::TicketDocument;

/// 请求体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FaxRequest<'a> {
    faxline_id: &'a str,
    recipient: &'a str,
    filename: &'a str,
    base64_content: String,
}

/// sipgate 传真发送
pub struct SipgateFaxDispatcher {
    client: reqwest::Client,
    endpoint: String,
    faxline_id: String,
    username: String,
    password: String,
}

impl SipgateFaxDispatcher {
    pub fn new(
        endpoint: impl Into<String>,
        faxline_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, FaxError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            faxline_id: faxline_id.into(),
            username: username.into(),
            password: password.into(),
        })
    }
}

#[async_trait]
impl FaxDispatcher for SipgateFaxDispatcher {
    #[tracing::instrument(skip(self, document), fields(filename = %document.filename, bytes = document.bytes.len()))]
    async fn send(&self, recipient: &str, document: &TicketDocument) -> Result<(), FaxError> {
        if recipient.trim().is_empty() {
            return Err(FaxError::MissingRecipient);
        }

        let body = FaxRequest {
            faxline_id: &self.faxline_id,
            recipient,
            filename: &document.filename,
            base64_content: document.to_base64(),
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.username, Some(&self.password))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FaxError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "Fax accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let doc = TicketDocument::pdf("bestellung.pdf", b"%PDF-1.3".to_vec());
        let body = FaxRequest {
            faxline_id: "f0",
            recipient: "+4930123",
            filename: &doc.filename,
            base64_content: doc.to_base64(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["faxlineId"], "f0");
        assert_eq!(json["recipient"], "+4930123");
        assert_eq!(json["filename"], "bestellung.pdf");
        assert_eq!(json["base64Content"], "JVBERi0xLjM=");
    }

    #[tokio::test]
    async fn test_blank_recipient_is_rejected_without_request() {
        let dispatcher = SipgateFaxDispatcher::new(
            "http://127.0.0.1:9/unused",
            "f0",
            "u",
            "p",
            Duration::from_millis(100),
        )
        .unwrap();
        let doc = TicketDocument::plain_text("t.txt", String::new());

        let err = dispatcher.send("  ", &doc).await.unwrap_err();
        assert!(matches!(err, FaxError::MissingRecipient));
    }
}
