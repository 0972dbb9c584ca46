use crate::citations::Citation;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const HTTP_USER_AGENT: &str = concat!("Documind/", env!("CARGO_PKG_VERSION"));
const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInfo {
    pub id: i64,
    pub filename: String,
    pub uploaded_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub citations: Vec<Citation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversationDetail {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Serialize)]
struct CreateConversationRequest<'a> {
    initial_message: &'a str,
    document_ids: &'a [i64],
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    conversation_id: i64,
    content: &'a str,
}

/// Typed client for the document/conversation backend. All calls block and
/// are expected to run on the background executor.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let base_url = std::env::var("DOCUMIND_BACKEND_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let http = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(HTTP_USER_AGENT)
            .build()
            .context("failed to create backend http client")?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn list_documents(&self) -> Result<Vec<DocumentInfo>> {
        self.http
            .get(self.endpoint("/document/"))
            .send()
            .context("failed to request document list")?
            .error_for_status()
            .context("document list request failed")?
            .json()
            .context("failed to parse document list response")
    }

    pub fn upload_document(&self, path: &Path) -> Result<DocumentInfo> {
        let form = reqwest::blocking::multipart::Form::new()
            .file("file", path)
            .with_context(|| format!("failed to read upload file: {}", path.display()))?;

        self.http
            .post(self.endpoint("/document/"))
            .multipart(form)
            .send()
            .context("failed to upload document")?
            .error_for_status()
            .context("document upload request failed")?
            .json()
            .context("failed to parse document upload response")
    }

    pub fn delete_document(&self, id: i64) -> Result<()> {
        self.http
            .delete(self.endpoint(&format!("/document/{id}")))
            .send()
            .context("failed to delete document")?
            .error_for_status()
            .context("document delete request failed")?;
        Ok(())
    }

    /// Fetches the raw bytes of a document file. `url` may be absolute or a
    /// path relative to the backend base url (the form citations carry).
    pub fn fetch_document_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let absolute = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            self.endpoint(url)
        };

        let response = self
            .http
            .get(&absolute)
            .send()
            .with_context(|| format!("failed to request document file: {absolute}"))?
            .error_for_status()
            .with_context(|| format!("document file request failed: {absolute}"))?;

        Ok(response
            .bytes()
            .context("failed to read document file body")?
            .to_vec())
    }

    pub fn list_conversations(&self) -> Result<Vec<Conversation>> {
        self.http
            .get(self.endpoint("/conversation/"))
            .send()
            .context("failed to request conversation list")?
            .error_for_status()
            .context("conversation list request failed")?
            .json()
            .context("failed to parse conversation list response")
    }

    pub fn create_conversation(
        &self,
        initial_message: &str,
        document_ids: &[i64],
    ) -> Result<Conversation> {
        self.http
            .post(self.endpoint("/conversation/"))
            .json(&CreateConversationRequest {
                initial_message,
                document_ids,
            })
            .send()
            .context("failed to create conversation")?
            .error_for_status()
            .context("conversation create request failed")?
            .json()
            .context("failed to parse conversation create response")
    }

    pub fn conversation_detail(&self, id: i64) -> Result<ConversationDetail> {
        self.http
            .get(self.endpoint(&format!("/conversation/{id}")))
            .send()
            .context("failed to request conversation detail")?
            .error_for_status()
            .context("conversation detail request failed")?
            .json()
            .context("failed to parse conversation detail response")
    }

    pub fn delete_conversation(&self, id: i64) -> Result<()> {
        self.http
            .delete(self.endpoint(&format!("/conversation/{id}")))
            .send()
            .context("failed to delete conversation")?
            .error_for_status()
            .context("conversation delete request failed")?;
        Ok(())
    }

    pub fn send_message(&self, conversation_id: i64, content: &str) -> Result<ConversationDetail> {
        self.http
            .post(self.endpoint("/conversation/message"))
            .json(&SendMessageRequest {
                conversation_id,
                content,
            })
            .send()
            .context("failed to send message")?
            .error_for_status()
            .context("message send request failed")?
            .json()
            .context("failed to parse message send response")
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_urls_without_double_slashes() {
        assert_eq!(
            join_url("http://localhost:8000", "/document/"),
            "http://localhost:8000/document/"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "conversation/3"),
            "http://localhost:8000/conversation/3"
        );
    }

    #[test]
    fn parses_conversation_detail_with_citations() {
        let raw = r#"{
            "id": 7,
            "title": "Quarterly report",
            "created_at": "2024-04-02T09:15:00Z",
            "updated_at": "2024-04-02T09:16:30Z",
            "messages": [
                {
                    "id": 1,
                    "role": "user",
                    "content": "What were the totals?",
                    "created_at": "2024-04-02T09:15:00Z"
                },
                {
                    "id": 2,
                    "role": "assistant",
                    "content": "Totals are on page 3 [1].",
                    "created_at": "2024-04-02T09:16:30Z",
                    "citations": [
                        {
                            "id": "cite-1",
                            "documentId": "42",
                            "documentName": "report.pdf",
                            "documentUrl": "/document/42/file",
                            "pageNumber": 3,
                            "text": "total revenue",
                            "boundingBoxes": [
                                {"x": 10.0, "y": 20.0, "width": 30.0, "height": 40.0}
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let detail: ConversationDetail =
            serde_json::from_str(raw).expect("detail should deserialize");
        assert_eq!(detail.messages.len(), 2);
        assert_eq!(detail.messages[0].role, MessageRole::User);
        assert!(detail.messages[0].citations.is_empty());
        assert_eq!(detail.messages[1].role, MessageRole::Assistant);
        assert_eq!(detail.messages[1].citations[0].page_number, 3);
    }

    #[test]
    fn serializes_create_conversation_request() {
        let request = CreateConversationRequest {
            initial_message: "Summarize the report",
            document_ids: &[4, 9],
        };
        let json = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(json["initial_message"], "Summarize the report");
        assert_eq!(json["document_ids"], serde_json::json!([4, 9]));
    }

    #[test]
    fn serializes_send_message_request() {
        let request = SendMessageRequest {
            conversation_id: 12,
            content: "And the costs?",
        };
        let json = serde_json::to_value(&request).expect("request should serialize");
        assert_eq!(json["conversation_id"], 12);
        assert_eq!(json["content"], "And the costs?");
    }
}
