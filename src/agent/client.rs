use serde_json::Value;
use thiserror::Error;

/// Lỗi khi gọi API agent. Cả hai trường hợp đều được worker đổi thành
/// một tin nhắn cảnh báo, không bao giờ ném thẳng lên UI.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    #[error("response body is not JSON: {0}")]
    InvalidJson(reqwest::Error),
}

/// HTTP client gọi endpoint hỏi-đáp.
#[derive(Clone)]
pub struct AgentClient {
    endpoint: String,
    http: reqwest::Client,
}

impl AgentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Gửi một câu hỏi, trả về JSON body thô.
    ///
    /// Status code không được kiểm tra: backend trả lỗi dưới dạng JSON
    /// và normalizer tự xử lý mọi hình dạng payload. Không retry,
    /// không cache; giới hạn một request đang chạy là việc của session.
    pub async fn ask(
        &self,
        question: &str,
        model_id: &str,
        topk: u32,
    ) -> Result<Value, DispatchError> {
        let body = serde_json::json!({
            "question": question,
            "model_id": model_id,
            "topk": topk,
        });

        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(DispatchError::Transport)?;

        response.json().await.map_err(DispatchError::InvalidJson)
    }
}
