use tokio::sync::mpsc;

use crate::common::{AgentCommand, AgentEvent, Message};

use super::client::AgentClient;
use super::normalize;

/// Cảnh báo hiển thị khi request thất bại hoàn toàn.
pub const REQUEST_FAILED_MESSAGE: &str = "⚠️ Lỗi khi gọi API. Vui lòng thử lại.";

/// Worker chạy nền: nhận câu hỏi từ UI, gọi API rồi trả sự kiện về.
///
/// Lệnh được xử lý tuần tự từ hàng đợi, nên câu trả lời cho request K
/// luôn được phát trước khi request K+1 được gửi đi.
pub struct AgentWorker {
    client: AgentClient,
    event_sender: mpsc::Sender<AgentEvent>,
    command_receiver: mpsc::Receiver<AgentCommand>,
}

impl AgentWorker {
    pub fn new(
        client: AgentClient,
        event_sender: mpsc::Sender<AgentEvent>,
        command_receiver: mpsc::Receiver<AgentCommand>,
    ) -> Self {
        Self {
            client,
            event_sender,
            command_receiver,
        }
    }

    /// Vòng lặp chính. Mỗi `AskQuestion` sinh đúng một `AnswerReady`,
    /// kể cả khi request thất bại.
    pub async fn run(mut self) {
        while let Some(command) = self.command_receiver.recv().await {
            match command {
                AgentCommand::AskQuestion {
                    question,
                    model_id,
                    topk,
                } => {
                    let event = self.answer(&question, &model_id, topk).await;
                    if self.event_sender.send(event).await.is_err() {
                        log::info!("Event channel closed; stopping agent worker");
                        return;
                    }
                }
            }
        }
    }

    async fn answer(&self, question: &str, model_id: &str, topk: u32) -> AgentEvent {
        match self.client.ask(question, model_id, topk).await {
            Ok(payload) => {
                let answer = normalize::normalize(&payload);
                AgentEvent::AnswerReady {
                    message: Message::assistant(answer.text, answer.references, model_id),
                    sources: answer.sources,
                }
            }
            Err(err) => {
                log::error!("Agent request to {} failed: {err}", self.client.endpoint());
                AgentEvent::AnswerReady {
                    message: Message::assistant(REQUEST_FAILED_MESSAGE, Vec::new(), model_id),
                    sources: Vec::new(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Role;

    #[tokio::test]
    async fn failed_request_yields_single_warning_answer() {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, mut event_rx) = mpsc::channel(8);
        let client = AgentClient::new("http://127.0.0.1:9/api/agent");
        let handle = tokio::spawn(AgentWorker::new(client, event_tx, cmd_rx).run());

        cmd_tx
            .send(AgentCommand::AskQuestion {
                question: "câu hỏi".to_string(),
                model_id: "qwen-max".to_string(),
                topk: 5,
            })
            .await
            .unwrap();

        let AgentEvent::AnswerReady { message, sources } =
            event_rx.recv().await.expect("exactly one event");
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, REQUEST_FAILED_MESSAGE);
        assert!(message.references.is_empty());
        assert_eq!(message.model.as_deref(), Some("qwen-max"));
        assert!(sources.is_empty());

        // Đóng kênh lệnh: worker thoát mà không phát thêm sự kiện nào.
        drop(cmd_tx);
        handle.await.unwrap();
        assert!(event_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn worker_stops_when_command_channel_closes() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AgentCommand>(1);
        let (event_tx, _event_rx) = mpsc::channel(1);
        let client = AgentClient::new("http://127.0.0.1:9/api/agent");
        let handle = tokio::spawn(AgentWorker::new(client, event_tx, cmd_rx).run());

        drop(cmd_tx);
        handle.await.unwrap();
    }
}
