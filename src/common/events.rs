use crate::common::types::{Message, SocialPost};

/// Sự kiện từ agent worker gửi lên UI.
///
/// Mỗi `AskQuestion` sinh đúng một `AnswerReady`, kể cả khi request
/// thất bại (khi đó message chứa cảnh báo cố định, references rỗng).
#[derive(Debug, Clone)]
pub enum AgentEvent {
    AnswerReady {
        message: Message,
        sources: Vec<SocialPost>,
    },
}
