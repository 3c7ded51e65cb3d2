use crate::common::{Message, SocialPost};

/// Phiên chat: transcript, cờ đang chờ và nguồn của câu trả lời mới nhất.
///
/// Transcript chỉ sống trong phiên, không lưu xuống đĩa. Thứ tự tin nhắn
/// đúng bằng thứ tự thao tác của người dùng: mỗi câu hỏi được theo sau
/// bởi đúng một câu trả lời (thành công hoặc cảnh báo lỗi).
pub struct ChatSession {
    messages: Vec<Message>,
    loading: bool,
    sources: Vec<SocialPost>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            loading: false,
            sources: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sources(&self) -> &[SocialPost] {
        &self.sources
    }

    /// Ghi nhận câu hỏi của người dùng và bật cờ chờ.
    ///
    /// Trả về `false` (không làm gì) khi đang có request chạy:
    /// mỗi phiên chỉ một request tại một thời điểm.
    pub fn begin_request(&mut self, question: impl Into<String>) -> bool {
        if self.loading {
            return false;
        }

        self.messages.push(Message::user(question));
        self.loading = true;
        true
    }

    /// Ghi nhận câu trả lời của assistant và tắt cờ chờ.
    /// Nguồn trích dẫn của câu trả lời trước bị thay thế.
    pub fn finish_request(&mut self, message: Message, sources: Vec<SocialPost>) {
        self.messages.push(message);
        self.sources = sources;
        self.loading = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Role;

    #[test]
    fn question_then_answer_keeps_chronological_order() {
        let mut session = ChatSession::new();

        assert!(session.begin_request("câu hỏi"));
        assert!(session.is_loading());

        session.finish_request(
            Message::assistant("trả lời", Vec::new(), "qwen-max"),
            Vec::new(),
        );

        assert!(!session.is_loading());
        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn second_request_refused_while_loading() {
        let mut session = ChatSession::new();

        assert!(session.begin_request("câu hỏi 1"));
        assert!(!session.begin_request("câu hỏi 2"));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn failure_answer_clears_loading_flag() {
        let mut session = ChatSession::new();
        session.begin_request("câu hỏi");

        session.finish_request(
            Message::assistant(
                crate::agent::REQUEST_FAILED_MESSAGE,
                Vec::new(),
                "qwen-max",
            ),
            Vec::new(),
        );

        assert!(!session.is_loading());
        assert!(session.begin_request("câu hỏi tiếp"));
    }

    #[test]
    fn sources_replaced_by_each_answer() {
        let mut session = ChatSession::new();
        session.begin_request("câu hỏi 1");
        session.finish_request(
            Message::assistant("a", Vec::new(), "qwen-max"),
            vec![SocialPost {
                url: "http://u1".to_string(),
                ..SocialPost::default()
            }],
        );
        assert_eq!(session.sources().len(), 1);

        session.begin_request("câu hỏi 2");
        session.finish_request(Message::assistant("b", Vec::new(), "qwen-max"), Vec::new());
        assert!(session.sources().is_empty());
    }
}
