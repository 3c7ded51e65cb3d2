/// Lệnh UI gửi xuống agent worker.
#[derive(Debug, Clone)]
pub enum AgentCommand {
    /// Gửi một câu hỏi lên endpoint hỏi-đáp.
    /// - model_id: gửi nguyên văn, không kiểm tra với registry
    /// - topk: số bài viết backend nên truy xuất
    AskQuestion {
        question: String,
        model_id: String,
        topk: u32,
    },
}
