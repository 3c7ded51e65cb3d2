use regex::Regex;
use serde_json::Value;

use crate::common::{Reference, SocialPost};

/// Câu trả lời thay thế khi payload không có trường `answer`.
pub const NO_DATA_MESSAGE: &str = "⚠️ Không có dữ liệu phản hồi từ API.";

/// Số bài viết tối đa đưa vào danh sách tham khảo.
const MAX_SOCIAL_REFERENCES: usize = 5;
/// Số ký tự lấy từ nội dung bài viết làm tiêu đề tham khảo.
const TITLE_CHARS: usize = 60;

/// Kết quả chuẩn hóa một payload: văn bản trả lời, danh sách tham khảo
/// và toàn bộ bài viết nguồn (cho bảng nguồn trích dẫn).
#[derive(Debug, Clone, Default)]
pub struct NormalizedAnswer {
    pub text: String,
    pub references: Vec<Reference>,
    pub sources: Vec<SocialPost>,
}

/// Các hình dạng `answer` mà backend từng trả về, thử theo thứ tự.
/// Nhánh `Opaque`/`Missing` là fallback tường minh: decode không bao giờ lỗi.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerShape {
    /// `answer.answer` là chuỗi, kèm `answer.references`.
    Nested {
        text: String,
        references: Vec<Reference>,
    },
    /// `answer` là chuỗi chứa JSON mã hóa `{answer, references}`.
    Encoded {
        text: String,
        references: Vec<Reference>,
    },
    /// `answer` là chuỗi thuần, không parse được thành JSON.
    Plain(String),
    /// `answer` tồn tại nhưng không nhận dạng được: dump toàn bộ payload.
    Opaque(String),
    /// Không có trường `answer`.
    Missing,
}

/// Chuẩn hóa payload thô thành câu trả lời hiển thị được.
///
/// Sau bước decode, dù rơi vào nhánh nào cũng áp dụng hai bước:
/// gộp tối đa 5 bài viết có url vào danh sách tham khảo, rồi gắn link
/// cho các marker "Bài viết N" theo danh sách bài viết ĐẦY ĐỦ
/// (trước khi cắt còn 5).
pub fn normalize(payload: &Value) -> NormalizedAnswer {
    let (text, mut references) = match decode_answer(payload) {
        AnswerShape::Nested { text, references }
        | AnswerShape::Encoded { text, references } => (text, references),
        AnswerShape::Plain(text) | AnswerShape::Opaque(text) => (text, Vec::new()),
        AnswerShape::Missing => (NO_DATA_MESSAGE.to_string(), Vec::new()),
    };

    let sources = social_posts(payload);
    references.extend(social_references(&sources));
    let text = link_inline_citations(&text, &sources);

    NormalizedAnswer {
        text,
        references,
        sources,
    }
}

/// Thử lần lượt các hình dạng đã biết; trường thiếu hoặc null rơi xuống
/// nhánh sau thay vì lỗi.
pub fn decode_answer(payload: &Value) -> AnswerShape {
    if let Some(text) = payload.pointer("/answer/answer").and_then(Value::as_str) {
        return AnswerShape::Nested {
            text: text.to_string(),
            references: parse_references(payload.pointer("/answer/references")),
        };
    }

    match payload.get("answer") {
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            // Backend cũ trả answer dưới dạng chuỗi JSON; không kiểm tra
            // trường answer có mặt hay không, thiếu thì thành chuỗi rỗng.
            Ok(parsed) => AnswerShape::Encoded {
                text: parsed
                    .get("answer")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                references: parse_references(parsed.get("references")),
            },
            Err(_) => AnswerShape::Plain(raw.clone()),
        },
        Some(Value::Null) | None => AnswerShape::Missing,
        Some(_) => AnswerShape::Opaque(serde_json::to_string_pretty(payload).unwrap_or_default()),
    }
}

fn parse_references(value: Option<&Value>) -> Vec<Reference> {
    value
        .map(|v| serde_json::from_value(v.clone()).unwrap_or_default())
        .unwrap_or_default()
}

/// Danh sách bài viết từ `retrieved.social`. Một phần tử hỏng chỉ làm
/// hỏng chính nó (thành bản ghi rỗng), không làm hỏng cả danh sách.
fn social_posts(payload: &Value) -> Vec<SocialPost> {
    payload
        .pointer("/retrieved/social")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

/// Lấy tối đa 5 bài viết có url làm tham khảo, tiêu đề là 60 ký tự đầu
/// của nội dung. Không khử trùng lặp với tham khảo sẵn có.
fn social_references(social: &[SocialPost]) -> Vec<Reference> {
    social
        .iter()
        .filter(|post| !post.url.is_empty())
        .take(MAX_SOCIAL_REFERENCES)
        .map(|post| Reference {
            title: format!("{}...", truncate_chars(&post.noi_dung_bai_viet, TITLE_CHARS)),
            url: post.url.clone(),
        })
        .collect()
}

/// Cắt theo ký tự, không theo byte: nội dung bài viết là tiếng Việt.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Thay "Bài viết N" bằng link markdown `[Bài viết N](url)` theo chỉ số
/// 1-based trên danh sách bài viết đầy đủ. Marker không có bài tương ứng
/// (hoặc bài không có url) giữ nguyên.
fn link_inline_citations(text: &str, social: &[SocialPost]) -> String {
    let Ok(marker) = Regex::new(r"Bài viết\s*(\d+)") else {
        return text.to_string();
    };

    marker
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let number = &caps[1];
            let post = number
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| social.get(idx))
                .filter(|post| !post.url.is_empty());

            match post {
                Some(post) => format!("[Bài viết {}]({})", number, post.url),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
