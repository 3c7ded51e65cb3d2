use serde::{Deserialize, Serialize};

/// Vai trò của một tin nhắn trong hội thoại.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Nguồn trích dẫn hiển thị kèm câu trả lời.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Bài viết mạng xã hội do backend truy xuất.
/// Tên trường giữ nguyên theo payload của backend; không bao giờ bị sửa.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    #[serde(default)]
    pub noi_dung_bai_viet: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub like: Option<i64>,
    #[serde(default)]
    pub comment: Option<i64>,
    #[serde(default)]
    pub share: Option<i64>,
}

/// Domain model đại diện một tin nhắn chat.
///
/// Bất biến sau khi được thêm vào transcript. `references` và `model`
/// chỉ có nghĩa với tin nhắn của assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub references: Vec<Reference>,
    pub model: Option<String>,
    pub timestamp: i64,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            references: Vec::new(),
            model: None,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn assistant(
        content: impl Into<String>,
        references: Vec<Reference>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            references,
            model: Some(model.into()),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
