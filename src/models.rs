/// Một model trong bộ chọn của UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInfo {
    pub id: &'static str,
    pub provider: &'static str,
    pub label: &'static str,
}

/// Model chọn sẵn khi mở ứng dụng.
pub const DEFAULT_MODEL: &str = "qwen-max";

/// Registry tĩnh các model khả dụng. Chỉ dùng để hiển thị bộ chọn;
/// id được gửi nguyên văn trong `model_id`, không kiểm tra lại.
pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "gpt-5",
        provider: "openai",
        label: "gpt-5 (OpenAI)",
    },
    ModelInfo {
        id: "gpt-5-mini",
        provider: "openai",
        label: "gpt-5-mini (OpenAI)",
    },
    ModelInfo {
        id: "gpt-4.1",
        provider: "openai",
        label: "gpt-4.1 (OpenAI)",
    },
    ModelInfo {
        id: "gpt-4.1-mini",
        provider: "openai",
        label: "gpt-4.1-mini (OpenAI)",
    },
    ModelInfo {
        id: "gemini-2.5-pro",
        provider: "gemini",
        label: "gemini-2.5-pro (Gemini)",
    },
    ModelInfo {
        id: "gemini-2.5-flash",
        provider: "gemini",
        label: "gemini-2.5-flash (Gemini)",
    },
    ModelInfo {
        id: "gemini-2.5-flash-lite",
        provider: "gemini",
        label: "gemini-2.5-flash-lite (Gemini)",
    },
    ModelInfo {
        id: "qwen-max",
        provider: "qwen",
        label: "qwen-max (Qwen)",
    },
    ModelInfo {
        id: "qwen-plus",
        provider: "qwen",
        label: "qwen-plus (Qwen)",
    },
    ModelInfo {
        id: "qwen-flash",
        provider: "qwen",
        label: "qwen-flash (Qwen)",
    },
];

/// Nhãn hiển thị của một model id; id lạ hiển thị nguyên văn.
pub fn label_for(model_id: &str) -> &str {
    MODELS
        .iter()
        .find(|model| model.id == model_id)
        .map(|model| model.label)
        .unwrap_or(model_id)
}
