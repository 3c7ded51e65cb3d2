use eframe::egui;

use crate::models;

/// Câu hỏi mẫu cho nút "Dùng ví dụ".
const EXAMPLE_QUESTION: &str =
    "Hãy cho tôi biết những vấn đề sinh viên băn khoăn về phòng đào tạo?";

/// Vẽ thanh nhập liệu: bộ chọn model, ô nhập và nút gửi.
/// Trả về câu hỏi khi người dùng gửi; nút gửi bị khóa khi đang chờ.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    selected_model: &mut String,
    loading: bool,
) -> Option<String> {
    let mut send = false;

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("model_selector")
            .selected_text(models::label_for(selected_model))
            .show_ui(ui, |ui| {
                for model in models::MODELS {
                    ui.selectable_value(selected_model, model.id.to_string(), model.label);
                }
            });

        let response = ui.text_edit_singleline(input_text);
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }

        if ui
            .add_enabled(!loading, egui::Button::new("Gửi"))
            .clicked()
        {
            send = true;
        }

        if ui.button("Dùng ví dụ").clicked() {
            *input_text = EXAMPLE_QUESTION.to_string();
        }
    });

    if send && !loading && !input_text.trim().is_empty() {
        let question = input_text.trim().to_string();
        input_text.clear();
        return Some(question);
    }

    None
}
