use eframe::egui;

use crate::common::SocialPost;

/// Bảng nguồn trích dẫn của câu trả lời mới nhất, kèm chỉ số tương tác.
pub fn render(ui: &mut egui::Ui, sources: &[SocialPost]) {
    ui.heading("Nguồn trích dẫn");
    ui.separator();

    if sources.is_empty() {
        ui.label("Chưa có bài viết nào được truy xuất");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for post in sources {
                render_post(ui, post);
                ui.separator();
            }
        });
}

fn render_post(ui: &mut egui::Ui, post: &SocialPost) {
    ui.horizontal(|ui| {
        ui.label(post.author.as_deref().unwrap_or("Ẩn danh"));
        if let Some(score) = post.score {
            ui.weak(format!("Score: {score:.3}"));
        }
    });

    ui.label(&post.noi_dung_bai_viet);

    ui.horizontal(|ui| {
        ui.weak(format!("👍 {}", post.like.unwrap_or(0)));
        ui.weak(format!("💬 {}", post.comment.unwrap_or(0)));
        ui.weak(format!("↗️ {}", post.share.unwrap_or(0)));
    });

    if !post.url.is_empty() {
        ui.hyperlink_to("Xem bài gốc", &post.url);
    }
}
