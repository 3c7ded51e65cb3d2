use eframe::egui;

use crate::common::{Message, Role};
use crate::models;
use crate::session::ChatSession;

pub fn render(ui: &mut egui::Ui, session: &ChatSession) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in session.messages() {
                render_message(ui, message);
            }

            if session.is_loading() {
                ui.weak("Đang suy nghĩ...");
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    match message.role {
        Role::User => {
            ui.label(egui::RichText::new(format!("Bạn: {}", message.content)).strong());
        }
        Role::Assistant => {
            let model = message.model.as_deref().unwrap_or("assistant");
            ui.label(egui::RichText::new(models::label_for(model)).weak());
            ui.label(&message.content);

            if !message.references.is_empty() {
                ui.label(egui::RichText::new("📚 Tham khảo:").strong());
                for reference in &message.references {
                    let title = if reference.title.is_empty() {
                        shorten_url(&reference.url)
                    } else {
                        reference.title.clone()
                    };
                    ui.hyperlink_to(title, &reference.url);
                }
            }
        }
    }
    ui.add_space(8.0);
}

/// Rút gọn URL làm tiêu đề khi reference không có title.
fn shorten_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{host}/..."),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_shortened_to_hostname() {
        assert_eq!(
            shorten_url("https://facebook.com/groups/neu/posts/123"),
            "facebook.com/..."
        );
    }

    #[test]
    fn invalid_url_kept_verbatim() {
        assert_eq!(shorten_url("not a url"), "not a url");
    }
}
