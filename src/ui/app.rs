use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{AgentCommand, AgentEvent};
use crate::config::AppConfig;
use crate::session::ChatSession;

use super::components::{chat_area, input_bar, source_panel};

pub struct ChatApp {
    session: ChatSession,
    input_text: String,
    selected_model: String,
    topk: u32,
    command_sender: mpsc::Sender<AgentCommand>,
    event_receiver: mpsc::Receiver<AgentEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        command_sender: mpsc::Sender<AgentCommand>,
        event_receiver: mpsc::Receiver<AgentEvent>,
    ) -> Self {
        Self {
            session: ChatSession::new(),
            input_text: String::new(),
            selected_model: config.default_model.clone(),
            topk: config.topk,
            command_sender,
            event_receiver,
        }
    }

    fn handle_agent_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                AgentEvent::AnswerReady { message, sources } => {
                    self.session.finish_request(message, sources);
                }
            }
        }
    }

    fn send_question(&mut self, question: String) {
        // Cờ loading của session chặn request thứ hai khi đang chờ.
        if !self.session.begin_request(question.clone()) {
            return;
        }

        let command = AgentCommand::AskQuestion {
            question,
            model_id: self.selected_model.clone(),
            topk: self.topk,
        };
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to agent worker: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_agent_events();

        egui::SidePanel::right("source_panel").show(ctx, |ui| {
            source_panel::render(ui, self.session.sources());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🤖 NEU-SCHOLAR");
            ui.separator();
            chat_area::render(ui, &self.session);

            ui.separator();
            if let Some(question) = input_bar::render(
                ui,
                &mut self.input_text,
                &mut self.selected_model,
                self.session.is_loading(),
            ) {
                self.send_question(question);
            }
        });

        ctx.request_repaint();
    }
}
