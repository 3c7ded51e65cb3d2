mod agent;
mod common;
mod config;
mod models;
mod session;
mod ui;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::sync::mpsc;

use agent::{AgentClient, AgentWorker, REQUEST_FAILED_MESSAGE};
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "scholar_chat",
    version,
    about = "Chat client for the scholar social QA agent"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Agent endpoint override (beats AGENT_API and the config file)
    #[arg(long, value_name = "URL")]
    api: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone)]
enum Mode {
    /// Ask a single question from the terminal (no UI)
    Ask {
        question: String,
        /// Model id sent verbatim to the agent
        #[arg(long)]
        model: Option<String>,
        /// Number of posts the backend should retrieve
        #[arg(long)]
        topk: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let env_endpoint = std::env::var(config::ENDPOINT_ENV).ok();
    let endpoint = config::resolve_endpoint(
        cli.api.as_deref(),
        env_endpoint.as_deref(),
        &app_config,
    );
    let client = AgentClient::new(endpoint);

    if let Some(Mode::Ask {
        question,
        model,
        topk,
    }) = cli.mode
    {
        let model = model.unwrap_or_else(|| app_config.default_model.clone());
        let topk = topk.unwrap_or(app_config.topk);
        run_one_question(client, &question, &model, topk).await;
        return Ok(());
    }

    run_chat_app(client, app_config).await
}

/// Chế độ một câu hỏi: gọi API, chuẩn hóa rồi in ra terminal.
async fn run_one_question(client: AgentClient, question: &str, model_id: &str, topk: u32) {
    match client.ask(question, model_id, topk).await {
        Ok(payload) => {
            let answer = agent::normalize::normalize(&payload);
            println!("{}", answer.text);

            if !answer.references.is_empty() {
                println!();
                println!("Tham khảo:");
                for reference in &answer.references {
                    println!("- {} ({})", reference.title, reference.url);
                }
            }
        }
        Err(err) => {
            log::error!("Agent request failed: {err}");
            println!("{REQUEST_FAILED_MESSAGE}");
        }
    }
}

async fn run_chat_app(
    client: AgentClient,
    app_config: config::AppConfig,
) -> Result<(), eframe::Error> {
    log::info!("Client started with endpoint {}", client.endpoint());

    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Agent
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Agent -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy Agent Worker (Chạy ngầm)
    tokio::spawn(async move {
        AgentWorker::new(client, event_tx, cmd_rx).run().await;
    });

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "NEU Scholar",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
