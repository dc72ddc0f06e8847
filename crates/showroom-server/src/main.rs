//! showroom: chat endpoint for the dealer site's assistant widget.
//!
//! Loads configuration and credentials, then serves the chat route. The
//! auxiliary subcommands print the tool schema and manage the config file.

mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use showroom_assistant::catalog_tool;
use showroom_common::ShowroomError;
use showroom_config::{toml_loader, Credentials, ShowroomConfig};
use showroom_server::{build_router, build_state};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ServeArgs};

const CRATE_TARGETS: [&str; 5] = [
    "showroom",
    "showroom_server",
    "showroom_assistant",
    "showroom_catalog",
    "showroom_config",
];

/// Merge `KEY=value` lines from a `.env` file into the environment.
///
/// Variables already set win. Runs before the async runtime starts.
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/showroom-server/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim().trim_start_matches("export ").trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var_os(key).is_none() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_tracing(level: &str) {
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&directives))
        .unwrap_or_else(|_| EnvFilter::new("showroom_server=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    load_dotenv();
    let cli = cli::parse();

    match cli.command {
        Some(Command::ToolSchema) => print_tool_schema(),
        Some(Command::InitConfig { force }) => init_config(cli.config.as_deref(), force),
        Some(Command::CheckConfig) => check_config(cli.config.as_deref()),
        Some(Command::Serve(args)) => serve(cli.config.as_deref(), cli.log_level, args),
        None => serve(cli.config.as_deref(), cli.log_level, ServeArgs::default()),
    }
}

fn print_tool_schema() -> ExitCode {
    match serde_json::to_string_pretty(&catalog_tool().to_openai_tool()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to serialize tool schema: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_config(explicit: Option<&Path>, force: bool) -> ExitCode {
    let path = toml_loader::resolve_config_path(explicit);
    if path.exists() && !force {
        eprintln!("{} already exists (use --force to overwrite)", path.display());
        return ExitCode::FAILURE;
    }
    match toml_loader::create_default_config(&path) {
        Ok(()) => {
            println!("wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn check_config(explicit: Option<&Path>) -> ExitCode {
    let path = toml_loader::resolve_config_path(explicit);
    let result = showroom_config::load_config(explicit).and_then(|config| {
        Credentials::from_env()?;
        Ok(config)
    });
    match result {
        Ok(config) => {
            println!("{}: ok", path.display());
            println!("{}", showroom_config::config_to_json(&config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", path.display());
            ExitCode::FAILURE
        }
    }
}

fn serve(explicit: Option<&Path>, log_level: Option<String>, args: ServeArgs) -> ExitCode {
    let config = showroom_config::load_config(explicit);
    let level = log_level.unwrap_or_else(|| match &config {
        Ok(config) => config.logging.level.as_directive().to_string(),
        Err(_) => "info".to_string(),
    });
    init_tracing(&level);

    let result = config
        .map_err(ShowroomError::from)
        .and_then(|mut config| {
            if let Some(host) = args.host {
                config.server.host = host;
            }
            if let Some(port) = args.port {
                config.server.port = port;
            }
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(run_server(config))
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("showroom failed to start: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_server(config: ShowroomConfig) -> Result<(), ShowroomError> {
    let credentials = Credentials::from_env()?;
    tracing::info!(
        "showroom v{} starting (assistant {})",
        env!("CARGO_PKG_VERSION"),
        credentials.assistant_id
    );

    let state = build_state(&config, credentials)?;
    let app = build_router(state, &config.server.chat_path);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        chat_path = %config.server.chat_path,
        budget_ms = config.assistant.budget_ms,
        "showroom listening on {addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
