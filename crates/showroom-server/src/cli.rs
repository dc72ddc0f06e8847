use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Showroom chat assistant: HTTP bridge between the site widget and the assistant.
#[derive(Parser, Debug)]
#[command(name = "showroom", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve(ServeArgs),
    /// Print the function definition to register on the assistant.
    ToolSchema,
    /// Load and validate the configuration, then exit.
    CheckConfig,
    /// Write a documented default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind, overriding `[server] host`.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overriding `[server] port`.
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["showroom"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_overrides_and_global_flags() {
        let cli = Cli::try_parse_from([
            "showroom",
            "serve",
            "--port",
            "3000",
            "--config",
            "/etc/showroom.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/etc/showroom.toml")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(3000));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn init_config_force_flag() {
        let cli = Cli::try_parse_from(["showroom", "init-config", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Command::InitConfig { force: true })));
    }
}
