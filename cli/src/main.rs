//! grouptrust — run group WebID trust checks from the command line.

mod commands;

use anyhow::Context;
use clap::Parser;
use grouptrust_groups::{GroupTrustConfig, HttpGraphFetcher};
use grouptrust_utils::{init_logging, LogFormat};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "grouptrust", about = "Group WebID membership and link checks")]
struct Cli {
    /// Path to a TOML configuration file. CLI flags and env vars override it.
    #[arg(long, env = "GROUPTRUST_CONFIG")]
    config: Option<PathBuf>,

    /// This server's base URL, expected as solid:oidcIssuer in group documents.
    #[arg(long, env = "GROUPTRUST_BASE_URL")]
    base_url: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "GROUPTRUST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "GROUPTRUST_LOG_FORMAT")]
    log_format: Option<String>,

    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Evaluate an acl:agentGroup rule for an agent.
    #[command(name = "check-access")]
    CheckAccess {
        /// ACL document in N-Triples.
        #[arg(long)]
        acl: PathBuf,

        /// IRI of the rule node inside the ACL document.
        #[arg(long)]
        rule: String,

        /// WebID presented by the requester; omit for an anonymous request.
        #[arg(long)]
        agent: Option<String>,
    },

    /// Check whether a (group) WebID may be used with an account.
    #[command(name = "check-link")]
    CheckLink {
        #[arg(long)]
        web_id: String,

        #[arg(long)]
        account: String,
    },

    /// Print the effective configuration as TOML.
    #[command(name = "show-config")]
    ShowConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => GroupTrustConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GroupTrustConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    config.validate()?;

    let log_format: LogFormat = config
        .log_format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    init_logging(log_format, &config.log_level);

    let fetcher = HttpGraphFetcher::from_config(&config);
    let verdict = match cli.command {
        Command::CheckAccess { acl, rule, agent } => {
            commands::check_access(fetcher, &acl, &rule, agent.as_deref()).await?
        }
        Command::CheckLink { web_id, account } => {
            tracing::info!(base_url = %config.base_url, "checking link");
            commands::check_link(&config, fetcher, &web_id, &account).await?
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml_string()?);
            return Ok(ExitCode::SUCCESS);
        }
    };

    println!("{}", verdict.render(cli.json)?);
    Ok(if verdict.granted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
