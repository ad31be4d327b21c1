mod commands;
mod diagnostics;
mod session;

use anyhow::Context;
use clap::Parser;
use lingogi_core::{
    config::{self, LingogiConfig},
    shellexpand, AuthSnapshot, UserProfile,
};
use lingogi_i18n::LocaleCatalog;
use lingogi_prefs::open_storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use session::{Session, SessionContext};

#[derive(Parser)]
#[command(
    name = "lingogi",
    version,
    about = "Lingogi — language preferences and locale fallback"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Signed-in user profile as JSON. Omit to run signed out.
    #[arg(long, global = true)]
    profile: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _log_guard = init_tracing(&cfg.lingogi)?;

    let locales_dir = cfg.i18n.locales_dir.as_deref().map(shellexpand);
    let catalog = Arc::new(LocaleCatalog::load(
        cfg.i18n.base_language,
        locales_dir.as_deref().map(Path::new),
    )?);
    let storage = open_storage(&cfg.storage);

    let auth = match &cli.profile {
        Some(json) => {
            let user: UserProfile =
                serde_json::from_str(json).context("--profile must be a user profile JSON object")?;
            AuthSnapshot::signed_in(user)
        }
        None => AuthSnapshot::anonymous(),
    };
    let client_locale = cli
        .command
        .client_locale()
        .map(str::to_string)
        .or_else(sys_locale::get_locale);

    let mut session = Session::init(
        SessionContext {
            storage,
            catalog,
            diagnostics: &cfg.diagnostics,
            client_locale: client_locale.as_deref(),
        },
        auth,
    );
    let result = commands::handle(cli.command, &mut session);
    session.teardown().await;

    println!("{}", result?);
    Ok(())
}

/// Install the tracing subscriber: stderr always, plus a log file when
/// configured. The returned guard must live until exit to flush the file.
fn init_tracing(cfg: &LingogiConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let Some(log_file) = &cfg.log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .init();
        return Ok(None);
    };

    let path = log_path(&cfg.data_dir, log_file);
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    let file_name = path
        .file_name()
        .context("log_file must name a file")?
        .to_owned();
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(Some(guard))
}

/// Relative log paths live under the data directory.
fn log_path(data_dir: &str, log_file: &str) -> PathBuf {
    let file = PathBuf::from(shellexpand(log_file));
    if file.is_absolute() {
        file
    } else {
        PathBuf::from(shellexpand(data_dir)).join(file)
    }
}
