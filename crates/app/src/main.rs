use std::fmt;
use std::sync::Arc;

use course_core::model::{Session, UserId};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ApiConfig, AppServices, AuthService, Clock, DashboardConfig, DashboardService, SessionService,
};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info,services=debug";
const WINDOW_TITLE: &str = "Learning Dashboard";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUserId { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUserId { raw } => write!(f, "invalid --user-id value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_session(&self) -> Option<Session> {
        self.services.initial_session()
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        self.services.dashboard()
    }
}

struct Args {
    db_url: String,
    user_id: Option<UserId>,
    auth_url: Option<String>,
    course_url: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--user-id <id>]");
    eprintln!("                             [--auth-url <url>] [--course-url <url>]");
    eprintln!("  cargo run -p app -- logout [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:dev.sqlite3");
    eprintln!("  --user-id 1");
    eprintln!("  --auth-url {}", services::api::DEFAULT_AUTH_BASE_URL);
    eprintln!("  --course-url {}", services::api::DEFAULT_COURSE_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  LEARN_DB_URL, LEARN_USER_ID, LEARN_AUTH_URL, LEARN_COURSE_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Logout,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "logout" => Some(Self::Logout),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("LEARN_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://dev.sqlite3".into(), normalize_sqlite_url);
        let mut user_id = None;
        let mut auth_url = None;
        let mut course_url = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--user-id" => {
                    let value = require_value(args, "--user-id")?;
                    let parsed = value
                        .parse::<UserId>()
                        .map_err(|_| ArgsError::InvalidUserId { raw: value.clone() })?;
                    user_id = Some(parsed);
                }
                "--auth-url" => auth_url = Some(require_value(args, "--auth-url")?),
                "--course-url" => course_url = Some(require_value(args, "--course-url")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            user_id,
            auth_url,
            course_url,
        })
    }

    /// Environment-derived URLs with any command-line overrides applied.
    fn api_config(&self) -> Result<ApiConfig, Box<dyn std::error::Error>> {
        let base = ApiConfig::from_env()?;
        if self.auth_url.is_none() && self.course_url.is_none() {
            return Ok(base);
        }

        let auth = self
            .auth_url
            .clone()
            .unwrap_or_else(|| base.auth_base_url().to_string());
        let course = self
            .course_url
            .clone()
            .unwrap_or_else(|| base.course_base_url().to_string());
        Ok(ApiConfig::new(&auth, &course)?)
    }

    fn dashboard_config(&self) -> DashboardConfig {
        let mut config = DashboardConfig::from_env();
        if let Some(user_id) = self.user_id {
            config.user_id = user_id;
        }
        config
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    // A second init (e.g. under a test runner) is harmless.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    info!(db = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let api = parsed.api_config()?;
            info!(
                auth = %api.auth_base_url(),
                course = %api.course_base_url(),
                "using backends"
            );
            let services = AppServices::new(&storage, &api, parsed.dashboard_config()).await?;

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(WINDOW_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Logout => {
            SessionService::new(Arc::clone(&storage.kv)).clear().await?;
            eprintln!("logged out (db={}).", parsed.db_url);
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn user_id_flag_overrides_default() {
        let args = parse(&["--user-id", "42"]).unwrap();
        assert_eq!(args.user_id, Some(UserId::new(42)));
        assert_eq!(args.dashboard_config().user_id, UserId::new(42));
    }

    #[test]
    fn bad_user_id_is_rejected() {
        let err = parse(&["--user-id", "abc"]).err().unwrap();
        assert!(matches!(err, ArgsError::InvalidUserId { .. }));
    }

    #[test]
    fn missing_flag_value_is_reported() {
        let err = parse(&["--auth-url"]).err().unwrap();
        assert_eq!(err.to_string(), "--auth-url requires a value");
    }

    #[test]
    fn unknown_argument_is_rejected() {
        let err = parse(&["--verbose"]).err().unwrap();
        assert!(matches!(err, ArgsError::UnknownArg(_)));
    }

    #[test]
    fn url_flags_override_backends() {
        let args = parse(&[
            "--auth-url",
            "http://auth.test",
            "--course-url",
            "http://course.test:8080",
        ])
        .unwrap();
        let config = args.api_config().unwrap();
        assert_eq!(config.auth_base_url().as_str(), "http://auth.test/");
        assert_eq!(config.course_base_url().as_str(), "http://course.test:8080/");
    }

    #[test]
    fn relative_sqlite_path_becomes_absolute() {
        let url = normalize_sqlite_url("sqlite:data/dev.sqlite3".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/dev.sqlite3"), "{url}");
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
    }

    #[test]
    fn memory_database_needs_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://x").is_err());
    }
}
