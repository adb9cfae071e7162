use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{GeneratorConfig, HttpQuestionSource, QuizLoopService, QuizParamsService};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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
    quiz_loop: Arc<QuizLoopService>,
    quiz_params: Arc<QuizParamsService>,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn quiz_params(&self) -> Arc<QuizParamsService> {
        Arc::clone(&self.quiz_params)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    generator: GeneratorConfig,
    log_filter: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://127.0.0.1:5000");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment (a .env file is loaded when present):");
    eprintln!("  QUIZ_API_BASE_URL, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        generator: GeneratorConfig,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            generator,
            log_filter: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    let trimmed = value.trim();
                    if trimmed.is_empty() || !trimmed.starts_with("http") {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.generator = GeneratorConfig::new(trimmed);
                }
                "--log" => {
                    parsed.log_filter = Some(require_value(args, "--log")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn init_tracing(log_filter: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    // An explicit --log wins over RUST_LOG.
    let filter = match log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, GeneratorConfig::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing(parsed.log_filter.as_deref())?;

    let storage = Storage::in_memory();
    let quiz_params = QuizParamsService::new(Arc::clone(&storage.session));
    let source = Arc::new(HttpQuestionSource::new(parsed.generator));
    tracing::info!(endpoint = %source.config().endpoint(), "question generator configured");
    let quiz_loop = Arc::new(QuizLoopService::new(source, quiz_params.clone()));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop,
        quiz_params: Arc::new(quiz_params),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(ui::APP_TITLE)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
