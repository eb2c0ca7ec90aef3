use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use cybersearch::{
    HttpSearchService, OfflineSearchService, SearchConfig, SearchService, SessionController,
    config::{DEFAULT_BACKEND_URL, DEFAULT_REQUEST_TIMEOUT_MS},
    format_search_result,
    interactive_ratatui::InteractiveSearch,
    telemetry::{self, LogFormat},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "cybersearch",
    version,
    about = "Privacy-focused web search in the terminal",
    long_about = None
)]
struct Cli {
    /// Run a single search, print the results and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Output format for --query
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show full snippets without truncation
    #[arg(long)]
    full_text: bool,

    /// Check the backend health endpoint and exit
    #[arg(long, conflicts_with = "query")]
    health: bool,

    /// Serve results from the built-in cybersecurity dataset instead of the backend
    #[arg(long)]
    offline: bool,

    /// Go straight to the search screen
    #[arg(long)]
    skip_boot: bool,

    /// Base URL of the search backend (also read from BACKEND_URL)
    #[arg(long, env = "CYBERSEARCH_BACKEND_URL")]
    backend_url: Option<String>,

    /// Bound on a single search call, in milliseconds
    #[arg(long, env = "CYBERSEARCH_TIMEOUT_MS", default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Log file used while the interactive screen owns the terminal
    #[arg(long, env = "CYBERSEARCH_LOG_FILE", default_value = "cybersearch.log")]
    log_file: PathBuf,

    /// Log line format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    JsonL,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let backend_url = self
            .backend_url
            .clone()
            .or_else(|| std::env::var("BACKEND_URL").ok())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let config = SearchConfig::new(&backend_url, Duration::from_millis(self.timeout_ms))
            .context("Invalid search configuration")?;
        Ok(config)
    }

    fn search_service(&self, config: &SearchConfig) -> Result<Arc<dyn SearchService>> {
        if self.offline {
            return Ok(Arc::new(OfflineSearchService::new()));
        }
        let service = HttpSearchService::new(config).context("Failed to build HTTP client")?;
        Ok(Arc::new(service))
    }
}

fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let interactive = cli.query.is_none() && !cli.health;
    if interactive {
        telemetry::init_file_tracing(&cli.log_file, cli.log_format)?;
    } else {
        telemetry::init_tracing(cli.log_format);
    }

    let config = cli.search_config()?;
    let service = cli.search_service(&config)?;
    info!(
        backend = %config.backend_base_url,
        timeout_ms = config.request_timeout.as_millis() as u64,
        offline = cli.offline,
        "starting cybersearch"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    if cli.health {
        return run_health(&runtime, service.as_ref());
    }

    if let Some(query) = cli.query.as_deref() {
        return run_query(&runtime, service, &config, query, &cli);
    }

    let mut interactive =
        InteractiveSearch::new(service, &config, runtime.handle().clone(), cli.skip_boot);
    interactive.run()
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn run_health(runtime: &Runtime, service: &dyn SearchService) -> Result<()> {
    let status = runtime
        .block_on(service.health())
        .context("Health check failed")?;

    println!("{}", serde_json::to_string_pretty(&status)?);
    if !status.is_healthy() {
        bail!("backend reported status {:?}", status.status);
    }
    Ok(())
}

fn run_query(
    runtime: &Runtime,
    service: Arc<dyn SearchService>,
    config: &SearchConfig,
    query: &str,
    cli: &Cli,
) -> Result<()> {
    let mut controller = SessionController::new(service, config, runtime.handle().clone());
    if !controller.submit(query) {
        bail!("Query must not be blank");
    }

    let start = Instant::now();
    let pb = spinner("Scanning secure networks...");
    runtime.block_on(controller.next_resolution());
    pb.finish_and_clear();
    let duration = start.elapsed();

    let view = controller.view();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            if view.results.is_empty() {
                println!("No results found for \"{}\". Try different keywords.", view.query);
            } else {
                println!("Search Results ({} found)\n", view.results.len());
                for result in view.results {
                    println!(
                        "{}",
                        format_search_result(result, !cli.no_color, cli.full_text)
                    );
                }
                eprintln!("\n⏱️  Search completed anonymously in {}ms", duration.as_millis());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": view.query,
                "results": view.results,
                "total_results": view.results.len(),
                "is_fallback": view.is_fallback,
                "duration_ms": duration.as_millis() as u64,
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(&mut handle)?;
        }
        OutputFormat::JsonL => {
            for result in view.results {
                serde_json::to_writer(&mut handle, result)?;
                writeln!(&mut handle)?;
            }
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": view.query,
                    "total_results": view.results.len(),
                    "is_fallback": view.is_fallback,
                    "duration_ms": duration.as_millis() as u64,
                }
            });
            serde_json::to_writer(&mut handle, &metadata)?;
            writeln!(&mut handle)?;
        }
    }

    Ok(())
}
