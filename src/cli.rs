use crate::{
    batch, bench,
    client::ApiClient,
    config::Config,
    normalize,
    util::ensure_dir,
};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "patent-fetch")]
#[command(about = "Patent drawing downloader and endpoint latency benchmark")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./patent-fetch.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Normalize {
        publication_number: String,
    },
    List {
        publication_number: String,
    },
    Fetch {
        /// Publication numbers; falls back to --input, then to [batch].patents.
        publication_numbers: Vec<String>,
        /// File with one publication number per line ('#' starts a comment).
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Override [api].token.
        #[arg(long)]
        token: Option<String>,
    },
    Bench {},
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg_path = resolve_config_path(args.config.as_deref())?;
    let mut cfg = Config::load(&cfg_path)?;

    match &args.cmd {
        Command::Normalize { publication_number } => {
            let _guard = init_logging(&args, &cfg, None)?;
            let padded = normalize::pad_publication_number(publication_number)?;
            println!("{padded}");
            Ok(())
        }
        Command::List { publication_number } => {
            let _guard = init_logging(&args, &cfg, resolve_log_path(&cfg).as_deref())?;
            list(&cfg, publication_number)
        }
        Command::Fetch {
            publication_numbers,
            input,
            out_dir,
            token,
        } => {
            if let Some(token) = token {
                cfg.api.token = token.clone();
            }
            let _guard = init_logging(&args, &cfg, resolve_log_path(&cfg).as_deref())?;
            run_fetch(&cfg, publication_numbers, input.as_deref(), out_dir.as_deref())
        }
        Command::Bench {} => {
            let _guard = init_logging(&args, &cfg, resolve_log_path(&cfg).as_deref())?;
            bench::run(&cfg)
        }
    }
}

fn resolve_config_path(user: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = user {
        return Ok(p.to_path_buf());
    }
    let default = PathBuf::from("patent-fetch.toml");
    if default.exists() {
        Ok(default)
    } else {
        Ok(PathBuf::from("patent-fetch.example.toml"))
    }
}

fn init_logging(args: &Args, cfg: &Config, file_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stdout_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = file_path {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        ensure_dir(parent)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn resolve_log_path(cfg: &Config) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }

    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }

    Some(PathBuf::from(&cfg.output.dir).join("patent-fetch.log"))
}

fn list(cfg: &Config, pn: &str) -> Result<()> {
    let padded = normalize::pad_publication_number(pn)?;
    let client = ApiClient::new(cfg)?;
    let drawings = client.list_drawings(pn)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "publication_number": pn,
            "padded": padded,
            "drawings": drawings,
        }))?
    );
    Ok(())
}

fn run_fetch(
    cfg: &Config,
    positional: &[String],
    input: Option<&Path>,
    out_override: Option<&Path>,
) -> Result<()> {
    let patents = resolve_patents(cfg, positional, input)?;
    if patents.is_empty() {
        return Err(anyhow!(
            "no publication numbers given (args, --input, or [batch].patents)"
        ));
    }

    let out_dir = out_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&cfg.output.dir));

    let report = batch::run(cfg, &patents, &out_dir)?;

    if cfg.output.write_report {
        ensure_dir(&out_dir)?;
        let path = out_dir.join(&cfg.output.report_filename);
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("writing report: {}", path.display()))?;
    }

    if cfg.output.print_summary {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "patents": report.patents.len(),
                "skipped": report.skipped_count(),
                "saved": report.saved_count(),
                "failed": report.failed_count(),
            }))?
        );
    }

    Ok(())
}

fn resolve_patents(cfg: &Config, positional: &[String], input: Option<&Path>) -> Result<Vec<String>> {
    if !positional.is_empty() {
        return Ok(positional.to_vec());
    }

    if let Some(path) = input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading input list: {}", path.display()))?;
        return Ok(raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect());
    }

    Ok(cfg.batch.patents.clone())
}
