mod adapter;
mod config;
mod output;
mod progress;
mod settings;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use config::FileConfig;
use output::{Output, Verbosity};
use progress::{format_bytes, DownloadProgress};
use settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "relget")]
#[command(about = "Download a release asset from GitLab", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GitLab instance URL
    #[arg(long, env = "GITLAB_URL", value_name = "URL")]
    pub gitlab_url: Option<String>,

    /// Private token for the GitLab API
    #[arg(short = 't', long, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Proxy URL for all requests
    #[arg(long, env = "RELGET_PROXY", value_name = "URL")]
    pub proxy: Option<String>,

    /// Source archive format index (0=zip, 1=tar.gz, 2=tar.bz2, 3=tar)
    #[arg(long = "ext", default_value_t = 0, value_name = "INDEX")]
    pub ext: usize,

    /// Output file path
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Release tag to download
    #[arg(short = 'r', long, value_name = "TAG")]
    pub release: Option<String>,

    /// Project path, e.g. group/subgroup/project
    #[arg(short = 'p', long, value_name = "PATH")]
    pub project: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, env = "RELGET_INSECURE", value_parser = FalseyValueParser::new())]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "RELGET_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to a relget.toml config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not show a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Only print errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose > 0 {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    let output = Output::new(cli.verbosity());

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_path(path).map(Some),
        None => FileConfig::load_from_cwd(),
    };
    let file_config = match file_config {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    let settings = Settings::merge(&cli, file_config);
    if let Err(e) = settings.validate() {
        output.error(&format!("{:#}", e));
        return ExitCode::FAILURE;
    }

    if settings.token.is_none() {
        output.warning("no GitLab token given, only public projects can be downloaded");
    }

    let progress = Arc::new(DownloadProgress::new(
        !cli.no_progress && output.shows_progress(),
        &settings.output.display().to_string(),
    ));

    let service = match adapter::build_service(&settings, progress) {
        Ok(service) => service,
        Err(e) => {
            output.error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    output.info(&format!(
        "Downloading {} {} from {}",
        settings.project, settings.release, settings.gitlab_url
    ));

    match service.download_release(&settings.download_request()) {
        Ok(summary) => {
            output.verbose(&format!("Source: {}", summary.url));
            output.success(&format!(
                "Download completed successfully: {}",
                format_bytes(summary.bytes)
            ));
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
