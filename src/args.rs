use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-glean")]
#[command(about = "Crawler that extracts headings, paragraphs, links and images from a site")]
#[command(version)]
pub struct Args {
    /// URL to start crawling from
    pub url: String,

    /// Number of concurrent page fetches
    #[arg(short, long, default_value_t = 4)]
    pub concurrency: usize,

    /// Maximum number of pages to extract before stopping
    #[arg(short, long, default_value_t = 100)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout: u64,

    /// Output format for the final report
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// JSON configuration file; its tuning options replace the flags above
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
