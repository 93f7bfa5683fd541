use clap::Parser;
use page_glean::Crawl;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL to crawl
    #[arg(short, long)]
    url: String,

    /// JSON configuration string
    #[arg(long)]
    config: Option<String>,

    /// Path to JSON configuration file
    #[arg(long)]
    config_file: Option<String>,

    /// Maximum concurrency level
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Maximum number of pages to extract
    #[arg(short, long)]
    max_pages: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    println!("Starting crawl of URL: {}", args.url);

    // Create a Crawl builder rooted at the URL
    let mut crawl = Crawl::new(&args.url);

    // Apply configuration from file if specified
    if let Some(config_file) = args.config_file {
        println!("Loading configuration from file: {}", config_file);
        crawl = crawl.with_config_file(config_file)?;
    }

    // Apply configuration from string if specified (overrides file config)
    if let Some(config_str) = args.config {
        println!("Applying configuration from string");
        crawl = crawl.with_config_str(&config_str)?;
    }

    // Apply command-line overrides
    if let Some(concurrency) = args.concurrency {
        println!("Overriding max concurrency: {}", concurrency);
        crawl = crawl.with_max_concurrency(concurrency);
    }

    if let Some(max_pages) = args.max_pages {
        println!("Overriding max pages: {}", max_pages);
        crawl = crawl.with_max_pages(max_pages);
    }

    if let Some(request_timeout) = args.request_timeout {
        println!("Overriding request timeout: {}s", request_timeout);
        crawl = crawl.with_request_timeout(request_timeout);
    }

    // Start the crawling process
    let mut rx = crawl.run().await?;

    // Process pages as they come in
    let mut pages_extracted = 0;
    let start_time = std::time::Instant::now();

    while let Some(page) = rx.recv().await {
        pages_extracted += 1;
        println!("Received page {}: {}", pages_extracted, page.url);
        println!("  h1: {}", page.h1);
        println!(
            "  {} links, {} images",
            page.outgoing_links.len(),
            page.image_urls.len()
        );
    }

    let duration = start_time.elapsed();
    println!(
        "Crawl complete. Extracted {} pages in {:.2} seconds.",
        pages_extracted,
        duration.as_secs_f64()
    );

    Ok(())
}
