use clap::Parser;
use page_glean::Crawl;
use page_glean::config::CrawlConfig;
use std::error::Error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to crawl configuration file
    #[arg(short = 'f', long)]
    config: String,

    /// Override max concurrency
    #[arg(short, long)]
    concurrency: Option<usize>,

    /// Override max pages
    #[arg(short, long)]
    max_pages: Option<usize>,

    /// Override request timeout in seconds
    #[arg(short, long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration from file
    let config = CrawlConfig::from_file(&args.config)?;

    // Print the loaded configuration (for debugging)
    println!("Loaded crawl configuration:");
    println!("  Start URL: {}", config.start_url);
    println!("  Max concurrency: {}", config.max_concurrency);
    println!("  Max pages: {}", config.max_pages);
    println!("  Allow external hosts: {}", config.allow_external);
    println!(
        "  Number of exclude patterns: {}",
        config.exclude_patterns.len()
    );

    // Create a Crawl builder from the configuration
    let mut crawl = Crawl::new(&config.start_url).with_config(config);

    // Apply overrides if specified
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

    // Start the crawl
    let mut rx = crawl.run().await?;

    // Process pages as they come in
    let mut pages_extracted = 0;
    let start_time = std::time::Instant::now();

    while let Some(page) = rx.recv().await {
        pages_extracted += 1;
        println!("Received page {}: {}", pages_extracted, page.url);
    }

    let duration = start_time.elapsed();
    println!(
        "Crawl complete. Extracted {} pages in {:.2} seconds.",
        pages_extracted,
        duration.as_secs_f64()
    );

    Ok(())
}
