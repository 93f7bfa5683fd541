use clap::Parser;
use page_glean::Crawl;
use page_glean::CrawlReport;
use page_glean::results::PageData;

mod args;
use args::{Args, OutputFormat};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting crawl of {}", args.url);

    // Build the crawl from the config file when given, from flags otherwise
    let crawl = match &args.config {
        Some(path) => match Crawl::new(&args.url).with_config_file(path) {
            Ok(crawl) => crawl,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Crawl::new(&args.url)
            .with_max_concurrency(args.concurrency)
            .with_max_pages(args.max_pages)
            .with_request_timeout(args.request_timeout),
    };

    // Start the crawl and get a receiver for pages
    let mut rx = match crawl.run().await {
        Ok(rx) => rx,
        Err(e) => {
            ::log::error!("Failed to start crawl: {}", e);
            std::process::exit(1);
        }
    };

    // Collect pages as they come in
    let mut pages: Vec<PageData> = Vec::new();
    let start_time = std::time::Instant::now();

    while let Some(page) = rx.recv().await {
        ::log::info!("Extracted page {}: {}", pages.len() + 1, page.url);
        ::log::debug!(
            "Page has {} links and {} images",
            page.outgoing_links.len(),
            page.image_urls.len()
        );
        pages.push(page);
    }

    let duration = start_time.elapsed();
    ::log::info!(
        "Crawl complete - extracted {} pages in {:.2} seconds",
        pages.len(),
        duration.as_secs_f64()
    );

    // Print the final report
    let report = CrawlReport::new(&args.url, pages);
    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                ::log::error!("Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        },
    }
}
