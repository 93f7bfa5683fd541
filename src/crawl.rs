use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use url::Url;

use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::extract::extract_page_data;
use crate::filter::ScopeFilter;
use crate::results::PageData;
use crate::urls::normalize_url;

/// Starts an async site crawl and returns a receiver that yields PageData
/// as pages are extracted.
///
/// The receiver closes once the frontier drains or the page budget is
/// reached. Failures on individual pages are logged and skipped; only
/// setup problems (bad start URL, bad exclude pattern, client build) fail
/// the call itself.
pub async fn start(config: &CrawlConfig) -> Result<mpsc::Receiver<PageData>, CrawlError> {
    ::log::info!("starting crawl at {}", config.start_url);

    let root = Url::parse(&config.start_url).map_err(|source| CrawlError::InvalidStartUrl {
        url: config.start_url.clone(),
        source,
    })?;
    let filter = ScopeFilter::new(&root, config)?;
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let (result_tx, result_rx) = mpsc::channel::<PageData>(100);

    let coordinator = Coordinator {
        client,
        filter,
        start_url: config.start_url.clone(),
        max_concurrency: config.max_concurrency.max(1),
        max_pages: config.max_pages.max(1),
    };
    tokio::spawn(coordinator.run(result_tx));

    Ok(result_rx)
}

struct Coordinator {
    client: reqwest::Client,
    filter: ScopeFilter,
    start_url: String,
    max_concurrency: usize,
    max_pages: usize,
}

impl Coordinator {
    /// Drives the crawl to completion. All mutable crawl state (frontier,
    /// visited set, page budget) lives in this one task; fetch tasks only
    /// fetch and extract. Returning drops the result sender, which closes
    /// the channel consumers wait on.
    async fn run(self, result_tx: mpsc::Sender<PageData>) {
        let mut frontier = VecDeque::new();
        let mut visited = HashSet::new();
        let mut in_flight: JoinSet<(String, Result<PageData, CrawlError>)> = JoinSet::new();
        let mut pages_emitted = 0usize;

        visited.insert(normalize_url(&self.start_url));
        frontier.push_back(self.start_url.clone());

        loop {
            while in_flight.len() < self.max_concurrency {
                let Some(url) = frontier.pop_front() else {
                    break;
                };
                let client = self.client.clone();
                in_flight.spawn(async move {
                    let outcome = fetch_and_extract(&client, &url).await;
                    (url, outcome)
                });
            }

            let Some(joined) = in_flight.join_next().await else {
                // Frontier drained with nothing left in flight
                break;
            };

            match joined {
                Ok((url, Ok(page))) => {
                    for link in &page.outgoing_links {
                        self.consider(link, &mut frontier, &mut visited);
                    }

                    pages_emitted += 1;
                    ::log::info!(
                        "extracted {} ({} of {})",
                        url,
                        pages_emitted,
                        self.max_pages
                    );
                    if result_tx.send(page).await.is_err() {
                        ::log::debug!("result receiver dropped, stopping crawl");
                        break;
                    }
                    if pages_emitted >= self.max_pages {
                        ::log::info!("page budget reached, stopping crawl");
                        break;
                    }
                }
                Ok((url, Err(err))) => {
                    ::log::warn!("skipping {}: {}", url, err);
                }
                Err(err) => {
                    ::log::error!("fetch task failed: {}", err);
                }
            }
        }

        in_flight.abort_all();
        ::log::info!("crawl finished, {} pages extracted", pages_emitted);
    }

    /// Queue a discovered link if it is in scope and not yet seen. The
    /// visited set is keyed by dedup key, so different spellings of the
    /// same page are fetched once.
    fn consider(
        &self,
        link: &str,
        frontier: &mut VecDeque<String>,
        visited: &mut HashSet<String>,
    ) {
        // outgoing_links are absolute by construction; anything that still
        // fails to parse is not fetchable
        let Ok(parsed) = Url::parse(link) else {
            return;
        };
        if !self.filter.should_crawl(&parsed) {
            return;
        }
        if visited.insert(normalize_url(link)) {
            ::log::debug!("queuing {}", link);
            frontier.push_back(link.to_string());
        }
    }
}

/// Fetch one URL and run extraction on the body
async fn fetch_and_extract(client: &reqwest::Client, url: &str) -> Result<PageData, CrawlError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CrawlError::Status {
            url: url.to_string(),
            status,
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.contains("text/html") {
        return Err(CrawlError::NotHtml {
            url: url.to_string(),
            content_type,
        });
    }

    let body = response.text().await?;
    Ok(extract_page_data(&body, url)?)
}
