//! Periodic refresh of the live catalog from public sources.

pub mod enrich;
pub mod parse;
pub mod sources;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::catalog::{builtin, BenefitRecord, CatalogCache, SourceStatus};
use crate::config::{LinkCheckConfig, ScraperConfig};
use crate::linkcheck::{self, LinkCheckError, LinkChecker};

pub use sources::{default_sources, Source, SourceKind};

const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const MIN_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error(transparent)]
    LinkCheck(#[from] LinkCheckError),
}

/// Counters from one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub scraped: usize,
    pub published: usize,
    pub broken_links: Option<usize>,
}

pub struct Scraper {
    client: reqwest::Client,
    sources: Vec<Source>,
    cache: Arc<CatalogCache>,
    config: ScraperConfig,
    link_checker: Option<LinkChecker>,
}

impl Scraper {
    pub fn new(
        cache: Arc<CatalogCache>,
        config: &ScraperConfig,
        linkcheck: &LinkCheckConfig,
    ) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout.max(Duration::from_secs(1)))
            .user_agent(concat!("BonusPerMe/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let link_checker = if linkcheck.enabled {
            Some(LinkChecker::new(linkcheck)?)
        } else {
            None
        };

        Ok(Self {
            client,
            sources: default_sources(),
            cache,
            config: config.clone(),
            link_checker,
        })
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn interval(&self) -> Duration {
        self.config.interval.max(MIN_INTERVAL)
    }

    /// Fetch every source, merge with the curated catalog and publish the result.
    ///
    /// Source failures are recorded in the cache status and never abort the cycle.
    pub async fn run_cycle(&self) -> CycleReport {
        tracing::info!(sources = self.sources.len(), "scrape cycle started");
        let mut scraped: Vec<BenefitRecord> = Vec::new();
        let mut sources_ok = 0;
        let mut sources_failed = 0;

        for (index, source) in self.sources.iter().enumerate() {
            if index > 0 && !self.config.source_delay.is_zero() {
                tokio::time::sleep(self.config.source_delay).await;
            }

            let status = match self.scrape_source(source).await {
                Ok(found) => {
                    sources_ok += 1;
                    tracing::info!(source = %source.name, found = found.len(), "source scraped");
                    let status = SourceStatus {
                        last_fetch: Utc::now(),
                        success: true,
                        bonus_found: found.len(),
                        error: found.is_empty().then(|| "no bonuses found".to_string()),
                    };
                    scraped.extend(found);
                    status
                }
                Err(error) => {
                    sources_failed += 1;
                    tracing::warn!(source = %source.name, url = %source.url, error = %error, "source fetch failed");
                    SourceStatus {
                        last_fetch: Utc::now(),
                        success: false,
                        bonus_found: 0,
                        error: Some(error.to_string()),
                    }
                }
            };
            self.cache.record_source(&source.name, status);
        }

        let now = Utc::now();
        let scraped_count = scraped.len();
        let mut merged = enrich::merge(scraped, &builtin(), now.date_naive());

        let mut broken_links = None;
        if let Some(checker) = &self.link_checker {
            let reports = checker.check_all(&merged).await;
            broken_links = Some(reports.iter().filter(|report| !report.alive).count());
            merged = linkcheck::annotate(&merged, &reports, now.date_naive());
        }

        let published = self.cache.publish(merged, now);
        CycleReport {
            sources_ok,
            sources_failed,
            scraped: scraped_count,
            published,
            broken_links,
        }
    }

    async fn scrape_source(&self, source: &Source) -> Result<Vec<BenefitRecord>, ScrapeError> {
        let html = self.fetch(&source.url).await?;
        let mut found = parse::extract_benefits(&html, source.authority());
        for record in &mut found {
            record.official_link = parse::absolutize(&source.url, &record.official_link);
            record.source_url = Some(source.url.clone());
        }
        Ok(found)
    }

    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            let room = MAX_BODY_BYTES - body.len();
            if chunk.len() >= room {
                body.extend_from_slice(&chunk[..room]);
                break;
            }
            body.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Run a cycle now and then once per interval until the runtime shuts down.
    pub fn spawn(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let report = self.run_cycle().await;
                tracing::info!(
                    ok = report.sources_ok,
                    failed = report.sources_failed,
                    published = report.published,
                    "scrape cycle finished"
                );
            }
        })
    }
}
