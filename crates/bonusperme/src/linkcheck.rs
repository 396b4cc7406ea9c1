//! Liveness checks for the official links shown next to each benefit.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use futures::{stream, StreamExt};
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::redirect;
use serde::Serialize;

use crate::catalog::BenefitRecord;
use crate::config::LinkCheckConfig;

const BROWSER_AGENT: &str = "Mozilla/5.0 (compatible; BonusPerMe/1.0; +https://bonusperme.it)";
const LANGUAGE: &str = "it-IT,it;q=0.9";
const MAX_REDIRECTS: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum LinkCheckError {
    #[error("link checker client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Outcome of one HEAD probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub id: String,
    pub url: String,
    pub alive: bool,
    pub status: Option<u16>,
}

pub struct LinkChecker {
    client: reqwest::Client,
    concurrency: usize,
}

impl LinkChecker {
    pub fn new(config: &LinkCheckConfig) -> Result<Self, LinkCheckError> {
        // Past the redirect budget the last 3xx answer is kept and counts as alive.
        let policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() >= MAX_REDIRECTS {
                attempt.stop()
            } else {
                attempt.follow()
            }
        });
        let client = reqwest::Client::builder()
            .timeout(non_zero(config.request_timeout))
            .redirect(policy)
            .build()?;

        Ok(Self {
            client,
            concurrency: config.concurrency.max(1),
        })
    }

    /// Probe a single URL. Transport failures surface as `None`.
    pub async fn check(&self, url: &str) -> Option<u16> {
        let response = self
            .client
            .head(url)
            .header(USER_AGENT, BROWSER_AGENT)
            .header(ACCEPT_LANGUAGE, LANGUAGE)
            .send()
            .await;

        match response {
            Ok(response) => Some(response.status().as_u16()),
            Err(error) => {
                tracing::debug!(url, error = %error, "link probe failed");
                None
            }
        }
    }

    /// Probe every non-empty official link, at most `concurrency` at a time.
    pub async fn check_all(&self, records: &[BenefitRecord]) -> Vec<LinkReport> {
        let targets: Vec<(String, String)> = records
            .iter()
            .filter(|record| !record.official_link.trim().is_empty())
            .map(|record| (record.id.clone(), record.official_link.trim().to_string()))
            .collect();

        let reports: Vec<LinkReport> = stream::iter(targets)
            .map(|(id, url)| async move {
                let status = self.check(&url).await;
                LinkReport {
                    alive: status.is_some_and(is_alive),
                    id,
                    url,
                    status,
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let broken = reports.iter().filter(|report| !report.alive).count();
        tracing::info!(checked = reports.len(), broken, "link check completed");
        reports
    }
}

fn is_alive(status: u16) -> bool {
    (200..400).contains(&status)
}

fn non_zero(timeout: Duration) -> Duration {
    if timeout.is_zero() {
        Duration::from_secs(1)
    } else {
        timeout
    }
}

/// Copy of `records` with verification flags from `reports`; unchecked entries are left as-is.
pub fn annotate(
    records: &[BenefitRecord],
    reports: &[LinkReport],
    today: NaiveDate,
) -> Vec<BenefitRecord> {
    let by_id: HashMap<&str, &LinkReport> = reports
        .iter()
        .map(|report| (report.id.as_str(), report))
        .collect();

    records
        .iter()
        .map(|record| {
            let mut record = record.clone();
            if let Some(report) = by_id.get(record.id.as_str()) {
                record.link_verified = Some(report.alive);
                record.link_verified_on = Some(today);
                if !report.alive {
                    tracing::warn!(
                        bonus_id = %record.id,
                        url = %report.url,
                        status = ?report.status,
                        fallback = %record.search_link,
                        "official link broken"
                    );
                }
            }
            record
        })
        .collect()
}
