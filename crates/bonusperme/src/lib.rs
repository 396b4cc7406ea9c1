//! Benefit eligibility matching for Italian households.
//!
//! The crate is split along the life of a request: a [`catalog`] of benefit templates that is
//! refreshed out-of-band by the [`scraper`] and annotated by the [`linkcheck`] pass, and the
//! [`matcher`] that scores a validated questionnaire against an immutable catalog snapshot.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod linkcheck;
pub mod matcher;
pub mod scraper;
pub mod telemetry;
