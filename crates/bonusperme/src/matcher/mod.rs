//! Eligibility matching: profile admission, per-benefit rules, ranking and the what-if comparison.
//!
//! The engine is pure. It reads an immutable catalog snapshot, clones the entries it matches and
//! takes the current time as an argument, so concurrent requests share nothing mutable.

mod amounts;
pub mod deadline;
mod engine;
pub(crate) mod profile;
mod regional;
pub mod router;
mod rules;
mod service;
mod simulate;

#[cfg(test)]
mod tests;

pub use engine::{match_benefits, MatchEngine, MatchPolicy, MatchResult};
pub use profile::{
    Employment, MaritalStatus, ProfileGuard, ProfileLimits, ProfileViolation, UserProfile,
};
pub use router::matcher_router;
pub use service::{MatchService, MatchServiceError};
pub use simulate::SimulationResult;
