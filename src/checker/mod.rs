//! Site checking logic
//!
//! This module performs the HTTP checks and classifies each outcome
//! under the strict redirect policy.

pub mod site;

// Re-export commonly used items
pub use site::{CheckResult, CheckSites, CheckStatus, SiteChecker};
