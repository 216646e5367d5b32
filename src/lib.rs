//! siteup - check site reachability with a strict redirect policy
//!
//! A site is considered reachable only when the requested URL answers a
//! direct 2xx response. Redirects are never followed: any 3xx answer is a
//! failure, regardless of where it points. This makes `siteup` useful for
//! asserting that the *exact* address you published is the one serving
//! content, not an alias of it.
//!
//! # Example
//!
//! ```no_run
//! use siteup::checker::SiteChecker;
//! use siteup::config::Config;
//! use siteup::core::types::CheckTarget;
//!
//! # async fn run() -> siteup::core::error::Result<()> {
//! let target = CheckTarget::parse("http://www.bing.com/")?;
//! let checker = SiteChecker::default();
//! let result = checker.check(&target, &Config::default()).await?;
//! assert!(result.is_ok());
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod config;
pub mod core;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use checker::{CheckResult, CheckSites, CheckStatus, SiteChecker};
pub use config::Config;
pub use core::error::{Result, SiteUpError};
pub use core::types::{CheckTarget, TargetError};
