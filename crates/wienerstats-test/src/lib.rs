//! wienerstats-test - Regression test framework for wienerstats
//!
//! This crate provides the shared pieces of the statistics regression tests:
//!
//! - [`RegParams`] - Counts checks, records failures and reports at cleanup
//! - [`SimpleRng`] - Reproducible pseudo-random sample streams
//! - [`StatsFixture`] - Max-size degraded/source buffers with a halo
//!
//! # Usage
//!
//! ```ignore
//! use wienerstats_test::{RegParams, SimpleRng, StatsFixture};
//!
//! let mut rp = RegParams::new("stats");
//! rp.compare_i64(0, m[0]);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixture;
mod params;
mod rng;

pub use error::{TestError, TestResult};
pub use fixture::{MAX_DATA_BLOCK, MAX_WIENER_BLOCK, StatsFixture};
pub use params::RegParams;
pub use rng::SimpleRng;
