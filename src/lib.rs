#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Scrapes https://dining.ucla.edu to collect the menus of each residential
//! dining venue, and mirrors the backing JAMIX JSON API (menus, recipes,
//! ingredients by numeric id) into local JSON files.

use pretty_env_logger as _; // logger init lives in the binary

pub mod automaton;
pub mod calendar;
pub mod collect;
pub mod driver;
mod error;
pub mod fetch;
pub mod menu;
pub mod resolve;
pub mod scrape;
pub mod store;
pub mod venue;

pub use error::{Error, Result};

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Cooperative cancellation flag, checked between (date, meal) iterations
/// and between individual detail fetches. Work already completed when the
/// flag trips is kept.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
