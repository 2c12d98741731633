use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::scrape;

/// One `<option>` of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    pub value: String,
    pub label: String,
}

/// The page-automation capability the navigation automaton drives. The
/// rendering engine behind it is deliberately opaque; tests script it
/// in memory.
///
/// Selector strings are CSS, scoped to the whole page. Selection and read
/// failures surface as [`scrape::Error`] so the automaton can decide what
/// each one degrades.
#[async_trait]
pub trait PageDriver: Send + Sync {
    async fn open(&self, url: &Url) -> scrape::Result<()>;

    /// Blocks until `selector` matches at least one element.
    async fn wait_for(&self, selector: &str) -> scrape::Result<()>;

    async fn click(&self, selector: &str) -> scrape::Result<()>;

    async fn select_value(&self, selector: &str, value: &str) -> scrape::Result<()>;

    async fn select_label(&self, selector: &str, label: &str) -> scrape::Result<()>;

    /// All options of a select control, in document order.
    async fn options(&self, selector: &str) -> scrape::Result<Vec<SelectChoice>>;

    async fn read_text(&self, selector: &str) -> scrape::Result<String>;

    async fn read_attribute(&self, selector: &str, name: &str) -> scrape::Result<Option<String>>;

    async fn count(&self, selector: &str) -> scrape::Result<usize>;

    async fn inner_html(&self, selector: &str) -> scrape::Result<String>;

    /// Waits until the content under `selector` reflects the last committed
    /// selection, up to `timeout`. Returns `false` when the deadline passes
    /// first; the caller maps that to a `ContentTimeout`.
    async fn wait_stable(&self, selector: &str, timeout: Duration) -> scrape::Result<bool>;
}
