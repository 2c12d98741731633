use std::{collections::BTreeMap, num::NonZeroU32, sync::OnceLock, time::Duration};

use chrono::NaiveDate;
use governor::{
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::InMemoryState,
};
use reqwest::Client;
use serde_json::Value;
use tracing::{instrument, Level};

use crate::collect::IdAccumulator;
use crate::CancelFlag;

static UPLOADS_ROOT: &str = "https://dining.ucla.edu/wp-content/uploads/jamix";

pub fn make_client() -> reqwest::Client {
    Client::builder()
        .gzip(true)
        .timeout(Duration::from_secs(30))
        .build()
        .expect("client creation should succeed")
}

static RATE_LIMIT: u32 = 10;
static DELAY_JITTER: u64 = 1;
static RATE_LIMITER: OnceLock<
    governor::RateLimiter<
        governor::state::NotKeyed,
        InMemoryState,
        QuantaClock,
        NoOpMiddleware<QuantaInstant>,
    >,
> = OnceLock::new();

async fn throttle() {
    let rate_limiter = RATE_LIMITER.get_or_init(|| {
        governor::RateLimiter::direct(governor::Quota::per_second(
            NonZeroU32::new(RATE_LIMIT).unwrap(),
        ))
    });
    let retry_jitter = governor::Jitter::new(Duration::ZERO, Duration::from_secs(DELAY_JITTER));
    rate_limiter.until_ready_with_jitter(retry_jitter).await;
}

async fn get_json(client: &Client, url: &str) -> crate::Result<Value> {
    let response = client.get(url).send().await?.error_for_status()?;
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(From::from)
}

/// Raw day-level menu payload, the input to id collection.
#[instrument(skip(client), fields(date = %date.format("%Y-%m-%d")), level = Level::TRACE)]
pub async fn menu_json(client: &Client, date: NaiveDate) -> crate::Result<Value> {
    let url = format!("{UPLOADS_ROOT}/menus/{}.json", date.format("%Y-%m-%d"));
    get_json(client, &url).await
}

#[instrument(skip(client), level = Level::TRACE)]
pub async fn recipe_json(client: &Client, id: u64) -> crate::Result<Value> {
    throttle().await;
    let url = format!("{UPLOADS_ROOT}/recipes/{id}.json");
    get_json(client, &url).await
}

#[instrument(skip(client), level = Level::TRACE)]
pub async fn ingredient_json(client: &Client, id: u64) -> crate::Result<Value> {
    throttle().await;
    let url = format!("{UPLOADS_ROOT}/ingredients/{id}.json");
    get_json(client, &url).await
}

pub fn date_iter(start: chrono::NaiveDate, count: i64) -> impl Iterator<Item = chrono::NaiveDate> {
    (0..count).map(move |x| start + chrono::Duration::days(x))
}

/// Fetches the raw menu payload for every date in the range, keeping the
/// payloads and accumulating the recipe/ingredient ids they reference. A
/// date that fails to fetch or parse is logged and skipped; the range
/// continues.
pub async fn collect_range(
    client: &Client,
    dates: impl Iterator<Item = NaiveDate>,
    cancel: &CancelFlag,
) -> (BTreeMap<NaiveDate, Value>, IdAccumulator) {
    let mut menus = BTreeMap::new();
    let mut ids = IdAccumulator::new();
    for date in dates {
        if cancel.is_cancelled() {
            break;
        }
        match menu_json(client, date).await {
            Ok(payload) => {
                ids.collect(&payload);
                menus.insert(date, payload);
            }
            Err(e) => log::warn!("no menu data for {date}: {e}"),
        }
    }
    (menus, ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_iter() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let dates: Vec<NaiveDate> = date_iter(start, 3).collect();
        assert_eq!(
            dates,
            vec![
                start,
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            ]
        );
    }
}
