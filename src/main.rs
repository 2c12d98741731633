use std::{env, path::PathBuf};

use bruin_menu::{fetch, resolve, store, CancelFlag};
use chrono::NaiveDate;

#[tokio::main(flavor = "current_thread")]
async fn main() -> core::result::Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));
    let days: i64 = env::var("DAYS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(6);
    let concurrency: usize = env::var("CONCURRENCY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(resolve::DEFAULT_CONCURRENCY);
    let start = env::var("START_DATE")
        .ok()
        .and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("interrupt received, finishing current items");
                cancel.cancel();
            }
        });
    }

    let client = fetch::make_client();
    log::info!("fetching menus for {days} days starting {start}");
    let (menus, ids) = fetch::collect_range(&client, fetch::date_iter(start, days), &cancel).await;
    log::info!(
        "collected {} dates, {} recipe ids, {} ingredient ids",
        menus.len(),
        ids.recipes.len(),
        ids.ingredients.len()
    );

    let recipes = resolve::resolve(&ids.recipes, concurrency, &cancel, |id| {
        fetch::recipe_json(&client, id)
    })
    .await;
    let ingredients = resolve::resolve(&ids.ingredients, concurrency, &cancel, |id| {
        fetch::ingredient_json(&client, id)
    })
    .await;
    log::info!(
        "resolved {}/{} recipes, {}/{} ingredients",
        recipes.len(),
        ids.recipes.len(),
        ingredients.len(),
        ids.ingredients.len()
    );

    store::save_json(data_dir.join("menu_data.json"), &menus).await?;
    store::save_json(data_dir.join("recipes.json"), &recipes).await?;
    store::save_json(data_dir.join("ingredients.json"), &ingredients).await?;
    log::info!("wrote menu data to {}", data_dir.display());
    Ok(())
}
