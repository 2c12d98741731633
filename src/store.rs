use std::path::Path;

use serde::Serialize;
use tokio::fs;

/// Writes `value` as pretty-printed JSON, creating parent directories as
/// needed. Failures here are the one run-level error of the pipeline.
pub async fn save_json(path: impl AsRef<Path>, value: &impl Serialize) -> crate::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let f = fs::File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await?;
    let mut f = f.into_std().await;
    serde_json::to_writer_pretty(&mut f, value).map_err(From::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_save_creates_parents_and_pretty_prints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("recipes.json");

        let details: BTreeMap<u64, Value> =
            BTreeMap::from([(101, json!({ "name": "Pasta Pomodoro" }))]);
        save_json(&path, &details).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        // Map keys stringify; the output stays readable.
        assert!(written.contains("\"101\""));
        assert!(written.contains('\n'));
        let round_trip: BTreeMap<u64, Value> = serde_json::from_str(&written).unwrap();
        assert_eq!(round_trip, details);
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        save_json(&path, &json!({ "a": [1, 2, 3] })).await.unwrap();
        save_json(&path, &json!({ "b": 1 })).await.unwrap();
        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({ "b": 1 }));
    }
}
