use serde::Serialize;

/// A single menu item. `calories` is `None` when the source text carried no
/// parsable count; zero is a real count, not an unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dish {
    pub name: String,
    pub calories: Option<u32>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_null_calories() {
        let dish = Dish {
            name: "Seasonal Fruit".to_string(),
            calories: None,
            tags: vec!["Vegan".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&dish).unwrap(),
            serde_json::json!({ "name": "Seasonal Fruit", "calories": null, "tags": ["Vegan"] })
        );
    }
}
