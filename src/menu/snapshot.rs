use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{Meal, MealMenu};

/// Everything one pipeline run extracted for a venue: date -> meal ->
/// sections. Built once by the run that owns it and handed whole to the
/// store; dates with no eligible meals never appear.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuSnapshot(BTreeMap<NaiveDate, BTreeMap<Meal, MealMenu>>);

impl MenuSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, meal: Meal, menu: MealMenu) {
        self.0.entry(date).or_default().insert(meal, menu);
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate, meal: Meal) -> Option<&MealMenu> {
        self.0.get(&date)?.get(&meal)
    }

    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.0.contains_key(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Dish, MenuSection};
    use serde_json::json;

    #[test]
    fn test_snapshot_schema() {
        let mut snapshot = MenuSnapshot::new();
        let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        snapshot.insert(
            date,
            Meal::Dinner,
            MealMenu(vec![MenuSection {
                title: "Harvest".to_string(),
                dishes: vec![Dish {
                    name: "Herb Roasted Salmon".to_string(),
                    calories: Some(290),
                    tags: vec!["Fish".to_string(), "Halal".to_string()],
                }],
            }]),
        );
        assert_eq!(
            serde_json::to_value(&snapshot).unwrap(),
            json!({ "2025-03-31": { "Dinner": { "Harvest": [
                { "name": "Herb Roasted Salmon", "calories": 290, "tags": ["Fish", "Halal"] }
            ]}}})
        );
    }
}
