use std::collections::BTreeSet;

use serde_json::Value;

/// Deduplicated recipe and ingredient ids discovered across a date range of
/// raw menu payloads. The same id recurs in dozens of daily payloads but is
/// fetched once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAccumulator {
    pub recipes: BTreeSet<u64>,
    pub ingredients: BTreeSet<u64>,
}

impl IdAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks one raw menu payload: `menuWeeks -> menuDays ->
    /// menuDayMealOptions -> menuRows`, pulling `recipeId` / `ingredientId`
    /// off each row. A payload that does not match this shape contributes
    /// nothing and is logged as a warning, never an error.
    pub fn collect(&mut self, payload: &Value) {
        let Some(menus) = payload.as_array() else {
            log::warn!("menu payload is not an array, collecting nothing from it");
            return;
        };
        let mut rows_seen = 0usize;
        for menu in menus {
            for week in array_field(menu, "menuWeeks") {
                for day in array_field(week, "menuDays") {
                    for meal_option in array_field(day, "menuDayMealOptions") {
                        for row in array_field(meal_option, "menuRows") {
                            rows_seen += 1;
                            if let Some(id) = row.get("recipeId").and_then(Value::as_u64) {
                                self.recipes.insert(id);
                            }
                            if let Some(id) = row.get("ingredientId").and_then(Value::as_u64) {
                                self.ingredients.insert(id);
                            }
                        }
                    }
                }
            }
        }
        if !menus.is_empty() && rows_seen == 0 {
            log::warn!("menu payload had no recognizable rows");
        }
    }

    /// Set union; merge order never affects the result, so per-date
    /// collection can run independently and reduce at the end.
    pub fn merge(&mut self, other: IdAccumulator) {
        self.recipes.extend(other.recipes);
        self.ingredients.extend(other.ingredients);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.ingredients.is_empty()
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(rows: &[Value]) -> Value {
        json!([{ "menuWeeks": [{ "menuDays": [{ "menuDayMealOptions": [{
            "menuRows": rows,
        }]}]}]}])
    }

    #[test]
    fn test_collects_both_id_kinds() {
        let mut acc = IdAccumulator::new();
        acc.collect(&payload(&[
            json!({ "recipeId": 101, "name": "Pasta" }),
            json!({ "ingredientId": 7 }),
            json!({ "recipeId": 101 }),
            json!({ "noIdHere": true }),
        ]));
        assert_eq!(acc.recipes, BTreeSet::from([101]));
        assert_eq!(acc.ingredients, BTreeSet::from([7]));
    }

    #[test]
    fn test_malformed_payload_degrades_to_nothing() {
        let mut acc = IdAccumulator::new();
        acc.collect(&json!({ "menuWeeks": "not an array" }));
        acc.collect(&json!([{ "unexpected": [] }]));
        assert!(acc.is_empty());
    }

    /// Merging per-payload accumulators equals collecting every payload into
    /// one, and the union is bounded by the reference count.
    #[test]
    fn test_merge_is_union() {
        let payloads = [
            payload(&[json!({ "recipeId": 1 }), json!({ "ingredientId": 10 })]),
            payload(&[json!({ "recipeId": 1 }), json!({ "recipeId": 2 })]),
            payload(&[json!({ "ingredientId": 10 }), json!({ "recipeId": 2 })]),
        ];

        let mut one_pass = IdAccumulator::new();
        for p in &payloads {
            one_pass.collect(p);
        }

        let mut reduced = IdAccumulator::new();
        for p in &payloads {
            let mut per_date = IdAccumulator::new();
            per_date.collect(p);
            reduced.merge(per_date);
        }

        assert_eq!(one_pass, reduced);
        assert_eq!(reduced.recipes, BTreeSet::from([1, 2]));
        assert_eq!(reduced.ingredients, BTreeSet::from([10]));
        assert!(reduced.recipes.len() + reduced.ingredients.len() <= 6);
    }
}
