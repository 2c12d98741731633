use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Dish;

/// A named station on the menu with its dishes in on-page order. Duplicate
/// titles within one meal are legal and kept distinct here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub title: String,
    pub dishes: Vec<Dish>,
}

/// All sections of one (date, meal), in on-page order.
///
/// Serializes as an object keyed by section title, matching the downstream
/// schema. JSON objects cannot carry duplicate keys, so when two sections
/// share a title their dish lists are concatenated in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealMenu(pub Vec<MenuSection>);

impl MealMenu {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MealMenu {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut merged: Vec<(&str, Vec<&Dish>)> = Vec::with_capacity(self.0.len());
        for section in &self.0 {
            match merged.iter_mut().find(|(title, _)| *title == section.title) {
                Some((_, dishes)) => dishes.extend(section.dishes.iter()),
                None => merged.push((&section.title, section.dishes.iter().collect())),
            }
        }
        let mut map = serializer.serialize_map(Some(merged.len()))?;
        for (title, dishes) in merged {
            map.serialize_entry(title, &dishes)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dish(name: &str, calories: Option<u32>) -> Dish {
        Dish {
            name: name.to_string(),
            calories,
            tags: vec![],
        }
    }

    #[test]
    fn test_sections_serialize_in_source_order() {
        let menu = MealMenu(vec![
            MenuSection {
                title: "The Kitchen".to_string(),
                dishes: vec![dish("Roast Chicken", Some(310))],
            },
            MenuSection {
                title: "Bakery".to_string(),
                dishes: vec![dish("Sourdough", Some(120))],
            },
        ]);
        // On-page order survives a Value round-trip and the serialized bytes.
        let value = serde_json::to_value(&menu).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["The Kitchen", "Bakery"]);

        let text = serde_json::to_string(&menu).unwrap();
        assert!(text.find("The Kitchen").unwrap() < text.find("Bakery").unwrap());
    }

    #[test]
    fn test_duplicate_titles_concatenate() {
        let menu = MealMenu(vec![
            MenuSection {
                title: "Grill".to_string(),
                dishes: vec![dish("Burger", Some(550))],
            },
            MenuSection {
                title: "Grill".to_string(),
                dishes: vec![dish("Veggie Burger", Some(420))],
            },
        ]);
        assert_eq!(
            serde_json::to_value(&menu).unwrap(),
            json!({ "Grill": [
                { "name": "Burger", "calories": 550, "tags": [] },
                { "name": "Veggie Burger", "calories": 420, "tags": [] },
            ]})
        );
    }
}
