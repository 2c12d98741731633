use bitflags::bitflags;

/// One meal service at a venue on a date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// The label used by the menu-type selector and by the output schema.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }
}

impl serde::Serialize for Meal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

bitflags! {
    /// Set of meals a venue serves on a particular date.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct MealFlags: u8 {
        const Breakfast = 0b001;
        const Lunch = 0b010;
        const Dinner = 0b100;
    }
}

impl MealFlags {
    /// Meals in the set, in service order.
    pub fn meals(self) -> impl Iterator<Item = Meal> {
        Meal::ALL.into_iter().filter(move |m| self.contains((*m).into()))
    }
}

impl From<Meal> for MealFlags {
    fn from(meal: Meal) -> Self {
        match meal {
            Meal::Breakfast => MealFlags::Breakfast,
            Meal::Lunch => MealFlags::Lunch,
            Meal::Dinner => MealFlags::Dinner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meals_in_service_order() {
        let flags = MealFlags::Dinner | MealFlags::Breakfast;
        let meals: Vec<Meal> = flags.meals().collect();
        assert_eq!(meals, vec![Meal::Breakfast, Meal::Dinner]);
    }

    #[test]
    fn test_meal_serializes_to_label() {
        assert_eq!(
            serde_json::to_string(&Meal::Lunch).unwrap(),
            "\"Lunch\""
        );
    }
}
