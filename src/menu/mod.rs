mod dish;
mod meal;
mod section;
mod snapshot;

pub use dish::Dish;
pub use meal::{Meal, MealFlags};
pub use section::{MealMenu, MenuSection};
pub use snapshot::MenuSnapshot;
