use url::Url;

use crate::calendar::{CalendarPolicy, MealSchedule};
use crate::menu::MealFlags;

/// CSS selectors for the interactive date/meal selector control. All UCLA
/// residential venues share the same page layout, so venues rarely override
/// the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorMap {
    pub change_button: &'static str,
    pub date_select: &'static str,
    pub meal_select: &'static str,
    pub done_button: &'static str,
    pub menu_body: &'static str,
}

impl Default for SelectorMap {
    fn default() -> Self {
        Self {
            change_button: r#"button:has-text("Change")"#,
            date_select: "#menu-date",
            meal_select: "#menu-type",
            done_button: ".done-button",
            menu_body: "div#menu-body",
        }
    }
}

/// A dining location: entry page, selector layout, calendar rules and the
/// empty-section output policy. Immutable once built.
#[derive(Debug, Clone)]
pub struct Venue {
    pub id: &'static str,
    pub url: Url,
    pub selectors: SelectorMap,
    pub calendar: CalendarPolicy,
    /// Whether sections that parsed to zero dishes are kept in the output.
    pub keep_empty_sections: bool,
}

impl Venue {
    fn new(id: &'static str, url: &str, calendar: CalendarPolicy, keep_empty: bool) -> Self {
        Self {
            id,
            url: Url::parse(url).expect("builtin venue urls are valid"),
            selectors: SelectorMap::default(),
            calendar,
            keep_empty_sections: keep_empty,
        }
    }

    /// The configured venue set.
    #[must_use]
    pub fn builtin() -> Vec<Venue> {
        let lunch_dinner = MealFlags::Lunch | MealFlags::Dinner;
        // Epicuria closes Saturdays, drops dinner on Fridays and lunch on
        // Sundays.
        let covel_schedule = MealSchedule::Weekly([
            lunch_dinner,
            lunch_dinner,
            lunch_dinner,
            lunch_dinner,
            MealFlags::Lunch,
            MealFlags::empty(),
            MealFlags::Dinner,
        ]);
        vec![
            // Bruin Plate's source labels each menu with the previous
            // calendar day, hence the +1 adjustment.
            Venue::new(
                "bruin-plate",
                "https://dining.ucla.edu/bruin-plate/",
                CalendarPolicy {
                    date_offset_days: 1,
                    schedule: MealSchedule::Daily(MealFlags::all()),
                },
                true,
            ),
            Venue::new(
                "epicuria-at-covel",
                "https://dining.ucla.edu/epicuria-at-covel/",
                CalendarPolicy {
                    date_offset_days: 0,
                    schedule: covel_schedule,
                },
                false,
            ),
            Venue::new(
                "de-neve",
                "https://dining.ucla.edu/de-neve-dining/",
                CalendarPolicy::default(),
                true,
            ),
            Venue::new(
                "epicuria-at-ackerman",
                "https://dining.ucla.edu/epicuria-ackerman/",
                CalendarPolicy::default(),
                true,
            ),
            Venue::new(
                "rendezvous",
                "https://dining.ucla.edu/rendezvous/",
                CalendarPolicy::default(),
                true,
            ),
            Venue::new(
                "bruin-cafe",
                "https://dining.ucla.edu/bruin-cafe/",
                CalendarPolicy::default(),
                true,
            ),
            Venue::new(
                "cafe-1919",
                "https://dining.ucla.edu/cafe-1919/",
                CalendarPolicy::default(),
                true,
            ),
        ]
    }
}
