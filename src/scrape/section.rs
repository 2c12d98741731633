use scraper::{ElementRef, Html};

use super::{remove_excess_whitespace, text_from_selection, Error};
use crate::menu::{Dish, MenuSection};
use crate::static_selector;

/// Parses the rendered menu body for one (date, meal) into its sections.
///
/// Never fails: a section whose heading cannot be read is logged and dropped
/// whole, and every per-dish field degrades on its own (empty name, `None`
/// calories). `keep_empty_sections` decides whether stations that parsed to
/// zero dishes survive into the output.
#[must_use]
pub fn parse_meal(html: &str, keep_empty_sections: bool) -> Vec<MenuSection> {
    let fragment = Html::parse_fragment(html);
    let mut sections = Vec::new();
    for element in fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
    {
        match parse_section(element) {
            Ok(section) => {
                if keep_empty_sections || !section.dishes.is_empty() {
                    sections.push(section);
                }
            }
            Err(e) => log::warn!("Skipping section: {e}"),
        }
    }
    sections
}

/// One station: an `h2.category-heading` followed by recipe cards.
pub fn parse_section(element: ElementRef<'_>) -> Result<MenuSection, Error> {
    static_selector!(HEADING_SELECTOR <- "h2.category-heading");
    static_selector!(CARD_SELECTOR <- "section.recipe-card");

    let title = text_from_selection(&HEADING_SELECTOR, element, "section", "category heading")?;
    let title = remove_excess_whitespace(title.trim()).into_owned();

    let dishes = element.select(&CARD_SELECTOR).map(parse_dish).collect();
    Ok(MenuSection { title, dishes })
}

fn parse_dish(card: ElementRef<'_>) -> Dish {
    static_selector!(NAME_SELECTOR <- ".recipe-name");
    static_selector!(CALORIES_SELECTOR <- ".recipe-calories");
    static_selector!(METADATA_SELECTOR <- ".recipe-metadata-item");

    // An unreadable name still yields a record, keeping dish-count parity
    // with the page.
    let name = card
        .select(&NAME_SELECTOR)
        .next()
        .and_then(|el| el.text().next())
        .map(|text| remove_excess_whitespace(text.trim()).into_owned())
        .unwrap_or_default();

    let calories = card
        .select(&CALORIES_SELECTOR)
        .next()
        .and_then(|el| el.text().next())
        .and_then(parse_calories);

    let tags = card
        .select(&METADATA_SELECTOR)
        .filter_map(|el| el.attr("title"))
        .filter(|label| !label.is_empty())
        .map(ToString::to_string)
        .collect();

    Dish {
        name,
        calories,
        tags,
    }
}

/// Leading numeric token of a calorie string, e.g. `"450 Calories"`. Zero is
/// a valid count; only a missing or non-numeric token maps to `None`.
#[must_use]
pub fn parse_calories(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}
