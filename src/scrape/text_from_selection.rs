use super::Error;
use scraper::{ElementRef, Selector};

/// Text of the first element matched by `selector` under `element`. Errors
/// when nothing matches or the match has no text node.
pub fn text_from_selection<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    parent_label: &str,
    child_label: &str,
) -> Result<&'a str, Error> {
    let child = element.select(selector).next().ok_or_else(|| {
        Error::malformed_section(&format!(
            "Every {parent_label} element should have a {child_label}."
        ))
    })?;
    get_inner_text(child, child_label)
}

pub fn get_inner_text<'a>(element: ElementRef<'a>, text_label: &str) -> Result<&'a str, Error> {
    element
        .text()
        .next()
        .ok_or_else(|| Error::malformed_section(&format!("{text_label} should have text inside.")))
}
