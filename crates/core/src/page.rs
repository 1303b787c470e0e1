use scraper::{Html, Selector as CssSelector};
use serde::Serialize;

/// Element holding the function name.
pub const TITLE_SELECTOR: &str = "#page-header";
/// Element holding the short function description.
pub const DESCRIPTION_SELECTOR: &str = ".ocpIntroduction";
/// Elements holding worked examples; all matches are concatenated.
pub const EXAMPLES_SELECTOR: &str = ".ocpSection";

/// Text fields extracted from a function documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    pub title: String,
    pub description: String,
    pub examples: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no element matching '{0}' in document")]
    ElementNotFound(&'static str),
}

/// Extract title, description, and example text from documentation HTML.
///
/// The source site format is assumed stable: a missing title or description
/// marker is an error with no recovery. Missing example sections are fine and
/// yield an empty examples string.
pub fn extract_fields(html: &str) -> Result<ExtractedFields, PageError> {
    let document = Html::parse_document(html);

    let title = select_text(&document, TITLE_SELECTOR)
        .ok_or(PageError::ElementNotFound(TITLE_SELECTOR))?;
    let description = select_text(&document, DESCRIPTION_SELECTOR)
        .ok_or(PageError::ElementNotFound(DESCRIPTION_SELECTOR))?;

    let selector = CssSelector::parse(EXAMPLES_SELECTOR).unwrap();
    let examples = document
        .select(&selector)
        .map(|section| section.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ExtractedFields {
        title,
        description,
        examples,
    })
}

fn select_text(document: &Html, selector_str: &'static str) -> Option<String> {
    let selector = CssSelector::parse(selector_str).unwrap();
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
