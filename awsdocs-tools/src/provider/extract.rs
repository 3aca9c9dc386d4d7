//! Best-effort extraction of structured records from AWS page markup.
//!
//! The selectors are guesses at the markup AWS pages use. Every method
//! returns an empty result when nothing matches; deciding what to do about
//! that is the caller's business.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

/// A search result candidate as found in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    /// Raw `href`, possibly relative.
    pub href: String,
    pub snippet: Option<String>,
}

/// A service entry as found on the services listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub display_name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// A pricing row as found on a pricing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRow {
    pub model: String,
    pub price: String,
    pub unit: Option<String>,
    pub description: String,
}

/// Turns fetched markup into records.
pub trait MarkupExtractor: Send + Sync {
    /// Search hits from at most `limit` candidate elements, in page order.
    ///
    /// Candidates missing a title or link are skipped but still count
    /// toward `limit`.
    fn search_hits(&self, html: &str, limit: usize) -> Vec<SearchHit>;

    /// Concatenated text of the main content area, untrimmed.
    fn topic_text(&self, html: &str) -> String;

    fn service_entries(&self, html: &str) -> Vec<ServiceEntry>;

    fn pricing_rows(&self, html: &str) -> Vec<PricingRow>;
}

lazy_static! {
    static ref SEARCH_ITEM: Selector = sel(".search-result-item, .result-item, .search-hit");
    static ref SEARCH_LINK: Selector = sel("h3 a, .title a, h4 a");
    static ref SEARCH_SNIPPET: Selector = sel(".snippet, .description, .summary");

    static ref TOPIC_CONTENT: Selector = sel(".main-content, .content");

    static ref SERVICE_ITEM: Selector = sel(".service-item, .aws-service");
    static ref SERVICE_NAME: Selector = sel("h3, .service-name");
    static ref SERVICE_DESCRIPTION: Selector = sel(".description, .service-description");
    static ref SERVICE_CATEGORY: Selector = sel(".category");

    static ref PRICING_ITEM: Selector = sel(".pricing-model, .price-item");
    static ref PRICING_MODEL: Selector = sel(".model-name, .pricing-model-name");
    static ref PRICING_PRICE: Selector = sel(".price, .cost");
    static ref PRICING_UNIT: Selector = sel(".unit, .per-unit");
    static ref PRICING_DESCRIPTION: Selector = sel(".description");
}

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("Invalid built-in selector")
}

/// Trimmed text of an element and all its descendants.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `selector` whose text is non-empty.
fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

/// The CSS-selector extractor used against live AWS pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorExtractor;

impl SelectorExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl MarkupExtractor for SelectorExtractor {
    fn search_hits(&self, html: &str, limit: usize) -> Vec<SearchHit> {
        let document = Html::parse_document(html);

        document
            .select(&SEARCH_ITEM)
            .take(limit)
            .filter_map(|item| {
                let title = first_text(item, &SEARCH_LINK)?;
                let href = item
                    .select(&SEARCH_LINK)
                    .filter_map(|link| link.value().attr("href"))
                    .map(str::trim)
                    .find(|href| !href.is_empty())?
                    .to_string();
                Some(SearchHit {
                    title,
                    href,
                    snippet: first_text(item, &SEARCH_SNIPPET),
                })
            })
            .collect()
    }

    fn topic_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document
            .select(&TOPIC_CONTENT)
            .flat_map(|element| element.text())
            .collect()
    }

    fn service_entries(&self, html: &str) -> Vec<ServiceEntry> {
        let document = Html::parse_document(html);

        document
            .select(&SERVICE_ITEM)
            .filter_map(|item| {
                Some(ServiceEntry {
                    display_name: first_text(item, &SERVICE_NAME)?,
                    description: first_text(item, &SERVICE_DESCRIPTION),
                    category: first_text(item, &SERVICE_CATEGORY),
                })
            })
            .collect()
    }

    fn pricing_rows(&self, html: &str) -> Vec<PricingRow> {
        let document = Html::parse_document(html);

        document
            .select(&PRICING_ITEM)
            .filter_map(|item| {
                Some(PricingRow {
                    model: first_text(item, &PRICING_MODEL)?,
                    price: first_text(item, &PRICING_PRICE)?,
                    unit: first_text(item, &PRICING_UNIT),
                    description: first_text(item, &PRICING_DESCRIPTION).unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
            <div class="search-result-item">
                <h3><a href="/s3/latest/userguide/intro.html">  Introduction to S3 </a></h3>
                <p class="snippet">Object storage basics.</p>
            </div>
            <div class="result-item">
                <h4><a href="https://docs.aws.amazon.com/ec2/latest/ug/">EC2 guide</a></h4>
            </div>
            <div class="search-hit">
                <p class="summary">No link here</p>
            </div>
            <div class="search-hit">
                <div class="title"><a href="/lambda/">Lambda</a></div>
                <p class="description"></p>
                <p class="summary">Functions</p>
            </div>
        </body></html>
    "#;

    #[test]
    fn test_search_hits_extracts_title_href_snippet() {
        let hits = SelectorExtractor::new().search_hits(SEARCH_PAGE, 10);
        assert_eq!(hits.len(), 3);

        assert_eq!(
            hits[0],
            SearchHit {
                title: "Introduction to S3".into(),
                href: "/s3/latest/userguide/intro.html".into(),
                snippet: Some("Object storage basics.".into()),
            }
        );
        assert_eq!(hits[1].title, "EC2 guide");
        assert_eq!(hits[1].snippet, None);
        // Empty .description is skipped in favour of the next non-empty match.
        assert_eq!(hits[2].snippet.as_deref(), Some("Functions"));
    }

    #[test]
    fn test_search_hits_limit_counts_skipped_candidates() {
        // Third candidate has no link; limit 3 yields only two hits.
        let hits = SelectorExtractor::new().search_hits(SEARCH_PAGE, 3);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_hits_empty_on_unrelated_markup() {
        let hits = SelectorExtractor::new().search_hits("<html><p>nothing</p></html>", 10);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_topic_text_concatenates_content_areas() {
        let html = r#"<div class="main-content">Hello <b>world</b></div><div class="content">!</div>"#;
        assert_eq!(SelectorExtractor::new().topic_text(html), "Hello world!");
    }

    #[test]
    fn test_topic_text_empty_when_missing() {
        assert_eq!(SelectorExtractor::new().topic_text("<p>x</p>"), "");
    }

    #[test]
    fn test_service_entries() {
        let html = r#"
            <ul>
              <li class="service-item">
                <h3>Amazon Athena</h3>
                <p class="service-description">Query data in S3 using SQL</p>
                <span class="category">Analytics</span>
              </li>
              <li class="aws-service"><span class="service-name">AWS Glue</span></li>
              <li class="service-item"><p class="description">orphan</p></li>
            </ul>
        "#;
        let entries = SelectorExtractor::new().service_entries(html);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].display_name, "Amazon Athena");
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Query data in S3 using SQL")
        );
        assert_eq!(entries[0].category.as_deref(), Some("Analytics"));
        assert_eq!(entries[1].display_name, "AWS Glue");
        assert!(entries[1].description.is_none());
        assert!(entries[1].category.is_none());
    }

    #[test]
    fn test_pricing_rows_require_model_and_price() {
        let html = r#"
            <div class="pricing-model">
              <span class="model-name">On-Demand</span>
              <span class="price">$0.10</span>
              <span class="per-unit">per GB</span>
              <span class="description">Pay as you go</span>
            </div>
            <div class="price-item">
              <span class="pricing-model-name">Reserved</span>
              <span class="cost">$0.05</span>
            </div>
            <div class="price-item"><span class="model-name">Free</span></div>
        "#;
        let rows = SelectorExtractor::new().pricing_rows(html);
        assert_eq!(
            rows,
            vec![
                PricingRow {
                    model: "On-Demand".into(),
                    price: "$0.10".into(),
                    unit: Some("per GB".into()),
                    description: "Pay as you go".into(),
                },
                PricingRow {
                    model: "Reserved".into(),
                    price: "$0.05".into(),
                    unit: None,
                    description: String::new(),
                },
            ]
        );
    }
}
