//! Anchor extraction from HTML documents.

use scraper::{Html, Selector};

use crate::error::{Error, Result};

/// Collect the `href` of every anchor element, in document order.
///
/// Parsing is lenient: malformed markup is recovered, never rejected.
pub fn extract_links(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let link_selector =
        Selector::parse("a[href]").map_err(|e| Error::Parse(format!("Invalid selector: {}", e)))?;

    let links = document
        .select(&link_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect();

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_in_document_order() {
        let html = r#"<html><body>
            <a href="https://x/foo_top100.zip">foo</a>
            <p><a href="https://x/bar_minimum3.zip">bar</a></p>
            <a href="https://x/baz_rest.zip">baz</a>
            <a href="https://x/readme.html">readme</a>
        </body></html>"#;

        let links = extract_links(html).unwrap();
        assert_eq!(
            links,
            vec![
                "https://x/foo_top100.zip",
                "https://x/bar_minimum3.zip",
                "https://x/baz_rest.zip",
                "https://x/readme.html",
            ]
        );
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<a name="top">top</a><a href="a_rest.zip">a</a>"#;
        assert_eq!(extract_links(html).unwrap(), vec!["a_rest.zip"]);
    }

    #[test]
    fn test_href_kept_verbatim() {
        let html = r#"<a href="../data/Book_top100.zip">rel</a><a href="">empty</a>"#;
        assert_eq!(
            extract_links(html).unwrap(),
            vec!["../data/Book_top100.zip", ""]
        );
    }

    #[test]
    fn test_malformed_markup_recovered() {
        let html = r#"<table><tr><td><a href="https://x/a_top100.zip">a<td><a href=https://x/b_rest.zip>b"#;
        assert_eq!(
            extract_links(html).unwrap(),
            vec!["https://x/a_top100.zip", "https://x/b_rest.zip"]
        );
    }

    #[test]
    fn test_no_anchors() {
        assert!(extract_links("<html><body><p>nothing</p></body></html>")
            .unwrap()
            .is_empty());
        assert!(extract_links("").unwrap().is_empty());
    }
}
