//! Page-number pagination over collection endpoints.
//!
//! Collection endpoints answer one page at a time:
//!
//! ```json
//! { "results": [ ... ], "page": 1, "pages": 3 }
//! ```
//!
//! [`assemble_results`] walks every page of one logical query and
//! concatenates the items. It knows nothing about HTTP: how a page is
//! fetched and how items are pulled out of it are both supplied by the
//! caller, which keeps the walk reusable across resources and testable
//! with fake pages.

use std::future::Future;

/// Number of items requested per page when walking a collection.
pub const PAGE_SIZE: u32 = 100;

/// A decoded page of a collection.
pub trait ResultPage {
    /// Returns `true` if the server sent no page at all (empty body or
    /// empty structure).
    fn is_empty(&self) -> bool;

    /// Returns the total number of pages reported for the query.
    fn total_pages(&self) -> u32;
}

impl ResultPage for serde_json::Value {
    fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Object(map) => map.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Reads the numeric `pages` field; anything else counts as zero.
    fn total_pages(&self) -> u32 {
        self.get("pages")
            .and_then(serde_json::Value::as_u64)
            .map_or(0, |pages| u32::try_from(pages).unwrap_or(u32::MAX))
    }
}

/// Fetches every page of a query and concatenates the extracted items.
///
/// Starts at page 1 and keeps going while the next page number does not
/// exceed the page's [`total_pages`](ResultPage::total_pages). Items keep
/// the server's order: page order first, then order within the page.
///
/// An empty page ends the walk with an empty result, discarding anything
/// already collected.
///
/// # Errors
///
/// The first error returned by `fetch_page` is returned as is; no partial
/// result is produced.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use wizishop_api::rest::assemble_results;
///
/// # tokio_test::block_on(async {
/// let pages = vec![
///     json!({"results": ["a", "b"], "pages": 2}),
///     json!({"results": ["c"], "pages": 2}),
/// ];
///
/// let items: Result<Vec<Value>, ()> = assemble_results(
///     |page| {
///         let page = pages[page as usize - 1].clone();
///         async move { Ok(page) }
///     },
///     |page: Value| page["results"].as_array().cloned().unwrap_or_default(),
/// )
/// .await;
///
/// assert_eq!(items.unwrap(), vec![json!("a"), json!("b"), json!("c")]);
/// # });
/// ```
pub async fn assemble_results<P, T, E, F, Fut, X>(
    mut fetch_page: F,
    mut extract_items: X,
) -> Result<Vec<T>, E>
where
    P: ResultPage,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<P, E>>,
    X: FnMut(P) -> Vec<T>,
{
    let mut current_page: u32 = 1;
    let mut results = Vec::new();

    loop {
        let page = fetch_page(current_page).await?;

        if page.is_empty() {
            return Ok(Vec::new());
        }

        let total_pages = page.total_pages();
        results.extend(extract_items(page));

        tracing::debug!(page = current_page, total_pages, "Assembled result page");

        match next_page(current_page, total_pages) {
            Some(next) => current_page = next,
            None => break,
        }
    }

    Ok(results)
}

/// The page after `current`, if it is within `total_pages`.
fn next_page(current: u32, total_pages: u32) -> Option<u32> {
    current.checked_add(1).filter(|next| *next <= total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Debug, Clone)]
    struct FakePage {
        items: Vec<&'static str>,
        total_pages: u32,
    }

    impl ResultPage for FakePage {
        fn is_empty(&self) -> bool {
            self.items.is_empty() && self.total_pages == 0
        }

        fn total_pages(&self) -> u32 {
            self.total_pages
        }
    }

    fn page(items: &[&'static str], total_pages: u32) -> FakePage {
        FakePage {
            items: items.to_vec(),
            total_pages,
        }
    }

    #[test]
    fn test_concatenates_pages_in_order() {
        let pages = [page(&["a", "b"], 3), page(&["c", "d"], 3), page(&["e"], 3)];
        let requested = RefCell::new(Vec::new());

        let result: Result<Vec<&str>, ()> = tokio_test::block_on(assemble_results(
            |n| {
                requested.borrow_mut().push(n);
                let page = pages[n as usize - 1].clone();
                async move { Ok(page) }
            },
            |page| page.items,
        ));

        assert_eq!(result.unwrap(), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(*requested.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_first_page_returns_empty_regardless_of_total() {
        let result: Result<Vec<serde_json::Value>, ()> = tokio_test::block_on(assemble_results(
            |_| async { Ok(json!({})) },
            |_| vec![json!("never")],
        ));

        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_empty_later_page_discards_collected_items() {
        let pages = [page(&["a", "b"], 3), page(&[], 0), page(&["e"], 3)];

        let result: Result<Vec<&str>, ()> = tokio_test::block_on(assemble_results(
            |n| {
                let page = pages[n as usize - 1].clone();
                async move { Ok(page) }
            },
            |page| page.items,
        ));

        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn test_error_on_second_page_propagates_without_partial_result() {
        let calls = RefCell::new(0);

        let result: Result<Vec<&str>, String> = tokio_test::block_on(assemble_results(
            |n| {
                *calls.borrow_mut() += 1;
                let outcome = if n == 2 {
                    Err(format!("page {n} failed"))
                } else {
                    Ok(page(&["x"], 3))
                };
                async move { outcome }
            },
            |page| page.items,
        ));

        assert_eq!(result, Err("page 2 failed".to_string()));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_single_page_when_total_is_one_or_missing() {
        let calls = RefCell::new(0);

        let result: Result<Vec<serde_json::Value>, ()> = tokio_test::block_on(assemble_results(
            |_| {
                *calls.borrow_mut() += 1;
                async { Ok(json!({"results": [1, 2]})) }
            },
            |page| page["results"].as_array().cloned().unwrap_or_default(),
        ));

        assert_eq!(result.unwrap(), vec![json!(1), json!(2)]);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_next_page_stops_at_total_without_overflow() {
        assert_eq!(next_page(1, 3), Some(2));
        assert_eq!(next_page(3, 3), None);
        assert_eq!(next_page(1, 0), None);
        assert_eq!(next_page(u32::MAX - 1, u32::MAX), Some(u32::MAX));
        assert_eq!(next_page(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_value_page_emptiness() {
        assert!(ResultPage::is_empty(&serde_json::Value::Null));
        assert!(ResultPage::is_empty(&json!({})));
        assert!(ResultPage::is_empty(&json!([])));
        assert!(!ResultPage::is_empty(&json!({"results": [], "pages": 0})));
    }

    #[test]
    fn test_value_total_pages() {
        assert_eq!(json!({"pages": 4}).total_pages(), 4);
        assert_eq!(json!({"pages": "4"}).total_pages(), 0);
        assert_eq!(json!({"pages": -1}).total_pages(), 0);
        assert_eq!(json!({}).total_pages(), 0);
    }
}
