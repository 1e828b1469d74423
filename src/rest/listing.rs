//! Result of a list read.
//!
//! A list read either walks the whole collection or, when the caller chose a
//! `page` or `limit`, reads that one page and hands back the body as the
//! server sent it (with its `page` and `pages` fields).

use serde_json::Value;

use crate::rest::pagination::ResultPage;

/// What a list method returns.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use wizishop_api::rest::Listing;
///
/// let walked = Listing::Items(vec![json!({"id": 1})]);
/// assert_eq!(walked.items(), &[json!({"id": 1})]);
/// assert_eq!(walked.total_pages(), None);
///
/// let page = Listing::Page(Some(json!({"results": [{"id": 7}], "page": 2, "pages": 5})));
/// assert_eq!(page.total_pages(), Some(5));
/// assert_eq!(page.into_items(), vec![json!({"id": 7})]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Every item of the collection, in server order.
    Items(Vec<Value>),

    /// The decoded body of the requested page. `None` when the server sent
    /// no body, or answered `404` under
    /// [`NotFoundPolicy::EmptyResult`](crate::NotFoundPolicy::EmptyResult).
    Page(Option<Value>),
}

impl Listing {
    /// Returns the items: the walked collection, or the `results` array of
    /// the requested page.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        match self {
            Self::Items(items) => items,
            Self::Page(page) => page
                .as_ref()
                .and_then(|page| page.get("results"))
                .and_then(Value::as_array)
                .map_or(&[][..], Vec::as_slice),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items().iter()
    }

    /// Consumes the listing and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Items(items) => items,
            Self::Page(Some(Value::Object(mut fields))) => match fields.remove("results") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            Self::Page(_) => Vec::new(),
        }
    }

    /// Returns the page body, if a single page was requested.
    #[must_use]
    pub const fn page(&self) -> Option<&Value> {
        match self {
            Self::Page(page) => page.as_ref(),
            Self::Items(_) => None,
        }
    }

    /// Returns the number of pages the server reported for a single-page
    /// read.
    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.page().map(ResultPage::total_pages)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }
}

impl IntoIterator for Listing {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_items().into_iter()
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Value>> for Listing {
    fn from(items: Vec<Value>) -> Self {
        Self::Items(items)
    }
}
