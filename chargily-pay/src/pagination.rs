//! Page parameters and the list envelope
//!
//! The client passes `page` and `per_page` through and hands back the
//! envelope exactly as the API shaped it; there is no cursor management.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Default page (1-indexed)
pub const DEFAULT_PAGE: u32 = 1;

/// Page selection for list endpoints
///
/// # Examples
///
/// ```
/// use chargily_pay::PageParams;
///
/// let params = PageParams::default();
/// assert_eq!((params.per_page, params.page), (10, 1));
///
/// let params = PageParams::new(3, 50);
/// assert_eq!(params.query(), vec![("per_page", "50".to_string()), ("page", "3".to_string())]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageParams {
    /// Items per page
    pub per_page: u32,
    /// Page number (1-indexed)
    pub page: u32,
}

impl PageParams {
    /// Create page parameters; zero values are raised to 1
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            per_page: per_page.max(1),
            page: page.max(1),
        }
    }

    /// A specific page at the default size
    pub fn page(page: u32) -> Self {
        Self::new(page, DEFAULT_PER_PAGE)
    }

    /// Query pairs in the order the API documents them
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

impl From<Option<PageParams>> for PageParams {
    fn from(params: Option<PageParams>) -> Self {
        params.unwrap_or_default()
    }
}

/// Paginated list envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub livemode: bool,
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: Option<String>,
    pub last_page: u32,
    pub last_page_url: Option<String>,
    pub next_page_url: Option<String>,
    pub path: Option<String>,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub total: u64,
    /// Envelope fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> ListResponse<T> {
    /// Whether a later page exists
    pub fn has_next_page(&self) -> bool {
        self.next_page_url.is_some() || self.current_page < self.last_page
    }

    /// Parameters for the following page, at the same size
    ///
    /// `None` on the last page, or when the page number cannot advance.
    pub fn next_page(&self) -> Option<PageParams> {
        if !self.has_next_page() {
            return None;
        }
        let page = self.current_page.checked_add(1)?;
        Some(PageParams::new(page, self.per_page))
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
