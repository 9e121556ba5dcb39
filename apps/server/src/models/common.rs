use crate::{config::ApiConfig, Error, Result};
use serde::Deserialize;
use std::collections::BTreeSet;

/// `page` / `size` query parameters. `page` is 0-based.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }

    /// Applies configured defaults and limits.
    pub fn resolve(&self, config: &ApiConfig) -> Result<Page> {
        let size = self.size.unwrap_or(config.default_page_size);
        if size == 0 || size > config.max_page_size {
            return Err(Error::invalid(
                "page.size.invalid",
                format!(
                    "Page size must be between 1 and {} (got {})",
                    config.max_page_size, size
                ),
            ));
        }
        let page = self.page.unwrap_or(0);
        let offset = page.checked_mul(size).ok_or_else(|| {
            Error::invalid("page.number.invalid", format!("Page {} is out of range", page))
        })?;
        Ok(Page { page, size, offset })
    }
}

/// A validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub size: usize,
    pub offset: usize,
}

impl Page {
    /// First page holding every item. Used where a caller needs the whole set.
    pub fn unbounded() -> Self {
        Self {
            page: 0,
            size: usize::MAX,
            offset: 0,
        }
    }

    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.size).collect()
    }
}

/// Targets a set of records either by filter or by explicit ids. Exactly one
/// of the two must be present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchComposite<S, I: Ord> {
    #[serde(default)]
    pub search_request: Option<S>,
    #[serde(default)]
    pub item_ids: Option<BTreeSet<I>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompositeTarget<S, I: Ord> {
    Search(S),
    Ids(BTreeSet<I>),
}

impl<S, I: Ord> SearchComposite<S, I> {
    pub fn by_search(search_request: S) -> Self {
        Self {
            search_request: Some(search_request),
            item_ids: None,
        }
    }

    pub fn by_ids(item_ids: impl IntoIterator<Item = I>) -> Self {
        Self {
            search_request: None,
            item_ids: Some(item_ids.into_iter().collect()),
        }
    }

    pub fn into_target(self) -> Result<CompositeTarget<S, I>> {
        match (self.search_request, self.item_ids) {
            (Some(search), None) => Ok(CompositeTarget::Search(search)),
            (None, Some(ids)) if !ids.is_empty() => Ok(CompositeTarget::Ids(ids)),
            (None, Some(_)) => Err(Error::invalid(
                "search.composite.empty",
                "itemIds must not be empty",
            )),
            _ => Err(Error::invalid(
                "search.composite.invalid",
                "Exactly one of searchRequest or itemIds must be provided",
            )),
        }
    }
}
