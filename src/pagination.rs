// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 20;
pub const LARGER_PAGE_SIZE: usize = 50;

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo<T> {
    /// Index of the following page, if it has any items.
    pub next: Option<usize>,
    pub page_size: usize,
    /// Total number of pages, only computed when asked for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    pub data: Vec<T>,
}

/// Page size and limits used to cut result lists into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Resolves the effective page size: the requested size, or the default,
    /// capped at the maximum. Zero is rejected.
    pub fn page_size(&self, requested: Option<usize>) -> Result<usize> {
        let size = requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size);
        if size == 0 {
            return Err(ApiError::InvalidParameter(
                "page_size must be greater than 0".to_string(),
            ));
        }
        Ok(size)
    }
}

/// Cuts `items` into pages and returns page `page` (zero based).
///
/// Only the requested page and the one after it are consumed unless
/// `show_page_count` asks for the total.
pub fn get_page<T, I>(
    page_size: Option<usize>,
    page: Option<usize>,
    items: I,
    show_page_count: bool,
    limits: PageLimits,
) -> Result<PaginationInfo<T>>
where
    I: IntoIterator<Item = T>,
{
    let page_size = limits.page_size(page_size)?;
    let page = page.unwrap_or(0);
    let skip = page.checked_mul(page_size).ok_or(ApiError::PageNotFound {
        page,
        page_size,
    })?;

    let mut iter = items.into_iter();
    let mut total = 0usize;

    // Advance to the requested page.
    for _ in 0..skip {
        if iter.next().is_none() {
            return Err(ApiError::PageNotFound { page, page_size });
        }
        total += 1;
    }

    let data: Vec<T> = iter.by_ref().take(page_size).collect();
    if data.is_empty() {
        return Err(ApiError::PageNotFound { page, page_size });
    }
    total += data.len();

    let has_next = if show_page_count {
        let remaining = iter.count();
        total += remaining;
        remaining > 0
    } else {
        iter.next().is_some()
    };

    Ok(PaginationInfo {
        next: has_next.then_some(page + 1),
        page_size,
        page_count: show_page_count.then(|| total.div_ceil(page_size)),
        data,
    })
}
