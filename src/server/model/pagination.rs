//! Page requests and the pagination metadata derived from them.

use crate::{model::api::PaginationDto, server::error::AppError};

/// Largest row count or offset the store accepts as a bound parameter.
const MAX_ROWS: u64 = i64::MAX as u64;

/// A requested page: 1-based `page` plus an optional page size.
///
/// A missing or zero `limit` means "everything, unpaginated". Both `limit` and the
/// resulting offset always fit in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: Option<u64>,
}

impl PageRequest {
    /// Normalizes raw query values: page 0 or absent becomes 1, limit 0 becomes absent.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - Normalized request
    /// - `Err(AppError::BadRequest)` - `limit` or `(page - 1) * limit` exceeds what
    ///   the store can bind
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.filter(|limit| *limit > 0);

        if let Some(limit) = limit {
            let in_range = limit <= MAX_ROWS
                && (page - 1)
                    .checked_mul(limit)
                    .is_some_and(|offset| offset <= MAX_ROWS);

            if !in_range {
                return Err(AppError::BadRequest(
                    "page and limit are out of range".to_string(),
                ));
            }
        }

        Ok(Self { page, limit })
    }

    pub fn unpaginated() -> Self {
        Self {
            page: 1,
            limit: None,
        }
    }

    /// Number of rows to skip, `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        self.limit
            .map(|limit| (self.page - 1) * limit)
            .unwrap_or(0)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::unpaginated()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub total_cards: Option<u64>,
}

impl Pagination {
    /// Computes pagination metadata for a collection of `total` items.
    ///
    /// Returns `None` for unpaginated requests so the response omits the
    /// `pagination` key instead of dividing by zero.
    pub fn compute(request: &PageRequest, total: u64) -> Option<Self> {
        let limit = request.limit?;
        let total_pages = total.div_ceil(limit);

        Some(Self {
            page: request.page,
            limit,
            total_pages,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
            total_cards: None,
        })
    }

    pub fn with_total_cards(mut self, total_cards: u64) -> Self {
        self.total_cards = Some(total_cards);
        self
    }

    pub fn into_dto(self) -> PaginationDto {
        PaginationDto {
            page: self.page,
            limit: self.limit,
            total_cards: self.total_cards,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_prev_page: self.has_prev_page,
        }
    }
}

/// One page of a top-level collection plus its unpaginated size.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the collection before pagination.
    pub total: u64,
    pub pagination: Option<Pagination>,
}
