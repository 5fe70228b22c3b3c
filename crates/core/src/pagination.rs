//! Query parameters and pagination utilities for list endpoints

use serde::{Deserialize, Serialize};

use crate::errors::{PlannerResult, ValidationErrors, Violation};

/// Pagination as it arrives in the query string
///
/// ```text
/// GET /api/schedules/{id}/teachers?per_page=10&page=2&sort_by=surname&sort_order=desc
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_per_page")]
    pub per_page: i64,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

fn default_per_page() -> i64 {
    20
}

fn default_page() -> i64 {
    1
}

fn default_sort_by() -> String {
    "id".to_string()
}

fn default_sort_order() -> String {
    "asc".to_string()
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

/// Normalized pagination handed to the storage layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub per_page: i64,
    pub offset: i64,
    pub sort_by: String,
    pub sort_order: String,
}

impl From<&PageQuery> for Pagination {
    fn from(query: &PageQuery) -> Self {
        Self {
            per_page: query.per_page,
            offset: query.page.saturating_sub(1).saturating_mul(query.per_page),
            sort_by: query.sort_by.clone(),
            sort_order: query.sort_order.clone(),
        }
    }
}

impl Pagination {
    /// Checks every parameter and reports all bad ones at once.
    ///
    /// `sortable` is the whitelist of columns the entity can be ordered by.
    pub fn validate(&self, sortable: &[&str]) -> PlannerResult<()> {
        let mut errors = ValidationErrors::new();
        errors.check(self.per_page < 0, Violation::bad_parameter("PerPage"));
        errors.check(self.offset < 0, Violation::bad_parameter("Page"));
        errors.check(
            !matches!(self.sort_order.to_lowercase().as_str(), "asc" | "desc"),
            Violation::bad_parameter("SortOrder"),
        );
        errors.check(
            !sortable.contains(&self.sort_by.as_str()),
            Violation::bad_parameter("SortBy"),
        );
        errors.into_result()
    }

    /// SQL keyword for the sort direction; only meaningful after `validate`.
    pub fn direction(&self) -> &'static str {
        if self.sort_order.eq_ignore_ascii_case("desc") {
            "DESC"
        } else {
            "ASC"
        }
    }
}

/// One page of rows plus the unpaginated total
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
        }
    }
}

/// List response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub per_page: i64,
    pub page: i64,
    pub sort_by: String,
    pub sort_order: String,
}

impl<T> PaginatedResponse<T> {
    pub fn new(page: Page<T>, query: &PageQuery) -> Self {
        Self {
            items: page.items,
            total_count: page.total_count,
            per_page: query.per_page,
            page: query.page,
            sort_by: query.sort_by.clone(),
            sort_order: query.sort_order.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlannerError;
    use pretty_assertions::assert_eq;

    const SORTABLE: &[&str] = &["id", "name"];

    fn pagination(per_page: i64, offset: i64, sort_by: &str, sort_order: &str) -> Pagination {
        Pagination {
            per_page,
            offset,
            sort_by: sort_by.to_string(),
            sort_order: sort_order.to_string(),
        }
    }

    #[test]
    fn test_valid_parameters() {
        assert!(pagination(10, 0, "name", "DESC").validate(SORTABLE).is_ok());
        assert!(pagination(0, 40, "id", "Asc").validate(SORTABLE).is_ok());
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = pagination(-1, -1, "bogus", "bogus")
            .validate(SORTABLE)
            .unwrap_err();

        let PlannerError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(
            errors.violations(),
            &[
                Violation::bad_parameter("PerPage"),
                Violation::bad_parameter("Page"),
                Violation::bad_parameter("SortOrder"),
                Violation::bad_parameter("SortBy"),
            ]
        );
    }

    #[test]
    fn test_sort_by_is_case_sensitive() {
        assert!(pagination(10, 0, "Name", "asc").validate(SORTABLE).is_err());
    }

    #[test]
    fn test_offset_from_page() {
        let query = PageQuery {
            per_page: 15,
            page: 3,
            ..PageQuery::default()
        };
        assert_eq!(Pagination::from(&query).offset, 30);

        let query = PageQuery {
            page: 0,
            ..PageQuery::default()
        };
        assert!(Pagination::from(&query).validate(SORTABLE).is_err());
    }

    #[test]
    fn test_extreme_pages_saturate() {
        let query = PageQuery {
            page: i64::MIN,
            ..PageQuery::default()
        };
        let page = Pagination::from(&query);
        assert_eq!(page.offset, i64::MIN);
        let err = page.validate(SORTABLE).unwrap_err();
        let PlannerError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors.violations(), &[Violation::bad_parameter("Page")]);

        let query = PageQuery {
            page: i64::MAX,
            ..PageQuery::default()
        };
        assert_eq!(Pagination::from(&query).offset, i64::MAX);
    }

    #[test]
    fn test_direction() {
        assert_eq!(pagination(1, 0, "id", "desc").direction(), "DESC");
        assert_eq!(pagination(1, 0, "id", "ASC").direction(), "ASC");
    }
}
