// Client Listing Options (filter, ordering, pagination)

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Columns a caller may order the client listing by.
///
/// Identifiers cannot be bound as statement arguments, so this enum is the
/// only way a caller-chosen column reaches statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Id,
}

impl SortColumn {
    pub const ALLOWED: [SortColumn; 2] = [SortColumn::Name, SortColumn::Id];

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Id => "id",
        }
    }
}

impl FromStr for SortColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        SortColumn::ALLOWED
            .into_iter()
            .find(|column| column.as_sql().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnsupportedSortColumn(s.to_string()))
    }
}

/// Sort direction, always one of two literal tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` in any case selects descending; anything else is ascending
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Optional listing controls of a queue status request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientListing {
    #[serde(default)]
    pub name_filter: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

impl ClientListing {
    /// Substring filter, with an empty string treated as absent
    pub fn name_filter(&self) -> Option<&str> {
        self.name_filter.as_deref().filter(|f| !f.is_empty())
    }

    /// Validated sort column (None means the default name ordering)
    pub fn sort_column(&self) -> Result<Option<SortColumn>> {
        match self.sort_by.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::normalize(self.sort_order.as_deref())
    }

    /// Page size, only when positive
    pub fn limit(&self) -> Option<i64> {
        self.limit.filter(|n| *n > 0)
    }

    /// Rows to skip, only when positive
    pub fn offset(&self) -> Option<i64> {
        self.offset.filter(|n| *n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_allow_list() {
        assert_eq!("name".parse::<SortColumn>(), Ok(SortColumn::Name));
        assert_eq!("ID".parse::<SortColumn>(), Ok(SortColumn::Id));
        assert_eq!(
            "name; DROP TABLE clients".parse::<SortColumn>(),
            Err(DomainError::UnsupportedSortColumn(
                "name; DROP TABLE clients".to_string()
            ))
        );
        assert!("queue_id".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_sort_order_normalize() {
        assert_eq!(SortOrder::normalize(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::normalize(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::normalize(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::normalize(Some("descending")), SortOrder::Asc);
        assert_eq!(SortOrder::normalize(None), SortOrder::Asc);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let listing = ClientListing {
            name_filter: Some(String::new()),
            sort_by: Some("  ".to_string()),
            limit: Some(0),
            offset: Some(-3),
            ..Default::default()
        };

        assert_eq!(listing.name_filter(), None);
        assert_eq!(listing.sort_column(), Ok(None));
        assert_eq!(listing.limit(), None);
        assert_eq!(listing.offset(), None);
    }
}
