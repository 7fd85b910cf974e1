// Client Listing Query Composer

use crate::domain::listing::{ClientListing, SortColumn, SortOrder};
use crate::domain::queue::{validate_queue_id, QueueId};
use crate::domain::{fold_name, DomainError};
use crate::port::Statement;

const LISTING_BASE: &str = "SELECT name FROM clients WHERE queue_id = ";

/// Build the single statement that lists client names of a queue.
///
/// Caller values (queue id, filter, limit, offset) only ever become bound
/// arguments. The sort column reaches the text only after it parsed into
/// [`SortColumn`]; the direction is one of two fixed tokens.
///
/// # Errors
/// - `QueueIdRequired` if `queue_id <= 0`
/// - `UnsupportedSortColumn` if `sort_by` is outside the allow-list
pub fn compose_client_listing(
    queue_id: QueueId,
    listing: &ClientListing,
) -> Result<Statement, DomainError> {
    let queue_id = validate_queue_id(queue_id)?;
    // Resolve before emitting any text so a bad column never half-builds a statement
    let (column, order) = match listing.sort_column()? {
        Some(column) => (column, listing.sort_order()),
        None => (SortColumn::Name, SortOrder::Asc),
    };

    let mut stmt = Statement::new(LISTING_BASE);
    let placeholder = stmt.bind(queue_id);
    stmt.push_sql(&placeholder);

    if let Some(filter) = listing.name_filter() {
        // Both sides folded; SQLite LIKE alone only ignores ASCII case
        let placeholder = stmt.bind(format!("%{}%", escape_like(&fold_name(filter))));
        stmt.push_sql(&format!(" AND name_folded LIKE {} ESCAPE '\\'", placeholder));
    }

    stmt.push_sql(&format!(" ORDER BY {} {}", column.as_sql(), order.as_sql()));
    if column != SortColumn::Id {
        // Stable pages when names repeat
        stmt.push_sql(", id ASC");
    }

    if let Some(limit) = listing.limit() {
        let placeholder = stmt.bind(limit);
        stmt.push_sql(&format!(" LIMIT {}", placeholder));
    }

    if let Some(offset) = listing.offset() {
        if listing.limit().is_none() {
            // SQLite only accepts OFFSET after a LIMIT; -1 means unbounded
            stmt.push_sql(" LIMIT -1");
        }
        let placeholder = stmt.bind(offset);
        stmt.push_sql(&format!(" OFFSET {}", placeholder));
    }

    Ok(stmt)
}

/// Escape LIKE metacharacters so the filter matches literally
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
