// Client Domain Model

use super::queue::QueueId;
use serde::{Deserialize, Serialize};

/// Client identifier (store-assigned)
pub type ClientId = i64;

/// A person waiting in exactly one queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub queue_id: QueueId,
    pub name: String,
}

/// Case-folded form of a client name, stored next to it for filtering.
///
/// Full Unicode lowercase, so "ÉMILE" and "émile" compare equal.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_name_handles_non_ascii() {
        assert_eq!(fold_name("Émile Zola"), "émile zola");
        assert_eq!(fold_name("ÖLAF"), "ölaf");
        assert_eq!(fold_name("Client A"), "client a");
    }
}
