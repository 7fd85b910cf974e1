// Queue Store Port (Interface)

use crate::domain::{Queue, QueueId};
use crate::error::Result;
use crate::port::Statement;
use async_trait::async_trait;

/// Effect of a mutating statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub rows_affected: u64,
    /// Identity of the last inserted row (meaningful for INSERT only)
    pub last_insert_id: i64,
}

/// Durable store holding queues and their clients.
///
/// Callers never pass raw caller text as statement text; every statement
/// reaching this trait was assembled with [`Statement::bind`].
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Queue metadata by identity, None when no row matches
    async fn get_queue(&self, id: QueueId) -> Result<Option<Queue>>;

    /// Run a listing statement whose single result column is a client name
    async fn list_client_names(&self, statement: &Statement) -> Result<Vec<String>>;

    /// Run a mutating statement
    async fn execute(&self, statement: &Statement) -> Result<ExecOutcome>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, AtomicU64, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// One of the three store calls, for targeted failure injection
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum StoreCall {
        GetQueue,
        ListClientNames,
        Execute,
    }

    /// Mock QueueStore for testing
    ///
    /// Serves queue metadata from a map and a canned listing result; records
    /// every statement it is handed.
    pub struct MockQueueStore {
        queues: Mutex<HashMap<QueueId, String>>,
        client_names: Mutex<Vec<String>>,
        failures: Mutex<HashMap<StoreCall, String>>,
        executed: Mutex<Vec<Statement>>,
        listed: Mutex<Vec<Statement>>,
        next_id: AtomicI64,
        rows_affected: AtomicU64,
        get_calls: AtomicUsize,
    }

    impl MockQueueStore {
        pub fn new() -> Self {
            Self {
                queues: Mutex::new(HashMap::new()),
                client_names: Mutex::new(Vec::new()),
                failures: Mutex::new(HashMap::new()),
                executed: Mutex::new(Vec::new()),
                listed: Mutex::new(Vec::new()),
                next_id: AtomicI64::new(1),
                rows_affected: AtomicU64::new(1),
                get_calls: AtomicUsize::new(0),
            }
        }

        pub fn with_queue(self, id: QueueId, name: impl Into<String>) -> Self {
            self.queues.lock().unwrap().insert(id, name.into());
            self
        }

        pub fn with_client_names(self, names: &[&str]) -> Self {
            *self.client_names.lock().unwrap() = names.iter().map(|n| n.to_string()).collect();
            self
        }

        /// Every call fails with a database error carrying `message`
        pub fn failing(self, message: impl Into<String>) -> Self {
            let message = message.into();
            [StoreCall::GetQueue, StoreCall::ListClientNames, StoreCall::Execute]
                .into_iter()
                .fold(self, |store, call| store.failing_on(call, message.clone()))
        }

        /// Only `call` fails; the others behave normally
        pub fn failing_on(self, call: StoreCall, message: impl Into<String>) -> Self {
            self.failures.lock().unwrap().insert(call, message.into());
            self
        }

        pub fn set_rows_affected(&self, rows: u64) {
            self.rows_affected.store(rows, Ordering::SeqCst);
        }

        pub fn get_calls(&self) -> usize {
            self.get_calls.load(Ordering::SeqCst)
        }

        pub fn listed(&self) -> Vec<Statement> {
            self.listed.lock().unwrap().clone()
        }

        pub fn executed(&self) -> Vec<Statement> {
            self.executed.lock().unwrap().clone()
        }

        /// Total store round trips of any kind
        pub fn total_calls(&self) -> usize {
            self.get_calls() + self.listed.lock().unwrap().len() + self.executed.lock().unwrap().len()
        }

        fn check_failure(&self, call: StoreCall) -> Result<()> {
            match self.failures.lock().unwrap().get(&call) {
                Some(msg) => Err(AppError::Database(msg.clone())),
                None => Ok(()),
            }
        }
    }

    impl Default for MockQueueStore {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl QueueStore for MockQueueStore {
        async fn get_queue(&self, id: QueueId) -> Result<Option<Queue>> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            self.check_failure(StoreCall::GetQueue)?;
            Ok(self
                .queues
                .lock()
                .unwrap()
                .get(&id)
                .map(|name| Queue::new(id, name.clone())))
        }

        async fn list_client_names(&self, statement: &Statement) -> Result<Vec<String>> {
            self.listed.lock().unwrap().push(statement.clone());
            self.check_failure(StoreCall::ListClientNames)?;
            Ok(self.client_names.lock().unwrap().clone())
        }

        async fn execute(&self, statement: &Statement) -> Result<ExecOutcome> {
            self.executed.lock().unwrap().push(statement.clone());
            self.check_failure(StoreCall::Execute)?;
            // Atomic allocation; never derived from how many rows exist
            let last_insert_id = self.next_id.fetch_add(1, Ordering::SeqCst);
            Ok(ExecOutcome {
                rows_affected: self.rows_affected.load(Ordering::SeqCst),
                last_insert_id,
            })
        }
    }
}
