//! # Receipt Store
//!
//! Process-wide storage for accepted receipts.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Access                                         │
//! │                                                                         │
//! │  POST /receipts/process ──► insert() ──► write lock (exclusive)        │
//! │                                                                         │
//! │  GET /receipts/{id}/points ──► get() ──► read lock (shared)            │
//! │                                                                         │
//! │  Readers never block each other; a writer waits for readers to drain.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers only see the [`ReceiptStore`] trait, so a persistent backend can
//! replace [`InMemoryReceiptStore`] without touching the calculator.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use receipt_core::ValidatedReceipt;

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A thread panicked while holding the store lock.
    #[error("Receipt store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage for validated receipts keyed by generated identifier.
///
/// Records are never updated or deleted.
pub trait ReceiptStore: Send + Sync {
    /// Stores `receipt` under `id`.
    fn insert(&self, id: String, receipt: ValidatedReceipt) -> StoreResult<()>;

    /// Looks up a receipt; `Ok(None)` when the identifier is unknown.
    fn get(&self, id: &str) -> StoreResult<Option<Arc<ValidatedReceipt>>>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// `HashMap` behind a `RwLock`. Lives until the process exits.
#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: RwLock<HashMap<String, Arc<ValidatedReceipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn insert(&self, id: String, receipt: ValidatedReceipt) -> StoreResult<()> {
        let mut receipts = self
            .receipts
            .write()
            .map_err(|_| StoreError::LockPoisoned)?;
        receipts.insert(id, Arc::new(receipt));
        Ok(())
    }

    fn get(&self, id: &str) -> StoreResult<Option<Arc<ValidatedReceipt>>> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.get(id).cloned())
    }

    fn len(&self) -> StoreResult<usize> {
        let receipts = self.receipts.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(receipts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::{validate_receipt, Item, Receipt};
    use std::thread;

    fn receipt(retailer: &str) -> ValidatedReceipt {
        validate_receipt(Receipt {
            retailer: retailer.to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![Item {
                short_description: "Pepsi - 12-oz".to_string(),
                price: "1.25".to_string(),
            }],
            total: "1.25".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_insert_then_get() {
        let store = InMemoryReceiptStore::new();
        assert!(store.is_empty().unwrap());

        store.insert("abc".to_string(), receipt("Walgreens")).unwrap();

        let found = store.get("abc").unwrap().unwrap();
        assert_eq!(found.retailer(), "Walgreens");
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_unknown_id_is_none() {
        let store = InMemoryReceiptStore::new();
        store.insert("abc".to_string(), receipt("Walgreens")).unwrap();

        assert!(store.get("abd").unwrap().is_none());
        assert!(store.get("").unwrap().is_none());
    }

    #[test]
    fn test_concurrent_inserts_and_reads() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..50 {
                        let id = format!("{worker}-{n}");
                        store.insert(id.clone(), receipt("Target")).unwrap();
                        assert!(store.get(&id).unwrap().is_some());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len().unwrap(), 400);
    }

    #[test]
    fn test_poisoned_lock_is_reported() {
        let store = Arc::new(InMemoryReceiptStore::new());

        let poisoner = Arc::clone(&store);
        let _ = thread::spawn(move || {
            let _guard = poisoner.receipts.write().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert!(matches!(store.get("abc"), Err(StoreError::LockPoisoned)));
        assert!(matches!(
            store.insert("abc".to_string(), receipt("Target")),
            Err(StoreError::LockPoisoned)
        ));
    }
}
