//! In-memory record store.
//!
//! Each store keeps its table behind one `RwLock`; unique-key checks run
//! inside the write lock, so two concurrent creates for the same key
//! cannot both pass. A poisoned lock surfaces as a storage error.

mod client_store;
mod finance_store;
mod membership_store;
mod routine_store;

pub use client_store::{InMemoryClientStore, InMemoryFingerprintStore, InMemoryReminderStore};
pub use finance_store::{
    InMemoryAccountStatusStore, InMemoryFixedExpenseStore, InMemoryPaymentStore,
    InMemoryVariableExpenseStore,
};
pub use membership_store::{InMemoryMembershipStore, InMemoryPlanStore};
pub use routine_store::{InMemoryCatalogStore, InMemoryRoutineStore};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::DomainError;

pub(crate) fn read_table<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomainError> {
    lock.read()
        .map_err(|_| DomainError::storage("store lock poisoned"))
}

pub(crate) fn write_table<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomainError> {
    lock.write()
        .map_err(|_| DomainError::storage("store lock poisoned"))
}
