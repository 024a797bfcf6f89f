use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use tenantdesk_auth::Session;
use tenantdesk_core::{TenantId, UserId};

use crate::source::{FetchError, RecordSource};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
}

/// Owner of a slice of the store, resolved from the signed-in session.
///
/// Organization-scoped records partition by [`TenantId`]; records owned by
/// the user directly (API keys) partition by [`UserId`].
pub trait Partition: Copy + Ord + Send + Sync + 'static {
    fn of_session(session: &Session) -> Result<Self, FetchError>;
}

impl Partition for TenantId {
    fn of_session(session: &Session) -> Result<Self, FetchError> {
        session
            .active_organization
            .ok_or(FetchError::NoActiveOrganization)
    }
}

impl Partition for UserId {
    fn of_session(session: &Session) -> Result<Self, FetchError> {
        Ok(session.user_id)
    }
}

/// Partition-isolated key/value store abstraction for listed records.
pub trait TenantStore<K, V, P = TenantId>: Send + Sync {
    fn get(&self, owner: P, key: &K) -> Result<Option<V>, StoreError>;
    fn upsert(&self, owner: P, key: K, value: V) -> Result<(), StoreError>;
    fn remove(&self, owner: P, key: &K) -> Result<Option<V>, StoreError>;
    /// All records of one owner, in key order.
    fn list(&self, owner: P) -> Result<Vec<V>, StoreError>;
    fn clear_owner(&self, owner: P) -> Result<(), StoreError>;
}

impl<K, V, P, S> TenantStore<K, V, P> for Arc<S>
where
    S: TenantStore<K, V, P> + ?Sized,
{
    fn get(&self, owner: P, key: &K) -> Result<Option<V>, StoreError> {
        (**self).get(owner, key)
    }

    fn upsert(&self, owner: P, key: K, value: V) -> Result<(), StoreError> {
        (**self).upsert(owner, key, value)
    }

    fn remove(&self, owner: P, key: &K) -> Result<Option<V>, StoreError> {
        (**self).remove(owner, key)
    }

    fn list(&self, owner: P) -> Result<Vec<V>, StoreError> {
        (**self).list(owner)
    }

    fn clear_owner(&self, owner: P) -> Result<(), StoreError> {
        (**self).clear_owner(owner)
    }
}

/// In-memory partitioned store for tests/dev.
#[derive(Debug)]
pub struct InMemoryTenantStore<K, V, P = TenantId> {
    inner: RwLock<BTreeMap<(P, K), V>>,
}

impl<K, V, P> InMemoryTenantStore<K, V, P> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<K, V, P> Default for InMemoryTenantStore<K, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> TenantStore<K, V, P> for InMemoryTenantStore<K, V, P>
where
    K: Clone + Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: Partition,
{
    fn get(&self, owner: P, key: &K) -> Result<Option<V>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.get(&(owner, key.clone())).cloned())
    }

    fn upsert(&self, owner: P, key: K, value: V) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.insert((owner, key), value);
        Ok(())
    }

    fn remove(&self, owner: P, key: &K) -> Result<Option<V>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.remove(&(owner, key.clone())))
    }

    fn list(&self, owner: P) -> Result<Vec<V>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map
            .iter()
            .filter_map(|((p, _k), v)| (*p == owner).then(|| v.clone()))
            .collect())
    }

    fn clear_owner(&self, owner: P) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        map.retain(|(p, _k), _v| *p != owner);
        Ok(())
    }
}

/// Lists the records of the session's partition.
impl<K, V, P> RecordSource<V> for InMemoryTenantStore<K, V, P>
where
    K: Clone + Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: Partition,
{
    fn fetch(&self, session: &Session) -> Result<Vec<V>, FetchError> {
        let owner = P::of_session(session)?;
        self.list(owner)
            .map_err(|e| FetchError::Provider(e.to_string()))
    }
}

#[cfg(test)]
impl<K, V, P> InMemoryTenantStore<K, V, P> {
    /// Poison the lock the way a panicking writer would.
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.inner.write();
            panic!("writer panicked");
        }));
    }
}
