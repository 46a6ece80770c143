//! Replay protection: a bounded-TTL unique-nonce ledger.
//!
//! Acceptance is at-most-once per nonce string. The production ledger is a
//! Redis `SET NX EX`, which is atomic server-side; the in-memory variant
//! exists for embedders and tests and provides the same semantics under a
//! mutex. Expired tokens never touch the ledger.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::errors::{PtxError, PtxResult};

/// Result of one check-and-set round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceOutcome {
    /// First sighting; the nonce is now held until its TTL lapses.
    Fresh,
    /// The nonce was already present.
    Replayed,
    /// The supplied expiration lies in the past; the store was not touched.
    Expired,
}

pub enum NonceStore {
    Redis(redis::Client),
    Memory(MemoryLedger),
}

impl NonceStore {
    /// Ledger backed by a Redis instance. The URL is validated eagerly;
    /// connections are established per round trip.
    pub fn redis(url: &str) -> PtxResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|err| PtxError::NonceStoreUnavailable(err.to_string()))?;
        Ok(NonceStore::Redis(client))
    }

    /// Process-local ledger with the same at-most-once semantics.
    pub fn memory() -> Self {
        NonceStore::Memory(MemoryLedger::default())
    }

    /// Atomically records `nonce` unless present, holding it until
    /// `expiration_epoch` (Unix seconds).
    pub async fn check_and_set(
        &self,
        nonce: &str,
        expiration_epoch: i64,
    ) -> PtxResult<NonceOutcome> {
        let now = unix_now();
        if expiration_epoch < now {
            return Ok(NonceOutcome::Expired);
        }
        let ttl_seconds = (expiration_epoch - now).max(1) as u64;

        match self {
            NonceStore::Redis(client) => {
                let mut connection = client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(|err| PtxError::NonceStoreUnavailable(err.to_string()))?;
                let set: Option<String> = redis::cmd("SET")
                    .arg(nonce)
                    .arg("1")
                    .arg("NX")
                    .arg("EX")
                    .arg(ttl_seconds)
                    .query_async(&mut connection)
                    .await
                    .map_err(|err| PtxError::NonceStoreUnavailable(err.to_string()))?;
                let outcome = if set.is_some() {
                    NonceOutcome::Fresh
                } else {
                    NonceOutcome::Replayed
                };
                debug!(nonce, ?outcome, ttl_seconds, "nonce check-and-set");
                Ok(outcome)
            }
            NonceStore::Memory(ledger) => Ok(ledger.check_and_set(nonce, expiration_epoch, now)),
        }
    }
}

/// In-memory nonce ledger guarded by a mutex.
#[derive(Default)]
pub struct MemoryLedger {
    entries: Mutex<HashMap<String, i64>>,
}

impl MemoryLedger {
    fn check_and_set(&self, nonce: &str, expiration_epoch: i64, now: i64) -> NonceOutcome {
        let mut entries = self.entries.lock().expect("nonce ledger poisoned");
        match entries.get(nonce) {
            Some(&held_until) if held_until >= now => NonceOutcome::Replayed,
            _ => {
                entries.insert(nonce.to_string(), expiration_epoch);
                NonceOutcome::Fresh
            }
        }
    }
}

/// Current Unix time in seconds.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn fresh_then_replayed() {
        let store = NonceStore::memory();
        let expiry = unix_now() + 60;
        assert_eq!(
            store.check_and_set("abc", expiry).await.expect("first"),
            NonceOutcome::Fresh
        );
        assert_eq!(
            store.check_and_set("abc", expiry).await.expect("second"),
            NonceOutcome::Replayed
        );
    }

    #[tokio::test]
    async fn expired_nonce_never_touches_the_ledger() {
        let store = NonceStore::memory();
        assert_eq!(
            store
                .check_and_set("stale", unix_now() - 10)
                .await
                .expect("expired"),
            NonceOutcome::Expired
        );
        // The nonce was not recorded, so a future expiry is still fresh.
        assert_eq!(
            store
                .check_and_set("stale", unix_now() + 60)
                .await
                .expect("fresh"),
            NonceOutcome::Fresh
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_check_and_set_accepts_exactly_once() {
        let store = Arc::new(NonceStore::memory());
        let fresh = Arc::new(AtomicUsize::new(0));
        let expiry = unix_now() + 60;

        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = Arc::clone(&store);
            let fresh = Arc::clone(&fresh);
            handles.push(tokio::spawn(async move {
                if store.check_and_set("contended", expiry).await.expect("cas")
                    == NonceOutcome::Fresh
                {
                    fresh.fetch_add(1, Ordering::SeqCst);
                }
            }));
        }
        for handle in handles {
            handle.await.expect("join");
        }
        assert_eq!(fresh.load(Ordering::SeqCst), 1);
    }
}
