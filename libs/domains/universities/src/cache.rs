use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::error::UniversityResult;
use crate::models::University;
use crate::source::UniversitySource;

/// Injectable time source, so cache expiry is testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real wall clock
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Snapshot {
    loaded_at: Instant,
    universities: Arc<Vec<University>>,
}

/// TTL cache over a [`UniversitySource`].
///
/// Built once at startup and shared by reference; holds no global
/// state. A stale or empty cache triggers a reload on the next read;
/// concurrent readers of a fresh snapshot share one `Arc`.
pub struct UniversityCache {
    source: Arc<dyn UniversitySource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl UniversityCache {
    pub fn new(source: Arc<dyn UniversitySource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    /// The current university list, reloading from the source when the
    /// snapshot is missing or older than the TTL.
    pub async fn get(&self) -> UniversityResult<Arc<Vec<University>>> {
        let now = self.clock.now();

        {
            let snapshot = self.snapshot.read().await;
            if let Some(snap) = snapshot.as_ref() {
                if now.duration_since(snap.loaded_at) < self.ttl {
                    return Ok(snap.universities.clone());
                }
            }
        }

        let mut snapshot = self.snapshot.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(snap) = snapshot.as_ref() {
            if now.duration_since(snap.loaded_at) < self.ttl {
                return Ok(snap.universities.clone());
            }
        }

        tracing::debug!("University cache stale, reloading from source");
        let universities = Arc::new(self.source.load().await?);

        *snapshot = Some(Snapshot {
            loaded_at: self.clock.now(),
            universities: universities.clone(),
        });

        Ok(universities)
    }
}
