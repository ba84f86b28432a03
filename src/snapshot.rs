use std::fmt::Display;
use std::sync::{Arc, PoisonError, RwLock};

/// Latest whole value published by a single writer.
///
/// Readers get an `Arc` to a complete snapshot and keep it as long as they
/// like; a publish swaps in a new `Arc` and never touches the old one.
///
/// # Example
/// ```
/// use sysprofile::{parse_str, Snapshot};
///
/// let status = Snapshot::new(parse_str("Power: Off\n")?);
/// status.refresh(|| parse_str("Power: On\n"));
/// assert_eq!(status.load().get("Power").and_then(|v| v.as_bool()), Some(true));
/// # Ok::<(), sysprofile::ProfileError>(())
/// ```
#[derive(Debug)]
pub struct Snapshot<T> {
    current: RwLock<Arc<T>>,
}

impl<T> Snapshot<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The current snapshot.
    pub fn load(&self) -> Arc<T> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the snapshot, returning the previous one.
    pub fn publish(&self, next: T) -> Arc<T> {
        let next = Arc::new(next);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Run `produce` and publish its result. On failure the previous
    /// snapshot stays in place and `false` is returned.
    pub fn refresh<E, F>(&self, produce: F) -> bool
    where
        E: Display,
        F: FnOnce() -> Result<T, E>,
    {
        match produce() {
            Ok(next) => {
                self.publish(next);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "refresh failed, keeping previous snapshot");
                false
            }
        }
    }
}

impl<T: Default> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Mapping, Value};
    use crate::parse_str;

    #[test]
    fn test_publish_returns_previous() {
        let snapshot = Snapshot::new(1);
        let previous = snapshot.publish(2);
        assert_eq!(*previous, 1);
        assert_eq!(*snapshot.load(), 2);
    }

    #[test]
    fn test_reader_keeps_old_snapshot_after_publish() {
        let snapshot = Snapshot::new(parse_str("Power: On\n").unwrap());
        let held = snapshot.load();

        snapshot.publish(parse_str("Power: Off\n").unwrap());

        assert_eq!(held.get("Power"), Some(&Value::Boolean(true)));
        assert_eq!(snapshot.load().get("Power"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn test_failed_refresh_keeps_stale_data() {
        let snapshot: Snapshot<Mapping> = Snapshot::new(parse_str("Connected: Yes\n").unwrap());

        assert!(!snapshot.refresh(|| parse_str("Connected: Yes\nbroken line\n")));
        assert_eq!(snapshot.load().get("Connected"), Some(&Value::Boolean(true)));

        assert!(snapshot.refresh(|| parse_str("Connected: No\n")));
        assert_eq!(snapshot.load().get("Connected"), Some(&Value::Boolean(false)));
    }

    #[test]
    fn test_concurrent_readers_see_whole_snapshots() {
        let snapshot = Snapshot::<Mapping>::default();

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 0..200i64 {
                    let text = format!("A: {}\nB: {}\n", i, i);
                    snapshot.refresh(|| parse_str(&text));
                }
            });

            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let current = snapshot.load();
                        assert_eq!(current.get("A"), current.get("B"));
                    }
                });
            }
        });

        assert_eq!(snapshot.load().get("A"), Some(&Value::Integer(199)));
    }
}
