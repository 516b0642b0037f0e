// Document store: the resume being edited plus UI preferences.
// State transitions live in `state`, startup repair in `rehydrate`, and the
// write-through container below ties them to a `StateStorage`.

pub mod handlers;
pub mod rehydrate;
pub mod section_order;
pub mod state;
pub mod storage;

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::store::rehydrate::rehydrate_str;
use crate::store::state::StoreState;
use crate::store::storage::{StateStorage, StorageError};

/// Owns the current state and writes it through to storage after every
/// mutation, including ones that turn out to be no-ops.
pub struct ResumeStore {
    state: StoreState,
    storage: Arc<dyn StateStorage>,
}

impl ResumeStore {
    /// Loads and repairs whatever the storage holds. An unreadable record is
    /// treated like a missing one. Blocks on the read; call it before serving
    /// or from a blocking task.
    pub fn open(storage: Arc<dyn StateStorage>) -> Self {
        let raw = storage.load().unwrap_or_else(|e| {
            warn!("Could not read persisted state ({e}), starting fresh");
            None
        });
        let state = rehydrate_str(raw.as_deref());
        Self { state, storage }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Replaces the state with `mutation(current)` and persists it.
    ///
    /// The write runs on the blocking pool and is awaited before returning,
    /// so a caller holding the store lock sees writes land in mutation order.
    /// The new state is kept in memory even when the write fails; the next
    /// successful write carries it.
    pub async fn apply(
        &mut self,
        mutation: impl FnOnce(&StoreState) -> StoreState,
    ) -> Result<&StoreState, StorageError> {
        self.state = mutation(&self.state);
        self.persist().await?;
        Ok(&self.state)
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.state)?;
        let bytes = serialized.len();
        let storage = Arc::clone(&self.storage);

        // File writes and fsync block; keep them off the async executor.
        tokio::task::spawn_blocking(move || storage.save(&serialized))
            .await
            .map_err(StorageError::from)
            .and_then(|saved| saved)
            .map_err(|e| {
                error!("Failed to persist store state: {e}");
                e
            })?;
        debug!("Persisted store state ({bytes} bytes)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};

    use crate::models::preferences::SectionId;
    use crate::models::resume::ExperiencePatch;
    use crate::store::storage::memory::MemoryStorage;
    use crate::store::storage::JsonFileStorage;

    struct FailingStorage;

    impl StateStorage for FailingStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }

        fn save(&self, _contents: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }
    }

    /// Remembers which thread each save ran on.
    #[derive(Default)]
    struct ThreadRecordingStorage {
        save_threads: Mutex<Vec<ThreadId>>,
    }

    impl StateStorage for ThreadRecordingStorage {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn save(&self, _contents: &str) -> Result<(), StorageError> {
            self.save_threads.lock().unwrap().push(thread::current().id());
            Ok(())
        }
    }

    #[test]
    fn test_open_empty_storage_starts_default() {
        let store = ResumeStore::open(Arc::new(MemoryStorage::default()));
        assert_eq!(store.state(), &StoreState::default());
    }

    #[tokio::test]
    async fn test_every_mutation_writes_through() {
        let storage = MemoryStorage::default();
        let mut store = ResumeStore::open(Arc::new(storage.clone()));

        store.apply(|s| s.update_headline("Engineer")).await.unwrap();
        store.apply(|s| s.add_experience()).await.unwrap();
        store
            .apply(|s| s.move_section_up(SectionId::Summary))
            .await
            .unwrap();
        assert_eq!(storage.writes(), 3);

        let persisted: StoreState = serde_json::from_str(&storage.contents().unwrap()).unwrap();
        assert_eq!(&persisted, store.state());
    }

    #[tokio::test]
    async fn test_save_runs_off_the_runtime_thread() {
        let storage = Arc::new(ThreadRecordingStorage::default());
        let mut store = ResumeStore::open(storage.clone());

        // Current-thread runtime: the test body and every async task share this thread.
        let runtime_thread = thread::current().id();
        store.apply(|s| s.update_summary("Hello")).await.unwrap();
        store.apply(|s| s.add_project()).await.unwrap();

        let save_threads = storage.save_threads.lock().unwrap();
        assert_eq!(save_threads.len(), 2);
        assert!(save_threads.iter().all(|id| *id != runtime_thread));
    }

    #[tokio::test]
    async fn test_noop_mutation_still_persists_unchanged_state() {
        let storage = MemoryStorage::default();
        let mut store = ResumeStore::open(Arc::new(storage.clone()));
        store.apply(|s| s.add_experience()).await.unwrap();
        store.apply(|s| s.add_experience()).await.unwrap();
        let before = store.state().clone();

        let after = store
            .apply(|s| {
                s.update_experience(
                    99,
                    &ExperiencePatch {
                        company: Some("X".to_string()),
                        ..Default::default()
                    },
                )
            })
            .await
            .unwrap()
            .clone();

        assert_eq!(after, before);
        assert_eq!(storage.writes(), 3);
    }

    #[test]
    fn test_open_rehydrates_persisted_record() {
        let storage = MemoryStorage::with_contents(
            r#"{"draftResumeData":{"skills":"Rust, Go, Rust"},"sectionOrder":["skills"]}"#,
        );
        let store = ResumeStore::open(Arc::new(storage));
        assert_eq!(store.state().draft_resume_data.skills, vec!["Rust", "Go"]);
        assert_eq!(store.state().section_order[0], SectionId::Skills);
        assert_eq!(store.state().section_order.len(), 6);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_state_in_memory() {
        let mut store = ResumeStore::open(Arc::new(FailingStorage));
        assert!(store.apply(|s| s.update_summary("Hello")).await.is_err());
        assert_eq!(store.state().draft_resume_data.summary, "Hello");
    }

    #[tokio::test]
    async fn test_state_survives_reopen_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resume-maker-storage.json");

        let mut store = ResumeStore::open(Arc::new(JsonFileStorage::new(&path)));
        store
            .apply(|s| s.update_headline("Data Engineer"))
            .await
            .unwrap();
        store
            .apply(|s| s.update_certifications(&["CKA".to_string()]))
            .await
            .unwrap();
        let expected = store.state().clone();
        drop(store);

        let reopened = ResumeStore::open(Arc::new(JsonFileStorage::new(&path)));
        assert_eq!(reopened.state(), &expected);
    }
}
