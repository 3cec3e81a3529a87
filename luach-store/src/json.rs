//! JSON-file-backed state store.

use crate::store::{StateStore, StoreError};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use luach_types::state::{CycleState, StatePatch};
use tracing::debug;

/// One JSON document per key under a base directory.
///
/// Documents are read tolerantly (unknown fields ignored, absent fields
/// defaulted) and written back in full after the patch is merged, so the
/// on-disk record always holds the complete state.
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    dir: Utf8PathBuf,
}

impl JsonStateStore {
    pub fn new(dir: Utf8PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Utf8PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonStateStore {
    fn read(&self, key: &str) -> Result<Option<CycleState>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "no state record on disk");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::Io {
                    message: e.to_string(),
                });
            }
        };
        let state = serde_json::from_str(&raw).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })?;
        Ok(Some(state))
    }

    fn write(&self, key: &str, patch: &StatePatch) -> Result<(), StoreError> {
        let mut state = self.read(key)?.unwrap_or_default();
        patch.apply_to(&mut state);

        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        let json = serde_json::to_string_pretty(&state).map_err(|e| StoreError::Json {
            message: e.to_string(),
        })?;
        fs::write(self.path_for(key), json).map_err(|e| StoreError::Io {
            message: e.to_string(),
        })?;
        Ok(())
    }
}
