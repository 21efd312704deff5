//! Persisted slot for the current access token.
//!
//! Slots live in a JSON object on disk, e.g. `{"token:": "abc123"}`. Keys
//! other than the one this store owns are read back and written out again
//! untouched. Clones share the same slots.

use crate::constant::TOKEN_KEY;
use crate::error::LoginErrorEnum;
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

type Slots = HashMap<String, String>;

#[derive(Clone)]
pub struct SessionStore {
    key: String,
    path: Option<PathBuf>,
    slots: Arc<RwLock<Slots>>,
}

impl SessionStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file means an empty store; the file is only created on the
    /// first `save`.
    #[tracing::instrument(name = "Load session", skip(path, key), fields(path = %path.as_ref().display()))]
    pub fn init(path: impl AsRef<Path>, key: impl Into<String>) -> Result<Self, LoginErrorEnum> {
        let path = path.as_ref().to_path_buf();
        let slots = if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                tracing::error!("Failed to read session file: {:?}", e);
                LoginErrorEnum::ReadSessionFileError(e)
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                tracing::error!("Failed to parse session file: {:?}", e);
                LoginErrorEnum::ParseSessionFileError(e)
            })?
        } else {
            Slots::new()
        };
        Ok(Self {
            key: key.into(),
            path: Some(path),
            slots: Arc::new(RwLock::new(slots)),
        })
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            key: TOKEN_KEY.into(),
            path: None,
            slots: Arc::new(RwLock::new(Slots::new())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the stored token. The slot only changes once the file has
    /// been written.
    #[tracing::instrument(name = "Save access token", skip(self, token), fields(key = %self.key))]
    pub fn save(&self, token: &Secret<String>) -> Result<(), LoginErrorEnum> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let mut updated = slots.clone();
        updated.insert(self.key.clone(), token.expose_secret().clone());
        if let Some(path) = &self.path {
            persist(path, &updated)?;
        }
        *slots = updated;
        Ok(())
    }

    pub fn read(&self) -> Option<Secret<String>> {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&self.key)
            .map(|token| Secret::new(token.clone()))
    }
}

impl Debug for SessionStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

fn persist(path: &Path, slots: &Slots) -> Result<(), LoginErrorEnum> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            tracing::error!("Failed to create {}: {:?}", parent.display(), e);
            LoginErrorEnum::CreateSessionDirError(e)
        })?;
    }
    let contents = serde_json::to_string_pretty(slots).map_err(|e| {
        tracing::error!("Failed to serialize session slots: {:?}", e);
        LoginErrorEnum::SerializeSessionError(e)
    })?;
    write_private(path, contents.as_bytes()).map_err(|e| {
        tracing::error!("Failed to write {}: {:?}", path.display(), e);
        LoginErrorEnum::WriteSessionFileError(e)
    })
}

// The token grants access to the account, keep it owner-readable only
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::os::unix::fs::OpenOptionsExt;
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)
}
