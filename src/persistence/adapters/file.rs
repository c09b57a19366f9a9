//! Filesystem snapshot store: one `<key>.json` file per key inside a
//! capability-scoped directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::persistence::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Stores snapshot documents as JSON files in one directory.
///
/// All access goes through the directory handle, so keys can never address
/// files outside it.
#[derive(Debug)]
pub struct FileSnapshotStore {
    dir: Dir,
}

impl FileSnapshotStore {
    /// Wraps an already opened directory.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `root`, creating it and any missing parents.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(root: &Utf8Path) -> SnapshotStoreResult<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(SnapshotStoreError::persistence)?;
        Ok(Self::new(dir))
    }
}

/// Maps a key to its file name, rejecting keys that are not a single plain
/// file name component.
fn document_path(key: &str) -> SnapshotStoreResult<Utf8PathBuf> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !valid {
        return Err(SnapshotStoreError::InvalidKey(key.to_owned()));
    }
    Ok(Utf8PathBuf::from(format!("{key}.json")))
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: &str) -> SnapshotStoreResult<Option<String>> {
        let path = document_path(key)?;
        match self.dir.read_to_string(&path) {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        }
    }

    fn save(&self, key: &str, document: &str) -> SnapshotStoreResult<()> {
        let path = document_path(key)?;
        let staging = Utf8PathBuf::from(format!("{path}.tmp"));
        self.dir
            .write(&staging, document)
            .map_err(SnapshotStoreError::persistence)?;
        self.dir
            .rename(&staging, &self.dir, &path)
            .map_err(SnapshotStoreError::persistence)
    }
}
