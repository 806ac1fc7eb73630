//! moments-storage-json
//!
//! File-backed session storage: every key lives in one JSON object on disk,
//! rewritten atomically on each mutation.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use moments_core::{CoreError, SessionStore};
use tracing::warn;

const SESSION_FILE: &str = "session.json";
const TMP_SUFFIX: &str = "tmp";

/// [`SessionStore`] persisted as `<dir>/session.json`.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonSessionStore {
    /// Opens the session file under `dir`. A missing file starts empty; an
    /// unreadable one is logged and also starts empty.
    pub fn open(dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&dir)?;
        let path = dir.join(SESSION_FILE);
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "ignoring corrupt session file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), CoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
