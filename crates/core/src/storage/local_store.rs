//! Local durable copy of the working profile.
//!
//! Two JSON blobs, mirroring the two in-memory structures: the field map
//! and the custom item registry. Read once on startup, written on every
//! change and by the autosave tick.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::custom_items::CustomItemRegistry;
use crate::errors::{Result, StorageError};
use crate::profile::FinancialProfile;
use crate::statement::FieldValues;

const FIELD_VALUES_FILE: &str = "field_values.json";
const CUSTOM_ITEMS_FILE: &str = "custom_items.json";

pub trait LocalStoreTrait: Send + Sync {
    /// Load the saved profile. Absent blobs read as empty, so a fresh
    /// install starts from a blank profile without special casing.
    fn load_profile(&self) -> Result<FinancialProfile>;

    fn save_profile(&self, profile: &FinancialProfile) -> Result<()>;

    /// Drop both blobs, e.g. on sign-out.
    fn clear(&self) -> Result<()>;
}

/// Blob store backed by a directory of JSON files.
pub struct FileLocalStore {
    data_dir: PathBuf,
}

impl FileLocalStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn values_path(&self) -> PathBuf {
        self.data_dir.join(FIELD_VALUES_FILE)
    }

    fn items_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOM_ITEMS_FILE)
    }

    fn read_blob(path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read(err.to_string()).into()),
        }
    }

    fn write_blob(path: &Path, raw: &str) -> Result<()> {
        fs::write(path, raw).map_err(|err| StorageError::Write(err.to_string()))?;
        Ok(())
    }
}

impl LocalStoreTrait for FileLocalStore {
    fn load_profile(&self) -> Result<FinancialProfile> {
        let values = match Self::read_blob(&self.values_path())? {
            Some(raw) => {
                serde_json::from_str::<FieldValues>(&raw).map_err(StorageError::from)?
            }
            None => FieldValues::new(),
        };
        let custom_items = match Self::read_blob(&self.items_path())? {
            Some(raw) => {
                serde_json::from_str::<CustomItemRegistry>(&raw).map_err(StorageError::from)?
            }
            None => CustomItemRegistry::new(),
        };
        Ok(FinancialProfile {
            values,
            custom_items,
        })
    }

    fn save_profile(&self, profile: &FinancialProfile) -> Result<()> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|err| StorageError::Write(err.to_string()))?;
        let values = serde_json::to_string(&profile.values).map_err(StorageError::from)?;
        let items = serde_json::to_string(&profile.custom_items).map_err(StorageError::from)?;
        Self::write_blob(&self.values_path(), &values)?;
        Self::write_blob(&self.items_path(), &items)?;
        debug!("Wrote local profile to {}", self.data_dir.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        for path in [self.values_path(), self.items_path()] {
            if let Err(err) = fs::remove_file(&path) {
                if err.kind() != std::io::ErrorKind::NotFound {
                    return Err(StorageError::Write(err.to_string()).into());
                }
            }
        }
        Ok(())
    }
}
