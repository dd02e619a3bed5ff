use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{config, errors::Result, ledger::Expense};

use super::StorageBackend;

const SLOT_NAME: &str = "expenses";
const TMP_SUFFIX: &str = "tmp";

/// JSON-file backend mirroring the ledger under the app data directory.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    slot_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(config::app_data_dir);
        ensure_dir(&root)?;
        let slot_file = root.join(format!("{SLOT_NAME}.json"));
        Ok(Self { root, slot_file })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self) -> &Path {
        &self.slot_file
    }
}

impl StorageBackend for JsonStorage {
    fn slot(&self) -> &str {
        SLOT_NAME
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        let tmp = tmp_path(&self.slot_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.slot_file)?;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Expense>> {
        if !self.slot_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.slot_file)?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
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

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ExpenseLedger;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = ExpenseLedger::with_mock_data();
        storage.save(ledger.expenses()).expect("save expenses");
        let loaded = storage.load().expect("load expenses");
        assert_eq!(loaded, ledger.expenses());
    }

    #[test]
    fn slot_file_is_named_after_the_expenses_key() {
        let (storage, _guard) = storage_with_temp_dir();
        assert_eq!(storage.slot(), "expenses");
        assert_eq!(
            storage.slot_path().file_name().and_then(|n| n.to_str()),
            Some("expenses.json")
        );
    }

    #[test]
    fn missing_slot_loads_empty() {
        let (storage, _guard) = storage_with_temp_dir();
        let loaded = storage.load().expect("load expenses");
        assert!(loaded.is_empty());
    }

    #[test]
    fn save_leaves_no_tmp_file_behind() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = ExpenseLedger::with_mock_data();
        storage.save(ledger.expenses()).expect("save expenses");
        let leftover: Vec<_> = fs::read_dir(storage.base_dir())
            .expect("read dir")
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext == TMP_SUFFIX)
                    .unwrap_or(false)
            })
            .collect();
        assert!(leftover.is_empty());
    }
}
