use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::feed::Entry;

/// Read the persisted collection. A missing file is an empty collection.
pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<Entry>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Replace the persisted collection with `entries`.
///
/// Writes a sibling temp file and renames it over `path`, so readers never
/// see a half-written collection.
pub(crate) fn save(path: &Path, entries: &[Entry]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = tmp_path(path);
    fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to replace {}", path.display()));
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(title: &str, url: &str) -> Entry {
        Entry {
            title: title.to_string(),
            url: url.to_string(),
            date: "2024-01-15".to_string(),
            source: "rf".to_string(),
            source_name: "Resolution Foundation".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let entries = load(&dir.path().join("writing.json")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("writing.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"), "{}", err);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("writing.json");

        save(&path, &[entry("Post", "https://x/p")]).unwrap();

        assert_eq!(load(&path).unwrap(), vec![entry("Post", "https://x/p")]);
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_failed_replace_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("writing.json");
        fs::create_dir(&path).unwrap();

        let err = save(&path, &[entry("Post", "https://x/p")]).unwrap_err();

        assert!(err.to_string().contains("failed to replace"), "{}", err);
        assert!(!tmp_path(&path).exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_save_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("writing.json");

        save(&path, &[entry("Économie été", "https://x/e")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            r#"[
  {
    "title": "Économie été",
    "url": "https://x/e",
    "date": "2024-01-15",
    "source": "rf",
    "sourceName": "Resolution Foundation"
  }
]"#
        );
    }

    #[test]
    fn test_save_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("writing.json");

        save(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
