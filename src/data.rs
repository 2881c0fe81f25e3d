//! Gazetteer loading and data directory management.
//!
//! The gazetteer is three plain UTF-8 text files, `province.txt`,
//! `district.txt` and `ward.txt`: one canonical name per line, grouped by
//! component type. File layout and parsing live here; the matching core
//! only ever sees ordered [`CanonicalEntry`] sequences.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{CanonicalEntry, Component};

/// The canonical name lists for all three components, in gazetteer file
/// order.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    /// Entries from `province.txt`
    pub provinces: Vec<CanonicalEntry>,
    /// Entries from `district.txt`
    pub districts: Vec<CanonicalEntry>,
    /// Entries from `ward.txt`
    pub wards: Vec<CanonicalEntry>,
}

/// Configuration for gazetteer loading.
#[derive(Debug, Clone)]
pub struct GazetteerConfig {
    /// Directory holding the three gazetteer files
    pub data_dir: PathBuf,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Loader for the gazetteer files of one data directory.
#[derive(Debug)]
pub struct GazetteerStore {
    data_dir: PathBuf,
}

impl GazetteerStore {
    /// Create a store over the default data directory.
    pub fn new() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }

    /// Create a store over a custom data directory.
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Create a store from a configuration value.
    pub fn with_config(config: GazetteerConfig) -> Self {
        Self {
            data_dir: config.data_dir,
        }
    }

    /// The data directory this store reads from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Check whether all three gazetteer files are present.
    pub fn is_available(&self) -> bool {
        Component::ALL
            .iter()
            .all(|component| self.data_dir.join(component.gazetteer_file()).exists())
    }

    /// Verify that all three gazetteer files exist and are non-empty.
    pub fn verify(&self) -> Result<()> {
        for component in Component::ALL {
            let path = self.data_dir.join(component.gazetteer_file());
            if !path.exists() {
                return Err(Error::gazetteer_error(format!(
                    "missing gazetteer file: {}",
                    path.display()
                )));
            }

            let metadata = fs::metadata(&path).map_err(|e| {
                Error::gazetteer_error(format!(
                    "failed to read metadata for {}: {e}",
                    path.display()
                ))
            })?;

            if metadata.len() == 0 {
                return Err(Error::gazetteer_error(format!(
                    "empty gazetteer file: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Load the canonical entries of one component.
    ///
    /// Blank lines are skipped. A line that normalizes to an empty key is
    /// a corrupt gazetteer and fails the whole load; the resolver must
    /// not be built over a partial name list.
    pub fn load(&self, component: Component) -> Result<Vec<CanonicalEntry>> {
        let path = self.data_dir.join(component.gazetteer_file());
        let raw = fs::read_to_string(&path).map_err(|e| {
            Error::gazetteer_error(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut entries = Vec::new();
        for line in raw.lines() {
            let value = line.trim();
            if value.is_empty() {
                continue;
            }
            let entry = CanonicalEntry::new(value);
            if entry.name.is_empty() {
                return Err(Error::gazetteer_error(format!(
                    "{}: entry {value:?} normalizes to an empty key",
                    component.gazetteer_file()
                )));
            }
            entries.push(entry);
        }

        if entries.is_empty() {
            return Err(Error::gazetteer_error(format!(
                "{} contains no entries",
                component.gazetteer_file()
            )));
        }

        Ok(entries)
    }

    /// Load all three components.
    pub fn load_all(&self) -> Result<Gazetteer> {
        Ok(Gazetteer {
            provinces: self.load(Component::Province)?,
            districts: self.load(Component::District)?,
            wards: self.load(Component::Ward)?,
        })
    }
}

impl Default for GazetteerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the default data directory for the gazetteer.
pub fn default_data_dir() -> PathBuf {
    // Check for environment variable first
    if let Ok(env_data_dir) = std::env::var("VIETADDR_DATA_DIR") {
        let path = PathBuf::from(env_data_dir);
        if path.exists() {
            return path;
        }
    }

    // Project-local data directory (for development)
    let project_data_dir = PathBuf::from("data");
    if project_data_dir.exists() {
        return project_data_dir;
    }

    // Fall back to the platform data directory
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("vietaddr")
    } else {
        PathBuf::from(".vietaddr")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn write_gazetteer(dir: &Path, provinces: &str, districts: &str, wards: &str) {
        for (file, content) in [
            ("province.txt", provinces),
            ("district.txt", districts),
            ("ward.txt", wards),
        ] {
            let mut f = fs::File::create(dir.join(file)).unwrap();
            f.write_all(content.as_bytes()).unwrap();
        }
    }

    #[test]
    fn test_load_all() {
        let dir = tempfile::tempdir().unwrap();
        write_gazetteer(
            dir.path(),
            "Hà Nội\nHồ Chí Minh\n",
            "Quận 7\n\nHà Đông\n",
            "Phú Mỹ\n",
        );

        let store = GazetteerStore::with_data_dir(dir.path());
        assert!(store.is_available());
        store.verify().unwrap();

        let gazetteer = store.load_all().unwrap();
        assert_eq!(gazetteer.provinces.len(), 2);
        assert_eq!(gazetteer.districts.len(), 2); // blank line skipped
        assert_eq!(gazetteer.wards.len(), 1);

        assert_eq!(gazetteer.provinces[0].name, "hà nội");
        assert_eq!(gazetteer.provinces[0].value, "Hà Nội");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = GazetteerStore::with_data_dir(dir.path());

        assert!(!store.is_available());
        assert_matches!(store.verify(), Err(Error::GazetteerError { .. }));
        assert_matches!(
            store.load(Component::Province),
            Err(Error::GazetteerError { .. })
        );
    }

    #[test]
    fn test_empty_file_fails_verify() {
        let dir = tempfile::tempdir().unwrap();
        write_gazetteer(dir.path(), "Hà Nội\n", "", "Phú Mỹ\n");

        let store = GazetteerStore::with_data_dir(dir.path());
        assert!(store.is_available());
        assert_matches!(store.verify(), Err(Error::GazetteerError { .. }));
    }

    #[test]
    fn test_corrupt_entry_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_gazetteer(dir.path(), "Hà Nội\n...\n", "Quận 7\n", "Phú Mỹ\n");

        let store = GazetteerStore::with_data_dir(dir.path());
        assert_matches!(
            store.load(Component::Province),
            Err(Error::GazetteerError { .. })
        );
    }

    #[test]
    fn test_whitespace_only_file_has_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        write_gazetteer(dir.path(), "Hà Nội\n", "Quận 7\n", "\n   \n");

        let store = GazetteerStore::with_data_dir(dir.path());
        assert_matches!(
            store.load(Component::Ward),
            Err(Error::GazetteerError { .. })
        );
    }

    #[test]
    fn test_default_data_dir_is_not_empty() {
        let dir = default_data_dir();
        assert!(!dir.as_os_str().is_empty());
    }
}
