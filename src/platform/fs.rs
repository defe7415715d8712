// Reads of fixed filesystem paths (os-release, DMI, power supply tree)

use crate::error::Result;
use std::fs;
use std::path::Path;

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Names of the entries in a directory, sorted ascending
    fn list_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// File contents with surrounding whitespace removed
    fn read_trimmed(&self, path: &Path) -> Result<String> {
        Ok(self.read_to_string(path)?.trim().to_string())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFileReader;

impl FileReader for SystemFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut names: Vec<String> = fs::read_dir(path)?
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("capacity");
        fs::write(&path, "87\n").unwrap();

        let reader = SystemFileReader;
        assert_eq!(reader.read_trimmed(&path).unwrap(), "87");
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let reader = SystemFileReader;
        assert!(reader.read_to_string(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_list_dir_is_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("BAT1")).unwrap();
        fs::create_dir(dir.path().join("AC")).unwrap();
        fs::create_dir(dir.path().join("BAT0")).unwrap();

        let reader = SystemFileReader;
        let names = reader.list_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["AC", "BAT0", "BAT1"]);
    }
}
