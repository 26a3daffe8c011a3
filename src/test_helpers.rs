#![cfg(test)]

use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut file = std::fs::File::create(path).unwrap();
    write!(file, "{}", content).unwrap();
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
