//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Builder for a self-contained wordbook environment: a data directory for
/// history plus a dictionary file, both inside one temp dir.
pub struct WordbookEnv {
    temp_dir: TempDir,
}

impl WordbookEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Write a dictionary file with the given JSON content
    pub fn with_dict(self, json: &str) -> Self {
        fs::write(self.dict_path(), json).expect("Failed to write dictionary file");
        self
    }

    /// A small dictionary with a few common words
    pub fn with_sample_dict(self) -> Self {
        self.with_dict(
            r#"{
                "hello": {
                    "phonetic": "həˈləʊ",
                    "translations": ["你好"],
                    "explains": ["int. 你好；喂"],
                    "web": [{"key": "hello world", "values": ["世界你好"]}]
                },
                "foo": {"translations": ["placeholder one"]},
                "bar": {"translations": ["placeholder two"]}
            }"#,
        )
    }

    pub fn data_dir(&self) -> PathBuf {
        self.temp_dir.path().join("data")
    }

    pub fn dict_path(&self) -> PathBuf {
        self.temp_dir.path().join("dict.json")
    }
}
