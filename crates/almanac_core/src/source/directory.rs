//! Provider reading saved day pages from a directory.

use super::page::{split_page, DayPage};
use super::{SourceError, SourceProvider, SourceResult};
use crate::model::day::DayLabel;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads `<root>/<Month_Day>.txt` plain-text pages.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the page file for `day`.
    pub fn page_path(&self, day: &DayLabel) -> PathBuf {
        self.root.join(format!("{day}.txt"))
    }
}

impl SourceProvider for DirectorySource {
    fn fetch_day(&self, day: &DayLabel) -> SourceResult<DayPage> {
        let path = self.page_path(day);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(SourceError::NotFound(*day));
            }
            Err(source) => return Err(SourceError::Io { path, source }),
        };
        split_page(day, &text)
    }
}
