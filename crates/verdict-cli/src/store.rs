use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use verdict_core::error::VdResult;
use verdict_core::scorer::AnalysisResult;
use verdict_core::service::ResultStore;

/// Loads one JSON document (engine, quiz, or response).
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> VdResult<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Result sink writing one JSON file per analysis, assigning sequential
/// persistent ids. Stands in for the production repository behind the same
/// `ResultStore` seam.
pub struct FileResultStore {
    dir: PathBuf,
    next_seq: AtomicUsize,
}

impl FileResultStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> VdResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let existing = fs::read_dir(&dir)?.count();
        Ok(Self {
            dir,
            next_seq: AtomicUsize::new(existing + 1),
        })
    }
}

impl ResultStore for FileResultStore {
    fn create(&self, mut result: AnalysisResult) -> VdResult<AnalysisResult> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        let id = format!("result-{seq:06}");
        result.id = Some(id.clone());

        let path = self.dir.join(format!("{id}.json"));
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(path, json)?;
        Ok(result)
    }
}
