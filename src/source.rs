use crate::error::{BettiError, BtResult};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Where result files come from. Aggregation only talks to this trait, so the
/// filesystem can be swapped for an in-memory fixture.
pub trait ResultSource {
    fn read_to_string(&self, path: &Path) -> BtResult<String>;

    /// Files directly inside `dir` whose name ends with `suffix`, sorted by path.
    fn list_result_files(&self, dir: &Path, suffix: &str) -> BtResult<Vec<PathBuf>>;

    /// Immediate subdirectories of `dir` as `(name, path)`, sorted by name.
    fn list_buckets(&self, dir: &Path) -> BtResult<Vec<(String, PathBuf)>>;
}

fn name_of(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl FsSource {
    fn entries(dir: &Path) -> BtResult<Vec<fs::DirEntry>> {
        let rd = fs::read_dir(dir).map_err(|e| BettiError::from_io(dir, e))?;
        rd.collect::<Result<Vec<_>, _>>()
            .map_err(|e| BettiError::from_io(dir, e))
    }
}

impl ResultSource for FsSource {
    fn read_to_string(&self, path: &Path) -> BtResult<String> {
        fs::read_to_string(path).map_err(|e| BettiError::from_io(path, e))
    }

    fn list_result_files(&self, dir: &Path, suffix: &str) -> BtResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in Self::entries(dir)? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if name_of(&path).is_some_and(|n| n.ends_with(suffix)) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn list_buckets(&self, dir: &Path) -> BtResult<Vec<(String, PathBuf)>> {
        let mut buckets = Vec::new();
        for entry in Self::entries(dir)? {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(name) = name_of(&path) {
                buckets.push((name.to_string(), path.clone()));
            }
        }
        buckets.sort();
        Ok(buckets)
    }
}

/// In-memory tree of result files. Inserting a file registers all of its
/// ancestor directories.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> &mut Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path, contents.into());
        self
    }

    /// Registers `dir` (and its ancestors), e.g. to model an empty bucket.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        for ancestor in dir.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    fn require_dir(&self, dir: &Path) -> BtResult<()> {
        if self.dirs.contains(dir) {
            Ok(())
        } else {
            Err(BettiError::NotFound {
                path: dir.to_path_buf(),
            })
        }
    }
}

impl ResultSource for MemorySource {
    fn read_to_string(&self, path: &Path) -> BtResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| BettiError::NotFound {
                path: path.to_path_buf(),
            })
    }

    fn list_result_files(&self, dir: &Path, suffix: &str) -> BtResult<Vec<PathBuf>> {
        self.require_dir(dir)?;
        Ok(self
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| name_of(p).is_some_and(|n| n.ends_with(suffix)))
            .cloned()
            .collect())
    }

    fn list_buckets(&self, dir: &Path) -> BtResult<Vec<(String, PathBuf)>> {
        self.require_dir(dir)?;
        Ok(self
            .dirs
            .iter()
            .filter(|d| d.parent() == Some(dir))
            .filter_map(|d| name_of(d).map(|n| (n.to_string(), d.clone())))
            .collect())
    }
}
