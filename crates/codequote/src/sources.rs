//! Collecting source files into workbench buffers

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;
use crate::counting::strip_bom;
use crate::workbench::Workbench;
use crate::{Category, QuoteError, Result};

/// A file together with the buffer it feeds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
  pub category: Category,
  pub path: PathBuf,
}

/// Expand files and directories into categorized source files
///
/// Explicit files must have a recognised extension. Directory walks skip
/// unrecognised files and the configured ignore directories. Output is sorted
/// by path so buffers are assembled deterministically.
pub fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<SourceFile>> {
  let mut files = Vec::new();

  for path in paths {
    if !path.exists() {
      return Err(QuoteError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("Path does not exist: {}", path.display()),
      )));
    }

    if path.is_file() {
      let category = Category::from_path(path).ok_or_else(|| QuoteError::unsupported_file(path))?;
      files.push(SourceFile { category, path: path.clone() });
    } else if path.is_dir() {
      let mut found: Vec<SourceFile> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry.path(), config))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
          let category = Category::from_path(entry.path());
          if category.is_none() {
            tracing::debug!(path = %entry.path().display(), "skipping file with unknown extension");
          }
          category.map(|category| SourceFile { category, path: entry.into_path() })
        })
        .collect();
      found.sort_by(|a, b| a.path.cmp(&b.path));
      files.extend(found);
    }
  }

  Ok(files)
}

fn is_ignored_dir(path: &Path, config: &Config) -> bool {
  path.is_dir()
    && path.file_name().is_some_and(|name| config.ignores_dir(&name.to_string_lossy()))
}

/// Read a source file, dropping a leading byte order mark
pub fn read_source(path: &Path) -> Result<String> {
  let content = fs::read_to_string(path)?;
  Ok(strip_bom(&content).to_string())
}

/// Read every file and append it to its category buffer
pub fn load_files(workbench: &mut Workbench, files: &[SourceFile]) -> Result<()> {
  for file in files {
    let content = read_source(&file.path)?;
    tracing::debug!(path = %file.path.display(), category = %file.category, "loaded source file");
    workbench.append_text(file.category, &content);
  }
  Ok(())
}
