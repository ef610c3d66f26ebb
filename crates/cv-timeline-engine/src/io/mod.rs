use crate::i18n::Language;
use crate::models::Milestone;
use crate::parsing::parse_document;
use std::fs;
use std::path::{Path, PathBuf};

/// The one message shown to readers when the document cannot be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load timeline data.";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document path: {0}")]
    InvalidDocumentPath(String),
}

/// Supplies the raw milestone document for a language.
pub trait MilestoneSource {
    fn fetch(&self, language: Language) -> Result<String, LoadError>;
}

/// Reads milestone documents from disk.
///
/// For a base document `mileStone.md`, language `fr` is read from
/// `mileStone.fr.md` when that file exists, otherwise from the base document.
#[derive(Debug, Clone)]
pub struct FsSource {
    document_path: PathBuf,
}

impl FsSource {
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self {
            document_path: document_path.into(),
        }
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// The file that will be read for `language`.
    pub fn path_for(&self, language: Language) -> PathBuf {
        let localized = localized_path(&self.document_path, language);
        match localized {
            Some(path) if path.is_file() => path,
            _ => self.document_path.clone(),
        }
    }
}

impl MilestoneSource for FsSource {
    fn fetch(&self, language: Language) -> Result<String, LoadError> {
        let path = self.path_for(language);
        log::debug!("reading milestones for {language} from {}", path.display());
        read_file(&path)
    }
}

/// Serves a fixed document regardless of language.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl MilestoneSource for StaticSource {
    fn fetch(&self, _language: Language) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }
}

/// Read a milestone document and return its content
pub fn read_file(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(LoadError::Io)
}

/// Fetches and parses a document, newest milestone first.
pub fn load_milestones(
    source: &dyn MilestoneSource,
    language: Language,
) -> Result<Vec<Milestone>, LoadError> {
    let text = source.fetch(language).inspect_err(|e| {
        log::warn!("failed to load milestones for {language}: {e}");
    })?;
    Ok(parse_document(&text))
}

pub fn validate_document_path(path: &Path) -> Result<(), LoadError> {
    if !path.is_file() {
        return Err(LoadError::InvalidDocumentPath(format!(
            "{} is not a file",
            path.display()
        )));
    }

    Ok(())
}

/// `dir/name.md` → `dir/name.<lang>.md`; `None` when the path has no file stem.
fn localized_path(base: &Path, language: Language) -> Option<PathBuf> {
    let stem = base.file_stem()?.to_string_lossy();
    let file_name = match base.extension() {
        Some(ext) => format!("{stem}.{language}.{}", ext.to_string_lossy()),
        None => format!("{stem}.{language}"),
    };
    Some(base.with_file_name(file_name))
}
