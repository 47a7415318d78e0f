//! Text file acting as the editor host
//!
//! `flush` writes the buffer back to disk so anything watching the file
//! sees the progress marker while the model runs. Until the final `save`,
//! the file on disk still holds that marker; callers that bail out early
//! should `revert` to put the original content back. A process killed
//! mid-run leaves the marker in place.

use super::{HostDocument, Selection, Span, TextDocument};
use crate::error::SummarizeResult;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    doc: TextDocument,
    original: String,
    write_through: bool,
}

impl FileDocument {
    /// Open a UTF-8 text file
    pub fn open(path: impl AsRef<Path>) -> SummarizeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path)?;
        info!("📄 Opened {} ({} bytes)", path.display(), content.len());
        Ok(Self {
            path,
            doc: TextDocument::new(content.clone()),
            original: content,
            write_through: true,
        })
    }

    /// Keep edits in memory only; `flush` and `save` become no-ops
    pub fn in_memory(mut self) -> Self {
        self.write_through = false;
        self
    }

    pub fn document_mut(&mut self) -> &mut TextDocument {
        &mut self.doc
    }

    pub fn text(&self) -> &str {
        self.doc.text()
    }

    /// Write the current buffer to disk
    pub fn save(&self) -> SummarizeResult<()> {
        if !self.write_through {
            return Ok(());
        }
        self.write_atomic(self.doc.text())?;
        debug!("💾 Saved {}", self.path.display());
        Ok(())
    }

    /// Put the content the file had when opened back on disk
    pub fn revert(&self) -> SummarizeResult<()> {
        if !self.write_through {
            return Ok(());
        }
        self.write_atomic(&self.original)?;
        warn!("↩️ Restored original content of {}", self.path.display());
        Ok(())
    }

    /// Write through a sibling temp file so a failed write never leaves a
    /// truncated document behind
    fn write_atomic(&self, content: &str) -> SummarizeResult<()> {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.summarize-tmp", file_name));

        if let Err(e) = std::fs::write(&tmp_path, content) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

impl HostDocument for FileDocument {
    fn selection(&self) -> Option<Selection> {
        self.doc.selection()
    }

    fn insert_at(&mut self, pos: usize, text: &str) -> SummarizeResult<Span> {
        self.doc.insert_at(pos, text)
    }

    fn replace_range(&mut self, span: Span, text: &str) -> SummarizeResult<Span> {
        self.doc.replace_range(span, text)
    }

    fn append(&mut self, text: &str) -> SummarizeResult<Span> {
        self.doc.append(text)
    }

    fn flush(&mut self) -> SummarizeResult<()> {
        self.save()
    }
}
