// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ResidentExport, VisitorExport};
use crate::export::{ExportFormat, ExportTarget};
use crate::store::{Clock, KeyValueStore, RecordStore};
use crate::ui::messages::warning;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one collection to `path`.
    ///
    /// JSON keeps the stored record shape (nested members included); CSV uses
    /// one flat row per record. Returns the number of records written.
    pub fn export<S: KeyValueStore, C: Clock>(
        store: &RecordStore<S, C>,
        target: ExportTarget,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        let written = match target {
            ExportTarget::Residents => {
                let residents = store.list_residents();
                if residents.is_empty() {
                    warning("No residents to export.");
                }
                match format {
                    ExportFormat::Json => export_json(&residents, path)?,
                    ExportFormat::Csv => {
                        let rows: Vec<ResidentExport> =
                            residents.iter().map(ResidentExport::from).collect();
                        export_csv(&rows, path)?
                    }
                }
                residents.len()
            }
            ExportTarget::Visitors => {
                let visitors = store.list_visitors();
                if visitors.is_empty() {
                    warning("No visitors to export.");
                }
                match format {
                    ExportFormat::Json => export_json(&visitors, path)?,
                    ExportFormat::Csv => {
                        let rows: Vec<VisitorExport> =
                            visitors.iter().map(VisitorExport::from).collect();
                        export_csv(&rows, path)?
                    }
                }
                visitors.len()
            }
        };

        Ok(written)
    }
}
