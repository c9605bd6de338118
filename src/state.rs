// src/state.rs

use crate::catalog::hotel_catalog;
use crate::config::AppConfig;
use crate::domain::HotelRecord;
use crate::export::{DocumentExporter, ExportError};
use crate::labels::{LabelOverrides, LabelsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Labels(#[from] LabelsError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Everything a request handler reads. Built once at startup, shared read-only.
pub struct AppState {
    pub config: AppConfig,
    pub catalog: Vec<HotelRecord>,
    pub overrides: LabelOverrides,
    pub exporter: DocumentExporter,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, StartupError> {
        let overrides = match &config.labels.overrides_path {
            Some(path) => {
                let overrides = LabelOverrides::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    en = overrides.en.len(),
                    ar = overrides.ar.len(),
                    "loaded label overrides"
                );
                overrides
            }
            None => LabelOverrides::default(),
        };
        let exporter = DocumentExporter::from_config(&config.export)?;

        Ok(Self {
            catalog: hotel_catalog(),
            overrides,
            exporter,
            config,
        })
    }
}
