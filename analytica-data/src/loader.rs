use std::io::Read;

use analytica_core::{FieldWarning, ProviderError, StateRecord, StateRepository};
use thiserror::Error;

use crate::payload::{RecordsPayload, convert_records};

/// Errors that can occur when loading state data.
#[derive(Debug, Error)]
pub enum StateRecordLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<csv::Error> for StateRecordLoaderError {
    fn from(err: csv::Error) -> Self {
        StateRecordLoaderError::CsvParse(err.to_string())
    }
}

impl From<serde_json::Error> for StateRecordLoaderError {
    fn from(err: serde_json::Error) -> Self {
        StateRecordLoaderError::JsonParse(err.to_string())
    }
}

/// Outcome of [`StateRecordLoader::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of states written.
    pub loaded: usize,
    /// Every field that was degraded while typing the records.
    pub warnings: Vec<FieldWarning>,
}

/// Loader for state data from CSV or JSON files.
///
/// Records are written through the [`StateRepository`] trait, so any
/// writable backend works.
pub struct StateRecordLoader;

impl StateRecordLoader {
    /// Parse state records from a CSV reader whose header row uses the
    /// record field names (`Name`, `IncomeTax`, ...). Unknown columns are
    /// ignored.
    pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<StateRecord>, StateRecordLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: StateRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse state records from JSON, either a bare array or a
    /// `{ "data": [...] }` envelope.
    pub fn parse_json<R: Read>(reader: R) -> Result<Vec<StateRecord>, StateRecordLoaderError> {
        let payload: RecordsPayload = serde_json::from_reader(reader)?;
        Ok(payload.into_records())
    }

    /// Type the records and upsert them by name.
    ///
    /// Loading is idempotent: running the same load twice leaves the store
    /// unchanged. Records with a blank name are skipped.
    pub async fn load<R: StateRepository + ?Sized>(
        repo: &R,
        records: Vec<StateRecord>,
    ) -> Result<LoadSummary, StateRecordLoaderError> {
        let (profiles, warnings) = convert_records(records);
        let mut loaded = 0;

        for profile in &profiles {
            if profile.name.is_empty() {
                tracing::warn!("skipping state record without a name");
                continue;
            }
            repo.upsert_state(profile).await?;
            loaded += 1;
        }

        tracing::info!(loaded, warnings = warnings.len(), "loaded state records");
        Ok(LoadSummary { loaded, warnings })
    }
}
