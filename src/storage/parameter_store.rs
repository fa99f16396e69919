use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::storage::render_parameters::RenderParameters;

#[derive(Debug, Error)]
pub enum ParameterStoreError {
    #[error("failed to read parameter store {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write parameter store {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("parameter store {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode parameter store: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoredParameters {
    pub id: u64,
    #[serde(flatten)]
    pub parameters: RenderParameters,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ParameterTable {
    #[serde(default)]
    parameters: Vec<StoredParameters>,
}

/// Single-table store of render parameter records, kept as one JSON file.
/// Ids auto-increment; the newest record is the one with the highest id.
#[derive(Debug)]
pub struct ParameterStore {
    path: PathBuf,
    table: ParameterTable,
}

impl ParameterStore {
    /// Loads the store at `path`. A missing file is an empty store; it is
    /// created on the first insert.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParameterStoreError> {
        let path = path.as_ref().to_path_buf();

        let table = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| {
                ParameterStoreError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => ParameterTable::default(),
            Err(source) => return Err(ParameterStoreError::Read { path, source }),
        };

        debug!(path = %path.display(), records = table.parameters.len(), "parameter store opened");

        Ok(Self { path, table })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn records(&self) -> &[StoredParameters] {
        &self.table.parameters
    }

    #[must_use]
    pub fn latest(&self) -> Option<StoredParameters> {
        self.table
            .parameters
            .iter()
            .max_by_key(|record| record.id)
            .copied()
    }

    /// Appends `parameters` under the next id and writes the file.
    pub fn insert(&mut self, parameters: RenderParameters) -> Result<u64, ParameterStoreError> {
        let id = self
            .table
            .parameters
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1;

        self.table
            .parameters
            .push(StoredParameters { id, parameters });

        if let Err(err) = self.save() {
            self.table.parameters.pop();
            return Err(err);
        }

        debug!(id, path = %self.path.display(), "parameters stored");

        Ok(id)
    }

    fn save(&self) -> Result<(), ParameterStoreError> {
        let contents =
            serde_json::to_string_pretty(&self.table).map_err(ParameterStoreError::Encode)?;

        fs::write(&self.path, contents).map_err(|source| ParameterStoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
