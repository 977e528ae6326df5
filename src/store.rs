// src/store.rs
//! JSON artifacts under the dataset directory.
//!
//! Every stage writes its output here under a fixed file name and reads the
//! previous stage's output back when it was not produced in the same run.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::StoreError;

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Write `data` as pretty JSON (two-space indent) to `<dir>/<name>`.
    pub fn persist<T: Serialize + ?Sized>(&self, data: &T, name: &str) -> Result<PathBuf, StoreError> {
        let path = self.path(name);
        let io_err = |source| StoreError::Io { path: path.clone(), source };

        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io { path: self.dir.clone(), source })?;
        let mut out = BufWriter::new(File::create(&path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut out, data)
            .map_err(|source| StoreError::Json { path: path.clone(), source })?;
        out.flush().map_err(io_err)?;

        info!("Data saved to {name}");
        Ok(path)
    }

    /// [`Store::persist`], logging instead of returning the failure.
    pub fn persist_logged<T: Serialize + ?Sized>(&self, data: &T, name: &str) -> Option<PathBuf> {
        match self.persist(data, name) {
            Ok(path) => Some(path),
            Err(e) => {
                error!("Error saving data to file: {e}");
                None
            }
        }
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.path(name);
        let file = File::open(&path).map_err(|source| StoreError::Io { path: path.clone(), source })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json { path, source })
    }
}
