use std::fs::{self, File};
use std::path::PathBuf;

use async_trait::async_trait;
use polars_io::parquet::write::ParquetWriter;
use snafu::{Backtrace, ResultExt, Snafu};
use uuid::Uuid;

use crate::io::dataframe::basis_table_to_dataframe;
use crate::models::BasisTable;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// An error occurred while trying to write the data (e.g., file I/O error).
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    Write {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// Swapping the finished temporary file into place failed.
    #[snafu(display("Failed to replace {}: {source}", path.display()))]
    Replace {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// An error occurred while converting the table into the destination
    /// format (e.g. converting to a DataFrame).
    #[snafu(display("Data conversion error: {source}"))]
    Conversion {
        source: polars::prelude::PolarsError,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// This makes the trait flexible. For example:
    /// - A file sink might return `PathBuf`, the path to the created file.
    /// - A database sink might return `usize`, the number of rows inserted.
    type Output;

    /// Writes the assembled basis table to the destination.
    async fn write(&self, table: &BasisTable) -> Result<Self::Output, SinkError>;
}

/// Writes the basis table as a single parquet file.
///
/// The write is atomic with respect to readers of the target path: data goes
/// to a uniquely named sibling temp file first and is renamed over the target
/// only after a clean finish. A failed run leaves any previous output intact.
pub struct ParquetSink {
    path: PathBuf,
}

impl ParquetSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Final output path this sink renames onto.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "basis".to_string());
        self.path
            .with_file_name(format!("{file_name}.{}.tmp", Uuid::new_v4()))
    }
}

#[async_trait]
impl DataSink for ParquetSink {
    type Output = PathBuf;

    async fn write(&self, table: &BasisTable) -> Result<PathBuf, SinkError> {
        let mut df = basis_table_to_dataframe(table).context(ConversionSnafu)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context(WriteSnafu {
                    path: parent.to_path_buf(),
                })?;
            }
        }

        let tmp_path = self.temp_path();
        let written = File::create(&tmp_path)
            .context(WriteSnafu {
                path: tmp_path.clone(),
            })
            .and_then(|file| ParquetWriter::new(file).finish(&mut df).context(ConversionSnafu));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }

        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(source).context(ReplaceSnafu {
                path: self.path.clone(),
            });
        }

        Ok(self.path.clone())
    }
}
