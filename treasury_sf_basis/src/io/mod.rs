//! Converting the basis table to columnar form and persisting it.

pub mod dataframe;
pub mod sink;

pub use dataframe::{basis_table_to_dataframe, read_basis_table};
pub use sink::{DataSink, ParquetSink, SinkError};
