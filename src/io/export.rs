//! Connection table serialization
//!
//! The table has the header `step,start_pin,end_pin` followed by one
//! newline-terminated row of plain integers per connection.

use std::io::Write;
use std::path::Path;

use crate::algorithm::executor::Connection;
use crate::io::error::{Result, ThreadError};

/// Column names of the connection table
pub const CONNECTION_HEADER: [&str; 3] = ["step", "start_pin", "end_pin"];

/// Write the connection table to any writer
///
/// # Errors
///
/// Returns an error if a record cannot be written or the writer fails to flush
pub fn write_connections<W: Write>(writer: W, connections: &[Connection]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Headers are derived from the first serialized record
    if connections.is_empty() {
        csv_writer.write_record(CONNECTION_HEADER)?;
    }
    for connection in connections {
        csv_writer.serialize(connection)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Render the connection table as a string
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn connections_to_csv(connections: &[Connection]) -> Result<String> {
    let mut buffer = Vec::new();
    write_connections(&mut buffer, connections)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the connection table to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be created
/// - Serialization fails
pub fn export_connections_csv(output_path: &Path, connections: &[Connection]) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ThreadError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| ThreadError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    write_connections(file, connections).map_err(|error| match error {
        ThreadError::CsvExport { source, .. } => ThreadError::CsvExport {
            path: output_path.to_path_buf(),
            source,
        },
        ThreadError::FileSystem { source, .. } => ThreadError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write connections",
            source,
        },
        other => other,
    })
}
