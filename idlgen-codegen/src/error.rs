//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] idlgen_schema::ParseError),

    /// Schema resolution or validation error.
    #[error("schema error: {0}")]
    Schema(#[from] idlgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to write an output file.
    #[error("failed to write '{}': {source}", path.display())]
    WriteFile {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A class-projected struct has no interface identifier.
    #[error("struct '{name}' requires class projection but its override declares no Guid")]
    MissingGuid {
        /// Qualified struct name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_guid_message() {
        let err = CodegenError::MissingGuid {
            name: "Geo::Shape".to_string(),
        };
        assert!(err.to_string().contains("Geo::Shape"));
    }

    #[test]
    fn test_schema_error_conversion() {
        let err: CodegenError = idlgen_schema::SchemaError::TypeNotFound {
            name: "Float".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "schema error: type 'Float' not found");
    }

    #[test]
    fn test_write_file_message_names_path() {
        let err = CodegenError::WriteFile {
            path: PathBuf::from("out/Structs.idl"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write 'out/Structs.idl': denied");
    }
}
