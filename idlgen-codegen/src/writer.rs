//! Indentation-aware text sinks for generated output.

use crate::error::CodegenError;
use std::path::{Path, PathBuf};

/// One level of indentation.
pub const INDENT: &str = "    ";

/// Extension of the generated IDL file.
pub const IDL_EXTENSION: &str = "idl";

/// Extension of the generated native header.
pub const NATIVE_EXTENSION: &str = "h";

/// Line-oriented text buffer that prefixes each line with the current
/// indentation.
#[derive(Debug, Clone, Default)]
pub struct IndentedWriter {
    buffer: String,
    depth: usize,
}

impl IndentedWriter {
    /// Creates an empty writer at depth zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current indentation. Empty lines get no
    /// indentation.
    pub fn write_line(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        if !line.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
    }

    /// Writes an empty line.
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Increases indentation by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases indentation by one level, stopping at zero.
    pub fn unindent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Returns the current indentation depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consumes the writer and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

/// The pair of sinks produced by one generation run.
#[derive(Debug, Clone, Default)]
pub struct OutputFiles {
    /// IDL declarations.
    pub idl: IndentedWriter,
    /// Native wrapper classes.
    pub native: IndentedWriter,
}

/// Paths of files written by [`OutputFiles::write_to_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    /// Path of the IDL file.
    pub idl: PathBuf,
    /// Path of the native header.
    pub native: PathBuf,
}

impl OutputFiles {
    /// Creates an empty pair of sinks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `<dir>/<stem>.idl` and `<dir>/<stem>.h`, creating `dir` if
    /// needed.
    ///
    /// # Errors
    /// Returns `CodegenError::WriteFile` naming the path that failed.
    pub fn write_to_dir(&self, dir: &Path, stem: &str) -> Result<WrittenFiles, CodegenError> {
        std::fs::create_dir_all(dir).map_err(|source| CodegenError::WriteFile {
            path: dir.to_path_buf(),
            source,
        })?;

        let written = WrittenFiles {
            idl: dir.join(format!("{stem}.{IDL_EXTENSION}")),
            native: dir.join(format!("{stem}.{NATIVE_EXTENSION}")),
        };

        write_file(&written.idl, self.idl.as_str())?;
        write_file(&written.native, self.native.as_str())?;

        Ok(written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), CodegenError> {
    std::fs::write(path, content).map_err(|source| CodegenError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
