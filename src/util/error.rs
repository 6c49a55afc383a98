// DietView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all DietView operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DietViewError {
    /// Plan loading or validation failed.
    Plan(PlanError),

    /// PDF export failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DietViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plan(e) => write!(f, "Plan error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DietViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Plan(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Plan errors
// ---------------------------------------------------------------------------

/// Errors related to plan loading and validation.
#[derive(Debug)]
pub enum PlanError {
    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Plan file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// A structural rule was violated (empty plan, missing options, bad key).
    Validation { reason: String },

    /// Duplicate section or option key detected.
    DuplicateKey { key: String, context: String },

    /// A count limit was exceeded.
    LimitExceeded {
        what: &'static str,
        count: usize,
        max: usize,
    },

    /// I/O error reading a plan file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse TOML '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Plan '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Validation { reason } => write!(f, "{reason}"),
            Self::DuplicateKey { key, context } => {
                write!(f, "Duplicate key '{key}' in {context}")
            }
            Self::LimitExceeded { what, count, max } => {
                write!(f, "Too many {what} ({count}), maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading plan '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PlanError> for DietViewError {
    fn from(e: PlanError) -> Self {
        Self::Plan(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to PDF export.
#[derive(Debug)]
pub enum ExportError {
    /// PDF document generation failed.
    Pdf { source: printpdf::Error },

    /// I/O error writing the output file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf { source } => write!(f, "PDF generation failed: {source}"),
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pdf { source } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for DietViewError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for DietView results.
pub type Result<T> = std::result::Result<T, DietViewError>;
