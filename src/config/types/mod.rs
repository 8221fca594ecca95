//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Dotted key paths for diagnostics             |
//! | `format` | File format detection (TOML / JSON)          |

mod error;
mod field;
mod format;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use format::ConfigFormat;
