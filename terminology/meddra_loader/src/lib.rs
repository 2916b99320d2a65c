//! Loader for the MedDRA ASCII distribution.
//!
//! Two tables are read, one record per line with `$`-separated fields:
//!
//! - the hierarchy table (`mdhier.asc`): PT, HLT, HLGT and SOC codes and
//!   names, the SOC abbreviation, the PT-SOC code and the primary SOC flag;
//! - the low-level term table (`llt.asc`): LLT code and name, the owning PT
//!   code and the currency flag.
//!
//! Rows with too few fields are skipped. Required codes that are not integers
//! either abort the load or skip the row, depending on [`NumericFieldPolicy`].
//!
//! # Examples
//!
//! ```no_run
//! use meddra_loader::{load_hierarchy_file, load_low_level_term_file, LoaderConfig};
//!
//! # fn main() -> Result<(), meddra_loader::LoadError> {
//! let config = LoaderConfig::default();
//! let records = load_hierarchy_file("MedAscii/mdhier.asc", &config)?;
//! let llts = load_low_level_term_file("MedAscii/llt.asc", &config)?;
//! println!("{} hierarchy rows, {} low-level terms", records.len(), llts.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod low_level_term;
mod reader;

pub use config::{LoaderConfig, NumericFieldPolicy};
pub use error::{FieldError, LoadError};
pub use hierarchy::{load_hierarchy_file, parse_hierarchy, parse_hierarchy_line};
pub use low_level_term::{load_low_level_term_file, parse_low_level_term_line, parse_low_level_terms};
