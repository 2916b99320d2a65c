//! MedDRA hierarchy lookups over a snapshot loaded once at startup.
//!
//! [`MeddraService`] loads the hierarchy and low-level term tables, builds
//! the index, and answers queries. The snapshot is immutable and shared
//! behind an [`Arc`], so clones of the service can serve readers on any
//! thread without locking.
//!
//! ```no_run
//! use meddra::MeddraService;
//!
//! # fn main() -> Result<(), meddra::ServiceError> {
//! let service = MeddraService::load("MedAscii/mdhier.asc", "MedAscii/llt.asc")?;
//! let anaemia = service.get_hierarchy_by_term("Anaemia folate deficiency", "PT")?;
//! let hearts = service.search_term("heart", "LLT")?;
//! println!("{} SOCs, {} LLTs", anaemia.soc_values.len(), hearts.llt_values.len());
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use log::info;
use meddra_index::{HierarchyIndex, IndexStats};
use meddra_loader::{load_hierarchy_file, load_low_level_term_file, LoadError, LoaderConfig};
use meddra_query::{QueryEngine, QueryError};
use meddra_records::{HierarchyRecord, HierarchyResult, LowLevelTermRecord};

pub use meddra_loader::NumericFieldPolicy;
pub use meddra_records::{HierarchyNode, TermLevel};

/// Errors surfaced by [`MeddraService`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Query(#[from] QueryError),
}

/// A loaded MedDRA snapshot.
#[derive(Debug, Clone)]
pub struct MeddraService {
    index: Arc<HierarchyIndex>,
}

impl MeddraService {
    /// Load both tables with the default [`LoaderConfig`].
    pub fn load<P, Q>(hierarchy_path: P, llt_path: Q) -> Result<Self, ServiceError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self::load_with_config(hierarchy_path, llt_path, &LoaderConfig::default())
    }

    pub fn load_with_config<P, Q>(
        hierarchy_path: P,
        llt_path: Q,
        config: &LoaderConfig,
    ) -> Result<Self, ServiceError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let records = load_hierarchy_file(hierarchy_path, config)?;
        let llts = load_low_level_term_file(llt_path, config)?;
        let service = Self::from_records(records, llts);
        let stats = service.stats();
        info!(
            "MedDRA snapshot ready: {} PTs across {} SOCs, {} current LLTs",
            stats.distinct_pts, stats.distinct_socs, stats.current_low_level_terms
        );
        Ok(service)
    }

    /// Build a service from tables that are already in memory.
    pub fn from_records(records: Vec<HierarchyRecord>, llts: Vec<LowLevelTermRecord>) -> Self {
        Self {
            index: Arc::new(HierarchyIndex::build(records, llts)),
        }
    }

    pub fn index(&self) -> &HierarchyIndex {
        &self.index
    }

    pub fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.index)
    }

    /// See [`QueryEngine::get_hierarchy_by_term`].
    pub fn get_hierarchy_by_term(
        &self,
        term_name: &str,
        term_type: &str,
    ) -> Result<HierarchyResult, QueryError> {
        self.engine().get_hierarchy_by_term(term_name, term_type)
    }

    /// See [`QueryEngine::search_term`].
    pub fn search_term(
        &self,
        search_prefix: &str,
        term_level: &str,
    ) -> Result<HierarchyResult, QueryError> {
        self.engine().search_term(search_prefix, term_level)
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
