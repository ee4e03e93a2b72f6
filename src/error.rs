use thiserror::Error;

/// Why a test case could not start running its sub-tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreCheckError {
    #[error("Unit model class \"{name}\" does not exist")]
    UnitNotFound { name: String },

    /// Probing the unit under test panicked.
    #[error("{0}")]
    Probe(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no test case classes registered")]
    Empty,

    #[error("unknown test case class \"{0}\"")]
    UnknownCase(String),
}
