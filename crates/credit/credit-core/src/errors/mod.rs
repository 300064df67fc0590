mod credit_error;

pub use credit_error::CreditError;

/// Result alias used across the workspace.
pub type CreditResult<T> = Result<T, CreditError>;
