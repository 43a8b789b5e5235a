//! Registry error types.

/// Failure outcomes of registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// A bonus redemption asked for more than the account holds.
    #[error("insufficient bonus: requested {requested}, available {available}")]
    InsufficientBonus { requested: f64, available: f64 },

    /// No record carries the requested identifier.
    #[error("user with id {0} not found")]
    UserNotFound(i64),
}
