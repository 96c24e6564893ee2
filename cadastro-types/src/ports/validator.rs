//! Field validator port.

/// A single-field rule as seen by the request-validation layer.
///
/// Implementations are stateless and shared process-wide, so they must be
/// `Send + Sync`.
pub trait FieldValidator: Send + Sync + 'static {
    /// Short rule name used in logs.
    fn name(&self) -> &'static str;

    /// Decides whether `value` satisfies the rule.
    fn validate(&self, value: &str) -> bool;

    /// Rejection message naming the offending field and value.
    fn describe(&self, field: &str, value: &str) -> String;
}
