/// A wiring mistake detected while resolving layout geometry or driving the list.
///
/// These are not transient: retrying the same call with the same inputs fails the same way.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("scroll view is missing")]
    MissingScrollView,
    #[error("scroll view has no content node")]
    MissingContent,
    #[error("content node has no layout declaration")]
    MissingLayout,
    #[error("item size must be finite and positive (got {width}x{height})")]
    InvalidItemSize { width: f64, height: f64 },
    #[error("view size must be finite and non-negative (got {width}x{height})")]
    InvalidViewSize { width: f64, height: f64 },
    #[error("padding and spacing must be finite and non-negative")]
    InvalidSpacing,
    #[error("list is not initialized")]
    NotInitialized,
    #[error("list is already initialized; use `reinitialize` to resolve geometry again")]
    AlreadyInitialized,
}
