//! Span definitions per engine operation.

/// Create an allocation span.
#[macro_export]
macro_rules! allocate_span {
    ($total:expr, $len:expr) => {
        tracing::debug_span!("quarter.allocate", total = $total, quarters = $len)
    };
}

/// Create a redistribution span.
#[macro_export]
macro_rules! redistribute_span {
    ($total:expr, $len:expr) => {
        tracing::debug_span!("quarter.redistribute", total = $total, quarters = $len)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ALLOCATE: &str = "quarter.allocate";
    pub const REDISTRIBUTE: &str = "quarter.redistribute";
}
