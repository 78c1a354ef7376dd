#![forbid(unsafe_code)]

//! Logging shim.
//!
//! With the `tracing` feature the `tracing` macros are re-exported here and at
//! the crate root. Without it, same-named macros expand to nothing, so call
//! sites in this crate and in dependents never need their own `cfg` gates.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, trace_span};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Discards a trace-level event.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Discards a debug-level event.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Yields a [`NoopSpan`](crate::logging::NoopSpan) in place of a trace span.
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in span returned by the span macros when tracing is off.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span. Nothing is recorded.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
