//! Configuration errors reported when a carousel is built or re-measured.

use thiserror::Error;

/// Rejected carousel configuration.
///
/// A carousel never runs with a degenerate sequence; construction fails
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `panels_per_view` was zero.
    #[error("panels_per_view must be at least 1")]
    ZeroPanelsPerView,
    /// `step_size` was zero.
    #[error("step_size must be at least 1")]
    ZeroStepSize,
    /// The panel provider yielded no panels.
    #[error("a carousel needs at least one panel")]
    NoPanels,
    /// A re-measure reported a different number of panels than were mounted.
    #[error("expected {expected} measured widths, got {actual}")]
    PanelCountMismatch {
        /// Number of real panels in the carousel.
        expected: usize,
        /// Number of widths supplied.
        actual: usize,
    },
}
