//! Navigation and positioning engine for paged carousels.
//!
//! `slidekit` decides where a carousel should be; a renderer decides how it
//! looks. Given measured panel widths and [`Options`], a [`Carousel`] turns
//! discrete [`Trigger`]s into ordered render [`Frame`]s: the sequence index
//! to rest on, the translation to apply, whether to animate it, the active
//! dot, and which directional controls are enabled.
//!
//! # Modes
//!
//! - **Bounded**: stepping stops at the ends.
//! - **Looping**: stepping past an end wraps to the other end.
//! - **Infinite**: the real panels are framed by clones and the index is
//!   silently teleported back into range, so forward and backward stepping
//!   never visibly end. See [`padding`].
//! - **Right-to-left**: offsets are mirrored; index movement is unchanged.
//!
//! # Example
//!
//! ```
//! use slidekit::{Carousel, Options, Trigger, px::Px};
//!
//! let widths = vec![Px(100); 7];
//! let mut carousel = Carousel::new(widths, Options::default().infinite(true))?;
//! assert_eq!(carousel.frame().sequence_index, 3);
//!
//! for frame in carousel.handle(Trigger::Next) {
//!     // apply `frame.offset`, animated unless `frame.with_transition` is false
//!     assert!(frame.with_transition);
//! }
//! # Ok::<(), slidekit::ConfigError>(())
//! ```

pub mod affordance;
pub mod autoplay;
pub mod carousel;
pub mod error;
pub mod navigation;
pub mod offset;
pub mod options;
pub mod padding;
pub mod pagination;
pub mod px;
pub mod sequence;

pub use affordance::ControlVisibility;
pub use autoplay::AutoAdvance;
pub use carousel::{Carousel, Frame, Transition, Trigger};
pub use error::ConfigError;
pub use navigation::{Direction, NavigationState};
pub use options::{
    ArrowStyle, AutoPlay, Breakpoint, ControlPosition, NavigationOptions, Options,
    PaginationOptions, ResponsiveOptions,
};
pub use pagination::PaginationMapper;
pub use px::Px;
pub use sequence::{Panel, PanelSequence};
