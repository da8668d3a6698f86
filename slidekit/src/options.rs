//! Carousel options and responsive breakpoint tables.
//!
//! ## Usage
//!
//! Build an [`Options`] with its setters, validate it once, and hand it to
//! [`Carousel::new`](crate::Carousel::new). Swap it wholesale through
//! [`ResponsiveOptions::resolve`] when the viewport crosses a breakpoint.

use std::time::Duration;

use derive_setters::Setters;

use crate::{error::ConfigError, px::Px};

const DEFAULT_PANELS_PER_VIEW: usize = 3;
const DEFAULT_AUTO_PLAY_DELAY_MS: u64 = 5000;

/// Shape of the glyphs drawn on the directional controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArrowStyle {
    /// Full arrows with a shaft.
    Full,
    /// Chevron heads only.
    #[default]
    Head,
    /// Thin triangle-headed arrows.
    Thin,
}

impl ArrowStyle {
    /// Returns the `(backward, forward)` glyphs for this style.
    pub fn glyphs(self) -> (&'static str, &'static str) {
        match self {
            Self::Full => ("\u{1F860}", "\u{1F862}"),
            Self::Head => ("\u{276E}", "\u{276F}"),
            Self::Thin => ("\u{1F890}", "\u{1F892}"),
        }
    }
}

/// Where the directional controls sit relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlPosition {
    /// Above the panels.
    #[default]
    Top,
    /// Below the panels.
    Bottom,
}

/// Directional control options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationOptions {
    /// Whether the controls are rendered at all.
    pub active: bool,
    /// Glyph style of the controls.
    pub arrow: ArrowStyle,
    /// Placement of the controls.
    pub position: ControlPosition,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            active: true,
            arrow: ArrowStyle::default(),
            position: ControlPosition::default(),
        }
    }
}

/// Dot indicator options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaginationOptions {
    /// Whether the dots are rendered at all.
    pub active: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self { active: true }
    }
}

/// Fixed-interval auto advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoPlay {
    /// Whether the carousel advances on its own.
    pub active: bool,
    /// Interval between advances, in milliseconds.
    pub delay_ms: u64,
}

impl AutoPlay {
    /// Interval between two advances.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self {
            active: false,
            delay_ms: DEFAULT_AUTO_PLAY_DELAY_MS,
        }
    }
}

/// Options for one navigation session.
///
/// Options are immutable while the carousel runs and are replaced wholesale
/// on re-configuration.
///
/// # Examples
///
/// ```
/// use slidekit::Options;
///
/// let options = Options::default()
///     .panels_per_view(2)
///     .step_size(2)
///     .infinite(true);
/// assert!(options.validate().is_ok());
/// assert!(Options::default().step_size(0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Number of panels visible at once.
    pub panels_per_view: usize,
    /// Number of panels advanced per step.
    pub step_size: usize,
    /// Wrap around at the ends when not infinite.
    #[cfg_attr(feature = "serde", serde(rename = "loop"))]
    pub looping: bool,
    /// Fake an endless loop with boundary clones.
    pub infinite: bool,
    /// Right-to-left layout; mirrors offset signs.
    pub rtl: bool,
    /// One dot per real panel instead of one dot per step.
    pub pagination_per_panel: bool,
    /// Forward clones added beyond the minimum the teleport needs.
    pub forward_slack: usize,
    /// Auto advance settings.
    pub auto_play: AutoPlay,
    /// Directional control settings.
    pub navigation: NavigationOptions,
    /// Dot indicator settings.
    pub pagination: PaginationOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            panels_per_view: DEFAULT_PANELS_PER_VIEW,
            step_size: 1,
            looping: true,
            infinite: false,
            rtl: false,
            pagination_per_panel: false,
            forward_slack: 1,
            auto_play: AutoPlay::default(),
            navigation: NavigationOptions::default(),
            pagination: PaginationOptions::default(),
        }
    }
}

impl Options {
    /// Checks the numeric invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panels_per_view == 0 {
            return Err(ConfigError::ZeroPanelsPerView);
        }
        if self.step_size == 0 {
            return Err(ConfigError::ZeroStepSize);
        }
        Ok(())
    }
}

/// Options that apply while the viewport is at most `max_width` wide.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Widest viewport this entry applies to.
    pub max_width: Px,
    /// Options used under this breakpoint.
    pub options: Options,
}

/// Base options plus a breakpoint table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponsiveOptions {
    /// Options used above every breakpoint.
    pub base: Options,
    /// Breakpoints in any order.
    pub breakpoints: Vec<Breakpoint>,
}

impl ResponsiveOptions {
    /// Wraps options with no breakpoints.
    pub fn new(base: Options) -> Self {
        Self {
            base,
            breakpoints: Vec::new(),
        }
    }

    /// Adds a breakpoint.
    pub fn breakpoint(mut self, max_width: Px, options: Options) -> Self {
        self.breakpoints.push(Breakpoint { max_width, options });
        self
    }

    /// Picks the options for a viewport width.
    ///
    /// The narrowest breakpoint that still covers `viewport_width` wins;
    /// wider viewports fall back to the base options.
    pub fn resolve(&self, viewport_width: Px) -> &Options {
        self.breakpoints
            .iter()
            .filter(|bp| viewport_width <= bp.max_width)
            .min_by_key(|bp| bp.max_width)
            .map_or(&self.base, |bp| &bp.options)
    }

    /// Validates the base options and every breakpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base.validate()?;
        self.breakpoints
            .iter()
            .try_for_each(|bp| bp.options.validate())
    }
}
