//! One carousel instance: triggers in, render frames out.
//!
//! ## Usage
//!
//! Feed measured panel widths and [`Options`] into [`Carousel::new`], then
//! route every discrete trigger through [`Carousel::handle`] and apply the
//! returned [`Transition`] frames in order.

use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    affordance::{ControlVisibility, control_visibility},
    autoplay::AutoAdvance,
    error::ConfigError,
    navigation::{Move, Moves, NavigationState},
    options::{ControlPosition, Options, ResponsiveOptions},
    padding,
    pagination::PaginationMapper,
    px::Px,
    sequence::PanelSequence,
};

/// Discrete input delivered to a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Forward control.
    Next,
    /// Backward control.
    Previous,
    /// Dot indicator at the given index.
    SelectDot(usize),
    /// Auto advance timer.
    Tick,
}

/// Render instruction for one settled position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Sequence index the view rests on.
    pub sequence_index: usize,
    /// Translation to apply.
    pub offset: Px,
    /// Animate toward `offset`. False for teleports and re-layouts.
    pub with_transition: bool,
    /// Dot to mark as selected.
    pub active_dot: usize,
    /// Enabled state of the directional controls.
    pub controls: ControlVisibility,
}

/// Frames produced by one trigger, in the order they must be applied.
///
/// Empty when the trigger did not move the carousel; callers can skip the
/// re-render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    frames: SmallVec<[Frame; 2]>,
}

impl Transition {
    /// Whether the trigger moved the carousel.
    pub fn moved(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Whether the first frame is an un-animated teleport.
    pub fn teleported(&self) -> bool {
        self.frames.len() > 1 && !self.frames[0].with_transition
    }

    /// Frames in application order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Final settled frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl IntoIterator for Transition {
    type Item = Frame;
    type IntoIter = smallvec::IntoIter<[Frame; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

/// Navigation engine for one mounted carousel.
#[derive(Clone, Debug)]
pub struct Carousel {
    widths: Vec<Px>,
    options: Options,
    sequence: PanelSequence,
    pagination: PaginationMapper,
    state: NavigationState,
    auto_advance: Option<AutoAdvance>,
}

impl Carousel {
    /// Builds a carousel over measured real panel widths.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidekit::{Carousel, Options, Trigger, px::Px};
    ///
    /// let mut carousel = Carousel::new(
    ///     vec![Px(100); 5],
    ///     Options::default().panels_per_view(2).step_size(2).looping(false),
    /// )?;
    /// let transition = carousel.handle(Trigger::SelectDot(2));
    /// let frame = transition.last().copied().unwrap_or(carousel.frame());
    /// assert_eq!(frame.sequence_index, 4);
    /// assert!(!frame.controls.can_step_forward);
    /// # Ok::<(), slidekit::ConfigError>(())
    /// ```
    pub fn new(widths: impl Into<Vec<Px>>, options: Options) -> Result<Self, ConfigError> {
        let widths = widths.into();
        options.validate()?;
        if widths.is_empty() {
            return Err(ConfigError::NoPanels);
        }
        let sequence = build_sequence(&widths, &options);
        let pagination = PaginationMapper::new(&sequence, &options);
        let state = NavigationState::new(&sequence, &options);
        let auto_advance = auto_advance_for(&options);
        debug!(
            panels = widths.len(),
            sequence_len = sequence.len(),
            infinite = options.infinite,
            "carousel created"
        );
        Ok(Self {
            widths,
            options,
            sequence,
            pagination,
            state,
            auto_advance,
        })
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Panel sequence the viewport slides over.
    pub fn sequence(&self) -> &PanelSequence {
        &self.sequence
    }

    /// Navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Dot mapping for the current sequence and options.
    pub fn pagination(&self) -> &PaginationMapper {
        &self.pagination
    }

    /// Measured widths of the real panels.
    pub fn widths(&self) -> &[Px] {
        &self.widths
    }

    /// Real panel the view starts on.
    pub fn current_real_index(&self) -> usize {
        self.sequence.real_index_of(self.state.current())
    }

    /// Whether the directional controls are rendered.
    ///
    /// Controls only make sense when there are more panels than fit in one
    /// view.
    pub fn shows_controls(&self) -> bool {
        self.options.navigation.active && self.widths.len() > self.options.panels_per_view
    }

    /// Whether the dot indicators are rendered.
    pub fn shows_pagination(&self) -> bool {
        self.options.pagination.active
    }

    /// Glyphs and placement for the directional controls.
    pub fn control_glyphs(&self) -> ((&'static str, &'static str), ControlPosition) {
        (
            self.options.navigation.arrow.glyphs(),
            self.options.navigation.position,
        )
    }

    /// Enabled state of the directional controls at the current index.
    pub fn controls(&self) -> ControlVisibility {
        control_visibility(
            self.state.current(),
            self.sequence.len(),
            self.options.step_size,
            self.options.looping,
            self.options.infinite,
        )
    }

    /// Settled render state without a transition.
    pub fn frame(&self) -> Frame {
        Frame {
            sequence_index: self.state.current(),
            offset: self.state.offset(),
            with_transition: false,
            active_dot: self
                .pagination
                .dot_index_of(&self.sequence, self.state.current()),
            controls: self.controls(),
        }
    }

    /// Processes one trigger.
    pub fn handle(&mut self, trigger: Trigger) -> Transition {
        match trigger {
            Trigger::Next | Trigger::Tick => self.step_forward(),
            Trigger::Previous => self.step_backward(),
            Trigger::SelectDot(dot) => self.select_dot(dot),
        }
    }

    /// Advances one step.
    pub fn step_forward(&mut self) -> Transition {
        let moves = self.state.step_forward(&self.sequence, &self.options);
        self.transition(moves)
    }

    /// Moves back one step.
    pub fn step_backward(&mut self) -> Transition {
        let moves = self.state.step_backward(&self.sequence, &self.options);
        self.transition(moves)
    }

    /// Jumps to a real panel.
    pub fn jump_to(&mut self, real_index: usize) -> Transition {
        let moves = self.state.jump_to(&self.sequence, &self.options, real_index);
        self.transition(moves)
    }

    /// Jumps to the panel a dot stands for. Out-of-range dots clamp.
    ///
    /// Selecting the active dot never moves, even when the view rests on a
    /// clone of the dot's panel.
    pub fn select_dot(&mut self, dot_index: usize) -> Transition {
        let dot_count = self.pagination.dot_count();
        if dot_index >= dot_count {
            warn!(dot_index, dot_count, "dot index out of range; clamping");
        }
        let dot_index = dot_index.min(dot_count.saturating_sub(1));
        let active = self
            .pagination
            .dot_index_of(&self.sequence, self.state.current());
        if dot_index == active {
            trace!(dot_index, "active dot selected");
            return Transition::default();
        }
        let target = self.pagination.sequence_index_of(dot_index);
        let moves = self
            .state
            .jump_to_index(&self.sequence, &self.options, target);
        self.transition(moves)
    }

    /// Replaces the measured widths after a re-layout.
    ///
    /// The view stays on the same real panel and the offset is rebuilt for
    /// the new widths. The returned frame must be applied without animation.
    pub fn remeasure(&mut self, widths: impl Into<Vec<Px>>) -> Result<Frame, ConfigError> {
        let widths = widths.into();
        if widths.len() != self.widths.len() {
            return Err(ConfigError::PanelCountMismatch {
                expected: self.widths.len(),
                actual: widths.len(),
            });
        }
        self.widths = widths;
        self.rebuild();
        Ok(self.frame())
    }

    /// Swaps the options wholesale between triggers.
    ///
    /// The view stays on the same real panel. A running auto advance timer
    /// keeps running on the new delay; disabling auto play releases it.
    pub fn reconfigure(&mut self, options: Options) -> Result<Frame, ConfigError> {
        options.validate()?;
        if options.auto_play != self.options.auto_play {
            match (self.auto_advance.as_mut(), options.auto_play.active) {
                (Some(timer), true) => timer.retime(options.auto_play.delay()),
                (Some(timer), false) => {
                    timer.cancel();
                    self.auto_advance = None;
                }
                (None, _) => self.auto_advance = auto_advance_for(&options),
            }
        }
        self.options = options;
        self.rebuild();
        Ok(self.frame())
    }

    /// Handles a viewport resize: re-measures and applies the breakpoint
    /// options for `viewport_width` when they differ from the active ones.
    pub fn resize(
        &mut self,
        viewport_width: Px,
        widths: impl Into<Vec<Px>>,
        responsive: &ResponsiveOptions,
    ) -> Result<Frame, ConfigError> {
        let resolved = responsive.resolve(viewport_width);
        if *resolved != self.options {
            debug!(%viewport_width, "breakpoint changed; reconfiguring");
            self.remeasure(widths)?;
            return self.reconfigure(resolved.clone());
        }
        self.remeasure(widths)
    }

    /// Starts the auto advance timer when auto play is active.
    pub fn start_auto_play(&mut self, now: Instant) {
        if let Some(timer) = self.auto_advance.as_mut() {
            timer.start(now);
        }
    }

    /// Pauses auto advance.
    pub fn suspend_auto_play(&mut self) {
        if let Some(timer) = self.auto_advance.as_mut() {
            timer.suspend();
        }
    }

    /// Resumes auto advance with a full interval from `now`.
    pub fn resume_auto_play(&mut self, now: Instant) {
        if let Some(timer) = self.auto_advance.as_mut() {
            timer.resume(now);
        }
    }

    /// Releases the auto advance timer for good.
    pub fn cancel_auto_play(&mut self) {
        if let Some(timer) = self.auto_advance.as_mut() {
            timer.cancel();
        }
    }

    /// Auto advance timer, if auto play is configured.
    pub fn auto_advance(&self) -> Option<&AutoAdvance> {
        self.auto_advance.as_ref()
    }

    /// Fires a tick when the auto advance timer is due.
    pub fn poll_auto_play(&mut self, now: Instant) -> Option<Transition> {
        let due = self
            .auto_advance
            .as_mut()
            .is_some_and(|timer| timer.poll(now));
        due.then(|| self.handle(Trigger::Tick))
    }

    fn rebuild(&mut self) {
        let real_index = self.current_real_index();
        self.sequence = build_sequence(&self.widths, &self.options);
        self.pagination = PaginationMapper::new(&self.sequence, &self.options);
        self.state = NavigationState::restore(&self.sequence, &self.options, real_index);
    }

    fn transition(&self, moves: Moves) -> Transition {
        Transition {
            frames: moves.into_iter().map(|m| self.frame_for(m)).collect(),
        }
    }

    fn frame_for(&self, step: Move) -> Frame {
        Frame {
            sequence_index: step.index,
            offset: step.offset,
            with_transition: step.with_transition,
            active_dot: self.pagination.dot_index_of(&self.sequence, step.index),
            controls: control_visibility(
                step.index,
                self.sequence.len(),
                self.options.step_size,
                self.options.looping,
                self.options.infinite,
            ),
        }
    }
}

fn build_sequence(widths: &[Px], options: &Options) -> PanelSequence {
    if options.infinite {
        padding::build(
            widths,
            options.panels_per_view,
            options.step_size,
            options.forward_slack,
        )
    } else {
        PanelSequence::plain(widths)
    }
}

fn auto_advance_for(options: &Options) -> Option<AutoAdvance> {
    options
        .auto_play
        .active
        .then(|| AutoAdvance::new(options.auto_play.delay()))
}
