//! Navigation state machine.
//!
//! # Responsibilities
//!
//! - Own the current and previous sequence index and the applied offset.
//! - Step forward/backward by `step_size`, wrapping when `looping`.
//! - In infinite mode, keep the index inside the padded sequence by
//!   teleporting to a visually identical index before an animated step.
//! - Jump directly to a real panel or a sequence index.
//!
//! Every operation runs to completion and returns the ordered [`Move`]s the
//! renderer must apply. An empty list means nothing moved.

use smallvec::{SmallVec, smallvec};
use tracing::{debug, trace};

use crate::{offset, options::Options, pagination::ceil_div, px::Px, sequence::PanelSequence};

/// Travel direction of the last operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward higher indices.
    #[default]
    Forward,
    /// Toward lower indices.
    Backward,
}

/// One positioning instruction for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    /// Sequence index the view rests on after this move.
    pub index: usize,
    /// Cumulative translation after this move.
    pub offset: Px,
    /// Animate the translation. False for teleports.
    pub with_transition: bool,
}

/// Ordered moves produced by one operation: none, one, or teleport + step.
pub type Moves = SmallVec<[Move; 2]>;

/// Current position of one carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    previous: usize,
    offset: Px,
    direction: Direction,
}

impl NavigationState {
    /// Rests the view on the sequence's home index.
    pub fn new(sequence: &PanelSequence, options: &Options) -> Self {
        let home = sequence.home();
        Self {
            current: home,
            previous: home,
            offset: offset::home_offset(sequence, options.panels_per_view, options.rtl),
            direction: Direction::Forward,
        }
    }

    /// Rests the view on real panel `real_index` of a freshly built sequence.
    ///
    /// The offset is derived from the home offset because the sequence it was
    /// accumulated against no longer exists.
    pub fn restore(sequence: &PanelSequence, options: &Options, real_index: usize) -> Self {
        let index = target_for_real(sequence, real_index);
        Self {
            current: index,
            previous: index,
            offset: offset::offset_at(sequence, index, options.panels_per_view, options.rtl),
            direction: Direction::Forward,
        }
    }

    /// Sequence index the view rests on.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Sequence index the view rested on before the last move.
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// Applied cumulative translation.
    pub fn offset(&self) -> Px {
        self.offset
    }

    /// Direction of the last operation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances by one step.
    pub fn step_forward(&mut self, sequence: &PanelSequence, options: &Options) -> Moves {
        self.direction = Direction::Forward;
        let len = sequence.len();
        let step = options.step_size;

        if !options.infinite {
            let target = if self.current + step < len {
                self.current + step
            } else if options.looping {
                0
            } else {
                trace!(current = self.current, "forward step blocked at end");
                return Moves::new();
            };
            return self.settle(sequence, options, target);
        }

        let per_view = options.panels_per_view;
        if self.current + step + per_view <= len {
            let target = self.current + step;
            return smallvec![self.move_to(sequence, options, target, true)];
        }

        // Largest index a full step can start from without leaving the padding.
        let last_start = len.saturating_sub(per_view + step);
        let loops = ceil_div(self.current - last_start, sequence.real_count());
        let equivalent = self.current.saturating_sub(loops * sequence.real_count());
        debug!(
            from = self.current,
            to = equivalent,
            "teleporting before forward step"
        );
        let teleport = self.move_to(sequence, options, equivalent, false);
        let animate = self.move_to(sequence, options, equivalent + step, true);
        smallvec![teleport, animate]
    }

    /// Moves back by one step.
    pub fn step_backward(&mut self, sequence: &PanelSequence, options: &Options) -> Moves {
        self.direction = Direction::Backward;
        let step = options.step_size;

        if self.current >= step {
            let target = self.current - step;
            return self.settle(sequence, options, target);
        }

        if !options.infinite {
            if !options.looping {
                trace!(current = self.current, "backward step blocked at start");
                return Moves::new();
            }
            let target = sequence.len() - 1;
            return self.settle(sequence, options, target);
        }

        let loops = ceil_div(step - self.current, sequence.real_count());
        let equivalent = self.current + loops * sequence.real_count();
        debug!(
            from = self.current,
            to = equivalent,
            "teleporting before backward step"
        );
        let teleport = self.move_to(sequence, options, equivalent, false);
        let animate = self.move_to(sequence, options, equivalent - step, true);
        smallvec![teleport, animate]
    }

    /// Jumps to real panel `real_index`, clamped to the last real panel.
    pub fn jump_to(
        &mut self,
        sequence: &PanelSequence,
        options: &Options,
        real_index: usize,
    ) -> Moves {
        let target = target_for_real(sequence, real_index);
        self.jump_to_index(sequence, options, target)
    }

    /// Jumps to `sequence_index`, clamped to the sequence.
    pub fn jump_to_index(
        &mut self,
        sequence: &PanelSequence,
        options: &Options,
        sequence_index: usize,
    ) -> Moves {
        let target = sequence_index.min(sequence.len().saturating_sub(1));
        if target != self.current {
            self.direction = if target > self.current {
                Direction::Forward
            } else {
                Direction::Backward
            };
        }
        self.settle(sequence, options, target)
    }

    fn settle(&mut self, sequence: &PanelSequence, options: &Options, target: usize) -> Moves {
        if target == self.current {
            trace!(current = self.current, "navigation would not move");
            return Moves::new();
        }
        smallvec![self.move_to(sequence, options, target, true)]
    }

    fn move_to(
        &mut self,
        sequence: &PanelSequence,
        options: &Options,
        target: usize,
        with_transition: bool,
    ) -> Move {
        self.previous = self.current;
        self.current = target;
        self.offset = if target == sequence.home() {
            offset::home_offset(sequence, options.panels_per_view, options.rtl)
        } else {
            self.offset + offset::delta(sequence, self.previous, target, options.rtl)
        };
        Move {
            index: target,
            offset: self.offset,
            with_transition,
        }
    }
}

fn target_for_real(sequence: &PanelSequence, real_index: usize) -> usize {
    let real = real_index.min(sequence.real_count().saturating_sub(1));
    (real + sequence.back_offset()).min(sequence.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::padding;

    fn plain(n: usize) -> PanelSequence {
        PanelSequence::plain(&vec![Px(100); n])
    }

    #[test]
    fn bounded_forward_stops_at_end() {
        let sequence = plain(5);
        let options = Options::default().step_size(2).looping(false);
        let mut state = NavigationState::new(&sequence, &options);

        assert_eq!(state.step_forward(&sequence, &options).len(), 1);
        assert_eq!(state.step_forward(&sequence, &options).len(), 1);
        assert_eq!(state.current(), 4);
        assert!(state.step_forward(&sequence, &options).is_empty());
        assert_eq!(state.current(), 4);
        assert_eq!(state.offset(), Px(-400));
    }

    #[test]
    fn looping_wraps_both_ways() {
        let sequence = plain(3);
        let options = Options::default().looping(true);
        let mut state = NavigationState::new(&sequence, &options);

        let moves = state.step_backward(&sequence, &options);
        assert_eq!(moves[0].index, 2);
        assert_eq!(moves[0].offset, Px(-200));

        let moves = state.step_forward(&sequence, &options);
        assert_eq!(moves[0].index, 0);
        assert_eq!(moves[0].offset, Px::ZERO);
        assert_eq!(state.previous(), 2);
    }

    #[test]
    fn single_panel_loop_is_a_no_op() {
        let sequence = plain(1);
        let options = Options::default().looping(true);
        let mut state = NavigationState::new(&sequence, &options);
        assert!(state.step_forward(&sequence, &options).is_empty());
        assert!(state.step_backward(&sequence, &options).is_empty());
    }

    #[test]
    fn bounded_backward_at_start_is_a_no_op() {
        let sequence = plain(3);
        let options = Options::default().looping(false);
        let mut state = NavigationState::new(&sequence, &options);
        assert!(state.step_backward(&sequence, &options).is_empty());
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn infinite_forward_teleports_then_animates() {
        let options = Options::default()
            .panels_per_view(3)
            .step_size(1)
            .infinite(true);
        let sequence = padding::build(&vec![Px(100); 7], 3, 1, options.forward_slack);
        let mut state = NavigationState::new(&sequence, &options);
        assert_eq!(state.current(), 3);
        assert_eq!(state.offset(), Px(-300));

        for expected in 4..=10 {
            let moves = state.step_forward(&sequence, &options);
            assert_eq!(moves.len(), 1);
            assert_eq!(state.current(), expected);
        }

        let moves = state.step_forward(&sequence, &options);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].index, 3);
        assert!(!moves[0].with_transition);
        assert_eq!(moves[0].offset, Px(-300));
        assert_eq!(moves[1].index, 4);
        assert!(moves[1].with_transition);
        assert_eq!(moves[1].offset, Px(-400));
        assert_eq!(state.previous(), 3);
    }

    #[test]
    fn infinite_backward_teleports_into_real_region() {
        let options = Options::default()
            .panels_per_view(2)
            .step_size(2)
            .infinite(true);
        let sequence = padding::build(&vec![Px(50); 5], 2, 2, options.forward_slack);
        let mut state = NavigationState::new(&sequence, &options);
        assert_eq!(state.current(), 2);

        let moves = state.step_backward(&sequence, &options);
        assert_eq!(moves.len(), 1);
        assert_eq!(state.current(), 0);

        let moves = state.step_backward(&sequence, &options);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].index, 5);
        assert!(!moves[0].with_transition);
        assert_eq!(moves[1].index, 3);
        assert_eq!(sequence.visible_sources(moves[1].index, 2), vec![1, 2]);
    }

    #[test]
    fn jump_clamps_and_skips_redundant_moves() {
        let sequence = plain(4);
        let options = Options::default();
        let mut state = NavigationState::new(&sequence, &options);

        let moves = state.jump_to(&sequence, &options, 10);
        assert_eq!(moves[0].index, 3);
        assert_eq!(state.direction(), Direction::Forward);
        assert!(state.jump_to(&sequence, &options, 3).is_empty());

        state.jump_to(&sequence, &options, 1);
        assert_eq!(state.previous(), 3);
        assert_eq!(state.direction(), Direction::Backward);
        assert_eq!(state.offset(), Px(-100));
    }

    #[test]
    fn infinite_jump_adds_back_offset() {
        let options = Options::default().panels_per_view(2).infinite(true);
        let sequence = padding::build(&vec![Px(10); 4], 2, 1, options.forward_slack);
        let mut state = NavigationState::new(&sequence, &options);
        state.jump_to(&sequence, &options, 3);
        assert_eq!(state.current(), 5);
        assert!(state.current() + 2 <= sequence.len());
    }

    #[test]
    fn rtl_flips_offset_sign() {
        let sequence = plain(3);
        let options = Options::default().panels_per_view(1).rtl(true);
        let mut state = NavigationState::new(&sequence, &options);
        assert_eq!(state.offset(), Px(-200));

        let moves = state.step_forward(&sequence, &options);
        assert_eq!(moves[0].index, 1);
        assert_eq!(moves[0].offset - Px(-200), Px(100));
    }

    #[test]
    fn restore_lands_on_real_panel() {
        let options = Options::default().panels_per_view(2).infinite(true);
        let sequence = padding::build(&vec![Px(10); 6], 2, 1, options.forward_slack);
        let state = NavigationState::restore(&sequence, &options, 4);
        assert_eq!(state.current(), 6);
        assert_eq!(state.offset(), Px(-60));
    }
}
