//! Clone padding for infinite mode.
//!
//! The real panels are framed by clones so that every view the state machine
//! can rest on is fully backed by panels. When a step would run past the
//! padding, the state machine teleports to a visually identical index one
//! loop earlier (or later) and animates the step from there.
//!
//! Teleport targets always exist when
//! `back_offset + forward_offset >= panels_per_view + step_size - 1`, and a
//! jump to the last real panel needs `panels_per_view - 1` clones behind it.
//! `back_offset` is one full view and `forward_offset` covers the larger of
//! the step overhang and the view overhang, plus configurable slack.

use tracing::trace;

use crate::{
    px::Px,
    sequence::{Panel, PanelSequence},
};

/// Number of clones placed in front of the real panels.
pub fn back_clone_count(panels_per_view: usize) -> usize {
    panels_per_view
}

/// Number of clones placed after the real panels.
pub fn forward_clone_count(panels_per_view: usize, step_size: usize, slack: usize) -> usize {
    panels_per_view.max(step_size).saturating_sub(1) + slack
}

/// Builds the padded sequence for infinite mode.
///
/// Back clones mirror the last `panels_per_view` real panels in their
/// original order; forward clones mirror the first real panels, wrapping
/// around when more clones than real panels are needed. Every entry at
/// sequence index `i` shows real panel `(i - back_offset) mod real_count`.
///
/// `widths` must not be empty and both counts must be at least 1; callers
/// validate [`Options`](crate::Options) first.
pub fn build(
    widths: &[Px],
    panels_per_view: usize,
    step_size: usize,
    slack: usize,
) -> PanelSequence {
    let real_count = widths.len();
    let back_offset = back_clone_count(panels_per_view);
    let forward_offset = forward_clone_count(panels_per_view, step_size, slack);

    let mut panels = Vec::with_capacity(real_count + back_offset + forward_offset);
    let clone_of = |source_index: usize| Panel {
        width: widths[source_index],
        is_clone: true,
        source_index,
    };

    panels.extend(
        (0..back_offset).map(|i| clone_of(wrap(i as isize - back_offset as isize, real_count))),
    );
    panels.extend(widths.iter().enumerate().map(|(source_index, &width)| Panel {
        width,
        is_clone: false,
        source_index,
    }));
    panels.extend((0..forward_offset).map(|i| clone_of(i % real_count)));

    trace!(real_count, back_offset, forward_offset, "built infinite padding");

    PanelSequence {
        panels,
        real_count,
        back_offset,
        forward_offset,
    }
}

fn wrap(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(n: i32) -> Vec<Px> {
        (0..n).map(|i| Px(100 + i)).collect()
    }

    #[test]
    fn seven_panels_three_per_view_step_one() {
        let sequence = build(&widths(7), 3, 1, 1);
        assert_eq!(sequence.back_offset(), 3);
        assert_eq!(sequence.forward_offset(), 3);
        assert_eq!(sequence.len(), 13);
        assert_eq!(sequence.home(), 3);
    }

    #[test]
    fn back_clones_mirror_tail_in_order() {
        let sequence = build(&widths(5), 2, 1, 1);
        let sources: Vec<_> = sequence.panels()[..2].iter().map(|p| p.source_index).collect();
        assert_eq!(sources, vec![3, 4]);
        assert!(sequence.panels()[..2].iter().all(|p| p.is_clone));
        assert_eq!(sequence.panels()[0].width, Px(103));
    }

    #[test]
    fn forward_clones_wrap_past_the_end() {
        let sequence = build(&widths(2), 1, 4, 1);
        assert_eq!(sequence.forward_offset(), 4);
        let tail: Vec<_> = sequence.panels()[3..].iter().map(|p| p.source_index).collect();
        assert_eq!(tail, vec![0, 1, 0, 1]);
    }

    #[test]
    fn back_clones_wrap_when_view_exceeds_panels() {
        let sequence = build(&widths(2), 3, 1, 0);
        let head: Vec<_> = sequence.panels()[..3].iter().map(|p| p.source_index).collect();
        assert_eq!(head, vec![1, 0, 1]);
    }

    #[test]
    fn every_index_maps_to_its_modular_source() {
        let sequence = build(&widths(4), 3, 2, 1);
        let back = sequence.back_offset() as isize;
        for (i, panel) in sequence.panels().iter().enumerate() {
            assert_eq!(panel.source_index, wrap(i as isize - back, 4));
            assert_eq!(sequence.real_index_of(i), panel.source_index);
        }
        assert_eq!(
            sequence.len(),
            4 + sequence.back_offset() + sequence.forward_offset()
        );
    }

    #[test]
    fn slack_only_adds_to_forward_clones() {
        let tight = build(&widths(6), 2, 3, 0);
        let loose = build(&widths(6), 2, 3, 2);
        assert_eq!(tight.forward_offset(), 2);
        assert_eq!(loose.forward_offset(), 4);
        assert_eq!(tight.back_offset(), loose.back_offset());
    }
}
