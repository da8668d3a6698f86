//! Translation arithmetic.
//!
//! Offsets are signed translations along the main axis. Moving toward higher
//! indices pulls content to the left (negative) in left-to-right layouts and
//! pushes it to the right (positive) in right-to-left layouts.
//!
//! The state machine accumulates [`delta`]s instead of recomputing a total
//! from index 0, so a translation that was already applied is never
//! re-derived after a teleport.

use crate::{px::Px, sequence::PanelSequence};

/// Signed translation change for a move from `previous` to `current`.
///
/// Sums the widths of the panels in `[min, max)` of the two indices and signs
/// the result by travel direction and `rtl`.
///
/// ```
/// use slidekit::{offset, px::Px, sequence::PanelSequence};
///
/// let sequence = PanelSequence::plain(&[Px(100), Px(50), Px(80)]);
/// assert_eq!(offset::delta(&sequence, 0, 2, false), Px(-150));
/// assert_eq!(offset::delta(&sequence, 2, 0, false), Px(150));
/// assert_eq!(offset::delta(&sequence, 0, 2, true), Px(150));
/// ```
pub fn delta(sequence: &PanelSequence, previous: usize, current: usize, rtl: bool) -> Px {
    let (lo, hi) = if previous <= current {
        (previous, current)
    } else {
        (current, previous)
    };
    let span = sequence.width_of(lo..hi);
    let toward_higher = current > previous;
    if toward_higher != rtl { -span } else { span }
}

/// Translation of the resting view at [`PanelSequence::home`].
///
/// Left-to-right: everything in front of home is scrolled out to the left.
/// Right-to-left: the panels from `home + panels_per_view` onward sit to the
/// left of the viewport and are scrolled out.
pub fn home_offset(sequence: &PanelSequence, panels_per_view: usize, rtl: bool) -> Px {
    let home = sequence.home();
    if rtl {
        -sequence.width_of(home + panels_per_view..sequence.len())
    } else {
        -sequence.width_of(0..home)
    }
}

/// Translation for a view resting at `index`, derived from the home offset.
///
/// Only used when the sequence is rebuilt (re-measure, re-configuration);
/// navigation itself stays incremental.
pub fn offset_at(
    sequence: &PanelSequence,
    index: usize,
    panels_per_view: usize,
    rtl: bool,
) -> Px {
    home_offset(sequence, panels_per_view, rtl) + delta(sequence, sequence.home(), index, rtl)
}
