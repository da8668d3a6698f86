//! Enabled state of the directional controls.

/// Which directional controls accept input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ControlVisibility {
    /// The backward control is enabled.
    pub can_step_backward: bool,
    /// The forward control is enabled.
    pub can_step_forward: bool,
}

/// Computes control visibility for a resting index.
///
/// Infinite carousels never disable their controls. Otherwise a control is
/// disabled whenever a full step in its direction would leave the sequence,
/// unless `looping` wraps around. A control is never enabled when pressing it
/// would not move.
///
/// ```
/// use slidekit::affordance::control_visibility;
///
/// let at_end = control_visibility(4, 5, 1, false, false);
/// assert!(at_end.can_step_backward);
/// assert!(!at_end.can_step_forward);
///
/// // five panels in steps of three: index 3 cannot step forward again
/// let short_tail = control_visibility(3, 5, 3, false, false);
/// assert!(!short_tail.can_step_forward);
/// ```
pub fn control_visibility(
    current: usize,
    sequence_len: usize,
    step_size: usize,
    looping: bool,
    infinite: bool,
) -> ControlVisibility {
    if infinite {
        return ControlVisibility {
            can_step_backward: true,
            can_step_forward: true,
        };
    }
    ControlVisibility {
        can_step_backward: looping || current >= step_size.max(1),
        can_step_forward: looping || current + step_size.max(1) < sequence_len,
    }
}
