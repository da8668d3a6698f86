//! Mapping between dot indicators and sequence indices.

use crate::{options::Options, sequence::PanelSequence};

/// Ceiling division for positive divisors.
///
/// ```
/// use slidekit::pagination::ceil_div;
///
/// assert_eq!(ceil_div(7, 3), 3);
/// assert_eq!(ceil_div(6, 3), 2);
/// ```
pub fn ceil_div(a: usize, b: usize) -> usize {
    a.div_ceil(b)
}

/// Dot <-> sequence index translation for one sequence and option set.
///
/// Recomputed whenever the sequence or options are replaced; it holds no
/// navigation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationMapper {
    real_count: usize,
    step_size: usize,
    per_panel: bool,
    back_offset: usize,
}

impl PaginationMapper {
    /// Creates a mapper for `sequence` under `options`.
    pub fn new(sequence: &PanelSequence, options: &Options) -> Self {
        Self {
            real_count: sequence.real_count(),
            step_size: options.step_size.max(1),
            per_panel: options.pagination_per_panel,
            back_offset: sequence.back_offset(),
        }
    }

    /// Number of dots.
    pub fn dot_count(&self) -> usize {
        if self.per_panel {
            self.real_count
        } else {
            ceil_div(self.real_count, self.step_size)
        }
    }

    /// Dot that is active while the view rests at `sequence_index`.
    pub fn dot_index_of(&self, sequence: &PanelSequence, sequence_index: usize) -> usize {
        let real = sequence.real_index_of(sequence_index);
        let dot = if self.per_panel {
            real
        } else {
            real / self.step_size
        };
        dot.min(self.dot_count().saturating_sub(1))
    }

    /// Sequence index a dot selects. Out-of-range dots clamp to the last dot.
    pub fn sequence_index_of(&self, dot_index: usize) -> usize {
        let dot = dot_index.min(self.dot_count().saturating_sub(1));
        let real = if self.per_panel {
            dot
        } else {
            dot * self.step_size
        };
        real.min(self.real_count.saturating_sub(1)) + self.back_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{padding, px::Px};

    fn widths(n: usize) -> Vec<Px> {
        vec![Px(100); n]
    }

    #[test]
    fn ceil_div_rounds_up() {
        assert_eq!(ceil_div(7, 3), 3);
        assert_eq!(ceil_div(6, 3), 2);
        assert_eq!(ceil_div(1, 4), 1);
        assert_eq!(ceil_div(0, 4), 0);
    }

    #[test]
    fn paged_dots_group_by_step() {
        let sequence = PanelSequence::plain(&widths(5));
        let mapper = PaginationMapper::new(&sequence, &Options::default().step_size(2));
        assert_eq!(mapper.dot_count(), 3);
        assert_eq!(mapper.sequence_index_of(2), 4);
        assert_eq!(mapper.dot_index_of(&sequence, 3), 1);
        assert_eq!(mapper.dot_index_of(&sequence, 4), 2);
    }

    #[test]
    fn per_panel_dots() {
        let sequence = PanelSequence::plain(&widths(4));
        let options = Options::default().step_size(3).pagination_per_panel(true);
        let mapper = PaginationMapper::new(&sequence, &options);
        assert_eq!(mapper.dot_count(), 4);
        assert_eq!(mapper.sequence_index_of(3), 3);
        assert_eq!(mapper.dot_index_of(&sequence, 2), 2);
    }

    #[test]
    fn out_of_range_dot_clamps() {
        let sequence = PanelSequence::plain(&widths(5));
        let mapper = PaginationMapper::new(&sequence, &Options::default().step_size(2));
        assert_eq!(mapper.sequence_index_of(99), 4);
    }

    #[test]
    fn infinite_mapping_folds_clones_onto_sources() {
        let sequence = padding::build(&widths(6), 2, 2, 1);
        let options = Options::default()
            .panels_per_view(2)
            .step_size(2)
            .infinite(true);
        let mapper = PaginationMapper::new(&sequence, &options);
        assert_eq!(mapper.dot_count(), 3);
        assert_eq!(mapper.sequence_index_of(0), 2);
        assert_eq!(mapper.sequence_index_of(2), 6);
        // back clones show real panels 4 and 5
        assert_eq!(mapper.dot_index_of(&sequence, 0), 2);
        // first forward clone shows real panel 0
        assert_eq!(mapper.dot_index_of(&sequence, 8), 0);
    }

    #[test]
    fn dot_round_trip() {
        for n in 1..12 {
            for step in 1..5 {
                let sequence = PanelSequence::plain(&widths(n));
                let mapper = PaginationMapper::new(&sequence, &Options::default().step_size(step));
                for dot in 0..mapper.dot_count() {
                    let index = mapper.sequence_index_of(dot);
                    assert_eq!(mapper.dot_index_of(&sequence, index), dot);
                }
            }
        }
    }
}
