//! Panel descriptors and the (possibly clone-padded) panel sequence.

use crate::px::Px;

/// One content unit as seen by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panel {
    /// Measured extent along the main axis.
    pub width: Px,
    /// True for padding copies in infinite mode.
    pub is_clone: bool,
    /// Real panel this entry shows. Equals its own real index for real panels.
    pub source_index: usize,
}

/// Ordered panels the viewport slides over.
///
/// Without infinite mode this is exactly the real panels. With it, the real
/// panels are framed by `back_offset` clones in front and `forward_offset`
/// clones behind; see [`padding::build`](crate::padding::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelSequence {
    pub(crate) panels: Vec<Panel>,
    pub(crate) real_count: usize,
    pub(crate) back_offset: usize,
    pub(crate) forward_offset: usize,
}

impl PanelSequence {
    /// Builds an unpadded sequence from measured real widths.
    pub fn plain(widths: &[Px]) -> Self {
        let panels = widths
            .iter()
            .enumerate()
            .map(|(source_index, &width)| Panel {
                width,
                is_clone: false,
                source_index,
            })
            .collect();
        Self {
            panels,
            real_count: widths.len(),
            back_offset: 0,
            forward_offset: 0,
        }
    }

    /// Total number of entries, clones included.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the sequence holds no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Number of real panels.
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Number of clones in front of the first real panel.
    pub fn back_offset(&self) -> usize {
        self.back_offset
    }

    /// Number of clones after the last real panel.
    pub fn forward_offset(&self) -> usize {
        self.forward_offset
    }

    /// Whether the sequence carries clone padding.
    pub fn is_padded(&self) -> bool {
        self.back_offset + self.forward_offset > 0
    }

    /// Index the viewport rests on before any navigation: the first real panel.
    pub fn home(&self) -> usize {
        self.back_offset
    }

    /// Panel at `index`.
    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// All panels in order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Sum of widths over `range`, clamped to the sequence.
    pub fn width_of(&self, range: std::ops::Range<usize>) -> Px {
        let end = range.end.min(self.panels.len());
        let start = range.start.min(end);
        self.panels[start..end].iter().map(|p| p.width).sum()
    }

    /// Maps a sequence index to the real panel it shows.
    pub fn real_index_of(&self, index: usize) -> usize {
        if self.real_count == 0 {
            return 0;
        }
        if !self.is_padded() {
            return index.min(self.real_count - 1);
        }
        self.panels
            .get(index)
            .map_or(self.real_count - 1, |panel| panel.source_index)
    }

    /// Real panels visible when the view starts at `start`.
    pub fn visible_sources(&self, start: usize, panels_per_view: usize) -> Vec<usize> {
        self.panels
            .iter()
            .skip(start)
            .take(panels_per_view)
            .map(|panel| panel.source_index)
            .collect()
    }
}
