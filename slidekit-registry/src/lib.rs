//! Ordered registry of carousel instances keyed by their mount target.
//!
//! # Responsibilities
//!
//! - Own every mounted [`Carousel`] in mount order.
//! - Route triggers to the instance mounted at a target.
//! - Poll auto advance timers across all instances.
//! - Release an instance's timer when it is unmounted.
//!
//! The registry has no global singleton. The composition root creates one and
//! each carousel's navigation state stays private to its instance.

use std::{fmt, time::Instant};

use rustc_hash::FxHashMap;
use slidekit::{Carousel, ConfigError, Options, Transition, Trigger, px::Px};
use thiserror::Error;
use tracing::{debug, warn};

/// Identifier of the surface a carousel is mounted on.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct MountTarget(String);

impl MountTarget {
    /// Creates a mount target from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier of the target.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MountTarget {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Registry failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A carousel is already mounted on the target.
    #[error("a carousel is already mounted on `{0}`")]
    DuplicateMount(MountTarget),
    /// No carousel is mounted on the target.
    #[error("no carousel is mounted on `{0}`")]
    UnknownMount(MountTarget),
    /// The carousel could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

struct Entry {
    target: MountTarget,
    carousel: Carousel,
}

/// Mounted carousels in mount order.
#[derive(Default)]
pub struct CarouselRegistry {
    entries: Vec<Entry>,
    index: FxHashMap<MountTarget, usize>,
}

impl fmt::Debug for CarouselRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| &entry.target))
            .finish()
    }
}

impl CarouselRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one carousel per mount, all sharing `options`.
    ///
    /// Mounts whose configuration is rejected are skipped with a warning so
    /// that one broken surface does not take the others down.
    pub fn scan<I, T>(mounts: I, options: &Options) -> Self
    where
        I: IntoIterator<Item = (T, Vec<Px>)>,
        T: Into<MountTarget>,
    {
        let mut registry = Self::new();
        for (target, widths) in mounts {
            let target = target.into();
            if let Err(err) = registry.mount(target.clone(), widths, options.clone()) {
                warn!(%target, "skipping mount: {err}");
            }
        }
        registry
    }

    /// Mounts a new carousel on `target`.
    pub fn mount(
        &mut self,
        target: impl Into<MountTarget>,
        widths: Vec<Px>,
        options: Options,
    ) -> Result<&mut Carousel, RegistryError> {
        let target = target.into();
        if self.index.contains_key(&target) {
            return Err(RegistryError::DuplicateMount(target));
        }
        let carousel = Carousel::new(widths, options)?;
        debug!(%target, "mounted carousel");
        let slot = self.entries.len();
        self.index.insert(target.clone(), slot);
        self.entries.push(Entry { target, carousel });
        Ok(&mut self.entries[slot].carousel)
    }

    /// Removes the carousel on `target`, releasing its auto advance timer.
    pub fn unmount(&mut self, target: &MountTarget) -> Result<Carousel, RegistryError> {
        let slot = self
            .index
            .remove(target)
            .ok_or_else(|| RegistryError::UnknownMount(target.clone()))?;
        let mut entry = self.entries.remove(slot);
        for later in &self.entries[slot..] {
            if let Some(position) = self.index.get_mut(&later.target) {
                *position -= 1;
            }
        }
        entry.carousel.cancel_auto_play();
        debug!(%target, "unmounted carousel");
        Ok(entry.carousel)
    }

    /// Carousel mounted on `target`.
    pub fn get(&self, target: &MountTarget) -> Option<&Carousel> {
        self.index
            .get(target)
            .map(|&slot| &self.entries[slot].carousel)
    }

    /// Mutable carousel mounted on `target`.
    pub fn get_mut(&mut self, target: &MountTarget) -> Option<&mut Carousel> {
        self.index
            .get(target)
            .map(|&slot| &mut self.entries[slot].carousel)
    }

    /// Routes a trigger to the carousel on `target`.
    pub fn dispatch(
        &mut self,
        target: &MountTarget,
        trigger: Trigger,
    ) -> Result<Transition, RegistryError> {
        let carousel = self
            .get_mut(target)
            .ok_or_else(|| RegistryError::UnknownMount(target.clone()))?;
        Ok(carousel.handle(trigger))
    }

    /// Starts every configured auto advance timer at `now`.
    pub fn start_auto_play(&mut self, now: Instant) {
        for entry in &mut self.entries {
            entry.carousel.start_auto_play(now);
        }
    }

    /// Polls every timer in mount order and returns the transitions of the
    /// carousels that ticked.
    pub fn poll_auto_play(&mut self, now: Instant) -> Vec<(MountTarget, Transition)> {
        self.entries
            .iter_mut()
            .filter_map(|entry| {
                entry
                    .carousel
                    .poll_auto_play(now)
                    .map(|transition| (entry.target.clone(), transition))
            })
            .collect()
    }

    /// Mounted carousels in mount order.
    pub fn iter(&self) -> impl Iterator<Item = (&MountTarget, &Carousel)> {
        self.entries
            .iter()
            .map(|entry| (&entry.target, &entry.carousel))
    }

    /// Number of mounted carousels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
