//! Scripted driver for slidekit.
//!
//! Mounts a few carousels, replays a fixed trigger script against them, and
//! logs every frame a renderer would apply. Options are read from the JSON
//! file named by `SLIDEKIT_OPTIONS` when set.

use std::{
    path::Path,
    time::{Duration, Instant},
};

use slidekit::{Frame, Options, ResponsiveOptions, Transition, Trigger, px::Px};
use slidekit_registry::{CarouselRegistry, MountTarget, RegistryError};
use thiserror::Error;
use tracing::{info, info_span};
use tracing_subscriber::EnvFilter;

const OPTIONS_ENV: &str = "SLIDEKIT_OPTIONS";

/// Failures of the demo driver.
#[derive(Debug, Error)]
pub enum DemoError {
    /// The options file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path from the environment.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The options file is not valid JSON for [`ResponsiveOptions`].
    #[error("invalid options file: {0}")]
    Parse(#[from] serde_json::Error),
    /// A configuration or routing failure.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Options were rejected.
    #[error(transparent)]
    Config(#[from] slidekit::ConfigError),
}

/// Installs the subscriber and runs the script.
pub fn run() -> Result<(), DemoError> {
    init_tracing();
    let responsive = match std::env::var(OPTIONS_ENV) {
        Ok(path) => load_options(Path::new(&path))?,
        Err(_) => default_options(),
    };
    responsive.validate()?;
    replay(&responsive)
}

/// Reads a responsive option table from a JSON file.
pub fn load_options(path: &Path) -> Result<ResponsiveOptions, DemoError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DemoError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Options used when no file is given: three per view, one per view on
/// narrow viewports.
pub fn default_options() -> ResponsiveOptions {
    ResponsiveOptions::new(Options::default().infinite(true)).breakpoint(
        Px(600),
        Options::default().panels_per_view(1).infinite(true),
    )
}

/// Mounts the demo carousels and replays the trigger script.
pub fn replay(responsive: &ResponsiveOptions) -> Result<(), DemoError> {
    let mounts = [
        ("gallery", vec![Px(320); 7]),
        ("news", vec![Px(240), Px(300), Px(260), Px(280), Px(220)]),
    ];
    let mut registry = CarouselRegistry::scan(mounts, &responsive.base);
    let auto = responsive.base.clone().auto_play(slidekit::AutoPlay {
        active: true,
        delay_ms: 3000,
    });
    registry.mount("ticker", vec![Px(180); 4], auto)?;

    for (target, carousel) in registry.iter() {
        let ((back, forward), position) = carousel.control_glyphs();
        info!(
            %target,
            controls = carousel.shows_controls(),
            dots = carousel.pagination().dot_count(),
            back,
            forward,
            ?position,
            "mounted"
        );
    }

    let gallery = MountTarget::new("gallery");
    let script = [
        Trigger::Next,
        Trigger::Next,
        Trigger::Next,
        Trigger::Next,
        Trigger::Next,
        Trigger::SelectDot(6),
        Trigger::Next,
        Trigger::Previous,
        Trigger::SelectDot(99),
    ];
    for trigger in script {
        let transition = registry.dispatch(&gallery, trigger)?;
        log_transition(&gallery, trigger, &transition);
    }

    let news = MountTarget::new("news");
    if let Some(carousel) = registry.get_mut(&news) {
        let frame = carousel.resize(Px(480), vec![Px(400); 5], responsive)?;
        log_frame(&news, &frame);
    }

    let start = Instant::now();
    registry.start_auto_play(start);
    for second in 1..=9 {
        for (target, transition) in registry.poll_auto_play(start + Duration::from_secs(second)) {
            log_transition(&target, Trigger::Tick, &transition);
        }
    }

    for (target, carousel) in registry.iter() {
        info!(%target, real_index = carousel.current_real_index(), "final position");
    }
    Ok(())
}

fn log_transition(target: &MountTarget, trigger: Trigger, transition: &Transition) {
    let _span = info_span!("trigger", %target, ?trigger).entered();
    if !transition.moved() {
        info!("no movement");
        return;
    }
    for frame in transition.frames() {
        log_frame(target, frame);
    }
}

fn log_frame(target: &MountTarget, frame: &Frame) {
    info!(
        %target,
        index = frame.sequence_index,
        offset = %frame.offset,
        animate = frame.with_transition,
        dot = frame.active_dot,
        prev = frame.controls.can_step_backward,
        next = frame.controls.can_step_forward,
        "frame"
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("off,slidekit=debug,slidekit_registry=debug,slidekit_demo=info")
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
