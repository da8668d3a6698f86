//! End-to-end navigation scenarios with concrete numbers.

use slidekit::{Carousel, ConfigError, Options, Trigger, px::Px};

#[test]
fn seven_panels_infinite_padding() -> Result<(), ConfigError> {
    let options = Options::default()
        .panels_per_view(3)
        .step_size(1)
        .infinite(true);
    let carousel = Carousel::new(vec![Px(100); 7], options)?;
    let sequence = carousel.sequence();

    assert_eq!(sequence.back_offset(), 3);
    // one clone beyond the two needed to fill the view behind the last panel
    assert_eq!(sequence.forward_offset(), 3);
    assert_eq!(sequence.len(), 13);
    assert_eq!(carousel.frame().sequence_index, 3);
    Ok(())
}

#[test]
fn paged_dot_jump_reaches_last_panel() -> Result<(), ConfigError> {
    let options = Options::default()
        .panels_per_view(2)
        .step_size(2)
        .looping(false)
        .infinite(false)
        .pagination_per_panel(false);
    let mut carousel = Carousel::new(vec![Px(100); 5], options)?;

    assert_eq!(carousel.pagination().sequence_index_of(2), 4);
    let transition = carousel.handle(Trigger::SelectDot(2));
    let frame = transition.last().copied().unwrap_or(carousel.frame());
    assert_eq!(frame.sequence_index, 4);
    assert_eq!(frame.active_dot, 2);
    assert!(!frame.controls.can_step_forward);
    assert!(frame.controls.can_step_backward);
    Ok(())
}

#[test]
fn rtl_initial_offset_and_step_sign() -> Result<(), ConfigError> {
    let options = Options::default().panels_per_view(1).rtl(true);
    let mut carousel = Carousel::new(vec![Px(100); 3], options)?;

    let initial = carousel.frame().offset;
    assert_eq!(initial, Px(-200));

    let transition = carousel.handle(Trigger::Next);
    let after = transition.last().map(|f| f.offset).unwrap_or(initial);
    assert_eq!(after - initial, Px(100));
    assert_eq!(carousel.frame().sequence_index, 1);
    Ok(())
}

#[test]
fn ltr_step_moves_content_left() -> Result<(), ConfigError> {
    let options = Options::default().panels_per_view(1);
    let mut carousel = Carousel::new(vec![Px(100); 3], options)?;

    assert_eq!(carousel.frame().offset, Px::ZERO);
    carousel.handle(Trigger::Next);
    assert_eq!(carousel.frame().offset, Px(-100));
    Ok(())
}

#[test]
fn infinite_round_trip_returns_to_start_view() -> Result<(), ConfigError> {
    let widths = vec![Px(90), Px(120), Px(60), Px(150), Px(80)];
    let options = Options::default()
        .panels_per_view(2)
        .step_size(2)
        .infinite(true);
    let mut carousel = Carousel::new(widths, options)?;
    let start = carousel.frame();

    // five panels in steps of two: ten forward steps cover four full loops
    let mut teleports = 0;
    for _ in 0..10 {
        if carousel.handle(Trigger::Next).teleported() {
            teleports += 1;
        }
    }
    assert!(teleports > 0);
    assert_eq!(carousel.current_real_index(), 0);
    let sequence = carousel.sequence();
    assert_eq!(
        sequence.visible_sources(carousel.frame().sequence_index, 2),
        sequence.visible_sources(start.sequence_index, 2)
    );

    for _ in 0..10 {
        carousel.handle(Trigger::Previous);
    }
    assert_eq!(carousel.current_real_index(), 0);
    Ok(())
}

#[test]
fn infinite_controls_are_always_enabled() -> Result<(), ConfigError> {
    let options = Options::default().infinite(true).looping(false);
    let mut carousel = Carousel::new(vec![Px(100); 4], options)?;
    for trigger in [Trigger::Previous, Trigger::Previous, Trigger::Next] {
        for frame in carousel.handle(trigger) {
            assert!(frame.controls.can_step_backward);
            assert!(frame.controls.can_step_forward);
        }
    }
    Ok(())
}

#[test]
fn triggers_fired_liberally_do_not_accumulate() -> Result<(), ConfigError> {
    let options = Options::default().looping(false);
    let mut carousel = Carousel::new(vec![Px(100); 3], options)?;
    for _ in 0..5 {
        carousel.handle(Trigger::Previous);
    }
    assert_eq!(carousel.frame().sequence_index, 0);
    assert_eq!(carousel.frame().offset, Px::ZERO);
    Ok(())
}
