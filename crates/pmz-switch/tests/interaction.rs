//! End-to-end interaction tests driving a switch the way a host would:
//! events in, frames advanced, draw commands out.

use pmz_core::{
    Canvas, DrawCommand, Event, MouseButton, Point, PointerId, PointerType, RecordingCanvas,
    Rect, TouchId, Widget,
};
use pmz_switch::{SwitchChanged, SwitchConfig, SwitchControl};
use std::any::Any;

const FRAME: f64 = 1.0 / 60.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn changed(message: Option<Box<dyn Any + Send>>) -> Option<bool> {
    message
        .and_then(|m| m.downcast::<SwitchChanged>().ok())
        .map(|c| c.on)
}

fn run_frames(switch: &mut SwitchControl, frames: usize) {
    for _ in 0..frames {
        switch.update(FRAME);
    }
}

fn settle(switch: &mut SwitchControl) {
    let mut frames = 0;
    while switch.update(FRAME) {
        frames += 1;
        assert!(frames < 120, "switch never settled");
    }
}

fn touch(id: u32, position: Point) -> [Event; 3] {
    [
        Event::TouchStart {
            id: TouchId(id),
            position,
        },
        Event::TouchMove {
            id: TouchId(id),
            position,
        },
        Event::TouchEnd {
            id: TouchId(id),
            position,
        },
    ]
}

fn thumb_fill(switch: &SwitchControl) -> Option<pmz_core::Color> {
    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    match canvas.commands().get(1) {
        Some(DrawCommand::Rect { style, .. }) => style.fill,
        _ => None,
    }
}

#[test]
fn test_touch_drag_across_midpoint_turns_on() {
    init_logging();
    let mut switch = SwitchControl::new(None);

    assert_eq!(
        changed(switch.event(&Event::TouchStart {
            id: TouchId(7),
            position: Point::new(12.0, 15.0),
        })),
        None
    );
    for x in [14.0, 18.0, 22.0, 26.0] {
        switch.event(&Event::TouchMove {
            id: TouchId(7),
            position: Point::new(x, 15.0),
        });
        run_frames(&mut switch, 1);
    }
    assert_eq!(switch.thumb().frame().x, 16.0);
    assert!(switch.thumb().is_scrubbing());

    let result = switch.event(&Event::TouchEnd {
        id: TouchId(7),
        position: Point::new(26.0, 15.0),
    });
    assert_eq!(changed(result), Some(true));
    settle(&mut switch);
    assert_eq!(switch.thumb().frame(), Rect::new(22.0, 2.0, 26.0, 26.0));
}

#[test]
fn test_release_just_short_of_midpoint_stays_off() {
    let mut switch = SwitchControl::new(None);
    let [start, _, _] = touch(1, Point::new(10.0, 15.0));
    switch.event(&start);
    switch.event(&Event::TouchMove {
        id: TouchId(1),
        position: Point::new(19.5, 15.0),
    });
    // Thumb center at 24.5, midpoint at 25.
    let result = switch.event(&Event::TouchEnd {
        id: TouchId(1),
        position: Point::new(19.5, 15.0),
    });
    assert_eq!(changed(result), None);
    assert!(!switch.is_on());
    settle(&mut switch);
    assert_eq!(switch.thumb().frame().x, 2.0);
}

#[test]
fn test_tap_without_movement_toggles() {
    let mut switch = SwitchControl::new(None);
    let [start, _, end] = touch(3, Point::new(40.0, 10.0));
    switch.event(&start);
    assert_eq!(changed(switch.event(&end)), Some(true));

    // The recognizer's tap for the same press must not flip it back.
    let host_tap = Event::GestureTap {
        position: Point::new(40.0, 10.0),
    };
    assert_eq!(changed(switch.event(&host_tap)), None);
    assert!(switch.is_on());
}

#[test]
fn test_host_tap_alone_toggles() {
    let mut switch = SwitchControl::new(None);
    let tap = Event::GestureTap {
        position: Point::new(25.0, 15.0),
    };
    assert_eq!(changed(switch.event(&tap)), Some(true));
    switch.update(FRAME);
    assert_eq!(changed(switch.event(&tap)), Some(false));

    let outside = Event::GestureTap {
        position: Point::new(90.0, 15.0),
    };
    switch.update(FRAME);
    assert_eq!(changed(switch.event(&outside)), None);
}

#[test]
fn test_double_toggle_round_trips() {
    let mut switch = SwitchControl::new(None);
    let before = switch.thumb().pose();

    switch.set_on(true, true);
    settle(&mut switch);
    switch.set_on(false, true);
    settle(&mut switch);

    assert!(!switch.is_on());
    assert_eq!(switch.thumb().pose(), before);
    assert_eq!(switch.thumb().frame(), switch.thumb_rect());
}

#[test]
fn test_programmatic_set_on_emits_nothing() {
    let mut switch = SwitchControl::new(None);
    switch.set_on(true, false);
    assert!(switch.is_on());
    // Nothing to report: there is no event to return a message from, and
    // the gesture tracker never saw a press.
    assert!(switch.gestures().is_idle());
}

#[test]
fn test_cancelled_drag_restores_value() {
    let mut switch = SwitchControl::new(None).on(true);
    switch.event(&Event::PointerDown {
        pointer_id: PointerId(4),
        pointer_type: PointerType::Touch,
        position: Point::new(40.0, 15.0),
        is_primary: true,
        button: None,
    });
    switch.event(&Event::PointerMove {
        pointer_id: PointerId(4),
        position: Point::new(5.0, 15.0),
    });
    assert_eq!(switch.thumb().frame().x, 2.0);

    let result = switch.event(&Event::PointerCancel {
        pointer_id: PointerId(4),
    });
    assert_eq!(changed(result), None);
    assert!(switch.is_on());
    settle(&mut switch);
    assert_eq!(switch.thumb().frame().x, 22.0);
}

#[test]
fn test_secondary_buttons_and_pointers_are_ignored() {
    let mut switch = SwitchControl::new(None);
    let right = Event::MouseDown {
        position: Point::new(10.0, 15.0),
        button: MouseButton::Right,
    };
    assert!(switch.event(&right).is_none());
    assert!(switch.gestures().is_idle());

    let secondary = Event::PointerDown {
        pointer_id: PointerId(9),
        pointer_type: PointerType::Touch,
        position: Point::new(10.0, 15.0),
        is_primary: false,
        button: None,
    };
    assert!(switch.event(&secondary).is_none());
    assert!(switch.gestures().is_idle());
}

#[test]
fn test_interrupted_animation_has_no_jump() {
    let mut switch = SwitchControl::new(None);
    switch.set_on(true, true);
    run_frames(&mut switch, 9);
    let displayed = switch.thumb().frame().x;
    assert!(displayed > 2.0 && displayed < 22.0);

    switch.set_on(false, true);
    assert_eq!(switch.thumb().frame().x, displayed);
    run_frames(&mut switch, 1);
    assert!((switch.thumb().frame().x - displayed).abs() < 1.0);
    settle(&mut switch);
    assert_eq!(switch.thumb().frame().x, 2.0);
}

#[test]
fn test_settled_toggle_shows_later_tint() {
    let mut switch = SwitchControl::new(None);
    let tap = Event::GestureTap {
        position: Point::new(25.0, 15.0),
    };
    switch.event(&tap);
    settle(&mut switch);

    let red = pmz_core::Color::rgb(1.0, 0.0, 0.0);
    switch.set_on_thumb_tint(red);
    assert_eq!(thumb_fill(&switch), Some(red));
}

#[test]
fn test_tint_change_mid_animation_is_not_immediate() {
    let mut switch = SwitchControl::new(None);
    let original = switch.get_on_thumb_tint();
    switch.set_on(true, true);
    switch.event(&Event::GestureTap {
        position: Point::new(25.0, 15.0),
    });
    // The tap authored a transition back to off; changing the off tint now
    // leaves it alone until it settles.
    let red = pmz_core::Color::rgb(1.0, 0.0, 0.0);
    switch.set_thumb_tint(red);
    assert_eq!(thumb_fill(&switch), Some(original));
    settle(&mut switch);
    assert_eq!(thumb_fill(&switch), Some(red));
}

#[test]
fn test_config_drives_geometry_and_colors() {
    init_logging();
    let config = SwitchConfig::from_yaml(
        r##"
width: 80
height: 40
border_margin: 4
animation_duration: 0.5
track_color: "#202020"
on: true
"##,
    )
    .expect("valid config");
    let switch = SwitchControl::with_config(&config);

    assert!(switch.is_on());
    assert_eq!(switch.thumb_rect(), Rect::new(4.0, 4.0, 32.0, 32.0));
    assert_eq!(switch.max_travel(), 40.0);
    assert_eq!(switch.thumb().frame().x, 44.0);

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    match &canvas.commands()[0] {
        DrawCommand::Rect { style, .. } => {
            assert_eq!(style.fill.map(|c| c.to_hex()), Some("#202020".to_string()));
        }
        DrawCommand::Group { .. } => panic!("Expected track Rect"),
    }
}

#[test]
fn test_zero_duration_config_is_instant() {
    let config = SwitchConfig::from_toml("animation_duration = 0.0").expect("valid config");
    let mut switch = SwitchControl::with_config(&config);
    switch.event(&Event::GestureTap {
        position: Point::new(25.0, 15.0),
    });
    assert!(switch.is_on());
    assert_eq!(switch.thumb().frame().x, 22.0);
    assert!(!switch.thumb().is_animating());
    assert!(!switch.update(FRAME));
}

#[test]
fn test_layout_resize_repositions_resting_thumb() {
    let mut switch = SwitchControl::new(None).on(true);
    switch.layout(Rect::new(100.0, 50.0, 60.0, 30.0));
    assert_eq!(switch.thumb().frame(), Rect::new(132.0, 52.0, 26.0, 26.0));
    assert_eq!(Widget::bounds(&switch), Rect::new(100.0, 50.0, 60.0, 30.0));

    // Input is now hit-tested against the new bounds.
    let tap = Event::GestureTap {
        position: Point::new(10.0, 15.0),
    };
    assert!(switch.event(&tap).is_none());
}

#[test]
fn test_paint_is_balanced() {
    let mut switch = SwitchControl::new(None);
    switch.event(&Event::MouseDown {
        position: Point::new(10.0, 15.0),
        button: MouseButton::Left,
    });
    switch.event(&Event::MouseMove {
        position: Point::new(20.0, 15.0),
    });

    let mut canvas = RecordingCanvas::new();
    switch.paint(&mut canvas);
    assert_eq!(canvas.transform_depth(), 0);
    assert_eq!(canvas.command_count(), 4);

    // Painting is side-effect free.
    canvas.clear();
    switch.paint(&mut canvas as &mut dyn Canvas);
    assert_eq!(canvas.command_count(), 4);
}
