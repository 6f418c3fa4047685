//! Cross-crate widget behavior: event streams in, draw commands and
//! callbacks out, animations advanced on a shared frame clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use plush_core::events::event_types;
use plush_core::{
    DrawCommand, HapticPulse, Point, PointerEvent, Rect, RecordingContext, RecordingHaptics, Size,
};
use plush_widgets::kit;

fn frame() -> Duration {
    Duration::from_micros(16_667)
}

#[test]
fn dial_drag_to_boundary_clamps_and_pulses() {
    let haptics = Arc::new(RecordingHaptics::new());
    let values: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));
    let values_cb = values.clone();

    let scheduler = plush_animation::SchedulerHandle::new();
    let mut dial = kit::dial(50.0)
        .range(0.0, 100.0)
        .haptics(haptics.clone())
        .on_change(move |v| values_cb.lock().unwrap().push(v))
        .build(&scheduler);
    dial.set_bounds(Rect::new(0.0, 0.0, 200.0, 200.0));
    let center = dial.face_center();

    // Sweep from straight up to past the right-hand limit
    let positions = [
        Point::new(center.x, center.y - 80.0),
        Point::new(center.x + 60.0, center.y - 60.0),
        Point::new(center.x + 80.0, center.y + 15.0),
    ];
    for p in positions {
        dial.handle_event(&PointerEvent::new(event_types::DRAG, p, dial.bounds()));
    }

    let seen = values.lock().unwrap();
    assert!((seen[0] - 50.0).abs() < 0.5);
    assert!((seen[1] - 75.0).abs() < 0.5);
    assert_eq!(seen[2], 100.0);

    // Only the final position sits inside the 5 degree boundary zone
    assert_eq!(haptics.count(), 1);
    assert_eq!(haptics.pulses(), vec![HapticPulse::Medium]);

    // Drag snapped the needle, nothing left to animate
    assert!(!scheduler.tick(frame()));
}

#[test]
fn scheduler_reports_redraw_until_everything_settles() {
    let scheduler = plush_animation::SchedulerHandle::new();
    let mut toggle = kit::toggle(false).build(&scheduler);
    toggle.set_bounds(Rect::new(0.0, 0.0, 48.0, 26.0));
    let mut dial = kit::dial(0.0).range(0.0, 100.0).build(&scheduler);
    dial.set_bounds(Rect::new(100.0, 0.0, 200.0, 200.0));

    toggle.handle_event(&PointerEvent::new(
        event_types::CLICK,
        toggle.bounds().center(),
        toggle.bounds(),
    ));
    dial.set_value(80.0);

    assert!(scheduler.tick(frame()));
    let mut frames = 1;
    while scheduler.tick(frame()) {
        frames += 1;
        assert!(frames < 1000, "animations never settled");
    }
    assert!(toggle.is_on());
    assert!((dial.rotation_angle() - 54.0).abs() < 0.5);
}

#[test]
fn widgets_paint_into_one_command_stream() {
    let scheduler = plush_animation::SchedulerHandle::new();
    let mut button = kit::button("Go").build(&scheduler);
    button.set_bounds(Rect::new(10.0, 10.0, 100.0, 40.0));
    let mut slider = kit::slider(0.5).build(&scheduler);
    slider.set_bounds(Rect::new(10.0, 70.0, 200.0, 24.0));
    let mut bar = kit::tabs(["One", "Two"]).build(&scheduler);
    bar.set_bounds(Rect::new(10.0, 110.0, 200.0, 36.0));

    let mut ctx = RecordingContext::new(Size::new(400.0, 400.0));
    button.paint(&mut ctx);
    slider.paint(&mut ctx);
    bar.paint(&mut ctx);

    let texts = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::DrawText { .. }))
        .count();
    // Button label plus two tab labels
    assert_eq!(texts, 3);

    // Transform and opacity stacks balance across the whole frame
    let pushes = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::PushTransform(_) | DrawCommand::PushOpacity(_)))
        .count();
    let pops = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::PopTransform | DrawCommand::PopOpacity))
        .count();
    assert_eq!(pushes, pops);
}

#[test]
fn tab_indicator_follows_selection_across_frames() {
    let scheduler = plush_animation::SchedulerHandle::new();
    let mut bar = kit::tabs(["A", "B", "C"]).build(&scheduler);
    bar.set_bounds(Rect::new(0.0, 0.0, 300.0, 36.0));

    let target = bar.segment_rect(2);
    bar.handle_event(&PointerEvent::new(
        event_types::CLICK,
        target.center(),
        bar.bounds(),
    ));
    assert_eq!(bar.selected(), 2);

    for _ in 0..300 {
        if !scheduler.tick(frame()) {
            break;
        }
    }

    // Indicator capsule ends up on the selected segment
    let mut ctx = RecordingContext::new(Size::new(400.0, 100.0));
    bar.paint(&mut ctx);
    let indicator = ctx
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .nth(1)
        .expect("indicator fill");
    assert!((indicator.x() - target.x()).abs() < 1.0);
    assert!((indicator.width() - target.width()).abs() < 1.0);
}

#[test]
fn search_flow_from_keys_to_submit() {
    let submitted: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let submitted_cb = submitted.clone();

    let scheduler = plush_animation::SchedulerHandle::new();
    let mut field = kit::search_field()
        .placeholder("Search settings")
        .on_submit(move |t| submitted_cb.lock().unwrap().push(t.to_string()))
        .build(&scheduler);
    field.set_bounds(Rect::new(0.0, 0.0, 240.0, 36.0));

    field.handle_event(&PointerEvent::new(
        event_types::CLICK,
        field.bounds().center(),
        field.bounds(),
    ));
    assert!(field.is_focused());

    for c in "dial".chars() {
        field.handle_key(plush_core::Key::Char(c));
    }
    field.handle_key(plush_core::Key::Enter);
    assert_eq!(*submitted.lock().unwrap(), vec!["dial"]);
    assert_eq!(field.text(), "dial");
}
