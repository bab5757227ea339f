//! Event dispatch and run loop tests.
//!
//! These drive the window state machine through the headless driver, which
//! follows the same ordering rules as the winit event loop.

use std::cell::{Cell, RefCell};

use glam::DVec2;
use nativelib_core::geometry::Size;
use nativelib_input::{KeyCode, Modifiers};
use nativelib_test_utils::{EventRecorder, HeadlessWindow};
use nativelib_winit::event::{Event, MouseButton, Notification, WindowResizeEvent};
use nativelib_winit::{Callbacks, ExitReason, Flow};

fn key_down(code: KeyCode) -> Notification {
    Notification::KeyDown {
        code,
        repeat: false,
    }
}

fn key_up(code: KeyCode) -> Notification {
    Notification::KeyUp { code }
}

fn moved(x: f64, y: f64) -> Notification {
    Notification::MouseMoved(DVec2::new(x, y))
}

#[test]
fn test_size_before_any_resize_is_constructed_size() {
    for (width, height) in [(1, 1), (800, 600), (1920, 1080), (3, 4000)] {
        let window = HeadlessWindow::new(width, height);
        assert_eq!(window.state().size(), Size::new(width, height));
    }
}

#[test]
fn test_key_press_and_release_update_state() {
    let mut window = HeadlessWindow::new(800, 600);
    window.notify(key_down(KeyCode::A));
    window.run(Callbacks::new());
    assert!(window.state().is_key_pressed(KeyCode::A));

    window.notify(key_up(KeyCode::A));
    window.run(Callbacks::new());
    assert!(!window.state().is_key_pressed(KeyCode::A));
}

#[test]
fn test_key_state_is_updated_before_handler_runs() {
    let seen = RefCell::new(Vec::new());
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(key_down(KeyCode::SPACE))
        .notify(key_up(KeyCode::SPACE));

    window.run(Callbacks::new().on_key(|ctx, event| {
        seen.borrow_mut()
            .push((event.pressed, ctx.is_key_pressed(KeyCode::SPACE)));
    }));

    assert_eq!(seen.into_inner(), vec![(true, true), (false, false)]);
}

#[test]
fn test_key_events_carry_current_modifiers() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(Notification::ModifiersChanged(Modifiers::SHIFT | Modifiers::COMMAND))
        .notify(key_down(KeyCode::S))
        .notify(Notification::ModifiersChanged(Modifiers::empty()))
        .notify(key_up(KeyCode::S));

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let keys: Vec<_> = recorder.keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(keys[0].modifiers.shift() && keys[0].modifiers.command());
    assert!(!keys[0].modifiers.control() && !keys[0].modifiers.alt());
    assert!(keys[1].modifiers.is_empty());
}

#[test]
fn test_mouse_move_delta() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(moved(10.0, 20.0))
        .notify(moved(15.0, 18.0))
        .notify(moved(15.0, 30.5));

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let deltas: Vec<_> = recorder.mouse_moves().map(|event| event.delta).collect();
    assert_eq!(
        deltas,
        vec![DVec2::ZERO, DVec2::new(5.0, -2.0), DVec2::new(0.0, 12.5)]
    );
    assert_eq!(window.state().mouse_position(), DVec2::new(15.0, 30.5));
}

#[test]
fn test_mouse_delta_resets_on_focus_and_entry() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(moved(10.0, 10.0))
        .notify(Notification::Focused(false))
        .notify(Notification::Focused(true))
        .notify(moved(100.0, 100.0))
        .notify(moved(110.0, 100.0))
        .notify(Notification::CursorLeft)
        .notify(Notification::CursorEntered)
        .notify(moved(0.0, 0.0));

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let deltas: Vec<_> = recorder.mouse_moves().map(|event| event.delta).collect();
    assert_eq!(
        deltas,
        vec![DVec2::ZERO, DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::ZERO]
    );
}

#[test]
fn test_mouse_position_defaults_to_origin() {
    let window = HeadlessWindow::new(800, 600);
    assert_eq!(window.state().mouse_position(), DVec2::ZERO);
}

#[test]
fn test_mouse_button_uses_last_cursor_position() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(moved(42.0, 7.5))
        .notify(Notification::MouseDown(MouseButton::Right))
        .notify(Notification::MouseUp(MouseButton::Right));

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let buttons: Vec<_> = recorder
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::MouseButton(event) => Some(*event),
            _ => None,
        })
        .collect();
    assert_eq!(buttons.len(), 2);
    assert!(buttons[0].pressed && !buttons[1].pressed);
    assert_eq!(buttons[0].button.index(), 1);
    assert_eq!(buttons[1].position, DVec2::new(42.0, 7.5));
}

#[test]
fn test_scroll_delta_passes_through() {
    let mut window = HeadlessWindow::new(800, 600);
    window.notify(Notification::Scroll(DVec2::new(0.0, -30.0)));

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    match recorder.events() {
        [Event::Scroll(event)] => assert_eq!(event.delta, DVec2::new(0.0, -30.0)),
        other => panic!("expected one scroll event, got {other:?}"),
    }
}

#[test]
fn test_resize_scenario() {
    let resizes = RefCell::new(Vec::new());
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(Notification::Resized(Size::new(1024, 768)))
        .frame();

    window.run(Callbacks::new().on_resize(|ctx, event| {
        assert_eq!(ctx.size(), event.size);
        resizes.borrow_mut().push(event);
    }));

    assert_eq!(window.state().size(), Size::new(1024, 768));
    assert_eq!(
        resizes.into_inner(),
        vec![WindowResizeEvent {
            size: Size::new(1024, 768)
        }]
    );
}

#[test]
fn test_resize_burst_is_reported_once() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(Notification::Resized(Size::new(810, 600)))
        .notify(Notification::Resized(Size::new(900, 640)))
        .notify(Notification::Resized(Size::new(1000, 700)))
        .idle()
        .notify(Notification::Resized(Size::new(640, 480)))
        .frame();

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let sizes: Vec<_> = recorder.resizes().map(|event| event.size).collect();
    assert_eq!(sizes, vec![Size::new(1000, 700), Size::new(640, 480)]);
}

#[test]
fn test_input_is_delivered_before_render() {
    let order = RefCell::new(Vec::new());
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(key_down(KeyCode::W))
        .notify(Notification::Resized(Size::new(400, 300)))
        .frame();

    window.run(
        Callbacks::new()
            .on_key(|_, _| order.borrow_mut().push("key"))
            .on_resize(|_, _| order.borrow_mut().push("resize"))
            .on_render(|_| {
                order.borrow_mut().push("render");
                Flow::Continue
            }),
    );

    assert_eq!(order.into_inner(), vec!["key", "resize", "render"]);
}

#[test]
fn test_render_returning_stop_on_third_frame() {
    let mut window = HeadlessWindow::new(800, 600);
    window.idle_frames(100);

    let mut recorder = EventRecorder::stop_after_renders(3);
    let outcome = window.run(&mut recorder);

    assert_eq!(recorder.renders(), 3);
    assert_eq!(outcome.frames, 3);
    assert_eq!(outcome.exit, Some(ExitReason::RenderStopped));
}

#[test]
fn test_quit_from_callback_skips_remaining_work() {
    let renders = Cell::new(0);
    let mut window = HeadlessWindow::new(800, 600);
    window
        .frame()
        .notify(key_down(KeyCode::ESCAPE))
        .notify(key_down(KeyCode::Q))
        .frames(5);

    let outcome = window.run(
        Callbacks::new()
            .on_key(|ctx, event| {
                if event.code == KeyCode::ESCAPE {
                    ctx.quit();
                }
            })
            .on_render(|_| {
                renders.set(renders.get() + 1);
                Flow::Continue
            }),
    );

    assert_eq!(outcome.exit, Some(ExitReason::Quit));
    assert_eq!(renders.get(), 1);
    assert_eq!(outcome.unprocessed, 6);
    assert!(!window.state().is_key_pressed(KeyCode::Q));
}

#[test]
fn test_quit_from_render_stops_after_that_frame() {
    let mut window = HeadlessWindow::new(800, 600);
    window.idle_frames(10);

    let outcome = window.run(Callbacks::new().on_render(|ctx| {
        if ctx.frame_time().frame_count == 2 {
            ctx.quit();
        }
        Flow::Continue
    }));

    assert_eq!(outcome.exit, Some(ExitReason::Quit));
    assert_eq!(outcome.frames, 2);
}

#[test]
fn test_empty_registry_runs_until_quit() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(key_down(KeyCode::UP))
        .notify(moved(1.0, 2.0))
        .idle_frames(50);

    let outcome = window.run(Callbacks::new());
    assert_eq!(outcome.exit, None);
    assert_eq!(outcome.frames, 50);
    assert!(window.state().is_key_pressed(KeyCode::UP));

    window.state_mut().quit();
    let outcome = window.run(Callbacks::new());
    assert_eq!(outcome.exit, Some(ExitReason::Quit));
    assert_eq!(outcome.frames, 0);
}

#[test]
fn test_close_request_ends_loop() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .frame()
        .notify(Notification::CloseRequested)
        .frame();

    let mut recorder = EventRecorder::new();
    let outcome = window.run(&mut recorder);

    assert_eq!(outcome.exit, Some(ExitReason::Closed));
    assert_eq!(recorder.renders(), 1);
}

#[test]
fn test_window_can_run_again_after_quit() {
    let mut window = HeadlessWindow::new(800, 600);
    window.state_mut().quit();
    assert_eq!(window.run(Callbacks::new()).exit, Some(ExitReason::Quit));

    window.frames(2);
    let outcome = window.run(Callbacks::new());
    assert_eq!(outcome.exit, None);
    assert_eq!(outcome.frames, 2);
}

#[test]
fn test_auto_repeat_keeps_key_pressed() {
    let mut window = HeadlessWindow::new(800, 600);
    window
        .notify(key_down(KeyCode::RIGHT))
        .notify(Notification::KeyDown {
            code: KeyCode::RIGHT,
            repeat: true,
        });

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    let repeats: Vec<_> = recorder.keys().map(|event| event.repeat).collect();
    assert_eq!(repeats, vec![false, true]);
    assert!(window.state().is_key_pressed(KeyCode::RIGHT));
}

#[test]
fn test_initial_resize_at_fractional_scale_is_not_reported() {
    let mut window = HeadlessWindow::new(801, 600);
    // What the platform reports for an 801x600 window at 1.25x
    window
        .notify(Notification::Resized(Size::from_physical(1001, 750, 1.25)))
        .frame();

    let mut recorder = EventRecorder::new();
    window.run(&mut recorder);

    assert_eq!(recorder.resizes().count(), 0);
    assert_eq!(window.state().size(), Size::new(801, 600));
}

#[test]
fn test_quit_from_input_handlers() {
    let scripts: [(&str, Notification); 3] = [
        ("move", moved(5.0, 5.0)),
        ("scroll", Notification::Scroll(DVec2::new(0.0, 1.0))),
        ("resize", Notification::Resized(Size::new(1024, 768))),
    ];

    for (name, notification) in scripts {
        let renders = Cell::new(0);
        let mut window = HeadlessWindow::new(800, 600);
        window
            .frame()
            .notify(notification)
            .idle()
            .notify(key_down(KeyCode::A))
            .frames(3);

        let outcome = window.run(
            Callbacks::new()
                .on_mouse_move(|ctx, _| ctx.quit())
                .on_scroll(|ctx, _| ctx.quit())
                .on_resize(|ctx, _| ctx.quit())
                .on_render(|_| {
                    renders.set(renders.get() + 1);
                    Flow::Continue
                }),
        );

        assert_eq!(outcome.exit, Some(ExitReason::Quit), "{name}");
        assert_eq!(renders.get(), 1, "{name}");
        assert!(!window.state().is_key_pressed(KeyCode::A), "{name}");
    }
}
