use nativelib_input::KeyCode;
use nativelib_winit::{Callbacks, Flow, Window};

fn main() {
    nativelib_core::logging::init();
    nativelib_core::profiling::init_from_env();

    let mut window = Window::new(800, 600, "NativeLib").expect("Failed to create window");
    window.show();

    let mut frames = 0u64;
    let callbacks = Callbacks::new()
        .on_key(|ctx, event| {
            tracing::info!(?event, "key");
            if event.pressed && event.code == KeyCode::ESCAPE {
                ctx.quit();
            }
        })
        .on_mouse_button(|_, event| tracing::info!(?event, "mouse button"))
        .on_scroll(|_, event| tracing::info!(?event, "scroll"))
        .on_resize(|_, event| tracing::info!(size = %event.size, "resized"))
        .on_render(|ctx| {
            frames += 1;
            if frames % 600 == 0 {
                tracing::info!(
                    frames,
                    fps = 1.0 / ctx.frame_time().delta_seconds().max(f32::EPSILON),
                    held = ctx.is_key_pressed(KeyCode::SPACE),
                    "still running"
                );
            }
            Flow::Continue
        });

    match window.run(callbacks) {
        Ok(reason) => tracing::info!("exited: {reason}"),
        Err(e) => tracing::error!("event loop failed: {e}"),
    }
}
