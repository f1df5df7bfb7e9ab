// What you SEE:
// • A fish tank fills the window.
// • Hold Left Mouse and drag: white claw marks trail the pointer, 2–3 at a time.
// • C clears the scratches, S saves cat-scratches.png, Space re-rolls how
//   shaky the claws are. ESC quits.

use cat_scratch::canvas::Canvas;
use cat_scratch::config::Settings;
use cat_scratch::draw::Drawer;
use cat_scratch::error::Error;
use cat_scratch::export;
use cat_scratch::random::FastRandom;
use cat_scratch::session::{CommandOutcome, Session};
use cat_scratch::types::{FrameInput, Point};
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cat_scratch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::default();
    settings.validate()?;
    info!("Starting cat scratch on a {}x{} canvas", settings.width, settings.height);

    /* --- Window + canvas ---
       Visual: window opens showing the fish tank. */
    let mut drawer = Drawer::new("Cat Scratch", settings.width, settings.height, settings.target_fps)?;
    let mut canvas = Canvas::new(settings.width, settings.height);

    /* --- Scratch state ---
       Visual: nothing yet; marks appear once you drag far enough. */
    let mut session = Session::new(&settings, FastRandom::new());
    let mut previous: Option<Point> = None;

    /* --- FPS ---
       Visual: none; logged once per second. */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Discrete keys */
        for command in drawer.pressed_commands() {
            match session.apply(command) {
                CommandOutcome::Cleared => canvas.reset(), // visual: tank is clean again
                CommandOutcome::ExportRequested => {
                    let path = settings.export_path();
                    match export::save(canvas.buffer(), &path, settings.export_format) {
                        Ok(()) => info!("Saved {}", path.display()),
                        Err(e) => error!("Could not save {}: {e}", path.display()),
                    }
                }
                CommandOutcome::SensitivityChanged(_) => {} // logged by the session
            }
        }

        /* 2) Pointer: this frame's position against last frame's.
           Visual: dragging far enough drops a new bundle of claw marks. */
        if let Some(pointer) = drawer.mouse_pos() {
            let input = FrameInput {
                pointer,
                previous: previous.unwrap_or(pointer),
                active: drawer.left_mouse_down(),
            };
            session.update(input);
            previous = Some(pointer);
        }

        /* 3) Paint every stored mark over the persistent canvas, then show it. */
        canvas.draw_marks(session.marks());
        drawer.present(canvas.buffer())?;

        /* 4) FPS counter */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
