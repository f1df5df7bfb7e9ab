// Window + pointer/keyboard sampling.
// Visual effects provided here:
// 1) A window that shows the canvas.
// 2) A crosshair cursor instead of the arrow, so the pointer feels like a paw.

use crate::error::Error;
use crate::session::Command;
use crate::types::{FrameBuffer, Point};
use minifb::{CursorStyle, Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

// Keys that trigger commands, with the character each stands for.
// minifb reports physical keys, so 'c' and 'C' arrive as the same key.
const COMMAND_KEYS: [(Key, char); 3] = [(Key::C, 'c'), (Key::S, 's'), (Key::Space, ' ')];

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a fixed-size window capped at `fps` frames per second.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        window.set_cursor_style(CursorStyle::Crosshair);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current pointer position in canvas coordinates (clamped to the window).
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| Point::new(x, y))
    }

    /// Visual: while true, moving the pointer scratches the tank.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Commands whose key went down since the last frame (no auto-repeat).
    pub fn pressed_commands(&self) -> Vec<Command> {
        COMMAND_KEYS
            .iter()
            .filter(|(key, _)| self.window.is_key_pressed(*key, KeyRepeat::No))
            .filter_map(|&(_, ch)| Command::from_char(ch))
            .collect()
    }
}
