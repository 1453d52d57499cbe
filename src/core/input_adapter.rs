use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// What the page should do in response to input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageCommand {
    /// Positive scrolls down the page
    ScrollBy(f32),
    /// Activate the n-th navigation anchor (0-based)
    Anchor(usize),
    Quit,
}

/// Translates winit window events into page commands
#[derive(Debug, Clone, Copy)]
pub struct WinitInput {
    /// Pixels per wheel line and per arrow press
    step: f32,
    /// Pixels per PageUp/PageDown press
    page: f32,
}

impl WinitInput {
    pub fn new(step: f32, page: f32) -> Self {
        Self { step, page }
    }

    pub fn set_page(&mut self, page: f32) {
        self.page = page;
    }

    pub fn process_event(&self, event: &WindowEvent) -> Option<PageCommand> {
        match event {
            WindowEvent::CloseRequested => Some(PageCommand::Quit),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(code) => self.key_command(code),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            WindowEvent::MouseWheel { delta, .. } => Some(PageCommand::ScrollBy(self.wheel_distance(*delta))),
            _ => None,
        }
    }

    pub fn key_command(&self, code: KeyCode) -> Option<PageCommand> {
        let command = match code {
            KeyCode::Escape => PageCommand::Quit,
            KeyCode::ArrowDown => PageCommand::ScrollBy(self.step),
            KeyCode::ArrowUp => PageCommand::ScrollBy(-self.step),
            KeyCode::PageDown | KeyCode::Space => PageCommand::ScrollBy(self.page),
            KeyCode::PageUp => PageCommand::ScrollBy(-self.page),
            KeyCode::Digit1 => PageCommand::Anchor(0),
            KeyCode::Digit2 => PageCommand::Anchor(1),
            KeyCode::Digit3 => PageCommand::Anchor(2),
            KeyCode::Digit4 => PageCommand::Anchor(3),
            KeyCode::Digit5 => PageCommand::Anchor(4),
            _ => return None,
        };
        Some(command)
    }

    /// Wheel deltas are "up is positive"; page scroll is "down is positive"
    pub fn wheel_distance(&self, delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, lines) => -lines * self.step,
            MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn arrows_and_pages_scroll() {
        let input = WinitInput::new(40.0, 600.0);
        assert_eq!(input.key_command(KeyCode::ArrowDown), Some(PageCommand::ScrollBy(40.0)));
        assert_eq!(input.key_command(KeyCode::ArrowUp), Some(PageCommand::ScrollBy(-40.0)));
        assert_eq!(input.key_command(KeyCode::PageDown), Some(PageCommand::ScrollBy(600.0)));
        assert_eq!(input.key_command(KeyCode::PageUp), Some(PageCommand::ScrollBy(-600.0)));
    }

    #[test]
    fn digits_pick_anchors() {
        let input = WinitInput::new(40.0, 600.0);
        assert_eq!(input.key_command(KeyCode::Digit1), Some(PageCommand::Anchor(0)));
        assert_eq!(input.key_command(KeyCode::Digit5), Some(PageCommand::Anchor(4)));
        assert_eq!(input.key_command(KeyCode::Digit6), None);
        assert_eq!(input.key_command(KeyCode::Escape), Some(PageCommand::Quit));
    }

    #[test]
    fn wheel_down_scrolls_down() {
        let input = WinitInput::new(40.0, 600.0);
        assert_eq!(input.wheel_distance(MouseScrollDelta::LineDelta(0.0, -3.0)), 120.0);
        assert_eq!(
            input.wheel_distance(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 25.0))),
            -25.0
        );
    }
}
