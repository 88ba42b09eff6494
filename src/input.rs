use crate::view::ZoomDirection;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Translates window events into view actions. Remembers the last cursor
/// position so wheel events, which carry none, can zoom around it.
pub struct InputHandler {
    cursor_x: i32,
    cursor_y: i32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> InputAction {
        match event {
            WindowEvent::CloseRequested => InputAction::Quit,
            WindowEvent::Resized(size) => InputAction::Resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => self.handle_cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.handle_mouse_button(*state, *button),
            WindowEvent::MouseWheel { delta, .. } => self.handle_mouse_wheel(*delta),
            _ => InputAction::None,
        }
    }

    fn handle_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> InputAction {
        self.cursor_x = position.x.floor() as i32;
        self.cursor_y = position.y.floor() as i32;
        InputAction::DragMove(self.cursor_x, self.cursor_y)
    }

    fn handle_mouse_button(&mut self, state: ElementState, button: MouseButton) -> InputAction {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => InputAction::DragStart(self.cursor_x, self.cursor_y),
            (MouseButton::Left, ElementState::Released) => InputAction::DragEnd,
            _ => InputAction::None,
        }
    }

    fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) -> InputAction {
        match scroll_direction(delta) {
            Some(direction) => InputAction::Zoom(direction, self.cursor_x, self.cursor_y),
            None => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrolling up zooms in, scrolling down zooms out.
pub fn scroll_direction(delta: MouseScrollDelta) -> Option<ZoomDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ZoomDirection::In)
    } else if y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    None,
    Quit,
    Resize(u32, u32),
    DragStart(i32, i32),
    DragMove(i32, i32),
    DragEnd,
    Zoom(ZoomDirection, i32, i32),
}
