/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`LatticeCommand`](crate::LatticeCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::Key {
///     code: "KeyW".into(),
///     state: KeyState::Pressed,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key changed state.
    Key {
        /// Key code in `winit::keyboard::KeyCode` debug format (`"KeyW"`,
        /// `"Space"`, `"Escape"`).
        code: String,
        /// Press, release or auto-repeat.
        state: KeyState,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held (slow movement).
        shift: bool,
        /// Whether the control key is held (fast movement).
        control: bool,
    },
    /// Cursor entered or left the window.
    CursorEntered {
        /// `true` on entry, `false` on exit.
        entered: bool,
    },
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels.
        y: f64,
    },
    /// Raw relative pointer motion (unaccelerated where available).
    MouseMotion {
        /// Horizontal motion.
        dx: f64,
        /// Vertical motion.
        dy: f64,
    },
}

/// Key transition reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Initial press.
    Pressed,
    /// Release.
    Released,
    /// Platform auto-repeat while held.
    Repeat,
}

#[cfg(feature = "viewer")]
impl KeyState {
    /// Classify a winit key event.
    pub fn from_winit(state: winit::event::ElementState, repeat: bool) -> Self {
        match (state, repeat) {
            (winit::event::ElementState::Released, _) => Self::Released,
            (winit::event::ElementState::Pressed, true) => Self::Repeat,
            (winit::event::ElementState::Pressed, false) => Self::Pressed,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Convert a winit keyboard event. Returns `None` for keys without a
    /// physical key code.
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        let winit::keyboard::PhysicalKey::Code(code) = event.physical_key
        else {
            return None;
        };
        Some(Self::Key {
            code: format!("{code:?}"),
            state: KeyState::from_winit(event.state, event.repeat),
        })
    }

    /// Convert a winit modifier change.
    pub fn from_modifiers(modifiers: &winit::event::Modifiers) -> Self {
        let state = modifiers.state();
        Self::ModifiersChanged {
            shift: state.shift_key(),
            control: state.control_key(),
        }
    }
}

#[cfg(all(test, feature = "viewer"))]
mod tests {
    use winit::event::ElementState;

    use super::*;

    #[test]
    fn repeats_are_distinguished_from_presses() {
        assert_eq!(
            KeyState::from_winit(ElementState::Pressed, false),
            KeyState::Pressed
        );
        assert_eq!(
            KeyState::from_winit(ElementState::Pressed, true),
            KeyState::Repeat
        );
        assert_eq!(
            KeyState::from_winit(ElementState::Released, true),
            KeyState::Released
        );
    }
}
