//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the transient keyboard state (held modifiers)
//! and the key-binding map. It is the only thing that sits between raw
//! window events and the engine's
//! [`execute`](crate::LatticeEngine::execute) method.

use super::event::{InputEvent, KeyState};
use super::keyboard::KeyAction;
use crate::engine::command::LatticeCommand;
use crate::options::{CameraOptions, KeybindingOptions};

/// Movement speeds selected by the held modifiers.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Speeds {
    slow: f32,
    normal: f32,
    fast: f32,
}

/// Converts raw window events into [`LatticeCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    speeds: Speeds,
    nudge_step: f32,
    /// Whether the slow modifier (Shift) is held.
    shift_pressed: bool,
    /// Whether the fast modifier (Control) is held.
    control_pressed: bool,
}

impl InputProcessor {
    /// Create a processor from the camera options and key bindings.
    #[must_use]
    pub fn new(camera: &CameraOptions, key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            speeds: Speeds {
                slow: camera.slow_speed,
                normal: camera.normal_speed,
                fast: camera.fast_speed,
            },
            nudge_step: camera.nudge_step,
            shift_pressed: false,
            control_pressed: false,
        }
    }

    /// Speed for a movement key press under the current modifiers. Shift
    /// wins over Control.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        if self.shift_pressed {
            self.speeds.slow
        } else if self.control_pressed {
            self.speeds.fast
        } else {
            self.speeds.normal
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<LatticeCommand> {
        match event {
            InputEvent::Key { code, state } => self.handle_key(&code, state),
            InputEvent::ModifiersChanged { shift, control } => {
                self.shift_pressed = shift;
                self.control_pressed = control;
                None
            }
            InputEvent::CursorEntered { entered } => {
                Some(LatticeCommand::CursorEntered { entered })
            }
            InputEvent::CursorMoved { x, y } => {
                Some(LatticeCommand::CursorMoved { x, y })
            }
            InputEvent::MouseMotion { dx, dy } => {
                Some(LatticeCommand::MouseMotion { dx, dy })
            }
        }
    }

    /// Map a bound key transition to a command. Repeats never produce one.
    fn handle_key(
        &self,
        code: &str,
        state: KeyState,
    ) -> Option<LatticeCommand> {
        let pressed = match state {
            KeyState::Pressed => true,
            KeyState::Released => false,
            KeyState::Repeat => return None,
        };
        let action = self.key_bindings.lookup(code)?;

        if let Some((axis, sign)) = action.movement() {
            let velocity = if pressed {
                sign * self.movement_speed()
            } else {
                0.0
            };
            return Some(LatticeCommand::SetVelocity { axis, velocity });
        }

        if !pressed {
            return None;
        }

        let step = self.nudge_step;
        match action {
            KeyAction::PitchUp => Some(LatticeCommand::Nudge {
                pitch: step,
                yaw: 0.0,
            }),
            KeyAction::PitchDown => Some(LatticeCommand::Nudge {
                pitch: -step,
                yaw: 0.0,
            }),
            KeyAction::YawLeft => Some(LatticeCommand::Nudge {
                pitch: 0.0,
                yaw: step,
            }),
            KeyAction::YawRight => Some(LatticeCommand::Nudge {
                pitch: 0.0,
                yaw: -step,
            }),
            KeyAction::ResetView => Some(LatticeCommand::ResetView),
            KeyAction::Quit => Some(LatticeCommand::Quit),
            _ => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(&CameraOptions::default(), KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use glam::Vec3;

    use super::*;
    use crate::camera::{Axis, FlyCamera};
    use crate::util::test_rng::Lcg;

    fn key(code: &str, state: KeyState) -> InputEvent {
        InputEvent::Key {
            code: code.into(),
            state,
        }
    }

    fn modifiers(shift: bool, control: bool) -> InputEvent {
        InputEvent::ModifiersChanged { shift, control }
    }

    #[test]
    fn movement_keys_set_signed_normal_speed() {
        let mut input = InputProcessor::default();
        let cases = [
            ("KeyA", Axis::X, -5.0),
            ("KeyD", Axis::X, 5.0),
            ("KeyW", Axis::Z, -5.0),
            ("KeyS", Axis::Z, 5.0),
            ("Space", Axis::Y, 5.0),
            ("KeyZ", Axis::Y, -5.0),
        ];
        for (code, axis, velocity) in cases {
            assert_eq!(
                input.handle_event(key(code, KeyState::Pressed)),
                Some(LatticeCommand::SetVelocity { axis, velocity }),
                "{code}"
            );
        }
    }

    #[test]
    fn modifiers_pick_speed_and_shift_wins() {
        let mut input = InputProcessor::default();

        let _ = input.handle_event(modifiers(false, true));
        assert_eq!(
            input.handle_event(key("KeyD", KeyState::Pressed)),
            Some(LatticeCommand::SetVelocity {
                axis: Axis::X,
                velocity: 20.0
            })
        );

        let _ = input.handle_event(modifiers(true, false));
        assert_eq!(
            input.handle_event(key("KeyW", KeyState::Pressed)),
            Some(LatticeCommand::SetVelocity {
                axis: Axis::Z,
                velocity: -0.1
            })
        );

        let _ = input.handle_event(modifiers(true, true));
        assert_eq!(input.movement_speed(), 0.1);
    }

    #[test]
    fn release_always_stops_the_axis() {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(modifiers(false, true));
        assert_eq!(
            input.handle_event(key("Space", KeyState::Released)),
            Some(LatticeCommand::SetVelocity {
                axis: Axis::Y,
                velocity: 0.0
            })
        );
    }

    #[test]
    fn repeats_are_ignored() {
        let mut input = InputProcessor::default();
        for code in ["KeyW", "ArrowUp", "KeyC", "Escape"] {
            assert_eq!(input.handle_event(key(code, KeyState::Repeat)), None);
        }
    }

    #[test]
    fn unbound_keys_do_nothing() {
        let mut input = InputProcessor::default();
        assert_eq!(input.handle_event(key("KeyQ", KeyState::Pressed)), None);
        assert_eq!(input.handle_event(key("KeyQ", KeyState::Released)), None);
    }

    #[test]
    fn arrows_nudge_on_press_only() {
        let mut input = InputProcessor::default();
        let step = PI / 16.0;
        assert_eq!(
            input.handle_event(key("ArrowUp", KeyState::Pressed)),
            Some(LatticeCommand::Nudge {
                pitch: step,
                yaw: 0.0
            })
        );
        assert_eq!(
            input.handle_event(key("ArrowDown", KeyState::Pressed)),
            Some(LatticeCommand::Nudge {
                pitch: -step,
                yaw: 0.0
            })
        );
        assert_eq!(
            input.handle_event(key("ArrowLeft", KeyState::Pressed)),
            Some(LatticeCommand::Nudge {
                pitch: 0.0,
                yaw: step
            })
        );
        assert_eq!(
            input.handle_event(key("ArrowRight", KeyState::Pressed)),
            Some(LatticeCommand::Nudge {
                pitch: 0.0,
                yaw: -step
            })
        );
        assert_eq!(
            input.handle_event(key("ArrowRight", KeyState::Released)),
            None
        );
    }

    #[test]
    fn reset_and_quit() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(key("KeyC", KeyState::Pressed)),
            Some(LatticeCommand::ResetView)
        );
        assert_eq!(
            input.handle_event(key("Escape", KeyState::Pressed)),
            Some(LatticeCommand::Quit)
        );
        assert_eq!(input.handle_event(key("Escape", KeyState::Released)), None);
    }

    #[test]
    fn rebound_keys_follow_options() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::Quit, "KeyQ");
        let mut input =
            InputProcessor::new(&CameraOptions::default(), bindings);
        assert_eq!(
            input.handle_event(key("KeyQ", KeyState::Pressed)),
            Some(LatticeCommand::Quit)
        );
        assert_eq!(input.handle_event(key("Escape", KeyState::Pressed)), None);
    }

    #[test]
    fn pointer_events_pass_through() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::CursorEntered { entered: true }),
            Some(LatticeCommand::CursorEntered { entered: true })
        );
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 3.0, y: 4.0 }),
            Some(LatticeCommand::CursorMoved { x: 3.0, y: 4.0 })
        );
        assert_eq!(
            input.handle_event(InputEvent::MouseMotion { dx: -1.0, dy: 2.0 }),
            Some(LatticeCommand::MouseMotion { dx: -1.0, dy: 2.0 })
        );
    }

    #[test]
    fn custom_speeds_are_used() {
        let camera = CameraOptions {
            normal_speed: 7.0,
            ..CameraOptions::default()
        };
        let mut input =
            InputProcessor::new(&camera, KeybindingOptions::default());
        assert_eq!(
            input.handle_event(key("KeyD", KeyState::Pressed)),
            Some(LatticeCommand::SetVelocity {
                axis: Axis::X,
                velocity: 7.0
            })
        );
    }

    fn axis_velocity(camera: &FlyCamera, axis: Axis) -> f32 {
        let v = camera.velocity();
        match axis {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    #[test]
    fn random_key_sequences_stop_on_release() {
        const MOVE_KEYS: [&str; 6] =
            ["KeyA", "KeyD", "KeyW", "KeyS", "Space", "KeyZ"];

        let mut rng = Lcg(0xfeed);
        let mut input = InputProcessor::default();
        let mut cam = FlyCamera::default();
        let mut t = 0.0;
        let _ = cam.update(t);

        for _ in 0..5_000 {
            let event = if rng.next_f64() < 0.2 {
                modifiers(rng.next_f64() < 0.5, rng.next_f64() < 0.5)
            } else {
                let code = MOVE_KEYS[(rng.next_f64() * 6.0) as usize];
                let state = match (rng.next_f64() * 3.0) as u32 {
                    0 => KeyState::Pressed,
                    1 => KeyState::Released,
                    _ => KeyState::Repeat,
                };
                key(code, state)
            };
            let released = matches!(
                event,
                InputEvent::Key {
                    state: KeyState::Released,
                    ..
                }
            );

            if let Some(LatticeCommand::SetVelocity { axis, velocity }) =
                input.handle_event(event)
            {
                cam.set_velocity(axis, velocity);
                if released {
                    assert_eq!(axis_velocity(&cam, axis), 0.0);
                }
            }
            t += 0.01;
            let _ = cam.update(t);
        }

        for code in MOVE_KEYS {
            if let Some(LatticeCommand::SetVelocity { axis, velocity }) =
                input.handle_event(key(code, KeyState::Released))
            {
                cam.set_velocity(axis, velocity);
            }
        }
        let _ = cam.update(t + 0.01);
        assert_eq!(cam.velocity(), Vec3::ZERO);
    }
}
