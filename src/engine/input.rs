//! Input and command dispatch for LatticeEngine

use super::command::LatticeCommand;
use super::LatticeEngine;
use crate::input::InputEvent;

impl LatticeEngine {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Consumers forward raw window
    /// events as [`InputEvent`] variants; the input processor maps bound
    /// keys and pointer events to commands which are executed immediately.
    ///
    /// Returns the command that was executed, if any.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
    ) -> Option<LatticeCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Execute a command against the camera or the application state.
    pub fn execute(&mut self, command: LatticeCommand) {
        let fly = &mut self.camera_controller.fly;
        match command {
            LatticeCommand::SetVelocity { axis, velocity } => {
                fly.set_velocity(axis, velocity);
            }
            LatticeCommand::Nudge { pitch, yaw } => fly.nudge(pitch, yaw),
            LatticeCommand::ResetView => {
                fly.reset_view();
                log::debug!("camera reset");
            }
            LatticeCommand::CursorEntered { entered } => {
                fly.cursor_entered(entered);
            }
            LatticeCommand::CursorMoved { x, y } => fly.cursor_moved(x, y),
            LatticeCommand::MouseMotion { dx, dy } => fly.mouse_motion(dx, dy),
            LatticeCommand::Quit => {
                log::info!("quit requested");
                self.shutdown_requested = true;
            }
        }
    }
}
