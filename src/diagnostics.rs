//! Periodic console diagnostics.
//!
//! The engine publishes a [`DiagnosticsSnapshot`] every frame into a triple
//! buffer; a background thread wakes once per period, reads the latest
//! snapshot and logs it. The render loop never blocks on the reporter.

use std::fmt::Write as _;
use std::sync::mpsc;
use std::time::Duration;

use glam::{DVec2, Vec3};

use crate::camera::FlyCamera;

/// Everything the reporter prints, captured at the end of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiagnosticsSnapshot {
    /// Milliseconds per frame over the last checkpoint window.
    pub mspf: f32,
    /// Camera roll, radians.
    pub roll: f32,
    /// Camera pitch, radians.
    pub pitch: f32,
    /// Camera yaw, radians.
    pub yaw: f32,
    /// Camera world-space position.
    pub position: Vec3,
    /// Last cursor sample in window pixels.
    pub cursor: DVec2,
    /// Triangles drawn per frame.
    pub triangles: u64,
    /// Wall-clock seconds of the last frame.
    pub time: f64,
}

impl DiagnosticsSnapshot {
    /// Capture the camera's current state.
    #[must_use]
    pub fn capture(camera: &FlyCamera, triangles: u64) -> Self {
        Self {
            mspf: camera.timer().mspf(),
            roll: camera.roll(),
            pitch: camera.pitch(),
            yaw: camera.yaw(),
            position: camera.position(),
            cursor: camera.cursor(),
            triangles,
            time: camera.timer().time(),
        }
    }

    /// Multi-line plain-text report.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "ms per frame: {}", self.mspf);
        out.push_str("Camera:\n");
        for (name, rad) in
            [("roll", self.roll), ("pitch", self.pitch), ("yaw", self.yaw)]
        {
            let _ = writeln!(out, "  {name}: {rad} ({})", rad.to_degrees());
        }
        let _ = writeln!(out, "  x: {}", self.position.x);
        let _ = writeln!(out, "  y: {}", self.position.y);
        let _ = writeln!(out, "  z: {}", self.position.z);
        out.push_str("Mouse:\n");
        let _ = writeln!(out, "  x: {}", self.cursor.x);
        let _ = writeln!(out, "  y: {}", self.cursor.y);
        let _ = writeln!(out, "Triangle count: {}", self.triangles);
        let _ = write!(out, "Time: {}", self.time);
        out
    }
}

/// Background thread that logs the latest snapshot once per period.
pub struct DiagnosticsReporter {
    snapshot: triple_buffer::Input<Option<DiagnosticsSnapshot>>,
    shutdown_tx: mpsc::Sender<()>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl DiagnosticsReporter {
    /// Spawn the reporter thread.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] if the background thread fails to spawn.
    pub fn new(period: Duration) -> Result<Self, std::io::Error> {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
        let (input, output) = triple_buffer::triple_buffer(&None);

        let thread = std::thread::Builder::new()
            .name("diagnostics".into())
            .spawn(move || {
                Self::thread_loop(period, &shutdown_rx, output);
            })?;

        Ok(Self {
            snapshot: input,
            shutdown_tx,
            thread: Some(thread),
        })
    }

    /// Replace the snapshot the next report will print (non-blocking).
    pub fn publish(&mut self, snapshot: DiagnosticsSnapshot) {
        self.snapshot.write(Some(snapshot));
    }

    /// Stop the background thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn thread_loop(
        period: Duration,
        shutdown_rx: &mpsc::Receiver<()>,
        mut output: triple_buffer::Output<Option<DiagnosticsSnapshot>>,
    ) {
        loop {
            match shutdown_rx.recv_timeout(period) {
                Err(mpsc::RecvTimeoutError::Timeout) => {
                    if let Some(snapshot) = output.read() {
                        log::info!("\n{}", snapshot.report());
                    }
                }
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }
    }
}

impl Drop for DiagnosticsReporter {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;
    use std::time::Instant;

    use super::*;

    #[test]
    fn report_lists_every_field() {
        let snapshot = DiagnosticsSnapshot {
            mspf: 16.5,
            roll: 0.0,
            pitch: FRAC_PI_2,
            yaw: -1.0,
            position: Vec3::new(1.0, 2.0, 3.0),
            cursor: DVec2::new(640.0, 360.0),
            triangles: 12,
            time: 4.25,
        };
        let report = snapshot.report();
        assert!(report.starts_with("ms per frame: 16.5\n"));
        assert!(report.contains("  pitch: 1.5707964 ("));
        assert!(report.contains("Camera:\n  roll: 0 (0)\n"));
        assert!(report.contains("  z: 3\n"));
        assert!(report.contains("Mouse:\n  x: 640\n  y: 360\n"));
        assert!(report.contains("Triangle count: 12"));
        assert!(report.ends_with("Time: 4.25"));
    }

    #[test]
    fn capture_reads_the_camera() {
        let camera = FlyCamera::default();
        let snapshot = DiagnosticsSnapshot::capture(&camera, 7);
        assert_eq!(snapshot.position, camera.position());
        assert_eq!(snapshot.yaw, camera.yaw());
        assert_eq!(snapshot.triangles, 7);
    }

    #[test]
    fn shutdown_is_prompt() {
        let mut reporter =
            DiagnosticsReporter::new(Duration::from_secs(60)).unwrap();
        reporter.publish(DiagnosticsSnapshot::default());
        let start = Instant::now();
        reporter.shutdown();
        assert!(start.elapsed() < Duration::from_secs(5));
        // A second shutdown (as from Drop) is a no-op.
        reporter.shutdown();
    }
}
