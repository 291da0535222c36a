//! Free functions for engine construction.

use std::time::Duration;

use crate::camera::controller::CameraController;
use crate::diagnostics::DiagnosticsReporter;
use crate::error::LatticeError;
use crate::geometry::generate_lattice;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::FrameTargets;
use crate::options::{DiagnosticsOptions, Options};
use crate::renderer::lattice_pass::check_lattice_size;
use crate::renderer::LatticePass;

/// Intermediate state holding all initialized GPU subsystems.
///
/// Produced by [`init_gpu_pipeline`] and consumed by
/// [`LatticeEngine::new`](super::LatticeEngine::new) to build the final
/// engine struct.
pub(super) struct GpuBootstrap {
    pub camera_controller: CameraController,
    pub lattice_pass: LatticePass,
    pub targets: FrameTargets,
}

/// Generate the lattice and build every pipeline that draws it.
pub(super) fn init_gpu_pipeline(
    context: &RenderContext,
    options: &Options,
) -> Result<GpuBootstrap, LatticeError> {
    let mut shader_composer = ShaderComposer::new()?;
    let camera_controller = CameraController::new(context, &options.camera);

    let half_extent = options.lattice.half_extent;
    let limit = context.max_buffer_size();
    let size = check_lattice_size(half_extent, limit)?;
    let vertices = generate_lattice(half_extent)
        .ok_or(LatticeError::BufferTooLarge { size, limit })?;
    log::info!(
        "generated lattice: half extent {}, {} vertices",
        half_extent,
        vertices.len()
    );

    let lattice_pass = LatticePass::new(
        context,
        &camera_controller.layout,
        &mut shader_composer,
        &vertices,
    )?;

    let targets = FrameTargets::new(
        &context.device,
        (context.config.width, context.config.height),
        context.format(),
        context.sample_count,
    );

    Ok(GpuBootstrap {
        camera_controller,
        lattice_pass,
        targets,
    })
}

/// Spawn the diagnostics reporter if enabled. A non-positive or non-finite
/// period disables it.
pub(super) fn spawn_diagnostics(
    options: &DiagnosticsOptions,
) -> Result<Option<DiagnosticsReporter>, LatticeError> {
    if !options.enabled {
        return Ok(None);
    }
    let Ok(period) = Duration::try_from_secs_f64(options.period_secs) else {
        log::warn!(
            "invalid diagnostics period {}, reporter disabled",
            options.period_secs
        );
        return Ok(None);
    };
    if period.is_zero() {
        log::warn!("zero diagnostics period, reporter disabled");
        return Ok(None);
    }
    DiagnosticsReporter::new(period)
        .map(Some)
        .map_err(LatticeError::ThreadSpawn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_diagnostics_spawn_nothing() {
        let options = DiagnosticsOptions {
            enabled: false,
            ..DiagnosticsOptions::default()
        };
        assert!(spawn_diagnostics(&options).unwrap().is_none());
    }

    #[test]
    fn bad_periods_disable_diagnostics() {
        for period_secs in [0.0, -1.0, f64::NAN] {
            let options = DiagnosticsOptions {
                enabled: true,
                period_secs,
            };
            assert!(spawn_diagnostics(&options).unwrap().is_none());
        }
    }

    #[test]
    fn enabled_diagnostics_spawn_a_reporter() {
        let reporter =
            spawn_diagnostics(&DiagnosticsOptions::default()).unwrap();
        assert!(reporter.is_some());
    }
}
