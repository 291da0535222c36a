use std::borrow::Cow;

use naga_oil::compose::{
    ComposableModuleDescriptor, Composer, NagaModuleDescriptor, ShaderLanguage,
    ShaderType,
};

use crate::error::LatticeError;

/// Wraps `naga_oil::compose::Composer` to provide shader composition with
/// `#import` support.
///
/// Pre-loads all shared WGSL modules at construction time. Consuming shaders
/// use `#import lattice::module_name` to pull in shared code. The composer
/// produces `naga::Module` IR directly, skipping WGSL re-parse at runtime.
pub struct ShaderComposer {
    composer: Composer,
}

/// Shared module definition: (source, file_path)
struct ModuleDef {
    source: &'static str,
    file_path: &'static str,
}

/// Shared modules in dependency order.
const MODULES: &[ModuleDef] = &[ModuleDef {
    source: include_str!("../../assets/shaders/modules/camera.wgsl"),
    file_path: "modules/camera.wgsl",
}];

/// Source of the lattice raster shader.
pub const LATTICE_SHADER: &str =
    include_str!("../../assets/shaders/raster/lattice.wgsl");

impl ShaderComposer {
    /// Create a composer with every shared module registered.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Shader`] if a shared module fails to parse.
    pub fn new() -> Result<Self, LatticeError> {
        let mut composer = Composer::default();

        for m in MODULES {
            let _ = composer
                .add_composable_module(ComposableModuleDescriptor {
                    source: m.source,
                    file_path: m.file_path,
                    language: ShaderLanguage::Wgsl,
                    ..Default::default()
                })
                .map_err(|e| {
                    LatticeError::Shader(format!(
                        "failed to register shader module '{}': {e:?}",
                        m.file_path
                    ))
                })?;
        }

        Ok(Self { composer })
    }

    /// Compose a shader source string (which may contain `#import`
    /// directives) into a `wgpu::ShaderModule` ready for pipeline creation.
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::Shader`] if composition fails.
    pub fn compose(
        &mut self,
        device: &wgpu::Device,
        label: &str,
        source: &str,
        file_path: &str,
    ) -> Result<wgpu::ShaderModule, LatticeError> {
        let naga_module =
            self.compose_naga(source, file_path).map_err(|e| {
                LatticeError::Shader(format!(
                    "failed to compose shader '{file_path}': {e}"
                ))
            })?;

        Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(naga_module)),
        }))
    }

    /// Compose a shader source into a `naga::Module` without creating a wgpu
    /// shader module. Useful for testing shader composition without a GPU
    /// device.
    pub fn compose_naga(
        &mut self,
        source: &str,
        file_path: &str,
    ) -> Result<naga::Module, Box<naga_oil::compose::ComposerError>> {
        self.composer
            .make_naga_module(NagaModuleDescriptor {
                source,
                file_path,
                shader_type: ShaderType::Wgsl,
                ..Default::default()
            })
            .map_err(Box::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_shader_composes() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer
            .compose_naga(LATTICE_SHADER, "raster/lattice.wgsl")
            .unwrap_or_else(|e| panic!("lattice shader failed to compose: {e}"));

        let entry_points: Vec<&str> =
            module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_main"));
    }

    #[test]
    fn camera_uniform_matches_host_layout() {
        let mut composer = ShaderComposer::new().unwrap();
        let module = composer
            .compose_naga(LATTICE_SHADER, "raster/lattice.wgsl")
            .unwrap();

        let span = module
            .types
            .iter()
            .find_map(|(_, ty)| match &ty.inner {
                naga::TypeInner::Struct { span, .. }
                    if ty
                        .name
                        .as_deref()
                        .is_some_and(|n| n.starts_with("CameraUniform")) =>
                {
                    Some(*span)
                }
                _ => None,
            })
            .expect("CameraUniform struct in composed module");
        assert_eq!(
            span as usize,
            size_of::<crate::camera::core::CameraUniform>()
        );
    }

    #[test]
    fn camera_helpers_need_an_import() {
        let mut composer = ShaderComposer::new().unwrap();
        let source = "@vertex fn vs_main(@location(0) p: vec3<f32>) \
                      -> @builtin(position) vec4<f32> \
                      { return world_to_clip(p); }";
        assert!(composer.compose_naga(source, "bad.wgsl").is_err());
    }
}
