use std::path::Path;

use naga::valid::{Capabilities, ValidationFlags, Validator};

use super::{ShaderError, ShaderSource, ShaderStage};

/// A WGSL source that parsed, validated, and has the requested entry point.
///
/// Holds the naga IR (used for interface checks at link time) and the original
/// text (handed to wgpu when the pipeline is built).
#[derive(Debug)]
pub struct CompiledShader {
    source: ShaderSource,
    entry_point: String,
    module: naga::Module,
}

impl CompiledShader {
    /// Compiles `source`, requiring an entry point named `entry_point` for the
    /// source's stage.
    ///
    /// Capabilities are kept at the WebGPU baseline so anything accepted here is
    /// also accepted by the device.
    pub fn compile(source: ShaderSource, entry_point: &str) -> Result<Self, ShaderError> {
        let module = naga::front::wgsl::parse_str(&source.text).map_err(|e| {
            ShaderError::Compile {
                stage: source.stage,
                path: source.path.clone(),
                log: e.emit_to_string(&source.text),
            }
        })?;

        Validator::new(ValidationFlags::all(), Capabilities::empty())
            .validate(&module)
            .map_err(|e| ShaderError::Compile {
                stage: source.stage,
                path: source.path.clone(),
                log: error_chain(&e),
            })?;

        let naga_stage = source.stage.naga_stage();
        let found = module
            .entry_points
            .iter()
            .any(|ep| ep.stage == naga_stage && ep.name == entry_point);

        if !found {
            return Err(ShaderError::MissingEntryPoint {
                stage: source.stage,
                path: source.path,
                entry_point: entry_point.to_string(),
            });
        }

        Ok(Self {
            source,
            entry_point: entry_point.to_string(),
            module,
        })
    }

    pub fn stage(&self) -> ShaderStage {
        self.source.stage
    }

    pub fn path(&self) -> &Path {
        &self.source.path
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub(crate) fn module(&self) -> &naga::Module {
        &self.module
    }

    /// The stage entry point selected at compile time.
    pub(crate) fn entry(&self) -> Option<&naga::EntryPoint> {
        let stage = self.source.stage.naga_stage();
        self.module
            .entry_points
            .iter()
            .find(|ep| ep.stage == stage && ep.name == self.entry_point)
    }

    pub(crate) fn into_source(self) -> ShaderSource {
        self.source
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut log = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        log.push_str(": ");
        log.push_str(&e.to_string());
        cur = e.source();
    }
    log
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FRAGMENT_WGSL, VERTEX_WGSL};

    fn src(stage: ShaderStage, text: &str) -> ShaderSource {
        ShaderSource::from_text(stage, format!("{stage}.wgsl"), text)
    }

    #[test]
    fn valid_vertex_shader_compiles() {
        let shader = CompiledShader::compile(src(ShaderStage::Vertex, VERTEX_WGSL), "vs_main").unwrap();
        assert_eq!(shader.stage(), ShaderStage::Vertex);
        assert_eq!(shader.entry_point(), "vs_main");
        assert!(shader.entry().is_some());
    }

    #[test]
    fn syntax_error_reports_log_for_its_own_stage() {
        let err = CompiledShader::compile(src(ShaderStage::Fragment, "fn fs_main( {"), "fs_main")
            .unwrap_err();

        match err {
            ShaderError::Compile { stage, path, log } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert_eq!(path, Path::new("fragment.wgsl"));
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn type_error_fails_to_compile() {
        let text = "@fragment fn fs_main() -> @location(0) vec4<f32> { return 1.0; }";
        let err = CompiledShader::compile(src(ShaderStage::Fragment, text), "fs_main").unwrap_err();
        assert!(matches!(err, ShaderError::Compile { .. }));
    }

    #[test]
    fn entry_point_of_wrong_stage_is_missing() {
        // fs_main exists, but as a fragment entry point.
        let err = CompiledShader::compile(src(ShaderStage::Vertex, FRAGMENT_WGSL), "fs_main")
            .unwrap_err();

        match err {
            ShaderError::MissingEntryPoint { stage, entry_point, .. } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert_eq!(entry_point, "fs_main");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn misnamed_entry_point_is_missing() {
        let err = CompiledShader::compile(src(ShaderStage::Vertex, VERTEX_WGSL), "main").unwrap_err();
        assert!(matches!(err, ShaderError::MissingEntryPoint { .. }));
    }
}
