//! Shader loading, compilation and linking.
//!
//! Shader sources are WGSL files read from disk once during setup:
//! - `ShaderSource::load` reads the text of one stage
//! - `CompiledShader::compile` parses and validates it with naga
//! - `ShaderProgram::link` checks the stage interface and yields one program
//!
//! The GPU side (`wgpu::ShaderModule`, pipeline) is created from a linked
//! `ShaderProgram` by the renderer.

mod compile;
mod error;
mod link;
mod paths;
mod source;

pub use compile::CompiledShader;
pub use error::ShaderError;
pub use link::{ShaderProgram, StageProgram};
pub use paths::ShaderPaths;
pub use source::ShaderSource;

use std::fmt;

/// Pipeline stage a shader source is written for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub(crate) fn naga_stage(self) -> naga::ShaderStage {
        match self {
            Self::Vertex => naga::ShaderStage::Vertex,
            Self::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => f.write_str("vertex"),
            Self::Fragment => f.write_str("fragment"),
        }
    }
}

/// Loads, compiles and links the program described by `paths`.
///
/// Each step fails fast; the first error is returned and nothing is retried.
pub fn load_program(paths: &ShaderPaths) -> Result<ShaderProgram, ShaderError> {
    let vertex = ShaderSource::load(ShaderStage::Vertex, paths.resolve(ShaderStage::Vertex))?;
    let vertex = CompiledShader::compile(vertex, &paths.vertex_entry)?;
    log::debug!("compiled vertex shader {}", vertex.path().display());

    let fragment =
        ShaderSource::load(ShaderStage::Fragment, paths.resolve(ShaderStage::Fragment))?;
    let fragment = CompiledShader::compile(fragment, &paths.fragment_entry)?;
    log::debug!("compiled fragment shader {}", fragment.path().display());

    let program = ShaderProgram::link(vertex, fragment)?;
    log::debug!("linked shader program");

    Ok(program)
}
