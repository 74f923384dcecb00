//! Fixtures shared by unit tests.

use std::fs;
use std::path::{Path, PathBuf};

/// The shaders the studio binary ships with.
pub(crate) const VERTEX_WGSL: &str = include_str!("../../nodus-studio/shaders/vertex_shader.wgsl");
pub(crate) const FRAGMENT_WGSL: &str =
    include_str!("../../nodus-studio/shaders/fragment_shader.wgsl");

/// A pair passing a color from the vertex to the fragment stage.
pub(crate) const VARYING_VERTEX_WGSL: &str = r#"
struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(position, 1.0);
    out.color = position + vec3<f32>(0.5, 0.5, 0.5);
    return out;
}
"#;

pub(crate) const VARYING_FRAGMENT_WGSL: &str = r#"
@fragment
fn fs_main(@location(0) color: vec3<f32>) -> @location(0) vec4<f32> {
    return vec4<f32>(color, 1.0);
}
"#;

/// Writes `text` to `rel` inside `dir` and returns the full path.
pub(crate) fn write(dir: &Path, rel: &str, text: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, text).unwrap();
    path
}
