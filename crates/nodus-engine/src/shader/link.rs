use std::collections::BTreeMap;
use std::path::PathBuf;

use naga::{Binding, Handle, Scalar, ScalarKind, Type, TypeInner, VectorSize};

use super::{CompiledShader, ShaderError, ShaderStage};

/// Vertex attribute slot the triangle's positions are bound to.
const POSITION_LOCATION: u32 = 0;

const POSITION_TYPE: TypeInner = TypeInner::Vector {
    size: VectorSize::Tri,
    scalar: Scalar::F32,
};

/// What the renderer needs from one linked stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgram {
    pub path: PathBuf,
    pub entry_point: String,
    pub source: String,
}

impl From<CompiledShader> for StageProgram {
    fn from(shader: CompiledShader) -> Self {
        let entry_point = shader.entry_point().to_string();
        let source = shader.into_source();
        Self {
            path: source.path,
            entry_point,
            source: source.text,
        }
    }
}

/// A vertex + fragment pair whose interfaces were checked against each other.
#[derive(Debug, Clone)]
pub struct ShaderProgram {
    vertex: StageProgram,
    fragment: StageProgram,
}

impl ShaderProgram {
    /// Links two compiled shaders into a program.
    ///
    /// Both shaders are consumed; their IR is released once the program exists.
    /// Checks:
    /// - the stages are a vertex and a fragment shader, in that order
    /// - the vertex stage reads exactly `@location(0)` as `vec3<f32>`
    /// - every location the fragment stage reads is written by the vertex stage
    ///   with the same type
    ///
    /// All problems are collected into one link log.
    pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Result<Self, ShaderError> {
        let mut problems = Vec::new();

        if vertex.stage() != ShaderStage::Vertex {
            problems.push(format!(
                "`{}` is a {} shader, expected a vertex shader",
                vertex.path().display(),
                vertex.stage()
            ));
        }
        if fragment.stage() != ShaderStage::Fragment {
            problems.push(format!(
                "`{}` is a {} shader, expected a fragment shader",
                fragment.path().display(),
                fragment.stage()
            ));
        }

        if problems.is_empty() {
            check_interface(&vertex, &fragment, &mut problems);
        }

        if !problems.is_empty() {
            return Err(ShaderError::Link {
                log: problems.join("\n"),
            });
        }

        Ok(Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        })
    }

    pub fn vertex(&self) -> &StageProgram {
        &self.vertex
    }

    pub fn fragment(&self) -> &StageProgram {
        &self.fragment
    }
}

fn check_interface(vertex: &CompiledShader, fragment: &CompiledShader, problems: &mut Vec<String>) {
    let (Some(vs), Some(fs)) = (vertex.entry(), fragment.entry()) else {
        problems.push("entry point vanished after compilation".to_string());
        return;
    };

    let vs_inputs = locations(
        vertex.module(),
        vs.function.arguments.iter().map(|a| (a.ty, a.binding.as_ref())),
    );
    let vs_outputs = locations(
        vertex.module(),
        vs.function.result.iter().map(|r| (r.ty, r.binding.as_ref())),
    );
    let fs_inputs = locations(
        fragment.module(),
        fs.function.arguments.iter().map(|a| (a.ty, a.binding.as_ref())),
    );

    match vs_inputs.get(&POSITION_LOCATION) {
        Some(ty) if *ty == POSITION_TYPE => {}
        Some(ty) => problems.push(format!(
            "vertex input @location({POSITION_LOCATION}) is {}, expected {}",
            describe(ty),
            describe(&POSITION_TYPE)
        )),
        None => problems.push(format!(
            "vertex stage does not read the position attribute at @location({POSITION_LOCATION})"
        )),
    }

    for loc in vs_inputs.keys().filter(|loc| **loc != POSITION_LOCATION) {
        problems.push(format!(
            "vertex stage reads @location({loc}), but only @location({POSITION_LOCATION}) is supplied"
        ));
    }

    for (loc, fs_ty) in &fs_inputs {
        match vs_outputs.get(loc) {
            Some(vs_ty) if vs_ty == fs_ty => {}
            Some(vs_ty) => problems.push(format!(
                "@location({loc}) is written as {} but read as {}",
                describe(vs_ty),
                describe(fs_ty)
            )),
            None => problems.push(format!(
                "fragment stage reads @location({loc}), which the vertex stage never writes"
            )),
        }
    }
}

/// Collects `@location` bindings, looking through struct members.
fn locations<'a>(
    module: &naga::Module,
    bindings: impl Iterator<Item = (Handle<Type>, Option<&'a Binding>)>,
) -> BTreeMap<u32, TypeInner> {
    let mut out = BTreeMap::new();

    for (ty, binding) in bindings {
        match binding {
            Some(Binding::Location { location, .. }) => {
                out.insert(*location, module.types[ty].inner.clone());
            }
            Some(_) => {}
            None => {
                if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                    for member in members {
                        if let Some(Binding::Location { location, .. }) = &member.binding {
                            out.insert(*location, module.types[member.ty].inner.clone());
                        }
                    }
                }
            }
        }
    }

    out
}

fn describe(ty: &TypeInner) -> String {
    match ty {
        TypeInner::Scalar(s) => scalar_name(*s),
        TypeInner::Vector { size, scalar } => format!("vec{}<{}>", *size as u8, scalar_name(*scalar)),
        other => format!("{other:?}"),
    }
}

fn scalar_name(s: Scalar) -> String {
    match (s.kind, s.width) {
        (ScalarKind::Float, 4) => "f32".to_string(),
        (ScalarKind::Float, 2) => "f16".to_string(),
        (ScalarKind::Sint, 4) => "i32".to_string(),
        (ScalarKind::Uint, 4) => "u32".to_string(),
        (ScalarKind::Bool, _) => "bool".to_string(),
        _ => format!("{s:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::ShaderSource;
    use crate::test_support::{
        FRAGMENT_WGSL, VARYING_FRAGMENT_WGSL, VARYING_VERTEX_WGSL, VERTEX_WGSL,
    };

    fn compile(stage: ShaderStage, text: &str, entry: &str) -> CompiledShader {
        let src = ShaderSource::from_text(stage, format!("{stage}.wgsl"), text);
        CompiledShader::compile(src, entry).unwrap()
    }

    fn link_log(vertex: CompiledShader, fragment: CompiledShader) -> String {
        match ShaderProgram::link(vertex, fragment) {
            Err(ShaderError::Link { log }) => log,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("link unexpectedly succeeded"),
        }
    }

    #[test]
    fn shipped_shaders_link() {
        let vs = compile(ShaderStage::Vertex, VERTEX_WGSL, "vs_main");
        let fs = compile(ShaderStage::Fragment, FRAGMENT_WGSL, "fs_main");

        let program = ShaderProgram::link(vs, fs).unwrap();
        assert_eq!(program.vertex().entry_point, "vs_main");
        assert_eq!(program.fragment().entry_point, "fs_main");
        assert_eq!(program.vertex().source, VERTEX_WGSL);
        assert_eq!(program.fragment().path, PathBuf::from("fragment.wgsl"));
    }

    #[test]
    fn struct_varyings_link() {
        let vs = compile(ShaderStage::Vertex, VARYING_VERTEX_WGSL, "vs_main");
        let fs = compile(ShaderStage::Fragment, VARYING_FRAGMENT_WGSL, "fs_main");
        assert!(ShaderProgram::link(vs, fs).is_ok());
    }

    #[test]
    fn fragment_reading_unwritten_location_fails() {
        // The shipped vertex shader writes no varyings.
        let vs = compile(ShaderStage::Vertex, VERTEX_WGSL, "vs_main");
        let fs = compile(ShaderStage::Fragment, VARYING_FRAGMENT_WGSL, "fs_main");

        let log = link_log(vs, fs);
        assert!(log.contains("never writes"), "{log}");
    }

    #[test]
    fn position_must_be_vec3() {
        let text = "@vertex fn vs_main(@location(0) p: vec2<f32>) -> @builtin(position) vec4<f32> {\n\
                    return vec4<f32>(p, 0.0, 1.0);\n}";
        let vs = compile(ShaderStage::Vertex, text, "vs_main");
        let fs = compile(ShaderStage::Fragment, FRAGMENT_WGSL, "fs_main");

        let log = link_log(vs, fs);
        assert!(log.contains("vec2<f32>"), "{log}");
    }

    #[test]
    fn extra_vertex_inputs_fail() {
        let text = "@vertex fn vs_main(@location(0) p: vec3<f32>, @location(1) c: vec3<f32>) \
                    -> @builtin(position) vec4<f32> {\n\
                    return vec4<f32>(p + c, 1.0);\n}";
        let vs = compile(ShaderStage::Vertex, text, "vs_main");
        let fs = compile(ShaderStage::Fragment, FRAGMENT_WGSL, "fs_main");

        let log = link_log(vs, fs);
        assert!(log.contains("@location(1)"), "{log}");
    }

    #[test]
    fn swapped_stages_fail() {
        let vs = compile(ShaderStage::Vertex, VERTEX_WGSL, "vs_main");
        let fs = compile(ShaderStage::Fragment, FRAGMENT_WGSL, "fs_main");

        let log = link_log(fs, vs);
        assert!(log.contains("expected a vertex shader"), "{log}");
        assert!(log.contains("expected a fragment shader"), "{log}");
    }
}
