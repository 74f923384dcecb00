use std::path::{Path, PathBuf};

use super::{ShaderError, ShaderStage};

/// Shader text for one stage, together with where it came from.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub stage: ShaderStage,
    pub path: PathBuf,
    pub text: String,
}

impl ShaderSource {
    /// Reads the shader text at `path`.
    pub fn load(stage: ShaderStage, path: impl AsRef<Path>) -> Result<Self, ShaderError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
            stage,
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            stage,
            path: path.to_path_buf(),
            text,
        })
    }

    /// Wraps in-memory text; `path` is only used in diagnostics.
    pub fn from_text(stage: ShaderStage, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            stage,
            path: path.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write;

    #[test]
    fn load_reads_file_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "v.wgsl", "// vertex");

        let src = ShaderSource::load(ShaderStage::Vertex, &file).unwrap();
        assert_eq!(src.text, "// vertex");
        assert_eq!(src.path, file);
        assert_eq!(src.stage, ShaderStage::Vertex);
    }

    #[test]
    fn missing_file_is_read_error_for_that_stage() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShaderSource::load(ShaderStage::Fragment, dir.path().join("absent.wgsl"))
            .unwrap_err();

        match err {
            ShaderError::Read { stage, path, source } => {
                assert_eq!(stage, ShaderStage::Fragment);
                assert!(path.ends_with("absent.wgsl"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
