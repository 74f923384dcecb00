use std::path::{Path, PathBuf};

use super::ShaderStage;

/// Where the two shader files live and which entry points to use.
///
/// Relative paths are tried against each of `search_roots` in order, so the
/// same configuration works whether the binary is started from the project
/// root or from its build directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderPaths {
    pub vertex: PathBuf,
    pub fragment: PathBuf,
    pub vertex_entry: String,
    pub fragment_entry: String,
    pub search_roots: Vec<PathBuf>,
}

impl Default for ShaderPaths {
    fn default() -> Self {
        Self {
            vertex: PathBuf::from("shaders/vertex_shader.wgsl"),
            fragment: PathBuf::from("shaders/fragment_shader.wgsl"),
            vertex_entry: "vs_main".to_string(),
            fragment_entry: "fs_main".to_string(),
            search_roots: default_search_roots(),
        }
    }
}

impl ShaderPaths {
    pub fn new(vertex: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
            ..Self::default()
        }
    }

    pub fn with_search_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.search_roots = roots;
        self
    }

    /// Configured path for `stage`, as given.
    pub fn path(&self, stage: ShaderStage) -> &Path {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// Resolves the path for `stage` against the search roots.
    ///
    /// Absolute paths are returned unchanged. If no candidate exists the path is
    /// returned as given, so the subsequent read reports what was configured.
    pub fn resolve(&self, stage: ShaderStage) -> PathBuf {
        let path = self.path(stage);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        self.search_roots
            .iter()
            .map(|root| root.join(path))
            .find(|candidate| candidate.is_file())
            .unwrap_or_else(|| path.to_path_buf())
    }
}

fn default_search_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(".")];

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(dir);
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::write;

    #[test]
    fn absolute_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "tri.wgsl", "");
        let paths = ShaderPaths::new(&file, &file).with_search_roots(vec![]);
        assert_eq!(paths.resolve(ShaderStage::Vertex), file);
    }

    #[test]
    fn relative_path_uses_first_root_that_has_it() {
        let empty = tempfile::tempdir().unwrap();
        let full = tempfile::tempdir().unwrap();
        let file = write(full.path(), "shaders/v.wgsl", "");

        let paths = ShaderPaths::new("shaders/v.wgsl", "shaders/f.wgsl")
            .with_search_roots(vec![empty.path().to_path_buf(), full.path().to_path_buf()]);

        assert_eq!(paths.resolve(ShaderStage::Vertex), file);
    }

    #[test]
    fn unresolved_relative_path_is_returned_as_given() {
        let empty = tempfile::tempdir().unwrap();
        let paths = ShaderPaths::new("nope/v.wgsl", "nope/f.wgsl")
            .with_search_roots(vec![empty.path().to_path_buf()]);

        assert_eq!(paths.resolve(ShaderStage::Fragment), PathBuf::from("nope/f.wgsl"));
    }

    #[test]
    fn default_entry_points() {
        let paths = ShaderPaths::default();
        assert_eq!(paths.vertex_entry, "vs_main");
        assert_eq!(paths.fragment_entry, "fs_main");
        assert_eq!(paths.search_roots.first(), Some(&PathBuf::from(".")));
    }
}
