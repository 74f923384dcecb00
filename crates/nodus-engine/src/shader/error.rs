use std::path::PathBuf;

use super::ShaderStage;

/// Failure while turning shader files into a program.
#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    /// The source file is missing or unreadable.
    #[error("failed to read {stage} shader `{}`", .path.display())]
    Read {
        stage: ShaderStage,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The source does not parse or does not validate. `log` is the compiler
    /// output for this stage only.
    #[error("{stage} shader `{}` failed to compile:\n{log}", .path.display())]
    Compile {
        stage: ShaderStage,
        path: PathBuf,
        log: String,
    },

    #[error("{stage} shader `{}` has no {stage} entry point named `{entry_point}`", .path.display())]
    MissingEntryPoint {
        stage: ShaderStage,
        path: PathBuf,
        entry_point: String,
    },

    /// The two stages do not fit together.
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },
}
