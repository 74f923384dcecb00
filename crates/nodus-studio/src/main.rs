use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use nodus_engine::device::GpuInit;
use nodus_engine::logging::{LoggingConfig, init_logging};
use nodus_engine::paint::Color;
use nodus_engine::shader::ShaderPaths;
use nodus_engine::{Window, WindowConfig};

/// Opens a window and draws a triangle until Escape is pressed.
#[derive(Debug, Parser)]
#[command(name = "nodus-studio", version)]
struct Args {
    /// Drawable width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Drawable height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Window title.
    #[arg(long, default_value = "Node Editor")]
    title: String,

    /// WGSL vertex shader (entry point `vs_main`).
    #[arg(long, default_value = "shaders/vertex_shader.wgsl")]
    vertex: PathBuf,

    /// WGSL fragment shader (entry point `fs_main`).
    #[arg(long, default_value = "shaders/fragment_shader.wgsl")]
    fragment: PathBuf,

    /// Background as `r,g,b,a` with channels in [0, 1].
    #[arg(long, value_parser = parse_color, default_value = "0.1,0.2,0.3,1.0")]
    clear_color: Color,

    /// Present without waiting for vertical sync.
    #[arg(long)]
    no_vsync: bool,

    /// Log filter in `env_logger` syntax; overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    fn window_config(&self) -> WindowConfig {
        let mut roots = ShaderPaths::default().search_roots;
        // Running from the workspace root.
        roots.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

        WindowConfig::default()
            .with_title(self.title.clone())
            .with_size(self.width, self.height)
            .with_shaders(
                ShaderPaths::new(&self.vertex, &self.fragment).with_search_roots(roots),
            )
            .with_clear_color(self.clear_color)
            .with_gpu(GpuInit::default().with_vsync(!self.no_vsync))
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    let channels = s
        .split(',')
        .map(|c| {
            let v: f32 = c.trim().parse().map_err(|e| format!("`{c}`: {e}"))?;
            if (0.0..=1.0).contains(&v) {
                Ok(v)
            } else {
                Err(format!("`{c}` is outside [0, 1]"))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    match channels[..] {
        [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
        _ => Err(format!("expected 4 channels, got {}", channels.len())),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    // Failures are logged by the window; only the exit status is left to set.
    let mut window = Window::new(args.window_config());
    let failed = window.run().is_err();
    drop(window);
    if failed {
        std::process::exit(1);
    }

    Ok(())
}
