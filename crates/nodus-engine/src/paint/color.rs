/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Default background of the demo window.
    pub const SLATE: Self = Self::rgba(0.1, 0.2, 0.3, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to the `wgpu` clear color representation.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_slate_background() {
        assert_eq!(Color::default(), Color::rgba(0.1, 0.2, 0.3, 1.0));
    }

    #[test]
    fn to_wgpu_widens_channels() {
        let c = Color::rgba(0.25, 0.5, 0.75, 1.0).to_wgpu();
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 0.75, 1.0));
    }
}
