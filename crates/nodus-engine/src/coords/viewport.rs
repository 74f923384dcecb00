/// Viewport rectangle in physical pixels.
///
/// The graphics pipeline maps normalized device coordinates onto this rectangle
/// of the surface. Origin is the top-left corner of the surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Full-surface viewport `(0, 0, width, height)`.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clips the viewport to a `width` x `height` render target.
    ///
    /// wgpu rejects viewports that extend past the target, so renderers call this
    /// with the size of the texture they draw into.
    pub fn clamped_to(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        let x2 = self.x.saturating_add(self.width).min(width);
        let y2 = self.y.saturating_add(self.height).min(height);
        Self::new(x, y, x2 - x, y2 - y)
    }
}
