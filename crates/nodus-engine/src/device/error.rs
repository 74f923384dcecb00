/// What the frame loop does after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Reconfigure the surface and draw again next iteration.
    Reconfigure,
    /// Transient; drop this frame.
    SkipFrame,
    /// Unrecoverable (out of memory); stop the loop.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        #[allow(unreachable_patterns)]
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => Self::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => Self::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => Self::SkipFrame,
            _ => Self::SkipFrame,
        }
    }

    #[inline]
    pub fn is_fatal(self) -> bool {
        self == Self::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_and_outdated_reconfigure() {
        assert_eq!(
            SurfaceErrorAction::for_error(&wgpu::SurfaceError::Lost),
            SurfaceErrorAction::Reconfigure
        );
        assert_eq!(
            SurfaceErrorAction::for_error(&wgpu::SurfaceError::Outdated),
            SurfaceErrorAction::Reconfigure
        );
    }

    #[test]
    fn timeout_skips_frame() {
        let action = SurfaceErrorAction::for_error(&wgpu::SurfaceError::Timeout);
        assert_eq!(action, SurfaceErrorAction::SkipFrame);
        assert!(!action.is_fatal());
    }

    #[test]
    fn out_of_memory_is_fatal() {
        assert!(SurfaceErrorAction::for_error(&wgpu::SurfaceError::OutOfMemory).is_fatal());
    }
}
