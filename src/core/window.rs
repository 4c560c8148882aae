/// Drawable surface size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; a zero height is treated as one pixel
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for WindowDimensions {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1920, 1080);
        assert_eq!(dims.width, 1920);
        assert_eq!(dims.height, 1080);
    }

    #[test]
    fn test_aspect() {
        assert_eq!(WindowDimensions::new(800, 600).aspect(), 800.0 / 600.0);
        assert_eq!(WindowDimensions::new(100, 0).aspect(), 100.0);
    }

    #[test]
    fn test_is_empty() {
        assert!(WindowDimensions::new(0, 480).is_empty());
        assert!(!WindowDimensions::new(1, 1).is_empty());
    }

    #[test]
    fn test_from_physical_size() {
        let dims: WindowDimensions = winit::dpi::PhysicalSize::new(640u32, 480u32).into();
        assert_eq!(dims, WindowDimensions::new(640, 480));
    }
}
