use std::fmt;

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<u32> {
    /// True if either dimension is zero.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert a physical pixel size into logical pixels, rounding to the
    /// nearest pixel the same way the logical-to-physical direction does.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        Size {
            width: (width as f64 / scale_factor).round() as u32,
            height: (height as f64 / scale_factor).round() as u32,
        }
    }
}

impl<T> From<(T, T)> for Size<T> {
    fn from((width, height): (T, T)) -> Self {
        Size { width, height }
    }
}

impl<T> From<Size<T>> for (T, T) {
    fn from(size: Size<T>) -> Self {
        (size.width, size.height)
    }
}

impl<T: fmt::Display> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_physical_divides_by_scale() {
        assert_eq!(Size::from_physical(1600, 1200, 2.0), Size::new(800, 600));
        assert_eq!(Size::from_physical(800, 600, 1.0), Size::new(800, 600));
    }

    #[test]
    fn test_from_physical_rounds_at_fractional_scale() {
        // 801x600 logical is 1001x750 physical at 1.25 (1001.25 rounded)
        assert_eq!(Size::from_physical(1001, 750, 1.25), Size::new(801, 600));
        assert_eq!(Size::from_physical(1201, 900, 1.5), Size::new(801, 600));
    }

    #[test]
    fn test_is_empty() {
        assert!(Size::new(0u32, 10).is_empty());
        assert!(Size::new(10u32, 0).is_empty());
        assert!(!Size::new(1u32, 1).is_empty());
    }

    #[test]
    fn test_tuple_conversions() {
        let size: Size<u32> = (1024, 768).into();
        assert_eq!(size, Size::new(1024, 768));
        assert_eq!(<(u32, u32)>::from(size), (1024, 768));
        assert_eq!(size.to_string(), "1024x768");
    }

    #[test]
    fn test_cast() {
        let size = Size::new(3u32, 4u32).cast::<f64>();
        assert_eq!(size, Size::new(3.0, 4.0));
    }
}
