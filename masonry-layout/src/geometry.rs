use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis aligned rectangle, origin at the top left, y growing downwards
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the top
    /// and bottom. A side that would go negative collapses to zero around the
    /// original center.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        let width = self.width - 2.0 * dx;
        let height = self.height - 2.0 * dy;

        let (x, width) = if width < 0.0 {
            (self.x + self.width / 2.0, 0.0)
        } else {
            (self.x + dx, width)
        };
        let (y, height) = if height < 0.0 {
            (self.y + self.height / 2.0, 0.0)
        } else {
            (self.y + dy, height)
        };

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the two rectangles share some area. Touching edges and
    /// empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let rect = Rect::new(0.0, 10.0, 150.0, 162.0).inset(6.0, 6.0);
        assert_eq!(rect, Rect::new(6.0, 16.0, 138.0, 150.0));
    }

    #[test]
    fn test_inset_collapses() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0).inset(6.0, 6.0);
        assert_eq!(rect, Rect::new(5.0, 2.0, 0.0, 0.0));
        assert!(rect.is_empty());
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.intersects(&Rect::new(50.0, 50.0, 100.0, 100.0)));
        assert!(a.intersects(&Rect::new(10.0, 10.0, 5.0, 5.0)));

        // Touching edges
        assert!(!a.intersects(&Rect::new(100.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 100.0, 10.0, 10.0)));

        assert!(!a.intersects(&Rect::new(10.0, 10.0, 0.0, 10.0)));
    }
}
