//! 2D geometry types shared by every Plush crate

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector from `self` to `other`
    pub fn vector_to(&self, other: Point) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        self.vector_to(other).length()
    }
}

impl std::ops::Add<Vec2> for Point {
    type Output = Point;

    fn add(self, v: Vec2) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Vec2;

    fn sub(self, other: Point) -> Vec2 {
        other.vector_to(self)
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle of this vector measured from the upward (negative-y) axis,
    /// in degrees. 0° points up, positive angles rotate clockwise.
    ///
    /// This is the convention used by rotary controls whose zero position
    /// sits at the top of their travel, not the usual from-positive-x-axis
    /// convention.
    pub fn angle_from_vertical(&self) -> f32 {
        self.x.atan2(-self.y).to_degrees()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_center(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Shrink the rect by `dx`/`dy` from every side
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: Size::new(
                (self.size.width - 2.0 * dx).max(0.0),
                (self.size.height - 2.0 * dy).max(0.0),
            ),
        }
    }

    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.1, 30.0)));
    }

    #[test]
    fn test_rect_from_center() {
        let r = Rect::from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r.origin, Point::new(40.0, 45.0));
        assert_eq!(r.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_angle_from_vertical_cardinals() {
        // Straight up is zero
        assert!(Vec2::new(0.0, -1.0).angle_from_vertical().abs() < 1e-5);
        // Right is +90, left is -90
        assert!((Vec2::new(1.0, 0.0).angle_from_vertical() - 90.0).abs() < 1e-4);
        assert!((Vec2::new(-1.0, 0.0).angle_from_vertical() + 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_vector_between_points() {
        let center = Point::new(100.0, 100.0);
        let pointer = Point::new(100.0, 40.0);
        let v = center.vector_to(pointer);
        assert_eq!(v, Vec2::new(0.0, -60.0));
        assert!(v.angle_from_vertical().abs() < 1e-5);
    }
}
