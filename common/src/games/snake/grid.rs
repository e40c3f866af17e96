use super::types::Point;

/// Folds a coordinate that is at most one grid length out of range back onto
/// `[0, max]`.
pub fn wrap_coordinate(coord: i32, max: i32) -> i32 {
    if coord < 0 {
        coord + max + 1
    } else if coord > max {
        coord - (max + 1)
    } else {
        coord
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: i32,
    pub height: i32,
}

impl FieldSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn max_x(&self) -> i32 {
        self.width - 1
    }

    pub fn max_y(&self) -> i32 {
        self.height - 1
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    pub fn wrap(&self, point: Point) -> Point {
        Point::new(
            wrap_coordinate(point.x, self.max_x()),
            wrap_coordinate(point.y, self.max_y()),
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}
