use super::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    point: Point,
}

impl Food {
    pub fn new(point: Point) -> Self {
        Self { point }
    }

    pub fn coordinates(&self) -> Point {
        self.point
    }

    pub fn set_coordinates(&mut self, point: Point) {
        self.point = point;
    }

    pub fn is_food_point(&self, point: Point) -> bool {
        self.point == point
    }
}
