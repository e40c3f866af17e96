use crate::games::SessionRng;
use super::types::Point;

#[derive(Clone, Debug, Default)]
pub struct Walls {
    points: Vec<Point>,
}

impl Walls {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn init(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_wall_point(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Moves one uniformly chosen wall to `point`. Returns the replaced point,
    /// or `None` when there are no walls.
    pub fn change_random_wall_position(&mut self, point: Point, rng: &mut SessionRng) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let wall_index = rng.random_range(0..self.points.len());
        Some(std::mem::replace(&mut self.points[wall_index], point))
    }
}
