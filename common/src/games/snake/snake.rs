use std::collections::VecDeque;

use super::grid::wrap_coordinate;
use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
    last_step_direction: Direction,
    max_x: i32,
    max_y: i32,
}

impl Snake {
    pub fn new(start_point: Point, direction: Direction, max_x: i32, max_y: i32) -> Self {
        Self {
            body: VecDeque::from([start_point]),
            direction,
            last_step_direction: direction,
            max_x,
            max_y,
        }
    }

    pub fn head_point(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail_point(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_step_direction(&self) -> Direction {
        self.last_step_direction
    }

    /// Where the head lands after the next step, wrapping across the edges.
    pub fn next_step_head_point(&self) -> Point {
        let head = self.head_point();
        let (dx, dy) = self.direction.delta();
        Point::new(
            wrap_coordinate(head.x + dx, self.max_x),
            wrap_coordinate(head.y + dy, self.max_y),
        )
    }

    pub fn is_body_point(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    pub fn make_step(&mut self) {
        self.last_step_direction = self.direction;
        let next_head = self.next_step_head_point();
        self.body.push_front(next_head);
        self.body.pop_back();
    }

    /// Not validated here; reversal checks belong to the caller.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Duplicates the tail so that the next step leaves the old tail in place.
    pub fn increment_body(&mut self) {
        let tail = self.tail_point();
        self.body.push_back(tail);
    }
}
