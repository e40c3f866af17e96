use std::collections::VecDeque;

use super::grid::FieldSize;
use super::types::Point;

pub const HEAD_CELL: char = '@';
pub const BODY_CELL: char = 'o';
pub const WALL_CELL: char = '#';
pub const FOOD_CELL: char = '*';
pub const EMPTY_CELL: char = '.';

/// Paints the whole field from scratch on every call. The first body point is
/// the head.
pub trait GameRenderer {
    fn render(&mut self, snake_body: &VecDeque<Point>, walls: &[Point], food: Point);
}

/// Text picture of the field, one line per row. Points outside the field are
/// skipped.
pub fn render_frame(field: &FieldSize, snake_body: &VecDeque<Point>, walls: &[Point], food: Point) -> String {
    let width = field.width.max(0) as usize;
    let height = field.height.max(0) as usize;
    let mut cells = vec![vec![EMPTY_CELL; width]; height];

    let mut paint = |point: Point, cell: char| {
        if field.contains(point) {
            cells[point.y as usize][point.x as usize] = cell;
        }
    };

    for (idx, point) in snake_body.iter().enumerate() {
        paint(*point, if idx == 0 { HEAD_CELL } else { BODY_CELL });
    }
    for wall in walls {
        paint(*wall, WALL_CELL);
    }
    paint(food, FOOD_CELL);

    cells
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_frame_marks_every_object() {
        let field = FieldSize::new(4, 3);
        let body = VecDeque::from([Point::new(1, 1), Point::new(2, 1)]);
        let frame = render_frame(&field, &body, &[Point::new(0, 0)], Point::new(3, 2));
        assert_eq!(frame, "#...\n.@o.\n...*");
    }

    #[test]
    fn test_head_drawn_over_duplicate_tail() {
        let field = FieldSize::new(3, 1);
        let body = VecDeque::from([Point::new(0, 0), Point::new(1, 0), Point::new(1, 0)]);
        let frame = render_frame(&field, &body, &[], Point::new(2, 0));
        assert_eq!(frame, "@o*");
    }

    #[test]
    fn test_points_outside_field_are_ignored() {
        let field = FieldSize::new(2, 2);
        let body = VecDeque::from([Point::new(0, 0)]);
        let frame = render_frame(&field, &body, &[Point::new(5, 5)], Point::new(-1, 0));
        assert_eq!(frame, "@.\n..");
    }
}
