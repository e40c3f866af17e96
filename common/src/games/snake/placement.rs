use std::collections::HashSet;

use crate::games::SessionRng;
use super::grid::FieldSize;
use super::types::Point;

/// Half-width of the square around the head where walls may not appear.
pub const DISABLED_ZONE_RADIUS: i32 = 2;

/// Draws `count` distinct random cells of `field` that are not in `exclude`.
///
/// Fails instead of looping forever when the field has fewer than `count`
/// free cells.
pub fn sample_points(
    rng: &mut SessionRng,
    field: &FieldSize,
    count: usize,
    exclude: &[Point],
) -> Result<Vec<Point>, String> {
    let mut taken: HashSet<Point> = exclude
        .iter()
        .copied()
        .filter(|point| field.contains(*point))
        .collect();

    let free_cells = field.cell_count().saturating_sub(taken.len());
    if free_cells < count {
        return Err(format!(
            "Grid is full: requested {} free cells, only {} of {} available",
            count,
            free_cells,
            field.cell_count()
        ));
    }

    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let candidate = Point::new(
            rng.random_range(0..field.width),
            rng.random_range(0..field.height),
        );
        if taken.insert(candidate) {
            points.push(candidate);
        }
    }

    Ok(points)
}

pub fn sample_point(
    rng: &mut SessionRng,
    field: &FieldSize,
    exclude: &[Point],
) -> Result<Point, String> {
    let points = sample_points(rng, field, 1, exclude)?;
    points
        .into_iter()
        .next()
        .ok_or_else(|| "No point was sampled".to_string())
}

/// The wrapped 5x5 block centred on `head`.
pub fn disabled_wall_cells(head: Point, field: &FieldSize) -> Vec<Point> {
    let mut cells = Vec::with_capacity(25);
    for x in head.x - DISABLED_ZONE_RADIUS..=head.x + DISABLED_ZONE_RADIUS {
        for y in head.y - DISABLED_ZONE_RADIUS..=head.y + DISABLED_ZONE_RADIUS {
            cells.push(field.wrap(Point::new(x, y)));
        }
    }
    cells
}
