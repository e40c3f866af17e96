use crate::games::SessionRng;
use crate::log;
use super::food::Food;
use super::grid::FieldSize;
use super::placement::{disabled_wall_cells, sample_point, sample_points};
use super::settings::SnakeSettings;
use super::snake::Snake;
use super::types::{Direction, FinishReason, GameStatus, Point};
use super::walls::Walls;

pub const START_DIRECTION: Direction = Direction::Up;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Finished(FinishReason),
}

pub struct SnakeGameState {
    snake: Snake,
    food: Food,
    walls: Walls,
    score: u32,
    status: GameStatus,
    finish_reason: Option<FinishReason>,
    field_size: FieldSize,
    win_length: usize,
    walls_count: usize,
}

impl SnakeGameState {
    pub fn new(settings: &SnakeSettings, rng: &mut SessionRng) -> Result<Self, String> {
        let field_size = settings.field_size();
        let start = field_size.center();
        let mut state = Self {
            snake: Snake::new(start, START_DIRECTION, field_size.max_x(), field_size.max_y()),
            food: Food::new(start),
            walls: Walls::default(),
            score: 0,
            status: GameStatus::Stopped,
            finish_reason: None,
            field_size,
            win_length: settings.win_length as usize,
            walls_count: settings.walls_count as usize,
        };
        state.reset(rng)?;
        Ok(state)
    }

    /// Puts a fresh snake in the middle of the field heading up, then places
    /// food and walls around it.
    pub fn reset(&mut self, rng: &mut SessionRng) -> Result<(), String> {
        self.status = GameStatus::Stopped;
        self.finish_reason = None;
        self.snake = Snake::new(
            self.field_size.center(),
            START_DIRECTION,
            self.field_size.max_x(),
            self.field_size.max_y(),
        );
        self.walls.init(Vec::new());

        let food_point = sample_point(rng, &self.field_size, &self.food_exclusions())?;
        self.food.set_coordinates(food_point);
        self.score = 0;

        let wall_points = sample_points(rng, &self.field_size, self.walls_count, &self.wall_exclusions())?;
        self.walls.init(wall_points);
        Ok(())
    }

    /// Evaluates one step. Collisions and the win check happen before the
    /// snake moves, so a finishing tick never commits the step.
    pub fn tick(&mut self, rng: &mut SessionRng) -> Result<TickOutcome, String> {
        let next_head = self.snake.next_step_head_point();

        if self.snake.is_body_point(next_head) {
            return Ok(TickOutcome::Finished(FinishReason::SelfCollision));
        }
        if self.walls.is_wall_point(next_head) {
            return Ok(TickOutcome::Finished(FinishReason::WallCollision));
        }

        let mut outcome = TickOutcome::Moved;
        if self.food.is_food_point(next_head) {
            // The food still sits on `next_head`, so the exclusions already
            // cover the grown body. Nothing changes if sampling fails.
            let food_point = sample_point(rng, &self.field_size, &self.food_exclusions())?;

            self.snake.increment_body();
            self.score += 1;
            self.food.set_coordinates(food_point);
            log!("Food eaten at {}. Score: {}", next_head, self.score);

            if self.is_won() {
                return Ok(TickOutcome::Finished(FinishReason::Won));
            }
            outcome = TickOutcome::Ate;
        }

        self.snake.make_step();
        Ok(outcome)
    }

    /// Moves one random wall to a free cell outside the zone around the head.
    pub fn relocate_wall(&mut self, rng: &mut SessionRng) -> Result<Option<Point>, String> {
        if self.walls.points().is_empty() {
            return Ok(None);
        }
        let new_position = sample_point(rng, &self.field_size, &self.wall_exclusions())?;
        let old_position = self.walls.change_random_wall_position(new_position, rng);
        if let Some(old_position) = old_position {
            log!("Wall moved from {} to {}", old_position, new_position);
        }
        Ok(Some(new_position))
    }

    pub fn can_set_direction(&self, direction: Direction) -> bool {
        !direction.is_opposite(&self.snake.last_step_direction())
    }

    pub fn try_set_direction(&mut self, direction: Direction) -> bool {
        if !self.can_set_direction(direction) {
            return false;
        }
        self.snake.set_direction(direction);
        true
    }

    pub fn is_won(&self) -> bool {
        self.snake.len() > self.win_length
    }

    pub fn set_playing(&mut self) {
        self.status = GameStatus::Playing;
    }

    pub fn set_stopped(&mut self) {
        self.status = GameStatus::Stopped;
    }

    pub fn finish(&mut self, reason: FinishReason) {
        self.status = GameStatus::Finished;
        self.finish_reason = Some(reason);
    }

    pub fn disabled_wall_cells(&self) -> Vec<Point> {
        disabled_wall_cells(self.snake.head_point(), &self.field_size)
    }

    fn food_exclusions(&self) -> Vec<Point> {
        let mut exclude: Vec<Point> = self.snake.body().iter().copied().collect();
        exclude.extend_from_slice(self.walls.points());
        exclude.push(self.food.coordinates());
        exclude
    }

    fn wall_exclusions(&self) -> Vec<Point> {
        let mut exclude = self.food_exclusions();
        exclude.extend(self.disabled_wall_cells());
        exclude
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, point: Point) {
        self.food.set_coordinates(point);
    }

    #[cfg(test)]
    pub(crate) fn set_walls(&mut self, points: Vec<Point>) {
        self.walls.init(points);
    }
}
