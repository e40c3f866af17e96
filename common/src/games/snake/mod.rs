mod controller;
mod food;
mod game_state;
mod grid;
mod placement;
mod renderer;
mod scheduler;
mod settings;
mod snake;
mod types;
mod walls;

pub use controller::SnakeController;
pub use food::Food;
pub use game_state::{SnakeGameState, TickOutcome, START_DIRECTION};
pub use grid::{wrap_coordinate, FieldSize};
pub use placement::{disabled_wall_cells, sample_point, sample_points, DISABLED_ZONE_RADIUS};
pub use renderer::{render_frame, GameRenderer, BODY_CELL, EMPTY_CELL, FOOD_CELL, HEAD_CELL, WALL_CELL};
pub use scheduler::{GameScheduler, ManualScheduler, WALL_RELOCATION_DELAY_MS};
pub use settings::{
    SnakeSettings, COLS_COUNT_RANGE, ROWS_COUNT_RANGE, SPEED_RANGE, WALLS_COUNT_RANGE,
    WIN_LENGTH_RANGE,
};
pub use snake::Snake;
pub use types::{Direction, FinishReason, GameStatus, Point};
pub use walls::Walls;
