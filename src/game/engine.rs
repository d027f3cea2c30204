use super::{
    action::Direction,
    autopilot,
    config::{GameConfig, MAX_SPEED_FACTOR, MIN_SPEED_FACTOR, SPEED_FACTOR_STEP},
    food::{FoodKind, FoodSlots},
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

/// Fewest frames that may separate two steps, whatever the score or speed factor
const MIN_STEP_FRAMES: i64 = 2;
/// Points needed to take one frame off the step threshold
const SCORE_PER_SPEEDUP: u32 = 10;

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Kind of food the snake ate this step, if any
    pub eaten: Option<FoodKind>,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
///
/// The engine holds configuration and randomness only; every piece of
/// world state lives in the [`GameState`] passed to each operation.
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            Position::new(0, 0, self.config.elevation),
            Direction::Right,
            self.config.initial_snake_length,
            self.config.cell,
        );

        let mut state = GameState::new(snake, FoodSlots::default(), self.config.grid_length);
        state.controls.speed_factor = self.config.speed_factor;

        self.spawn_food(&mut state, FoodKind::Normal);
        if let Some(extra) = FoodKind::from_opening_roll(self.rng.gen::<f64>()) {
            self.spawn_food(&mut state, extra);
        }

        state
    }

    /// Start a new game in place, keeping the player's speed and cheat settings
    pub fn restart(&mut self, state: &mut GameState) {
        let controls = state.controls;
        *state = self.reset();
        state.controls = controls;
        info!(speed_factor = controls.speed_factor, "game restarted");
    }

    /// Queue a turn given as a raw step vector.
    ///
    /// Returns false, leaving the queue untouched, unless the vector is one
    /// of the four cardinal steps of exactly one cell.
    pub fn queue_turn(&self, state: &mut GameState, dx: i32, dy: i32) -> bool {
        match Direction::from_delta(dx, dy, self.config.cell) {
            Some(direction) => {
                self.queue_direction(state, direction);
                true
            }
            None => {
                debug!(dx, dy, "ignoring non-cardinal turn request");
                false
            }
        }
    }

    /// Queue a turn for the next step, replacing any turn already queued
    pub fn queue_direction(&self, state: &mut GameState, direction: Direction) {
        state.pending_turn = Some(direction);
    }

    /// Advance the frame counter; performs one step when the threshold is reached
    pub fn tick(&mut self, state: &mut GameState) -> Option<StepResult> {
        if state.game_over {
            return None;
        }

        if state.controls.cheat_mode {
            if let Some(direction) = autopilot::steer(state) {
                state.pending_turn = Some(direction);
            }
        }

        state.frame_counter += 1;
        if state.frame_counter >= self.speed_frames(state) {
            state.frame_counter = 0;
            Some(self.step(state))
        } else {
            None
        }
    }

    /// Execute one step of the game
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.game_over {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    eaten: None,
                    collision_type: None,
                },
            };
        }

        self.apply_pending_turn(state);

        let new_head = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction, self.config.cell);

        if let Some(collision_type) = self.check_collision(state, new_head) {
            state.game_over = true;
            state.collision = Some(collision_type);
            state.steps += 1;
            info!(
                score = state.score,
                length = state.snake.len(),
                ?collision_type,
                "game over"
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    eaten: None,
                    collision_type: Some(collision_type),
                },
            };
        }

        state.snake.push_head(new_head);

        let eaten = state.food.kind_at(new_head);
        let min_len = self.config.min_snake_length;

        match eaten {
            Some(FoodKind::Normal) => {
                state.score += FoodKind::Normal.points();
                state.food.clear(FoodKind::Normal);
                self.respawn_draw(state);
            }
            Some(FoodKind::Special) => {
                state.score += FoodKind::Special.points();
                state.food.clear(FoodKind::Special);
                self.respawn_draw(state);
                state.snake.drop_tail();
            }
            Some(FoodKind::Shrink) => {
                state.snake.release_tail(min_len);
                state.snake.release_tail(min_len);
                state.food.clear(FoodKind::Shrink);
                self.respawn_draw(state);
                state.snake.release_tail(min_len);
            }
            None => state.snake.drop_tail(),
        }

        if let Some(kind) = eaten {
            debug!(
                ?kind,
                score = state.score,
                length = state.snake.len(),
                "food eaten"
            );
        }

        state.steps += 1;

        StepResult {
            terminated: false,
            info: StepInfo {
                eaten,
                collision_type: None,
            },
        }
    }

    /// Frames that must elapse between two steps at the current score
    pub fn speed_frames(&self, state: &GameState) -> u32 {
        let base = i64::from(self.config.step_frames) - i64::from(state.score / SCORE_PER_SPEEDUP);
        let scaled = (base as f64 * f64::from(state.controls.speed_factor)).floor() as i64;
        u32::try_from(scaled.max(MIN_STEP_FRAMES)).unwrap_or(u32::MAX)
    }

    /// Lower the speed factor (faster play); returns the new factor
    pub fn increase_speed(&self, state: &mut GameState) -> f32 {
        let factor = (state.controls.speed_factor - SPEED_FACTOR_STEP).max(MIN_SPEED_FACTOR);
        state.controls.speed_factor = factor;
        info!(speed_factor = factor, "speed increased");
        factor
    }

    /// Raise the speed factor (slower play); returns the new factor
    pub fn decrease_speed(&self, state: &mut GameState) -> f32 {
        let factor = (state.controls.speed_factor + SPEED_FACTOR_STEP).min(MAX_SPEED_FACTOR);
        state.controls.speed_factor = factor;
        info!(speed_factor = factor, "speed decreased");
        factor
    }

    /// Flip cheat mode; returns whether it is now enabled
    pub fn toggle_cheat(&self, state: &mut GameState) -> bool {
        state.controls.cheat_mode = !state.controls.cheat_mode;
        info!(enabled = state.controls.cheat_mode, "cheat mode toggled");
        state.controls.cheat_mode
    }

    /// Adopt the queued turn unless it points the head back into the neck
    fn apply_pending_turn(&self, state: &mut GameState) {
        let Some(turn) = state.pending_turn.take() else {
            return;
        };

        if state.snake.len() > 1 {
            let target = state
                .snake
                .head()
                .moved_in_direction(turn, self.config.cell);
            if state.snake.neck().is_some_and(|neck| neck.same_cell(&target)) {
                return;
            }
        }

        state.snake.direction = turn;
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        // Check wall collision
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // Check self-collision
        if state.snake.collides_with_body(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Weighted choice of which slot to fill after a consumption
    fn respawn_draw(&mut self, state: &mut GameState) {
        let kind = FoodKind::from_respawn_roll(self.rng.gen::<f64>());
        self.spawn_food(state, kind);
    }

    fn spawn_food(&mut self, state: &mut GameState, kind: FoodKind) {
        let pos = self.spawn_food_avoid_snake(state, kind);
        debug!(?kind, x = pos.x, y = pos.y, "food spawned");
        state.food.set(kind, pos);
    }

    /// Pick a random spawn cell clear of the snake's neighbourhood.
    ///
    /// Retries without bound: the board must stay large enough relative to
    /// the snake for a free cell to exist.
    fn spawn_food_avoid_snake(&mut self, state: &GameState, kind: FoodKind) -> Position {
        let cell = self.config.cell;
        let extent = self.config.spawn_extent() / cell;

        loop {
            let x = self.rng.gen_range(-extent..=extent) * cell;
            let y = self.rng.gen_range(-extent..=extent) * cell;
            let pos = Position::new(x, y, self.config.elevation);

            let near_snake = state.snake.body.iter().any(|seg| seg.is_near(&pos, cell));
            let on_other_food = state
                .food
                .items()
                .iter()
                .any(|item| item.kind != kind && item.position.same_cell(&pos));

            if !near_snake && !on_other_food {
                return pos;
            }
        }
    }
}
