use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameEngine, GameState, InputEvent, Snapshot};
use crate::input::{InputHandler, ViewMode};
use crate::metrics::GameMetrics;
use crate::render::{Hud, Renderer, SnakePalette};

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    palette: SnakePalette,
    input_handler: InputHandler,
    view: ViewMode,
    should_quit: bool,
}

impl HumanMode {
    pub fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        let renderer = Renderer::new(engine.config());

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            palette: SnakePalette::new(),
            input_handler: InputHandler::new(),
            view: ViewMode::default(),
            should_quit: false,
        }
    }

    /// Start with cheat mode already on
    pub fn enable_cheat(&mut self) {
        if !self.state.controls.cheat_mode {
            self.engine.toggle_cheat(&mut self.state);
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!("interactive session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(summary = %self.metrics.format_summary(), "interactive session ended");

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One engine tick per frame; steps fire every few frames
        let frame_interval = Duration::from_millis(self.engine.config().frame_interval_ms.max(1));
        let mut frame_timer = interval(frame_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = frame_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    if !self.state.game_over {
                        self.metrics.update();
                    }
                    let snapshot = Snapshot::from(&self.state);
                    let hud = self.hud();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &hud, &self.palette, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(input) = self.input_handler.handle_key_event(key) {
                self.handle_input(input);
            }
        }
    }

    fn handle_input(&mut self, input: InputEvent) {
        match input {
            InputEvent::TurnUp
            | InputEvent::TurnDown
            | InputEvent::TurnLeft
            | InputEvent::TurnRight => {
                if let Some(direction) = self.view.resolve_turn(input, self.state.direction()) {
                    self.engine.queue_direction(&mut self.state, direction);
                }
            }
            InputEvent::Restart => {
                // restarting mid-game is not allowed
                if self.state.game_over {
                    self.reset_game();
                }
            }
            InputEvent::ToggleCheat => {
                self.engine.toggle_cheat(&mut self.state);
            }
            InputEvent::ToggleView => {
                self.view = self.view.toggled();
            }
            InputEvent::SpeedUp => {
                self.engine.increase_speed(&mut self.state);
            }
            InputEvent::SpeedDown => {
                self.engine.decrease_speed(&mut self.state);
            }
            InputEvent::RandomizeColors => {
                self.palette.randomize(&mut rand::thread_rng());
            }
            InputEvent::RestoreColors => {
                self.palette.restore();
            }
            InputEvent::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn update_game(&mut self) {
        let Some(result) = self.engine.tick(&mut self.state) else {
            return;
        };

        if let Some(kind) = result.info.eaten {
            self.metrics.on_food_eaten(kind);
        }

        // Track game over
        if result.info.collision_type.is_some() {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn reset_game(&mut self) {
        self.engine.restart(&mut self.state);
        self.metrics.on_game_start();
    }

    fn hud(&self) -> Hud {
        Hud {
            length: self.state.snake.len(),
            frames_per_step: self.engine.speed_frames(&self.state),
            speed_factor: self.state.controls.speed_factor,
            cheat_mode: self.state.controls.cheat_mode,
            view: self.view,
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
