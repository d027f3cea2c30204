//! Headless mode: the cheat autopilot plays whole games without a terminal UI.
//!
//! Useful for watching the engine's long-run behaviour (speed scaling, food
//! mix, how the autopilot dies) from a script or CI job.

use tracing::info;

use crate::game::{CollisionType, GameEngine};
use crate::metrics::GameMetrics;

/// Configuration for autoplay mode
#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Number of games to play
    pub games: usize,
    /// A game still running after this many steps is stopped
    pub max_steps: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_steps: 5_000,
        }
    }
}

/// Outcome of a single autoplayed game
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub score: u32,
    pub length: usize,
    pub steps: u32,
    /// `None` when the game hit the step cap instead of ending
    pub collision: Option<CollisionType>,
}

pub struct AutoplayMode {
    engine: GameEngine,
    config: AutoplayConfig,
    metrics: GameMetrics,
}

impl AutoplayMode {
    pub fn new(engine: GameEngine, config: AutoplayConfig) -> Self {
        Self {
            engine,
            config,
            metrics: GameMetrics::new(),
        }
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    pub fn run(&mut self) -> Vec<GameReport> {
        (0..self.config.games)
            .map(|game| {
                let report = self.play_one();
                info!(
                    game = game + 1,
                    score = report.score,
                    length = report.length,
                    steps = report.steps,
                    collision = ?report.collision,
                    "autoplay game finished"
                );
                report
            })
            .collect()
    }

    fn play_one(&mut self) -> GameReport {
        let mut state = self.engine.reset();
        self.engine.toggle_cheat(&mut state);
        self.metrics.on_game_start();

        while !state.game_over && state.steps < self.config.max_steps {
            if let Some(result) = self.engine.tick(&mut state) {
                if let Some(kind) = result.info.eaten {
                    self.metrics.on_food_eaten(kind);
                }
            }
        }

        self.metrics.update();
        self.metrics.on_game_over(state.score);

        GameReport {
            score: state.score,
            length: state.snake.len(),
            steps: state.steps,
            collision: state.collision,
        }
    }
}

/// Human-readable table of game outcomes
pub fn format_reports(reports: &[GameReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5} {:>7} {:>7} {:>7}  {}\n",
        "game", "score", "length", "steps", "ended by"
    ));
    for (i, report) in reports.iter().enumerate() {
        let ended_by = match report.collision {
            Some(CollisionType::Wall) => "wall",
            Some(CollisionType::SelfCollision) => "self",
            None => "step cap",
        };
        out.push_str(&format!(
            "{:>5} {:>7} {:>7} {:>7}  {}\n",
            i + 1,
            report.score,
            report.length,
            report.steps,
            ended_by
        ));
    }

    if !reports.is_empty() {
        let total: u32 = reports.iter().map(|r| r.score).sum();
        out.push_str(&format!(
            "mean score: {:.2}\n",
            f64::from(total) / reports.len() as f64
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn test_autoplay_runs_requested_games() {
        let engine = GameEngine::with_seed(GameConfig::default(), 11);
        let mut mode = AutoplayMode::new(
            engine,
            AutoplayConfig {
                games: 3,
                max_steps: 300,
            },
        );

        let reports = mode.run();

        assert_eq!(reports.len(), 3);
        assert_eq!(mode.metrics().games_played, 3);
        for report in &reports {
            assert!(report.length >= 3);
            assert!(report.steps <= 300);
            if report.collision.is_none() {
                assert_eq!(report.steps, 300);
            }
        }
    }

    #[test]
    fn test_format_reports() {
        let reports = vec![
            GameReport {
                score: 6,
                length: 7,
                steps: 40,
                collision: Some(CollisionType::Wall),
            },
            GameReport {
                score: 2,
                length: 5,
                steps: 100,
                collision: None,
            },
        ];

        let table = format_reports(&reports);
        assert!(table.contains("wall"));
        assert!(table.contains("step cap"));
        assert!(table.contains("mean score: 4.00"));
    }
}
