use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::palette::SnakePalette;
use crate::game::{FoodKind, GameConfig, Position, Snapshot};
use crate::input::ViewMode;
use crate::metrics::GameMetrics;

/// Host-side details shown next to the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub length: usize,
    pub frames_per_step: u32,
    pub speed_factor: f32,
    pub cheat_mode: bool,
    pub view: ViewMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Empty,
    Segment(usize),
    Food(FoodKind),
}

pub struct Renderer {
    grid_length: i32,
    cell: i32,
    cells_per_axis: usize,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_length: config.grid_length,
            cell: config.cell,
            cells_per_axis: config.cells_per_axis(),
        }
    }

    /// Terminal (column, row) of a board position; +y is drawn at the top
    fn cell_index(&self, pos: Position) -> Option<(usize, usize)> {
        let col = (pos.x + self.grid_length).div_euclid(self.cell);
        let row = (self.grid_length - self.cell - pos.y).div_euclid(self.cell);
        let n = self.cells_per_axis as i32;
        if (0..n).contains(&col) && (0..n).contains(&row) {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }

    fn layout_cells(&self, snapshot: &Snapshot) -> Vec<Vec<Cell>> {
        let n = self.cells_per_axis;
        let mut cells = vec![vec![Cell::Empty; n]; n];

        for item in &snapshot.food {
            if let Some((col, row)) = self.cell_index(item.position) {
                cells[row][col] = Cell::Food(item.kind);
            }
        }
        // tail first so the head wins any overlap
        for (index, segment) in snapshot.snake.iter().enumerate().rev() {
            if let Some((col, row)) = self.cell_index(*segment) {
                cells[row][col] = Cell::Segment(index);
            }
        }

        cells
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        hud: &Hud,
        palette: &SnakePalette,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], snapshot, hud, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if snapshot.game_over {
            let game_over = self.render_game_over(game_area, snapshot, metrics);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(game_area, snapshot, palette);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, snapshot: &Snapshot, palette: &SnakePalette) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .layout_cells(snapshot)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Cell::Segment(0) => Span::styled(
                            "■ ",
                            Style::default()
                                .fg(palette.color_for(0))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Cell::Segment(index) => {
                            Span::styled("□ ", Style::default().fg(palette.color_for(index)))
                        }
                        Cell::Food(kind) => food_span(kind),
                        Cell::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        snapshot: &Snapshot,
        hud: &Hud,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Yellow));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));

        let text = vec![Line::from(vec![
            label("Score: "),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            label("Length: "),
            value(hud.length.to_string()),
            Span::raw("    "),
            label("Speed: "),
            value(format!("{} frames/step (x{:.1})", hud.frames_per_step, hud.speed_factor)),
            Span::raw("    "),
            label("View: "),
            value(hud.view.label().to_string()),
            Span::raw("    "),
            label("Time: "),
            value(metrics.format_time()),
            Span::raw("    "),
            label("Best: "),
            value(metrics.high_score.to_string()),
            if hud.cheat_mode {
                Span::styled(
                    "    CHEAT",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("")
            },
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        _area: Rect,
        snapshot: &Snapshot,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Cyan));

        let text = vec![
            Line::from(vec![
                key("↑↓←→"),
                Span::raw(" turn | "),
                key("F"),
                Span::raw(" view | "),
                key("G"),
                Span::raw(" cheat | "),
                key("+/-"),
                Span::raw(" speed | "),
                key("C/V"),
                Span::raw(" colors | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
            Line::from(vec![
                food_span(FoodKind::Normal),
                Span::raw("grow +1  "),
                food_span(FoodKind::Shrink),
                Span::raw("release 2  "),
                food_span(FoodKind::Special),
                Span::raw("bonus +5"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn food_span(kind: FoodKind) -> Span<'static> {
    let (glyph, color) = match kind {
        FoodKind::Normal => ("O ", Color::Rgb(255, 153, 0)),
        FoodKind::Shrink => ("x ", Color::Red),
        FoodKind::Special => ("* ", Color::Yellow),
    };
    Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
}
