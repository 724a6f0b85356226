//! GameView: maps `core::GameState` into a terminal frame.
//!
//! This module is pure (no I/O) and deterministic for a given state, so it
//! can be unit-tested without a terminal.

use crate::core::{GameState, Phase, Piece};
use crate::frame::{Frame, Rgb, Style};
use crate::types::{ShapeKind, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Display color for each shape.
fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb(0, 200, 220),
        ShapeKind::J => Rgb(60, 90, 230),
        ShapeKind::L => Rgb(235, 150, 30),
        ShapeKind::O => Rgb(230, 210, 30),
        ShapeKind::S => Rgb(60, 200, 80),
        ShapeKind::T => Rgb(180, 70, 210),
        ShapeKind::Z => Rgb(220, 60, 60),
    }
}

fn solid(color: Rgb) -> Style {
    Style {
        fg: color,
        bg: color,
        ..Style::PLAIN
    }
}

/// Projects game state into a frame.
pub struct GameView {
    /// Playfield cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the current game state into a frame.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let field_w = (GRID_COLS as u16) * self.cell_w;
        let field_h = GRID_ROWS as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 10) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = Style {
            fg: Rgb(80, 80, 90),
            bg: Rgb(24, 24, 32),
            ..Style::PLAIN
        };
        let border = Style {
            fg: Rgb(200, 200, 200),
            ..Style::PLAIN
        };

        frame.fill(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);
        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, with the clear flash overriding marked rows.
        let flash_on = state.phase() == Phase::Clearing && (state.clear_ticks_left() / 3) % 2 == 0;
        for y in 0..GRID_ROWS as usize {
            let flashing = flash_on && state.rows_pending_clear()[y];
            for x in 0..GRID_COLS as usize {
                let cell = state.grid().cells()[y * GRID_COLS as usize + x];
                if flashing {
                    let style = Style {
                        fg: Rgb(250, 250, 250),
                        bg: Rgb(240, 240, 240),
                        ..Style::PLAIN
                    }
                    .bold();
                    self.fill_cell(&mut frame, start_x, start_y, x as u16, y as u16, ' ', style);
                } else if let Some(kind) = cell {
                    self.draw_block(&mut frame, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        if state.phase() == Phase::Falling {
            // Ghost first so the active piece draws over it when they overlap.
            let ghost_style = Style {
                fg: Rgb(140, 140, 150),
                bg: Rgb(24, 24, 32),
                ..Style::PLAIN
            }
            .dim();
            for &(x, y) in state.ghost() {
                if (0..GRID_COLS as i8).contains(&x) && (0..GRID_ROWS as i8).contains(&y) {
                    self.fill_cell(
                        &mut frame,
                        start_x,
                        start_y,
                        x as u16,
                        y as u16,
                        '░',
                        ghost_style,
                    );
                }
            }

            self.draw_piece(&mut frame, start_x, start_y, state.active());
        }

        self.draw_next_preview(&mut frame, start_x + frame_w + 2, start_y, state.next_shape());

        if state.game_over() {
            let style = Style {
                fg: Rgb(255, 80, 80),
                ..Style::PLAIN
            }
            .bold();
            let msg = "GAME OVER";
            let mx = start_x + frame_w / 2;
            let mx = mx.saturating_sub(msg.len() as u16 / 2);
            frame.text(mx, start_y + frame_h / 2, msg, style);
        }

        frame
    }

    fn draw_piece(&self, frame: &mut Frame, ox: u16, oy: u16, piece: &Piece) {
        for &(x, y) in piece.blocks() {
            if (0..GRID_COLS as i8).contains(&x) && (0..GRID_ROWS as i8).contains(&y) {
                self.draw_block(frame, ox, oy, x as u16, y as u16, piece.kind());
            }
        }
    }

    fn draw_block(&self, frame: &mut Frame, ox: u16, oy: u16, x: u16, y: u16, kind: ShapeKind) {
        self.fill_cell(frame, ox, oy, x, y, ' ', solid(shape_color(kind)));
    }

    fn fill_cell(
        &self,
        frame: &mut Frame,
        ox: u16,
        oy: u16,
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let px = ox + 1 + x * self.cell_w;
        let py = oy + 1 + y;
        frame.fill(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }
        frame.put(x, y, '┌', style);
        frame.put(x + w - 1, y, '┐', style);
        frame.put(x, y + h - 1, '└', style);
        frame.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            frame.put(x + dx, y, '─', style);
            frame.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put(x, y + dy, '│', style);
            frame.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_next_preview(&self, frame: &mut Frame, x: u16, y: u16, kind: ShapeKind) {
        let label = Style {
            fg: Rgb(180, 180, 180),
            ..Style::PLAIN
        };
        frame.text(x, y, "NEXT", label);

        // Preview pieces are anchored at the origin of a 4x4 box.
        let preview = Piece::new(kind, (0, 0));
        let style = solid(shape_color(kind));
        for &(bx, by) in preview.blocks() {
            let px = x + (bx as u16) * self.cell_w;
            let py = y + 2 + by as u16;
            frame.fill(px, py, self.cell_w, 1, ' ', style);
        }
    }
}
