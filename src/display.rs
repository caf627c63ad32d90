/// Rendering layer: all terminal I/O lives here.
///
/// `TerminalSurface` maps the engine's pixel playfield onto the terminal
/// grid and draws each sprite as a few rows of text art. No game logic is
/// performed; this module only translates draw calls into terminal commands.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use red_lost::config::GameConfig;
use red_lost::surface::{SpriteId, Surface, TextStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGreen;
const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::Red;
const C_ENEMY: Color = Color::Grey;
const C_ARROW: Color = Color::Yellow;
const C_BOW: Color = Color::DarkYellow;
const C_HINT: Color = Color::DarkGrey;

// ── Sprite art ────────────────────────────────────────────────────────────────

const ART_ENEMY: &[&str] = &["/\\_/\\", "(o o)", " \\v/ "];
const ART_PLAYER: &[&str] = &[" .^. ", " (o)>", " /#\\ ", "  ll "];
const ART_PLAYER_FLIPPED: &[&str] = &[" .^. ", "<(o) ", " /#\\ ", " ll  "];
const ART_ARROW: &[&str] = &["  ^  ", "  |  ", "  |  "];
const ART_BOW: &[&str] = &[" )   ", " )-->", " )   "];

fn art(sprite: SpriteId) -> (&'static [&'static str], Color) {
    match sprite {
        SpriteId::Background => (&[], C_BORDER),
        SpriteId::Enemy => (ART_ENEMY, C_ENEMY),
        SpriteId::Player => (ART_PLAYER, C_PLAYER),
        SpriteId::PlayerFlipped => (ART_PLAYER_FLIPPED, C_PLAYER),
        SpriteId::Arrow => (ART_ARROW, C_ARROW),
        SpriteId::Bow => (ART_BOW, C_BOW),
    }
}

/// Terminal-backed drawing surface for one frame.
///
/// Layout: row 0 is the HUD, rows 1 and `height - 2` are the border bars,
/// the playfield sits between them and the last row holds the controls hint.
pub struct TerminalSurface<'w, W: Write> {
    out: &'w mut W,
    width: u16,
    height: u16,
    field_width: f64,
    field_height: f64,
}

impl<'w, W: Write> TerminalSurface<'w, W> {
    pub fn new(out: &'w mut W, width: u16, height: u16, config: &GameConfig) -> Self {
        Self {
            out,
            width,
            height,
            field_width: config.width,
            field_height: config.height,
        }
    }

    fn inner_cols(&self) -> f64 {
        self.width.saturating_sub(2).max(1) as f64
    }

    fn inner_rows(&self) -> f64 {
        self.height.saturating_sub(4).max(1) as f64
    }

    /// Terminal column for playfield x (may fall outside the border).
    fn col(&self, x: f64) -> i32 {
        1 + (x / self.field_width * self.inner_cols()).floor() as i32
    }

    /// Terminal row for playfield y (may fall outside the border).
    fn row(&self, y: f64) -> i32 {
        2 + (y / self.field_height * self.inner_rows()).floor() as i32
    }

    /// Print `text` at (col, row), dropping whatever falls outside the playfield.
    fn put_clipped(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        let top = 2;
        let bottom = self.height as i32 - 3;
        let left = 1;
        let right = self.width as i32 - 2;
        if row < top || row > bottom {
            return Ok(());
        }
        let visible: String = text
            .chars()
            .enumerate()
            .filter(|(i, _)| {
                let c = col + *i as i32;
                c >= left && c <= right
            })
            .map(|(_, ch)| ch)
            .collect();
        if visible.is_empty() {
            return Ok(());
        }
        let start = col.max(left);
        self.out.queue(cursor::MoveTo(start as u16, row as u16))?;
        self.out.queue(Print(visible))?;
        Ok(())
    }

    fn draw_background(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        let w = self.width as usize;
        let h = self.height;
        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        // Row 1: top bar
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out
            .queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        // Row h-2: bottom bar
        self.out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
        self.out
            .queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        // Side walls
        for row in 2..h.saturating_sub(2) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out
                .queue(cursor::MoveTo(self.width.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }

        self.out.queue(cursor::MoveTo(1, h.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out
            .queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
        Ok(())
    }

    /// Park the cursor and push the frame to the terminal.
    pub fn present(&mut self) -> io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out
            .queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()
    }
}

impl<W: Write> Surface for TerminalSurface<'_, W> {
    fn draw_image(&mut self, sprite: SpriteId, x: f64, y: f64) -> io::Result<()> {
        if sprite == SpriteId::Background {
            return self.draw_background();
        }
        let (lines, color) = art(sprite);
        let col = self.col(x);
        let row = self.row(y);
        self.out.queue(style::SetForegroundColor(color))?;
        for (i, line) in lines.iter().enumerate() {
            self.put_clipped(col, row + i as i32, line)?;
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, _y: f64, text_style: TextStyle) -> io::Result<()> {
        match text_style {
            TextStyle::Hud => {
                let col = self.col(x).clamp(0, self.width.saturating_sub(1) as i32) as u16;
                self.out.queue(cursor::MoveTo(col, 0))?;
                self.out.queue(style::SetForegroundColor(C_HUD))?;
                self.out.queue(style::SetAttribute(style::Attribute::Bold))?;
                self.out.queue(Print(text))?;
                self.out.queue(style::SetAttribute(style::Attribute::Reset))?;
            }
        }
        Ok(())
    }
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

pub fn draw_game_over<W: Write>(out: &mut W, width: u16, height: u16, score: u64) -> io::Result<()> {
    let score_line = format!("Your score is: {}", score);
    let lines: &[(&str, Color)] = &[
        ("╔═══════════════════════════╗", Color::Red),
        ("║ The Big Bad Wolf got Red! ║", Color::Red),
        ("╚═══════════════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()
}
