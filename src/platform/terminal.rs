//! Terminal frontend (crossterm)
//!
//! Draws frames as colored character cells and turns key presses into
//! [`InputFrame`]s. The logical screen is scaled to whatever size the
//! terminal currently has.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::style::{self, Color};
use crossterm::{cursor, execute, queue, terminal};

use super::input::{InputEvent, InputFrame, InputSource};
use crate::renderer::{Background, Frame, Renderer, Rgb, SpriteId, TextSize, colors};

/// Raw mode + alternate screen for the lifetime of the value
pub struct TerminalSession {
    key_release_events: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        )?;

        // Release events give a real "key held" state where the terminal supports it
        let key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if key_release_events {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("Terminal ready (key release events: {key_release_events})");

        Ok(Self { key_release_events })
    }

    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.key_release_events {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(
            out,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Keyboard input: Space starts/jumps, Esc or `q` quits, `x` resets scores
pub struct TerminalInput {
    /// Terminal reports releases, so `jump_down` tracks the real key state
    key_release_events: bool,
    jump_down: bool,
}

impl TerminalInput {
    pub fn new(key_release_events: bool) -> Self {
        Self {
            key_release_events,
            jump_down: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, frame: &mut InputFrame, jump_seen: &mut bool) {
        let pressed = key.kind == KeyEventKind::Press;
        match key.code {
            KeyCode::Char(' ') => match key.kind {
                KeyEventKind::Press => {
                    frame.events.push(InputEvent::Start);
                    *jump_seen = true;
                    self.jump_down = self.key_release_events;
                }
                KeyEventKind::Repeat => *jump_seen = true,
                KeyEventKind::Release => self.jump_down = false,
            },
            KeyCode::Char('c') if pressed && key.modifiers.contains(KeyModifiers::CONTROL) => {
                frame.events.push(InputEvent::Quit);
            }
            KeyCode::Esc | KeyCode::Char('q') if pressed => frame.events.push(InputEvent::Quit),
            KeyCode::Char('x') if pressed => frame.events.push(InputEvent::ResetScores),
            _ => {}
        }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> InputFrame {
        let mut frame = InputFrame::default();
        let mut jump_seen = false;

        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Input poll failed: {e}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => self.handle_key(key, &mut frame, &mut jump_seen),
                Ok(_) => {}
                Err(e) => {
                    log::warn!("Input read failed: {e}");
                    break;
                }
            }
        }

        frame.jump_held = self.jump_down || jump_seen;
        frame
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

/// Character-cell renderer
pub struct TerminalRenderer<W: Write> {
    out: W,
    cells: Vec<Cell>,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cells: Vec::new(),
            cols: 0,
            rows: 0,
        }
    }

    /// Rasterize a frame into `cols` × `rows` cells
    fn rasterize(&mut self, frame: &Frame, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        let (cols, rows) = (cols as usize, rows as usize);
        let sx = cols as f32 / frame.screen.x.max(1.0);
        let sy = rows as f32 / frame.screen.y.max(1.0);

        let blank = Cell {
            ch: ' ',
            fg: colors::WHITE,
            bg: colors::MENU_BACKGROUND,
        };
        self.cells.clear();
        self.cells.resize(cols * rows, blank);

        match frame.background {
            Background::Solid(color) => self.cells.iter_mut().for_each(|c| c.bg = color),
            Background::Playfield { ground_y } => {
                let ground_row = (ground_y as f32 * sy).round() as usize;
                for (i, cell) in self.cells.iter_mut().enumerate() {
                    cell.bg = if i / cols < ground_row {
                        colors::SKY
                    } else {
                        colors::GROUND
                    };
                }
            }
        }

        for draw in &frame.sprites {
            let (glyph, fg) = sprite_glyph(draw.sprite);
            let x0 = (draw.rect.left() * sx).floor().max(0.0) as usize;
            let x1 = ((draw.rect.right() * sx).ceil().max(0.0) as usize).min(cols);
            let y0 = (draw.rect.top() * sy).floor().max(0.0) as usize;
            let y1 = ((draw.rect.bottom() * sy).ceil().max(0.0) as usize).min(rows);
            for y in y0..y1 {
                for x in x0..x1 {
                    let cell = &mut self.cells[y * cols + x];
                    cell.ch = glyph;
                    cell.fg = fg;
                }
            }
        }

        for text in &frame.texts {
            let content = match text.size {
                TextSize::Large => text.text.to_uppercase(),
                TextSize::Medium | TextSize::Small => text.text.clone(),
            };
            let len = content.chars().count() as f32;
            let row = (text.center.y * sy).round();
            if row < 0.0 || row >= rows as f32 {
                continue;
            }
            let start = (text.center.x * sx - len / 2.0).round();
            for (i, ch) in content.chars().enumerate() {
                let x = start + i as f32;
                if x < 0.0 || x >= cols as f32 {
                    continue;
                }
                let cell = &mut self.cells[row as usize * cols + x as usize];
                cell.ch = ch;
                cell.fg = text.color;
            }
        }
    }

    fn flush_cells(&mut self) -> io::Result<()> {
        let cols = self.cols as usize;
        let mut current: Option<(Rgb, Rgb)> = None;
        for (y, row) in self.cells.chunks(cols.max(1)).enumerate() {
            queue!(self.out, cursor::MoveTo(0, y as u16))?;
            for cell in row {
                if current != Some((cell.fg, cell.bg)) {
                    queue!(
                        self.out,
                        style::SetForegroundColor(rgb(cell.fg)),
                        style::SetBackgroundColor(rgb(cell.bg))
                    )?;
                    current = Some((cell.fg, cell.bg));
                }
                queue!(self.out, style::Print(cell.ch))?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        self.rasterize(frame, cols, rows);
        self.flush_cells()
    }
}

fn rgb([r, g, b]: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn sprite_glyph(sprite: SpriteId) -> (char, Rgb) {
    const PLAYER: Rgb = [200, 60, 60];
    const FLYER: Rgb = [40, 40, 40];
    const CRAWLER: Rgb = [150, 80, 170];
    match sprite {
        SpriteId::PlayerWalk(0) | SpriteId::PlayerStand => ('M', PLAYER),
        SpriteId::PlayerWalk(_) => ('W', PLAYER),
        SpriteId::PlayerJump => ('A', PLAYER),
        SpriteId::Flyer(0) => ('v', FLYER),
        SpriteId::Flyer(_) => ('^', FLYER),
        SpriteId::Crawler(0) => ('@', CRAWLER),
        SpriteId::Crawler(_) => ('o', CRAWLER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Leaderboard;
    use crate::settings::World;
    use crate::sim::GameState;
    use crate::ui;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        let mut input = TerminalInput::new(false);
        let mut frame = InputFrame::default();
        let mut jump = false;

        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), &mut frame, &mut jump);
        input.handle_key(key(KeyCode::Char('x'), KeyEventKind::Press), &mut frame, &mut jump);
        input.handle_key(key(KeyCode::Esc, KeyEventKind::Press), &mut frame, &mut jump);

        assert!(jump);
        assert_eq!(
            frame.events,
            vec![InputEvent::Start, InputEvent::ResetScores, InputEvent::Quit]
        );
        // Without release events a press only counts for the current tick
        assert!(!input.jump_down);
    }

    #[test]
    fn test_jump_held_until_release() {
        let mut input = TerminalInput::new(true);
        let mut frame = InputFrame::default();
        let mut jump = false;

        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), &mut frame, &mut jump);
        assert!(input.jump_down);
        input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Release), &mut frame, &mut jump);
        assert!(!input.jump_down);
    }

    #[test]
    fn test_rasterize_playfield() {
        let mut state = GameState::new(World::default(), Leaderboard::new(), 1);
        state.start_run(0.0);
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.rasterize(&ui::layout(&state), 80, 24);

        assert_eq!(renderer.cells.len(), 80 * 24);
        assert!(renderer.cells.iter().any(|c| c.ch == 'M'));
        // Top row is sky, bottom row is ground
        assert_eq!(renderer.cells[0].bg, colors::SKY);
        assert_eq!(renderer.cells[80 * 23].bg, colors::GROUND);

        renderer.flush_cells().unwrap();
        assert!(!renderer.out.is_empty());
    }
}
