//! Rendering collaborator
//!
//! The game describes each frame as a list of sprites and text items in
//! screen coordinates; a [`Renderer`] decides how to draw them.

use glam::Vec2;

use crate::sim::Rect;

/// RGB color
pub type Rgb = [u8; 3];

/// Colors for game elements
pub mod colors {
    use super::Rgb;

    pub const SKY: Rgb = [135, 206, 235];
    pub const GROUND: Rgb = [120, 84, 52];
    pub const MENU_BACKGROUND: Rgb = [94, 129, 162];
    pub const SCORE: Rgb = [64, 64, 64];
    pub const TITLE: Rgb = [111, 196, 169];
    pub const RANKING_TITLE: Rgb = [0, 0, 0];
    pub const GOLD: Rgb = [255, 215, 0];
    pub const WHITE: Rgb = [255, 255, 255];
}

/// Opaque sprite handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    PlayerWalk(usize),
    PlayerJump,
    PlayerStand,
    Flyer(usize),
    Crawler(usize),
}

/// Font size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Large,
    Medium,
    Small,
}

/// Full-screen backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    /// Sky above, ground from `ground_y` down
    Playfield { ground_y: i32 },
    /// Flat menu color
    Solid(Rgb),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    pub sprite: SpriteId,
    pub rect: Rect,
}

/// Text centered on a point
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub size: TextSize,
    pub color: Rgb,
    pub center: Vec2,
}

/// One frame's worth of drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Logical screen size the coordinates refer to
    pub screen: Vec2,
    pub background: Background,
    pub sprites: Vec<SpriteDraw>,
    pub texts: Vec<TextDraw>,
}

impl Frame {
    pub fn new(screen: Vec2, background: Background) -> Self {
        Self {
            screen,
            background,
            sprites: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn sprite(&mut self, sprite: SpriteId, rect: Rect) {
        self.sprites.push(SpriteDraw { sprite, rect });
    }

    pub fn text(&mut self, text: impl Into<String>, size: TextSize, color: Rgb, center: Vec2) {
        self.texts.push(TextDraw {
            text: text.into(),
            size,
            color,
            center,
        });
    }

    /// Find a text item by exact content
    pub fn find_text(&self, text: &str) -> Option<&TextDraw> {
        self.texts.iter().find(|t| t.text == text)
    }
}

/// Draws frames
pub trait Renderer {
    fn render(&mut self, frame: &Frame) -> std::io::Result<()>;
}

/// Discards frames, for headless runs
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame) -> std::io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
