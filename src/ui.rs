//! Screen layout
//!
//! Positions are fractions of the screen so the layout holds at any
//! resolution.

use glam::Vec2;

use crate::renderer::{Background, Frame, SpriteId, TextSize, colors};
use crate::sim::{GameMode, GameState, ObstacleKind, PlayerPose, Rect};

pub const TITLE: &str = "Pixel Runner";
pub const PROMPT: &str = "Press SPACE to run";
pub const RANKING_TITLE: &str = "Top Scores";

/// Horizontal center of the leaderboard column
const RANKING_X: f32 = 0.85;

/// Build the frame for the current state
pub fn layout(state: &GameState) -> Frame {
    match state.mode {
        GameMode::Playing => playfield(state),
        GameMode::Menu => menu(state),
    }
}

fn playfield(state: &GameState) -> Frame {
    let world = &state.world;
    let mut frame = Frame::new(
        Vec2::new(world.width, world.height),
        Background::Playfield {
            ground_y: world.ground_y as i32,
        },
    );

    frame.text(
        format!("Score: {}", state.score),
        TextSize::Medium,
        colors::SCORE,
        Vec2::new(world.width / 2.0, world.height * 0.1),
    );

    let player_sprite = match state.player.pose {
        PlayerPose::Walk(i) => SpriteId::PlayerWalk(i),
        PlayerPose::Jump => SpriteId::PlayerJump,
    };
    frame.sprite(player_sprite, state.player.rect());

    for obstacle in &state.obstacles {
        let frame_index = obstacle.anim.frame();
        let sprite = match obstacle.kind {
            ObstacleKind::Flyer => SpriteId::Flyer(frame_index),
            ObstacleKind::Crawler => SpriteId::Crawler(frame_index),
        };
        frame.sprite(sprite, obstacle.rect());
    }

    frame
}

fn menu(state: &GameState) -> Frame {
    let world = &state.world;
    let (w, h) = (world.width, world.height);
    let mut frame = Frame::new(Vec2::new(w, h), Background::Solid(colors::MENU_BACKGROUND));

    if state.is_splash() {
        frame.sprite(
            SpriteId::PlayerStand,
            Rect::from_center(Vec2::new(w / 2.0, h / 2.0), world.player_stand_size),
        );
        frame.text(TITLE, TextSize::Large, colors::TITLE, Vec2::new(w / 2.0, h * 0.3));
    } else {
        frame.text(
            format!("Your score: {}", state.score),
            TextSize::Large,
            colors::TITLE,
            Vec2::new(w / 2.0, h * 0.3),
        );
    }

    let ranking_x = w * RANKING_X;
    frame.text(
        RANKING_TITLE,
        TextSize::Medium,
        colors::RANKING_TITLE,
        Vec2::new(ranking_x, h * 0.4),
    );
    let row_height = world.font_small * 1.3;
    for (i, score) in state.leaderboard.scores().iter().enumerate() {
        let color = if i == 0 && *score > 0 {
            colors::GOLD
        } else {
            colors::TITLE
        };
        frame.text(
            format!("{}.   {}", i + 1, score),
            TextSize::Small,
            color,
            Vec2::new(ranking_x, h * 0.5 + i as f32 * row_height),
        );
    }

    frame.text(PROMPT, TextSize::Medium, colors::TITLE, Vec2::new(w / 2.0, h * 0.85));
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::Leaderboard;
    use crate::settings::World;

    #[test]
    fn test_splash_layout() {
        let state = GameState::new(World::default(), Leaderboard::new(), 1);
        let frame = layout(&state);
        assert!(frame.find_text(TITLE).is_some());
        assert!(frame.find_text(PROMPT).is_some());
        assert_eq!(frame.sprites[0].sprite, SpriteId::PlayerStand);
        // One row per leaderboard slot
        let rows = frame.texts.iter().filter(|t| t.size == TextSize::Small).count();
        assert_eq!(rows, 5);
    }

    #[test]
    fn test_score_screen_layout() {
        let mut state = GameState::new(
            World::default(),
            Leaderboard::from_scores(vec![9, 4]),
            1,
        );
        state.score = 4;
        let frame = layout(&state);
        assert!(frame.find_text(TITLE).is_none());
        assert!(frame.find_text("Your score: 4").is_some());
        assert_eq!(frame.find_text("1.   9").map(|t| t.color), Some(colors::GOLD));
        assert_eq!(frame.find_text("2.   4").map(|t| t.color), Some(colors::TITLE));
        assert!(frame.sprites.is_empty());
    }

    #[test]
    fn test_playfield_layout() {
        let mut state = GameState::new(World::default(), Leaderboard::new(), 1);
        state.start_run(0.0);
        let world = state.world.clone();
        state
            .obstacles
            .push(crate::sim::Obstacle::new(ObstacleKind::Flyer, 900.0, &world));

        let frame = layout(&state);
        assert!(frame.find_text("Score: 0").is_some());
        assert_eq!(frame.sprites.len(), 2);
        assert_eq!(frame.sprites[0].sprite, SpriteId::PlayerWalk(0));
        assert_eq!(frame.sprites[1].sprite, SpriteId::Flyer(0));
        assert_eq!(
            frame.background,
            Background::Playfield { ground_y: 540 }
        );
    }
}
