use ratatui::style::Color;

pub const GRAVITY: f32 = 1000.0;

/// Unscaled size of the bird sprite in world units.
pub const BIRD_SPRITE_WIDTH: f32 = 64.0;
pub const BIRD_SPRITE_HEIGHT: f32 = 48.0;

/// Radians per second of the bird's rainbow tint.
pub const COLOR_CYCLE_RATE: f32 = 5.0;

/// A long stall (suspend, debugger) must not tunnel the bird through a pipe.
pub const MAX_FRAME_TIME: f32 = 0.1;

pub const PARALLAX_SPEEDS: [f32; 3] = [20.0, 100.0, 200.0];

pub const JUMP_CUES: [&str; 6] = ["bamba", "bumba", "dumba", "humba", "kamba", "ramba"];

pub mod classic {
    pub const WIDTH: f32 = 1400.0;
    pub const HEIGHT: f32 = 720.0;
    pub const JUMP_VELOCITY: f32 = -375.0;
    pub const PIPE_COUNT: usize = 5;
    pub const PIPE_WIDTH: f32 = 120.0;
    pub const PIPE_GAP: f32 = 250.0;
    pub const PIPE_SPEED: f32 = 200.0;
    pub const PIPE_SPACING: f32 = 320.0;
    pub const RECYCLE_MARGIN: f32 = 30.0;
    pub const BIRD_LIFT: f32 = 100.0;
    pub const HITBOX_SCALE: f32 = 0.3;
}

pub mod scaled {
    /// World units covered by one terminal cell.
    pub const CELL_WIDTH: f32 = 8.0;
    pub const CELL_HEIGHT: f32 = 16.0;

    pub const JUMP_VELOCITY: f32 = -385.0;
    pub const REFERENCE_WIDTH: f32 = 1080.0;
    pub const BIRD_SCALE_MIN: f32 = 0.5;
    pub const BIRD_SCALE_MAX: f32 = 1.2;
    pub const BIRD_X_RATIO: f32 = 0.25;
    pub const BIRD_Y_RATIO: f32 = 0.5;
    pub const HITBOX_SCALE: f32 = 0.65;

    pub const PIPE_WIDTH_RATIO: f32 = 0.30;
    pub const PIPE_WIDTH_MIN: f32 = 100.0;
    pub const PIPE_WIDTH_MAX: f32 = 200.0;
    pub const PIPE_GAP_RATIO: f32 = 0.35;
    pub const PIPE_SPACING_RATIO: f32 = 0.20;
    pub const PIPE_SPEED_RATIO: f32 = 0.15;
    pub const PIPE_COUNT_MIN: usize = 3;
    pub const PIPE_COUNT_MAX: usize = 8;
    pub const GAP_MARGIN_RATIO: f32 = 0.7;

    pub const RESTART_WIDTH_RATIO: f32 = 0.4;
    pub const RESTART_HEIGHT_RATIO: f32 = 0.08;
    pub const RESTART_Y_RATIO: f32 = 0.65;
}

pub const BIRD_TEXTS: [&str; 2] = [
    r#"
 ,_,
(   )>
 /_\
"#,
    r#"
 
  o
 
"#,
];

pub const PIPE_COLOR: Color = Color::LightGreen;
pub const PIPE_CAP_COLOR: Color = Color::Green;
pub const PIPE_BODY: char = '|';
pub const PIPE_CAP: char = '█';

pub const START_PROMPT_CLASSIC: &str = "Press ENTER to START";
pub const START_PROMPT_SCALED: &str = "Tap to START";
pub const GAME_OVER_PROMPT: &str = "GAME OVER! Press R to Restart";
pub const RESTART_LABEL: &str = "RESTART";

pub const GAME_OVER_TEXT: &str = r#"
  ___   _   __  __  ___    _____   _____ ___
 / __| /_\ |  \/  || __|  / _ \ \ / / __| _ \
| (_ |/ _ \| |\/| || _|  | (_) \ V /| _||   /
 \___/_/ \_\_|  |_||___|  \___/ \_/ |___|_|_\
"#;
