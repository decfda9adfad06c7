use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::constants::{
    background::LAYER_ASPECTS,
    game::{self, classic, scaled},
};

/// Which build of the game the loop imitates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fixed 1400x720 world, keyboard driven.
    #[default]
    Classic,
    /// World sized after the screen, tap (click) driven.
    Scaled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Cue {
    Jump(usize),
    GameOver,
}

impl Cue {
    /// Name of the sound the cue stands for.
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Jump(index) => game::JUMP_CUES.get(*index).copied().unwrap_or("jump"),
            Cue::GameOver => "gameover",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Waiting,
    Playing,
    Over,
}

/// Axis-aligned rectangle in world units, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Edges that merely touch do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Every number the loop needs, resolved for one variant and world size.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    pub variant: Variant,
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub bird_start: (f32, f32),
    pub bird_size: (f32, f32),
    pub hitbox_scale: f32,
    pub pipe_count: usize,
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    pub pipe_spacing: f32,
    pub initial_gap: (i32, i32),
    pub recycled_gap: (i32, i32),
    pub parallax_speeds: [f32; 3],
    pub parallax_periods: [f32; 3],
    pub restart_button: Option<Bounds>,
}

impl Tuning {
    /// Resolve the tuning for a canvas of `cols` x `rows` terminal cells.
    pub fn for_canvas(variant: Variant, cols: u16, rows: u16) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Scaled => {
                Self::scaled(cols.max(1) as f32 * scaled::CELL_WIDTH, rows.max(1) as f32 * scaled::CELL_HEIGHT)
            },
        }
    }

    pub fn classic() -> Self {
        let (width, height) = (classic::WIDTH, classic::HEIGHT);
        let gap = classic::PIPE_GAP;
        Self {
            variant: Variant::Classic,
            width,
            height,
            gravity: game::GRAVITY,
            jump_velocity: classic::JUMP_VELOCITY,
            bird_start: (width / 2.0, height / 2.0 - classic::BIRD_LIFT),
            bird_size: (game::BIRD_SPRITE_WIDTH, game::BIRD_SPRITE_HEIGHT),
            hitbox_scale: classic::HITBOX_SCALE,
            pipe_count: classic::PIPE_COUNT,
            pipe_width: classic::PIPE_WIDTH,
            pipe_gap: gap,
            pipe_speed: classic::PIPE_SPEED,
            pipe_spacing: classic::PIPE_SPACING,
            initial_gap: (gap as i32, (height - gap) as i32),
            recycled_gap: (
                (gap / 2.0 + classic::RECYCLE_MARGIN) as i32,
                (height - gap / 2.0 - classic::RECYCLE_MARGIN) as i32,
            ),
            parallax_speeds: game::PARALLAX_SPEEDS,
            parallax_periods: LAYER_ASPECTS.map(|aspect| height * aspect),
            restart_button: None,
        }
    }

    pub fn scaled(width: f32, height: f32) -> Self {
        let bird_scale = (width / scaled::REFERENCE_WIDTH).clamp(scaled::BIRD_SCALE_MIN, scaled::BIRD_SCALE_MAX);
        let pipe_width = (width * scaled::PIPE_WIDTH_RATIO).clamp(scaled::PIPE_WIDTH_MIN, scaled::PIPE_WIDTH_MAX);
        let gap = height * scaled::PIPE_GAP_RATIO;
        let spacing = width * scaled::PIPE_SPACING_RATIO;
        let speed = width * scaled::PIPE_SPEED_RATIO;
        let pipe_count =
            (((width * 2.0) / spacing) as usize + 2).clamp(scaled::PIPE_COUNT_MIN, scaled::PIPE_COUNT_MAX);
        let gap_range = ((gap * scaled::GAP_MARGIN_RATIO) as i32, (height - gap * scaled::GAP_MARGIN_RATIO) as i32);
        let scroll_factor = speed / width;
        let button_width = width * scaled::RESTART_WIDTH_RATIO;

        Self {
            variant: Variant::Scaled,
            width,
            height,
            gravity: game::GRAVITY,
            jump_velocity: scaled::JUMP_VELOCITY,
            bird_start: (width * scaled::BIRD_X_RATIO, height * scaled::BIRD_Y_RATIO),
            bird_size: (game::BIRD_SPRITE_WIDTH * bird_scale, game::BIRD_SPRITE_HEIGHT * bird_scale),
            hitbox_scale: scaled::HITBOX_SCALE,
            pipe_count,
            pipe_width,
            pipe_gap: gap,
            pipe_speed: speed,
            pipe_spacing: spacing,
            initial_gap: gap_range,
            recycled_gap: gap_range,
            parallax_speeds: game::PARALLAX_SPEEDS.map(|speed| speed * scroll_factor),
            parallax_periods: LAYER_ASPECTS.map(|aspect| height * aspect),
            restart_button: Some(Bounds::new(
                width / 2.0 - button_width / 2.0,
                height * scaled::RESTART_Y_RATIO,
                button_width,
                height * scaled::RESTART_HEIGHT_RATIO,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub x: f32,
    /// Centre of the opening.
    pub gap_y: f32,
    pub scored: bool,
}

#[derive(Debug, Clone)]
pub struct World {
    tuning: Tuning,
    bird_x: f32,
    bird_y: f32,
    velocity: f32,
    pipes: Vec<Pipe>,
    score: u32,
    parallax: [f32; 3],
    color_timer: f32,
    phase: Phase,
    game_over_cued: bool,
}

fn sample_gap<R: Rng>(rng: &mut R, (low, high): (i32, i32)) -> f32 {
    let (low, high) = if low <= high { (low, high) } else { (high, low) };
    rng.gen_range(low..=high) as f32
}

impl World {
    pub fn new<R: Rng>(tuning: Tuning, rng: &mut R) -> Self {
        let mut world = Self {
            bird_x: tuning.bird_start.0,
            bird_y: tuning.bird_start.1,
            velocity: 0.0,
            pipes: Vec::with_capacity(tuning.pipe_count),
            score: 0,
            parallax: [0.0; 3],
            color_timer: 0.0,
            phase: Phase::Waiting,
            game_over_cued: false,
            tuning,
        };
        world.reset_pipes(rng);
        world
    }

    fn reset_pipes<R: Rng>(&mut self, rng: &mut R) {
        let tuning = &self.tuning;
        self.pipes = (0..tuning.pipe_count)
            .map(|i| Pipe {
                x: tuning.width + i as f32 * tuning.pipe_spacing,
                gap_y: sample_gap(rng, tuning.initial_gap),
                scored: false,
            })
            .collect();
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Waiting
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn parallax(&self) -> [f32; 3] {
        self.parallax
    }

    pub fn bird(&self) -> (f32, f32) {
        (self.bird_x, self.bird_y)
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Where the sprite is drawn.
    pub fn bird_rect(&self) -> Bounds {
        let (width, height) = self.tuning.bird_size;
        Bounds::centered(self.bird_x, self.bird_y, width, height)
    }

    /// The part of the sprite that collides with pipes.
    pub fn hitbox(&self) -> Bounds {
        let (width, height) = self.tuning.bird_size;
        let scale = self.tuning.hitbox_scale;
        Bounds::centered(self.bird_x, self.bird_y, width * scale, height * scale)
    }

    pub fn top_rect(&self, pipe: &Pipe) -> Bounds {
        Bounds::new(pipe.x, 0.0, self.tuning.pipe_width, pipe.gap_y - self.tuning.pipe_gap / 2.0)
    }

    pub fn bottom_rect(&self, pipe: &Pipe) -> Bounds {
        let top = pipe.gap_y + self.tuning.pipe_gap / 2.0;
        Bounds::new(pipe.x, top, self.tuning.pipe_width, self.tuning.height - top)
    }

    /// Rainbow colour cycling with time, shared by the bird and the score.
    pub fn tint(&self) -> (u8, u8, u8) {
        let t = self.color_timer;
        let channel = |phase: f32| (127.0 + 127.0 * (t + phase).sin()) as u8;
        (channel(0.0), channel(2.0), channel(4.0))
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Vec<Cue> {
        let mut cues = Vec::new();

        if self.phase == Phase::Playing {
            self.velocity += self.tuning.gravity * dt;
            self.bird_y += self.velocity * dt;

            self.advance_pipes(dt, rng);

            let hitbox = self.hitbox();
            let mut crashed = self
                .pipes
                .iter()
                .any(|pipe| hitbox.overlaps(&self.top_rect(pipe)) || hitbox.overlaps(&self.bottom_rect(pipe)));

            for pipe in self.pipes.iter_mut() {
                if self.bird_x > pipe.x + self.tuning.pipe_width && !pipe.scored {
                    self.score += 1;
                    pipe.scored = true;
                }
            }

            let half_height = self.tuning.bird_size.1 / 2.0;
            if self.bird_y + half_height >= self.tuning.height || self.bird_y - half_height <= 0.0 {
                crashed = true;
            }

            self.scroll_parallax(dt);

            if crashed {
                self.phase = Phase::Over;
                if self.tuning.variant == Variant::Scaled && !self.game_over_cued {
                    self.game_over_cued = true;
                    cues.push(Cue::GameOver);
                }
            }
        }

        self.color_timer += game::COLOR_CYCLE_RATE * dt;
        cues
    }

    fn advance_pipes<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        for i in 0..self.pipes.len() {
            self.pipes[i].x -= self.tuning.pipe_speed * dt;
            if self.pipes[i].x + self.tuning.pipe_width > 0.0 {
                continue;
            }

            let x = match self.tuning.variant {
                Variant::Classic => self.tuning.width,
                Variant::Scaled => {
                    let rightmost = self.pipes.iter().map(|pipe| pipe.x).fold(f32::MIN, f32::max);
                    rightmost + self.tuning.pipe_spacing
                },
            };
            self.pipes[i] = Pipe { x, gap_y: sample_gap(rng, self.tuning.recycled_gap), scored: false };
        }
    }

    fn scroll_parallax(&mut self, dt: f32) {
        for ((offset, speed), period) in
            self.parallax.iter_mut().zip(self.tuning.parallax_speeds).zip(self.tuning.parallax_periods)
        {
            *offset -= speed * dt;
            if *offset <= -period {
                *offset = 0.0;
            }
        }
    }

    pub fn start(&mut self) {
        if self.phase == Phase::Waiting {
            self.phase = Phase::Playing;
        }
    }

    /// Kick the bird upwards. In the scaled build a flap also starts a waiting game.
    pub fn flap<R: Rng>(&mut self, rng: &mut R) -> Option<Cue> {
        match (self.phase, self.tuning.variant) {
            (Phase::Playing, _) => {},
            (Phase::Waiting, Variant::Scaled) => self.phase = Phase::Playing,
            _ => return None,
        }
        self.velocity = self.tuning.jump_velocity;
        Some(Cue::Jump(rng.gen_range(0..game::JUMP_CUES.len())))
    }

    /// Put everything but the colour cycle back to its starting state. Only a finished run restarts.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase != Phase::Over {
            return false;
        }
        self.phase = Phase::Waiting;
        self.game_over_cued = false;
        self.bird_x = self.tuning.bird_start.0;
        self.bird_y = self.tuning.bird_start.1;
        self.velocity = 0.0;
        self.score = 0;
        self.parallax = [0.0; 3];
        self.reset_pipes(rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-3, "expected {expected}, got {actual}");
    }

    fn playing(tuning: Tuning) -> (World, StdRng) {
        let mut rng = rng();
        let mut world = World::new(tuning, &mut rng);
        world.start();
        (world, rng)
    }

    #[test]
    fn test_classic_layout() {
        let world = World::new(Tuning::classic(), &mut rng());

        assert_eq!(world.phase(), Phase::Waiting);
        assert_eq!(world.bird(), (700.0, 260.0));
        assert_eq!(world.pipes().len(), 5);
        for (i, pipe) in world.pipes().iter().enumerate() {
            assert_eq!(pipe.x, 1400.0 + i as f32 * 320.0);
            assert!((250.0..=470.0).contains(&pipe.gap_y));
            assert!(!pipe.scored);
        }
        assert_eq!(world.tuning().recycled_gap, (155, 565));
    }

    #[test]
    fn test_scaled_tuning() {
        let tuning = Tuning::scaled(1080.0, 1920.0);

        assert_close(tuning.bird_size.0, 64.0);
        assert_eq!(tuning.pipe_width, 200.0);
        assert_close(tuning.pipe_gap, 672.0);
        assert_close(tuning.pipe_spacing, 216.0);
        assert_close(tuning.pipe_speed, 162.0);
        assert_eq!(tuning.pipe_count, 8);
        assert_eq!(tuning.bird_start, (270.0, 960.0));
        assert_eq!(tuning.initial_gap, tuning.recycled_gap);
        assert_close(tuning.parallax_speeds[2], 30.0);

        let small = Tuning::scaled(200.0, 320.0);
        assert_close(small.bird_size.0, 32.0);
        assert_eq!(small.pipe_width, 100.0);
        assert!(small.restart_button.is_some());
    }

    #[test]
    fn test_waiting_world_is_frozen() {
        let mut rng = rng();
        let mut world = World::new(Tuning::classic(), &mut rng);
        let pipes = world.pipes().to_vec();

        let cues = world.step(0.5, &mut rng);

        assert!(cues.is_empty());
        assert_eq!(world.bird(), (700.0, 260.0));
        assert_eq!(world.pipes(), &pipes[..]);
        assert_close(world.color_timer, 2.5);
    }

    #[test]
    fn test_gravity_integration() {
        let (mut world, mut rng) = playing(Tuning::classic());

        world.step(0.1, &mut rng);

        assert_close(world.velocity(), 100.0);
        assert_close(world.bird().1, 270.0);
        assert_close(world.pipes()[0].x, 1380.0);
    }

    #[test]
    fn test_classic_flap_needs_started_game() {
        let mut rng = rng();
        let mut world = World::new(Tuning::classic(), &mut rng);

        assert_eq!(world.flap(&mut rng), None);
        assert_eq!(world.phase(), Phase::Waiting);

        world.start();
        let cue = world.flap(&mut rng);
        assert!(matches!(cue, Some(Cue::Jump(index)) if index < game::JUMP_CUES.len()));
        assert_eq!(world.velocity(), -375.0);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(Cue::Jump(0).name(), "bamba");
        assert_eq!(Cue::Jump(5).name(), "ramba");
        assert_eq!(Cue::GameOver.name(), "gameover");
    }

    #[test]
    fn test_scaled_flap_starts_game() {
        let mut rng = rng();
        let mut world = World::new(Tuning::scaled(1080.0, 1920.0), &mut rng);

        assert!(world.flap(&mut rng).is_some());
        assert_eq!(world.phase(), Phase::Playing);
        assert_eq!(world.velocity(), -385.0);
    }

    #[test]
    fn test_classic_recycles_to_right_edge() {
        let (mut world, mut rng) = playing(Tuning::classic());
        world.pipes[0] = Pipe { x: -119.0, gap_y: 300.0, scored: true };

        world.step(0.01, &mut rng);

        let pipe = world.pipes()[0];
        assert_eq!(pipe.x, 1400.0);
        assert!(!pipe.scored);
        assert!((155.0..=565.0).contains(&pipe.gap_y));
    }

    #[test]
    fn test_scaled_recycles_behind_rightmost() {
        let tuning = Tuning::scaled(1080.0, 1920.0);
        let spacing = tuning.pipe_spacing;
        let (mut world, mut rng) = playing(tuning);
        let rightmost = world.pipes().iter().map(|pipe| pipe.x).fold(f32::MIN, f32::max);
        world.pipes[0].x = -199.0;

        world.step(0.01, &mut rng);

        // Pipes after the recycled one have not moved yet this frame.
        assert_close(world.pipes()[0].x, rightmost + spacing);
        assert_eq!(world.pipes().len(), 8);
    }

    #[test]
    fn test_scores_each_pipe_once() {
        let (mut world, mut rng) = playing(Tuning::classic());
        world.pipes[0] = Pipe { x: 700.0 - 120.0 - 10.0, gap_y: 260.0, scored: false };

        world.step(0.001, &mut rng);
        world.step(0.001, &mut rng);

        assert_eq!(world.score(), 1);
        assert!(world.pipes()[0].scored);
        assert_eq!(world.phase(), Phase::Playing);
    }

    #[test]
    fn test_pipe_collision_ends_run() {
        let (mut world, mut rng) = playing(Tuning::classic());
        world.pipes[0] = Pipe { x: 640.0, gap_y: 570.0, scored: false };

        let cues = world.step(0.001, &mut rng);

        assert_eq!(world.phase(), Phase::Over);
        assert!(cues.is_empty());

        // Frozen afterwards.
        let bird = world.bird();
        world.step(0.5, &mut rng);
        assert_eq!(world.bird(), bird);
    }

    #[test]
    fn test_floor_ends_run_with_single_cue() {
        let tuning = Tuning::scaled(1080.0, 1920.0);
        let (mut world, mut rng) = playing(tuning);
        world.bird_y = 1919.0;

        let cues = world.step(0.001, &mut rng);
        assert_eq!(cues, vec![Cue::GameOver]);
        assert_eq!(world.phase(), Phase::Over);

        assert!(world.step(0.001, &mut rng).is_empty());
    }

    #[test]
    fn test_crash_frame_still_scores_and_scrolls() {
        let (mut world, mut rng) = playing(Tuning::classic());
        // Already behind the bird, so it scores this frame.
        world.pipes[1] = Pipe { x: 500.0, gap_y: 260.0, scored: false };
        // Overlaps the hitbox through its bottom obstacle.
        world.pipes[0] = Pipe { x: 640.0, gap_y: 570.0, scored: false };

        world.step(0.1, &mut rng);

        assert_eq!(world.phase(), Phase::Over);
        assert_eq!(world.score(), 1);
        assert_close(world.parallax()[0], -2.0);
        assert_close(world.parallax()[2], -20.0);
    }

    #[test]
    fn test_color_timer_survives_restart() {
        let (mut world, mut rng) = playing(Tuning::classic());
        world.bird_y = 719.0;
        world.step(0.2, &mut rng);
        assert_eq!(world.phase(), Phase::Over);
        let tint = world.tint();

        assert!(world.restart(&mut rng));

        assert_close(world.color_timer, 1.0);
        assert_eq!(world.tint(), tint);
    }

    #[test]
    fn test_scaled_restart_rearms_game_over_cue() {
        let (mut world, mut rng) = playing(Tuning::scaled(960.0, 640.0));
        let mut cues = Vec::new();

        for _ in 0..2 {
            world.start();
            for _ in 0..40 {
                cues.extend(world.step(0.1, &mut rng));
            }
            assert_eq!(world.phase(), Phase::Over);
            assert!(world.restart(&mut rng));
        }

        assert_eq!(cues, vec![Cue::GameOver, Cue::GameOver]);
    }

    #[test]
    fn test_scaled_gaps_stay_in_range() {
        let tuning = Tuning::scaled(960.0, 640.0);
        let (low, high) = (0.7 * tuning.pipe_gap, tuning.height - 0.7 * tuning.pipe_gap);
        let in_range = |gap_y: f32| gap_y >= low.floor() && gap_y <= high;
        let pipe_width = tuning.pipe_width;
        let (mut world, mut rng) = playing(tuning);
        assert!(world.pipes().iter().all(|pipe| in_range(pipe.gap_y)));

        for i in 0..200 {
            let index = i % world.pipes().len();
            world.pipes[index].x = -pipe_width - 1.0;
            world.bird_y = world.tuning().bird_start.1;
            world.velocity = 0.0;

            world.step(0.001, &mut rng);

            assert_eq!(world.phase(), Phase::Playing);
            let pipe = world.pipes()[index];
            assert!(in_range(pipe.gap_y), "gap {} outside [{low}, {high}]", pipe.gap_y);
        }
    }

    #[test]
    fn test_ceiling_ends_run() {
        let (mut world, mut rng) = playing(Tuning::classic());
        world.bird_y = 20.0;
        world.velocity = -300.0;

        world.step(0.001, &mut rng);

        assert_eq!(world.phase(), Phase::Over);
    }

    #[test]
    fn test_parallax_wraps() {
        let (mut world, mut rng) = playing(Tuning::classic());
        let period = world.tuning().parallax_periods[0];
        world.parallax[0] = -period + 0.5;

        world.step(0.1, &mut rng);

        assert_eq!(world.parallax()[0], 0.0);
        assert_close(world.parallax()[1], -10.0);
        assert_close(world.parallax()[2], -20.0);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let (mut world, mut rng) = playing(Tuning::classic());
        assert!(!world.restart(&mut rng));

        world.score = 4;
        world.parallax = [-1.0, -2.0, -3.0];
        world.bird_y = 719.0;
        world.step(0.001, &mut rng);
        assert_eq!(world.phase(), Phase::Over);

        assert!(world.restart(&mut rng));
        assert_eq!(world.phase(), Phase::Waiting);
        assert_eq!(world.score(), 0);
        assert_eq!(world.bird(), (700.0, 260.0));
        assert_eq!(world.velocity(), 0.0);
        assert_eq!(world.parallax(), [0.0; 3]);
        assert!(world.pipes().iter().enumerate().all(|(i, pipe)| pipe.x == 1400.0 + i as f32 * 320.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 10.0, 10.0);

        assert!(!a.overlaps(&Bounds::new(10.0, 0.0, 5.0, 5.0)));
        assert!(a.overlaps(&Bounds::new(9.5, 9.5, 5.0, 5.0)));
        assert!(a.contains(0.0, 0.0));
        assert!(!a.contains(10.0, 5.0));
    }

    #[test]
    fn test_tint_cycles() {
        let mut world = World::new(Tuning::classic(), &mut rng());
        assert_eq!(world.tint(), (127, 242, 30));

        world.color_timer = std::f32::consts::FRAC_PI_2;
        assert!(world.tint().0 >= 253);
    }
}
