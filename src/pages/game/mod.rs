mod sprite;
mod viewport;
mod world;

use std::{collections::HashMap, time::Instant};

use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use super::{Frame, Page, PageId};
pub use crate::pages::game::world::{Cue, Phase, Tuning, Variant, World};
use crate::{
    action::{act, Action, Command, GameAction},
    components::{background::Moonscape, multiline::MultiLine},
    config::{Config, PageKeyBindings},
    constants::game,
    pages::game::{sprite::Sprite, viewport::Viewport},
};

pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    variant: Variant,
    canvas: Rect,
    world: Option<World>,
    rng: StdRng,
    last_tick: Option<Instant>,
    bird: Sprite,
    hover: Option<(u16, u16)>,
}

impl GamePage {
    pub fn new() -> Self {
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            variant: Variant::default(),
            canvas: Rect::default(),
            world: None,
            rng: StdRng::from_entropy(),
            last_tick: None,
            bird: Sprite::new(&game::BIRD_TEXTS),
            hover: None,
        }
    }

    fn set_variant(&mut self, variant: Variant) {
        info!("Starting {variant} game");
        self.variant = variant;
        self.world = None;
        self.last_tick = None;
    }

    /// Build the world for the current canvas unless one already exists.
    fn ensure_world(&mut self, canvas: Rect) -> &mut World {
        self.canvas = canvas;
        let (variant, rng) = (self.variant, &mut self.rng);
        self.world.get_or_insert_with(|| {
            let tuning = Tuning::for_canvas(variant, canvas.width, canvas.height);
            debug!("New world {}x{} with {} pipes", tuning.width, tuning.height, tuning.pipe_count);
            World::new(tuning, rng)
        })
    }

    fn viewport(&self) -> Option<Viewport> {
        let tuning = self.world.as_ref()?.tuning();
        Some(Viewport::new(self.canvas, tuning.width, tuning.height))
    }

    fn tick(&mut self) -> Result<()> {
        let now = Instant::now();
        let dt = self.last_tick.map(|last| now.duration_since(last).as_secs_f32()).unwrap_or(0.0);
        self.last_tick = Some(now);
        self.advance(dt.min(game::MAX_FRAME_TIME))
    }

    fn advance(&mut self, dt: f32) -> Result<()> {
        let cues = match self.world.as_mut() {
            Some(world) => {
                let before = world.phase();
                let cues = world.step(dt, &mut self.rng);
                if before != Phase::Over && world.phase() == Phase::Over {
                    info!("Run over with score {}", world.score());
                }
                cues
            },
            None => Vec::new(),
        };
        for cue in cues {
            self.send_cue(cue)?;
        }
        Ok(())
    }

    fn send_cue(&self, cue: Cue) -> Result<()> {
        if let Some(action_tx) = &self.action_tx {
            action_tx.send(act!(Command::Cue(cue)))?;
        }
        Ok(())
    }

    fn flap(&mut self) -> Result<()> {
        let cue = self.world.as_mut().and_then(|world| world.flap(&mut self.rng));
        if let Some(cue) = cue {
            self.send_cue(cue)?;
        }
        Ok(())
    }

    fn restart(&mut self) {
        let Some(world) = self.world.as_mut() else {
            return;
        };
        if !world.restart(&mut self.rng) {
            return;
        }
        info!("Restarted");
        // The terminal may have been resized while the last run was on screen.
        let fresh = Tuning::for_canvas(self.variant, self.canvas.width, self.canvas.height);
        if self.variant == Variant::Scaled && (fresh.width, fresh.height) != (world.tuning().width, world.tuning().height)
        {
            self.world = None;
        }
    }

    fn restart_button_hit(&self, column: u16, row: u16) -> bool {
        let Some(world) = &self.world else {
            return false;
        };
        let (Some(button), Some(viewport)) = (world.tuning().restart_button, self.viewport()) else {
            return false;
        };
        world.phase() == Phase::Over
            && viewport.to_world(column, row).is_some_and(|(x, y)| button.contains(x, y))
    }

    fn draw_pipes(&self, world: &World, viewport: &Viewport, buf: &mut Buffer) {
        for pipe in world.pipes() {
            if let Some(rect) = viewport.project(&world.top_rect(pipe)) {
                fill_pipe(buf, rect, false);
            }
            if let Some(rect) = viewport.project(&world.bottom_rect(pipe)) {
                fill_pipe(buf, rect, true);
            }
        }
    }

    fn draw_game_over(&self, f: &mut Frame<'_>, area: Rect, world: &World, viewport: &Viewport, tint: Color) {
        if world.tuning().variant == Variant::Classic {
            draw_centered_line(f, area, area.height / 2, game::GAME_OVER_PROMPT, Style::default().fg(Color::Red));
            return;
        }

        f.buffer_mut().set_style(area, Style::default().bg(Color::Black).add_modifier(Modifier::DIM));

        let banner_lines: Vec<&str> = game::GAME_OVER_TEXT.lines().filter(|line| !line.is_empty()).collect();
        let banner = MultiLine::new(banner_lines).ignore_whitespace(true).pixel_mode();
        let (width, height) = (banner.width(), banner.height());
        let banner_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + (area.height / 2).saturating_sub(height + 1),
            width: width.min(area.width),
            height: height.min(area.height),
        };
        f.render_widget(banner.style(Style::default().fg(tint).add_modifier(Modifier::BOLD)), banner_area);

        let score_row = (banner_area.bottom() + 1).saturating_sub(area.y);
        draw_centered_line(f, area, score_row, &format!("Score: {}", world.score()), Style::default().fg(tint));

        let Some(button) = world.tuning().restart_button.and_then(|button| viewport.project(&button)) else {
            return;
        };
        let hovered = self.hover.is_some_and(|(column, row)| button.contains(Position::new(column, row)));
        let fill = if hovered { Color::Rgb(0x00, 0x75, 0x2c) } else { Color::Rgb(0x00, 0xe4, 0x30) };
        let mut label = Paragraph::new(Line::from(game::RESTART_LABEL).bold())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(fill));
        if button.height >= 3 {
            label = label.block(Block::bordered().border_style(Style::default().fg(Color::White)));
        }
        f.render_widget(label, button);
    }
}

impl Default for GamePage {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_pipe(buf: &mut Buffer, rect: Rect, cap_on_top: bool) {
    let cap_row = if cap_on_top { rect.top() } else { rect.bottom().saturating_sub(1) };
    for y in rect.top()..rect.bottom() {
        let (symbol, color) =
            if y == cap_row { (game::PIPE_CAP, game::PIPE_CAP_COLOR) } else { (game::PIPE_BODY, game::PIPE_COLOR) };
        buf.set_string(rect.x, y, symbol.to_string().repeat(rect.width as usize), Style::default().fg(color));
    }
}

fn draw_centered_line(f: &mut Frame<'_>, area: Rect, row: u16, text: &str, style: Style) {
    if row >= area.height {
        return;
    }
    let line_area = Rect { y: area.y + row, height: 1, ..area };
    f.render_widget(Paragraph::new(Line::from(text).style(style)).alignment(Alignment::Center), line_area);
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        if let Some(seed) = config.game.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        if let Some(variant) = config.game.variant {
            self.variant = variant;
        }
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.hover = Some((mouse.column, mouse.row));
            },
            MouseEventKind::Down(MouseButton::Left) if self.variant == Variant::Scaled => {
                self.hover = Some((mouse.column, mouse.row));
                let over = self.world.as_ref().is_some_and(|world| world.phase() == Phase::Over);
                if !over {
                    self.flap()?;
                } else if self.restart_button_hit(mouse.column, mouse.row) {
                    self.restart();
                }
            },
            _ => {},
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action.command {
            Command::StartGame(variant) => self.set_variant(variant),
            Command::Tick => self.tick()?,
            Command::Resize(..) => {
                // A scaled field follows the terminal only before a run starts. Running
                // and finished runs keep their world and are reprojected.
                let waiting = self.world.as_ref().is_some_and(|world| world.phase() == Phase::Waiting);
                if self.variant == Variant::Scaled && waiting {
                    self.world = None;
                }
            },
            Command::Game(GameAction::Flap) => self.flap()?,
            Command::Game(GameAction::Start) => {
                if let Some(world) = self.world.as_mut() {
                    world.start();
                }
            },
            Command::Game(GameAction::Restart) => self.restart(),
            Command::Game(GameAction::Menu) => return Ok(Some(act!(Command::ShowMenu))),
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let area = area.intersection(f.area());
        if area.is_empty() {
            return Ok(());
        }
        self.ensure_world(area);
        let (Some(world), Some(viewport)) = (self.world.as_ref(), self.viewport()) else {
            return Ok(());
        };
        let tuning = world.tuning();
        let (r, g, b) = world.tint();
        let tint = Color::Rgb(r, g, b);

        f.render_widget(
            Moonscape::new(world.parallax(), tuning.parallax_periods, tuning.width / area.width as f32),
            area,
        );

        let (bird_x, bird_y) = world.bird();
        let bird_styles = [Style::default().fg(tint).add_modifier(Modifier::BOLD), Style::default().fg(Color::White)];
        self.bird.render_centered(viewport.to_cell(bird_x, bird_y), area, f.buffer_mut(), &bird_styles);

        if !world.started() {
            let prompt = match tuning.variant {
                Variant::Classic => game::START_PROMPT_CLASSIC,
                Variant::Scaled => game::START_PROMPT_SCALED,
            };
            draw_centered_line(f, area, area.height / 2, prompt, Style::default().fg(Color::White));
            return Ok(());
        }

        self.draw_pipes(world, &viewport, f.buffer_mut());

        let over = world.phase() == Phase::Over;
        if over {
            self.draw_game_over(f, area, world, &viewport, tint);
        }
        if !(over && tuning.variant == Variant::Scaled) {
            draw_centered_line(f, area, 1, &world.score().to_string(), Style::default().fg(tint).bold());
        }

        Ok(())
    }
}
