use color_eyre::eyre::Result;
use crossterm::{event::KeyEvent, style::Print};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, error, info};

use crate::{
    action::{act, Action, Command},
    components::help::Help,
    config::{normalize_key_event, Config},
    pages::{
        game::{Cue, GamePage, Variant},
        home::HomePage,
        Page, PageId,
    },
    tui,
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    should_quit: bool,
    should_suspend: bool,
    show_help: bool,
    pages: Vec<Box<dyn Page>>,
    active_page_index: usize,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        Self::with_config(Config::new()?, tick_rate, frame_rate)
    }

    fn with_config(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        Ok(Self {
            tick_rate,
            frame_rate,
            should_quit: false,
            should_suspend: false,
            show_help: false,
            config,
            pages: vec![Box::new(HomePage::new()?), Box::new(GamePage::new())],
            active_page_index: 0,
        })
    }

    /// Command line values take precedence over the config file.
    pub fn with_overrides(mut self, variant: Option<Variant>, seed: Option<u64>) -> Self {
        if variant.is_some() {
            self.config.game.variant = variant;
        }
        if seed.is_some() {
            self.config.game.seed = seed;
        }
        self
    }

    fn get_active_page(&mut self) -> &mut Box<dyn Page> {
        &mut self.pages[self.active_page_index]
    }

    fn set_active_page(&mut self, id: PageId) {
        if let Some(index) = self.pages.iter().position(|page| page.id() == id) {
            self.active_page_index = index;
        }
    }

    /// Global bindings shadow the bindings of the active page.
    fn key_action(&self, key: KeyEvent) -> Option<Action> {
        let key = normalize_key_event(key);
        let page_id = self.pages[self.active_page_index].id();
        self.config
            .keybindings
            .global
            .get(&key)
            .or_else(|| self.config.keybindings.pages.get(&page_id).and_then(|keymap| keymap.get(&key)))
            .cloned()
    }

    fn new_tui(&self) -> Result<tui::Tui> {
        let mut tui = tui::Tui::new()?.mouse(true);
        tui.tick_rate(self.tick_rate);
        tui.frame_rate(self.frame_rate);
        Ok(tui)
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = self.new_tui()?;
        tui.enter()?;

        for page in self.pages.iter_mut() {
            page.register_keymap(&self.config.keybindings.pages)?;
        }

        for page in self.pages.iter_mut() {
            page.register_action_handler(action_tx.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.register_config_handler(self.config.clone())?;
        }

        for page in self.pages.iter_mut() {
            page.init()?;
        }

        if let Some(variant) = self.config.game.variant {
            action_tx.send(act!(Command::StartGame(variant)))?;
        }

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(act!(Command::Quit))?,
                    tui::Event::Tick => action_tx.send(act!(Command::Tick))?,
                    tui::Event::Render => action_tx.send(act!(Command::Render))?,
                    tui::Event::Resize(x, y) => action_tx.send(act!(Command::Resize(x, y)))?,
                    tui::Event::Key(key) => {
                        if let Some(action) = self.key_action(key) {
                            debug!("Got action: {action:?}");
                            action_tx.send(action)?;
                        }
                    },
                    _ => {},
                }
                if !self.show_help {
                    if let Some(action) = self.get_active_page().handle_events(Some(e))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                let command = &action.command;
                if *command != Command::Tick && *command != Command::Render {
                    debug!("{command:?}");
                }
                match command {
                    Command::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        self.render(&mut tui, &action_tx)?;
                    },
                    Command::Render => self.render(&mut tui, &action_tx)?,
                    Command::Cue(cue) => self.play(*cue)?,
                    command => self.handle_command(command),
                }
                if !self.show_help {
                    if let Some(action) = self.get_active_page().update(action)? {
                        action_tx.send(action)?
                    }
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(act!(Command::Resume))?;
                tui = self.new_tui()?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn handle_command(&mut self, command: &Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Suspend => self.should_suspend = true,
            Command::Resume => self.should_suspend = false,
            Command::ToggleShowHelp => self.show_help = !self.show_help,
            Command::StartGame(_) => self.set_active_page(PageId::Game),
            Command::ShowMenu => self.set_active_page(PageId::Home),
            Command::Error(message) => error!("{message}"),
            _ => {},
        }
    }

    fn play(&self, cue: Cue) -> Result<()> {
        info!("Cue: {}", cue.name());
        if self.config.game.bell {
            crossterm::execute!(tui::io(), Print('\x07'))?;
        }
        Ok(())
    }

    fn render(&mut self, tui: &mut tui::Tui, action_tx: &UnboundedSender<Action>) -> Result<()> {
        tui.draw(|f| {
            let area = f.area();

            let border = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().bg(Color::Black));
            f.render_widget(border, area);

            let area = area.inner(Margin { horizontal: 1, vertical: 1 });

            let page = &mut self.pages[self.active_page_index];
            if let Err(e) = page.draw(f, area) {
                report(action_tx, format!("Failed to draw: {e:?}"));
            }

            if self.show_help {
                self.draw_help(f, area);
            };
        })?;

        Ok(())
    }

    fn draw_help(&self, f: &mut Frame<'_>, rect: Rect) {
        let page_id = self.pages[self.active_page_index].id();
        let mut groups = vec![("System".to_string(), self.config.keybindings.global.clone())];
        if let Some(keymap) = self.config.keybindings.pages.get(&page_id) {
            groups.push((page_id.to_string(), keymap.clone()));
        }

        f.render_widget(Help::new(groups), rect);
    }
}

fn report(action_tx: &UnboundedSender<Action>, message: String) {
    if action_tx.send(act!(Command::Error(message.clone()))).is_err() {
        error!("{message}");
    }
}
