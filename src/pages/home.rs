use std::collections::HashMap;

use color_eyre::eyre::Result;
use derive_builder::Builder;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Frame, Page, PageId};
use crate::{
    action::{act, Action, Command, HomeAction},
    components::{background::Moonscape, multiline::MultiLine},
    config::PageKeyBindings,
    constants::{
        game::classic,
        home::{MENU_WIDTH, OPTION_PADDING, TITLE_TEXT},
    },
    pages::game::{Tuning, Variant},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OptionItem {
    Play(Variant),
    Quit,
}

#[derive(Builder)]
pub struct HomePage {
    #[builder(default)]
    pub action_tx: Option<UnboundedSender<Action>>,
    #[builder(default)]
    pub keymap: PageKeyBindings,
    options: Vec<(OptionItem, &'static str)>,
    #[builder(default)]
    selected_option_index: usize,
}

impl HomePage {
    pub fn new() -> Result<Self> {
        let page = HomePageBuilder::default()
            .options(vec![
                (OptionItem::Play(Variant::Classic), "Classic   fixed 1400x720 field, ENTER to start"),
                (OptionItem::Play(Variant::Scaled), "Scaled    field fits the terminal, tap to start"),
                (OptionItem::Quit, "Quit"),
            ])
            .build()?;
        Ok(page)
    }

    pub fn up(&mut self) {
        self.selected_option_index = self.selected_option_index.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected_option_index + 1 < self.options.len() {
            self.selected_option_index += 1;
        }
    }

    fn select(&self) -> Option<Action> {
        let (item, _) = self.options.get(self.selected_option_index)?;
        match item {
            OptionItem::Play(variant) => Some(act!(Command::StartGame(*variant))),
            OptionItem::Quit => Some(act!(Command::Quit)),
        }
    }
}

impl Page for HomePage {
    fn id(&self) -> PageId {
        PageId::Home
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

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Command::Home(command) = action.command {
            match command {
                HomeAction::Up => self.up(),
                HomeAction::Down => self.down(),
                HomeAction::Select => return Ok(self.select()),
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        let tuning = Tuning::classic();
        let units_per_cell = classic::WIDTH / rect.width.max(1) as f32;
        f.render_widget(Moonscape::new([0.0; 3], tuning.parallax_periods, units_per_cell), rect);

        let title_lines: Vec<&str> = TITLE_TEXT.lines().filter(|s| !s.is_empty()).collect();
        let title = MultiLine::new(title_lines).style(Style::default().fg(Color::Yellow));
        let option_height = (self.options.len() as u16 * 2).saturating_sub(1);

        let [title_area, option_area] =
            Layout::vertical([Constraint::Length(title.height()), Constraint::Length(option_height)])
                .flex(layout::Flex::SpaceAround)
                .areas(rect);
        let [title_area] =
            Layout::horizontal([Constraint::Length(title.width())]).flex(layout::Flex::Center).areas(title_area);
        f.render_widget(title, title_area);

        let [option_area] = Layout::horizontal([Constraint::Length(MENU_WIDTH + OPTION_PADDING * 2)])
            .flex(layout::Flex::Center)
            .areas(option_area);
        let pad = " ".repeat(OPTION_PADDING as usize);
        let lines = self
            .options
            .iter()
            .enumerate()
            .flat_map(|(index, (_, title))| {
                let style = if index == self.selected_option_index {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                let line = Line::from(format!("{pad}{title:<width$}{pad}", width = MENU_WIDTH as usize)).style(style);
                [line, Line::from("")]
            })
            .take(option_height as usize)
            .collect::<Vec<_>>();

        f.render_widget(Paragraph::new(lines), option_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::action::ActionState;

    fn home(command: HomeAction) -> Action {
        act!(Command::Home(command), ActionState::Start)
    }

    #[test]
    fn test_menu_navigation() -> Result<()> {
        let mut page = HomePage::new()?;

        page.update(home(HomeAction::Up))?;
        assert_eq!(page.selected_option_index, 0);

        page.update(home(HomeAction::Down))?;
        assert_eq!(page.update(home(HomeAction::Select))?, Some(act!(Command::StartGame(Variant::Scaled))));

        page.update(home(HomeAction::Down))?;
        page.update(home(HomeAction::Down))?;
        assert_eq!(page.update(home(HomeAction::Select))?, Some(act!(Command::Quit)));
        Ok(())
    }

    #[test]
    fn test_draw_lists_variants() -> Result<()> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
        let mut page = HomePage::new()?;

        terminal.draw(|f| {
            let area = f.area();
            page.draw(f, area).unwrap();
        })?;

        let screen: String = terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Classic"));
        assert!(screen.contains("Scaled"));
        Ok(())
    }
}
