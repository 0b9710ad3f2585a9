pub mod keymap;
pub mod theme;
pub mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::chart::ChartSeries;
use crate::config::Config;
use crate::core::JournalManager;
use crate::currency::{CurrencyCode, LocaleConfig};
use crate::errors::Result;
use crate::session::EntryForm;

use keymap::AppAction;
use theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Note,
    Income,
    Expense,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Note => Field::Income,
            Field::Income => Field::Expense,
            Field::Expense => Field::Note,
        }
    }
}

/// Full-screen frontend: three input fields, the dual-line chart, and a
/// tooltip panel for the hovered or selected point.
pub struct App {
    pub(crate) manager: JournalManager,
    pub(crate) form: EntryForm,
    pub(crate) locale: LocaleConfig,
    pub(crate) code: CurrencyCode,
    pub(crate) theme: Theme,
    pub(crate) focus: Field,
    pub(crate) hovered: Option<usize>,
    frame_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(manager: JournalManager, config: &Config) -> Self {
        let locale = manager.journal().locale().clone();
        Self {
            manager,
            form: EntryForm::new(),
            locale,
            code: config.currency_code(),
            theme: Theme::named(config.theme.as_deref()),
            focus: Field::Note,
            hovered: None,
            frame_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::AppTerminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.frame_area = terminal.size()?;
            terminal.draw(|frame| ui::render(frame, self))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Mouse(mouse) => self.handle_mouse(mouse)?,
                    _ => {}
                }
            }
        }

        // One last full write so storage matches the final screen state.
        self.manager.flush()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match keymap::map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::NextField => {
                self.focus = self.focus.next();
            }
            AppAction::Submit => {
                let outcome = self.form.submit(&mut self.manager)?;
                tracing::debug!(?outcome, "submit");
                self.hovered = None;
            }
            AppAction::Delete => {
                self.form.delete(&mut self.manager)?;
                self.hovered = None;
            }
            AppAction::Cancel => {
                self.form.cancel_selection();
                self.hovered = None;
            }
            AppAction::Backspace => self.pop_focused(),
            AppAction::PrevPoint => self.move_selection(-1)?,
            AppAction::NextPoint => self.move_selection(1)?,
            AppAction::Input(ch) => self.push_focused(ch)?,
            AppAction::None => {}
        }
        Ok(())
    }

    fn push_focused(&mut self, ch: char) -> Result<()> {
        match self.focus {
            Field::Note => {
                let mut note = self.manager.journal().note().to_string();
                note.push(ch);
                self.manager.set_note(note)?;
            }
            Field::Income => {
                let raw = format!("{}{}", self.form.income(), ch);
                self.form.set_income(&raw);
            }
            Field::Expense => {
                let raw = format!("{}{}", self.form.expense(), ch);
                self.form.set_expense(&raw);
            }
        }
        Ok(())
    }

    fn pop_focused(&mut self) {
        match self.focus {
            Field::Note => {
                let mut note = self.manager.journal().note().to_string();
                if note.pop().is_some() {
                    // Write-through like every other note edit.
                    if let Err(err) = self.manager.set_note(note) {
                        tracing::warn!(%err, "note persistence failed");
                    }
                }
            }
            Field::Income => {
                let mut raw = self.form.income().to_string();
                raw.pop();
                self.form.set_income(&raw);
            }
            Field::Expense => {
                let mut raw = self.form.expense().to_string();
                raw.pop();
                self.form.set_expense(&raw);
            }
        }
    }

    fn move_selection(&mut self, delta: i64) -> Result<()> {
        let len = self.manager.journal().len();
        if len == 0 {
            return Ok(());
        }
        let target = match self.form.selection() {
            Some(position) => {
                let shifted = position as i64 + delta;
                shifted.clamp(0, len as i64 - 1) as usize
            }
            None if delta > 0 => 0,
            None => len - 1,
        };
        self.form.select(&mut self.manager, target)?;
        self.hovered = None;
        Ok(())
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let Some(plot) = self.current_plot_area() else {
            self.hovered = None;
            return Ok(());
        };
        let len = self.manager.journal().len();
        let inside_rows = mouse.row >= plot.y && mouse.row < plot.y + plot.height;
        let hit = if inside_rows {
            ui::nearest_position(mouse.column, plot, len)
        } else {
            None
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = hit {
                    self.form.select(&mut self.manager, position)?;
                    self.hovered = None;
                }
            }
            MouseEventKind::Moved => {
                self.hovered = hit;
            }
            _ => {}
        }
        Ok(())
    }

    fn current_plot_area(&self) -> Option<Rect> {
        if self.frame_area.width == 0 || self.frame_area.height == 0 {
            return None;
        }
        let series = ChartSeries::from_entries(self.manager.journal().entries());
        let labels = ui::y_axis_labels(series.y_max, &self.locale);
        let chart = ui::areas(self.frame_area).chart;
        Some(ui::plot_area(chart, ui::y_label_width(&labels)))
    }
}
