//! Application state, event handling and the frame loop.

use std::time::{Duration, Instant};

use chrono::{Datelike, Local};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use galaxia_background::GalaxyState;
use galaxia_config::{Config, ProfileConfig};
use galaxia_core::{Point, ProjectKind, Section, SurfaceSize};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
};
use tracing::debug;

use crate::view::{self, NavHit, NavTarget};

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Section currently on screen.
    section: Section,
    /// One background per section, in [`Section::ALL`] order.
    backgrounds: Vec<GalaxyState>,
    /// Project column under the pointer.
    active_project: Option<ProjectKind>,
    /// Whether the contact panel is showing.
    contact_open: bool,
    /// Pointer cell, `None` once it has left the terminal.
    pointer: Option<(u16, u16)>,
    /// Text about the portfolio's owner.
    profile: ProfileConfig,
    /// Target time between frames.
    frame_interval: Duration,
    /// Clock origin for the animations.
    started: Instant,
    /// Terminal area of the last drawn frame.
    screen: Rect,
    /// Clickable navigation items of the last drawn frame.
    nav_hits: Vec<NavHit>,
}

impl App {
    /// Build the app and one galaxy per section from the config.
    ///
    /// With a `seed`, every section's sky is reproducible.
    pub fn new(config: &Config, seed: Option<u64>, constellations: bool) -> Self {
        let tuning = config.background.tuning();
        let constellations = constellations && config.background.constellations;

        let backgrounds = Section::ALL
            .iter()
            .map(|section| {
                let with_lines = constellations && section.has_constellations();
                match seed {
                    Some(seed) => GalaxyState::with_seed(
                        tuning.clone(),
                        with_lines,
                        seed.wrapping_add(section.index() as u64),
                    ),
                    None => GalaxyState::new(tuning.clone(), with_lines),
                }
            })
            .collect();

        Self {
            running: false,
            section: Section::default(),
            backgrounds,
            active_project: None,
            contact_open: false,
            pointer: None,
            profile: config.profile.clone(),
            frame_interval: Duration::from_secs(1) / config.display.fps.max(1),
            started: Instant::now(),
            screen: Rect::default(),
            nav_hits: Vec::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
            terminal.draw(|frame| self.render(frame, now_ms))?;
            self.handle_crossterm_events(frame_start + self.frame_interval)?;
        }
        Ok(())
    }

    /// Renders the user interface and steps every background one frame.
    fn render(&mut self, frame: &mut Frame, now_ms: f64) {
        let area = frame.area();
        self.screen = area;

        let size = SurfaceSize::from_cells(area.width, area.height);
        let pointer = self
            .pointer
            .map(|(column, row)| {
                Point::from_cell(column.saturating_sub(area.x), row.saturating_sub(area.y))
            });

        // Hidden sections keep animating, as if the whole page were mounted.
        for (section, galaxy) in Section::ALL.iter().zip(self.backgrounds.iter_mut()) {
            if galaxy.ensure_size(size, now_ms) {
                debug!(section = section.label(), "background reinitialized");
            }
            if *section == self.section {
                galaxy.set_pointer(pointer);
                galaxy.render(frame, area, now_ms);
            } else {
                galaxy.set_pointer(None);
                galaxy.advance(now_ms);
            }
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Navigation
            Constraint::Fill(1),   // Section content
            Constraint::Length(1), // Help text or footer
        ])
        .split(area);

        self.nav_hits = view::render_nav(frame, chunks[0], self.section);
        view::render_section(frame, chunks[1], self.section, &self.profile, self.active_project);
        view::render_footer(
            frame,
            chunks[2],
            self.section,
            &self.profile.name,
            Local::now().year(),
        );

        if self.contact_open {
            view::render_contact(frame, area, &self.profile);
        }
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.on_pointer_leave(),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Esc | KeyCode::Char('q')) => {
                if self.contact_open {
                    self.close_contact();
                } else {
                    self.quit();
                }
            }
            (_, KeyCode::Char('c')) => self.toggle_contact(),
            (_, KeyCode::Tab | KeyCode::Down | KeyCode::PageDown | KeyCode::Char('j')) => {
                self.scroll_to(self.section.next())
            }
            (_, KeyCode::BackTab | KeyCode::Up | KeyCode::PageUp | KeyCode::Char('k')) => {
                self.scroll_to(self.section.previous())
            }
            (_, KeyCode::Char(digit @ '1'..='4')) => {
                let index = digit as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.scroll_to(section);
                }
            }
            _ => {}
        }
    }

    /// Handles pointer movement, wheel scrolling and clicks.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((mouse.column, mouse.row));
                self.update_hover(mouse.column, mouse.row);
            }
            MouseEventKind::ScrollDown => self.scroll_to(self.section.next()),
            MouseEventKind::ScrollUp => self.scroll_to(self.section.previous()),
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        if self.contact_open {
            if !view::contact_area(self.screen).contains(Position::new(column, row)) {
                self.close_contact();
            }
            return;
        }
        if row != self.screen.y {
            return;
        }
        let target = self
            .nav_hits
            .iter()
            .find(|hit| hit.columns.contains(&column))
            .map(|hit| hit.target);
        match target {
            Some(NavTarget::Section(section)) => self.scroll_to(section),
            Some(NavTarget::Contact) => self.toggle_contact(),
            None => {}
        }
    }

    /// Pick the project column under the pointer on the projects section.
    fn update_hover(&mut self, column: u16, row: u16) {
        let content_rows = self.screen.y + 1..self.screen.bottom().saturating_sub(1);
        self.active_project = if self.section == Section::Projects
            && !self.contact_open
            && content_rows.contains(&row)
        {
            ProjectKind::at_column(column.saturating_sub(self.screen.x), self.screen.width)
        } else {
            None
        };
    }

    /// The pointer left the terminal.
    fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.active_project = None;
    }

    /// Move to another section; ignored while the contact panel is open.
    fn scroll_to(&mut self, section: Section) {
        if self.contact_open || section == self.section {
            return;
        }
        debug!(from = self.section.label(), to = section.label(), "scrolled");
        self.section = section;
        self.active_project = None;
    }

    fn toggle_contact(&mut self) {
        self.contact_open = !self.contact_open;
        if self.contact_open {
            self.active_project = None;
        }
    }

    fn close_contact(&mut self) {
        self.contact_open = false;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
