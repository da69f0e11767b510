// =====================================================
// FILE: src/ui/screen.rs - PAGE SCREEN LOOP
// =====================================================

use crate::core::constants::{APP_TITLE, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, VERSION};
use crate::core::prelude::*;
use crate::input::{
    event::{AppEvent, EventHandler},
    keyboard::{KeyAction, KeyboardManager},
};
use crate::output::{
    logging::AppLogger,
    page::{content_width, render_nav, render_page},
    scroll::ScrollState,
};
use crate::portfolio::{
    links::{download_cv, open_target},
    PageState, Profile, Section,
};
use crate::ui::{
    color::{AppColor, Palette},
    terminal::TerminalManager,
};

use log::Level;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Terminal,
};
use std::io::Stdout;

pub type TerminalBackend = Terminal<CrosstermBackend<Stdout>>;

const STATUS_TTL: Duration = Duration::from_secs(5);

struct StatusLine {
    level: Level,
    text: String,
    shown_at: Instant,
}

pub struct ScreenManager<'a> {
    terminal: TerminalBackend,
    terminal_mgr: TerminalManager,
    events: EventHandler,
    keyboard_manager: KeyboardManager,
    config: &'a Config,
    profile: &'a Profile,
    table: &'a TranslationTable,
    state: PageState,
    scroll: ScrollState,
    pending_jump: Option<Section>,
    status: Option<StatusLine>,
}

impl<'a> ScreenManager<'a> {
    pub async fn new(
        config: &'a Config,
        profile: &'a Profile,
        table: &'a TranslationTable,
    ) -> Result<Self> {
        let state = PageState::new(profile, config.language, config.initial_dark_mode())?;

        let mut terminal_mgr = TerminalManager::new();
        terminal_mgr.setup().await?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            terminal_mgr,
            events: EventHandler::new(config.poll_rate),
            keyboard_manager: KeyboardManager::new(),
            config,
            profile,
            table,
            state,
            scroll: ScrollState::new(),
            pending_jump: None,
            status: None,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let result = loop {
            if let Some(event) = self.events.next().await {
                match event {
                    AppEvent::Input(key) => {
                        let action = self.keyboard_manager.get_action(&key);
                        if self.handle_action(action).await {
                            self.events.shutdown().await;
                            break Ok(());
                        }
                    }
                    // The draw below picks up the new frame size
                    AppEvent::Resize(..) => {}
                    AppEvent::Tick => self.expire_status(),
                }
            }

            self.process_pending_logs();
            if let Err(e) = self.render() {
                self.events.shutdown().await;
                break Err(e);
            }
        };

        self.terminal_mgr.cleanup().await?;
        result
    }

    /// Applies one key action. Returns `true` when the session should end.
    async fn handle_action(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::ToggleLanguage => {
                let locale = self.state.toggle_language();
                log::debug!("Language switched to {}", locale.code().to_uppercase());
            }
            KeyAction::ToggleTheme => {
                let dark = self.state.toggle_theme();
                log::debug!("Dark mode {}", if dark { "on" } else { "off" });
            }
            KeyAction::NextProject => {
                self.state.next_project();
            }
            KeyAction::PrevProject => {
                self.state.prev_project();
            }
            KeyAction::SelectProject(index) => {
                if !self.state.select_project(index) {
                    log::debug!("No project #{}", index + 1);
                }
            }
            KeyAction::JumpTo(section) => {
                self.state.go_to(section);
                self.pending_jump = Some(section);
            }
            KeyAction::ScrollUp => self.scroll.scroll_up(1),
            KeyAction::ScrollDown => self.scroll.scroll_down(1),
            KeyAction::PageUp => self.scroll.page_up(),
            KeyAction::PageDown => self.scroll.page_down(),
            KeyAction::ScrollTop => self.scroll.to_top(),
            KeyAction::ScrollBottom => self.scroll.to_bottom(),
            KeyAction::OpenDemo => {
                if let Some(project) = self.state.current_project(self.profile) {
                    open_logged(&project.demo);
                }
            }
            KeyAction::OpenCode => {
                if let Some(project) = self.state.current_project(self.profile) {
                    open_logged(&project.code);
                }
            }
            KeyAction::OpenGithub => open_logged(&self.profile.contact.github),
            KeyAction::SendMessage => open_logged(&self.profile.contact.linkedin),
            KeyAction::DownloadCv => {
                if let Err(e) = download_cv(
                    self.profile,
                    self.state.locale(),
                    &self.config.assets_dir,
                    &self.config.download_dir,
                )
                .await
                {
                    log::warn!("CV download failed: {}", e);
                }
            }
            KeyAction::NoAction => {}
        }
        false
    }

    fn process_pending_logs(&mut self) {
        match AppLogger::get_messages() {
            Ok(messages) => {
                if let Some(last) = messages.into_iter().last() {
                    self.status = Some(StatusLine {
                        level: last.level,
                        text: last.message,
                        shown_at: Instant::now(),
                    });
                }
            }
            Err(e) => {
                self.status = Some(StatusLine {
                    level: Level::Error,
                    text: e.to_string(),
                    shown_at: Instant::now(),
                });
            }
        }
    }

    fn expire_status(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.shown_at.elapsed() >= STATUS_TTL)
        {
            self.status = None;
        }
    }

    fn render(&mut self) -> Result<()> {
        let palette = Palette::themed(self.state.dark_mode(), self.config.accent);
        let tr = self.state.translator(self.table);
        let profile = self.profile;
        let state = &self.state;
        let scroll = &mut self.scroll;
        let pending_jump = self.pending_jump.take();
        let status = self.status.as_ref();
        let mut visible_section = state.section();

        let base = Style::default()
            .fg(palette.text.into())
            .bg(palette.background.into());

        self.terminal.draw(|frame| {
            let size = frame.size();
            frame.render_widget(Block::default().style(base), size);

            if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
                let notice = Paragraph::new(format!(
                    "{}x{} < {}x{}",
                    size.width, size.height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
                ))
                .alignment(Alignment::Center)
                .style(base);
                frame.render_widget(notice, size);
                return;
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(3),
                    Constraint::Length(1),
                ])
                .split(size);

            let content = centered_column(chunks[1]);
            let page = render_page(profile, state, &tr, &palette, content.width);

            scroll.update_dimensions(usize::from(content.height), page.height());
            if let Some(section) = pending_jump {
                scroll.jump_to(page.anchor(section));
            }
            visible_section = page.section_at(scroll.offset());

            let nav = render_nav(state, visible_section, &tr, &palette, chunks[0].width);
            frame.render_widget(Paragraph::new(nav).style(base), chunks[0]);

            let offset = u16::try_from(scroll.offset()).unwrap_or(u16::MAX);
            let body = Paragraph::new(page.lines().to_vec())
                .style(base)
                .scroll((offset, 0));
            frame.render_widget(body, content);

            frame.render_widget(status_bar(status, &palette).style(base), chunks[2]);
        })?;

        self.state.go_to(visible_section);
        Ok(())
    }
}

fn open_logged(target: &str) {
    match open_target(target) {
        Ok(true) => {}
        Ok(false) => log::info!("Nothing to open here"),
        Err(e) => log::warn!("Could not open {}: {}", target, e),
    }
}

/// Content column of at most the readable width, centred in `area`.
fn centered_column(area: Rect) -> Rect {
    let width = u16::try_from(content_width(area.width.saturating_sub(2))).unwrap_or(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn status_bar<'s>(status: Option<&'s StatusLine>, palette: &Palette) -> Paragraph<'s> {
    let line = match status {
        Some(status) => Line::from(vec![
            Span::styled(
                format!(" {} ", status.level),
                Style::default().fg(AppColor::from_log_level(status.level).into()),
            ),
            Span::styled(status.text.as_str(), Style::default().fg(palette.text.into())),
        ]),
        None => Line::from(Span::styled(
            format!(" {} v{}  [q] / Esc Esc", APP_TITLE, VERSION),
            Style::default().fg(palette.muted.into()),
        )),
    };
    Paragraph::new(line)
}
