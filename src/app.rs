//! Application struct and event loop.
//!
//! Owns the UI state and the reply channel. Terminal setup lives in `run`;
//! everything else is plain state mutation and can be driven from tests.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::chat::{ChatPanel, ReplyEvent, ReplyScheduler};
use crate::config::Config;
use crate::constants::*;
use crate::ui::{self, AppState, Tab};

/// Main application struct.
pub struct App {
    state: AppState,
    scheduler: ReplyScheduler,
    reply_rx: mpsc::UnboundedReceiver<ReplyEvent>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        // Resolve theme: built-in, then custom file, then default
        let theme = ui::Theme::by_name(&config.theme)
            .or_else(|| ui::Theme::from_toml_file(&custom_theme_path(&config.theme)))
            .unwrap_or_default();
        let state = AppState::new(
            config.start_tab,
            theme,
            config.floating_open,
            config.floating.clone(),
        );
        let (scheduler, reply_rx) =
            ReplyScheduler::new(Duration::from_millis(config.reply_delay_ms));
        info!(
            theme = %state.theme.name,
            tab = state.active_tab.tag(),
            reply_delay_ms = scheduler.delay().as_millis() as u64,
            "starting"
        );

        Self {
            state,
            scheduler,
            reply_rx,
        }
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        // Cleanup runs even when the loop failed
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!("stopped");
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            let mut max_scroll = 0;
            terminal.draw(|frame| {
                ui::render(frame, &self.state);
                max_scroll = ui::max_content_scroll(frame.area(), &self.state);
            })?;
            self.state.clamp_content_scroll(max_scroll);

            self.drain_reply_events();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                match event::read()? {
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(()); // quit requested
                        }
                    }
                    _ => {}
                }
            }

            self.state.tick_count = self.state.tick_count.wrapping_add(1);
        }
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_reply_events(&mut self) {
        while let Ok(event) = self.reply_rx.try_recv() {
            let panel = event.panel;
            self.state.deliver_reply(event);
            let conversation = &self.state.chat(panel).conversation;
            if let Some(msg) = conversation.last() {
                debug!(
                    panel = panel.name(),
                    id = %msg.id,
                    messages = conversation.len(),
                    "reply delivered"
                );
            }
        }
    }

    /// Submit the input of `panel` and schedule its reply.
    fn submit(&mut self, panel: ChatPanel) {
        let controller = self.state.chat_mut(panel);
        if let Some(text) = controller.submit() {
            info!(
                panel = panel.name(),
                chars = text.chars().count(),
                pending = controller.pending_replies(),
                "message sent"
            );
            self.scheduler.schedule(panel, &text);
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        if self.state.active_tab != tab {
            info!(tab = tab.tag(), "tab selected");
        }
        self.state.select_tab(tab);
    }

    // ── Mouse handling ───────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.show_help {
                    self.state.show_help = false;
                } else if mouse.row == TAB_STRIP_ROW {
                    if let Some(tab) = ui::tab_at_column(mouse.column) {
                        self.select_tab(tab);
                    }
                }
            }
            _ => {}
        }
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.state.show_help {
            self.state.show_help = false;
            return false;
        }

        match self.state.focused_panel() {
            Some(panel) => self.handle_key_typing(panel, key),
            None => self.handle_key_normal(key),
        }
    }

    /// Keys while an input line (main or floating) has focus.
    fn handle_key_typing(&mut self, panel: ChatPanel, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => match panel {
                ChatPanel::Floating => self.state.close_floating(),
                ChatPanel::Main => self.state.focus = ui::Focus::Content,
            },
            KeyCode::Enter => self.submit(panel),
            KeyCode::Backspace => self.state.chat_mut(panel).input_backspace(),
            KeyCode::Left => self.state.chat_mut(panel).cursor_left(),
            KeyCode::Right => self.state.chat_mut(panel).cursor_right(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.chat_mut(panel).clear_input();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.chat_mut(panel).input_char(c);
            }
            _ => {}
        }
        false
    }

    /// Handle keys in normal mode. Returns `true` if the app should quit.
    fn handle_key_normal(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,

            // Tab navigation
            KeyCode::Tab => self.select_tab(self.state.active_tab.next()),
            KeyCode::BackTab => self.select_tab(self.state.active_tab.prev()),
            KeyCode::Char('1') => self.select_tab(Tab::Environment),
            KeyCode::Char('2') => self.select_tab(Tab::Tips),
            KeyCode::Char('3') => self.select_tab(Tab::Laws),

            // Scrolling
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::Home => self.state.scroll_home(),
            KeyCode::End => self.state.scroll_end(), // clamped after the next draw

            // Chat
            KeyCode::Char('i') | KeyCode::Enter => self.state.focus_main_input(),
            KeyCode::Char('c') => self.state.open_floating(),
            KeyCode::Esc => self.state.close_floating(),

            // Chrome
            KeyCode::Char('T') => {
                self.state.cycle_theme();
                let msg = format!("Giao diện: {}", self.state.theme.name);
                self.state.set_status(msg);
            }
            KeyCode::Char('?') => self.state.show_help = true,
            _ => {}
        }
        false
    }
}
