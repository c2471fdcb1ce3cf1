use std::time::Instant;

use crate::chat::{ChatController, ChatPanel, ReplyEvent};
use crate::config::FloatingConfig;
use crate::constants::PAGE_SIZE;

use super::theme::Theme;

/// Which content tab is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Environment,
    Tips,
    Laws,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Environment, Tab::Tips, Tab::Laws]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Environment => "Bảo vệ Môi trường",
            Tab::Tips => "Tips Lái xe",
            Tab::Laws => "Luật Giao thông",
        }
    }

    /// Stable string tag, as accepted on the command line and in config.
    pub fn tag(&self) -> &'static str {
        match self {
            Tab::Environment => "chat",
            Tab::Tips => "tips",
            Tab::Laws => "laws",
        }
    }

    /// Parse a tab tag. "environment" is accepted as an alias of "chat".
    pub fn from_tag(tag: &str) -> Option<Tab> {
        match tag.trim().to_lowercase().as_str() {
            "chat" | "environment" => Some(Tab::Environment),
            "tips" => Some(Tab::Tips),
            "laws" => Some(Tab::Laws),
            _ => None,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Environment => Tab::Tips,
            Tab::Tips => Tab::Laws,
            Tab::Laws => Tab::Environment,
        }
    }

    pub fn prev(&self) -> Tab {
        match self {
            Tab::Environment => Tab::Laws,
            Tab::Tips => Tab::Environment,
            Tab::Laws => Tab::Tips,
        }
    }
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Navigation keys drive tabs and content scrolling.
    Content,
    MainInput,
    FloatingInput,
}

/// Central application state - the single source of truth.
pub struct AppState {
    pub active_tab: Tab,
    pub content_scroll: usize,
    pub focus: Focus,

    // ── Chat threads (independent) ───────────────────────────
    pub main_chat: ChatController,
    pub floating_chat: ChatController,
    pub floating_open: bool,
    pub floating_size: FloatingConfig,

    // ── Overlays / chrome ────────────────────────────────────
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
    pub tick_count: u64,
    pub theme: Theme,
}

impl AppState {
    pub fn new(start_tab: Tab, theme: Theme, floating_open: bool, floating_size: FloatingConfig) -> Self {
        Self {
            active_tab: start_tab,
            content_scroll: 0,
            focus: if floating_open {
                Focus::FloatingInput
            } else {
                Focus::Content
            },
            main_chat: ChatController::new(ChatPanel::Main),
            floating_chat: ChatController::new(ChatPanel::Floating),
            floating_open,
            floating_size,
            show_help: false,
            status_message: None,
            tick_count: 0,
            theme,
        }
    }

    // ── Tabs ───────────────────────────────────────────────────

    /// Switch tabs. Only the displayed dataset and the scroll offset change.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.content_scroll = 0;
        }
    }

    // ── Content scrolling ──────────────────────────────────────

    pub fn scroll_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(1);
    }

    pub fn page_up(&mut self) {
        self.content_scroll = self.content_scroll.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        self.content_scroll = self.content_scroll.saturating_add(PAGE_SIZE);
    }

    pub fn scroll_home(&mut self) {
        self.content_scroll = 0;
    }

    /// Jump to the end; clamped after the next render.
    pub fn scroll_end(&mut self) {
        self.content_scroll = usize::MAX;
    }

    pub fn clamp_content_scroll(&mut self, max: usize) {
        self.content_scroll = self.content_scroll.min(max);
    }

    // ── Chat ───────────────────────────────────────────────────

    pub fn chat(&self, panel: ChatPanel) -> &ChatController {
        match panel {
            ChatPanel::Main => &self.main_chat,
            ChatPanel::Floating => &self.floating_chat,
        }
    }

    pub fn chat_mut(&mut self, panel: ChatPanel) -> &mut ChatController {
        match panel {
            ChatPanel::Main => &mut self.main_chat,
            ChatPanel::Floating => &mut self.floating_chat,
        }
    }

    /// The chat panel currently receiving keystrokes, if any.
    pub fn focused_panel(&self) -> Option<ChatPanel> {
        match self.focus {
            Focus::Content => None,
            Focus::MainInput => Some(ChatPanel::Main),
            Focus::FloatingInput => Some(ChatPanel::Floating),
        }
    }

    /// Route a delivered reply to the panel it was scheduled for.
    pub fn deliver_reply(&mut self, event: ReplyEvent) {
        self.chat_mut(event.panel).deliver_reply(event.text);
    }

    pub fn focus_main_input(&mut self) {
        self.focus = Focus::MainInput;
    }

    pub fn open_floating(&mut self) {
        self.floating_open = true;
        self.focus = Focus::FloatingInput;
    }

    /// Hide the floating widget. Its history and input buffer are kept.
    pub fn close_floating(&mut self) {
        self.floating_open = false;
        if self.focus == Focus::FloatingInput {
            self.focus = Focus::Content;
        }
    }

    // ── Chrome ─────────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }

    /// Set a status bar message with automatic timestamp.
    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }
}
