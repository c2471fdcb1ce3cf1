use super::conversation::Conversation;

/// Which of the two independent chat threads a controller (or reply) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPanel {
    Main,
    Floating,
}

impl ChatPanel {
    pub fn name(&self) -> &'static str {
        match self {
            ChatPanel::Main => "main",
            ChatPanel::Floating => "floating",
        }
    }

    /// Hint shown in an empty input line.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ChatPanel::Main => "Nhập câu hỏi của bạn...",
            ChatPanel::Floating => "Hỏi gì đó...",
        }
    }

    /// Greeting seeded into a fresh conversation for this panel.
    pub fn greeting(&self) -> &'static str {
        match self {
            ChatPanel::Main => MAIN_GREETING,
            ChatPanel::Floating => FLOATING_GREETING,
        }
    }
}

const MAIN_GREETING: &str = "Xin chào! Mình là cố vấn an toàn giao thông. Bạn có câu hỏi gì về lái xe, luật giao thông hay an toàn đường bộ không?";
const FLOATING_GREETING: &str = "Xin chào! Có gì tôi có thể giúp bạn?";

/// One chat thread: its history, its input buffer, and how many bot
/// replies are still on their way.
#[derive(Debug)]
pub struct ChatController {
    panel: ChatPanel,
    pub conversation: Conversation,
    pub input: String,
    /// Byte offset of the cursor in `input`, always on a char boundary.
    pub cursor_pos: usize,
    pending_replies: usize,
}

impl ChatController {
    pub fn new(panel: ChatPanel) -> Self {
        Self {
            panel,
            conversation: Conversation::with_greeting(panel.greeting()),
            input: String::new(),
            cursor_pos: 0,
            pending_replies: 0,
        }
    }

    pub fn panel(&self) -> ChatPanel {
        self.panel
    }

    /// True while at least one scheduled reply has not been delivered.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    // ── Input editing ──────────────────────────────────────────

    pub fn input_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input.remove(prev);
            self.cursor_pos = prev;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.cursor_pos = self.input[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.input.len());
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    // ── Send / receive ─────────────────────────────────────────

    /// Send the current input as a user message.
    ///
    /// Whitespace-only input is ignored and leaves both the history and the
    /// buffer untouched. Otherwise the text is recorded exactly as typed, the
    /// buffer is cleared, one reply is marked pending, and the text is returned
    /// so the caller can schedule the reply.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.cursor_pos = 0;
        self.conversation.add_user_message(&text);
        self.pending_replies += 1;
        Some(text)
    }

    /// Append a bot reply that was scheduled by `submit`.
    pub fn deliver_reply(&mut self, text: &str) {
        self.conversation.add_bot_message(text);
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::Sender;

    fn type_str(c: &mut ChatController, s: &str) {
        for ch in s.chars() {
            c.input_char(ch);
        }
    }

    #[test]
    fn new_controller_has_greeting() {
        let main = ChatController::new(ChatPanel::Main);
        assert_eq!(main.conversation.len(), 1);
        assert_eq!(main.conversation.messages()[0].text, MAIN_GREETING);

        let floating = ChatController::new(ChatPanel::Floating);
        assert_eq!(floating.conversation.messages()[0].text, FLOATING_GREETING);
        assert!(!floating.is_typing());
    }

    // ── Input editing ─────────────────────────────────────────────

    #[test]
    fn input_char_and_backspace() {
        let mut c = ChatController::new(ChatPanel::Main);
        c.input_char('h');
        c.input_char('i');
        assert_eq!(c.input, "hi");
        assert_eq!(c.cursor_pos, 2);
        c.input_backspace();
        assert_eq!(c.input, "h");
        assert_eq!(c.cursor_pos, 1);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut c = ChatController::new(ChatPanel::Main);
        c.input_backspace();
        assert_eq!(c.input, "");
        assert_eq!(c.cursor_pos, 0);
    }

    #[test]
    fn multibyte_editing_stays_on_char_boundaries() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, "mệt");
        assert_eq!(c.cursor_pos, "mệt".len());
        c.cursor_left();
        c.input_backspace(); // removes 'ệ'
        assert_eq!(c.input, "mt");
        assert_eq!(c.cursor_pos, 1);
        c.input_char('ệ');
        assert_eq!(c.input, "mệt");
    }

    #[test]
    fn cursor_movement_clamps() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, "ab");
        c.cursor_right();
        assert_eq!(c.cursor_pos, 2);
        c.cursor_left();
        c.cursor_left();
        c.cursor_left();
        assert_eq!(c.cursor_pos, 0);
        c.cursor_right();
        assert_eq!(c.cursor_pos, 1);
    }

    #[test]
    fn clear_input_resets_cursor() {
        let mut c = ChatController::new(ChatPanel::Floating);
        type_str(&mut c, "tốc độ");
        c.clear_input();
        assert_eq!(c.input, "");
        assert_eq!(c.cursor_pos, 0);
        assert_eq!(c.conversation.len(), 1);
    }

    // ── Submit ────────────────────────────────────────────────────

    #[test]
    fn submit_empty_is_noop() {
        let mut c = ChatController::new(ChatPanel::Main);
        assert_eq!(c.submit(), None);
        assert_eq!(c.conversation.len(), 1);
        assert!(!c.is_typing());
    }

    #[test]
    fn submit_whitespace_keeps_buffer() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, "   ");
        assert_eq!(c.submit(), None);
        assert_eq!(c.input, "   ");
        assert_eq!(c.cursor_pos, 3);
        assert_eq!(c.conversation.len(), 1);
    }

    #[test]
    fn submit_records_exact_text_and_clears() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, " nồng độ cồn ");
        let sent = c.submit();
        assert_eq!(sent.as_deref(), Some(" nồng độ cồn "));
        assert_eq!(c.input, "");
        assert_eq!(c.cursor_pos, 0);
        let last = c.conversation.last().unwrap();
        assert_eq!(last.sender, Sender::User);
        assert_eq!(last.text, " nồng độ cồn ");
        assert_eq!(c.pending_replies(), 1);
    }

    #[test]
    fn deliver_reply_appends_bot_message() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, "hello");
        c.submit();
        assert!(c.is_typing());
        c.deliver_reply("hi");
        assert!(!c.is_typing());
        let last = c.conversation.last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert_eq!(last.text, "hi");
        assert_eq!(c.conversation.len(), 3);
    }

    #[test]
    fn double_submit_tracks_two_pending() {
        let mut c = ChatController::new(ChatPanel::Main);
        type_str(&mut c, "a");
        c.submit();
        type_str(&mut c, "b");
        c.submit();
        assert_eq!(c.pending_replies(), 2);
        c.deliver_reply("1");
        assert!(c.is_typing());
        c.deliver_reply("2");
        assert!(!c.is_typing());
    }
}
