//! On-screen keyboard backing the text input modal.

pub const NUMBER_ROW: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];
pub const SYMBOL_ROW: [char; 4] = ['@', '_', '.', '-'];
pub const LETTER_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Space,
    Backspace,
    Clear,
    ToggleCaps,
}

/// Text buffer edited one key at a time. Masking only affects [`display`];
/// the buffer always holds the real text.
///
/// [`display`]: VirtualKeyboard::display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualKeyboard {
    buffer: String,
    caps: bool,
    masked: bool,
}

impl VirtualKeyboard {
    pub fn new(initial: impl Into<String>, masked: bool) -> Self {
        Self {
            buffer: initial.into(),
            caps: false,
            masked,
        }
    }

    pub fn press(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(ch) if self.caps => self.buffer.extend(ch.to_uppercase()),
            KeyInput::Char(ch) => self.buffer.push(ch),
            KeyInput::Space => self.buffer.push(' '),
            KeyInput::Backspace => {
                self.buffer.pop();
            }
            KeyInput::Clear => self.buffer.clear(),
            KeyInput::ToggleCaps => self.caps = !self.caps,
        }
    }

    pub fn type_str(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == ' ' {
                self.press(KeyInput::Space);
            } else {
                self.press(KeyInput::Char(ch));
            }
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn caps(&self) -> bool {
        self.caps
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn display(&self, placeholder: &str) -> String {
        if self.buffer.is_empty() {
            placeholder.to_string()
        } else if self.masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.buffer.chars().count())
                .collect()
        } else {
            self.buffer.clone()
        }
    }

    pub fn key_label(&self, ch: char) -> String {
        if self.caps {
            ch.to_uppercase().collect()
        } else {
            ch.to_string()
        }
    }

    pub fn caps_label(&self) -> &'static str {
        if self.caps {
            "Caps On"
        } else {
            "Caps Off"
        }
    }
}

#[cfg(test)]
#[path = "tests/keyboard_tests.rs"]
mod tests;
