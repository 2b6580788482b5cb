use super::*;

#[test]
fn caps_applies_to_keys_typed_after_toggle() {
    let mut keyboard = VirtualKeyboard::default();
    keyboard.type_str("ab");
    keyboard.press(KeyInput::ToggleCaps);
    keyboard.type_str("c");
    assert_eq!(keyboard.buffer(), "abC");

    keyboard.press(KeyInput::Backspace);
    assert_eq!(keyboard.buffer(), "ab");
    assert!(keyboard.caps());
}

#[test]
fn backspace_on_empty_buffer_is_harmless() {
    let mut keyboard = VirtualKeyboard::default();
    keyboard.press(KeyInput::Backspace);
    assert_eq!(keyboard.buffer(), "");
}

#[test]
fn space_and_clear_edit_the_buffer() {
    let mut keyboard = VirtualKeyboard::new("hello", false);
    keyboard.press(KeyInput::Space);
    keyboard.type_str("world");
    assert_eq!(keyboard.buffer(), "hello world");

    keyboard.press(KeyInput::Clear);
    assert_eq!(keyboard.buffer(), "");
    assert_eq!(keyboard.display("Enter text..."), "Enter text...");
}

#[test]
fn masking_only_changes_display() {
    let mut keyboard = VirtualKeyboard::new("", true);
    keyboard.type_str("s3cr");
    keyboard.press(KeyInput::ToggleCaps);
    keyboard.type_str("et");

    assert_eq!(keyboard.buffer(), "s3crET");
    assert_eq!(keyboard.display("Enter password"), "••••••");
    assert!(keyboard.is_masked());
}

#[test]
fn labels_follow_caps_state() {
    let mut keyboard = VirtualKeyboard::default();
    assert_eq!(keyboard.key_label('q'), "q");
    assert_eq!(keyboard.caps_label(), "Caps Off");
    keyboard.press(KeyInput::ToggleCaps);
    assert_eq!(keyboard.key_label('q'), "Q");
    assert_eq!(keyboard.key_label('@'), "@");
    assert_eq!(keyboard.caps_label(), "Caps On");
}

#[test]
fn layout_covers_letters_digits_and_email_symbols() {
    let letters: usize = LETTER_ROWS.iter().map(|row| row.len()).sum();
    assert_eq!(letters, 26);
    assert_eq!(NUMBER_ROW.len(), 10);
    assert!(SYMBOL_ROW.contains(&'@'));
}
