use super::*;

fn parse(line: &str) -> ReplCommand {
    ReplLine::try_parse_from(line.split_whitespace())
        .expect("parse")
        .command
}

#[test]
fn set_joins_free_text_value() {
    match parse("set description long walk by the river") {
        ReplCommand::Set { field, value } => {
            assert_eq!(field, InputField::MoodDescription);
            assert_eq!(value.join(" "), "long walk by the river");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn screens_and_dates_parse_from_their_names() {
    assert!(matches!(
        parse("go day-detail"),
        ReplCommand::Go {
            screen: Screen::DayDetail
        }
    ));
    match parse("day 2024-03-05") {
        ReplCommand::Day { date } => {
            assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).expect("date"))
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn intensity_outside_range_is_rejected() {
    assert!(ReplLine::try_parse_from(["intensity", "11"]).is_err());
    assert!(ReplLine::try_parse_from(["intensity", "0"]).is_err());
    assert!(matches!(
        parse("intensity 10"),
        ReplCommand::Intensity { value: 10 }
    ));
}

#[test]
fn keys_parse_named_and_single_characters() {
    assert!(matches!(
        parse("key caps"),
        ReplCommand::Key {
            key: KeyArg(KeyInput::ToggleCaps)
        }
    ));
    assert!(matches!(
        parse("key @"),
        ReplCommand::Key {
            key: KeyArg(KeyInput::Char('@'))
        }
    ));
    assert!(ReplLine::try_parse_from(["key", "tab"]).is_err());
}

#[test]
fn unknown_field_is_a_parse_error() {
    assert!(ReplLine::try_parse_from(["open", "shoe_size"]).is_err());
}
