use super::*;

fn sample_post() -> CommunityPost {
    serde_json::from_value(serde_json::json!({
        "_id": "p1",
        "user_id": "u1",
        "user_username": "alice",
        "mood": "happy",
        "activity_title": "Walk",
        "likes": 3,
        "stars": 0
    }))
    .expect("post")
}

#[test]
fn intensity_rejects_values_outside_scale() {
    assert!(Intensity::new(0).is_err());
    assert!(Intensity::new(11).is_err());
    assert_eq!(Intensity::new(7).expect("in range").get(), 7);
}

#[test]
fn intensity_deserialization_is_validated() {
    let ok: Intensity = serde_json::from_str("10").expect("valid");
    assert_eq!(ok.get(), 10);
    assert!(serde_json::from_str::<Intensity>("42").is_err());
    assert!(serde_json::from_str::<Intensity>("-1").is_err());
}

#[test]
fn mood_entry_reads_server_shape() {
    let entry: MoodEntry = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "mood": "sad",
        "intensity": 3,
        "note": "",
        "description": "rainy",
        "date": "2024-05-01T22:15:00Z"
    }))
    .expect("entry");
    assert_eq!(entry.id, MoodEntryId::new("m1"));
    assert_eq!(entry.intensity.get(), 3);
    assert_eq!(entry.description, "rainy");
}

fn entry_dated(date: &str) -> Result<MoodEntry, serde_json::Error> {
    serde_json::from_value(serde_json::json!({
        "id": "m1",
        "mood": "happy",
        "intensity": 5,
        "date": date
    }))
}

#[test]
fn entry_dates_accept_backend_timestamp_forms() {
    let expected: DateTime<Utc> = "2024-05-01T22:15:00Z".parse().expect("timestamp");

    let offset = entry_dated("2024-05-02T00:15:00+02:00").expect("rfc 3339");
    assert_eq!(offset.date, expected);

    let naive = entry_dated("2024-05-01T22:15:00").expect("naive iso");
    assert_eq!(naive.date, expected);

    let http_date = entry_dated("Wed, 01 May 2024 22:15:00 GMT").expect("http date");
    assert_eq!(http_date.date, expected);

    let spaced = entry_dated("2024-05-01 22:15:00").expect("space separated");
    assert_eq!(spaced.date, expected);
}

#[test]
fn naive_timestamps_keep_fractional_seconds() {
    let entry = entry_dated("2024-05-01T22:15:00.123456").expect("naive iso");
    assert_eq!(
        entry.date,
        "2024-05-01T22:15:00.123456Z"
            .parse::<DateTime<Utc>>()
            .expect("timestamp")
    );
}

#[test]
fn garbage_timestamps_are_rejected() {
    assert!(entry_dated("yesterday").is_err());
    assert!(parse_timestamp("").is_none());
}

#[test]
fn recommendation_maps_type_field() {
    let rec: Recommendation = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "type": "activity",
        "title": "Go outside",
        "description": "",
        "reasoning": "sunlight",
        "category": "outdoor"
    }))
    .expect("recommendation");
    assert_eq!(rec.kind, "activity");
}

#[test]
fn post_defaults_local_flags_to_unset() {
    let post = sample_post();
    assert!(!post.is_liked);
    assert!(!post.is_starred);
    assert_eq!(post.id.as_str(), "p1");
}

#[test]
fn double_toggle_restores_counters() {
    let original = sample_post();
    let mut post = original.clone();

    post.toggle_like();
    assert!(post.is_liked);
    assert_eq!(post.likes, 4);
    post.toggle_like();
    assert_eq!(post, original);

    post.toggle_star();
    assert!(post.is_starred);
    assert_eq!(post.stars, 1);
    post.toggle_star();
    assert_eq!(post, original);
}

#[test]
fn unknown_mood_labels_fall_back_to_happy() {
    assert_eq!(mood_emoji("anxious"), "😰");
    assert_eq!(mood_color("Excited"), "#FF6B6B");
    assert_eq!(mood_emoji("bored"), Mood::Happy.emoji());
    assert_eq!(mood_color(""), Mood::Happy.color());
}
