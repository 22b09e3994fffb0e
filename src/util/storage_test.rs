#![cfg(not(feature = "hydrate"))]

use std::collections::BTreeMap;

use super::*;
use crate::types::{FadingStroke, User, UserStatus};

// =============================================================
// Non-browser fallbacks
// =============================================================

#[test]
fn load_returns_default_without_browser_storage() {
    assert_eq!(load("fadewall_nickname", "anon".to_owned()), "anon");
    assert_eq!(load("fadewall_brush_size", 4.0), 4.0);
}

#[test]
fn save_is_noop_but_callable() {
    save("fadewall_nickname", &"ada");
    save("fadewall_brush_size", &6.5);
}

// =============================================================
// Stored-text codec
// =============================================================

#[test]
fn codec_round_trips_a_stroke() {
    let stroke = FadingStroke {
        x0: 1.0,
        y0: 2.0,
        x1: 3.0,
        y1: 4.0,
        color: "#222222".to_owned(),
        size: 3.0,
        start_time: 500.0,
        duration: 1_500.0,
    };
    let raw = encode(&stroke).unwrap();
    assert_eq!(decode::<FadingStroke>(&raw), Some(stroke));
}

#[test]
fn codec_round_trips_a_user() {
    let user = User {
        id: "peer-3".to_owned(),
        nickname: "bo".to_owned(),
        color: "#4b8bd9".to_owned(),
        status: UserStatus::Online,
    };
    let raw = encode(&user).unwrap();
    assert_eq!(decode::<User>(&raw), Some(user));
}

#[test]
fn codec_round_trips_nested_collections() {
    let mut prefs = BTreeMap::new();
    prefs.insert("sizes".to_owned(), vec![2.0, 4.0, 8.0]);
    prefs.insert("recent".to_owned(), vec![6.5]);
    let raw = encode(&prefs).unwrap();
    assert_eq!(decode::<BTreeMap<String, Vec<f64>>>(&raw), Some(prefs));
}

#[test]
fn decode_rejects_malformed_content() {
    assert_eq!(decode::<User>("not json"), None);
    assert_eq!(decode::<Vec<f64>>("{\"truncated\":"), None);
    assert_eq!(decode::<f64>("\"a string\""), None);
}
