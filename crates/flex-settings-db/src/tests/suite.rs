use super::test_db;
use crate::{DbError, SettingsStore, StoredKind, StoredValue, SuiteStore};

#[test]
fn typed_reads_match_stored_kind() {
    let store = SuiteStore::new(test_db(), "group.test");
    store.set("isGui", &true.into()).unwrap();
    store.set("mtuValue", &1300i64.into()).unwrap();
    store.set("remoteRxAudioVolume", &0.5f64.into()).unwrap();
    store.set("stationName", &"Sdr6000".into()).unwrap();
    store.set("guiDefault", &vec![1u8, 2, 3].into()).unwrap();

    assert_eq!(store.get_bool("isGui").unwrap(), Some(true));
    assert_eq!(store.get_int("mtuValue").unwrap(), Some(1300));
    assert_eq!(store.get_float("remoteRxAudioVolume").unwrap(), Some(0.5));
    assert_eq!(store.get_string("stationName").unwrap().as_deref(), Some("Sdr6000"));
    assert_eq!(store.get_blob("guiDefault").unwrap(), Some(vec![1, 2, 3]));
}

#[test]
fn missing_key_reads_as_none() {
    let store = SuiteStore::new(test_db(), "group.test");
    assert_eq!(store.get_bool("initialized").unwrap(), None);
    assert_eq!(store.get_blob("guiDefault").unwrap(), None);
}

#[test]
fn wrong_kind_is_type_mismatch() {
    let store = SuiteStore::new(test_db(), "group.test");
    store.set("mtuValue", &"1300".into()).unwrap();

    match store.get_int("mtuValue") {
        Err(DbError::TypeMismatch { key, expected, found }) => {
            assert_eq!(key, "mtuValue");
            assert_eq!(expected, StoredKind::Int);
            assert_eq!(found, StoredKind::Text);
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
}

#[test]
fn float_read_accepts_integer() {
    let store = SuiteStore::new(test_db(), "group.test");
    store.set("logViewerFontSize", &StoredValue::Int(12)).unwrap();
    assert_eq!(store.get_float("logViewerFontSize").unwrap(), Some(12.0));
}

#[test]
fn clones_share_the_same_table() {
    let store = SuiteStore::new(test_db(), "group.test");
    let other = store.clone();
    store.set("stationName", &"A".into()).unwrap();
    assert_eq!(other.get_string("stationName").unwrap().as_deref(), Some("A"));

    other.remove("stationName").unwrap();
    assert_eq!(store.get("stationName").unwrap(), None);
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn clear_only_touches_own_suite() {
    let db = test_db();
    let mine = SuiteStore::new(db.clone(), "group.mine");
    let theirs = SuiteStore::new(db, "group.theirs");
    mine.set("marker", &"x".into()).unwrap();
    theirs.set("marker", &"y".into()).unwrap();

    assert_eq!(mine.clear().unwrap(), 1);
    assert!(mine.keys().unwrap().is_empty());
    assert_eq!(theirs.keys().unwrap(), vec!["marker"]);
}
