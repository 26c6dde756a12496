use flex_settings::{AppColor, Color, MemoryStore, SettingsModel, SharedSettings};
use flex_settings_db::SettingsStore;

#[test]
fn shared_handle_saves_through_one_model() {
    let store = MemoryStore::new();
    let shared = SharedSettings::open(&store);

    shared.update(|s| s.markers_enabled = true);
    assert_eq!(store.get_bool("markersEnabled").unwrap(), Some(false));

    shared.save();
    assert_eq!(store.get_bool("markersEnabled").unwrap(), Some(true));
}

#[test]
fn lock_exposes_facade_operations() {
    let store = MemoryStore::new();
    let shared = SharedSettings::new(SettingsModel::open(&store));

    {
        let mut model = shared.lock();
        model.set_color(AppColor::TnfDeep, Color::WHITE);
        model.reset_all();
    }

    let reopened = SettingsModel::open(&store);
    assert_eq!(reopened.color(AppColor::TnfDeep), Color::YELLOW.opacity(0.2));
}
