use wasm_bindgen::prelude::*;
use phone_drop::*;

pub mod game;
pub mod layout;

use game::PhoneEntry;
use layout::EntryLayout;

phone_drop_web::export_game!(PhoneEntry, "phone-entry");

/// Start the widget with a JSON layout. An invalid document falls back to
/// the default layout.
#[wasm_bindgen]
pub fn game_init_with_layout(json: &str) {
    let _ = console_log::init_with_level(log::Level::Info);
    let layout = EntryLayout::from_json(json).unwrap_or_else(|e| {
        log::warn!("layout rejected, using defaults: {}", e);
        EntryLayout::default()
    });
    install_runner(PhoneEntry::with_layout(layout));
}

/// Current entry, `_` for every Empty slot.
#[wasm_bindgen]
pub fn get_entry_sequence() -> String {
    with_runner(|r| r.game().entry_text())
}

#[wasm_bindgen]
pub fn get_slot_count() -> u32 {
    with_runner(|r| r.game().slots().len() as u32)
}

#[wasm_bindgen]
pub fn is_entry_complete() -> bool {
    with_runner(|r| r.game().is_complete())
}
