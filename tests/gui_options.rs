// tests/gui_options.rs

use dairyscan::config::state::GuiState;
use dairyscan::gui::app::native_options;
use eframe::egui::vec2;

#[test]
fn window_size_comes_from_gui_state() {
    let options = native_options(&GuiState::default());
    assert_eq!(options.viewport.inner_size, Some(vec2(1100.0, 700.0)));

    let custom = GuiState {
        window_w: 800,
        window_h: 600,
        ..GuiState::default()
    };
    let options = native_options(&custom);
    assert_eq!(options.viewport.inner_size, Some(vec2(800.0, 600.0)));
}
