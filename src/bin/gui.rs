// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use dairyscan::config::state::GuiState;
use dairyscan::gui;

fn main() {
    let options = gui::app::native_options(&GuiState::default());

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
