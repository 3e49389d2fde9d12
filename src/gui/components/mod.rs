// src/gui/components/mod.rs

pub mod file_card;
pub mod history_panel;
pub mod metric_bar;
pub mod notice;
pub mod sample_popup;
pub mod tabs;
