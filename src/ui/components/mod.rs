pub mod app;
pub mod generate_button;
pub mod mood_card;
pub mod spinner;
pub mod text_panel;
