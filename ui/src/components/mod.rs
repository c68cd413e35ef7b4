pub mod button_effect;
pub mod legend;
pub mod tab_button;
