mod charts;
mod interactions;
mod overlay;
mod render;
mod sections;
mod state;
mod widgets;

pub use state::DashboardView;
