mod assets;
pub mod components;
mod dashboard;
pub mod logging;

pub use assets::{DashboardAssets, application_with_assets};
pub use dashboard::{DashboardView, launch_dashboard};
