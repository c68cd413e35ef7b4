mod bind;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod data;
mod error;
pub mod format;
pub mod palette;
mod state;
pub mod tooltip;
mod types;

pub use bind::{
    BoundChart, BoundData, BoundSeries, HIGHLIGHT_RADIUS, POINT_RADIUS, PieSlice, ScatterPoint,
    bind, bind_tab, project,
};
pub use catalog::{TabDescriptor, TabId};
pub use chart::{AxisSide, BarLayout, ChartConfig, ChartKind, ChartSpec};
pub use config::AppConfig;
pub use error::{CatalogError, ConfigError};
pub use state::{ANIMATION_PERIOD, DEFAULT_TICK_INTERVAL, Hover, ViewState};
pub use tooltip::{Tooltip, TooltipEntry, TooltipLine, format_tooltip};
pub use types::{Dataset, DatasetId, Record, Rgb, Value};
