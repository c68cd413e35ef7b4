mod canvas;
mod content;
mod view;

use gpui::{App, AppContext, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size};
use tracing::{error, info};
use viz_core::AppConfig;

use crate::assets::application_with_assets;
pub use view::DashboardView;

pub fn launch_dashboard(config: AppConfig) {
    application_with_assets(&config).run(move |cx: &mut App| {
        gpui_component::theme::init(cx);
        let bounds = Bounds::centered(
            None,
            size(px(config.window_width), px(config.window_height)),
            cx,
        );
        let view_config = config.clone();
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(content::TITLE.into()),
                    ..Default::default()
                }),
                focus: true,
                ..Default::default()
            },
            move |_, cx| cx.new(|cx| DashboardView::new(view_config.clone(), cx)),
        );
        match opened {
            Ok(_) => {
                info!(tab = %config.initial_tab, base_path = %config.base_path, "dashboard opened");
                cx.activate(true);
            }
            Err(err) => {
                error!(%err, "failed to open dashboard window");
                cx.quit();
            }
        }
    });
}
