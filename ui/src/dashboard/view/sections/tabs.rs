use gpui::{Context, Div, MouseButton, MouseDownEvent, div, prelude::*, rgb};
use viz_core::catalog;

use crate::components::tab_button::tab_button;
use crate::dashboard::view::DashboardView;

pub(crate) fn tab_bar(view: &DashboardView, cx: &mut Context<DashboardView>) -> Div {
    let active = view.state.active_tab();
    let buttons = catalog::tabs().iter().map(|tab| {
        let id = tab.id.as_str();
        let on_select = cx.listener(
            move |this: &mut DashboardView, _: &MouseDownEvent, _, cx| {
                this.select_tab(id, cx);
            },
        );
        tab_button(
            id,
            tab.label,
            view.config.asset_url(tab.icon),
            tab.id == active,
        )
        .debug_selector(move || format!("tab-{id}"))
        .on_mouse_down(MouseButton::Left, on_select)
    });

    div()
        .w_full()
        .px_6()
        .py_2()
        .bg(rgb(0x0b1220))
        .border_b_1()
        .border_color(rgb(0x1e293b))
        .flex()
        .gap_1()
        .children(buttons)
}

#[cfg(test)]
mod tests {
    use gpui::{Modifiers, TestAppContext};
    use viz_core::{AppConfig, TabId};

    use crate::dashboard::view::DashboardView;

    #[gpui::test]
    async fn clicking_a_tab_switches_the_active_tab(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let (dashboard, cx) =
            cx.add_window_view(|_, cx| DashboardView::new(AppConfig::default(), cx));
        cx.refresh().expect("refresh");
        cx.run_until_parked();
        assert_eq!(
            dashboard.update(cx, |view, _| view.active_tab()),
            TabId::Overview
        );

        for (selector, expected) in [
            ("tab-global-impact", TabId::GlobalImpact),
            ("tab-about", TabId::About),
            ("tab-tech-trends", TabId::TechTrends),
            ("tab-growth-analytics", TabId::GrowthAnalytics),
            ("tab-overview", TabId::Overview),
        ] {
            let bounds = cx.debug_bounds(selector).expect(selector);
            cx.simulate_click(bounds.center(), Modifiers::none());
            cx.run_until_parked();
            assert_eq!(dashboard.update(cx, |view, _| view.active_tab()), expected);
        }
    }

    #[gpui::test]
    async fn hovering_a_tab_repaints_and_keeps_it_clickable(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let (dashboard, cx) =
            cx.add_window_view(|_, cx| DashboardView::new(AppConfig::default(), cx));
        cx.refresh().expect("refresh");
        cx.run_until_parked();

        let about = cx.debug_bounds("tab-about").expect("tab-about");
        let overview = cx.debug_bounds("tab-overview").expect("tab-overview");
        cx.simulate_mouse_move(about.center(), None, Modifiers::none());
        cx.run_until_parked();
        cx.simulate_mouse_move(overview.center(), None, Modifiers::none());
        cx.run_until_parked();
        assert_eq!(
            dashboard.update(cx, |view, _| view.active_tab()),
            TabId::Overview
        );

        cx.simulate_click(about.center(), Modifiers::none());
        cx.run_until_parked();
        assert_eq!(dashboard.update(cx, |view, _| view.active_tab()), TabId::About);
    }

    #[gpui::test]
    async fn unknown_tab_ids_leave_the_dashboard_untouched(cx: &TestAppContext) {
        let mut cx = cx.clone();
        cx.update(gpui_component::theme::init);
        let config = AppConfig {
            initial_tab: TabId::GrowthAnalytics,
            ..AppConfig::default()
        };
        let (dashboard, cx) =
            cx.add_window_view(move |_, cx| DashboardView::new(config.clone(), cx));
        cx.run_until_parked();

        let accepted = dashboard.update(cx, |view, cx| view.select_tab("pricing", cx));
        assert!(!accepted);
        assert_eq!(
            dashboard.update(cx, |view, _| view.active_tab()),
            TabId::GrowthAnalytics
        );
    }
}
