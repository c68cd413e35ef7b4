use gpui::{Context, Div, FontWeight, div, prelude::*, px, rgb};
use gpui_component::scroll::ScrollableElement;
use viz_core::format::format_raw;
use viz_core::{BoundChart, BoundData, TabId};

use crate::dashboard::content::{
    self, ABOUT_PARAGRAPH, CREATOR_BLURB, CREATOR_SKILLS, FEATURES, GROWTH_STATS, Intro,
    OVERVIEW_STATS, PRINCIPLES, StatCard, TECH_INSIGHTS, TECHNOLOGIES,
};
use crate::dashboard::view::DashboardView;
use crate::dashboard::view::widgets::{card, card_title, check_item, chip, insight_list, stat_card};

const MAIN_CHART_HEIGHT: f32 = 320.0;
const SIDE_CHART_HEIGHT: f32 = 220.0;

type Charts = std::vec::IntoIter<BoundChart<'static>>;

pub(crate) fn body(view: &DashboardView, cx: &mut Context<DashboardView>) -> Div {
    let tab = view.state.active_tab();
    let intro = content::intro(tab);
    let mut charts = view.state.bound_charts().into_iter();
    let content = match tab {
        TabId::Overview => overview(view, &mut charts, cx),
        TabId::TechTrends => tech_trends(view, &intro, &mut charts, cx),
        TabId::GlobalImpact => global_impact(view, &intro, &mut charts, cx),
        TabId::GrowthAnalytics => growth_analytics(view, &mut charts, cx),
        TabId::About => about(),
    };

    let page = div()
        .w_full()
        .px_8()
        .py_8()
        .flex()
        .flex_col()
        .gap_8()
        .child(intro_block(&intro, tab == TabId::Overview))
        .child(content);

    div()
        .flex_1()
        .min_h(px(0.))
        .w_full()
        .child(div().size_full().child(page).overflow_y_scrollbar())
}

fn intro_block(intro: &Intro, centered: bool) -> Div {
    let block = div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child(intro.heading),
        )
        .child(div().text_lg().text_color(rgb(0xcbd5e1)).child(intro.subtitle));
    if centered { block.items_center() } else { block }
}

/// Card around the next chart; the title is omitted when it repeats the page heading.
fn chart_card(
    view: &DashboardView,
    chart: Option<BoundChart<'static>>,
    heading: Option<&str>,
    height: f32,
    cx: &mut Context<DashboardView>,
) -> Option<Div> {
    let chart = chart?;
    let title = chart.config.title;
    let mut card = card();
    if heading != Some(title) {
        card = card.child(card_title(title));
    }
    Some(card.child(view.chart_panel(chart, height, cx)))
}

fn stat_row(view: &DashboardView, stats: &[StatCard]) -> Div {
    div().flex().gap_6().children(
        stats
            .iter()
            .map(|stat| stat_card(stat, view.config.asset_url(stat.icon))),
    )
}

fn two_columns(left: impl IntoElement, right: impl IntoElement) -> Div {
    div()
        .flex()
        .gap_6()
        .child(div().flex_1().child(left))
        .child(div().flex_1().child(right))
}

fn overview(view: &DashboardView, charts: &mut Charts, cx: &mut Context<DashboardView>) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_8()
        .child(stat_row(view, OVERVIEW_STATS))
        .children(chart_card(view, charts.next(), None, 300.0, cx))
}

fn tech_trends(
    view: &DashboardView,
    intro: &Intro,
    charts: &mut Charts,
    cx: &mut Context<DashboardView>,
) -> Div {
    let trend = chart_card(view, charts.next(), Some(intro.heading), MAIN_CHART_HEIGHT, cx);
    let insights = card()
        .child(card_title("Key Insights"))
        .child(insight_list(TECH_INSIGHTS));
    let comparison = chart_card(view, charts.next(), None, SIDE_CHART_HEIGHT, cx);
    div()
        .flex()
        .flex_col()
        .gap_6()
        .children(trend)
        .child(two_columns(insights, comparison.unwrap_or_else(div)))
}

fn global_impact(
    view: &DashboardView,
    intro: &Intro,
    charts: &mut Charts,
    cx: &mut Context<DashboardView>,
) -> Div {
    let scatter = charts.next();
    let breakdown = card()
        .child(card_title("Regional Breakdown"))
        .children(scatter.as_ref().map(regional_breakdown));
    let scatter = chart_card(view, scatter, Some(intro.heading), MAIN_CHART_HEIGHT, cx);
    let renewable = chart_card(view, charts.next(), None, SIDE_CHART_HEIGHT, cx);
    div()
        .flex()
        .flex_col()
        .gap_6()
        .children(scatter)
        .child(two_columns(renewable.unwrap_or_else(div), breakdown))
}

/// Per-region summary built from the scatter points, so only bound fields are shown.
fn regional_breakdown(chart: &BoundChart) -> Div {
    let BoundData::Scatter {
        points,
        x,
        y,
        color_by,
    } = &chart.data
    else {
        return div();
    };
    div().flex().flex_col().gap_4().children(points.iter().map(|point| {
        let renewable = point
            .color_value
            .map(|v| format!("{}{} renewable", format_raw(v), color_by.suffix))
            .unwrap_or_default();
        div()
            .border_l_4()
            .border_color(rgb(0x3b82f6))
            .pl_4()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .justify_between()
                    .items_center()
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(rgb(0xffffff))
                            .child(point.label.clone()),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x9ca3af))
                            .child(format!("{}{} CO₂", format_raw(point.y), y.suffix)),
                    ),
            )
            .child(
                div()
                    .flex()
                    .justify_between()
                    .text_sm()
                    .text_color(rgb(0x9ca3af))
                    .child(format!("{}{} people", format_raw(point.x), x.suffix))
                    .child(div().text_color(rgb(0x4ade80)).child(renewable)),
            )
    }))
}

fn growth_analytics(
    view: &DashboardView,
    charts: &mut Charts,
    cx: &mut Context<DashboardView>,
) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_8()
        .child(stat_row(view, GROWTH_STATS))
        .children(chart_card(view, charts.next(), None, MAIN_CHART_HEIGHT, cx))
        .children(chart_card(view, charts.next(), None, SIDE_CHART_HEIGHT, cx))
}

fn about() -> Div {
    let technologies = TECHNOLOGIES.iter().map(|tech| {
        div()
            .w(px(180.))
            .p_4()
            .rounded_lg()
            .bg(rgb(0x0f172a))
            .flex()
            .justify_center()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(rgb(0xffffff))
            .child(*tech)
    });
    let technologies = div().flex().flex_wrap().gap_4().children(technologies);

    let principles = PRINCIPLES.iter().map(|p| {
        div()
            .w(px(360.))
            .p_6()
            .rounded_lg()
            .border_l_4()
            .border_color(rgb(p.color))
            .bg(rgb(0x0f172a))
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .font_weight(FontWeight::BOLD)
                    .text_color(rgb(0xffffff))
                    .child(p.title),
            )
            .child(div().text_sm().text_color(rgb(0xcbd5e1)).child(p.text))
    });
    let principles = div().flex().flex_wrap().gap_4().children(principles);

    let creator = div()
        .rounded_xl()
        .p_8()
        .bg(rgb(0x2563eb))
        .flex()
        .flex_col()
        .items_center()
        .gap_4()
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(rgb(0xffffff))
                .child(format!("Created by {}", content::AUTHOR)),
        )
        .child(div().text_color(rgb(0xdbeafe)).child(CREATOR_BLURB))
        .child(
            div()
                .flex()
                .gap_4()
                .children(CREATOR_SKILLS.iter().map(|skill| chip(*skill, 0xffffff33))),
        );

    div()
        .flex()
        .flex_col()
        .gap_8()
        .child(
            card()
                .child(div().text_lg().text_color(rgb(0xcbd5e1)).child(ABOUT_PARAGRAPH))
                .child(card_title("Technologies Used"))
                .child(technologies)
                .child(card_title("Key Features"))
                .child(
                    div()
                        .flex()
                        .flex_col()
                        .gap_3()
                        .children(FEATURES.iter().copied().map(check_item)),
                )
                .child(card_title("Design Principles"))
                .child(principles),
        )
        .child(creator)
}
