use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::chart::{
    AxisSide, AxisSpec, BarLayout, ChartConfig, ChartSpec, ColorScale, RowSelection, SeriesSpec,
};
use crate::{CatalogError, ConfigError, Dataset, DatasetId, data, palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    TechTrends,
    GlobalImpact,
    GrowthAnalytics,
    About,
}

impl TabId {
    /// Declaration order; the first entry is the initial tab.
    pub const ALL: [TabId; 5] = [
        TabId::Overview,
        TabId::TechTrends,
        TabId::GlobalImpact,
        TabId::GrowthAnalytics,
        TabId::About,
    ];

    pub const fn first() -> TabId {
        Self::ALL[0]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::TechTrends => "tech-trends",
            TabId::GlobalImpact => "global-impact",
            TabId::GrowthAnalytics => "growth-analytics",
            TabId::About => "about",
        }
    }

    pub fn parse(raw: &str) -> Option<TabId> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == raw)
    }

    fn index(self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::TechTrends => 1,
            TabId::GlobalImpact => 2,
            TabId::GrowthAnalytics => 3,
            TabId::About => 4,
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        TabId::parse(raw.trim()).ok_or_else(|| ConfigError::UnknownTab {
            given: raw.to_string(),
            expected: TabId::ALL
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabDescriptor {
    pub id: TabId,
    pub label: &'static str,
    /// Asset name of the tab icon, relative to the asset base path.
    pub icon: &'static str,
    pub charts: Vec<ChartConfig>,
}

pub fn tabs() -> &'static [TabDescriptor] {
    static TABS: OnceLock<Vec<TabDescriptor>> = OnceLock::new();
    TABS.get_or_init(build_tabs)
}

pub fn descriptor(tab: TabId) -> &'static TabDescriptor {
    &tabs()[tab.index()]
}

/// Checks that every field a chart plots exists in every record it reads.
pub fn validate() -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for tab in tabs() {
        for chart in &tab.charts {
            if !seen.insert(chart.id) {
                return Err(CatalogError::DuplicateChart(chart.id));
            }
            check_chart(chart, data::dataset(chart.dataset))?;
        }
    }
    Ok(())
}

pub fn check_chart(chart: &ChartConfig, dataset: &Dataset) -> Result<(), CatalogError> {
    for field in chart.spec.fields() {
        if let Some(row) = dataset.records().iter().position(|r| !r.has(field)) {
            return Err(CatalogError::MissingField {
                chart: chart.id,
                dataset: dataset.id().as_str(),
                field,
                row,
            });
        }
    }
    Ok(())
}

fn tech_series() -> Vec<SeriesSpec> {
    vec![
        SeriesSpec::new("ai", "AI/ML", palette::PRIMARY),
        SeriesSpec::new("cloud", "Cloud Computing", palette::SUCCESS),
        SeriesSpec::new("blockchain", "Blockchain", palette::WARNING),
        SeriesSpec::new("iot", "IoT", palette::ACCENT),
        SeriesSpec::new("ar", "AR/VR", palette::SECONDARY),
    ]
}

fn build_tabs() -> Vec<TabDescriptor> {
    let tabs: Vec<TabDescriptor> = TabId::ALL.into_iter().map(build_tab).collect();
    debug_assert!(tabs.iter().enumerate().all(|(i, t)| t.id.index() == i));
    tabs
}

fn build_tab(id: TabId) -> TabDescriptor {
    match id {
        TabId::Overview => TabDescriptor {
            id,
            label: "Overview",
            icon: "icons/bar-chart.svg",
            charts: vec![ChartConfig {
                id: "industry-distribution",
                title: "Industry Distribution Analysis",
                dataset: DatasetId::IndustryDistribution,
                spec: ChartSpec::Pie {
                    name: "name",
                    value: "value",
                    color: Some("color"),
                },
            }],
        },
        TabId::TechTrends => TabDescriptor {
            id,
            label: "Tech Adoption",
            icon: "icons/trending-up.svg",
            charts: vec![
                ChartConfig {
                    id: "tech-adoption-trend",
                    title: "Technology Adoption Trends",
                    dataset: DatasetId::TechAdoption,
                    spec: ChartSpec::Line {
                        category: "year",
                        series: tech_series(),
                        domain: None,
                    },
                },
                ChartConfig {
                    id: "tech-comparison-latest",
                    title: "Technology Comparison 2024",
                    dataset: DatasetId::TechAdoption,
                    spec: ChartSpec::Bar {
                        category: "year",
                        series: {
                            let mut series = tech_series();
                            series[1].label = "Cloud";
                            series
                        },
                        layout: BarLayout::Horizontal,
                        rows: RowSelection::Last,
                    },
                },
            ],
        },
        TabId::GlobalImpact => TabDescriptor {
            id,
            label: "Global Impact",
            icon: "icons/globe.svg",
            charts: vec![
                ChartConfig {
                    id: "emissions-vs-population",
                    title: "Global Carbon Emissions Analysis",
                    dataset: DatasetId::GlobalCarbon,
                    spec: ChartSpec::Scatter {
                        label: "region",
                        x: AxisSpec {
                            field: "population",
                            title: "Population (Millions)",
                            name: "Population",
                            suffix: "M",
                        },
                        y: AxisSpec {
                            field: "emissions",
                            title: "CO₂ Emissions (MT)",
                            name: "Emissions",
                            suffix: " MT",
                        },
                        color_by: ColorScale {
                            field: "renewable",
                            name: "Renewable",
                            suffix: "%",
                            domain: (0.0, 100.0),
                            low: palette::WARNING,
                            high: palette::SUCCESS,
                        },
                        highlight: palette::ACCENT,
                    },
                },
                ChartConfig {
                    id: "renewable-by-region",
                    title: "Renewable Energy Adoption",
                    dataset: DatasetId::GlobalCarbon,
                    spec: ChartSpec::Bar {
                        category: "region",
                        series: vec![SeriesSpec::new(
                            "renewable",
                            "Renewable Energy %",
                            palette::SUCCESS,
                        )],
                        layout: BarLayout::Vertical,
                        rows: RowSelection::All,
                    },
                },
            ],
        },
        TabId::GrowthAnalytics => TabDescriptor {
            id,
            label: "Growth Analytics",
            icon: "icons/zap.svg",
            charts: vec![
                ChartConfig {
                    id: "users-and-revenue",
                    title: "User Growth & Revenue Trends",
                    dataset: DatasetId::StartupMetrics,
                    spec: ChartSpec::Area {
                        category: "month",
                        series: vec![
                            SeriesSpec::new("users", "Users", palette::PRIMARY),
                            SeriesSpec::new("revenue", "Revenue ($)", palette::SUCCESS)
                                .on_axis(AxisSide::Right),
                        ],
                    },
                },
                ChartConfig {
                    id: "engagement-rate",
                    title: "Engagement Rate Progression",
                    dataset: DatasetId::StartupMetrics,
                    spec: ChartSpec::Line {
                        category: "month",
                        series: vec![SeriesSpec::new(
                            "engagement",
                            "Engagement %",
                            palette::ACCENT,
                        )],
                        domain: Some((0.0, 100.0)),
                    },
                },
            ],
        },
        TabId::About => TabDescriptor {
            id,
            label: "About",
            icon: "icons/code.svg",
            charts: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChartKind, Record, record};

    #[test]
    fn tabs_follow_declaration_order() {
        let ids: Vec<_> = tabs().iter().map(|t| t.id).collect();
        assert_eq!(ids, TabId::ALL.to_vec());
        for tab in TabId::ALL {
            assert_eq!(descriptor(tab).id, tab);
        }
        assert_eq!(TabId::first(), TabId::Overview);
    }

    #[test]
    fn parse_round_trips_every_id() {
        for tab in TabId::ALL {
            assert_eq!(TabId::parse(tab.as_str()), Some(tab));
            assert_eq!(tab.as_str().parse::<TabId>(), Ok(tab));
        }
        assert_eq!(TabId::parse("Tech-Trends"), None);
        assert_eq!(TabId::parse(""), None);
    }

    #[test]
    fn from_str_lists_valid_ids_on_error() {
        let err = "pricing".parse::<TabId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown tab 'pricing' (expected one of: overview, tech-trends, global-impact, growth-analytics, about)"
        );
    }

    #[test]
    fn shipped_catalog_is_consistent() {
        validate().expect("catalog");
    }

    #[test]
    fn tab_chart_kinds() {
        let kinds = |tab: TabId| -> Vec<ChartKind> {
            descriptor(tab).charts.iter().map(|c| c.kind()).collect()
        };
        assert_eq!(kinds(TabId::Overview), vec![ChartKind::Pie]);
        assert_eq!(kinds(TabId::TechTrends), vec![ChartKind::Line, ChartKind::Bar]);
        assert_eq!(
            kinds(TabId::GlobalImpact),
            vec![ChartKind::Scatter, ChartKind::Bar]
        );
        assert_eq!(
            kinds(TabId::GrowthAnalytics),
            vec![ChartKind::Area, ChartKind::Line]
        );
        assert!(kinds(TabId::About).is_empty());
    }

    #[test]
    fn check_chart_reports_first_missing_field() {
        let chart = &descriptor(TabId::GlobalImpact).charts[1];
        let dataset = Dataset::new(
            DatasetId::GlobalCarbon,
            vec![
                record! { region: "Asia", renewable: 18 },
                record! { region: "Europe" },
            ],
        );
        assert_eq!(
            check_chart(chart, &dataset),
            Err(CatalogError::MissingField {
                chart: "renewable-by-region",
                dataset: "global-carbon",
                field: "renewable",
                row: 1,
            })
        );

        let empty = Dataset::new(DatasetId::GlobalCarbon, Vec::<Record>::new());
        assert_eq!(check_chart(chart, &empty), Ok(()));
    }
}
