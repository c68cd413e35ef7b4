use std::sync::OnceLock;

use crate::{Dataset, DatasetId, record};

pub fn dataset(id: DatasetId) -> &'static Dataset {
    match id {
        DatasetId::TechAdoption => tech_adoption(),
        DatasetId::GlobalCarbon => global_carbon(),
        DatasetId::StartupMetrics => startup_metrics(),
        DatasetId::IndustryDistribution => industry_distribution(),
    }
}

/// Adoption percentage per technology, 2018-2024.
pub fn tech_adoption() -> &'static Dataset {
    static DATA: OnceLock<Dataset> = OnceLock::new();
    DATA.get_or_init(|| {
        Dataset::new(
            DatasetId::TechAdoption,
            vec![
                record! { year: 2018, ai: 23, cloud: 67, blockchain: 12, iot: 34, ar: 8 },
                record! { year: 2019, ai: 31, cloud: 74, blockchain: 18, iot: 42, ar: 14 },
                record! { year: 2020, ai: 45, cloud: 82, blockchain: 24, iot: 51, ar: 22 },
                record! { year: 2021, ai: 58, cloud: 88, blockchain: 31, iot: 63, ar: 29 },
                record! { year: 2022, ai: 72, cloud: 92, blockchain: 38, iot: 71, ar: 38 },
                record! { year: 2023, ai: 84, cloud: 95, blockchain: 45, iot: 79, ar: 47 },
                record! { year: 2024, ai: 91, cloud: 97, blockchain: 52, iot: 85, ar: 56 },
            ],
        )
    })
}

/// Emissions in MT CO2, population in millions, renewable share in percent.
pub fn global_carbon() -> &'static Dataset {
    static DATA: OnceLock<Dataset> = OnceLock::new();
    DATA.get_or_init(|| {
        Dataset::new(
            DatasetId::GlobalCarbon,
            vec![
                record! { region: "North America", emissions: 5200, population: 580, renewable: 28 },
                record! { region: "Europe", emissions: 3800, population: 750, renewable: 42 },
                record! { region: "Asia", emissions: 16500, population: 4600, renewable: 18 },
                record! { region: "South America", emissions: 1200, population: 430, renewable: 65 },
                record! { region: "Africa", emissions: 1400, population: 1340, renewable: 23 },
                record! { region: "Oceania", emissions: 550, population: 43, renewable: 35 },
            ],
        )
    })
}

pub fn startup_metrics() -> &'static Dataset {
    static DATA: OnceLock<Dataset> = OnceLock::new();
    DATA.get_or_init(|| {
        Dataset::new(
            DatasetId::StartupMetrics,
            vec![
                record! { month: "Jan", users: 1200, revenue: 45000, engagement: 68 },
                record! { month: "Feb", users: 1850, revenue: 62000, engagement: 72 },
                record! { month: "Mar", users: 2400, revenue: 78000, engagement: 75 },
                record! { month: "Apr", users: 3100, revenue: 95000, engagement: 79 },
                record! { month: "May", users: 4200, revenue: 125000, engagement: 82 },
                record! { month: "Jun", users: 5800, revenue: 168000, engagement: 85 },
                record! { month: "Jul", users: 7500, revenue: 210000, engagement: 87 },
                record! { month: "Aug", users: 9200, revenue: 265000, engagement: 89 },
                record! { month: "Sep", users: 11500, revenue: 320000, engagement: 91 },
                record! { month: "Oct", users: 14200, revenue: 385000, engagement: 92 },
                record! { month: "Nov", users: 17800, revenue: 465000, engagement: 94 },
                record! { month: "Dec", users: 22000, revenue: 550000, engagement: 95 },
            ],
        )
    })
}

pub fn industry_distribution() -> &'static Dataset {
    static DATA: OnceLock<Dataset> = OnceLock::new();
    DATA.get_or_init(|| {
        Dataset::new(
            DatasetId::IndustryDistribution,
            vec![
                record! { name: "Technology", value: 32, color: "#3b82f6" },
                record! { name: "Healthcare", value: 18, color: "#10b981" },
                record! { name: "Finance", value: 22, color: "#8b5cf6" },
                record! { name: "Retail", value: 15, color: "#f59e0b" },
                record! { name: "Manufacturing", value: 13, color: "#ec4899" },
            ],
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasets_have_expected_shapes() {
        assert_eq!(tech_adoption().len(), 7);
        assert_eq!(global_carbon().len(), 6);
        assert_eq!(startup_metrics().len(), 12);
        assert_eq!(industry_distribution().len(), 5);

        let years: Vec<_> = tech_adoption()
            .records()
            .iter()
            .filter_map(|r| r.number("year"))
            .collect();
        assert_eq!(years.first(), Some(&2018.0));
        assert_eq!(years.last(), Some(&2024.0));
    }

    #[test]
    fn lookup_returns_the_shared_instance() {
        for id in [
            DatasetId::TechAdoption,
            DatasetId::GlobalCarbon,
            DatasetId::StartupMetrics,
            DatasetId::IndustryDistribution,
        ] {
            let a = dataset(id);
            let b = dataset(id);
            assert!(std::ptr::eq(a, b));
            assert_eq!(a.id(), id);
        }
    }

    #[test]
    fn industry_shares_sum_to_one_hundred() {
        let total: f64 = industry_distribution()
            .records()
            .iter()
            .filter_map(|r| r.number("value"))
            .sum();
        assert_eq!(total, 100.0);
    }
}
