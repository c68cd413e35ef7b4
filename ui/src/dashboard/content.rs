use viz_core::TabId;

pub(crate) const TITLE: &str = "DataViz Studio";
pub(crate) const TAGLINE: &str = "Interactive Data Storytelling";
pub(crate) const AUTHOR: &str = "Srujan Konda";
pub(crate) const FOOTER: &str = "© 2024 DataViz Studio by Srujan Konda. Built with Rust & GPUI.";
pub(crate) const FOOTER_SUBTITLE: &str = "Interactive Data Visualization Portfolio";

pub(crate) struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub color: u32,
    /// Growth badge shown in the card corner.
    pub badge: Option<&'static str>,
}

pub(crate) struct Insight {
    pub color: u32,
    pub text: &'static str,
}

pub(crate) struct Principle {
    pub title: &'static str,
    pub text: &'static str,
    pub color: u32,
}

pub(crate) struct Intro {
    pub heading: &'static str,
    pub subtitle: &'static str,
}

pub(crate) fn intro(tab: TabId) -> Intro {
    let (heading, subtitle) = match tab {
        TabId::Overview => (
            "Data Visualization Portfolio",
            "Transforming complex data into compelling visual narratives",
        ),
        TabId::TechTrends => (
            "Technology Adoption Trends",
            "Tracking the rise of emerging technologies from 2018-2024",
        ),
        TabId::GlobalImpact => (
            "Global Carbon Emissions Analysis",
            "Regional emissions, population, and renewable energy adoption",
        ),
        TabId::GrowthAnalytics => (
            "Startup Growth Analytics Dashboard",
            "Monthly user growth, revenue, and engagement metrics",
        ),
        TabId::About => (
            "About This Portfolio",
            "How the dashboard is put together",
        ),
    };
    Intro { heading, subtitle }
}

pub(crate) const OVERVIEW_STATS: &[StatCard] = &[
    StatCard {
        label: "Visualizations",
        value: "25+",
        icon: "icons/bar-chart.svg",
        color: 0x3b82f6,
        badge: None,
    },
    StatCard {
        label: "Technologies",
        value: "12",
        icon: "icons/code.svg",
        color: 0x8b5cf6,
        badge: None,
    },
    StatCard {
        label: "Data Points",
        value: "1M+",
        icon: "icons/database.svg",
        color: 0xec4899,
        badge: None,
    },
    StatCard {
        label: "Projects",
        value: "8",
        icon: "icons/zap.svg",
        color: 0x10b981,
        badge: None,
    },
];

pub(crate) const GROWTH_STATS: &[StatCard] = &[
    StatCard {
        label: "Total Users",
        value: "22,000",
        icon: "icons/users.svg",
        color: 0x3b82f6,
        badge: Some("+24%"),
    },
    StatCard {
        label: "Monthly Revenue",
        value: "$550K",
        icon: "icons/trending-up.svg",
        color: 0x10b981,
        badge: Some("+18%"),
    },
    StatCard {
        label: "Engagement Rate",
        value: "95%",
        icon: "icons/zap.svg",
        color: 0x8b5cf6,
        badge: Some("+3%"),
    },
];

pub(crate) const TECH_INSIGHTS: &[Insight] = &[
    Insight {
        color: 0x60a5fa,
        text: "AI/ML adoption grew 295% from 2018 to 2024, showing exponential growth",
    },
    Insight {
        color: 0x4ade80,
        text: "Cloud computing reached 97% adoption, becoming ubiquitous across industries",
    },
    Insight {
        color: 0xfacc15,
        text: "Blockchain adoption tripled, driven by enterprise use cases beyond cryptocurrency",
    },
    Insight {
        color: 0xc084fc,
        text: "AR/VR showed steady growth with breakthrough applications in 2023-2024",
    },
];

pub(crate) const ABOUT_PARAGRAPH: &str = "This interactive data visualization portfolio \
    demonstrates data storytelling and visualization design. Each tab binds a small \
    dataset to a chart description and paints it natively, turning tables of numbers \
    into visual narratives.";

pub(crate) const TECHNOLOGIES: &[&str] = &[
    "Rust",
    "GPUI",
    "gpui-component",
    "tracing",
    "clap",
    "thiserror",
];

pub(crate) const FEATURES: &[&str] = &[
    "Multiple interactive visualization types: line charts, bar charts, scatter plots, pie charts, and area charts",
    "Window-sized layout with a scrollable body that keeps every chart readable",
    "Custom tooltips and interactive elements that enhance data exploration",
    "Dark theme with accent gradients and hover feedback on every control",
    "Data storytelling across multiple domains: technology trends, environmental impact, and business analytics",
];

pub(crate) const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Clarity",
        text: "Every visualization prioritizes clear communication of insights over complexity",
        color: 0x3b82f6,
    },
    Principle {
        title: "Interactivity",
        text: "Users can explore data through hover effects and tooltips",
        color: 0x8b5cf6,
    },
    Principle {
        title: "Aesthetics",
        text: "Beautiful design that engages users while maintaining professional standards",
        color: 0x10b981,
    },
    Principle {
        title: "Performance",
        text: "Native rendering and small static datasets for a smooth experience",
        color: 0xec4899,
    },
];

pub(crate) const CREATOR_BLURB: &str =
    "Computer Science Graduate Student at USC | Full-Stack Developer | Data Visualization Specialist";
pub(crate) const CREATOR_SKILLS: &[&str] = &["Java", "Python", "React", "Node.js"];
