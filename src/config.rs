/// Inner drawing margins of a chart, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Tunables for one flavour of the series chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    pub margins: Margins,
    /// Multiplier applied to the series minimum before niceing.
    pub low_factor: f64,
    /// Multiplier applied to the series maximum before niceing.
    pub high_factor: f64,
    /// Y-domain used when every value is zero.
    pub zero_domain: (f64, f64),
    /// Number of horizontal grid rows requested from the tick generator.
    pub grid_ticks: usize,
    /// Tick count the y-domain is niced against.
    pub nice_ticks: usize,
}

impl ChartConfig {
    /// Revenue / events chart on the light overview.
    pub const OVERVIEW: ChartConfig = ChartConfig {
        margins: Margins {
            top: 10.0,
            right: 8.0,
            bottom: 28.0,
            left: 4.0,
        },
        low_factor: 0.8,
        high_factor: 1.1,
        zero_domain: (0.0, 1_000.0),
        grid_ticks: 4,
        nice_ticks: 10,
    };

    /// Per-customer usage chart.
    pub const USAGE: ChartConfig = ChartConfig {
        margins: Margins {
            top: 12.0,
            right: 8.0,
            bottom: 28.0,
            left: 4.0,
        },
        low_factor: 0.75,
        high_factor: 1.12,
        ..ChartConfig::OVERVIEW
    };

    /// Chart on the terminal overview.
    pub const TERMINAL: ChartConfig = ChartConfig {
        margins: Margins {
            top: 14.0,
            right: 10.0,
            bottom: 30.0,
            left: 6.0,
        },
        low_factor: 0.72,
        high_factor: 1.12,
        ..ChartConfig::OVERVIEW
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Customer shown when a detail route names an unknown id.
    pub default_customer_id: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_customer_id: "1".to_string(),
        }
    }
}
