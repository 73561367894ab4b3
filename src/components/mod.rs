pub mod live_clock;
pub mod series_chart;
pub mod shell;
pub mod stat_card;
pub mod status_badge;
pub mod usage_bar;
pub mod usage_gauge;

pub use live_clock::LiveClock;
pub use series_chart::SeriesChart;
pub use shell::{Section, Shell};
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use usage_bar::UsageBar;
pub use usage_gauge::UsageGauge;
