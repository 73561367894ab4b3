//! The two visual variants and their tag → style tables.
//!
//! Every table is an exhaustive `match`, so a new status or plan fails to
//! compile until it has a style in both themes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::shared::types::{
    Customer, CustomerStatus, InvoiceStatus, Plan, PricingModel, ProductStatus, TimelineTone,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Light card-based UI, served under `/variant1`.
    #[default]
    Light,
    /// Dark terminal UI, served under `/variant2`.
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme segment {:?}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.segment() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Shape drawn at each data point of a series chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
}

/// Colour band of a usage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    Normal,
    High,
    Critical,
}

impl UsageLevel {
    pub fn from_percent(pct: u32) -> Self {
        match pct {
            90.. => UsageLevel::Critical,
            70.. => UsageLevel::High,
            _ => UsageLevel::Normal,
        }
    }
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Terminal];

    pub fn segment(self) -> &'static str {
        match self {
            Theme::Light => "variant1",
            Theme::Terminal => "variant2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Terminal => "Terminal",
        }
    }

    pub fn marker(self) -> Marker {
        match self {
            Theme::Light => Marker::Circle,
            Theme::Terminal => Marker::Square,
        }
    }

    /// Chart on the home overview.
    pub fn overview_chart(self) -> ChartConfig {
        match self {
            Theme::Light => ChartConfig::OVERVIEW,
            Theme::Terminal => ChartConfig::TERMINAL,
        }
    }

    /// Chart on the customer detail screen.
    pub fn usage_chart(self) -> ChartConfig {
        ChartConfig::USAGE
    }

    pub fn page(self) -> &'static str {
        match self {
            Theme::Light => "min-h-screen bg-slate-50 text-slate-900 font-sans",
            Theme::Terminal => "min-h-screen bg-[#0A0A08] text-[#E8E8E2] font-mono",
        }
    }

    pub fn sidebar(self) -> &'static str {
        match self {
            Theme::Light => "w-56 shrink-0 border-r border-slate-200 bg-white px-3 py-4",
            Theme::Terminal => "w-[216px] shrink-0 border-r border-white/[0.05] bg-[#0C0C0A] px-3 py-4",
        }
    }

    pub fn nav_link(self, active: bool) -> &'static str {
        match (self, active) {
            (Theme::Light, true) => "block rounded-md px-2 py-1.5 text-sm bg-slate-100 text-slate-900 font-medium",
            (Theme::Light, false) => "block rounded-md px-2 py-1.5 text-sm text-slate-500 hover:bg-slate-50",
            (Theme::Terminal, true) => "block px-2 py-1 text-[11px] uppercase tracking-widest text-[#22C55E] bg-[#22C55E]/10",
            (Theme::Terminal, false) => "block px-2 py-1 text-[11px] uppercase tracking-widest text-[#8A8A84] hover:text-[#D4D4CE]",
        }
    }

    pub fn card(self) -> &'static str {
        match self {
            Theme::Light => "rounded-xl border border-slate-200 bg-white shadow-sm p-5",
            Theme::Terminal => "border border-white/[0.06] bg-[#111110] p-5",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Theme::Light => "text-xl font-semibold tracking-tight text-slate-900",
            Theme::Terminal => "text-[11px] font-bold uppercase tracking-[0.22em] text-[#22C55E]",
        }
    }

    pub fn label_text(self) -> &'static str {
        match self {
            Theme::Light => "text-xs font-medium text-slate-500",
            Theme::Terminal => "text-[9px] uppercase tracking-[0.20em] text-[#ACACAA]",
        }
    }

    pub fn value_text(self) -> &'static str {
        match self {
            Theme::Light => "text-2xl font-semibold tabular-nums text-slate-900",
            Theme::Terminal => "text-[22px] font-bold tabular-nums text-[#F0F0EA]",
        }
    }

    pub fn muted(self) -> &'static str {
        match self {
            Theme::Light => "text-xs text-slate-400",
            Theme::Terminal => "text-[10px] text-[#8A8A84]",
        }
    }

    pub fn input(self) -> &'static str {
        match self {
            Theme::Light => "w-64 rounded-md border border-slate-200 bg-white px-3 py-1.5 text-sm outline-none focus:border-slate-400",
            Theme::Terminal => "w-64 border border-white/[0.10] bg-[#0C0C0A] px-3 py-1.5 text-[11px] text-[#E8E8E2] outline-none focus:border-[#22C55E]/50",
        }
    }

    pub fn chip(self, active: bool) -> &'static str {
        match (self, active) {
            (Theme::Light, true) => "rounded-md px-2.5 py-1 text-xs font-medium bg-slate-900 text-white",
            (Theme::Light, false) => "rounded-md px-2.5 py-1 text-xs font-medium text-slate-500 hover:bg-slate-100",
            (Theme::Terminal, true) => "px-2.5 py-1 text-[10px] uppercase tracking-widest border border-[#22C55E]/40 text-[#22C55E]",
            (Theme::Terminal, false) => "px-2.5 py-1 text-[10px] uppercase tracking-widest border border-transparent text-[#8A8A84] hover:text-[#D4D4CE]",
        }
    }

    pub fn table_head(self) -> &'static str {
        match self {
            Theme::Light => "text-left text-xs font-medium text-slate-500 border-b border-slate-100",
            Theme::Terminal => "text-left text-[9px] uppercase tracking-[0.16em] text-[#8A8A84] border-b border-white/[0.05]",
        }
    }

    pub fn table_row(self) -> &'static str {
        match self {
            Theme::Light => "border-b border-slate-100 text-sm hover:bg-slate-50",
            Theme::Terminal => "border-b border-white/[0.03] text-[11px] hover:bg-white/[0.02]",
        }
    }

    pub fn customer_status(self, status: CustomerStatus) -> &'static str {
        match (self, status) {
            (Theme::Light, CustomerStatus::Active) => "bg-emerald-50 text-emerald-700 ring-1 ring-emerald-200",
            (Theme::Light, CustomerStatus::Trial) => "bg-sky-50 text-sky-700 ring-1 ring-sky-200",
            (Theme::Light, CustomerStatus::Inactive) => "bg-slate-100 text-slate-500 ring-1 ring-slate-200",
            (Theme::Terminal, CustomerStatus::Active) => "text-[#22C55E] border border-[#22C55E]/30",
            (Theme::Terminal, CustomerStatus::Trial) => "text-[#38BDF8] border border-[#38BDF8]/30",
            (Theme::Terminal, CustomerStatus::Inactive) => "text-[#8A8A84] border border-white/[0.10]",
        }
    }

    pub fn invoice_status(self, status: InvoiceStatus) -> &'static str {
        match (self, status) {
            (Theme::Light, InvoiceStatus::Paid) => "bg-emerald-50 text-emerald-700 ring-1 ring-emerald-200",
            (Theme::Light, InvoiceStatus::Issued) => "bg-amber-50 text-amber-700 ring-1 ring-amber-200",
            (Theme::Light, InvoiceStatus::Overdue) => "bg-red-50 text-red-700 ring-1 ring-red-200",
            (Theme::Light, InvoiceStatus::Void) => "bg-slate-100 text-slate-500 ring-1 ring-slate-200",
            (Theme::Terminal, InvoiceStatus::Paid) => "text-[#22C55E] border border-[#22C55E]/30",
            (Theme::Terminal, InvoiceStatus::Issued) => "text-[#F59E0B] border border-[#F59E0B]/30",
            (Theme::Terminal, InvoiceStatus::Overdue) => "text-[#EF4444] border border-[#EF4444]/30",
            (Theme::Terminal, InvoiceStatus::Void) => "text-[#8A8A84] border border-white/[0.10]",
        }
    }

    /// Fill of an invoice status segment in the stacked status bar.
    pub fn invoice_bar(self, status: InvoiceStatus) -> &'static str {
        match status {
            InvoiceStatus::Paid => "bg-emerald-500",
            InvoiceStatus::Issued => "bg-amber-400",
            InvoiceStatus::Overdue => "bg-red-500",
            InvoiceStatus::Void if self == Theme::Light => "bg-slate-300",
            InvoiceStatus::Void => "bg-white/10",
        }
    }

    pub fn product_status(self, status: ProductStatus) -> &'static str {
        match (self, status) {
            (Theme::Light, ProductStatus::Live) => "bg-emerald-50 text-emerald-700 ring-1 ring-emerald-200",
            (Theme::Light, ProductStatus::Draft) => "bg-amber-50 text-amber-700 ring-1 ring-amber-200",
            (Theme::Light, ProductStatus::Archived) => "bg-slate-100 text-slate-500 ring-1 ring-slate-200",
            (Theme::Terminal, ProductStatus::Live) => "text-[#22C55E] border border-[#22C55E]/30",
            (Theme::Terminal, ProductStatus::Draft) => "text-[#F59E0B] border border-[#F59E0B]/30",
            (Theme::Terminal, ProductStatus::Archived) => "text-[#8A8A84] border border-white/[0.10]",
        }
    }

    pub fn plan(self, plan: Plan) -> &'static str {
        match (self, plan) {
            (Theme::Light, Plan::Starter) => "bg-slate-100 text-slate-600",
            (Theme::Light, Plan::Growth) => "bg-violet-50 text-violet-700",
            (Theme::Light, Plan::Enterprise) => "bg-indigo-50 text-indigo-700",
            (Theme::Terminal, Plan::Starter) => "text-[#C0C0BA]",
            (Theme::Terminal, Plan::Growth) => "text-[#A78BFA]",
            (Theme::Terminal, Plan::Enterprise) => "text-[#818CF8]",
        }
    }

    pub fn pricing_model(self, model: PricingModel) -> &'static str {
        match (self, model) {
            (Theme::Light, PricingModel::PerToken) => "bg-sky-50 text-sky-700",
            (Theme::Light, PricingModel::Tiered) => "bg-violet-50 text-violet-700",
            (Theme::Light, PricingModel::FlatRate) => "bg-slate-100 text-slate-600",
            (Theme::Light, PricingModel::UsageBased) => "bg-emerald-50 text-emerald-700",
            (Theme::Terminal, PricingModel::PerToken) => "text-[#38BDF8]",
            (Theme::Terminal, PricingModel::Tiered) => "text-[#A78BFA]",
            (Theme::Terminal, PricingModel::FlatRate) => "text-[#C0C0BA]",
            (Theme::Terminal, PricingModel::UsageBased) => "text-[#22C55E]",
        }
    }

    /// Dot colour of a timeline entry.
    pub fn tone(self, tone: TimelineTone) -> &'static str {
        match (self, tone) {
            (Theme::Light, TimelineTone::Info) => "bg-sky-500",
            (Theme::Light, TimelineTone::Success) => "bg-emerald-500",
            (Theme::Light, TimelineTone::Warning) => "bg-amber-500",
            (Theme::Light, TimelineTone::Danger) => "bg-red-500",
            (Theme::Light, TimelineTone::Accent) => "bg-violet-500",
            (Theme::Light, TimelineTone::Muted) => "bg-slate-300",
            (Theme::Terminal, TimelineTone::Info) => "bg-[#38BDF8]",
            (Theme::Terminal, TimelineTone::Success) => "bg-[#22C55E]",
            (Theme::Terminal, TimelineTone::Warning) => "bg-[#F59E0B]",
            (Theme::Terminal, TimelineTone::Danger) => "bg-[#EF4444]",
            (Theme::Terminal, TimelineTone::Accent) => "bg-[#A78BFA]",
            (Theme::Terminal, TimelineTone::Muted) => "bg-[#4A4A46]",
        }
    }

    pub fn usage_bar(self, level: UsageLevel) -> &'static str {
        match level {
            UsageLevel::Critical => "bg-red-500",
            UsageLevel::High => "bg-amber-400",
            UsageLevel::Normal if self == Theme::Light => "bg-emerald-500",
            UsageLevel::Normal => "bg-[#22C55E]",
        }
    }

    pub fn track(self) -> &'static str {
        match self {
            Theme::Light => "bg-slate-100",
            Theme::Terminal => "bg-white/[0.06]",
        }
    }

    /// Stroke colour of the overview series.
    pub fn accent(self) -> &'static str {
        match self {
            Theme::Light => "#6366F1",
            Theme::Terminal => "#22C55E",
        }
    }

    pub fn grid_stroke(self) -> &'static str {
        match self {
            Theme::Light => "#E2E8F0",
            Theme::Terminal => "rgba(255,255,255,0.05)",
        }
    }

    pub fn axis_text(self) -> &'static str {
        match self {
            Theme::Light => "#94A3B8",
            Theme::Terminal => "#8A8A84",
        }
    }

    pub fn tooltip_fill(self) -> &'static str {
        match self {
            Theme::Light => "#0F172A",
            Theme::Terminal => "#111110",
        }
    }
}

/// Series colour on the customer usage chart.
pub fn usage_chart_color(customer: &Customer) -> &'static str {
    if customer.status == CustomerStatus::Inactive {
        return "#94A3B8";
    }
    match UsageLevel::from_percent(customer.usage.into()) {
        UsageLevel::Critical => "#EF4444",
        _ => "#10B981",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::Fixtures;

    #[test]
    fn segments_round_trip_through_the_route() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "variant3".parse::<Theme>(),
            Err(UnknownTheme("variant3".to_string()))
        );
    }

    #[test]
    fn usage_thresholds() {
        assert_eq!(UsageLevel::from_percent(0), UsageLevel::Normal);
        assert_eq!(UsageLevel::from_percent(69), UsageLevel::Normal);
        assert_eq!(UsageLevel::from_percent(70), UsageLevel::High);
        assert_eq!(UsageLevel::from_percent(89), UsageLevel::High);
        assert_eq!(UsageLevel::from_percent(90), UsageLevel::Critical);
        assert_eq!(UsageLevel::from_percent(100), UsageLevel::Critical);
    }

    #[test]
    fn usage_chart_colour_follows_status_then_usage() {
        let fx = Fixtures::seeded();
        let inactive = fx
            .customers
            .iter()
            .find(|c| c.status == CustomerStatus::Inactive)
            .expect("seed has an inactive customer");
        assert_eq!(usage_chart_color(inactive), "#94A3B8");

        let mut hot = fx.customer("1").clone();
        hot.usage = 94;
        assert_eq!(usage_chart_color(&hot), "#EF4444");
        hot.usage = 40;
        assert_eq!(usage_chart_color(&hot), "#10B981");
    }

    #[test]
    fn terminal_uses_square_markers_and_its_own_chart() {
        assert_eq!(Theme::Terminal.marker(), Marker::Square);
        assert_eq!(Theme::Light.marker(), Marker::Circle);
        assert_eq!(Theme::Terminal.overview_chart().low_factor, 0.72);
        assert_eq!(Theme::Light.overview_chart().low_factor, 0.8);
    }
}
