use serde::{Deserialize, Serialize};

use crate::shared::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    Starter,
    Growth,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Starter, Plan::Growth, Plan::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            Plan::Starter => "Starter",
            Plan::Growth => "Growth",
            Plan::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Trial,
}

impl CustomerStatus {
    /// Order used by the status filter buttons.
    pub const ALL: [CustomerStatus; 3] = [
        CustomerStatus::Active,
        CustomerStatus::Trial,
        CustomerStatus::Inactive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Trial => "Trial",
        }
    }

    pub fn is_billable(self) -> bool {
        !matches!(self, CustomerStatus::Inactive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Issued,
    Overdue,
    Void,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Issued => "Issued",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Void => "Void",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Live,
    Draft,
    Archived,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Live,
        ProductStatus::Draft,
        ProductStatus::Archived,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductStatus::Live => "Live",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricingModel {
    #[serde(rename = "Per Token")]
    PerToken,
    Tiered,
    #[serde(rename = "Flat Rate")]
    FlatRate,
    #[serde(rename = "Usage-Based")]
    UsageBased,
}

impl PricingModel {
    pub const ALL: [PricingModel; 4] = [
        PricingModel::PerToken,
        PricingModel::Tiered,
        PricingModel::FlatRate,
        PricingModel::UsageBased,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PricingModel::PerToken => "Per Token",
            PricingModel::Tiered => "Tiered",
            PricingModel::FlatRate => "Flat Rate",
            PricingModel::UsageBased => "Usage-Based",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub location: String,
    pub plan: Plan,
    /// Monthly recurring revenue in whole dollars.
    pub mrr: u32,
    /// Lifetime total paid in whole dollars.
    #[serde(rename = "totalPaid")]
    pub total_paid: u32,
    pub status: CustomerStatus,
    pub joined: String,
    /// 0..=100; forced to 0 for inactive customers in the seed data.
    pub usage: u8,
    pub avatar: String,
    #[serde(rename = "lastInvoice")]
    pub last_invoice: String,
    #[serde(rename = "lastInvoiceAmount")]
    pub last_invoice_amount: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub date: String,
    pub period: String,
}

/// An invoice row on the home overview, denormalized with the customer name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentInvoice {
    pub id: String,
    pub customer: String,
    pub amount: Money,
    pub status: InvoiceStatus,
    pub date: String,
}

/// One (month label, value) sample of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub month: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(month: &str, value: f64) -> Self {
        Self {
            month: month.to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageMetric {
    pub name: String,
    pub events: u64,
    /// Unit prices go below a cent, so they stay a display string.
    #[serde(rename = "unitPrice")]
    pub unit_price: String,
    pub subtotal: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineTone {
    Info,
    Success,
    Warning,
    Danger,
    Accent,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub text: String,
    pub time: String,
    pub tone: TimelineTone,
}

/// A quota line on the subscription tab. `limit == None` means unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanLimit {
    pub feature: String,
    pub limit: Option<f64>,
    pub used: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "pricingModel")]
    pub pricing_model: PricingModel,
    pub rate: String,
    pub subscribers: u32,
    pub mrr: u32,
    pub status: ProductStatus,
    pub created: String,
}

/// Headline metric on the home overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: KpiValue,
    pub sub: String,
    pub trend: Option<Trend>,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KpiValue {
    Dollars(u32),
    Count(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub label: String,
    pub up: bool,
}
