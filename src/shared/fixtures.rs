//! Seed data for every screen. Built once when the app mounts and shared
//! read-only through the component context.

use std::collections::{BTreeMap, HashMap};

use crate::config::DashboardConfig;
use crate::shared::money::Money;
use crate::shared::types::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub revenue: Vec<SeriesPoint>,
    pub events: Vec<SeriesPoint>,
    pub recent_invoices: Vec<RecentInvoice>,
    pub activity: Vec<TimelineEvent>,
    pub kpis_top: Vec<Kpi>,
    pub kpis_bottom: Vec<Kpi>,
    usage: BTreeMap<String, Vec<SeriesPoint>>,
    metrics: BTreeMap<String, Vec<UsageMetric>>,
    invoices: BTreeMap<String, Vec<Invoice>>,
    timeline: BTreeMap<String, Vec<TimelineEvent>>,
    plan_limits: HashMap<Plan, Vec<PlanLimit>>,
    config: DashboardConfig,
}

/// Everything the detail screen needs for one customer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomerRecord<'a> {
    pub customer: &'a Customer,
    pub usage: &'a [SeriesPoint],
    pub metrics: &'a [UsageMetric],
    pub invoices: &'a [Invoice],
    pub timeline: &'a [TimelineEvent],
    pub plan_limits: &'a [PlanLimit],
    /// Set when the requested id was unknown and the default customer was substituted.
    pub substituted: bool,
}

impl Fixtures {
    pub fn seeded() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            customers: customers(),
            products: products(),
            revenue: series(&[3200.0, 3800.0, 3400.0, 4100.0, 3900.0, 4500.0, 4820.0]),
            events: series(&[
                8400.0, 12100.0, 9800.0, 15600.0, 18200.0, 22400.0, 27800.0,
            ]),
            recent_invoices: recent_invoices(),
            activity: activity(),
            kpis_top: kpis_top(),
            kpis_bottom: kpis_bottom(),
            usage: usage(),
            metrics: metrics(),
            invoices: invoices(),
            timeline: timeline(),
            plan_limits: plan_limits(),
            config,
        }
    }

    pub fn default_customer_id(&self) -> &str {
        &self.config.default_customer_id
    }

    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Looks a customer up by id, substituting the default customer when the
    /// id is unknown, and the first customer when the default is unknown too.
    pub fn customer(&self, id: &str) -> &Customer {
        self.find_customer(id)
            .or_else(|| self.find_customer(self.default_customer_id()))
            .unwrap_or_else(|| &self.customers[0])
    }

    pub fn customer_record(&self, id: &str) -> CustomerRecord<'_> {
        let customer = self.customer(id);
        let key = customer.id.as_str();
        CustomerRecord {
            customer,
            usage: self.usage.get(key).map(Vec::as_slice).unwrap_or_default(),
            metrics: self.metrics.get(key).map(Vec::as_slice).unwrap_or_default(),
            invoices: self.invoices.get(key).map(Vec::as_slice).unwrap_or_default(),
            timeline: self.timeline.get(key).map(Vec::as_slice).unwrap_or_default(),
            plan_limits: self
                .plan_limits
                .get(&customer.plan)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            substituted: customer.id != id,
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::seeded()
    }
}

const MONTHS: [&str; 7] = ["Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"];

fn series(values: &[f64; 7]) -> Vec<SeriesPoint> {
    MONTHS
        .iter()
        .zip(values)
        .map(|(m, v)| SeriesPoint::new(m, *v))
        .collect()
}

/// Seed amounts are written as they appear on screen.
fn usd(display: &str) -> Money {
    Money::parse(display).unwrap_or_else(|| panic!("malformed seed amount {display:?}"))
}

fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".into(),
            name: "Alex Chen".into(),
            company: "Acme Corp".into(),
            email: "alex@acmecorp.ai".into(),
            phone: "+1 (415) 555-0182".into(),
            website: "acmecorp.ai".into(),
            location: "San Francisco, CA".into(),
            plan: Plan::Enterprise,
            mrr: 2400,
            total_paid: 14400,
            status: CustomerStatus::Active,
            joined: "Oct 12, 2024".into(),
            usage: 87,
            avatar: "AC".into(),
            last_invoice: "Feb 20, 2025".into(),
            last_invoice_amount: usd("$2,400"),
        },
        Customer {
            id: "2".into(),
            name: "Sarah Kim".into(),
            company: "TechFlow AI".into(),
            email: "sarah@techflow.ai".into(),
            phone: "+1 (628) 555-0147".into(),
            website: "techflow.ai".into(),
            location: "Austin, TX".into(),
            plan: Plan::Growth,
            mrr: 890,
            total_paid: 3560,
            status: CustomerStatus::Active,
            joined: "Nov 3, 2024".into(),
            usage: 62,
            avatar: "TF".into(),
            last_invoice: "Feb 18, 2025".into(),
            last_invoice_amount: usd("$890"),
        },
        Customer {
            id: "3".into(),
            name: "Marcus Webb".into(),
            company: "DataSync Labs".into(),
            email: "marcus@datasynclabs.io".into(),
            phone: "+1 (312) 555-0293".into(),
            website: "datasynclabs.io".into(),
            location: "Chicago, IL".into(),
            plan: Plan::Growth,
            mrr: 1100,
            total_paid: 0,
            status: CustomerStatus::Trial,
            joined: "Jan 28, 2025".into(),
            usage: 34,
            avatar: "DS".into(),
            last_invoice: "Feb 1, 2025".into(),
            last_invoice_amount: usd("$0"),
        },
        Customer {
            id: "4".into(),
            name: "Priya Patel".into(),
            company: "NeuralBase".into(),
            email: "priya@neuralbase.dev".into(),
            phone: "+1 (212) 555-0374".into(),
            website: "neuralbase.dev".into(),
            location: "New York, NY".into(),
            plan: Plan::Starter,
            mrr: 299,
            total_paid: 897,
            status: CustomerStatus::Active,
            joined: "Dec 15, 2024".into(),
            usage: 91,
            avatar: "NB".into(),
            last_invoice: "Feb 12, 2025".into(),
            last_invoice_amount: usd("$299"),
        },
        Customer {
            id: "5".into(),
            name: "Jordan Lee".into(),
            company: "Cognify Inc".into(),
            email: "jordan@cognify.ai".into(),
            phone: "+1 (650) 555-0418".into(),
            website: "cognify.ai".into(),
            location: "Palo Alto, CA".into(),
            plan: Plan::Enterprise,
            mrr: 3200,
            total_paid: 19200,
            status: CustomerStatus::Inactive,
            joined: "Sep 5, 2024".into(),
            usage: 0,
            avatar: "CI".into(),
            last_invoice: "Jan 5, 2025".into(),
            last_invoice_amount: usd("$3,200"),
        },
    ]
}

fn usage() -> BTreeMap<String, Vec<SeriesPoint>> {
    [
        ("1", [12400.0, 18200.0, 15800.0, 22100.0, 24600.0, 28900.0, 31200.0]),
        ("2", [3200.0, 5400.0, 4800.0, 7100.0, 8200.0, 9400.0, 11600.0]),
        ("3", [0.0, 0.0, 0.0, 0.0, 0.0, 1200.0, 4800.0]),
        ("4", [1800.0, 2100.0, 1900.0, 2800.0, 3100.0, 3600.0, 4200.0]),
        ("5", [28000.0, 31000.0, 26000.0, 18000.0, 9000.0, 2000.0, 0.0]),
    ]
    .into_iter()
    .map(|(id, values)| (id.to_string(), series(&values)))
    .collect()
}

fn metric(name: &str, events: u64, unit_price: &str, subtotal: &str) -> UsageMetric {
    UsageMetric {
        name: name.into(),
        events,
        unit_price: unit_price.into(),
        subtotal: usd(subtotal),
    }
}

fn metrics() -> BTreeMap<String, Vec<UsageMetric>> {
    let mut m = BTreeMap::new();
    m.insert(
        "1".to_string(),
        vec![
            metric("LLM API Calls", 142_840, "$0.012", "$1,714.08"),
            metric("Embeddings", 38_200, "$0.008", "$305.60"),
            metric("Image Generation", 1_820, "$0.042", "$76.44"),
            metric("Storage (GB)", 124, "$0.025", "$3.10"),
        ],
    );
    m.insert(
        "2".to_string(),
        vec![
            metric("LLM API Calls", 64_200, "$0.012", "$770.40"),
            metric("Embeddings", 12_800, "$0.008", "$102.40"),
            metric("Function Calls", 8_400, "$0.002", "$16.80"),
        ],
    );
    m.insert(
        "3".to_string(),
        vec![
            metric("LLM API Calls", 18_400, "$0.012", "$220.80"),
            metric("Embeddings", 4_200, "$0.008", "$33.60"),
        ],
    );
    m.insert(
        "4".to_string(),
        vec![
            metric("LLM API Calls", 22_100, "$0.010", "$221.00"),
            metric("Embeddings", 6_200, "$0.008", "$49.60"),
            metric("Storage (GB)", 18, "$0.025", "$0.45"),
        ],
    );
    m.insert("5".to_string(), vec![]);
    m
}

fn invoice(id: &str, amount: &str, status: InvoiceStatus, date: &str, period: &str) -> Invoice {
    Invoice {
        id: id.into(),
        amount: usd(amount),
        status,
        date: date.into(),
        period: period.into(),
    }
}

fn invoices() -> BTreeMap<String, Vec<Invoice>> {
    use InvoiceStatus::*;
    let mut m = BTreeMap::new();
    m.insert(
        "1".to_string(),
        vec![
            invoice("INV-0048", "$2,400.00", Paid, "Feb 1, 2025", "Jan 2025"),
            invoice("INV-0041", "$2,400.00", Paid, "Jan 1, 2025", "Dec 2024"),
            invoice("INV-0034", "$2,100.00", Paid, "Dec 1, 2024", "Nov 2024"),
            invoice("INV-0026", "$1,980.00", Paid, "Nov 1, 2024", "Oct 2024"),
            invoice("INV-0019", "$1,800.00", Paid, "Oct 1, 2024", "Sep 2024"),
        ],
    );
    m.insert(
        "2".to_string(),
        vec![
            invoice("INV-0050", "$890.00", Issued, "Feb 1, 2025", "Jan 2025"),
            invoice("INV-0043", "$890.00", Paid, "Jan 1, 2025", "Dec 2024"),
            invoice("INV-0036", "$820.00", Paid, "Dec 1, 2024", "Nov 2024"),
            invoice("INV-0029", "$960.00", Paid, "Nov 1, 2024", "Oct 2024"),
        ],
    );
    m.insert(
        "3".to_string(),
        vec![invoice(
            "INV-0052",
            "$0.00",
            Void,
            "Feb 1, 2025",
            "Trial — Jan 2025",
        )],
    );
    m.insert(
        "4".to_string(),
        vec![
            invoice("INV-0046", "$299.00", Paid, "Feb 1, 2025", "Jan 2025"),
            invoice("INV-0039", "$299.00", Paid, "Jan 1, 2025", "Dec 2024"),
            invoice("INV-0032", "$299.00", Paid, "Dec 1, 2024", "Nov 2024"),
        ],
    );
    m.insert(
        "5".to_string(),
        vec![
            invoice("INV-0022", "$3,200.00", Paid, "Jan 1, 2025", "Dec 2024"),
            invoice("INV-0015", "$3,200.00", Paid, "Dec 1, 2024", "Nov 2024"),
            invoice("INV-0008", "$3,200.00", Paid, "Nov 1, 2024", "Oct 2024"),
            invoice("INV-0002", "$3,200.00", Paid, "Oct 1, 2024", "Sep 2024"),
            invoice("INV-0001", "$3,200.00", Overdue, "Feb 1, 2025", "Jan 2025"),
        ],
    );
    m
}

fn event(text: &str, time: &str, tone: TimelineTone) -> TimelineEvent {
    TimelineEvent {
        text: text.into(),
        time: time.into(),
        tone,
    }
}

fn timeline() -> BTreeMap<String, Vec<TimelineEvent>> {
    use TimelineTone::*;
    let mut m = BTreeMap::new();
    m.insert(
        "1".to_string(),
        vec![
            event("Usage alert: 87% of monthly limit reached", "2h ago", Warning),
            event("Invoice INV-0048 paid — $2,400", "2d ago", Success),
            event("Seat added: David Park (developer@acmecorp.ai)", "5d ago", Info),
            event("Plan upgraded: Growth → Enterprise", "Dec 5, 2024", Accent),
            event("Customer onboarded", "Oct 12, 2024", Muted),
        ],
    );
    m.insert(
        "2".to_string(),
        vec![
            event("Invoice INV-0050 sent — $890", "3d ago", Info),
            event("API key rotated", "1w ago", Muted),
            event("Customer onboarded", "Nov 3, 2024", Muted),
        ],
    );
    m.insert(
        "3".to_string(),
        vec![
            event("Trial started — 14 days remaining", "Jan 28, 2025", Info),
            event("Welcome email sent", "Jan 28, 2025", Success),
        ],
    );
    m.insert(
        "4".to_string(),
        vec![
            event("Usage alert: 91% of monthly limit reached", "1h ago", Danger),
            event("Invoice INV-0046 paid — $299", "3d ago", Success),
            event("Customer onboarded", "Dec 15, 2024", Muted),
        ],
    );
    m.insert(
        "5".to_string(),
        vec![
            event("Invoice INV-0001 overdue — $3,200", "1w ago", Danger),
            event("Subscription paused", "Jan 12, 2025", Danger),
            event("Last activity recorded", "Jan 2, 2025", Muted),
            event("Customer onboarded", "Sep 5, 2024", Muted),
        ],
    );
    m
}

fn limit(feature: &str, limit: Option<f64>, used: f64) -> PlanLimit {
    PlanLimit {
        feature: feature.into(),
        limit,
        used,
    }
}

fn plan_limits() -> HashMap<Plan, Vec<PlanLimit>> {
    let mut m = HashMap::new();
    m.insert(
        Plan::Enterprise,
        vec![
            limit("API Calls / month", Some(5_000_000.0), 4_350_000.0),
            limit("Embeddings / month", Some(500_000.0), 435_000.0),
            limit("Team Seats", None, 12.0),
            limit("Storage (GB)", Some(500.0), 124.0),
        ],
    );
    m.insert(
        Plan::Growth,
        vec![
            limit("API Calls / month", Some(500_000.0), 310_000.0),
            limit("Embeddings / month", Some(100_000.0), 62_000.0),
            limit("Team Seats", Some(10.0), 4.0),
            limit("Storage (GB)", Some(50.0), 12.0),
        ],
    );
    m.insert(
        Plan::Starter,
        vec![
            limit("API Calls / month", Some(50_000.0), 45_500.0),
            limit("Embeddings / month", Some(20_000.0), 18_200.0),
            limit("Team Seats", Some(3.0), 2.0),
            limit("Storage (GB)", Some(10.0), 3.2),
        ],
    );
    m
}

fn products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "LLM API Access".into(),
            description: "Core language model completions".into(),
            pricing_model: PricingModel::PerToken,
            rate: "$0.002 / 1k tokens".into(),
            subscribers: 28,
            mrr: 5200,
            status: ProductStatus::Live,
            created: "Jan 12, 2024".into(),
        },
        Product {
            id: "2".into(),
            name: "Token Bundle Pro".into(),
            description: "Monthly prepaid token allocation".into(),
            pricing_model: PricingModel::Tiered,
            rate: "from $299 / mo".into(),
            subscribers: 14,
            mrr: 4186,
            status: ProductStatus::Live,
            created: "Mar 5, 2024".into(),
        },
        Product {
            id: "3".into(),
            name: "Embeddings API".into(),
            description: "High-dimensional vector embeddings".into(),
            pricing_model: PricingModel::PerToken,
            rate: "$0.0001 / 1k tokens".into(),
            subscribers: 41,
            mrr: 1230,
            status: ProductStatus::Live,
            created: "Feb 18, 2024".into(),
        },
        Product {
            id: "4".into(),
            name: "Fine-Tuning Suite".into(),
            description: "Custom model training on your data".into(),
            pricing_model: PricingModel::UsageBased,
            rate: "$8.00 / GPU-hr".into(),
            subscribers: 6,
            mrr: 2880,
            status: ProductStatus::Live,
            created: "Aug 20, 2024".into(),
        },
        Product {
            id: "5".into(),
            name: "Context Window XL".into(),
            description: "128k extended context add-on".into(),
            pricing_model: PricingModel::FlatRate,
            rate: "$49 / mo / seat".into(),
            subscribers: 0,
            mrr: 0,
            status: ProductStatus::Draft,
            created: "Nov 3, 2024".into(),
        },
    ]
}

fn recent_invoices() -> Vec<RecentInvoice> {
    use InvoiceStatus::*;
    [
        ("INV-001", "Acme Corp", "$1,240", Paid, "Feb 20"),
        ("INV-002", "TechFlow AI", "$890", Paid, "Feb 18"),
        ("INV-003", "DataSync Labs", "$2,100", Issued, "Feb 15"),
        ("INV-004", "NeuralBase", "$450", Paid, "Feb 12"),
        ("INV-005", "Cognify Inc", "$3,200", Issued, "Feb 10"),
    ]
    .into_iter()
    .map(|(id, customer, amount, status, date)| RecentInvoice {
        id: id.into(),
        customer: customer.into(),
        amount: usd(amount),
        status,
        date: date.into(),
    })
    .collect()
}

fn activity() -> Vec<TimelineEvent> {
    use TimelineTone::*;
    vec![
        event("TechFlow AI upgraded to Pro", "2h ago", Info),
        event("Invoice #INV-001 paid — $1,240", "4h ago", Success),
        event("New customer: NeuralBase onboarded", "1d ago", Accent),
        event("12.4K metric events processed", "1d ago", Warning),
        event("Invoice #INV-003 sent to DataSync Labs", "2d ago", Success),
    ]
}

fn kpi(
    label: &str,
    value: KpiValue,
    sub: &str,
    trend: Option<(&str, bool)>,
    tip: &str,
) -> Kpi {
    Kpi {
        label: label.into(),
        value,
        sub: sub.into(),
        trend: trend.map(|(label, up)| Trend {
            label: label.into(),
            up,
        }),
        tip: tip.into(),
    }
}

fn kpis_top() -> Vec<Kpi> {
    use KpiValue::*;
    vec![
        kpi(
            "MRR",
            Dollars(4820),
            "18 active subscriptions",
            Some(("+12.4%", true)),
            "Monthly Recurring Revenue",
        ),
        kpi(
            "Total Revenue",
            Dollars(15340),
            "All time",
            Some(("+47.8%", true)),
            "All-time collected revenue",
        ),
        kpi(
            "Active Customers",
            Count(24),
            "4 total segments",
            Some(("+3 this month", true)),
            "Customers with active subscriptions",
        ),
        kpi(
            "Overdue",
            Dollars(0),
            "0 invoices",
            None,
            "Outstanding unpaid invoices",
        ),
    ]
}

fn kpis_bottom() -> Vec<Kpi> {
    use KpiValue::*;
    vec![
        kpi("ARPU", Dollars(379), "Avg revenue per user", None, ""),
        kpi("Churn Rate", Text("0.0%".into()), "Inactive customers", None, ""),
        kpi("Quick Ratio", Text("N/A".into()), "Growth efficiency", None, ""),
        kpi("ARR", Dollars(57840), "Annual recurring", None, ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_series_has_seven_months() {
        let fx = Fixtures::seeded();
        assert_eq!(fx.revenue.len(), 7);
        assert_eq!(fx.events.len(), 7);
        for c in &fx.customers {
            assert_eq!(fx.customer_record(&c.id).usage.len(), 7, "customer {}", c.id);
        }
    }

    #[test]
    fn unknown_id_substitutes_default_customer() {
        let fx = Fixtures::seeded();
        let rec = fx.customer_record("does-not-exist");
        assert!(rec.substituted);
        assert_eq!(rec.customer.id, "1");
        assert_eq!(rec.usage, fx.customer_record("1").usage);
        assert_eq!(rec.invoices.len(), 5);
    }

    #[test]
    fn known_id_is_not_substituted() {
        let fx = Fixtures::seeded();
        let rec = fx.customer_record("5");
        assert!(!rec.substituted);
        assert_eq!(rec.customer.company, "Cognify Inc");
        assert!(rec.metrics.is_empty());
        assert_eq!(rec.plan_limits.len(), 4);
    }

    #[test]
    fn default_customer_is_configurable() {
        let fx = Fixtures::with_config(DashboardConfig {
            default_customer_id: "4".into(),
        });
        assert_eq!(fx.customer("nope").company, "NeuralBase");
    }

    #[test]
    fn unknown_default_falls_back_to_first_customer() {
        let fx = Fixtures::with_config(DashboardConfig {
            default_customer_id: "missing".into(),
        });
        assert_eq!(fx.customer("nope").id, "1");
        assert_eq!(fx.customer("3").id, "3");
        assert!(fx.customer_record("nope").substituted);
    }

    #[test]
    fn inactive_customers_report_no_usage() {
        let fx = Fixtures::seeded();
        for c in fx.customers.iter().filter(|c| !c.status.is_billable()) {
            assert_eq!(c.usage, 0);
        }
    }
}
