use serde::{Deserialize, Serialize};

/// Reporting granularity selectable on the dashboard and reports pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Daily,
    Monthly,
    Yearly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] =
        [ReportPeriod::Daily, ReportPeriod::Monthly, ReportPeriod::Yearly];

    pub fn value(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "daily",
            ReportPeriod::Monthly => "monthly",
            ReportPeriod::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Daily => "Daily",
            ReportPeriod::Monthly => "Monthly",
            ReportPeriod::Yearly => "Yearly",
        }
    }

    pub fn from_value(value: &str) -> ReportPeriod {
        match value {
            "daily" => ReportPeriod::Daily,
            "yearly" => ReportPeriod::Yearly,
            _ => ReportPeriod::Monthly,
        }
    }
}

/// One period's profit-and-loss summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitData {
    pub period: String,
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub gross_margin: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// Sales volume and revenue attributed to one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByProduct {
    pub product_id: String,
    pub product_name: String,
    pub quantity_sold: i64,
    pub revenue: f64,
}

/// Revenue booked in one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRevenue {
    pub period: String,
    pub amount: f64,
}

/// Total spend in one expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: f64,
}
