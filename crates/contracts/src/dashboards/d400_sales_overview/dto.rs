use crate::shared::list::{contains_ignore_case, Searchable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload of the sales overview dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub summary: SummaryMetrics,
    pub recent_orders: Vec<Order>,
}

/// Headline numbers of the shop.
///
/// `growth_percent` carries a signed percentage delta for every field, so a
/// metric without growth cannot be represented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub today_sales: f64,
    pub yesterday_sales: f64,
    pub last_week_sales: f64,
    pub last_month_sales: f64,
    pub today_orders: f64,
    pub yesterday_orders: f64,
    pub last_week_orders: f64,
    pub last_month_orders: f64,
    pub returning_customer_rate: f64,
    pub average_order_value: f64,
    pub total_sales: f64,
    pub total_orders: f64,
    pub invoice_amount: f64,
    pub pending_invoice_amount: f64,
    pub growth_percent: GrowthPercent,
}

/// Growth deltas, field for field parallel to [`SummaryMetrics`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPercent {
    pub today_sales: f64,
    pub yesterday_sales: f64,
    pub last_week_sales: f64,
    pub last_month_sales: f64,
    pub today_orders: f64,
    pub yesterday_orders: f64,
    pub last_week_orders: f64,
    pub last_month_orders: f64,
    pub returning_customer_rate: f64,
    pub average_order_value: f64,
    pub total_sales: f64,
    pub total_orders: f64,
    pub invoice_amount: f64,
    pub pending_invoice_amount: f64,
}

/// Field selector for [`SummaryMetrics`] and [`GrowthPercent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryField {
    TodaySales,
    YesterdaySales,
    LastWeekSales,
    LastMonthSales,
    TodayOrders,
    YesterdayOrders,
    LastWeekOrders,
    LastMonthOrders,
    ReturningCustomerRate,
    AverageOrderValue,
    TotalSales,
    TotalOrders,
    InvoiceAmount,
    PendingInvoiceAmount,
}

impl SummaryField {
    pub const ALL: [SummaryField; 14] = [
        SummaryField::TodaySales,
        SummaryField::YesterdaySales,
        SummaryField::LastWeekSales,
        SummaryField::LastMonthSales,
        SummaryField::TodayOrders,
        SummaryField::YesterdayOrders,
        SummaryField::LastWeekOrders,
        SummaryField::LastMonthOrders,
        SummaryField::ReturningCustomerRate,
        SummaryField::AverageOrderValue,
        SummaryField::TotalSales,
        SummaryField::TotalOrders,
        SummaryField::InvoiceAmount,
        SummaryField::PendingInvoiceAmount,
    ];
}

impl SummaryMetrics {
    pub fn value(&self, field: SummaryField) -> f64 {
        match field {
            SummaryField::TodaySales => self.today_sales,
            SummaryField::YesterdaySales => self.yesterday_sales,
            SummaryField::LastWeekSales => self.last_week_sales,
            SummaryField::LastMonthSales => self.last_month_sales,
            SummaryField::TodayOrders => self.today_orders,
            SummaryField::YesterdayOrders => self.yesterday_orders,
            SummaryField::LastWeekOrders => self.last_week_orders,
            SummaryField::LastMonthOrders => self.last_month_orders,
            SummaryField::ReturningCustomerRate => self.returning_customer_rate,
            SummaryField::AverageOrderValue => self.average_order_value,
            SummaryField::TotalSales => self.total_sales,
            SummaryField::TotalOrders => self.total_orders,
            SummaryField::InvoiceAmount => self.invoice_amount,
            SummaryField::PendingInvoiceAmount => self.pending_invoice_amount,
        }
    }

    pub fn growth(&self, field: SummaryField) -> f64 {
        let g = &self.growth_percent;
        match field {
            SummaryField::TodaySales => g.today_sales,
            SummaryField::YesterdaySales => g.yesterday_sales,
            SummaryField::LastWeekSales => g.last_week_sales,
            SummaryField::LastMonthSales => g.last_month_sales,
            SummaryField::TodayOrders => g.today_orders,
            SummaryField::YesterdayOrders => g.yesterday_orders,
            SummaryField::LastWeekOrders => g.last_week_orders,
            SummaryField::LastMonthOrders => g.last_month_orders,
            SummaryField::ReturningCustomerRate => g.returning_customer_rate,
            SummaryField::AverageOrderValue => g.average_order_value,
            SummaryField::TotalSales => g.total_sales,
            SummaryField::TotalOrders => g.total_orders,
            SummaryField::InvoiceAmount => g.invoice_amount,
            SummaryField::PendingInvoiceAmount => g.pending_invoice_amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Completed,
    Pending,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge class, e.g. `status-pending`
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "status-completed",
            OrderStatus::Pending => "status-pending",
            OrderStatus::Cancelled => "status-cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub customer: String,
    pub amount: f64,
    pub status: OrderStatus,
}

impl Searchable for Order {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ignore_case(&self.id, filter)
            || contains_ignore_case(&self.customer, filter)
            || contains_ignore_case(self.status.as_str(), filter)
    }
}
