//! Static demo payload, served until a real data source exists

use super::dto::{DashboardData, GrowthPercent, Order, OrderStatus, SummaryMetrics};
use chrono::NaiveDate;

pub fn dashboard_data() -> DashboardData {
    DashboardData {
        summary: summary(),
        recent_orders: recent_orders(),
    }
}

fn summary() -> SummaryMetrics {
    SummaryMetrics {
        today_sales: 1200.0,
        yesterday_sales: 1100.0,
        last_week_sales: 7500.0,
        last_month_sales: 28000.0,
        today_orders: 12.0,
        yesterday_orders: 10.0,
        last_week_orders: 65.0,
        last_month_orders: 280.0,
        returning_customer_rate: 68.0,
        average_order_value: 450.0,
        total_sales: 12500.0,
        total_orders: 310.0,
        invoice_amount: 10825.0,
        pending_invoice_amount: 1675.0,
        growth_percent: GrowthPercent {
            today_sales: 12.0,
            yesterday_sales: 8.0,
            last_week_sales: 15.0,
            last_month_sales: 20.0,
            today_orders: -5.0,
            yesterday_orders: 3.0,
            last_week_orders: 7.0,
            last_month_orders: 12.0,
            returning_customer_rate: 5.0,
            average_order_value: 8.0,
            total_sales: 15.0,
            total_orders: 8.0,
            invoice_amount: 12.0,
            pending_invoice_amount: -3.0,
        },
    }
}

fn recent_orders() -> Vec<Order> {
    [
        ("ORD001", (2025, 8, 5), "John Doe", 500.0, OrderStatus::Completed),
        ("ORD002", (2025, 8, 4), "Jane Smith", 750.0, OrderStatus::Completed),
        ("ORD003", (2025, 8, 4), "Mike Johnson", 1200.0, OrderStatus::Pending),
        ("ORD004", (2025, 8, 3), "Sarah Wilson", 300.0, OrderStatus::Completed),
        ("ORD005", (2025, 8, 3), "David Brown", 900.0, OrderStatus::Cancelled),
    ]
    .into_iter()
    .filter_map(|(id, (y, m, d), customer, amount, status)| {
        Some(Order {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            customer: customer.to_string(),
            amount,
            status,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_sales_overview::dto::SummaryField;

    #[test]
    fn test_mock_payload() {
        let data = dashboard_data();
        assert_eq!(data.recent_orders.len(), 5);
        assert_eq!(data.summary.value(SummaryField::TotalSales), 12500.0);
        assert_eq!(data.summary.growth(SummaryField::PendingInvoiceAmount), -3.0);
    }

    #[test]
    fn test_mock_payload_round_trips_through_json() {
        let data = dashboard_data();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["summary"]["growthPercent"]["todayOrders"], -5.0);
        assert_eq!(json["recentOrders"][0]["date"], "2025-08-05");

        let back: DashboardData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
