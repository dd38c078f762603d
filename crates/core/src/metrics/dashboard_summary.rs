use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::budget_metrics::{compute_money_left, compute_money_left_percentage, BudgetStatus};
use super::category_breakdown::{bill_breakdown, purchase_breakdown, CategorySlice};
use super::metrics_traits::ExpenseEntry;
use crate::bills::MonthlyBillRecord;
use crate::constants::LATEST_PURCHASES_LIMIT;
use crate::filters::sort_by_date_descending;
use crate::goals::FinancialGoal;
use crate::purchases::PurchaseRecord;
use crate::utils::decimal_utils::saturating_sum;

/// Everything the dashboard page shows, derived from one fetch of purchases,
/// bills and the financial goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub revenue: Decimal,
    pub purchases_total: Decimal,
    pub bills_total: Decimal,
    pub total_expenses: Decimal,
    pub money_left: Decimal,
    pub money_left_percentage: Decimal,
    pub budget: BudgetStatus,
    pub purchase_breakdown: Vec<CategorySlice>,
    pub bill_breakdown: Vec<CategorySlice>,
    pub latest_purchases: Vec<PurchaseRecord>,
}

fn sum_amounts<T: ExpenseEntry>(records: &[T]) -> Decimal {
    saturating_sum(records.iter().map(ExpenseEntry::expense_amount))
}

impl DashboardSummary {
    /// Computes the summary. A missing goal counts as zero salary and zero
    /// savings target.
    pub fn compute(
        purchases: &[PurchaseRecord],
        bills: &[MonthlyBillRecord],
        goal: Option<&FinancialGoal>,
    ) -> Self {
        let goal = goal.copied().unwrap_or_default();
        let purchases_total = sum_amounts(purchases);
        let bills_total = sum_amounts(bills);
        let total_expenses = purchases_total.saturating_add(bills_total);

        let latest_purchases = sort_by_date_descending(purchases)
            .into_iter()
            .take(LATEST_PURCHASES_LIMIT)
            .cloned()
            .collect();

        DashboardSummary {
            revenue: goal.salary,
            purchases_total,
            bills_total,
            total_expenses,
            money_left: compute_money_left(goal.salary, total_expenses),
            money_left_percentage: compute_money_left_percentage(goal.salary, total_expenses),
            budget: BudgetStatus::compute(total_expenses, goal.salary, goal.saving_goal),
            purchase_breakdown: purchase_breakdown(purchases),
            bill_breakdown: bill_breakdown(bills),
            latest_purchases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn purchase(id: i64, category: &str, price: Decimal, quantity: u32, day: u32) -> PurchaseRecord {
        PurchaseRecord {
            id,
            product_name: format!("item-{}", id),
            category: category.to_string(),
            price,
            quantity,
            shop_name: "Shop".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, day),
        }
    }

    fn bill(category: &str, amount: Decimal) -> MonthlyBillRecord {
        MonthlyBillRecord {
            id: 1,
            name: "Bill".to_string(),
            issuer: "Issuer".to_string(),
            category: category.to_string(),
            amount,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 31),
            duration: 1,
        }
    }

    #[test]
    fn test_compute_summary() {
        let purchases: Vec<PurchaseRecord> = (1..=7)
            .map(|i| purchase(i, "Shopping", dec!(1000), 1, i as u32))
            .chain(std::iter::once(purchase(8, "Food & Drink", dec!(2500), 2, 3)))
            .collect();
        let bills = vec![bill("Electricity", dec!(1000))];
        let goal = FinancialGoal {
            salary: dec!(20000),
            saving_goal: dec!(5000),
        };

        let summary = DashboardSummary::compute(&purchases, &bills, Some(&goal));

        assert_eq!(summary.purchases_total, dec!(12000));
        assert_eq!(summary.bills_total, dec!(1000));
        assert_eq!(summary.total_expenses, dec!(13000));
        assert_eq!(summary.money_left, dec!(7000));
        assert_eq!(summary.money_left_percentage, dec!(35));
        assert_eq!(summary.budget.spending_limit, dec!(15000));
        assert_eq!(summary.purchase_breakdown.len(), 2);
        assert_eq!(summary.bill_breakdown.len(), 8);
        assert_eq!(summary.bill_breakdown[0].value, dec!(1000));

        let latest: Vec<i64> = summary.latest_purchases.iter().map(|p| p.id).collect();
        assert_eq!(latest, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_oversized_backend_price_is_clamped() {
        let raw: crate::purchases::RawPurchaseRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "productName": "Yacht",
            "category": "Shopping",
            "price": "79228162514264337593543950335",
            "quantity": 2,
            "date": "2024-05-01"
        }))
        .unwrap();
        let record = PurchaseRecord::from_raw(raw);
        assert_eq!(record.price, crate::constants::MAX_AMOUNT);

        let summary = DashboardSummary::compute(&[record.clone(), record], &[], None);
        assert_eq!(summary.purchases_total, dec!(4000000000000));
        assert_eq!(purchase_breakdown(&summary.latest_purchases)[0].value, dec!(4000000000000));
    }

    #[test]
    fn test_extreme_totals_saturate() {
        let purchases = vec![
            purchase(1, "Shopping", Decimal::MAX, u32::MAX, 1),
            purchase(2, "Shopping", Decimal::MAX, 2, 2),
        ];
        let bills = vec![bill("Rent", Decimal::MAX)];
        let goal = FinancialGoal {
            salary: dec!(0.01),
            saving_goal: Decimal::ZERO,
        };

        let summary = DashboardSummary::compute(&purchases, &bills, Some(&goal));

        assert_eq!(summary.purchases_total, Decimal::MAX);
        assert_eq!(summary.total_expenses, Decimal::MAX);
        assert_eq!(summary.purchase_breakdown[0].value, Decimal::MAX);
        assert_eq!(summary.budget.spending_percentage, Decimal::MAX);
        assert_eq!(summary.money_left_percentage, Decimal::MIN);
        assert!(summary.budget.is_over_budget());
    }

    #[test]
    fn test_compute_without_goal() {
        let summary = DashboardSummary::compute(&[], &[], None);
        assert_eq!(summary.revenue, Decimal::ZERO);
        assert_eq!(summary.money_left_percentage, Decimal::ZERO);
        assert_eq!(summary.budget.spending_percentage, Decimal::ZERO);
        assert!(summary.latest_purchases.is_empty());
    }
}
