use rust_decimal::Decimal;
use serde::Serialize;

use crate::entity::project;

/// Aggregate financial figures across all projects.
#[derive(Debug, Default, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FinanceTotals {
    pub total_revenue: Decimal,
    pub total_collected: Decimal,
    /// `total_revenue - total_collected`; negative when clients have overpaid.
    pub total_due: Decimal,
}

/// Outstanding balance for a single project. Unset amounts count as zero;
/// overpayment yields a negative balance, deliberately unclamped.
pub fn balance_due(p: &project::Model) -> Decimal {
    p.total_price.unwrap_or_default() - p.amount_paid.unwrap_or_default()
}

pub fn aggregate<'a, I>(projects: I) -> FinanceTotals
where
    I: IntoIterator<Item = &'a project::Model>,
{
    let mut totals = FinanceTotals::default();
    for p in projects {
        totals.total_revenue += p.total_price.unwrap_or_default();
        totals.total_collected += p.amount_paid.unwrap_or_default();
    }
    totals.total_due = totals.total_revenue - totals.total_collected;
    totals
}
