// src/services/payout_service.rs

use std::cmp::Ordering;

use crate::{
    models::modes::{PayoutSort, PayoutStatusFilter},
    models::payout::{Payout, PayoutStatus},
    services::filter_sort,
};

impl PayoutStatusFilter {
    pub fn matches(self, status: Option<PayoutStatus>) -> bool {
        match self {
            PayoutStatusFilter::All => true,
            PayoutStatusFilter::Pending => status == Some(PayoutStatus::Pending),
            PayoutStatusFilter::Completed => status == Some(PayoutStatus::Completed),
            PayoutStatusFilter::Failed => status == Some(PayoutStatus::Failed),
        }
    }
}

pub fn status_predicate(filter: PayoutStatusFilter) -> impl Fn(&Payout) -> bool {
    move |payout| filter.matches(payout.status)
}

// Repasse sem data (None) conta como o mais antigo de todos.
pub fn comparator(sort: PayoutSort) -> fn(&Payout, &Payout) -> Ordering {
    match sort {
        PayoutSort::Recent => |a: &Payout, b: &Payout| b.created_at.cmp(&a.created_at),
        PayoutSort::Oldest => |a: &Payout, b: &Payout| a.created_at.cmp(&b.created_at),
        PayoutSort::Highest => |a: &Payout, b: &Payout| b.amount.cmp(&a.amount),
        PayoutSort::Lowest => |a: &Payout, b: &Payout| a.amount.cmp(&b.amount),
    }
}

/// Histórico de repasses filtrado por status e ordenado pelo modo escolhido.
pub fn view(payouts: &[Payout], filter: PayoutStatusFilter, sort: PayoutSort) -> Vec<Payout> {
    let out = filter_sort::apply(payouts, status_predicate(filter), comparator(sort));

    tracing::debug!(
        received = payouts.len(),
        shown = out.len(),
        %filter,
        %sort,
        "Lista de repasses montada"
    );
    out
}
