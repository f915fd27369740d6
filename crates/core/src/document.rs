//! Document trait and the shared line-item shape.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::name::DocName;

/// A stored business document, identified by a store-assigned [`DocName`].
pub trait Document: Clone {
    /// Prefix used when generating names for this kind, e.g. `"SO"`.
    const PREFIX: &'static str;

    /// Kind label used in logs and traces, e.g. `"sales_order"`.
    const KIND: &'static str;

    /// Partial-update shape: every settable field as an `Option`.
    type Patch;

    fn name(&self) -> &DocName;

    /// Called by the store exactly once, when the document is created. The
    /// name is immutable afterwards.
    fn assign_name(&mut self, name: DocName);

    /// Merge the set fields of `patch` onto `self`. Unset fields are left
    /// untouched; the name is never patchable.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Line-item shape shared by quotations, orders, delivery notes and invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_code: String,
    pub qty: i64,
    /// Unit rate in the smallest currency unit.
    pub rate: Money,
    /// Caller-supplied line amount. By contract `qty × rate`, but the store
    /// trusts it as given and never recomputes.
    pub amount: Money,
}

impl LineItem {
    /// Convenience constructor filling `amount = qty × rate`.
    pub fn new(item_code: impl Into<String>, qty: i64, rate: Money) -> Self {
        Self {
            item_code: item_code.into(),
            qty,
            rate,
            amount: rate * qty,
        }
    }

    /// Sum of line amounts, as documents carry in `grand_total`.
    pub fn total(lines: &[LineItem]) -> Money {
        lines.iter().map(|line| line.amount).sum()
    }
}
