use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, LineItem, Money};

/// Sales invoice status vocabulary.
///
/// Every status except `Paid` counts toward the outstanding-payments KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Return,
    #[serde(rename = "Credit Note Issued")]
    CreditNoteIssued,
    Submitted,
    Paid,
    Overdue,
}

/// Sales invoice document.
///
/// `outstanding_amount` and payments are never reconciled by the store; a
/// payment entry may reference an invoice, but keeping the two consistent is
/// a caller responsibility (compensating updates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesInvoice {
    pub name: DocName,
    pub customer: DocName,
    pub posting_date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Vec<LineItem>,
    /// Caller-supplied total; by contract the sum of line amounts.
    pub grand_total: Money,
    pub outstanding_amount: Money,
    pub status: InvoiceStatus,
}

impl SalesInvoice {
    /// New draft invoice awaiting a store-assigned name; starts fully
    /// outstanding.
    pub fn draft(
        customer: DocName,
        posting_date: NaiveDate,
        due_date: NaiveDate,
        items: Vec<LineItem>,
    ) -> Self {
        let grand_total = LineItem::total(&items);
        Self {
            name: DocName::unassigned(),
            customer,
            posting_date,
            due_date,
            items,
            grand_total,
            outstanding_amount: grand_total,
            status: InvoiceStatus::Draft,
        }
    }
}

/// Partial update for [`SalesInvoice`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesInvoicePatch {
    pub customer: Option<DocName>,
    pub posting_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub grand_total: Option<Money>,
    pub outstanding_amount: Option<Money>,
    pub status: Option<InvoiceStatus>,
}

impl Document for SalesInvoice {
    const PREFIX: &'static str = "INV";
    const KIND: &'static str = "sales_invoice";

    type Patch = SalesInvoicePatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: SalesInvoicePatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(posting_date) = patch.posting_date {
            self.posting_date = posting_date;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(grand_total) = patch.grand_total {
            self.grand_total = grand_total;
        }
        if let Some(outstanding_amount) = patch.outstanding_amount {
            self.outstanding_amount = outstanding_amount;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
