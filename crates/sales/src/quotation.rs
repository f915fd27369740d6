use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, LineItem, Money};

/// Quotation status vocabulary.
///
/// The store accepts any value from this vocabulary at any time; transition
/// legality is a caller concern. "Converted" in particular is set by the
/// caller after it creates the follow-on sales order; the store keeps no
/// back-reference between the two documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    Draft,
    Submitted,
    Converted,
    Cancelled,
}

/// Quotation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quotation {
    pub name: DocName,
    /// Name of the customer document this quotation was issued to.
    pub customer: DocName,
    pub quotation_date: NaiveDate,
    pub valid_till: NaiveDate,
    pub items: Vec<LineItem>,
    /// Caller-supplied total; by contract the sum of line amounts.
    pub grand_total: Money,
    pub status: QuotationStatus,
}

impl Quotation {
    /// New draft quotation awaiting a store-assigned name. `grand_total` is
    /// derived from the lines here as a convenience; later edits go through
    /// the patch, which trusts the caller.
    pub fn draft(
        customer: DocName,
        quotation_date: NaiveDate,
        valid_till: NaiveDate,
        items: Vec<LineItem>,
    ) -> Self {
        let grand_total = LineItem::total(&items);
        Self {
            name: DocName::unassigned(),
            customer,
            quotation_date,
            valid_till,
            items,
            grand_total,
            status: QuotationStatus::Draft,
        }
    }
}

/// Partial update for [`Quotation`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationPatch {
    pub customer: Option<DocName>,
    pub quotation_date: Option<NaiveDate>,
    pub valid_till: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub grand_total: Option<Money>,
    pub status: Option<QuotationStatus>,
}

impl Document for Quotation {
    const PREFIX: &'static str = "QTN";
    const KIND: &'static str = "quotation";

    type Patch = QuotationPatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: QuotationPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(quotation_date) = patch.quotation_date {
            self.quotation_date = quotation_date;
        }
        if let Some(valid_till) = patch.valid_till {
            self.valid_till = valid_till;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(grand_total) = patch.grand_total {
            self.grand_total = grand_total;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_quotation() -> Quotation {
        Quotation::draft(
            DocName::from("CUST-A1B2C3D4E"),
            date(2024, 1, 15),
            date(2024, 2, 15),
            vec![
                LineItem::new("PROD-001", 2, Money::from_cents(29_999)),
                LineItem::new("PROD-002", 1, Money::from_cents(4_999)),
            ],
        )
    }

    #[test]
    fn draft_derives_grand_total_from_lines() {
        let quotation = test_quotation();
        assert_eq!(quotation.grand_total, Money::from_cents(64_997));
        assert_eq!(quotation.status, QuotationStatus::Draft);
        assert!(!quotation.name.is_assigned());
    }

    #[test]
    fn status_patch_leaves_document_body_alone() {
        let mut quotation = test_quotation();
        let before = quotation.clone();

        quotation.apply_patch(QuotationPatch {
            status: Some(QuotationStatus::Converted),
            ..QuotationPatch::default()
        });

        assert_eq!(quotation.status, QuotationStatus::Converted);
        assert_eq!(quotation.customer, before.customer);
        assert_eq!(quotation.items, before.items);
        assert_eq!(quotation.grand_total, before.grand_total);
    }

    #[test]
    fn status_serializes_to_the_catalog_vocabulary() {
        for (status, expected) in [
            (QuotationStatus::Draft, "\"Draft\""),
            (QuotationStatus::Submitted, "\"Submitted\""),
            (QuotationStatus::Converted, "\"Converted\""),
            (QuotationStatus::Cancelled, "\"Cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
        }
    }
}
