use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, LineItem};

/// Physical delivery progress, independent of the document workflow status.
///
/// Anything other than `Delivered` counts as a pending delivery in the KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

/// Delivery note workflow status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryNoteStatus {
    Draft,
    #[serde(rename = "To Bill")]
    ToBill,
    #[serde(rename = "Return Issued")]
    ReturnIssued,
    Completed,
    Cancelled,
}

/// Delivery note document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryNote {
    pub name: DocName,
    pub customer: DocName,
    /// Originating sales order, if any. Raw linkage only; creating a
    /// delivery note never mutates the referenced order.
    pub sales_order: Option<DocName>,
    pub posting_date: NaiveDate,
    pub items: Vec<LineItem>,
    pub shipping_address: Option<String>,
    pub delivery_status: DeliveryStatus,
    pub status: DeliveryNoteStatus,
}

impl DeliveryNote {
    /// New draft delivery note awaiting a store-assigned name.
    pub fn draft(
        customer: DocName,
        sales_order: Option<DocName>,
        posting_date: NaiveDate,
        items: Vec<LineItem>,
        shipping_address: Option<String>,
    ) -> Self {
        Self {
            name: DocName::unassigned(),
            customer,
            sales_order,
            posting_date,
            items,
            shipping_address,
            delivery_status: DeliveryStatus::Pending,
            status: DeliveryNoteStatus::Draft,
        }
    }
}

/// Partial update for [`DeliveryNote`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryNotePatch {
    pub customer: Option<DocName>,
    pub sales_order: Option<Option<DocName>>,
    pub posting_date: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub shipping_address: Option<Option<String>>,
    pub delivery_status: Option<DeliveryStatus>,
    pub status: Option<DeliveryNoteStatus>,
}

impl Document for DeliveryNote {
    const PREFIX: &'static str = "DN";
    const KIND: &'static str = "delivery_note";

    type Patch = DeliveryNotePatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: DeliveryNotePatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(sales_order) = patch.sales_order {
            self.sales_order = sales_order;
        }
        if let Some(posting_date) = patch.posting_date {
            self.posting_date = posting_date;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(shipping_address) = patch.shipping_address {
            self.shipping_address = shipping_address;
        }
        if let Some(delivery_status) = patch.delivery_status {
            self.delivery_status = delivery_status;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesdesk_core::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_note() -> DeliveryNote {
        DeliveryNote::draft(
            DocName::from("CUST-A1B2C3D4E"),
            Some(DocName::from("SO-9Z8Y7X6W5")),
            date(2024, 1, 22),
            vec![LineItem::new("PROD-004", 10, Money::from_cents(39_999))],
            Some("12 Harbor Road".to_string()),
        )
    }

    #[test]
    fn draft_starts_pending() {
        let note = test_note();
        assert_eq!(note.delivery_status, DeliveryStatus::Pending);
        assert_eq!(note.status, DeliveryNoteStatus::Draft);
    }

    #[test]
    fn patch_can_clear_the_order_linkage() {
        let mut note = test_note();

        note.apply_patch(DeliveryNotePatch {
            sales_order: Some(None),
            ..DeliveryNotePatch::default()
        });

        assert_eq!(note.sales_order, None);
    }

    #[test]
    fn marking_delivered_leaves_workflow_status_alone() {
        let mut note = test_note();

        note.apply_patch(DeliveryNotePatch {
            delivery_status: Some(DeliveryStatus::Delivered),
            ..DeliveryNotePatch::default()
        });

        assert_eq!(note.delivery_status, DeliveryStatus::Delivered);
        assert_eq!(note.status, DeliveryNoteStatus::Draft);
    }

    #[test]
    fn statuses_serialize_to_the_catalog_vocabulary() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::OutForDelivery).unwrap(),
            "\"Out for Delivery\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryNoteStatus::ReturnIssued).unwrap(),
            "\"Return Issued\""
        );
        assert_eq!(
            serde_json::to_string(&DeliveryNoteStatus::ToBill).unwrap(),
            "\"To Bill\""
        );
    }
}
