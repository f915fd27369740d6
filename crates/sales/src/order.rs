use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, LineItem, Money};

/// Sales order status vocabulary.
///
/// Serialized forms match the catalog strings (e.g. `"To Deliver and Bill"`);
/// the store never checks transition legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesOrderStatus {
    Draft,
    #[serde(rename = "To Deliver and Bill")]
    ToDeliverAndBill,
    #[serde(rename = "To Bill")]
    ToBill,
    #[serde(rename = "To Deliver")]
    ToDeliver,
    Completed,
    Cancelled,
}

/// Sales order document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub name: DocName,
    pub customer: DocName,
    pub transaction_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub items: Vec<LineItem>,
    /// Caller-supplied total; by contract the sum of line amounts.
    pub grand_total: Money,
    pub status: SalesOrderStatus,
}

impl SalesOrder {
    /// New draft order awaiting a store-assigned name.
    pub fn draft(
        customer: DocName,
        transaction_date: NaiveDate,
        delivery_date: NaiveDate,
        items: Vec<LineItem>,
    ) -> Self {
        let grand_total = LineItem::total(&items);
        Self {
            name: DocName::unassigned(),
            customer,
            transaction_date,
            delivery_date,
            items,
            grand_total,
            status: SalesOrderStatus::Draft,
        }
    }
}

/// Partial update for [`SalesOrder`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesOrderPatch {
    pub customer: Option<DocName>,
    pub transaction_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub items: Option<Vec<LineItem>>,
    pub grand_total: Option<Money>,
    pub status: Option<SalesOrderStatus>,
}

impl Document for SalesOrder {
    const PREFIX: &'static str = "SO";
    const KIND: &'static str = "sales_order";

    type Patch = SalesOrderPatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: SalesOrderPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(transaction_date) = patch.transaction_date {
            self.transaction_date = transaction_date;
        }
        if let Some(delivery_date) = patch.delivery_date {
            self.delivery_date = delivery_date;
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

    fn test_order() -> SalesOrder {
        SalesOrder::draft(
            DocName::from("CUST-A1B2C3D4E"),
            date(2024, 1, 20),
            date(2024, 1, 27),
            vec![LineItem::new("PROD-003", 5, Money::from_cents(129_999))],
        )
    }

    #[test]
    fn draft_derives_grand_total_from_lines() {
        let order = test_order();
        assert_eq!(order.grand_total, Money::from_cents(649_995));
        assert_eq!(order.status, SalesOrderStatus::Draft);
    }

    #[test]
    fn patch_can_replace_lines_and_total_together() {
        let mut order = test_order();
        let lines = vec![LineItem::new("PROD-003", 2, Money::from_cents(129_999))];
        let total = LineItem::total(&lines);

        order.apply_patch(SalesOrderPatch {
            items: Some(lines.clone()),
            grand_total: Some(total),
            ..SalesOrderPatch::default()
        });

        assert_eq!(order.items, lines);
        assert_eq!(order.grand_total, total);
    }

    #[test]
    fn status_serializes_to_the_catalog_vocabulary() {
        for (status, expected) in [
            (SalesOrderStatus::Draft, "\"Draft\""),
            (
                SalesOrderStatus::ToDeliverAndBill,
                "\"To Deliver and Bill\"",
            ),
            (SalesOrderStatus::ToBill, "\"To Bill\""),
            (SalesOrderStatus::ToDeliver, "\"To Deliver\""),
            (SalesOrderStatus::Completed, "\"Completed\""),
            (SalesOrderStatus::Cancelled, "\"Cancelled\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), expected);
        }
    }

    #[test]
    fn status_round_trips_from_the_wire_form() {
        let status: SalesOrderStatus = serde_json::from_str("\"To Deliver and Bill\"").unwrap();
        assert_eq!(status, SalesOrderStatus::ToDeliverAndBill);
    }
}
