use serde::{Deserialize, Serialize};

/// Per-warehouse stock level for one item.
///
/// Read-only in this service: the collection is seeded at construction and
/// queried by item code (and optionally warehouse); there is no CRUD surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockBalance {
    pub item_code: String,
    pub warehouse: String,
    pub actual_qty: i64,
    pub reserved_qty: i64,
    pub available_qty: i64,
}

impl StockBalance {
    pub fn new(
        item_code: impl Into<String>,
        warehouse: impl Into<String>,
        actual_qty: i64,
        reserved_qty: i64,
    ) -> Self {
        Self {
            item_code: item_code.into(),
            warehouse: warehouse.into(),
            actual_qty,
            reserved_qty,
            available_qty: actual_qty - reserved_qty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_is_actual_minus_reserved() {
        let balance = StockBalance::new("PROD-001", "Main Store", 120, 20);
        assert_eq!(balance.available_qty, 100);
    }
}
