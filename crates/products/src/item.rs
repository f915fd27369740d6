use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, Money};

/// Catalog item master record.
///
/// `item_code` is the business key line items reference; `name` is the
/// store-assigned identifier like every other document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: DocName,
    pub item_code: String,
    pub item_name: String,
    pub description: String,
    pub item_group: String,
    /// Stock unit of measure, e.g. `"Nos"` or `"Kg"`.
    pub stock_uom: String,
    pub standard_rate: Money,
    pub is_stock_item: bool,
}

impl Item {
    /// New item awaiting a store-assigned name.
    pub fn new(
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        description: impl Into<String>,
        item_group: impl Into<String>,
        stock_uom: impl Into<String>,
        standard_rate: Money,
        is_stock_item: bool,
    ) -> Self {
        Self {
            name: DocName::unassigned(),
            item_code: item_code.into(),
            item_name: item_name.into(),
            description: description.into(),
            item_group: item_group.into(),
            stock_uom: stock_uom.into(),
            standard_rate,
            is_stock_item,
        }
    }
}

/// Partial update for [`Item`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub item_group: Option<String>,
    pub stock_uom: Option<String>,
    pub standard_rate: Option<Money>,
    pub is_stock_item: Option<bool>,
}

impl Document for Item {
    const PREFIX: &'static str = "ITEM";
    const KIND: &'static str = "item";

    type Patch = ItemPatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: ItemPatch) {
        if let Some(item_code) = patch.item_code {
            self.item_code = item_code;
        }
        if let Some(item_name) = patch.item_name {
            self.item_name = item_name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(item_group) = patch.item_group {
            self.item_group = item_group;
        }
        if let Some(stock_uom) = patch.stock_uom {
            self.stock_uom = stock_uom;
        }
        if let Some(standard_rate) = patch.standard_rate {
            self.standard_rate = standard_rate;
        }
        if let Some(is_stock_item) = patch.is_stock_item {
            self.is_stock_item = is_stock_item;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item() -> Item {
        Item::new(
            "PROD-001",
            "Premium Wireless Headphones",
            "Over-ear, noise cancelling",
            "Electronics",
            "Nos",
            Money::from_cents(29_999),
            true,
        )
    }

    #[test]
    fn patch_updates_rate_and_nothing_else() {
        let mut item = test_item();
        let before = item.clone();

        item.apply_patch(ItemPatch {
            standard_rate: Some(Money::from_cents(27_499)),
            ..ItemPatch::default()
        });

        assert_eq!(item.standard_rate, Money::from_cents(27_499));
        assert_eq!(item.item_code, before.item_code);
        assert_eq!(item.item_name, before.item_name);
        assert_eq!(item.description, before.description);
        assert_eq!(item.item_group, before.item_group);
        assert_eq!(item.stock_uom, before.stock_uom);
        assert_eq!(item.is_stock_item, before.is_stock_item);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn field_mask() -> impl Strategy<Value = [bool; 7]> {
            prop::array::uniform7(any::<bool>())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: a patch changes exactly the fields it sets and leaves
            /// every other field identical to its pre-update value.
            #[test]
            fn patch_touches_exactly_the_set_fields(mask in field_mask()) {
                let mut item = test_item();
                let before = item.clone();

                let patch = ItemPatch {
                    item_code: mask[0].then(|| "PROD-XXX".to_string()),
                    item_name: mask[1].then(|| "Renamed".to_string()),
                    description: mask[2].then(|| "Changed".to_string()),
                    item_group: mask[3].then(|| "Furniture".to_string()),
                    stock_uom: mask[4].then(|| "Box".to_string()),
                    standard_rate: mask[5].then(|| Money::from_cents(1)),
                    is_stock_item: mask[6].then(|| !before.is_stock_item),
                };
                item.apply_patch(patch);

                prop_assert_eq!(item.item_code != before.item_code, mask[0]);
                prop_assert_eq!(item.item_name != before.item_name, mask[1]);
                prop_assert_eq!(item.description != before.description, mask[2]);
                prop_assert_eq!(item.item_group != before.item_group, mask[3]);
                prop_assert_eq!(item.stock_uom != before.stock_uom, mask[4]);
                prop_assert_eq!(item.standard_rate != before.standard_rate, mask[5]);
                prop_assert_eq!(item.is_stock_item != before.is_stock_item, mask[6]);
                prop_assert_eq!(item.name, before.name);
            }
        }
    }
}
