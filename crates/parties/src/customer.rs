use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document};

/// Customer kind: registered company or private individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Company,
    Individual,
}

/// Contact and address details for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub billing_address: Option<String>,
    pub shipping_address: Option<String>,
    pub tax_id: Option<String>,
}

/// Customer master record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier, e.g. `CUST-3F8A1B2C9`.
    pub name: DocName,
    pub customer_name: String,
    pub customer_type: CustomerType,
    pub territory: String,
    pub customer_group: String,
    pub contact: ContactInfo,
}

impl Customer {
    /// New customer awaiting a store-assigned name.
    pub fn new(
        customer_name: impl Into<String>,
        customer_type: CustomerType,
        territory: impl Into<String>,
        customer_group: impl Into<String>,
        contact: ContactInfo,
    ) -> Self {
        Self {
            name: DocName::unassigned(),
            customer_name: customer_name.into(),
            customer_type,
            territory: territory.into(),
            customer_group: customer_group.into(),
            contact,
        }
    }
}

/// Partial update for [`Customer`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub customer_name: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub territory: Option<String>,
    pub customer_group: Option<String>,
    pub contact: Option<ContactInfo>,
}

impl Document for Customer {
    const PREFIX: &'static str = "CUST";
    const KIND: &'static str = "customer";

    type Patch = CustomerPatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: CustomerPatch) {
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(customer_type) = patch.customer_type {
            self.customer_type = customer_type;
        }
        if let Some(territory) = patch.territory {
            self.territory = territory;
        }
        if let Some(customer_group) = patch.customer_group {
            self.customer_group = customer_group;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_customer() -> Customer {
        Customer::new(
            "Acme Corporation",
            CustomerType::Company,
            "North",
            "Commercial",
            ContactInfo {
                email: Some("sales@acme.example".to_string()),
                ..ContactInfo::default()
            },
        )
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut customer = test_customer();
        let before = customer.clone();

        customer.apply_patch(CustomerPatch {
            territory: Some("South".to_string()),
            ..CustomerPatch::default()
        });

        assert_eq!(customer.territory, "South");
        assert_eq!(customer.customer_name, before.customer_name);
        assert_eq!(customer.customer_type, before.customer_type);
        assert_eq!(customer.customer_group, before.customer_group);
        assert_eq!(customer.contact, before.contact);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut customer = test_customer();
        let before = customer.clone();
        customer.apply_patch(CustomerPatch::default());
        assert_eq!(customer, before);
    }

    #[test]
    fn customer_type_serializes_to_the_catalog_vocabulary() {
        assert_eq!(
            serde_json::to_string(&CustomerType::Company).unwrap(),
            "\"Company\""
        );
        assert_eq!(
            serde_json::to_string(&CustomerType::Individual).unwrap(),
            "\"Individual\""
        );
    }
}
