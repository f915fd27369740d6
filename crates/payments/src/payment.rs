use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use salesdesk_core::{DocName, Document, Money};

/// Direction of the payment relative to the business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentType {
    Receive,
    Pay,
}

/// Payment instrument vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Cash,
    Bank,
    #[serde(rename = "UPI")]
    Upi,
    Card,
}

/// Payment entry document.
///
/// `reference_invoice` is raw linkage only: registering a payment never
/// updates the referenced invoice's outstanding amount. Reconciliation is a
/// caller responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntry {
    pub name: DocName,
    pub payment_type: PaymentType,
    /// Name of the party (customer) document the money moved against.
    pub party: DocName,
    pub paid_amount: Money,
    pub posting_date: NaiveDate,
    pub mode_of_payment: PaymentMode,
    pub reference_invoice: Option<DocName>,
    pub reference_no: Option<String>,
}

impl PaymentEntry {
    /// New received payment awaiting a store-assigned name.
    pub fn received(
        party: DocName,
        paid_amount: Money,
        posting_date: NaiveDate,
        mode_of_payment: PaymentMode,
    ) -> Self {
        Self {
            name: DocName::unassigned(),
            payment_type: PaymentType::Receive,
            party,
            paid_amount,
            posting_date,
            mode_of_payment,
            reference_invoice: None,
            reference_no: None,
        }
    }

    pub fn against_invoice(mut self, invoice: DocName) -> Self {
        self.reference_invoice = Some(invoice);
        self
    }

    pub fn with_reference_no(mut self, reference_no: impl Into<String>) -> Self {
        self.reference_no = Some(reference_no.into());
        self
    }
}

/// Partial update for [`PaymentEntry`]; unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentEntryPatch {
    pub payment_type: Option<PaymentType>,
    pub party: Option<DocName>,
    pub paid_amount: Option<Money>,
    pub posting_date: Option<NaiveDate>,
    pub mode_of_payment: Option<PaymentMode>,
    pub reference_invoice: Option<Option<DocName>>,
    pub reference_no: Option<Option<String>>,
}

impl Document for PaymentEntry {
    const PREFIX: &'static str = "PAY";
    const KIND: &'static str = "payment_entry";

    type Patch = PaymentEntryPatch;

    fn name(&self) -> &DocName {
        &self.name
    }

    fn assign_name(&mut self, name: DocName) {
        self.name = name;
    }

    fn apply_patch(&mut self, patch: PaymentEntryPatch) {
        if let Some(payment_type) = patch.payment_type {
            self.payment_type = payment_type;
        }
        if let Some(party) = patch.party {
            self.party = party;
        }
        if let Some(paid_amount) = patch.paid_amount {
            self.paid_amount = paid_amount;
        }
        if let Some(posting_date) = patch.posting_date {
            self.posting_date = posting_date;
        }
        if let Some(mode_of_payment) = patch.mode_of_payment {
            self.mode_of_payment = mode_of_payment;
        }
        if let Some(reference_invoice) = patch.reference_invoice {
            self.reference_invoice = reference_invoice;
        }
        if let Some(reference_no) = patch.reference_no {
            self.reference_no = reference_no;
        }
    }
}
