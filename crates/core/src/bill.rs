//! Billing records attached to appointments.
//!
//! A bill is an ordered list of service line items with two one-way flags
//! (paid, insurance-covered). The total and the payment status are always
//! derived from current state, never stored.

use serde::{Deserialize, Serialize};

use crate::constants::{CONSULTATION_FEE, CONSULTATION_FEE_LABEL};

/// One billed service and its cost.
///
/// Costs are accepted as-is; zero and negative amounts are valid line items
/// (refunds and waived fees are modelled the same way as charges).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service: String,
    pub cost: f64,
}

/// Derived payment state of a bill.
///
/// The priority is insurance cover, then a zero total, then the paid flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    CoveredByInsurance,
    NoCharge,
    Paid,
    Unpaid,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PaymentStatus::CoveredByInsurance => "Paid (Covered by Insurance)",
            PaymentStatus::NoCharge => "Paid (No Charge)",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Unpaid => "Unpaid",
        };
        write!(f, "{text}")
    }
}

/// An appointment's bill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    line_items: Vec<LineItem>,
    paid: bool,
    insurance_covered: bool,
}

impl Default for Bill {
    /// Every bill starts with the standard consultation fee.
    fn default() -> Self {
        Self {
            line_items: vec![LineItem {
                service: CONSULTATION_FEE_LABEL.to_string(),
                cost: CONSULTATION_FEE,
            }],
            paid: false,
            insurance_covered: false,
        }
    }
}

impl Bill {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a service line item. No validation is applied to the cost.
    pub fn add_service(&mut self, service: impl Into<String>, cost: f64) {
        self.line_items.push(LineItem {
            service: service.into(),
            cost,
        });
    }

    /// Sum of all current line items, recomputed on every call.
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(|item| item.cost).sum()
    }

    /// Marks the bill as covered by insurance. One-way and idempotent.
    pub fn apply_insurance(&mut self) {
        self.insurance_covered = true;
    }

    /// Marks the bill as paid. One-way and idempotent.
    pub fn mark_paid(&mut self) {
        self.paid = true;
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    pub fn is_insurance_covered(&self) -> bool {
        self.insurance_covered
    }

    /// Derives the payment status from the insurance flag, the current total,
    /// and the paid flag, in that order of priority.
    pub fn payment_status(&self) -> PaymentStatus {
        if self.insurance_covered {
            PaymentStatus::CoveredByInsurance
        } else if self.total() == 0.0 {
            PaymentStatus::NoCharge
        } else if self.paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        }
    }
}

impl std::fmt::Display for Bill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "----- Bill -----")?;
        for item in &self.line_items {
            writeln!(f, "{}: ${}", item.service, item.cost)?;
        }
        writeln!(f, "Total: ${}", self.total())?;
        writeln!(f, "Payment Status: {}", self.payment_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_bill_holds_only_the_consultation_fee() {
        let bill = Bill::new();
        assert_eq!(bill.line_items().len(), 1);
        assert_eq!(bill.line_items()[0].service, "Consultation Fee");
        assert_eq!(bill.line_items()[0].cost, 50.0);
        assert_eq!(bill.total(), 50.0);
    }

    #[test]
    fn total_tracks_every_addition() {
        let mut bill = Bill::new();
        bill.add_service("Blood Test", 25.0);
        assert_eq!(bill.total(), 75.0);
        bill.add_service("Loyalty Discount", -10.0);
        assert_eq!(bill.total(), 65.0);
        bill.add_service("Free Follow-up", 0.0);
        assert_eq!(bill.total(), 65.0);
    }

    #[test]
    fn insurance_takes_priority_over_everything() {
        let mut bill = Bill::new();
        bill.mark_paid();
        bill.apply_insurance();
        assert_eq!(bill.payment_status(), PaymentStatus::CoveredByInsurance);
        assert!(bill
            .to_string()
            .contains("Payment Status: Paid (Covered by Insurance)"));
    }

    #[test]
    fn zero_total_renders_no_charge_when_uninsured() {
        let mut bill = Bill::new();
        bill.add_service("Courtesy Waiver", -50.0);
        assert_eq!(bill.total(), 0.0);
        assert_eq!(bill.payment_status(), PaymentStatus::NoCharge);
        // The paid flag does not change the outcome.
        bill.mark_paid();
        assert_eq!(bill.payment_status(), PaymentStatus::NoCharge);
    }

    #[test]
    fn paid_flag_decides_only_as_last_resort() {
        let mut bill = Bill::new();
        assert_eq!(bill.payment_status(), PaymentStatus::Unpaid);
        bill.mark_paid();
        assert_eq!(bill.payment_status(), PaymentStatus::Paid);
    }
}
