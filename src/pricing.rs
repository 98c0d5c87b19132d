//! Order Pricing
//!
//! Quote arithmetic for the commitment screen. Amounts are integer cents so
//! totals never pick up float rounding noise.

use std::fmt;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Amount in cents. Arithmetic saturates at the i64 bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole currency units (e.g. dollars), rounded to the nearest cent
    pub fn from_major(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// `amount * bps / 10_000`, rounded half away from zero
    pub fn basis_points(&self, bps: u32) -> Money {
        let scaled = self.0.saturating_mul(bps as i64);
        let (whole, rest) = (scaled / 10_000, scaled % 10_000);
        let rounded = if rest.abs() >= 5_000 { whole + rest.signum() } else { whole };
        Money(rounded)
    }

    /// "$2,450" - drops the cents
    pub fn whole(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}${}", sign, group_thousands(self.0.unsigned_abs() / 100))
    }
}

impl fmt::Display for Money {
    /// "$49,850.00"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, group_thousands(abs / 100), abs % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;
    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(rhs as i64))
    }
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    groups.reverse();
    groups.join(",")
}

/// Settlement method chosen on the commitment screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Smart-contract escrow; the only method carrying a security fee
    Escrow,
    Wire,
    Card,
    Stablecoin,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Escrow,
        PaymentMethod::Wire,
        PaymentMethod::Card,
        PaymentMethod::Stablecoin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Escrow => "Smart Escrow",
            PaymentMethod::Wire => "Wire Transfer",
            PaymentMethod::Card => "Corporate Card",
            PaymentMethod::Stablecoin => "USDC Stablecoin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Escrow => "escrow",
            PaymentMethod::Wire => "wire",
            PaymentMethod::Card => "card",
            PaymentMethod::Stablecoin => "usdc",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            PaymentMethod::Escrow => "Funds locked on-chain until delivery is verified.",
            PaymentMethod::Wire => "Traditional bank settlement via SWIFT or Fedwire.",
            PaymentMethod::Card => "Instant authorization on your corporate card.",
            PaymentMethod::Stablecoin => "Direct settlement in USDC on Polygon.",
        }
    }

    pub fn settlement_time(&self) -> &'static str {
        match self {
            PaymentMethod::Escrow => "Released on delivery confirmation",
            PaymentMethod::Wire => "1-3 business days",
            PaymentMethod::Card => "Immediate",
            PaymentMethod::Stablecoin => "Under 5 minutes",
        }
    }

    /// Security fee in basis points, given the configured escrow rate
    pub fn fee_bps(&self, escrow_fee_bps: u32) -> u32 {
        match self {
            PaymentMethod::Escrow => escrow_fee_bps,
            _ => 0,
        }
    }
}

/// Fixed order parameters applied to every quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTerms {
    pub quantity_sq_ft: u32,
    pub logistics_fee: Money,
    pub escrow_fee_bps: u32,
}

impl OrderTerms {
    pub fn quote(&self, unit_price: Money, method: PaymentMethod) -> OrderQuote {
        let materials = unit_price * self.quantity_sq_ft;
        let subtotal = materials + self.logistics_fee;
        let security_fee = subtotal.basis_points(method.fee_bps(self.escrow_fee_bps));
        OrderQuote {
            unit_price,
            quantity_sq_ft: self.quantity_sq_ft,
            logistics_fee: self.logistics_fee,
            method,
            subtotal,
            security_fee,
            total: subtotal + security_fee,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderQuote {
    pub unit_price: Money,
    pub quantity_sq_ft: u32,
    pub logistics_fee: Money,
    pub method: PaymentMethod,
    /// unit price x quantity + logistics
    pub subtotal: Money,
    pub security_fee: Money,
    pub total: Money,
}

impl OrderQuote {
    pub fn has_security_fee(&self) -> bool {
        self.security_fee != Money::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> OrderTerms {
        OrderTerms {
            quantity_sq_ft: 120,
            logistics_fee: Money::from_major(2450.0),
            escrow_fee_bps: 50,
        }
    }

    #[test]
    fn test_escrow_quote_adds_security_fee() {
        let quote = terms().quote(Money::from_major(395.0), PaymentMethod::Escrow);
        assert_eq!(quote.subtotal, Money::from_cents(4_985_000));
        assert_eq!(quote.security_fee, Money::from_cents(24_925));
        assert_eq!(quote.total, Money::from_cents(5_009_925));
        assert_eq!(quote.total.to_string(), "$50,099.25");
        assert!(quote.has_security_fee());
    }

    #[test]
    fn test_non_escrow_methods_have_no_fee() {
        for method in [PaymentMethod::Wire, PaymentMethod::Card, PaymentMethod::Stablecoin] {
            let quote = terms().quote(Money::from_major(395.0), method);
            assert_eq!(quote.security_fee, Money::ZERO);
            assert_eq!(quote.total, Money::from_cents(4_985_000));
            assert_eq!(quote.total.to_string(), "$49,850.00");
        }
    }

    #[test]
    fn test_basis_points_round_half_up() {
        // 0.5% of $0.99 = 0.495 cents -> 0 ; of $1.00 = 0.5 cents -> 1
        assert_eq!(Money::from_cents(99).basis_points(50), Money::ZERO);
        assert_eq!(Money::from_cents(100).basis_points(50), Money::from_cents(1));
        assert_eq!(Money::from_cents(-100).basis_points(50), Money::from_cents(-1));
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(Money::from_major(2450.0).to_string(), "$2,450.00");
        assert_eq!(Money::from_major(2450.0).whole(), "$2,450");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_major(1_234_567.8).to_string(), "$1,234,567.80");
        assert_eq!(Money::from_cents(-42_500_00).to_string(), "-$42,500.00");
    }

    #[test]
    fn test_quote_saturates_instead_of_overflowing() {
        let quote = terms().quote(Money::from_cents(i64::MAX / 2), PaymentMethod::Escrow);
        assert_eq!(quote.subtotal, Money::from_cents(i64::MAX));
        assert_eq!(quote.total, Money::from_cents(i64::MAX));
        assert!(quote.has_security_fee());
    }

    #[test]
    fn test_payment_method_slugs() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_slug(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_slug("cash"), None);
    }
}
