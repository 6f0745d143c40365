//! Number formatting for table output

use crate::valuation::Outcome;
use rust_decimal::Decimal;

pub const RULE: &str = "══════════════════════════════════════════════════════════════════════";
pub const THIN_RULE: &str = "──────────────────────────────────────────────────────────────────────";

/// Whole dollars with thousands separators
pub fn money(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    format!("{}${}", if negative { "-" } else { "" }, group(rounded.abs()))
}

/// Signed whole dollars, for deltas
pub fn signed_money(value: Decimal) -> String {
    if value.round_dp(0) > Decimal::ZERO {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

pub fn pct(value: Decimal) -> String {
    format!("{:.1}%", value)
}

pub fn mw(value: Decimal) -> String {
    format!("{} MW", group(value.round_dp(0)))
}

pub fn money_or_na(value: Outcome<Decimal>) -> String {
    value.map(money).to_string()
}

fn group(value: Decimal) -> String {
    let digits = value.trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::NotComputable;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money() {
        assert_eq!(money(dec!(15473740)), "$15,473,740");
        assert_eq!(money(dec!(5725283.80)), "$5,725,284");
        assert_eq!(money(dec!(999)), "$999");
        assert_eq!(money(dec!(-222200)), "-$222,200");
        assert_eq!(money(dec!(-0.2)), "$0");
    }

    #[test]
    fn test_signed_money() {
        assert_eq!(signed_money(dec!(1200)), "+$1,200");
        assert_eq!(signed_money(dec!(-1200)), "-$1,200");
        assert_eq!(signed_money(dec!(0)), "$0");
    }

    #[test]
    fn test_pct_and_mw() {
        assert_eq!(pct(dec!(37.5)), "37.5%");
        assert_eq!(mw(dec!(1746.6)), "1,747 MW");
    }

    #[test]
    fn test_money_or_na() {
        assert_eq!(money_or_na(Outcome::Computed(dec!(64474))), "$64,474");
        assert_eq!(
            money_or_na(Outcome::NotComputable(NotComputable::ZeroPlantCapacity)),
            "n/a (plant capacity is zero, set a capacity)"
        );
    }
}
