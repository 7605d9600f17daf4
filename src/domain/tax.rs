/// 免稅額
pub const PERSONAL_ALLOWANCE: f64 = 12_500.0;

pub const DEFAULT_TAX_YEAR: u32 = 2022;

/// One band of the account tax table. `upper` is exclusive; `None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    pub upper: Option<f64>,
    pub rate: f64,
}

/// Bands above the personal allowance, in ascending order.
/// The rate applies to everything above the allowance, not just the band slice.
pub const ACCOUNT_BRACKETS: [TaxBracket; 2] = [
    TaxBracket {
        upper: Some(50_000.0),
        rate: 0.2,
    },
    TaxBracket {
        upper: None,
        rate: 0.45,
    },
];

/// Tax owed on `amount` using [`ACCOUNT_BRACKETS`].
pub fn bracket_tax(amount: f64) -> f64 {
    if amount <= PERSONAL_ALLOWANCE {
        return 0.0;
    }

    let rate = ACCOUNT_BRACKETS
        .iter()
        .find(|b| b.upper.map_or(true, |upper| amount < upper))
        .map(|b| b.rate)
        .unwrap_or(0.0);

    (amount - PERSONAL_ALLOWANCE) * rate
}

/// Flat income multiplier: 1.2 for low incomes before 2022, 1.3 otherwise.
pub fn income_tax(income: f64, tax_year: u32) -> f64 {
    if income < 50_000.0 && tax_year < DEFAULT_TAX_YEAR {
        return income * 1.2;
    }
    income * 1.3
}
