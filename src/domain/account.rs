use crate::domain::tax;
use crate::utils::error::{LessonError, Result};
use serde::Serialize;

/// A bank account whose balance only changes through [`Account::deposit`].
///
/// `id` is fixed at construction. `owner` and `nickname` are plain fields.
/// Serializes for reporting; there is no `Deserialize` so a snapshot can't be
/// turned back into an account with an arbitrary balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: u64,
    pub owner: String,
    balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl Account {
    pub fn new(id: u64, owner: impl Into<String>, opening_balance: f64) -> Self {
        Self {
            id,
            owner: owner.into(),
            balance: opening_balance,
            nickname: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Adds `amount` to the balance.
    ///
    /// Anything not strictly positive (including NaN and infinities) is rejected
    /// with [`LessonError::InvalidAmount`] and the balance is left untouched.
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        if !amount.is_finite() || amount <= 0.0 {
            tracing::warn!("Rejected deposit of {} on account {}", amount, self.id);
            return Err(LessonError::InvalidAmount { amount });
        }

        self.balance += amount;
        tracing::debug!(
            "Account {} deposit {} -> balance {}",
            self.id,
            amount,
            self.balance
        );
        Ok(())
    }

    pub fn calculate_tax(&self, amount: f64) -> f64 {
        tax::bracket_tax(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_increases_balance_by_amount() {
        let mut account = Account::new(1, "Roland", 0.0);
        account.deposit(500.0).unwrap();
        assert_eq!(account.balance(), 500.0);

        for amount in [0.01, 1.0, 250.5, 1_000_000.0] {
            let before = account.balance();
            account.deposit(amount).unwrap();
            assert_eq!(account.balance(), before + amount);
        }
    }

    #[test]
    fn test_non_positive_deposit_is_rejected() {
        let mut account = Account::new(1, "Roland", 100.0);

        for amount in [0.0, -0.0, -1.0, -500.0, f64::NAN, f64::INFINITY] {
            let err = account.deposit(amount).unwrap_err();
            assert!(matches!(err, LessonError::InvalidAmount { .. }));
            assert_eq!(account.balance(), 100.0);
        }
    }

    #[test]
    fn test_owner_and_nickname_are_mutable() {
        let mut account = Account::new(7, "Roland", 0.0).with_nickname("Rolly");
        account.owner = "Vincent".to_string();
        account.nickname = Some("RollyJS".to_string());

        assert_eq!(account.id(), 7);
        assert_eq!(account.owner, "Vincent");
        assert_eq!(account.nickname.as_deref(), Some("RollyJS"));
    }

    #[test]
    fn test_calculate_tax_delegates_to_brackets() {
        let account = Account::new(1, "Roland", 0.0);
        assert_eq!(account.calculate_tax(10_000.0), 0.0);
        assert!((account.calculate_tax(15_500.0) - 600.0).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut account = Account::new(1, "Roland", 0.0);
        account.deposit(500.0).unwrap();

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["balance"], 500.0);
        assert!(json.get("nickname").is_none());
    }
}
