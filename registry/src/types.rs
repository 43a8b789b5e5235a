use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RegistryError;

/// Currency suffix appended to every rendered amount
pub const CURRENCY: &str = "rub.";

/// Per-variant payload of a user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Role {
    Plain,
    /// Premium accounts carry a separately tracked bonus balance
    Premium { bonus_balance: f64 },
    /// Free-text privilege label, not validated
    Admin { access_level: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: i64,
    name: String,
    username: String,
    balance: f64,
    #[serde(flatten)]
    role: Role,
}

impl User {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        balance: f64,
        role: Role,
    ) -> Self {
        User {
            id,
            name: name.into(),
            username: username.into(),
            balance,
            role,
        }
    }

    pub fn plain(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self::new(id, name, username, balance, Role::Plain)
    }

    pub fn premium(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        balance: f64,
        bonus_balance: f64,
    ) -> Self {
        Self::new(id, name, username, balance, Role::Premium { bonus_balance })
    }

    pub fn admin(
        id: i64,
        name: impl Into<String>,
        username: impl Into<String>,
        balance: f64,
        access_level: impl Into<String>,
    ) -> Self {
        let access_level = access_level.into();
        Self::new(id, name, username, balance, Role::Admin { access_level })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Bonus balance, only present on premium accounts
    pub fn bonus_balance(&self) -> Option<f64> {
        match self.role {
            Role::Premium { bonus_balance } => Some(bonus_balance),
            _ => None,
        }
    }

    /// Access level, only present on admin accounts
    pub fn access_level(&self) -> Option<&str> {
        match &self.role {
            Role::Admin { access_level } => Some(access_level),
            _ => None,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self.role, Role::Premium { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin { .. })
    }

    /// Adds `amount` to the balance. Negative amounts and negative results are allowed.
    pub fn add_balance(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Redeems `amount` from the bonus balance.
    ///
    /// Fails without touching the bonus balance when `amount` exceeds it.
    /// Accounts without a bonus balance behave as if it were zero.
    pub fn use_bonus(&mut self, amount: f64) -> Result<(), RegistryError> {
        match &mut self.role {
            Role::Premium { bonus_balance } if amount <= *bonus_balance => {
                *bonus_balance -= amount;
                Ok(())
            }
            Role::Premium { bonus_balance } => Err(RegistryError::InsufficientBonus {
                requested: amount,
                available: *bonus_balance,
            }),
            Role::Plain | Role::Admin { .. } if amount <= 0.0 => Ok(()),
            Role::Plain | Role::Admin { .. } => Err(RegistryError::InsufficientBonus {
                requested: amount,
                available: 0.0,
            }),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_admin() {
            write!(f, "[Admin] ")?;
        }
        write!(
            f,
            "ID: {}, Name: {}, Login: {}, Balance: {} {}",
            self.id, self.name, self.username, self.balance, CURRENCY
        )?;

        match &self.role {
            Role::Plain => Ok(()),
            Role::Premium { bonus_balance } => {
                write!(f, "\nBonus balance: {} {}", bonus_balance, CURRENCY)
            }
            Role::Admin { access_level } => write!(f, "\nAccess level: {}", access_level),
        }
    }
}
