use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::CURRENCY;

/// Betting limits and payout rule of a single game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    name: String,
    min_bet: f64,
    max_bet: f64,
    payout_multiplier: f64,
}

impl Game {
    pub fn new(
        name: impl Into<String>,
        min_bet: f64,
        max_bet: f64,
        payout_multiplier: f64,
    ) -> Self {
        Game {
            name: name.into(),
            min_bet,
            max_bet,
            payout_multiplier,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn min_bet(&self) -> f64 {
        self.min_bet
    }

    pub fn max_bet(&self) -> f64 {
        self.max_bet
    }

    pub fn payout_multiplier(&self) -> f64 {
        self.payout_multiplier
    }

    /// Winning bets pay `bet_amount * payout_multiplier`, losing bets pay nothing
    pub fn calculate_payout(&self, bet_amount: f64, is_win: bool) -> f64 {
        if is_win {
            bet_amount * self.payout_multiplier
        } else {
            0.0
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game: {}, Min bet: {} {}, Max bet: {} {}, Multiplier: {}x",
            self.name, self.min_bet, CURRENCY, self.max_bet, CURRENCY, self.payout_multiplier
        )
    }
}
