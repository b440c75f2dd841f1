//! Balance and wager book for a single player.
//!
//! `balance + total_staked()` only changes through [`Ledger::credit`] (payouts) and
//! [`Ledger::forfeit_bets`] (stakes committed to a round). Placement and clearing move value
//! between the two sides without creating or destroying any.

use superwheel_types::wheel::{BetBook, BetLabel, LedgerError};
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    balance: u64,
    bets: BetBook,
}

impl Ledger {
    pub fn new(balance: u64) -> Self {
        Self {
            balance,
            bets: BetBook::zeroed(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn bets(&self) -> &BetBook {
        &self.bets
    }

    pub fn total_staked(&self) -> u64 {
        self.bets.total()
    }

    /// Move `amount` from the balance onto `label`.
    ///
    /// Rejected without any change when the balance cannot cover it.
    pub fn place_bet(&mut self, label: BetLabel, amount: u64) -> Result<(), LedgerError> {
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        self.bets.add(label, amount);
        debug!(%label, amount, balance = self.balance, "bet placed");
        Ok(())
    }

    /// Refund every wager to the balance. Returns the amount refunded.
    pub fn clear_bets(&mut self) -> u64 {
        let refund = self.bets.total();
        self.balance = self.balance.saturating_add(refund);
        self.bets = BetBook::zeroed();
        refund
    }

    /// Zero every wager without refunding it, returning the book that was staked.
    pub fn forfeit_bets(&mut self) -> BetBook {
        std::mem::replace(&mut self.bets, BetBook::zeroed())
    }

    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
    }
}
