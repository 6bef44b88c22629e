//! # In-Memory Asset Model
//!
//! Each held asset exposes `transfer` / `transfer_from` with independent
//! success/failure semantics; the pool treats any failed transfer as fatal
//! to the surrounding operation. On a real ledger these are external token
//! contracts — here they are in-memory balance maps, which keeps the
//! component under test while preserving the interface boundary.
//!
//! The host-ledger approval step is collapsed into `transfer_from`: the
//! harness authenticates the caller before the operation reaches this
//! state machine, so allowance bookkeeping adds nothing here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use vlp_core::{Address, Amount, AmountError};

/// Failure of a token operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The sender's balance does not cover the transfer.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Sender's current balance.
        have: Amount,
        /// Requested transfer amount.
        need: Amount,
    },
    /// Balance arithmetic failed.
    #[error("token arithmetic: {0}")]
    Arithmetic(#[from] AmountError),
}

/// An in-memory fungible asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Ticker symbol.
    symbol: String,
    /// Decimal places of the smallest unit.
    decimals: u8,
    /// Account balances.
    balances: BTreeMap<Address, Amount>,
}

impl Token {
    /// Create an asset with no balances.
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            balances: BTreeMap::new(),
        }
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Decimal places.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Balance of an account (zero when the account is unknown).
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or(Amount::ZERO)
    }

    /// Credit newly minted units to an account.
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), TokenError> {
        let balance = self.balance_of(&to).checked_add(amount)?;
        self.balances.insert(to, balance);
        Ok(())
    }

    /// Whether `from` can cover a transfer of `amount`. Used by callers that
    /// must validate every transfer of a multi-step operation before
    /// performing any of them.
    pub fn can_transfer(&self, from: &Address, amount: Amount) -> bool {
        self.balance_of(from) >= amount
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        let from_balance = self.balance_of(&from);
        if from_balance < amount {
            return Err(TokenError::InsufficientBalance {
                have: from_balance,
                need: amount,
            });
        }
        let to_balance = self.balance_of(&to).checked_add(amount)?;
        // Both legs validated; write.
        self.balances.insert(from, from_balance.checked_sub(amount)?);
        self.balances.insert(to, to_balance);
        Ok(())
    }

    /// Pull `amount` from `owner` to `recipient` on the owner's behalf.
    pub fn transfer_from(
        &mut self,
        owner: Address,
        recipient: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.transfer(owner, recipient, amount)
    }
}
