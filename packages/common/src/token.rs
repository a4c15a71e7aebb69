//! CW20 token collaborator.
//!
//! The ledger never holds token supply itself, only a balance entry in the
//! token contract. Every movement of value is one of the messages built here,
//! appended to the handler's `Response` after bookkeeping has been saved.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Handle to a CW20 token contract.
#[cw_serde]
pub struct Cw20Token(pub Addr);

impl Cw20Token {
    pub fn new(addr: Addr) -> Self {
        Self(addr)
    }

    /// `balanceOf(account)`
    pub fn balance(&self, querier: &QuerierWrapper, account: &Addr) -> StdResult<Uint128> {
        let response: BalanceResponse = querier.query_wasm_smart(
            &self.0,
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )?;
        Ok(response.balance)
    }

    /// Push `amount` from the caller's (the ledger's) balance to `recipient`.
    pub fn transfer(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })
    }

    /// Pull `amount` from `owner` into `recipient`. Requires a prior
    /// `IncreaseAllowance` by `owner` for the ledger.
    pub fn transfer_from(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<CosmosMsg> {
        self.execute(Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })
    }

    /// Mint new tokens to `recipient`. The ledger must be the token's minter.
    pub fn mint(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        })
    }

    /// Burn `amount` from the ledger's own balance.
    pub fn burn(&self, amount: Uint128) -> StdResult<CosmosMsg> {
        self.execute(Cw20ExecuteMsg::Burn { amount })
    }

    fn execute(&self, msg: Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }
}
