//! Subcommands that call the merchant API with the configured keys.

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use serde_json::Value;
use snafu::ResultExt;

use crate::service::coinpayments::{
    account::{BalancesRequest, GetCallbackAddressRequest, GetDepositAddressRequest, RatesRequest},
    error::ApiError,
    service::Service,
    transaction::{CreateTransactionRequest, GetTxInfoRequest},
    transfer::{CreateWithdrawalRequest, GetWithdrawalInfoRequest},
};

use super::command::{flag, value};
use super::error::{ApiSnafu, CmdError, OutputSnafu, UnknownCommandSnafu};

fn text_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help).action(ArgAction::Set)
}

fn flag_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).help(help).action(ArgAction::SetTrue)
}

pub fn rates_command() -> Command {
    Command::new("rates")
        .about("exchange rates and coin status")
        .arg(flag_arg("short", "leave out names and confirmation counts"))
        .arg(flag_arg("accepted", "only coins enabled for this account"))
}

pub fn balances_command() -> Command {
    Command::new("balances")
        .about("coin balances of the account")
        .arg(flag_arg("all", "include coins with a zero balance"))
}

pub fn basic_info_command() -> Command {
    Command::new("basic-info").about("merchant account information")
}

pub fn deposit_address_command() -> Command {
    Command::new("deposit-address")
        .about("address for depositing funds into the account")
        .arg(text_arg("currency", "coin ticker, for example BTC").required(true))
}

pub fn callback_address_command() -> Command {
    Command::new("callback-address")
        .about("deposit address that reports incoming funds by ipn")
        .arg(text_arg("currency", "coin ticker, for example BTC").required(true))
        .arg(text_arg("ipn_url", "where deposit ipns are sent"))
        .arg(text_arg("label", "label shown for the address"))
}

pub fn create_transaction_command() -> Command {
    Command::new("create-transaction")
        .about("create a payment for a buyer")
        .arg(text_arg("amount", "amount in currency1").required(true))
        .arg(text_arg("currency1", "currency the price is given in").required(true))
        .arg(text_arg("currency2", "currency the buyer pays with").required(true))
        .arg(text_arg("buyer_email", "buyer email for refunds").required(true))
        .arg(text_arg("address", "forward the funds to this address"))
        .arg(text_arg("buyer_name", "buyer name"))
        .arg(text_arg("item_name", "item name"))
        .arg(text_arg("item_number", "item number"))
        .arg(text_arg("invoice", "invoice number"))
        .arg(text_arg("custom", "free form value echoed in ipns"))
        .arg(text_arg("ipn_url", "where transaction ipns are sent"))
        .arg(text_arg("success_url", "redirect after payment"))
        .arg(text_arg("cancel_url", "redirect after cancellation"))
}

pub fn tx_info_command() -> Command {
    Command::new("tx-info")
        .about("status of a transaction")
        .arg(text_arg("txid", "transaction id").required(true))
        .arg(flag_arg("full", "include checkout and shipping details"))
}

pub fn create_withdrawal_command() -> Command {
    Command::new("create-withdrawal")
        .about("send coins to an address or $PayByName tag")
        .arg(text_arg("amount", "amount to withdraw").required(true))
        .arg(text_arg("currency", "coin to withdraw").required(true))
        .arg(text_arg("currency2", "currency amount is given in"))
        .arg(text_arg("address", "destination address"))
        .arg(text_arg("pbntag", "destination $PayByName tag"))
        .arg(text_arg("dest_tag", "destination tag or memo"))
        .arg(text_arg("ipn_url", "where withdrawal ipns are sent"))
        .arg(text_arg("note", "note stored with the withdrawal"))
        .arg(flag_arg("add_tx_fee", "add the coin tx fee to the amount"))
        .arg(flag_arg("auto_confirm", "skip the email confirmation"))
}

pub fn withdrawal_info_command() -> Command {
    Command::new("withdrawal-info")
        .about("status of a withdrawal")
        .arg(text_arg("id", "withdrawal id").required(true))
}

/// Runs one of the api subcommands and returns its result as json.
pub async fn run(service: &Service, name: &str, matches: &ArgMatches) -> Result<Value, CmdError> {
    match name {
        "rates" => {
            let request = RatesRequest {
                short: flag(matches, "short"),
                accepted: flag(matches, "accepted"),
            };
            to_json(service.rates(&request).await)
        }
        "balances" => {
            let request = BalancesRequest {
                all: flag(matches, "all"),
            };
            to_json(service.balances(&request).await)
        }
        "basic-info" => to_json(service.get_basic_info().await),
        "deposit-address" => {
            let request = GetDepositAddressRequest {
                currency: value(matches, "currency"),
            };
            to_json(service.get_deposit_address(&request).await)
        }
        "callback-address" => {
            let request = GetCallbackAddressRequest {
                currency: value(matches, "currency"),
                ipn_url: value(matches, "ipn_url"),
                label: value(matches, "label"),
            };
            to_json(service.get_callback_address(&request).await)
        }
        "create-transaction" => {
            let request = CreateTransactionRequest {
                amount: value(matches, "amount"),
                currency1: value(matches, "currency1"),
                currency2: value(matches, "currency2"),
                buyer_email: value(matches, "buyer_email"),
                address: value(matches, "address"),
                buyer_name: value(matches, "buyer_name"),
                item_name: value(matches, "item_name"),
                item_number: value(matches, "item_number"),
                invoice: value(matches, "invoice"),
                custom: value(matches, "custom"),
                ipn_url: value(matches, "ipn_url"),
                success_url: value(matches, "success_url"),
                cancel_url: value(matches, "cancel_url"),
            };
            to_json(service.create_transaction(&request).await)
        }
        "tx-info" => {
            let request = GetTxInfoRequest {
                txid: value(matches, "txid"),
                full: flag(matches, "full"),
            };
            to_json(service.get_tx_info(&request).await)
        }
        "create-withdrawal" => {
            let request = CreateWithdrawalRequest {
                amount: value(matches, "amount"),
                add_tx_fee: flag(matches, "add_tx_fee"),
                currency: value(matches, "currency"),
                currency2: value(matches, "currency2"),
                address: value(matches, "address"),
                pbntag: value(matches, "pbntag"),
                dest_tag: value(matches, "dest_tag"),
                ipn_url: value(matches, "ipn_url"),
                auto_confirm: flag(matches, "auto_confirm"),
                note: value(matches, "note"),
            };
            to_json(service.create_withdrawal(&request).await)
        }
        "withdrawal-info" => {
            let request = GetWithdrawalInfoRequest {
                id: value(matches, "id"),
            };
            to_json(service.get_withdrawal_info(&request).await)
        }
        other => UnknownCommandSnafu { name: other }.fail(),
    }
}

fn to_json<T: Serialize>(res: Result<T, ApiError>) -> Result<Value, CmdError> {
    let res = res.context(ApiSnafu)?;
    serde_json::to_value(res).context(OutputSnafu)
}
