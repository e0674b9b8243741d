use clap::{ArgMatches, Command};

use super::{api, ipn};

pub fn command() -> Command {
    Command::new("coinpayments")
        .about("coinpayments merchant api and ipn tools")
        .subcommand_required(true)
        .arg_required_else_help(true)
}

/// The root command with every subcommand attached.
pub fn cli() -> Command {
    command()
        .subcommand(api::rates_command())
        .subcommand(api::balances_command())
        .subcommand(api::basic_info_command())
        .subcommand(api::deposit_address_command())
        .subcommand(api::callback_address_command())
        .subcommand(api::create_transaction_command())
        .subcommand(api::tx_info_command())
        .subcommand(api::create_withdrawal_command())
        .subcommand(api::withdrawal_info_command())
        .subcommand(ipn::sign_command())
        .subcommand(ipn::decode_ipn_command())
}

/// Value of an optional string argument, empty when absent.
pub(crate) fn value(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// `"1"` when the flag is present, empty otherwise.
pub(crate) fn flag(matches: &ArgMatches, id: &str) -> String {
    if matches.get_flag(id) {
        "1".to_string()
    } else {
        String::new()
    }
}
