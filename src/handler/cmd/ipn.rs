//! Offline tools: signing messages and decoding stored IPN bodies.

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::{json, Value};
use snafu::ResultExt;

use crate::service::auth::hmac;
use crate::service::ipn::service::Service as IpnService;

use super::command::value;
use super::error::{CmdError, IpnSnafu, OutputSnafu, ReadFileSnafu, SignerSnafu};

pub fn sign_command() -> Command {
    Command::new("sign")
        .about("HMAC-SHA512 of a message, as sent in the HMAC header")
        .arg(
            Arg::new("secret")
                .long("secret")
                .help("api private key or ipn secret")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .help("message to sign")
                .conflicts_with("file")
                .required_unless_present("file")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("sign the bytes of this file")
                .action(ArgAction::Set),
        )
}

pub fn decode_ipn_command() -> Command {
    Command::new("decode-ipn")
        .about("decode a stored ipn body, checking its HMAC when a secret is given")
        .arg(
            Arg::new("file")
                .long("file")
                .help("file holding the raw form encoded body")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("secret")
                .long("secret")
                .help("ipn secret, skips verification when empty")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("hmac")
                .long("hmac")
                .help("value of the HMAC header that came with the body")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("merchant")
                .long("merchant")
                .help("expected merchant id")
                .action(ArgAction::Set),
        )
}

pub fn run_sign(matches: &ArgMatches) -> Result<Value, CmdError> {
    let message = match matches.get_one::<String>("file") {
        Some(path) => read_file(path)?,
        None => value(matches, "message").into_bytes(),
    };
    let signature = hmac::sign(value(matches, "secret").as_bytes(), &message).context(SignerSnafu)?;
    Ok(json!({ "hmac": signature }))
}

pub fn run_decode_ipn(matches: &ArgMatches) -> Result<Value, CmdError> {
    let body = read_file(&value(matches, "file"))?;
    let service = IpnService::new(value(matches, "secret")).with_merchant(value(matches, "merchant"));
    let signature = matches.get_one::<String>("hmac").map(String::as_str);
    let notification = service.parse(signature, &body).context(IpnSnafu)?;
    serde_json::to_value(&notification).context(OutputSnafu)
}

fn read_file(path: &str) -> Result<Vec<u8>, CmdError> {
    std::fs::read(path).context(ReadFileSnafu { path })
}
