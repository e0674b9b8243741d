use std::process::ExitCode;

use clap::ArgMatches;
use coinpayments::config;
use coinpayments::handler::cmd::{self, error::CmdError};
use coinpayments::service::coinpayments::service::Service;
use coinpayments::telemetry::{get_subscriber, init_subscriber};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = get_subscriber("coinpayments-cli".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let matches = cmd::command::cli().get_matches();
    let res = match matches.subcommand() {
        Some((name, sub_matches)) => run(name, sub_matches).await,
        None => Ok(Value::Null),
    };

    match res.and_then(|v| {
        serde_json::to_string_pretty(&v).map_err(|source| CmdError::Output { source })
    }) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(name: &str, matches: &ArgMatches) -> Result<Value, CmdError> {
    match name {
        "sign" => cmd::ipn::run_sign(matches),
        "decode-ipn" => cmd::ipn::run_decode_ipn(matches),
        _ => {
            let cfg = config::Settings::new().map_err(|source| CmdError::Config { source })?;
            let service = Service::new(
                cfg.coinpayments.api_config(),
                cfg.coinpayments.public_key,
                cfg.coinpayments.private_key,
            )
            .map_err(|source| CmdError::Api { source })?;
            cmd::api::run(&service, name, matches).await
        }
    }
}
