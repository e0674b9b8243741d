use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SignerError {
    #[snafu(display("cannot initialize hmac with the given key: {source}"))]
    InvalidKey { source: hmac::digest::InvalidLength },
}
