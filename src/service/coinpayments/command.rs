use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use snafu::ResultExt;

use super::error::{ApiError, EncodeParamsSnafu};

/// Form parameters of one API call, sorted by key.
pub type Params = BTreeMap<String, String>;

/// A typed API command.
///
/// Requests are plain structs of string fields; empty fields are left out of
/// the call, as the provider treats a missing parameter and an empty one
/// differently.
pub trait Command: Serialize {
    /// The `cmd` value sent to the API.
    const NAME: &'static str;

    /// Shape of the `result` member on success.
    type Response: DeserializeOwned;

    fn params(&self) -> Result<Params, ApiError> {
        let value = serde_json::to_value(self).context(EncodeParamsSnafu {
            command: Self::NAME,
        })?;
        let mut params = Params::new();
        if let Value::Object(fields) = value {
            for (key, value) in fields {
                match value {
                    Value::Null => {}
                    Value::String(s) if s.is_empty() => {}
                    Value::String(s) => {
                        params.insert(key, s);
                    }
                    other => {
                        params.insert(key, other.to_string());
                    }
                }
            }
        }
        Ok(params)
    }
}
