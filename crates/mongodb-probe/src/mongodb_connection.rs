use mongodb::{
    options::{ClientOptions, DriverInfo},
    Client,
};

use crate::interface_types::{ConnectionAttempt, ProbeError};

const DRIVER_NAME: &str = "mongodb-probe";

/// Used when the connection string does not set `appName`.
const DEFAULT_APP_NAME: &str = "mongodb-probe";

/// Build a client for a connection attempt. The driver connects lazily, so this does not touch
/// the network for plain `mongodb://` strings. Resolving a `mongodb+srv://` string does a DNS
/// lookup here.
pub async fn get_mongodb_client(attempt: &ConnectionAttempt) -> Result<Client, ProbeError> {
    let options = client_options(attempt).await?;
    let client = Client::with_options(options).map_err(ProbeError::from_parse_error)?;
    Ok(client)
}

pub async fn client_options(attempt: &ConnectionAttempt) -> Result<ClientOptions, ProbeError> {
    let mut options = ClientOptions::parse(attempt.uri())
        .await
        .map_err(ProbeError::from_parse_error)?;

    options.server_selection_timeout = Some(attempt.timeout());

    // Shows up in server logs and in `db.currentOp()`
    options.driver_info = Some(DriverInfo::builder().name(DRIVER_NAME).build());
    if options.app_name.is_none() {
        options.app_name = Some(DEFAULT_APP_NAME.to_owned());
    }

    Ok(options)
}
