use std::sync::Arc;

use aws_config::meta::region::RegionProviderChain;
use aws_config::{Region, SdkConfig};
use aws_credential_types::Credentials;
use color_eyre::eyre::eyre;

use crate::cli::aws_config::AWSConfigParams;
use crate::cli::storage::StorageParams;
use crate::cli::RunCmd;
use crate::data_storage::aws_s3::AWSS3;
use crate::data_storage::DataStorage;
use crate::feed::Feed;
use crate::routes::ServerParams;

/// The app config. Owns every client handle; no global state.
pub struct Config {
    server_config: ServerParams,
    /// Storage client for feed snapshots
    storage: Box<dyn DataStorage>,
    /// The in-memory feed state
    feed: Feed,
}

/// `ProviderConfig` is an enum used to represent the global config built
/// using the settings provider. More providers can be added eg : GCP, AZURE etc.
///
/// We are using Arc<SdkConfig> because the config size is large and keeping it
/// a pointer is a better way to pass it through.
#[derive(Clone)]
pub enum ProviderConfig {
    AWS(Box<SdkConfig>),
}

impl ProviderConfig {
    pub fn get_aws_client_or_panic(&self) -> &SdkConfig {
        match self {
            ProviderConfig::AWS(config) => config.as_ref(),
        }
    }
}

/// To build a `SdkConfig` for AWS provider.
pub async fn get_aws_config(aws_config: &AWSConfigParams) -> SdkConfig {
    let region = aws_config.aws_region.clone();
    let region_provider = RegionProviderChain::first_try(Region::new(region)).or_default_provider();
    let credentials =
        Credentials::from_keys(aws_config.aws_access_key_id.clone(), aws_config.aws_secret_access_key.clone(), None);

    let mut loader = aws_config::from_env().credentials_provider(credentials).region(region_provider);
    if let Some(endpoint_url) = &aws_config.aws_endpoint_url {
        loader = loader.endpoint_url(endpoint_url.as_str());
    }
    loader.load().await
}

/// Initializes the app config
pub async fn init_config(run_cmd: &RunCmd) -> color_eyre::Result<Arc<Config>> {
    let aws_config =
        run_cmd.validate_aws_config_params().map_err(|e| eyre!("Failed to validate AWS config params: {e}"))?;
    let provider_config = Arc::new(ProviderConfig::AWS(Box::new(get_aws_config(&aws_config).await)));

    let server_config = run_cmd.validate_server_params().map_err(|e| eyre!("Failed to validate server params: {e}"))?;

    // init storage
    let data_storage_params =
        run_cmd.validate_storage_params().map_err(|e| eyre!("Failed to validate storage params: {e}"))?;
    let storage_client = build_storage_client(&data_storage_params, provider_config).await;

    Ok(Arc::new(Config::new(server_config, storage_client, Feed::seeded())))
}

impl Config {
    /// Create a new config
    pub fn new(server_config: ServerParams, storage: Box<dyn DataStorage>, feed: Feed) -> Self {
        Self { server_config, storage, feed }
    }

    /// Returns the server config
    pub fn server_config(&self) -> &ServerParams {
        &self.server_config
    }

    /// Returns the storage provider
    pub fn storage(&self) -> &dyn DataStorage {
        self.storage.as_ref()
    }

    /// Returns the feed state
    pub fn feed(&self) -> &Feed {
        &self.feed
    }
}

pub async fn build_storage_client(
    data_storage_params: &StorageParams,
    provider_config: Arc<ProviderConfig>,
) -> Box<dyn DataStorage + Send + Sync> {
    match data_storage_params {
        StorageParams::AWSS3(aws_s3_params) => Box::new(AWSS3::new_with_settings(aws_s3_params, provider_config)),
    }
}
