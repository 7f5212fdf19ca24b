use clap::Args;
use url::Url;

/// Parameters used to config the AWS SDK. None of the credential values
/// have defaults; a missing one is reported by `validate_aws_config_params`.
#[derive(Debug, Clone, Args)]
pub struct AWSConfigCliArgs {
    /// The access key ID.
    #[arg(env = "AWS_ACCESS_KEY_ID", long)]
    pub aws_access_key_id: Option<String>,

    /// The secret access key.
    #[arg(env = "AWS_SECRET_ACCESS_KEY", long)]
    pub aws_secret_access_key: Option<String>,

    /// The region.
    #[arg(env = "AWS_REGION", long)]
    pub aws_region: Option<String>,

    /// Endpoint override for S3-compatible stores.
    #[arg(env = "AWS_ENDPOINT_URL", long)]
    pub aws_endpoint_url: Option<Url>,
}

/// Validated AWS provider parameters.
#[derive(Debug, Clone)]
pub struct AWSConfigParams {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    pub aws_endpoint_url: Option<Url>,
}
