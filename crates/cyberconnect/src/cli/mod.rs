use clap::{ArgGroup, Parser};

use crate::cli::aws_config::{AWSConfigCliArgs, AWSConfigParams};
use crate::cli::instrumentation::InstrumentationCliArgs;
use crate::cli::server::ServerCliArgs;
use crate::cli::storage::aws_s3::AWSS3CliArgs;
use crate::cli::storage::StorageParams;
use crate::data_storage::aws_s3::AWSS3ValidatedArgs;
use crate::routes::ServerParams;
use crate::telemetry::InstrumentationParams;

pub mod aws_config;
pub mod instrumentation;
pub mod server;
pub mod storage;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[clap(
    group(
        ArgGroup::new("storage")
            .args(&["aws_s3"])
            .required(true)
            .multiple(false)
    ),
)]
pub struct RunCmd {
    // AWS Config
    #[clap(flatten)]
    pub aws_config_args: AWSConfigCliArgs,

    // Storage
    #[clap(flatten)]
    pub aws_s3_args: AWSS3CliArgs,

    // Server
    #[clap(flatten)]
    pub server_args: ServerCliArgs,

    #[clap(flatten)]
    pub instrumentation_args: InstrumentationCliArgs,
}

impl RunCmd {
    pub fn validate_aws_config_params(&self) -> Result<AWSConfigParams, String> {
        Ok(AWSConfigParams {
            aws_access_key_id: self
                .aws_config_args
                .aws_access_key_id
                .clone()
                .ok_or_else(|| "AWS access key ID is required".to_string())?,
            aws_secret_access_key: self
                .aws_config_args
                .aws_secret_access_key
                .clone()
                .ok_or_else(|| "AWS secret access key is required".to_string())?,
            aws_region: self
                .aws_config_args
                .aws_region
                .clone()
                .ok_or_else(|| "AWS region is required".to_string())?,
            aws_endpoint_url: self.aws_config_args.aws_endpoint_url.clone(),
        })
    }

    pub fn validate_storage_params(&self) -> Result<StorageParams, String> {
        if self.aws_s3_args.aws_s3 {
            Ok(StorageParams::AWSS3(AWSS3ValidatedArgs {
                bucket_name: self
                    .aws_s3_args
                    .bucket_name
                    .clone()
                    .ok_or_else(|| "S3 bucket name is required".to_string())?,
            }))
        } else {
            Err("Only AWS S3 is supported as of now".to_string())
        }
    }

    pub fn validate_server_params(&self) -> Result<ServerParams, String> {
        Ok(ServerParams { host: self.server_args.host.clone(), port: self.server_args.port })
    }

    pub fn validate_instrumentation_params(&self) -> Result<InstrumentationParams, String> {
        Ok(InstrumentationParams {
            service_name: self
                .instrumentation_args
                .otel_service_name
                .clone()
                .ok_or_else(|| "OTel service name is required".to_string())?,
            collector_endpoint: self.instrumentation_args.otel_collector_endpoint.clone(),
            log_level: self.instrumentation_args.log_level,
        })
    }
}
