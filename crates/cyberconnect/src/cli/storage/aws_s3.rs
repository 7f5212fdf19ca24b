use clap::Args;

/// Parameters used to config AWS S3.
#[derive(Debug, Clone, Args)]
pub struct AWSS3CliArgs {
    /// Use the AWS s3 client
    #[arg(long)]
    pub aws_s3: bool,

    /// The name of the S3 bucket. No default; the bucket namespace is
    /// externally owned.
    #[arg(env = "AWS_S3_BUCKET_NAME", long)]
    pub bucket_name: Option<String>,
}
