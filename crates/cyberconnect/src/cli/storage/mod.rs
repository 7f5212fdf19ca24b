use crate::data_storage::aws_s3::AWSS3ValidatedArgs;

pub mod aws_s3;

/// The storage backend selected on the command line.
#[derive(Debug, Clone)]
pub enum StorageParams {
    AWSS3(AWSS3ValidatedArgs),
}
