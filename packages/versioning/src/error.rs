use thiserror::Error;

use sdk::cosmwasm_std::StdError;

use crate::software::Package;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Versioning] Failed to load the stored package version! Cause: {0}")]
    LoadVersion(StdError),

    #[error("[Versioning] Failed to store the package version! Cause: {0}")]
    StoreVersion(StdError),

    #[error(
        "[Versioning] The package names do not match! The current package is \"{0}\", the new package is \"{1}\"."
    )]
    PackageNamesMismatch(String, String),

    #[error(
        "[Versioning] The package does not increase monotonically! The current package is \"{0}\", the new package is \"{1}\"."
    )]
    OlderPackageCode(String, String),

    #[error(
        "[Versioning] The package storage versions do not match! The current package is \"{0}\", the new package is \"{1}\"."
    )]
    PackageStorageVersionMismatch(String, String),
}

impl Error {
    pub(crate) fn package_names_mismatch(current: &Package, new: &Package) -> Self {
        Self::PackageNamesMismatch(current.to_string(), new.to_string())
    }

    pub(crate) fn older_package_code(current: &Package, new: &Package) -> Self {
        Self::OlderPackageCode(current.to_string(), new.to_string())
    }

    pub(crate) fn package_storage_versions_mismatch(current: &Package, new: &Package) -> Self {
        Self::PackageStorageVersionMismatch(current.to_string(), new.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
