use sdk::{
    cosmwasm_std::Storage,
    cw_storage_plus::Item,
};

pub use self::software::{Package, SemVer, VersionSegment};
use self::error::{Error, Result};

pub mod error;
mod software;

const VERSION_STORAGE_KEY: Item<Package> = Item::new("contract_version");

/// Build the [`Package`] of the crate this macro is expanded in
///
/// Usable in a const context.
#[macro_export]
macro_rules! package {
    ($storage: expr $(,)?) => {{
        $crate::Package::new(
            ::core::env!(
                "CARGO_PKG_NAME",
                "Cargo package name is not set as an environment variable!"
            ),
            $crate::SemVer::parse(::core::env!(
                "CARGO_PKG_VERSION",
                "Cargo package version is not set as an environment variable!"
            )),
            $storage,
        )
    }};
}

pub fn initialize(storage: &mut dyn Storage, package: Package) -> Result<()> {
    VERSION_STORAGE_KEY
        .save(storage, &package)
        .map_err(Error::StoreVersion)
}

pub fn current(storage: &dyn Storage) -> Result<Package> {
    VERSION_STORAGE_KEY
        .load(storage)
        .map_err(Error::LoadVersion)
}

/// Replace the stored package with `new` and return the previous one
///
/// Only software updates are accepted: the package name and storage version
/// must stay the same and the software version must not go down.
pub fn update_software(storage: &mut dyn Storage, new: Package) -> Result<Package> {
    let prev = current(storage)?;

    if !prev.same_name(&new) {
        Err(Error::package_names_mismatch(&prev, &new))
    } else if !prev.same_storage(&new) {
        Err(Error::package_storage_versions_mismatch(&prev, &new))
    } else if prev.version() > new.version() {
        Err(Error::older_package_code(&prev, &new))
    } else {
        VERSION_STORAGE_KEY
            .save(storage, &new)
            .map_err(Error::StoreVersion)
            .map(|()| prev)
    }
}
