use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result as FmtResult},
};

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

use super::version::{SemVer, VersionSegment};

/// A software package deployed as a contract
///
/// The name is borrowed when built for the running code and owned when read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Package {
    name: Cow<'static, str>,
    version: SemVer,
    /// the layout version of the persisted state
    storage: VersionSegment,
}

impl Package {
    pub const fn new(name: &'static str, version: SemVer, storage: VersionSegment) -> Self {
        Self {
            name: Cow::Borrowed(name),
            version,
            storage,
        }
    }

    pub const fn version(&self) -> SemVer {
        self.version
    }

    pub const fn storage(&self) -> VersionSegment {
        self.storage
    }

    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub const fn same_storage(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl Display for Package {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!(
            "name: {}, version: {}, storage: {}",
            self.name, self.version, self.storage
        ))
    }
}
