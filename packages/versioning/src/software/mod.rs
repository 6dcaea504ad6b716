pub use self::{
    package::Package,
    version::{SemVer, VersionSegment},
};

mod package;
mod version;
