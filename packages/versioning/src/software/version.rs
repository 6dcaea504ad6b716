use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use sdk::schemars::{self, JsonSchema};

pub type VersionSegment = u16;

#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct SemVer {
    major: VersionSegment,
    minor: VersionSegment,
    patch: VersionSegment,
}

impl SemVer {
    /// Parse a `major.minor.patch` string
    ///
    /// Meant for const evaluation where a malformed input stops the build.
    pub const fn parse(version: &str) -> Self {
        let bytes = version.as_bytes();

        let (major, at) = parse_segment(bytes, 0);
        let at = skip_separator(bytes, at);
        let (minor, at) = parse_segment(bytes, at);
        let at = skip_separator(bytes, at);
        let (patch, at) = parse_segment(bytes, at);

        assert!(
            at == bytes.len(),
            "Unexpected characters after the patch segment in version string!"
        );

        Self {
            major,
            minor,
            patch,
        }
    }
}

const fn parse_segment(bytes: &[u8], start: usize) -> (VersionSegment, usize) {
    let mut at = start;
    let mut segment: VersionSegment = 0;

    while at < bytes.len() && bytes[at].is_ascii_digit() {
        segment = match segment.checked_mul(10) {
            Some(segment) => segment,
            None => panic!("Version segment overflow!"),
        };
        segment = match segment.checked_add((bytes[at] - b'0') as VersionSegment) {
            Some(segment) => segment,
            None => panic!("Version segment overflow!"),
        };
        at += 1;
    }

    assert!(at != start, "Missing segment in version string!");

    (segment, at)
}

const fn skip_separator(bytes: &[u8], at: usize) -> usize {
    assert!(
        at < bytes.len() && bytes[at] == b'.',
        "Version segments should be separated by a dot!"
    );

    at + 1
}

impl Display for SemVer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_fmt(format_args!(
            "{}.{}.{}",
            self.major, self.minor, self.patch
        ))
    }
}
