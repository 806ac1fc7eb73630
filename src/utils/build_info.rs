//! Build metadata embedded by `build.rs` through `MOMENTS_WRITER_BUILD_*`.

const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub revision: &'static str,
    pub tree: &'static str,
    pub built_at: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
    pub rustc: &'static str,
}

impl BuildMetadata {
    /// `abc1234` or `abc1234-dirty`; `unknown` outside a git checkout.
    pub fn revision_label(&self) -> String {
        match self.tree {
            "dirty" => format!("{}-dirty", self.revision),
            _ => self.revision.to_string(),
        }
    }

    /// Labelled rows for the `version` command, in display order.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Revision", self.revision_label()),
            ("Built at", self.built_at.to_string()),
            ("Target", self.target.to_string()),
            ("Profile", self.profile.to_string()),
            ("Rustc", self.rustc.to_string()),
        ]
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        revision: option_env!("MOMENTS_WRITER_BUILD_HASH").unwrap_or(UNKNOWN),
        tree: option_env!("MOMENTS_WRITER_BUILD_STATUS").unwrap_or(UNKNOWN),
        built_at: option_env!("MOMENTS_WRITER_BUILD_TIMESTAMP").unwrap_or(UNKNOWN),
        target: option_env!("MOMENTS_WRITER_BUILD_TARGET").unwrap_or(UNKNOWN),
        profile: option_env!("MOMENTS_WRITER_BUILD_PROFILE").unwrap_or(UNKNOWN),
        rustc: option_env!("MOMENTS_WRITER_BUILD_RUSTC").unwrap_or(UNKNOWN),
    }
}
