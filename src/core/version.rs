//! Build metadata generated by the build script

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// One-line version banner: "<name> <version> (<hash>, built <time>)"
pub fn banner(name: &str) -> String {
    format!(
        "{} {} ({}, built {})",
        name,
        env!("CARGO_PKG_VERSION"),
        git_hash(),
        build_time()
    )
}
