//! The builtin Haiku package universe.
//!
//! This is the table the `HaikuPackages` Jam rules used to declare. Every
//! entry is parameterized only by architecture.

use crate::core::{Category, PackageDefinition};

/// Version given to builtin packages unless the profile overrides it.
pub const DEFAULT_VERSION: &str = "r1~beta5_1";

/// Architecture used when none is configured.
pub const DEFAULT_ARCHITECTURE: &str = "x86_64";

/// Architectures the Haiku build supports.
pub const KNOWN_ARCHITECTURES: &[&str] = &[
    "x86_64", "x86", "x86_gcc2", "arm", "arm64", "riscv64", "sparc", "m68k", "ppc",
];

const VENDOR: &str = "Haiku Project";
const PACKAGER: &str = "The Haiku build system <build-system@haiku-os.org>";
const COPYRIGHT: &str = "2001-2024 Haiku, Inc. et al";

/// Definitions of all builtin packages, in declaration order.
pub fn definitions() -> Vec<PackageDefinition> {
    vec![
        haiku("haiku", "The Haiku base system")
            .provides(["haiku=${arch}", "lib:libroot=${arch}", "lib:libbe=${arch}"])
            .categories(&[Category::System])
            .core(true),
        haiku("haiku_loader", "The Haiku boot loader")
            .categories(&[Category::System])
            .core(true),
        haiku("haiku_datatranslators", "Data translators for Haiku")
            .requires(["haiku=${arch}"])
            .categories(&[Category::System, Category::Media])
            .core(true),
        haiku("haiku_devel", "The Haiku development headers and libraries")
            .requires(["haiku=${arch}"])
            .categories(&[Category::Development]),
        haiku("haiku_source", "The Haiku source code")
            .categories(&[Category::Development]),
        haiku("makefile_engine", "Makefile based build engine for Haiku")
            .requires(["haiku_devel=${arch}", "cmd:make"])
            .categories(&[Category::Development]),
        haiku("haiku_extras", "Extra tools and add-ons")
            .requires(["haiku=${arch}"])
            .categories(&[Category::Utilities]),
        haiku("haiku_userguide", "The Haiku user guide")
            .categories(&[Category::Utilities]),
        haiku("haiku_welcome", "Welcome documents for Haiku")
            .requires(["haiku_userguide=${arch}"])
            .categories(&[Category::Utilities]),
        haiku("netfs", "Network file system")
            .requires(["haiku=${arch}", "userland_fs=${arch}"])
            .categories(&[Category::Network]),
        haiku("userland_fs", "Userland file system framework")
            .requires(["haiku=${arch}"])
            .categories(&[Category::Utilities]),
        haiku("webpositive", "The WebPositive web browser")
            .requires(["haiku=${arch}", "lib:libWebKitLegacy"])
            .categories(&[Category::Network, Category::Media]),
    ]
}

fn haiku(name: &str, summary: &str) -> PackageDefinition {
    let mut def = PackageDefinition::new(name).summary(summary);
    def.vendor = Some(VENDOR.to_string());
    def.packager = Some(PACKAGER.to_string());
    def.copyrights = vec![COPYRIGHT.to_string()];
    def.licenses = vec!["MIT".to_string()];
    def
}
