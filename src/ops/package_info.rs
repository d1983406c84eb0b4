//! Rendering descriptors for the package-archive builder.
//!
//! The archive builder reads `.PackageInfo` files. Capability references are
//! written in their flat `capability[=architecture]` form.

use std::fmt::Write as _;

use crate::core::{CapabilityRef, PackageDescriptor};

/// Render a descriptor as `.PackageInfo` text.
pub fn render_package_info(desc: &PackageDescriptor) -> String {
    let mut out = String::new();
    let meta = desc.metadata();

    field(&mut out, "name", desc.name());
    field(&mut out, "version", desc.version());
    field(&mut out, "architecture", desc.architecture());

    if let Some(summary) = &meta.summary {
        field(&mut out, "summary", &quote(summary));
    }
    if let Some(description) = meta.description.as_ref().or(meta.summary.as_ref()) {
        field(&mut out, "description", &quote(description));
    }
    if let Some(packager) = &meta.packager {
        field(&mut out, "packager", &quote(packager));
    }
    if let Some(vendor) = &meta.vendor {
        field(&mut out, "vendor", &quote(vendor));
    }

    string_list(&mut out, "copyrights", &meta.copyrights);
    string_list(&mut out, "licenses", &meta.licenses);
    capability_list(&mut out, "provides", desc.provides());
    capability_list(&mut out, "requires", desc.requires());

    out
}

fn field(out: &mut String, key: &str, value: &str) {
    let _ = writeln!(out, "{:<14}{}", key, value);
}

fn string_list(out: &mut String, key: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} {{", key);
    for item in items {
        let _ = writeln!(out, "\t{}", quote(item));
    }
    out.push_str("}\n");
}

fn capability_list(out: &mut String, key: &str, items: &[CapabilityRef]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} {{", key);
    for item in items {
        let _ = writeln!(out, "\t{}", item);
    }
    out.push_str("}\n");
}

fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
