//! Device identifiers and slug derivation
//!
//! Devices are plain human-readable simulator names (e.g. "iPhone 15 Pro").
//! Each one maps to a filesystem-safe slug used to name its screenshot
//! subdirectory. The slug is derived on demand and never stored.

/// Devices required by default when none are given on the command line.
///
/// Two phone form factors and one tablet form factor. This is a fixed
/// policy constant, not configurable via environment or file.
pub const DEFAULT_DEVICES: [&str; 3] = [
    "iPhone SE (3rd generation)",
    "iPhone 15 Pro",
    "iPad Pro (12.9-inch) (6th generation)",
];

/// Derive the directory slug for a device identifier.
///
/// Lowercases the name, replaces every space with `-` and strips `(` and
/// `)`. Nothing else is altered; repeated separators are kept as-is so the
/// slug stays in lockstep with the capture side.
///
/// # Examples
///
/// ```
/// use proofcheck::device::slug;
///
/// assert_eq!(slug("iPhone SE (3rd generation)"), "iphone-se-3rd-generation");
/// ```
#[must_use]
pub fn slug(device: &str) -> String {
    device.to_lowercase().replace(' ', "-").replace(['(', ')'], "")
}
