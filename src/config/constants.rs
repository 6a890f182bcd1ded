//! Configuration constants.
//!
//! This module defines the fixed values the cleaner runs with: the target directory,
//! the file extension to pick up, and every marker the removal rules match against.

/// Directory scanned by the binary.
pub const DEFAULT_TARGET_DIR: &str = "./OMNIX LIV";

/// Only directory entries whose name ends with this suffix are cleaned.
pub const HTML_EXTENSION: &str = ".html";

/// Domain fragments and tokens that identify ad or anti-adblock payloads.
///
/// Matched as plain substrings against a script's `src` attribute and inline text,
/// so subdomains and path-embedded domains are caught alike. Order matters only for
/// which fragment gets reported in the log.
pub const AD_DOMAINS: &[&str] = &[
    "troopinvariably.com",
    "checkupoceandip.com",
    "al5sm.com",
    "cutterbewilderedvile.com",
    "disable-devtool",
];

/// Marker of an inline ad-configuration object (`var atOptions = {...}`).
pub const AD_CONFIG_MARKER: &str = "atOptions";

/// Class tokens that mark an ad container element.
pub const AD_CONTAINER_CLASSES: &[&str] = &["ad-container", "adb"];

/// Function names used by anti-adblock detection scripts.
pub const ANTI_ADBLOCK_MARKERS: &[&str] = &["detectAdblock", "detectBraveShields"];

/// Popup trigger; only removes a script together with [`ADBLOCK_TOKEN`].
pub const POPUP_MARKER: &str = "showPopup";

/// Short adblock-related token paired with [`POPUP_MARKER`].
pub const ADBLOCK_TOKEN: &str = "adb";

/// CSS selector fragments of anti-adblock overlays.
pub const ANTI_ADBLOCK_STYLE_MARKERS: &[&str] = &[".adb", ".adbs"];
