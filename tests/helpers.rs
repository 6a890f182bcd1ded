// Shared test helpers for building fixture directories.

use std::fs;
use std::path::{Path, PathBuf};

use ad_scrub::Config;
use tempfile::TempDir;

/// A saved page carrying one artifact per removal rule plus content that must survive.
#[allow(dead_code)] // Used by other test files
pub const AD_LADEN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>RoarZone TV</title>
<script src="https://x.al5sm.com/tag.js"></script>
<script type="text/javascript">var atOptions = {'key': 'f00', 'format': 'iframe', 'height': 90};</script>
<script>(function(){ var s = document.createElement('script'); s.src = '//cutterbewilderedvile.com/p.js'; })();</script>
<script>function detectAdblock(cb) { cb(!window.canRunAds); }</script>
<script>if (adb) { showPopup(); }</script>
<style>.adb { position: fixed; inset: 0; } .adbs { display: block; }</style>
<style>#channel-grid { display: grid; }</style>
<script src="script.js"></script>
</head>
<body>
<div id="channel-grid" class="grid"></div>
<div class="ad-container"><a href="https://ads.example/"><img src="banner.gif"></a></div>
<script>function showPopup() { modal.classList.add('active'); }</script>
</body>
</html>
"#;

/// Creates a temp directory populated with `(name, bytes)` files.
#[allow(dead_code)] // Used by other test files
pub fn fixture_dir(files: &[(&str, &[u8])]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (name, bytes) in files {
        fs::write(dir.path().join(name), bytes).expect("Failed to write fixture");
    }
    dir
}

/// Default configuration pointed at `dir`.
#[allow(dead_code)] // Used by other test files
pub fn config_for(dir: &Path) -> Config {
    Config {
        target_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

/// Reads a fixture file back as text.
#[allow(dead_code)] // Used by other test files
pub fn read(dir: &Path, name: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}
