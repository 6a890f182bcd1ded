//! Removal rules.
//!
//! Each rule is a predicate over a single element that returns a [`Removal`] when the
//! element has to go. The predicates only look at the element itself (its `src`, its
//! inline text, or its class tokens), so they can be evaluated against the live tree
//! in one sweep per rule.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::Patterns;
use crate::utils::parse_selector_unsafe;

pub(crate) static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script", "SCRIPT_SELECTOR"));

pub(crate) static STYLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("style", "STYLE_SELECTOR"));

pub(crate) static CLASS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[class]", "CLASS_SELECTOR"));

/// The removal rules, in the order the cleaner applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RemovalRule {
    /// `<script src>` pointing at an ad domain
    ExternalAdScript,
    /// Inline script mentioning an ad domain
    InlineAdScript,
    /// Inline ad-configuration object (`atOptions`)
    AdConfig,
    /// Element carrying an ad-container class
    AdContainer,
    /// Anti-adblock detection or popup script
    AntiAdblockScript,
    /// Anti-adblock overlay styles
    AntiAdblockStyle,
}

impl RemovalRule {
    /// Returns a human-readable label for this rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalRule::ExternalAdScript => "ad script",
            RemovalRule::InlineAdScript => "inline ad script",
            RemovalRule::AdConfig => "ad config script",
            RemovalRule::AdContainer => "ad container",
            RemovalRule::AntiAdblockScript => "anti-adblock script",
            RemovalRule::AntiAdblockStyle => "anti-adblock style",
        }
    }
}

/// A single removal decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Rule that matched
    pub rule: RemovalRule,
    /// What matched: the script source, the marker found, or the class list
    pub detail: String,
}

impl Removal {
    fn new(rule: RemovalRule, detail: impl Into<String>) -> Self {
        Self {
            rule,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule.as_str(), self.detail)
    }
}

/// Concatenated inline text of an element, or `None` when it has none.
fn inline_text(element: &ElementRef<'_>) -> Option<String> {
    let text: String = element.text().collect();
    (!text.is_empty()).then_some(text)
}

/// First fragment (in configured order) contained in `haystack`.
fn find_fragment<'p>(haystack: &str, fragments: &'p [String]) -> Option<&'p str> {
    fragments
        .iter()
        .map(String::as_str)
        .find(|fragment| haystack.contains(fragment))
}

/// External and inline ad-script check, evaluated together on each script.
///
/// A script whose `src` matches is reported by its source and never tested on its
/// inline text.
pub(crate) fn ad_script(element: &ElementRef<'_>, patterns: &Patterns) -> Option<Removal> {
    if let Some(src) = element.value().attr("src") {
        if find_fragment(src, &patterns.ad_domains).is_some() {
            return Some(Removal::new(RemovalRule::ExternalAdScript, src));
        }
    }

    let text = inline_text(element)?;
    find_fragment(&text, &patterns.ad_domains)
        .map(|domain| Removal::new(RemovalRule::InlineAdScript, domain))
}

pub(crate) fn ad_config(element: &ElementRef<'_>, patterns: &Patterns) -> Option<Removal> {
    let text = inline_text(element)?;
    text.contains(patterns.ad_config_marker.as_str())
        .then(|| Removal::new(RemovalRule::AdConfig, patterns.ad_config_marker.as_str()))
}

/// Token membership on the `class` attribute, not a substring of the whole value.
pub(crate) fn ad_container(element: &ElementRef<'_>, patterns: &Patterns) -> Option<Removal> {
    let is_container = element
        .value()
        .classes()
        .any(|class| patterns.container_classes.iter().any(|c| c == class));
    if !is_container {
        return None;
    }
    let classes = element.value().attr("class").unwrap_or_default();
    Some(Removal::new(
        RemovalRule::AdContainer,
        format!("class={}", classes),
    ))
}

/// Detection markers match alone; the popup marker only together with the adblock token.
pub(crate) fn anti_adblock_script(
    element: &ElementRef<'_>,
    patterns: &Patterns,
) -> Option<Removal> {
    let text = inline_text(element)?;
    if let Some(marker) = find_fragment(&text, &patterns.detection_markers) {
        return Some(Removal::new(RemovalRule::AntiAdblockScript, marker));
    }
    if text.contains(patterns.popup_marker.as_str())
        && text.contains(patterns.adblock_token.as_str())
    {
        return Some(Removal::new(
            RemovalRule::AntiAdblockScript,
            format!("{} + {}", patterns.popup_marker, patterns.adblock_token),
        ));
    }
    None
}

pub(crate) fn anti_adblock_style(
    element: &ElementRef<'_>,
    patterns: &Patterns,
) -> Option<Removal> {
    let text = inline_text(element)?;
    find_fragment(&text, &patterns.style_markers)
        .map(|marker| Removal::new(RemovalRule::AntiAdblockStyle, marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first<'a>(document: &'a Html, selector: &Selector) -> ElementRef<'a> {
        document
            .select(selector)
            .next()
            .expect("test document should contain the element")
    }

    #[test]
    fn test_find_fragment_reports_first_configured() {
        let fragments = vec!["b.com".to_string(), "a.com".to_string()];
        assert_eq!(find_fragment("x.a.com/b.com", &fragments), Some("b.com"));
        assert_eq!(find_fragment("example.org", &fragments), None);
    }

    #[test]
    fn test_ad_script_src_wins_over_inline() {
        let document = Html::parse_document(
            r#"<script src="https://cdn.troopinvariably.com/x.js">load("al5sm.com")</script>"#,
        );
        let removal = ad_script(&first(&document, &SCRIPT_SELECTOR), &Patterns::default());
        assert_eq!(
            removal,
            Some(Removal::new(
                RemovalRule::ExternalAdScript,
                "https://cdn.troopinvariably.com/x.js"
            ))
        );
    }

    #[test]
    fn test_ad_script_clean_src_falls_through_to_inline() {
        let document =
            Html::parse_document(r#"<script src="/js/app.js">inject("disable-devtool")</script>"#);
        let removal = ad_script(&first(&document, &SCRIPT_SELECTOR), &Patterns::default());
        assert_eq!(
            removal,
            Some(Removal::new(RemovalRule::InlineAdScript, "disable-devtool"))
        );
    }

    #[test]
    fn test_ad_script_path_embedded_domain() {
        let document =
            Html::parse_document(r#"<script src="/proxy/checkupoceandip.com/tag.js"></script>"#);
        let removal = ad_script(&first(&document, &SCRIPT_SELECTOR), &Patterns::default());
        assert_eq!(removal.map(|r| r.rule), Some(RemovalRule::ExternalAdScript));
    }

    #[test]
    fn test_ad_script_no_match() {
        let document = Html::parse_document(r#"<script src="/js/app.js"></script>"#);
        assert!(ad_script(&first(&document, &SCRIPT_SELECTOR), &Patterns::default()).is_none());
    }

    #[test]
    fn test_ad_container_token_membership() {
        let document = Html::parse_document(
            r#"<div class="banner adb wide">x</div><div class="adblock-notice">y</div>"#,
        );
        let mut elements = document.select(&CLASS_SELECTOR);
        let matched = elements.next().expect("first div");
        let not_matched = elements.next().expect("second div");

        assert_eq!(
            ad_container(&matched, &Patterns::default()),
            Some(Removal::new(RemovalRule::AdContainer, "class=banner adb wide"))
        );
        assert!(ad_container(&not_matched, &Patterns::default()).is_none());
    }

    #[test]
    fn test_anti_adblock_popup_needs_both_tokens() {
        let patterns = Patterns::default();
        let popup_only = Html::parse_document("<script>showPopup('welcome')</script>");
        let popup_adb = Html::parse_document("<script>if (adb) showPopup()</script>");
        let detection = Html::parse_document("<script>detectBraveShields()</script>");

        assert!(anti_adblock_script(&first(&popup_only, &SCRIPT_SELECTOR), &patterns).is_none());
        assert_eq!(
            anti_adblock_script(&first(&popup_adb, &SCRIPT_SELECTOR), &patterns),
            Some(Removal::new(RemovalRule::AntiAdblockScript, "showPopup + adb"))
        );
        assert_eq!(
            anti_adblock_script(&first(&detection, &SCRIPT_SELECTOR), &patterns),
            Some(Removal::new(
                RemovalRule::AntiAdblockScript,
                "detectBraveShields"
            ))
        );
    }

    #[test]
    fn test_anti_adblock_style_markers() {
        let patterns = Patterns::default();
        let matched = Html::parse_document("<style>.adbs{position:fixed}</style>");
        let clean = Html::parse_document("<style>body{margin:0}</style>");

        assert_eq!(
            anti_adblock_style(&first(&matched, &STYLE_SELECTOR), &patterns),
            Some(Removal::new(RemovalRule::AntiAdblockStyle, ".adb"))
        );
        assert!(anti_adblock_style(&first(&clean, &STYLE_SELECTOR), &patterns).is_none());
    }

    #[test]
    fn test_empty_script_never_matches_inline_rules() {
        let patterns = Patterns::default();
        let document = Html::parse_document("<script></script>");
        let script = first(&document, &SCRIPT_SELECTOR);
        assert!(ad_script(&script, &patterns).is_none());
        assert!(ad_config(&script, &patterns).is_none());
        assert!(anti_adblock_script(&script, &patterns).is_none());
    }

    #[test]
    fn test_removal_display() {
        let removal = Removal::new(RemovalRule::AdConfig, "atOptions");
        assert_eq!(removal.to_string(), "ad config script: atOptions");
    }
}
