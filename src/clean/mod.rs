//! Document cleaning.
//!
//! This module parses one HTML document, applies the removal rules in a fixed order
//! and serializes the result:
//! 1. Scripts loaded from (or mentioning) an ad domain
//! 2. Inline ad-configuration scripts
//! 3. Ad container elements (with their subtree)
//! 4. Anti-adblock detection and popup scripts
//! 5. Anti-adblock styles
//!
//! Every rule re-queries the live tree, so a node removed by an earlier rule is
//! never seen by a later one.

mod rules;
mod serialize;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::config::Patterns;
use rules::{CLASS_SELECTOR, SCRIPT_SELECTOR, STYLE_SELECTOR};

// Re-export public API
pub use rules::{Removal, RemovalRule};
pub use serialize::to_pretty_html;

/// Result of cleaning one document.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    /// Serialized cleaned document
    pub html: String,
    /// Removal decisions, in the order they were applied
    pub removals: Vec<Removal>,
}

/// Applies every removal rule to a parsed document, mutating it in place.
///
/// Returns the removal decisions in application order. Each decision is also logged
/// at `info` level.
pub fn clean_document(document: &mut Html, patterns: &Patterns) -> Vec<Removal> {
    let mut removals = Vec::new();

    removals.extend(remove_matching(document, &SCRIPT_SELECTOR, |el| {
        rules::ad_script(el, patterns)
    }));
    removals.extend(remove_matching(document, &SCRIPT_SELECTOR, |el| {
        rules::ad_config(el, patterns)
    }));
    removals.extend(remove_matching(document, &CLASS_SELECTOR, |el| {
        rules::ad_container(el, patterns)
    }));
    removals.extend(remove_matching(document, &SCRIPT_SELECTOR, |el| {
        rules::anti_adblock_script(el, patterns)
    }));
    removals.extend(remove_matching(document, &STYLE_SELECTOR, |el| {
        rules::anti_adblock_style(el, patterns)
    }));

    removals
}

/// Parses `input`, cleans it and serializes the result.
///
/// Parsing is permissive: malformed markup is repaired by html5ever rather than
/// rejected, so this never fails.
///
/// # Arguments
///
/// * `input` - Raw HTML text
/// * `patterns` - Markers the rules match against
/// * `pretty_print` - Indented output, or html5ever's compact serialization
pub fn clean_html(input: &str, patterns: &Patterns, pretty_print: bool) -> CleanOutcome {
    let mut document = Html::parse_document(input);
    let removals = clean_document(&mut document, patterns);
    let html = if pretty_print {
        to_pretty_html(&document)
    } else {
        document.html()
    };
    CleanOutcome { html, removals }
}

/// Detaches every element matched by `selector` for which `decide` returns a removal.
///
/// Candidates are collected from the tree as it is when the rule starts; a candidate
/// inside a subtree detached earlier in the same sweep is skipped.
fn remove_matching<F>(document: &mut Html, selector: &Selector, decide: F) -> Vec<Removal>
where
    F: Fn(&ElementRef<'_>) -> Option<Removal>,
{
    let candidates: Vec<(NodeId, Removal)> = document
        .root_element()
        .select(selector)
        .filter_map(|element| decide(&element).map(|removal| (element.id(), removal)))
        .collect();

    let mut removed = Vec::with_capacity(candidates.len());
    for (id, removal) in candidates {
        if !is_attached(document, id) {
            log::debug!("Skipping {} inside an already removed subtree", removal);
            continue;
        }
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
        log::info!("  Removing {}", removal);
        removed.push(removal);
    }
    removed
}

fn is_attached(document: &Html, id: NodeId) -> bool {
    let root = document.tree.root().id();
    document
        .tree
        .get(id)
        .is_some_and(|node| node.ancestors().any(|ancestor| ancestor.id() == root))
}
