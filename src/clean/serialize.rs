//! Indented HTML serialization.
//!
//! Writes one tag, comment or text run per line, indented one space per nesting
//! level. Whitespace-only text between tags is dropped and other text is trimmed, so
//! re-serializing a parsed copy of the output yields the same output. Content of
//! raw-text and preformatted elements is written verbatim.

use ego_tree::NodeRef;
use scraper::node::{Doctype, Element, Node};
use scraper::Html;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text is not parsed as markup and must not be escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

/// Elements whose whitespace is significant.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea", "listing"];

/// Serializes a document with indentation.
pub fn to_pretty_html(document: &Html) -> String {
    let mut output = String::new();
    for child in document.tree.root().children() {
        if !write_node(child, 0, &mut output) {
            break;
        }
    }
    output
}

fn indent(depth: usize, output: &mut String) {
    output.push_str(&" ".repeat(depth));
}

/// Writes `node` and its subtree. Returns `false` once nothing more may follow.
///
/// `<plaintext>` swallows the rest of the input when parsed, so it has no end tag and
/// neither do its ancestors.
fn write_node(node: NodeRef<'_, Node>, depth: usize, output: &mut String) -> bool {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                if !write_node(child, depth, output) {
                    return false;
                }
            }
        }
        Node::Doctype(doctype) => {
            indent(depth, output);
            write_doctype(doctype, output);
            output.push('\n');
        }
        Node::Comment(comment) => {
            indent(depth, output);
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->\n");
        }
        Node::Text(text) => {
            let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
            if !trimmed.is_empty() {
                indent(depth, output);
                escape_text(trimmed, output);
                output.push('\n');
            }
        }
        Node::Element(element) => {
            let name = element.name();
            indent(depth, output);
            write_start_tag(element, output);

            if VOID_ELEMENTS.contains(&name) {
                output.push('\n');
                return true;
            }

            if RAW_TEXT_ELEMENTS.contains(&name) {
                for child in node.children() {
                    if let Node::Text(text) = child.value() {
                        output.push_str(text);
                    }
                }
                if name == "plaintext" {
                    return false;
                }
            } else if PREFORMATTED_ELEMENTS.contains(&name) {
                // The parser drops one leading newline inside these elements
                if starts_with_newline(node) {
                    output.push('\n');
                }
                for child in node.children() {
                    write_inline(child, output);
                }
            } else {
                output.push('\n');
                for child in node.children() {
                    if !write_node(child, depth + 1, output) {
                        return false;
                    }
                }
                indent(depth, output);
            }

            write_end_tag(name, output);
            output.push('\n');
        }
        _ => {}
    }
    true
}

/// Compact serialization for preformatted content: no indentation, text untouched.
fn write_inline(node: NodeRef<'_, Node>, output: &mut String) {
    match node.value() {
        Node::Text(text) => escape_text(text, output),
        Node::Comment(comment) => {
            output.push_str("<!--");
            output.push_str(comment);
            output.push_str("-->");
        }
        Node::Element(element) => {
            let name = element.name();
            write_start_tag(element, output);
            if VOID_ELEMENTS.contains(&name) {
                return;
            }
            for child in node.children() {
                write_inline(child, output);
            }
            write_end_tag(name, output);
        }
        _ => {}
    }
}

fn starts_with_newline(node: NodeRef<'_, Node>) -> bool {
    node.first_child()
        .and_then(|child| child.value().as_text().map(|text| text.starts_with('\n')))
        .unwrap_or(false)
}

/// Public and system identifiers decide the rendering mode, so both are kept.
fn write_doctype(doctype: &Doctype, output: &mut String) {
    output.push_str("<!DOCTYPE ");
    output.push_str(doctype.name());
    let public_id = doctype.public_id();
    let system_id = doctype.system_id();
    if !public_id.is_empty() {
        output.push_str(" PUBLIC \"");
        output.push_str(public_id);
        output.push('"');
        if !system_id.is_empty() {
            output.push_str(" \"");
            output.push_str(system_id);
            output.push('"');
        }
    } else if !system_id.is_empty() {
        output.push_str(" SYSTEM \"");
        output.push_str(system_id);
        output.push('"');
    }
    output.push('>');
}

fn write_start_tag(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(element.name());
    // source order (scraper's `deterministic` feature), prefixes kept for
    // foreign attributes such as `xlink:href`
    for (name, value) in element.attrs.iter() {
        output.push(' ');
        if let Some(prefix) = &name.prefix {
            output.push_str(prefix);
            output.push(':');
        }
        output.push_str(&name.local);
        output.push_str("=\"");
        escape_attribute(value, output);
        output.push('"');
    }
    output.push('>');
}

fn write_end_tag(name: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn escape_text(text: &str, output: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            c => output.push(c),
        }
    }
}

fn escape_attribute(value: &str, output: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            c => output.push(c),
        }
    }
}
