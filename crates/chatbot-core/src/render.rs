//! Bot message renderer.
//!
//! Turns raw reply text into a small markup tree. Stages run in a fixed
//! order, each one rewriting only the plain-text leaves left by the previous
//! stages:
//!
//! 1. the `@fedkiit` handle becomes a markdown link to the profile
//! 2. `**bold**` spans
//! 3. `[label](url)` links, whose label may hold bold spans
//! 4. bare `http(s)://` URLs, outside link labels
//! 5. newlines become line breaks
//!
//! Structural spans never cross each other, so a link that would straddle a
//! bold boundary stays as text. Only bot-authored text goes through here.

use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

pub const HANDLE_LINK: &str = "[@fedkiit](https://www.instagram.com/fedkiit/)";

pub const LINK_STYLE: &str = "color: #ffffff; text-decoration: underline; font-weight: 600;";

static HANDLE_REGEX: OnceLock<Regex> = OnceLock::new();
static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn handle_regex() -> &'static Regex {
    HANDLE_REGEX.get_or_init(|| Regex::new(r"(?i)@fedkiit").expect("Failed to compile handle regex"))
}

fn bold_regex() -> &'static Regex {
    // Shortest span; `.` stops at newlines
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Failed to compile bold regex"))
}

fn link_regex() -> &'static Regex {
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Failed to compile link regex")
    })
}

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(r#"https?://[^\s<"]+"#).expect("Failed to compile URL regex"))
}

/// One node of rendered output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Text(String),
    Bold(Vec<Segment>),
    Link { label: Vec<Segment>, href: String },
    LineBreak,
}

impl Segment {
    fn text(s: &str) -> Self {
        Segment::Text(s.to_string())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Rewrite text everywhere, link labels included
    Everywhere,
    /// Leave link labels alone
    OutsideLinks,
}

/// Render bot text into segments.
pub fn render(text: &str) -> Vec<Segment> {
    let handled = handle_regex().replace_all(text, NoExpand(HANDLE_LINK));
    let mut segments = vec![Segment::Text(handled.into_owned())];

    segments = rewrite_text(segments, Scope::Everywhere, &|s: &str| {
        split_matches(s, bold_regex(), |caps| {
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let mut children = Vec::new();
            push_text(&mut children, inner);
            Segment::Bold(children)
        })
    });

    segments = link_stage(segments);

    segments = rewrite_text(segments, Scope::OutsideLinks, &|s: &str| {
        split_matches(s, url_regex(), |caps| {
            let url = caps.get(0).map_or("", |m| m.as_str());
            Segment::Link {
                label: vec![Segment::text(url)],
                href: url.to_string(),
            }
        })
    });

    rewrite_text(segments, Scope::Everywhere, &split_lines)
}

/// Serialize segments to HTML. Text and attributes are escaped; links with
/// an unexpected scheme degrade to their label.
pub fn to_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    write_html(segments, &mut out);
    out
}

/// Concatenated visible text, line breaks as `\n`
pub fn plain_text(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg {
            Segment::Text(s) => out.push_str(s),
            Segment::Bold(children) => out.push_str(&plain_text(children)),
            Segment::Link { label, .. } => out.push_str(&plain_text(label)),
            Segment::LineBreak => out.push('\n'),
        }
    }
    out
}

/// Links may only point at web or mail targets, or be relative.
pub fn is_safe_href(href: &str) -> bool {
    let lower = href.trim().to_ascii_lowercase();
    match lower.find(':') {
        None => true,
        Some(i) => {
            let scheme = &lower[..i];
            scheme.contains(['/', '?', '#']) || matches!(scheme, "http" | "https" | "mailto")
        }
    }
}

fn rewrite_text(
    segments: Vec<Segment>,
    scope: Scope,
    f: &impl Fn(&str) -> Vec<Segment>,
) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segments.len());
    for seg in segments {
        match seg {
            Segment::Text(text) => out.extend(f(text.as_str())),
            Segment::Bold(children) => out.push(Segment::Bold(rewrite_text(children, scope, f))),
            Segment::Link { label, href } if scope == Scope::Everywhere => out.push(Segment::Link {
                label: rewrite_text(label, scope, f),
                href,
            }),
            other => out.push(other),
        }
    }
    out
}

/// Match `[label](url)` across sibling segments so a label can wrap whole
/// bold spans. Bold children are searched on their own.
fn link_stage(segments: Vec<Segment>) -> Vec<Segment> {
    let segments = segments
        .into_iter()
        .map(|seg| match seg {
            Segment::Bold(children) => Segment::Bold(link_stage(children)),
            other => other,
        })
        .collect();
    let flat = Flattened::new(segments);

    let mut out = Vec::new();
    let mut last = 0;
    for caps in link_regex().captures_iter(&flat.text) {
        let (Some(whole), Some(label), Some(href)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        // a span inside the target means the brackets straddle it
        if flat.has_node_in(href.range()) {
            continue;
        }
        flat.extend_range(&mut out, last..whole.start());
        out.push(Segment::Link {
            label: flat.slice(label.range()),
            href: href.as_str().to_string(),
        });
        last = whole.end();
    }
    flat.extend_range(&mut out, last..flat.text.len());
    out
}

/// Siblings joined into one string, each non-text node standing in as
/// [`Flattened::MARKER`] at a recorded offset.
struct Flattened {
    text: String,
    nodes: Vec<(usize, Segment)>,
}

impl Flattened {
    const MARKER: char = '\u{FFFC}';

    fn new(segments: Vec<Segment>) -> Self {
        let mut flat = Self {
            text: String::new(),
            nodes: Vec::new(),
        };
        for seg in segments {
            match seg {
                Segment::Text(s) => flat.text.push_str(&s),
                other => {
                    flat.nodes.push((flat.text.len(), other));
                    flat.text.push(Self::MARKER);
                }
            }
        }
        flat
    }

    fn has_node_in(&self, range: Range<usize>) -> bool {
        self.nodes.iter().any(|(at, _)| range.contains(at))
    }

    fn slice(&self, range: Range<usize>) -> Vec<Segment> {
        let mut out = Vec::new();
        self.extend_range(&mut out, range);
        out
    }

    fn extend_range(&self, out: &mut Vec<Segment>, range: Range<usize>) {
        let mut cursor = range.start;
        for (at, node) in self.nodes.iter().filter(|(at, _)| range.contains(at)) {
            push_text(out, &self.text[cursor..*at]);
            out.push(node.clone());
            cursor = at + Self::MARKER.len_utf8();
        }
        push_text(out, &self.text[cursor..range.end]);
    }
}

fn split_matches(text: &str, re: &Regex, mut make: impl FnMut(&Captures) -> Segment) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        push_text(&mut out, &text[last..whole.start()]);
        out.push(make(&caps));
        last = whole.end();
    }
    push_text(&mut out, &text[last..]);
    out
}

fn split_lines(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        push_text(&mut out, line);
    }
    out
}

fn push_text(out: &mut Vec<Segment>, s: &str) {
    if !s.is_empty() {
        out.push(Segment::text(s));
    }
}

fn write_html(segments: &[Segment], out: &mut String) {
    for seg in segments {
        match seg {
            Segment::Text(s) => escape_into(s, out),
            Segment::Bold(children) => {
                out.push_str("<strong>");
                write_html(children, out);
                out.push_str("</strong>");
            }
            Segment::Link { label, href } if is_safe_href(href) => {
                out.push_str("<a href=\"");
                escape_into(href, out);
                out.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"");
                out.push_str(LINK_STYLE);
                out.push_str("\">");
                write_html(label, out);
                out.push_str("</a>");
            }
            Segment::Link { label, .. } => write_html(label, out),
            Segment::LineBreak => out.push_str("<br/>"),
        }
    }
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
