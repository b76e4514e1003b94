// src/core/html.rs
//! Tolerant markup reader.
//!
//! Not a general HTML parser. It tokenizes tags, text, comments and
//! declarations, and folds them into a small element tree with the handful
//! of HTML recovery rules the vocabulary pages rely on:
//! - tag/attribute names are case-insensitive (stored lowercase);
//! - void elements and `<x/>` never take children;
//! - `<script>`/`<style>` bodies are raw text;
//! - `tr`, `td`/`th`, `li` and `p` implicitly close an open sibling;
//! - stray close tags are ignored, unclosed elements close at end of input.
//!
//! Input is rejected only when a construct is opened and never terminated
//! (tag, comment, declaration, quoted attribute value), when the bytes are
//! not UTF-8, or when more than `MAX_DEPTH` elements are open at once.

use super::sanitize::decode_entities;
use crate::config::consts::MAX_DEPTH;
use crate::error::ScrapeError;

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];
const RAW_TEXT: &[&str] = &["script", "style"];
const ROOT: &str = "#document";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(name: &str, attrs: Vec<(String, String)>) -> Self {
        Self { name: s!(name), attrs, children: Vec::new() }
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whitespace-separated class token match (not substring).
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self.children.iter()] }
    }

    /// First descendant element matching `pred`.
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.descendants().find(|e| pred(*e))
    }

    /// Every text node below `self`, in document order.
    pub fn text_nodes(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Concatenated text content.
    pub fn text(&self) -> String {
        self.text_nodes().concat()
    }
}

fn collect_text<'a>(nodes: &'a [Node], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push(t),
            Node::Element(e) => collect_text(&e.children, out),
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(Node::Element(e)) => {
                    self.stack.push(e.children.iter());
                    return Some(e);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn from_bytes(raw: &[u8]) -> Result<Self, ScrapeError> {
        let src = std::str::from_utf8(raw)
            .map_err(|e| ScrapeError::unparseable(e.valid_up_to(), "input is not valid UTF-8"))?;
        Self::parse(src)
    }

    pub fn parse(src: &str) -> Result<Self, ScrapeError> {
        let mut tree = TreeBuilder::new();
        Tokenizer { src, pos: 0 }.run(&mut tree)?;
        Ok(Document { root: tree.finish() })
    }

    /// Synthetic root holding the top-level nodes.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find(|e| e.id() == Some(id))
    }

    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.root.find(pred)
    }
}

/* ---------- tree building ---------- */

struct TreeBuilder {
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self { stack: vec![Element::new(ROOT, Vec::new())] }
    }

    fn text(&mut self, text: String) {
        if text.is_empty() {
            return;
        }
        if let Some(top) = self.stack.last_mut() {
            top.children.push(Node::Text(text));
        }
    }

    fn open(
        &mut self,
        lt: usize,
        name: &str,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    ) -> Result<(), ScrapeError> {
        while self.stack.len() > 1 {
            let top = &self.stack[self.stack.len() - 1].name;
            if !implicitly_closes(name, top) {
                break;
            }
            self.pop();
        }

        let el = Element::new(name, attrs);
        if self_closing || VOID.contains(&name) {
            if let Some(top) = self.stack.last_mut() {
                top.children.push(Node::Element(el));
            }
        } else if self.stack.len() > MAX_DEPTH {
            return Err(ScrapeError::unparseable(lt, "nesting too deep"));
        } else {
            self.stack.push(el);
        }
        Ok(())
    }

    fn close(&mut self, name: &str) {
        // Stray close tags are dropped.
        let Some(depth) = self.stack.iter().skip(1).rposition(|e| e.name == name) else {
            logd!("html: ignoring stray </{name}>");
            return;
        };
        while self.stack.len() > depth + 1 {
            self.pop();
        }
    }

    fn pop(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        if let Some(el) = self.stack.pop() {
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(Node::Element(el));
            }
        }
    }

    fn finish(mut self) -> Element {
        while self.stack.len() > 1 {
            self.pop();
        }
        self.stack.pop().unwrap_or_else(|| Element::new(ROOT, Vec::new()))
    }
}

fn implicitly_closes(new: &str, open: &str) -> bool {
    match new {
        "tr" => matches!(open, "tr" | "td" | "th"),
        "td" | "th" => matches!(open, "td" | "th"),
        "li" => open == "li",
        "p" => open == "p",
        _ => false,
    }
}

/* ---------- tokenizing ---------- */

struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn run(&mut self, tree: &mut TreeBuilder) -> Result<(), ScrapeError> {
        let mut pending = s!();

        while self.pos < self.src.len() {
            let Some(lt) = self.src[self.pos..].find('<').map(|o| self.pos + o) else {
                pending.push_str(&self.src[self.pos..]);
                break;
            };
            pending.push_str(&self.src[self.pos..lt]);
            self.pos = lt;

            let next = self.src.as_bytes().get(lt + 1).copied();
            match next {
                Some(b'!') if self.src[lt..].starts_with("<!--") => {
                    flush(tree, &mut pending);
                    let end = self.find_from(lt + 4, "-->").ok_or_else(|| {
                        ScrapeError::unparseable(lt, "unterminated comment")
                    })?;
                    self.pos = end + 3;
                }
                Some(b'!') | Some(b'?') => {
                    flush(tree, &mut pending);
                    let end = self.find_from(lt + 2, ">").ok_or_else(|| {
                        ScrapeError::unparseable(lt, "unterminated declaration")
                    })?;
                    self.pos = end + 1;
                }
                Some(b'/') => {
                    flush(tree, &mut pending);
                    let end = self.find_from(lt + 2, ">").ok_or_else(|| {
                        ScrapeError::unparseable(lt, "unterminated close tag")
                    })?;
                    let name = self.src[lt + 2..end].trim().to_ascii_lowercase();
                    if !name.is_empty() {
                        tree.close(&name);
                    }
                    self.pos = end + 1;
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    flush(tree, &mut pending);
                    self.pos = lt + 1;
                    let (name, attrs, self_closing) = self.open_tag(lt)?;
                    tree.open(lt, &name, attrs, self_closing)?;
                    if !self_closing && RAW_TEXT.contains(&name.as_str()) {
                        self.raw_text(&name, tree);
                    }
                }
                _ => {
                    // Bare '<' in text.
                    pending.push('<');
                    self.pos = lt + 1;
                }
            }
        }

        flush(tree, &mut pending);
        Ok(())
    }

    fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.src.get(from..)?.find(pat).map(|o| from + o)
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn take_while<F: Fn(u8) -> bool>(&mut self, keep: F) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&keep) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    /// Cursor sits right after '<'. Returns (name, attrs, self_closing)
    /// and leaves the cursor after '>'.
    fn open_tag(&mut self, lt: usize) -> Result<(String, Vec<(String, String)>, bool), ScrapeError> {
        let unterminated = || ScrapeError::unparseable(lt, "unterminated tag");

        let name = self
            .take_while(|b| !b.is_ascii_whitespace() && b != b'>' && b != b'/')
            .to_ascii_lowercase();
        let mut attrs = Vec::new();

        loop {
            self.skip_ws();
            match self.peek() {
                None => return Err(unterminated()),
                Some(b'>') => {
                    self.pos += 1;
                    return Ok((name, attrs, false));
                }
                Some(b'/') => {
                    self.pos += 1;
                    if self.peek() == Some(b'>') {
                        self.pos += 1;
                        return Ok((name, attrs, true));
                    }
                }
                Some(_) => {
                    let key = self
                        .take_while(|b| {
                            !b.is_ascii_whitespace() && b != b'=' && b != b'>' && b != b'/'
                        })
                        .to_ascii_lowercase();
                    if key.is_empty() {
                        // Lone '=' or similar junk; skip one byte.
                        self.pos += 1;
                        continue;
                    }
                    self.skip_ws();
                    let value = if self.peek() == Some(b'=') {
                        self.pos += 1;
                        self.skip_ws();
                        self.attr_value(lt)?
                    } else {
                        s!()
                    };
                    attrs.push((key, value));
                }
            }
        }
    }

    fn attr_value(&mut self, lt: usize) -> Result<String, ScrapeError> {
        match self.peek() {
            Some(q @ (b'"' | b'\'')) => {
                let start = self.pos + 1;
                let end = self.src[start..]
                    .find(q as char)
                    .map(|o| start + o)
                    .ok_or_else(|| ScrapeError::unparseable(lt, "unterminated attribute value"))?;
                self.pos = end + 1;
                Ok(decode_entities(&self.src[start..end]))
            }
            Some(_) => {
                let raw = self.take_while(|b| !b.is_ascii_whitespace() && b != b'>');
                Ok(decode_entities(raw))
            }
            None => Err(ScrapeError::unparseable(lt, "unterminated tag")),
        }
    }

    /// Consume a raw-text body up to `</name` (any case, then `>`, `/` or
    /// whitespace); a missing close tag takes the rest.
    fn raw_text(&mut self, name: &str, tree: &mut TreeBuilder) {
        let bytes = self.src.as_bytes();
        let mut end = self.src.len();
        let mut at = self.pos;

        while let Some(start) = self.find_from(at, "</") {
            let after = start + 2 + name.len();
            let same_name = bytes
                .get(start + 2..after)
                .is_some_and(|n| n.eq_ignore_ascii_case(name.as_bytes()));
            let boundary = bytes
                .get(after)
                .is_none_or(|&b| b == b'>' || b == b'/' || b.is_ascii_whitespace());
            if same_name && boundary {
                end = start;
                break;
            }
            at = start + 2;
        }

        tree.text(s!(&self.src[self.pos..end]));
        self.pos = end;
    }
}

fn flush(tree: &mut TreeBuilder, pending: &mut String) {
    if !pending.is_empty() {
        tree.text(decode_entities(pending));
        pending.clear();
    }
}
