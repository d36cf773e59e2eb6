//! HTML text extractor.
//!
//! Parses the document with tree-sitter and returns its visible text: every
//! run of character data, trimmed, one run per line. Script and style
//! bodies, comments and the doctype are not visible text.

use std::path::Path;

use tree_sitter::{Language, Node, Parser};

use crate::error::{ConvertError, Result};
use crate::extract::Extractor;
use crate::models::InputKind;

pub struct HtmlExtractor {
    language: Language,
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_html::LANGUAGE.into(),
        }
    }

    fn make_parser(&self) -> std::result::Result<Parser, String> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| format!("failed to set HTML language: {e}"))?;
        Ok(parser)
    }

    /// Extract the visible text of an HTML document.
    pub fn text_from_source(&self, source: &str) -> std::result::Result<String, String> {
        let mut parser = self.make_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or_else(|| "HTML parser produced no tree".to_string())?;

        let mut runs = Vec::new();
        collect_runs(tree.root_node(), source, &mut runs);
        Ok(runs.join("\n"))
    }
}

impl Extractor for HtmlExtractor {
    fn kind(&self) -> InputKind {
        InputKind::Html
    }

    fn try_extract(&self, path: &Path) -> Result<String> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::extraction(path, format!("failed to read HTML file: {e}")))?;
        self.text_from_source(&source)
            .map_err(|detail| ConvertError::extraction(path, detail))
    }
}

/// Walk the tree under `root`, pushing each trimmed run of adjacent character data.
///
/// Runs never span element boundaries, so one open run is enough: it is
/// flushed whenever the walk moves down into or back up out of a node.
fn collect_runs(root: Node<'_>, source: &str, runs: &mut Vec<String>) {
    let mut cursor = root.walk();
    if !cursor.goto_first_child() {
        return;
    }

    let mut run: Option<(usize, usize)> = None;
    let mut depth = 1usize;

    loop {
        let node = cursor.node();
        let descend = match node.kind() {
            "text" | "entity" => {
                extend_run(&mut run, node);
                false
            }
            // Stray characters (e.g. a bare `&`) surface as leaf error nodes
            "ERROR" if node.named_child_count() == 0 => {
                extend_run(&mut run, node);
                false
            }
            "start_tag" | "end_tag" | "self_closing_tag" | "erroneous_end_tag" | "doctype"
            | "comment" | "script_element" | "style_element" => {
                flush_run(&mut run, source, runs);
                false
            }
            _ => {
                flush_run(&mut run, source, runs);
                true
            }
        };

        if descend && cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        while !cursor.goto_next_sibling() {
            flush_run(&mut run, source, runs);
            cursor.goto_parent();
            depth -= 1;
            if depth == 0 {
                return;
            }
        }
    }
}

fn extend_run(run: &mut Option<(usize, usize)>, node: Node<'_>) {
    *run = Some(match *run {
        Some((start, _)) => (start, node.end_byte()),
        None => (node.start_byte(), node.end_byte()),
    });
}

fn flush_run(run: &mut Option<(usize, usize)>, source: &str, runs: &mut Vec<String>) {
    if let Some((start, end)) = run.take() {
        let text = html_escape::decode_html_entities(&source[start..end]);
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            runs.push(trimmed.to_string());
        }
    }
}
