#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Formatter;

use anyhow::{Context, Result, anyhow};
use tree_sitter::{Query, QueryCursor, StreamingIterator, Tree};

use crate::Dict;

#[derive(Clone)]
/// A tree-sitter parse of one Java source file, ready for querying.
pub struct JavaSource {
    /// the source code being parsed
    code: String,
    /// the parse tree
    tree: Tree,
    /// the tree-sitter java grammar language
    lang: tree_sitter::Language,
}

impl std::fmt::Debug for JavaSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JavaSource").field("code", &self.code.len()).finish()
    }
}

impl JavaSource {
    /// Parses `source_code` with the Java grammar.
    pub fn new(source_code: String) -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_java::LANGUAGE.into();
        let mut parser = tree_sitter::Parser::new();

        parser
            .set_language(&language)
            .with_context(|| "Failed to load Java grammar")?;
        let tree = parser
            .parse(source_code.as_str(), None)
            .ok_or_else(|| anyhow!("Error parsing Java code"))?;

        Ok(Self {
            code: source_code,
            tree,
            lang: language,
        })
    }

    /// Applies a tree-sitter query and returns one capture-name to
    /// capture-text map per match. Captures that did not participate in a
    /// match are simply absent from its map.
    ///
    /// * `q`: the tree-sitter query to be applied
    pub fn query(&self, q: &str) -> Result<Vec<Dict>> {
        let query = Query::new(&self.lang, q)
            .with_context(|| format!("Failed to compile tree-sitter query: {q}"))?;

        let capture_names: Vec<(u32, String)> = query
            .capture_names()
            .iter()
            .map(|name| {
                query
                    .capture_index_for_name(name)
                    .map(|index| (index, name.to_string()))
                    .ok_or_else(|| anyhow!("Capture name {name} has no index associated."))
            })
            .collect::<Result<_>>()?;

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, self.tree.root_node(), self.code.as_bytes());
        let mut results = vec![];

        while let Some(m) = matches.next() {
            let mut result = Dict::new();

            for (index, name) in &capture_names {
                let Some(capture) = m.captures.iter().find(|c| c.index == *index) else {
                    continue;
                };

                let text = capture
                    .node
                    .utf8_text(self.code.as_bytes())
                    .with_context(|| format!("Cannot map capture `{name}` back to source text"))?;
                result.insert(name.clone(), text.to_string());
            }
            results.push(result);
        }

        Ok(results)
    }
}
