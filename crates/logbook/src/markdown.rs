// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown to HTML with highlighted code blocks
//!
//! Fenced code blocks whose language is known to `syntect` are emitted as
//! `<div class="codehilite"><pre><code>` with CSS class spans. Anything else
//! goes through `pulldown-cmark` untouched.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Wrap text in a fenced code block tagged with `language`
///
/// The fence is one backtick longer than the longest backtick run in `code`,
/// so lines such as a quoted "```" cannot close it early.
#[must_use]
pub fn fenced(language: &str, code: &str) -> String {
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run.max(2) + 1);
    format!("{fence}{language}\n{code}\n{fence}")
}

/// Renders markdown, highlighting fenced code
pub struct MarkdownRenderer {
    syntaxes: SyntaxSet,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with the bundled syntax definitions
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Render markdown text to HTML
    ///
    /// # Errors
    ///
    /// Returns a `syntect::Error` if a code block cannot be highlighted.
    pub fn render(&self, text: &str) -> Result<String, syntect::Error> {
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut block: Option<(&str, &SyntaxReference, String)> = None;

        for event in Parser::new_ext(text, Options::empty()) {
            if let Some((language, syntax, mut source)) = block.take() {
                match event {
                    Event::Text(t) => {
                        source.push_str(&t);
                        block = Some((language, syntax, source));
                    }
                    Event::End(TagEnd::CodeBlock) => {
                        let html = self.highlight(language, syntax, &source)?;
                        events.push(Event::Html(CowStr::from(html)));
                    }
                    _ => block = Some((language, syntax, source)),
                }
                continue;
            }

            if let Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) = &event
                && let Some((language, syntax)) = self.syntax_for(info)
            {
                block = Some((language, syntax, String::new()));
                continue;
            }

            events.push(event);
        }

        let mut out = String::with_capacity(text.len() * 2);
        html::push_html(&mut out, events.into_iter());
        Ok(out)
    }

    /// Look up the syntax named by a fence's info string
    fn syntax_for<'s>(&'s self, info: &str) -> Option<(&'s str, &'s SyntaxReference)> {
        let token = info.split_whitespace().next()?;
        let syntax = self.syntaxes.find_syntax_by_token(token)?;
        let language = syntax
            .file_extensions
            .iter()
            .find(|ext| ext.eq_ignore_ascii_case(token))
            .map_or(syntax.name.as_str(), String::as_str);
        Some((language, syntax))
    }

    fn highlight(
        &self,
        language: &str,
        syntax: &SyntaxReference,
        source: &str,
    ) -> Result<String, syntect::Error> {
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntaxes, ClassStyle::Spaced);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(format!(
            "<div class=\"codehilite\"><pre><code class=\"language-{}\">{}</code></pre></div>\n",
            language.to_lowercase(),
            generator.finalize()
        ))
    }
}
