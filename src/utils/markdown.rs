//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection and
//! syntax-highlighted code blocks.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::config::{ALLOWED_ATTRIBUTES, ALLOWED_TAGS, HIGHLIGHT_CLASS_PREFIX};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Convert markdown content to sanitized HTML.
///
/// Supports GFM tables and strikethrough. A single newline inside a
/// paragraph becomes a `<br>`. Code blocks are tokenized into `<span>`s
/// with [`HIGHLIGHT_CLASS_PREFIX`]ed scope classes; a fenced block keeps its
/// language hint as a `language-{lang}` class on `<code>`.
///
/// The output only contains tags from [`ALLOWED_TAGS`] and attributes from
/// [`ALLOWED_ATTRIBUTES`]; `<script>` and `<style>` are dropped together
/// with their content.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, highlight_code_blocks(parser).into_iter());

    sanitize_html(&html_output)
}

/// Replace each code block with its highlighted HTML.
fn highlight_code_blocks<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut out = Vec::new();
    // (language hint, collected source) of the block being read
    let mut block: Option<(String, String)> = None;

    for event in events {
        if let Some((lang, code)) = block.as_mut() {
            match event {
                Event::Text(text) => code.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    let rendered = highlight_block(lang, code);
                    out.push(Event::Html(rendered.into()));
                    block = None;
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => language_hint(&info),
                    CodeBlockKind::Indented => String::new(),
                };
                block = Some((lang, String::new()));
            }
            other => out.push(other),
        }
    }
    out
}

/// First word of a fence info string, limited to characters safe in a class.
fn language_hint(info: &str) -> String {
    info.split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#'))
        .collect()
}

/// Syntax for a block: the language hint, else a guess from the first line.
fn find_syntax<'s>(syntaxes: &'s SyntaxSet, lang: &str, code: &str) -> &'s SyntaxReference {
    (!lang.is_empty())
        .then(|| syntaxes.find_syntax_by_token(lang))
        .flatten()
        .or_else(|| syntaxes.find_syntax_by_first_line(code))
        .unwrap_or_else(|| syntaxes.find_syntax_plain_text())
}

fn highlight_block(lang: &str, code: &str) -> String {
    let class_attr = if lang.is_empty() {
        String::new()
    } else {
        format!(r#" class="language-{}""#, lang)
    };

    let syntaxes = &*SYNTAX_SET;
    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        find_syntax(syntaxes, lang, code),
        syntaxes,
        ClassStyle::SpacedPrefixed {
            prefix: HIGHLIGHT_CLASS_PREFIX,
        },
    );
    for line in LinesWithEndings::from(code) {
        if generator
            .parse_html_for_line_which_includes_newline(line)
            .is_err()
        {
            return format!(
                "<pre><code{}>{}</code></pre>\n",
                class_attr,
                ammonia::clean_text(code)
            );
        }
    }

    format!(
        "<pre><code{}>{}</code></pre>\n",
        class_attr,
        generator.finalize()
    )
}

/// Restrict HTML to the configured allow-list.
pub fn sanitize_html(html: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
        .link_rel(None);
    builder.clean(html).to_string()
}
