//! Markdown → HTML rendering for assistant replies and `.md` previews.

use pulldown_cmark::{
    html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
};
use std::collections::HashSet;

/// Code highlight hook: `(code, language) -> html`.
///
/// Returning the input unchanged means "no highlighting". The code is then
/// escaped as usual. Anything else is inserted as raw HTML.
pub type HighlightFn = fn(&str, Option<&str>) -> String;

pub fn passthrough_highlight(code: &str, _lang: Option<&str>) -> String {
    code.to_string()
}

#[derive(Clone, Copy)]
pub struct MarkdownOptions {
    /// GitHub flavoured extensions: tables, strikethrough, task lists,
    /// footnotes and bare `http(s)://` / `www.` autolinks
    pub gfm: bool,
    /// Single newline → `<br />`
    pub breaks: bool,
    /// `id` attribute on headings, slugged from the heading text
    pub header_ids: bool,
    /// Escape raw HTML instead of passing it through
    pub escape_html: bool,
    pub highlight: HighlightFn,
}

impl MarkdownOptions {
    /// Ответы ассистента
    pub fn chat() -> Self {
        Self {
            gfm: true,
            breaks: false,
            header_ids: false,
            escape_html: false,
            highlight: passthrough_highlight,
        }
    }

    /// Local `.md` files (trusted content)
    pub fn document() -> Self {
        Self {
            gfm: true,
            breaks: true,
            header_ids: true,
            escape_html: false,
            highlight: passthrough_highlight,
        }
    }

    fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.gfm {
            options.insert(Options::ENABLE_TABLES);
            options.insert(Options::ENABLE_STRIKETHROUGH);
            options.insert(Options::ENABLE_TASKLISTS);
            options.insert(Options::ENABLE_FOOTNOTES);
        }
        options
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self::chat()
    }
}

pub fn render_markdown(source: &str, options: &MarkdownOptions) -> String {
    let parser = TextMergeStream::new(Parser::new_ext(source, options.parser_options()));

    let mut events: Vec<Event> = Vec::new();
    let mut slugs = Slugger::default();
    // (открывающий тег, события внутри заголовка)
    let mut heading: Option<(Tag, Vec<Event>)> = None;
    let mut code: Option<(CodeBlockKind, String)> = None;
    // вложенность ссылок/картинок: внутри них автоссылки не нужны
    let mut link_depth = 0usize;

    for event in parser {
        let event = match event {
            Event::SoftBreak if options.breaks => Event::HardBreak,
            Event::Html(raw) | Event::InlineHtml(raw) if options.escape_html => Event::Text(raw),
            other => other,
        };

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code = Some((kind, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((kind, buf)) = code.take() {
                    push_code_block(&mut events, kind, buf, options.highlight);
                }
            }
            Event::Start(tag @ Tag::Heading { .. }) if options.header_ids => {
                heading = Some((tag, Vec::new()));
            }
            Event::End(end @ TagEnd::Heading(_)) if heading.is_some() => {
                if let Some((tag, inner)) = heading.take() {
                    let text = heading_text(&inner);
                    events.push(Event::Start(with_heading_id(tag, &mut slugs, &text)));
                    events.extend(inner);
                    events.push(Event::End(end));
                }
            }
            other => {
                match &other {
                    Event::Start(Tag::Link { .. } | Tag::Image { .. }) => link_depth += 1,
                    Event::End(TagEnd::Link | TagEnd::Image) => {
                        link_depth = link_depth.saturating_sub(1)
                    }
                    _ => {}
                }
                let expanded = match other {
                    Event::Text(text) if options.gfm && link_depth == 0 => autolink(text),
                    other => vec![other],
                };
                match heading.as_mut() {
                    Some((_, inner)) => inner.extend(expanded),
                    None => events.extend(expanded),
                }
            }
        }
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

fn push_code_block<'a>(
    events: &mut Vec<Event<'a>>,
    kind: CodeBlockKind<'a>,
    code: String,
    highlight: HighlightFn,
) {
    let lang = match &kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_string),
        CodeBlockKind::Indented => None,
    };
    let highlighted = highlight(&code, lang.as_deref());

    events.push(Event::Start(Tag::CodeBlock(kind)));
    if highlighted == code {
        events.push(Event::Text(CowStr::from(code)));
    } else {
        events.push(Event::Html(CowStr::from(highlighted)));
    }
    events.push(Event::End(TagEnd::CodeBlock));
}

fn heading_text(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
            _ => None,
        })
        .collect()
}

fn with_heading_id<'a>(tag: Tag<'a>, slugs: &mut Slugger, text: &str) -> Tag<'a> {
    match tag {
        Tag::Heading {
            level,
            id: None,
            classes,
            attrs,
        } => Tag::Heading {
            level,
            id: Some(CowStr::from(slugs.slug(text))),
            classes,
            attrs,
        },
        other => other,
    }
}

/// Heading anchors: lowercase, punctuation dropped, spaces → `-`.
/// Every id handed out is unique within one document: a taken slug gets the
/// first free `-1`, `-2`, … suffix.
#[derive(Default)]
struct Slugger {
    seen: HashSet<String>,
}

impl Slugger {
    fn slug(&mut self, text: &str) -> String {
        let mut base: String = text
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
            .map(|c| if c == ' ' { '-' } else { c })
            .collect();
        if base.is_empty() {
            base.push_str("heading");
        }

        let mut slug = base.clone();
        let mut n = 0;
        while self.seen.contains(&slug) {
            n += 1;
            slug = format!("{}-{}", base, n);
        }
        self.seen.insert(slug.clone());
        slug
    }
}

const AUTOLINK_PREFIXES: [&str; 3] = ["https://", "http://", "www."];

/// Split a text run into text and link events at bare URLs.
fn autolink(text: CowStr<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut rest: &str = &text;

    while let Some((start, end)) = find_url(rest) {
        if start > 0 {
            events.push(Event::Text(CowStr::from(rest[..start].to_string())));
        }
        let url = &rest[start..end];
        let href = if url.starts_with("www.") {
            format!("http://{}", url)
        } else {
            url.to_string()
        };
        events.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(href),
            title: CowStr::from(""),
            id: CowStr::from(""),
        }));
        events.push(Event::Text(CowStr::from(url.to_string())));
        events.push(Event::End(TagEnd::Link));
        rest = &rest[end..];
    }

    if events.is_empty() {
        return vec![Event::Text(text)];
    }
    if !rest.is_empty() {
        events.push(Event::Text(CowStr::from(rest.to_string())));
    }
    events
}

/// Byte range of the first bare URL in `text`: a known prefix at a word
/// boundary, up to whitespace or `<`, minus trailing punctuation.
fn find_url(text: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while from < text.len() {
        let (start, prefix) = AUTOLINK_PREFIXES
            .iter()
            .filter_map(|p| text[from..].find(p).map(|i| (from + i, *p)))
            .min_by_key(|(i, _)| *i)?;

        let at_boundary = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace() || c == '(' || c == '*' || c == '_');
        let tail = &text[start..];
        let mut end = start
            + tail
                .find(|c: char| c.is_whitespace() || c == '<')
                .unwrap_or(tail.len());
        end = trim_url_end(text, start, end);

        if at_boundary && end > start + prefix.len() {
            return Some((start, end));
        }
        from = start + prefix.len();
    }
    None
}

fn trim_url_end(text: &str, start: usize, mut end: usize) -> usize {
    loop {
        let Some(last) = text[start..end].chars().next_back() else {
            return end;
        };
        let url = &text[start..end];
        let trim = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '"' | '\'' | '*' | '_' | '~' => true,
            // closing paren only when unbalanced
            ')' => url.matches(')').count() > url.matches('(').count(),
            _ => false,
        };
        if !trim {
            return end;
        }
        end -= last.len_utf8();
    }
}
