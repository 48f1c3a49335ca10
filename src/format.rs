//! Renders notification messages from release metadata.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::{Captures, Regex};

/// Payload limit of the notification gateway, in UTF-8 bytes.
pub const MESSAGE_BYTE_BUDGET: usize = 4000;

static ISSUE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://github\.com/[\w.-]+/[\w.-]+/(?:issues|pull)/(\d+)").unwrap());
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)@([A-Za-z0-9][A-Za-z0-9-]*)").unwrap());
static COMPARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://github\.com/[\w.-]+/[\w.-]+/compare/([\w.-]+?)\.\.\.([\w.-]+)").unwrap());
static EMOJI_SHORTCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_+-]+):").unwrap());

/// Shortcodes commonly seen in release notes, mapped to their glyphs.
/// Unknown shortcodes pass through untouched.
const EMOJI_GLYPHS: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("-1", "👎"),
    ("alembic", "⚗️"),
    ("arrow_down", "⬇️"),
    ("arrow_up", "⬆️"),
    ("art", "🎨"),
    ("bookmark", "🔖"),
    ("books", "📚"),
    ("boom", "💥"),
    ("bug", "🐛"),
    ("bulb", "💡"),
    ("chart_with_upwards_trend", "📈"),
    ("children_crossing", "🚸"),
    ("clap", "👏"),
    ("construction", "🚧"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("gear", "⚙️"),
    ("green_heart", "💚"),
    ("hammer", "🔨"),
    ("heart", "❤️"),
    ("heavy_minus_sign", "➖"),
    ("heavy_plus_sign", "➕"),
    ("iphone", "📱"),
    ("label", "🏷️"),
    ("lock", "🔒"),
    ("mag", "🔍"),
    ("memo", "📝"),
    ("package", "📦"),
    ("pray", "🙏"),
    ("recycle", "♻️"),
    ("rocket", "🚀"),
    ("rotating_light", "🚨"),
    ("seedling", "🌱"),
    ("smile", "😄"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("tada", "🎉"),
    ("truck", "🚚"),
    ("warning", "⚠️"),
    ("white_check_mark", "✅"),
    ("wrench", "🔧"),
    ("x", "❌"),
    ("zap", "⚡"),
];

fn emoji_glyph(shortcode: &str) -> Option<&'static str> {
    EMOJI_GLYPHS
        .iter()
        .find(|(code, _)| *code == shortcode)
        .map(|(_, glyph)| *glyph)
}

/// Applies the markdown rewrite pipeline: issue/PR links become short
/// references, `@name` mentions become profile links, compare ranges become
/// labeled links, emoji shortcodes become glyphs.
fn transform(text: &str) -> String {
    let text = ISSUE_URL.replace_all(text, "[#${1}](${0})");
    let text = MENTION.replace_all(&text, "${1}[@${2}](https://github.com/${2})");
    let text = COMPARE_URL.replace_all(&text, "[${1}...${2}](${0})");
    let text = EMOJI_SHORTCODE.replace_all(&text, |caps: &Captures| match emoji_glyph(&caps[1]) {
        Some(glyph) => glyph.to_string(),
        None => caps[0].to_string(),
    });
    text.into_owned()
}

/// The push notification title for a new release. Not counted against the
/// message byte budget.
pub fn notification_title(repo_id: &str) -> String {
    format!("New release available for {repo_id}!")
}

/// Renders the fixed header block: title line, repo link, version line,
/// published timestamp, blank separator. The result has already been through
/// the rewrite pipeline, so its byte length is final.
pub fn render_header(
    repo_id: &str,
    name: &str,
    version: &str,
    published_at: Option<DateTime<Utc>>,
    html_url: &str,
) -> String {
    let published = published_at
        .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    transform(&format!(
        "## {name}\n[{repo_id}]({html_url})\nVersion: {version}\nPublished: {published}\n\n"
    ))
}

/// Renders the release body, or a short link-only fallback when the
/// transformed body exceeds `max_bytes`.
pub fn render_body(raw_body: &str, html_url: &str, max_bytes: usize) -> String {
    let body = transform(raw_body);
    if body.len() <= max_bytes {
        return body;
    }

    let fallback = format!("[Full release notes]({html_url})");
    if fallback.len() <= max_bytes {
        fallback
    } else {
        String::new()
    }
}

/// Concatenates the header with the body rendered into whatever byte budget
/// the header left over.
pub fn assemble_message(header: &str, raw_body: &str, html_url: &str, total_budget: usize) -> String {
    let body_budget = total_budget.saturating_sub(header.len());
    let body = render_body(raw_body, html_url, body_budget);
    format!("{header}{body}")
}
