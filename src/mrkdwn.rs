use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::emoji;
use crate::users::UserDirectory;

struct Patterns {
    bold: Regex,
    strike: Regex,
    labeled_link: Regex,
    bare_link: Regex,
    user_mention: Regex,
    channel_mention: Regex,
    emoji: Regex,
}

static RE: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    bold: Regex::new(r"\*[^*\n]+\*").unwrap(),
    strike: Regex::new(r"~[^~\n]+~").unwrap(),
    labeled_link: Regex::new(r"<(https?://[^|>]+)\|([^>]+)>").unwrap(),
    bare_link: Regex::new(r"<(https?://[^>]+)>").unwrap(),
    user_mention: Regex::new(r"<@([A-Z0-9]+)>").unwrap(),
    channel_mention: Regex::new(r"<#[A-Z0-9]+\|([^>]+)>").unwrap(),
    emoji: Regex::new(r":([a-z0-9_+-]+):").unwrap(),
});

/// One step of the mrkdwn → Markdown conversion.
///
/// Steps run in the order of [`Rule::ALL`]; each one sees the output of the
/// previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `*bold*` → `**bold**`
    Bold,
    /// `~strike~` → `~~strike~~`
    Strike,
    /// `<https://url|label>` → `[label](https://url)`
    LabeledLink,
    /// `<https://url>` → `[https://url](https://url)`
    BareLink,
    /// `<@U123>` → `@Name`, or `@U123` when the ID is unknown
    UserMention,
    /// `<#C123|general>` → `#general`
    ChannelMention,
    /// `:wave:` → 👋, unknown shortcodes are kept as is
    Emoji,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::Bold,
        Rule::Strike,
        Rule::LabeledLink,
        Rule::BareLink,
        Rule::UserMention,
        Rule::ChannelMention,
        Rule::Emoji,
    ];

    pub fn apply(self, text: &str, users: Option<&UserDirectory>) -> String {
        match self {
            Rule::Bold => double_marker(text, &RE.bold, '*'),
            Rule::Strike => double_marker(text, &RE.strike, '~'),
            Rule::LabeledLink => RE
                .labeled_link
                .replace_all(text, "[${2}](${1})")
                .into_owned(),
            Rule::BareLink => RE.bare_link.replace_all(text, "[${1}](${1})").into_owned(),
            Rule::UserMention => RE
                .user_mention
                .replace_all(text, |caps: &Captures| {
                    let id = &caps[1];
                    match users.and_then(|u| u.get(id)) {
                        Some(name) => format!("@{}", name),
                        None => {
                            tracing::trace!(user_id = id, "unresolved user mention");
                            format!("@{}", id)
                        }
                    }
                })
                .into_owned(),
            Rule::ChannelMention => RE.channel_mention.replace_all(text, "#${1}").into_owned(),
            Rule::Emoji => RE
                .emoji
                .replace_all(text, |caps: &Captures| match emoji::lookup(&caps[1]) {
                    Some(glyph) => glyph.to_string(),
                    None => caps[0].to_string(),
                })
                .into_owned(),
        }
    }
}

/// Convert Slack mrkdwn text to Markdown.
///
/// User mentions are resolved through `users` when given. Tokens that cannot
/// be resolved are left in a readable raw form; this never fails.
pub fn mrkdwn_to_md(input: &str, users: Option<&UserDirectory>) -> String {
    convert_with(input, users, &Rule::ALL)
}

/// Apply `rules` to `input` in the order given.
pub fn convert_with(input: &str, users: Option<&UserDirectory>, rules: &[Rule]) -> String {
    let mut text = input.to_string();
    for rule in rules {
        if text.is_empty() {
            break;
        }
        text = rule.apply(&text, users);
    }
    text
}

/// Double the single `marker` around every span matched by `re`.
///
/// A span is skipped when the opening marker follows a backtick, a backslash
/// or another marker, or when the closing marker is followed by a backtick or
/// another marker. A skipped candidate is retried one character later, which
/// gives the same matches as a lookbehind/lookahead guard.
fn double_marker(text: &str, re: &Regex, marker: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(m) = re.find_at(text, pos) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let guarded = matches!(before, Some(c) if c == '`' || c == '\\' || c == marker)
            || matches!(after, Some(c) if c == '`' || c == marker);
        if guarded {
            pos = m.start() + marker.len_utf8();
            continue;
        }

        out.push_str(&text[copied..m.start()]);
        out.push(marker);
        out.push_str(m.as_str());
        out.push(marker);
        copied = m.end();
        pos = m.end();
    }

    out.push_str(&text[copied..]);
    out
}
