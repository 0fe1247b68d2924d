//! Parser for the command grammar the bot recognizes in channel messages.
//!
//! Four forms: `;praises`, `;praises <@user>`, `;top`, and
//! `<@user> ++ for <reason>`. Keywords match case-insensitively; anything
//! else is not a command and the message is ignored.

use once_cell::sync::Lazy;
use regex::Regex;

/// A recognized command from a channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `;praises` - the sender's own praise report.
    MyPraises,
    /// `;praises <@user>` - another user's praise report.
    UserPraises { user_id: String },
    /// `;top` - the workspace leaderboard.
    Top,
    /// `<@user> ++ for <reason>` - award a praise.
    Praise { user_id: String, reason: String },
}

// Mentions arrive as <@U12345> or <@U12345|display-name>
static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@([A-Z0-9]+)(?:\|[^>]*)?>$").expect("static regex compile"));

static PRAISE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<@([A-Z0-9]+)(?:\|[^>]*)?>\s*\+\+\s+for(?:\s+(.*))?$")
        .expect("static regex compile")
});

/// Parse a message's text into a command, or `None` if it isn't one.
#[must_use]
pub fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();

    if trimmed.eq_ignore_ascii_case(";top") {
        return Some(Command::Top);
    }

    if trimmed.eq_ignore_ascii_case(";praises") {
        return Some(Command::MyPraises);
    }

    if let Some(rest) = strip_keyword(trimmed, ";praises") {
        if let Some(cap) = MENTION_RE.captures(rest.trim()) {
            return Some(Command::UserPraises {
                user_id: cap[1].to_string(),
            });
        }
        // `;praises something-else` is not a command
        return None;
    }

    if let Some(cap) = PRAISE_RE.captures(trimmed) {
        let reason = cap.get(2).map_or("", |m| m.as_str()).trim().to_string();
        return Some(Command::Praise {
            user_id: cap[1].to_string(),
            reason,
        });
    }

    None
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        text.get(keyword.len()..)
    } else {
        None
    }
}
