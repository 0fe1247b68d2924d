use kudos::slack::command_parser::{Command, parse_command};

#[test]
fn test_parse_top() {
    assert_eq!(parse_command(";top"), Some(Command::Top));
    // Keywords are case-insensitive and surrounding whitespace is ignored
    assert_eq!(parse_command("  ;TOP  "), Some(Command::Top));
}

#[test]
fn test_parse_own_praises() {
    assert_eq!(parse_command(";praises"), Some(Command::MyPraises));
    assert_eq!(parse_command(";Praises"), Some(Command::MyPraises));
}

#[test]
fn test_parse_user_praises() {
    assert_eq!(
        parse_command(";praises <@U02ABC123>"),
        Some(Command::UserPraises {
            user_id: "U02ABC123".to_string()
        })
    );

    // Slack sometimes includes a display-name label in the mention
    assert_eq!(
        parse_command(";praises <@U02ABC123|jane>"),
        Some(Command::UserPraises {
            user_id: "U02ABC123".to_string()
        })
    );
}

#[test]
fn test_parse_user_praises_rejects_garbage_argument() {
    assert_eq!(parse_command(";praises everyone"), None);
    assert_eq!(parse_command(";praises <@>"), None);
}

#[test]
fn test_parse_praise_award() {
    let cmd = parse_command("<@U02ABC123> ++ for helping review code");
    assert_eq!(
        cmd,
        Some(Command::Praise {
            user_id: "U02ABC123".to_string(),
            reason: "helping review code".to_string()
        })
    );
}

#[test]
fn test_parse_praise_award_with_mention_label() {
    let cmd = parse_command("<@U02ABC123|jane> ++ for the deploy script");
    assert_eq!(
        cmd,
        Some(Command::Praise {
            user_id: "U02ABC123".to_string(),
            reason: "the deploy script".to_string()
        })
    );
}

#[test]
fn test_parse_praise_award_allows_empty_reason() {
    // `for` with nothing after it still records a praise
    let cmd = parse_command("<@U02ABC123> ++ for");
    assert_eq!(
        cmd,
        Some(Command::Praise {
            user_id: "U02ABC123".to_string(),
            reason: String::new()
        })
    );
}

#[test]
fn test_parse_praise_award_multiline_reason() {
    let cmd = parse_command("<@U02ABC123> ++ for staying late\nand fixing the build");
    assert_eq!(
        cmd,
        Some(Command::Praise {
            user_id: "U02ABC123".to_string(),
            reason: "staying late\nand fixing the build".to_string()
        })
    );
}

#[test]
fn test_non_commands_are_ignored() {
    assert_eq!(parse_command("good morning everyone"), None);
    // A mention without the ++ marker is ordinary conversation
    assert_eq!(parse_command("<@U02ABC123> thanks for everything"), None);
    // ++ without `for` carries no reason and is not a praise
    assert_eq!(parse_command("<@U02ABC123> ++"), None);
    // `forgot` must not be read as `for got`
    assert_eq!(parse_command("<@U02ABC123> ++ forgot"), None);
    assert_eq!(parse_command(""), None);
}
