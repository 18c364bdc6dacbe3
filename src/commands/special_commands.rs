//! Special commands parser for interactive chat mode
//!
//! This module parses the slash commands that can be entered during an
//! interactive chat session. Special commands manage the session rather
//! than being routed to the assistant:
//! - Start a new session
//! - List and switch between stored sessions
//! - Export history to JSON
//! - Toggle spoken replies
//! - Display help information
//! - Exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

/// Special commands that can be executed during interactive chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Start a fresh session; the next message creates it
    NewSession,

    /// List stored sessions, newest first
    History,

    /// Switch the active session by id
    Switch(String),

    /// Export all sessions to a JSON file, optionally at the given path
    Export(Option<String>),

    /// Turn spoken replies on or off
    Speak(bool),

    /// Display help information
    Help,

    /// Exit the chat session
    Exit,

    /// A slash command that did not match anything
    Unknown(String),

    /// Not a special command; route the input normally
    None,
}

/// Parse input for a special command
///
/// Input without a leading `/` is never a special command. Matching is
/// case-insensitive.
pub fn parse_special_command(input: &str) -> SpecialCommand {
    if !input.starts_with('/') {
        return SpecialCommand::None;
    }

    let lowered = input.to_lowercase();
    let mut parts = lowered.split_whitespace();
    let command = parts.next().unwrap_or("");
    let arg = parts.next();

    match command {
        "/new" => SpecialCommand::NewSession,
        "/history" => SpecialCommand::History,
        "/switch" => match arg {
            // Session ids are ULIDs, canonically upper-case
            Some(id) => SpecialCommand::Switch(id.to_uppercase()),
            None => SpecialCommand::Unknown("/switch requires a session id".to_string()),
        },
        "/export" => {
            // Preserve the original casing of the path argument
            let path = input
                .split_whitespace()
                .nth(1)
                .map(|p| p.to_string());
            SpecialCommand::Export(path)
        }
        "/speak" => match arg {
            Some("on") => SpecialCommand::Speak(true),
            Some("off") => SpecialCommand::Speak(false),
            _ => SpecialCommand::Unknown("/speak takes 'on' or 'off'".to_string()),
        },
        "/help" => SpecialCommand::Help,
        "/quit" | "/exit" => SpecialCommand::Exit,
        other => SpecialCommand::Unknown(format!(
            "Unknown command: {}. Type '/help' to see available commands",
            other
        )),
    }
}

/// Print help for the special commands
pub fn print_help() {
    println!("Available commands:");
    println!("  /new            Start a new chat session");
    println!("  /history        List stored sessions");
    println!("  /switch <id>    Switch to another session");
    println!("  /export [path]  Export all sessions to JSON");
    println!("  /speak on|off   Toggle spoken replies");
    println!("  /help           Show this help");
    println!("  /quit           Exit");
    println!();
    println!("Anything else is sent to the assistant.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_not_special() {
        assert_eq!(parse_special_command("what is rust"), SpecialCommand::None);
        assert_eq!(parse_special_command("open github"), SpecialCommand::None);
    }

    #[test]
    fn test_basic_commands() {
        assert_eq!(parse_special_command("/new"), SpecialCommand::NewSession);
        assert_eq!(parse_special_command("/history"), SpecialCommand::History);
        assert_eq!(parse_special_command("/help"), SpecialCommand::Help);
        assert_eq!(parse_special_command("/quit"), SpecialCommand::Exit);
        assert_eq!(parse_special_command("/exit"), SpecialCommand::Exit);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(parse_special_command("/NEW"), SpecialCommand::NewSession);
        assert_eq!(parse_special_command("/Quit"), SpecialCommand::Exit);
    }

    #[test]
    fn test_switch_requires_id() {
        assert_eq!(
            parse_special_command("/switch 01abc"),
            SpecialCommand::Switch("01ABC".to_string())
        );
        assert!(matches!(
            parse_special_command("/switch"),
            SpecialCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_export_path_keeps_casing() {
        assert_eq!(parse_special_command("/export"), SpecialCommand::Export(None));
        assert_eq!(
            parse_special_command("/export /tmp/History.json"),
            SpecialCommand::Export(Some("/tmp/History.json".to_string()))
        );
    }

    #[test]
    fn test_speak_toggle() {
        assert_eq!(parse_special_command("/speak on"), SpecialCommand::Speak(true));
        assert_eq!(parse_special_command("/speak off"), SpecialCommand::Speak(false));
        assert!(matches!(
            parse_special_command("/speak loud"),
            SpecialCommand::Unknown(_)
        ));
        assert!(matches!(
            parse_special_command("/speak"),
            SpecialCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_unknown_command_mentions_help() {
        match parse_special_command("/frobnicate") {
            SpecialCommand::Unknown(msg) => assert!(msg.contains("/help")),
            other => panic!("expected unknown, got {:?}", other),
        }
    }
}
