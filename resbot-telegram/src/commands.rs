//! Bot commands registered with Telegram and parsed from `/command` messages.

use teloxide::utils::command::BotCommands;

#[derive(Debug, Clone, PartialEq, Eq, BotCommands)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    /// Say hello
    Start,
    /// Show this message
    Help,
    /// List available resources
    Resources,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/resources", "resbot").unwrap(), Command::Resources);
        assert_eq!(Command::parse("/start", "resbot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help@resbot", "resbot").unwrap(), Command::Help);
        assert!(Command::parse("/unknown", "resbot").is_err());
        assert!(Command::parse("resources", "resbot").is_err());
    }

    #[test]
    fn test_bot_commands_registered() {
        let names: Vec<String> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(names, vec!["start", "help", "resources"]);
    }
}
