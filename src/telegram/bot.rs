//! Bot initialization and the command set.

use reqwest::ClientBuilder;
use teloxide::prelude::Requester;
use teloxide::utils::command::BotCommands;

use crate::core::config;
use crate::telegram::Bot;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "I can:")]
pub enum Command {
    #[command(description = "show what to send me")]
    Start,
    #[command(description = "show usage help")]
    Help,
}

/// Creates a Bot instance from an explicit token.
///
/// The token is passed in rather than read from a global so startup can
/// refuse to proceed without one.
///
/// # Errors
/// Returns an error when the token is empty or the HTTP client cannot be
/// built.
pub fn create_bot(token: &str) -> anyhow::Result<Bot> {
    if token.trim().is_empty() {
        anyhow::bail!("No bot token found. Set the BOT_TOKEN environment variable.");
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    Ok(Bot::with_client(token, client))
}

/// Registers the command list in the Telegram UI.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions() {
        let commands = format!("{}", Command::descriptions());
        assert!(commands.contains("I can:"));
        assert!(commands.contains("start"));
        assert!(commands.contains("help"));
    }

    #[test]
    fn test_create_bot_rejects_empty_token() {
        assert!(create_bot("").is_err());
        assert!(create_bot("   ").is_err());
    }
}
