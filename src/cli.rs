use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tubeferry")]
#[command(author, version, about = "Telegram bot that relays YouTube media to an anonymous file host", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (default when no command is given)
    Run,

    /// Print a video's title and available resolutions
    Info {
        /// Video, Shorts, or short-link URL
        url: String,
    },

    /// Download one video, upload it to the file host, print the link
    Relay {
        /// Video, Shorts, or short-link URL
        url: String,

        /// Resolution label (e.g. 720p); defaults to the best progressive stream
        #[arg(short, long)]
        quality: Option<String>,

        /// Working directory for the temporary download
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
