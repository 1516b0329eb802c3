use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rec")]
#[command(about = "Retail recommendation assistant chat CLI", long_about = None)]
pub struct Args {
    #[arg(short = 'n', long = "new", help = "Start a new conversation")]
    pub new_conversation: bool,

    #[arg(
        short = 'c',
        long = "continue",
        help = "Continue previous conversation even if expired"
    )]
    pub force_continue: bool,

    #[arg(long = "clear", help = "Clear all cached conversation pointers")]
    pub clear_history: bool,

    #[arg(long = "user", help = "User id the conversation belongs to")]
    pub user_id: Option<String>,

    #[arg(long = "top-k", help = "Maximum number of recommendations per query")]
    pub top_k: Option<usize>,

    #[arg(
        long = "history",
        help = "Show the prior conversation before the new turn"
    )]
    pub show_history: bool,

    #[arg(
        long = "api-endpoint",
        help = "Backend base URL (e.g. http://localhost:8000)"
    )]
    pub api_endpoint: Option<String>,

    #[arg(help = "Query to send to the assistant")]
    pub query: Vec<String>,
}
