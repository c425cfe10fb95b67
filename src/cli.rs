use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "omniflow")]
#[command(about = "Terminal client for the OmniFlow assistant backend", long_about = None)]
pub struct Args {
    #[arg(short = 'u', long = "user", help = "User id to chat as")]
    pub user: Option<String>,

    #[arg(
        short = 't',
        long = "temperature",
        help = "Sampling temperature between 0.0 and 2.0"
    )]
    pub temperature: Option<f32>,

    #[arg(
        long = "category",
        help = "Knowledge category (TM, PS, LO, GEN, ID, PE, UI, ML, SYS)"
    )]
    pub category: Option<String>,

    #[arg(long = "backend-url", help = "Backend base URL, including the /api prefix")]
    pub backend_url: Option<String>,

    #[arg(long = "debug", help = "Show per-turn statistics after every reply")]
    pub debug: bool,

    #[arg(short = 'v', long = "verbose", help = "Log backend calls to stderr")]
    pub verbose: bool,

    #[arg(
        long = "config-init",
        help = "Write an example config file to ~/.config/omniflow and exit"
    )]
    pub config_init: bool,

    #[arg(help = "Message to send; starts the interactive shell when omitted")]
    pub command: Vec<String>,
}
