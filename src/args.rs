use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(about = "Analyze a web page's content for a target keyword")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the analysis HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 5000)]
        port: u16,

        /// Origin allowed to call the analysis endpoint
        #[arg(long, default_value = "http://localhost:3000")]
        origin: String,
    },

    /// Analyze a URL through a running server and print the report
    Analyze {
        /// URL of the page to analyze
        url: String,

        /// Target keyword to evaluate the page against
        keyword: String,

        /// Base URL of a running analysis server
        #[arg(long, default_value = "http://localhost:5000")]
        endpoint: String,
    },

    /// Print a simulated analysis without contacting any backend
    Demo {
        /// URL of the page to pretend to analyze
        url: String,

        /// Target keyword to evaluate the page against
        keyword: String,

        /// Seed for reproducible simulated output
        #[arg(long)]
        seed: Option<u64>,
    },
}
