use clap::Parser;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Student directory service",
    long_about = "Registers students, lists and searches them, and deletes them over a small REST API."
)]
pub struct Cli {
    #[arg(
        long,
        env = "STUDENT_DIRECTORY_BIND",
        default_value = "127.0.0.1:5000",
        value_name = "ADDR",
        help = "Address the REST API listens on"
    )]
    pub bind: SocketAddr,

    #[arg(
        long,
        env = "STUDENT_DIRECTORY_NO_SEED",
        default_value_t = false,
        help = "Start with an empty directory instead of the sample students"
    )]
    pub no_seed: bool,

    #[arg(
        long,
        env = "STUDENT_DIRECTORY_BUFFER_SIZE",
        default_value_t = 32usize,
        value_name = "SIZE",
        help = "Capacity of the student actor's request queue"
    )]
    pub buffer_size: usize,

    #[arg(
        long,
        env = "STUDENT_DIRECTORY_LOG_LEVEL",
        default_value = "info",
        value_name = "LEVEL",
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub log_level: String,
}

/// Runtime settings, decoupled from how they were parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: SocketAddr,
    pub seed: bool,
    pub buffer_size: usize,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            seed: true,
            buffer_size: 32,
            log_level: "info".to_string(),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            bind: cli.bind,
            seed: !cli.no_seed,
            buffer_size: cli.buffer_size,
            log_level: cli.log_level,
        }
    }
}

impl Settings {
    /// Loads `.env` if present, then parses flags and environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Cli::parse().into()
    }

    pub fn without_seed(mut self) -> Self {
        self.seed = false;
        self
    }
}
