use clap::Parser;

use crate::controller::api::ApiConfig;
use crate::controller::api::client::{DEFAULT_API_URL, DEFAULT_ML_API_URL};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the ParPass REST API, including the `/api` prefix.
    #[arg(
        short = 'a',
        long,
        value_name = "API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = crate::args::validation::check_base_url
    )]
    pub api_url: String,
    /// Base URL of the recommendation service.
    #[arg(
        short = 'm',
        long,
        value_name = "ML_API_URL",
        default_value = DEFAULT_ML_API_URL,
        value_parser = crate::args::validation::check_base_url
    )]
    pub ml_api_url: String,
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Per-request timeout for backend calls. Unset means no timeout.
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        value_parser = crate::args::validation::check_timeout_secs
    )]
    pub timeout_secs: Option<u64>,
    /// Directory served under `/static`.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api: ApiConfig,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}
