use clap::Parser;
use std::time::Duration;

use crate::controller::api::ApiConfig;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            api: args.to_api_config(),
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Args {
    #[must_use]
    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig {
            api_url: self.api_url.clone(),
            ml_api_url: self.ml_api_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}
