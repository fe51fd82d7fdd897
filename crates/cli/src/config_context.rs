//! Translation of global CLI options into a `ConfigLoader`.
//!
//! Responsibilities:
//! - Apply explicit CLI values as the highest-precedence configuration.
//! - Select `.env` loading options.
//!
//! Does NOT handle:
//! - Environment fallbacks or validation (done by `ConfigLoader::resolve`).

use infisical_config::{ConfigLoader, DotenvOptions};
use std::time::Duration;

use crate::args::Cli;

/// Build the loader for this invocation.
pub(crate) fn loader_from_cli(cli: &Cli) -> ConfigLoader {
    let mut loader = ConfigLoader::new()
        .with_override(!cli.no_override)
        .with_fail_fast(!cli.no_fail_fast)
        .with_debug(cli.debug);

    if cli.no_dotenv {
        loader = loader.without_dotenv();
    } else {
        let mut options = DotenvOptions::default().with_override(cli.dotenv_override);
        if let Some(path) = &cli.env_file {
            options = options.with_path(path.clone());
        }
        loader = loader.with_dotenv(options);
    }

    // Blank values are ignored by the loader so env fallbacks still apply.
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(token) = &cli.token {
        loader = loader.with_token(token.clone());
    }
    if let Some(client_id) = &cli.client_id {
        loader = loader.with_client_id(client_id.clone());
    }
    if let Some(client_secret) = &cli.client_secret {
        loader = loader.with_client_secret(client_secret.clone());
    }
    if let Some(project_id) = &cli.project_id {
        loader = loader.with_project_id(project_id.clone());
    }
    if let Some(environment) = &cli.environment {
        loader = loader.with_environment(environment.clone());
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }

    loader
}
