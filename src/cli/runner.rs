//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ClientConfig, ConfigFile, MintsSection};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::options::RequestOptions;
use crate::resources::{PubClient, VisitContext};
use crate::types::{ApiResponse, HttpMethod, JsonValue, ResponseBody};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let response = match &self.cli.command {
            Commands::Request {
                method,
                path,
                fields,
                sort,
                search,
                include,
                params,
                options_json,
                data,
            } => {
                let method: HttpMethod = method.parse()?;
                let options = build_options(
                    options_json.as_deref(),
                    fields.as_deref(),
                    sort.as_deref(),
                    search.as_deref(),
                    include.as_deref(),
                    params,
                )?;
                let data = data
                    .as_deref()
                    .map(serde_json::from_str::<JsonValue>)
                    .transpose()?;

                let client = ApiClient::new(self.client_config()?)?;
                client
                    .request(method, path, Some(&options), data.as_ref())
                    .await?
            }
            Commands::Visit {
                ip,
                user_agent,
                url,
            } => {
                let client = PubClient::new(self.client_config()?)?;
                client
                    .register_visit(&VisitContext::new(ip, user_agent, url))
                    .await?
            }
        };

        println!("{}", self.render(&response)?);
        Ok(())
    }

    /// Resolve the config file, `MINTS_*` variables and flags into a client config
    pub fn client_config(&self) -> Result<ClientConfig> {
        let file = match &self.cli.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile {
                mints: MintsSection::default(),
            },
        };

        let mut file = file.with_env_overrides();
        if let Some(host) = &self.cli.host {
            file.mints.host.clone_from(host);
        }
        if let Some(key) = &self.cli.api_key {
            file.mints.api_key.clone_from(key);
        }
        if let Some(seconds) = self.cli.timeout {
            file.mints.timeout_seconds = Some(seconds);
        }

        if self.cli.user {
            if let Some(token) = &self.cli.token {
                file.mints.session_token = Some(token.clone());
            }
            debug!("Using authenticated user context");
            file.user_config()
        } else {
            if let Some(token) = &self.cli.token {
                file.mints.contact_token = Some(token.clone());
            }
            debug!("Using public context");
            file.public_config()
        }
    }

    fn render(&self, response: &ApiResponse) -> Result<String> {
        match &response.body {
            ResponseBody::Json(value) => match self.cli.format {
                OutputFormat::Json => Ok(serde_json::to_string(value)?),
                OutputFormat::Pretty => Ok(serde_json::to_string_pretty(value)?),
            },
            ResponseBody::Text(text) => Ok(text.clone()),
            ResponseBody::Empty => Ok(format!("HTTP {}", response.status)),
        }
    }
}

/// Combine `--options-json`, the dedicated flags and `--param` pairs
///
/// Flags override keys from the JSON object.
pub fn build_options(
    options_json: Option<&str>,
    fields: Option<&str>,
    sort: Option<&str>,
    search: Option<&str>,
    include: Option<&str>,
    params: &[String],
) -> Result<RequestOptions> {
    let mut options = match options_json {
        Some(raw) => serde_json::from_str::<RequestOptions>(raw)?,
        None => RequestOptions::new(),
    };

    if let Some(fields) = fields {
        options = options.fields(fields);
    }
    if let Some(sort) = sort {
        options = options.sort(sort);
    }
    if let Some(search) = search {
        options = options.search(search);
    }
    if let Some(include) = include {
        options = options.include(include);
    }

    for param in params {
        let (key, value) = param.split_once('=').ok_or_else(|| {
            Error::invalid_value("param", format!("expected KEY=VALUE, got '{param}'"))
        })?;
        options = options.param(key, value);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenPlacement;
    use crate::options::encode_query;
    use clap::Parser;

    #[test]
    fn test_build_options_from_flags() {
        let options = build_options(
            None,
            Some("id,title"),
            Some("-id"),
            None,
            None,
            &["template=blog".to_string()],
        )
        .unwrap();

        assert_eq!(
            encode_query(Some(&options)),
            "fields=id%2Ctitle&sort=-id&template=blog"
        );
    }

    #[test]
    fn test_build_options_flags_override_json() {
        let options = build_options(
            Some(r#"{"fields": "id", "tags": true}"#),
            Some("title"),
            None,
            Some("shoes"),
            None,
            &[],
        )
        .unwrap();

        assert_eq!(options.fields.as_deref(), Some("title"));
        assert_eq!(options.tags, Some(true));
        assert_eq!(options.search.as_deref(), Some("shoes"));
    }

    #[test]
    fn test_build_options_rejects_bad_param() {
        let err = build_options(None, None, None, None, None, &["novalue".to_string()])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "param"));
    }

    #[test]
    fn test_client_config_from_flags() {
        let cli = Cli::parse_from([
            "mints",
            "--host",
            "https://demo.mints.cloud",
            "--api-key",
            "flag-key",
            "--token",
            "session-1",
            "--user",
            "request",
            "GET",
            "/profile/me",
        ]);
        let config = Runner::new(cli).client_config().unwrap();

        assert_eq!(config.base_url(), "https://demo.mints.cloud");
        assert_eq!(config.api_key(), "flag-key");
        assert_eq!(config.auth_token(), Some("session-1"));
        assert_eq!(config.token_placement(), &TokenPlacement::Bearer);
    }

    #[test]
    fn test_client_config_public_token_is_contact_token() {
        let cli = Cli::parse_from([
            "mints",
            "--host",
            "https://demo.mints.cloud",
            "--api-key",
            "k",
            "--token",
            "contact-1",
            "visit",
            "--ip",
            "10.0.0.1",
            "--user-agent",
            "curl",
            "--url",
            "/",
        ]);
        let config = Runner::new(cli).client_config().unwrap();

        assert_eq!(
            config.token_placement(),
            &TokenPlacement::Header("ContactToken".to_string())
        );
    }
}
