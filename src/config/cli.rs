use crate::config::DispatcherConfig;
use crate::domain::model::Fields;
use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::{parse_key_value, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sheets-dispatch")]
#[command(about = "Send one action to the spreadsheet backend and print the reply")]
pub struct CliConfig {
    /// Endpoint URL; takes precedence over --config
    #[arg(long)]
    pub base_url: Option<String>,

    /// TOML file with an [endpoint] table
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Backend action, e.g. getClients or saveInvoiceRow
    pub action: String,

    /// Request fields as KEY=VALUE
    pub fields: Vec<String>,
}

impl CliConfig {
    pub fn dispatcher_config(&self) -> Result<DispatcherConfig> {
        match (&self.base_url, &self.config) {
            (Some(url), _) => Ok(DispatcherConfig::new(url.clone())),
            (None, Some(path)) => DispatcherConfig::from_file(path),
            (None, None) => Err(DispatchError::ConfigError {
                message: "either --base-url or --config is required".to_string(),
            }),
        }
    }

    /// Field arguments become text values in the order given.
    pub fn request_fields(&self) -> Result<Fields> {
        let mut fields = Fields::new();
        for raw in &self.fields {
            let (key, value) = parse_key_value("fields", raw)?;
            fields.insert(key, value);
        }
        Ok(fields)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.action.parse::<crate::domain::action::Action>()?;
        self.request_fields()?;
        if self.base_url.is_none() && self.config.is_none() {
            return Err(DispatchError::ConfigError {
                message: "either --base-url or --config is required".to_string(),
            });
        }
        if let Some(url) = &self.base_url {
            crate::utils::validation::validate_url("base_url", url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::FieldValue;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::try_parse_from(std::iter::once("sheets-dispatch").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn collects_fields_in_order() {
        let cli = parse(&[
            "--base-url",
            "https://script.example.com/exec",
            "saveClient",
            "name=Acme Ltd",
            "email=ops@acme.test",
        ]);
        assert!(cli.validate().is_ok());
        let fields = cli.request_fields().unwrap();
        let keys: Vec<_> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "email"]);
        assert_eq!(fields.get("name"), Some(&FieldValue::from("Acme Ltd")));
    }

    #[test]
    fn rejects_unknown_action() {
        let cli = parse(&["--base-url", "https://x.test/exec", "dropClients"]);
        assert!(matches!(
            cli.validate().unwrap_err(),
            DispatchError::UnknownAction { .. }
        ));
    }

    #[test]
    fn rejects_field_without_separator() {
        let cli = parse(&["--base-url", "https://x.test/exec", "deleteClient", "C1"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn requires_an_endpoint_source() {
        let cli = parse(&["getClients"]);
        assert!(cli.validate().is_err());
        assert!(cli.dispatcher_config().is_err());
    }

    #[test]
    fn json_logs_flag_is_opt_in() {
        let plain = parse(&["--base-url", "https://x.test/exec", "getClients"]);
        assert!(!plain.json_logs);

        let json = parse(&["--json-logs", "--base-url", "https://x.test/exec", "getClients"]);
        assert!(json.json_logs);
        assert!(json.validate().is_ok());
    }

    #[test]
    fn base_url_wins_over_config_file() {
        let cli = parse(&[
            "--base-url",
            "https://x.test/exec",
            "--config",
            "/not/read.toml",
            "getClients",
        ]);
        assert_eq!(cli.dispatcher_config().unwrap().base_url, "https://x.test/exec");
    }
}
