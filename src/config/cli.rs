use crate::config::toml_config::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_one_of, validate_path, validate_required_field, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "connect-model")]
#[command(about = "Decode, render and lint contact-center API records")]
pub struct CliConfig {
    #[arg(long, help = "Record type to decode the input as, e.g. ClaimedPhoneNumberSummary")]
    pub record_type: Option<String>,

    #[arg(long, help = "JSON document to decode")]
    pub input: Option<String>,

    #[arg(long, help = "TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Output format: display or json")]
    pub format: Option<String>,

    #[arg(long, help = "Fail when enumeration values fall outside the documented sets")]
    pub strict: bool,

    #[arg(long, help = "List the known record types and exit")]
    pub list_types: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate_path("config", config)?;
            validate_file_extensions("config", std::slice::from_ref(config), &["toml"])?;
        }
        if let Some(format) = &self.format {
            validate_one_of("format", format, OutputFormat::NAMES)?;
        }
        if self.list_types {
            return Ok(());
        }

        validate_required_field("record_type", &self.record_type)?;
        let input = validate_required_field("input", &self.input)?;
        validate_path("input", input)?;
        validate_file_extensions("input", std::slice::from_ref(input), &["json"])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        CliConfig::parse_from(std::iter::once("connect-model").chain(args.iter().copied()))
    }

    #[test]
    fn test_list_types_needs_nothing_else() {
        assert!(parse(&["--list-types"]).validate().is_ok());
    }

    #[test]
    fn test_inspect_arguments() {
        let config = parse(&[
            "--record-type",
            "View",
            "--input",
            "view.json",
            "--format",
            "json",
            "--strict",
        ]);
        assert!(config.validate().is_ok());
        assert!(config.strict);

        assert!(parse(&["--record-type", "View"]).validate().is_err());
        assert!(parse(&["--record-type", "View", "--input", "view.yaml"])
            .validate()
            .is_err());
        assert!(parse(&["--list-types", "--format", "xml"]).validate().is_err());
    }
}
