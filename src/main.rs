use clap::Parser;
use connect_model::config::{InspectSettings, LogFormat, OutputFormat};
use connect_model::core::catalog;
use connect_model::utils::{logger, validation::Validate};
use connect_model::{CliConfig, ModelError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let mut settings = match &config.config {
        Some(path) => match InspectSettings::from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to load settings from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => InspectSettings::default(),
    };

    let level = settings.logging.level.as_deref();
    match settings.logging.format {
        LogFormat::Compact => logger::init_cli_logger(level, config.verbose),
        LogFormat::Json => logger::init_json_logger(level, config.verbose),
    }

    tracing::info!("Starting connect-model CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config
        .validate()
        .and_then(|_| settings.validate())
        .and_then(|_| settings.apply_cli_overrides(config.format.as_deref(), config.strict))
    {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.list_types {
        for entry in catalog::entries() {
            println!("{}", entry.name);
        }
        return Ok(());
    }

    // validate() guarantees both are present past this point
    let (Some(record_type), Some(input)) = (&config.record_type, &config.input) else {
        std::process::exit(1);
    };

    match inspect(record_type, input, &settings) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Inspection of {} failed: {}", input, e);
            eprintln!("❌ {}", e);

            let exit_code = match e {
                ModelError::UnknownEnumValues { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

fn inspect(
    record_type: &str,
    input: &str,
    settings: &InspectSettings,
) -> connect_model::Result<String> {
    let entry = catalog::find(record_type)?;
    let content = std::fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    let decoded = entry.decode(value)?;
    tracing::info!(
        "📄 Decoded {} with {} populated field(s)",
        decoded.type_name,
        decoded.populated_fields.len()
    );

    settings.lint_policy().check(&decoded.unknown_values)?;

    let output = match settings.output.format {
        OutputFormat::Display => decoded.rendered,
        OutputFormat::Json if settings.pretty() => {
            serde_json::to_string_pretty(&decoded.normalized)?
        }
        OutputFormat::Json => serde_json::to_string(&decoded.normalized)?,
    };
    Ok(output)
}
