use anyhow::Context;
use gql_spansql::config::{load_config, save_config, ConfigOverrides, ConverterConfig};
use gql_spansql::schema::{load_sources, read_stdin, Schema};
use gql_spansql::Converter;

/// Options for one conversion, as parsed from the command line
pub struct ConvertArgs {
    pub schemas: Vec<String>,
    pub config: Option<String>,
    pub output: Option<String>,
    /// Write the merged configuration here instead of converting
    pub save_config: Option<String>,
    pub overrides: ConfigOverrides,
}

/// Run the conversion: load the schema, convert it, write the DDL
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path))?,
        None => ConverterConfig::default(),
    }
    .merge_cli(args.overrides);

    if let Some(path) = &args.save_config {
        save_config(&config, path).with_context(|| format!("saving config {}", path))?;
        tracing::info!("Saved configuration to {}", path);
        return Ok(());
    }

    let sources = if args.schemas.is_empty() {
        vec![read_stdin().context("reading schema from stdin")?]
    } else {
        load_sources(&args.schemas)?
    };
    tracing::info!("Loaded {} schema source(s)", sources.len());

    let schema = Schema::parse(&sources)?;
    let converter = Converter::new(&schema, &config)?;
    let sql = converter.spanner_sql()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &sql).with_context(|| format!("writing {}", path))?;
            tracing::info!("Wrote DDL to {}", path);
        }
        None => print!("{}", sql),
    }

    Ok(())
}
