use clap::Parser;
use gql_spansql::ConfigOverrides;

mod cli;

#[derive(Parser)]
#[command(name = "gql-spansql")]
#[command(version = "0.1.0")]
#[command(about = "Turn GraphQL schemas into Cloud Spanner CREATE TABLE statements", long_about = None)]
struct Cli {
    /// Comma-separated glob patterns of schema files (reads stdin if omitted)
    #[arg(short = 's', long = "schema", value_delimiter = ',')]
    schemas: Vec<String>,

    /// Loose type check: allow nullable elements in list fields
    #[arg(long)]
    loose: bool,

    /// If not empty, add this column as a created-at TIMESTAMP column
    #[arg(long)]
    created_column_name: Option<String>,

    /// If not empty, add this column as an updated-at TIMESTAMP column
    #[arg(long)]
    updated_column_name: Option<String>,

    /// snake, lowercamel or uppercamel; empty for no conversion
    #[arg(long)]
    table_case: Option<String>,

    /// snake, lowercamel or uppercamel; empty for no conversion
    #[arg(long)]
    column_case: Option<String>,

    /// TOML config file; command-line flags override its values
    #[arg(long)]
    config: Option<String>,

    /// Write DDL to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Write the effective configuration to this TOML file and exit
    #[arg(long)]
    save_config: Option<String>,

    /// Log decisions for every table and column (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the DDL, so logs go to stderr
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    cli::convert::run(cli::convert::ConvertArgs {
        schemas: cli.schemas,
        config: cli.config,
        output: cli.output,
        save_config: cli.save_config,
        overrides: ConfigOverrides {
            loose: cli.loose,
            created_column_name: cli.created_column_name,
            updated_column_name: cli.updated_column_name,
            table_case: cli.table_case,
            column_case: cli.column_case,
        },
    })
}
