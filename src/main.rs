use clap::Parser;

use enumero::generator::generator::Generator;
use enumero::utils::config::{Config, ConfigOverrides};
use enumero::GeneratorError;
use tracing::{error, info};

use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Turn debugging information on
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// (json) Configuration with name, values, variants and output
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the enum [default: Enum]
    #[arg(short, long)]
    pub name: Option<String>,

    /// Values comma separated
    #[arg(long)]
    pub values: Option<String>,

    /// Alternate labels, repeatable
    #[arg(long = "variant", value_name = "NAME:VALUE1,VALUE2,...")]
    pub variants: Vec<String>,

    /// Name of the generated package [default: enums]
    #[arg(short, long)]
    pub package: Option<String>,

    /// Output file path, %s is replaced by the lower-cased enum name [default: ./%s_enumero.go]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Formatter run over the written file [default: go fmt]
    #[arg(long, value_name = "COMMAND")]
    pub formatter: Option<String>,

    /// Do not run the formatter
    #[arg(long)]
    pub no_format: bool,

    /// Print the generated code instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

fn run(cli: Cli) -> Result<(), GeneratorError> {
    let overrides = ConfigOverrides {
        name: cli.name,
        values: cli.values,
        variants: cli.variants,
        package: cli.package,
        output: cli.output,
        formatter: cli.formatter,
        no_format: cli.no_format,
    };
    let config = Config::load(cli.config.as_deref(), overrides)?;
    let generator = Generator::new(config);

    if cli.dry_run {
        return generator.dry_run(&mut std::io::stdout().lock());
    }

    let target_file = generator.generate()?;
    info!("Generation of {} completed", target_file.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // we setup logging
    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(tracing_level)
        .init();

    if let Err(err) = run(cli) {
        error!("Generation failed: {}", err);
        std::process::exit(1);
    }
}
