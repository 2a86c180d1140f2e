use anyhow::{Context, Result, bail};
use calcus::{
    Bindings, Expression, SampleGrid, Sampler, find_formula, formulas, validate_variable_name,
};
use clap::{Parser, ValueEnum};
use log::info;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Calcus - Differentiate and evaluate built-in formulas
#[derive(Parser, Debug)]
#[command(name = "calcus")]
#[command(about = "Differentiate, evaluate and tabulate built-in formulas")]
#[command(version)]
pub struct CliArgs {
    /// Name of the built-in formula; omit to list them
    pub formula: Option<String>,

    /// Variable the formula is written in and differentiated by
    #[arg(short, long, default_value = "x")]
    pub variable: String,

    /// Evaluate the formula and its derivative at this value
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<f64>,

    /// Start of the range to tabulate
    #[arg(long, requires = "to", allow_negative_numbers = true)]
    pub from: Option<f64>,

    /// End of the range to tabulate
    #[arg(long, requires = "from", allow_negative_numbers = true)]
    pub to: Option<f64>,

    /// Number of points in the tabulated range
    #[arg(long, default_value_t = 11)]
    pub steps: usize,

    /// Print formulas as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub formula: Option<String>,
    pub variable: String,
    pub at: Option<f64>,
    pub range: Option<SampleGrid>,
    pub latex: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    validate_variable_name(&args.variable).context("Invalid variable name")?;

    let range = match (args.from, args.to) {
        (Some(start), Some(end)) => {
            Some(SampleGrid::new(start, end, args.steps).context("Invalid range")?)
        }
        (None, None) => None,
        _ => bail!("--from and --to must be given together"),
    };

    Ok(CliConfig {
        formula: args.formula,
        variable: args.variable,
        at: args.at,
        range,
        latex: args.latex,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn show(expr: &Expression, latex: bool) -> String {
    if latex { expr.to_latex() } else { expr.render() }
}

fn list_formulas() {
    for formula in formulas() {
        println!("{:<8} {}", formula.name, formula.description);
    }
}

/// Message printed for a failed run, including the context chain
pub fn error_report(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let Some(name) = config.formula.as_deref() else {
        list_formulas();
        return Ok(());
    };

    let formula = find_formula(name).context("Run without arguments to list formulas")?;
    let var = config.variable.as_str();
    let sampler = Sampler::new(formula.build(var), var);

    info!("Differentiating '{}' with respect to {}", formula.name, var);

    println!("f({}) = {}", var, show(sampler.function(), config.latex));
    println!("f'({}) = {}", var, show(sampler.derivative(), config.latex));

    let base = Bindings::new();

    if let Some(at) = config.at {
        let sample = sampler
            .sample_at(at, &base)
            .with_context(|| format!("Failed to evaluate at {} = {}", var, at))?;
        println!("f({}) = {}", at, sample.value);
        println!("f'({}) = {}", at, sample.slope);
    }

    if let Some(grid) = &config.range {
        let samples = sampler.tabulate(grid, &base).context("Failed to tabulate")?;
        println!("{}\tf\tf'", var);
        for sample in samples {
            println!("{}\t{}\t{}", sample.at, sample.value, sample.slope);
        }
    }

    Ok(())
}
