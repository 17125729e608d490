use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fx_eval::fx::{standard_registry, Operator, Value};
use fx_eval::report::{OutputFormat, Report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate `LEFT OP RIGHT`; operands that parse as numbers are numeric
    Eval {
        /// Left operand
        left: String,

        /// Operator token, e.g. "<" or "~="
        op: String,

        /// Right operand
        right: String,

        /// Output format: text, json or yaml
        #[arg(short, long, env = "FX_FORMAT", default_value = "text")]
        format: OutputFormat,
    },
    /// List the registered operator tokens
    Operators,
}

fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let registry = standard_registry();

    match args.command {
        Commands::Eval {
            left,
            op,
            right,
            format,
        } => {
            let operator = Operator::parse(&op)?;
            log::debug!("Evaluating {:?} {} {:?} as {}", left, operator, right, format);

            let report = Report::evaluate(
                registry,
                Value::dual(&left),
                operator,
                Value::dual(&right),
            )
            .context("Failed to build expression")?;
            println!("{}", report.render(format)?);

            if let Some(fault) = report.result.fault() {
                bail!("Evaluation failed: {}", fault);
            }
        }
        Commands::Operators => {
            for op in registry.operators() {
                println!("{}", op);
            }
        }
    }

    Ok(())
}
