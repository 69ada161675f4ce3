//! Interactive shell over a [`MinMaxStack`] of integers.

use std::io::{self, IsTerminal};

use clap::{ArgAction, Parser};
use minmax_stack::shell::{Shell, ShellConfig};
use minmax_stack::MinMaxStack;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    // Value pushed when no value is entered
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    #[arg(default_value_t = 5)]
    default_value: i64,

    // Repeat input lines; on by default when stdin is not a terminal
    #[arg(long)]
    echo: bool,

    // Log verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let config = ShellConfig {
        default_value: args.default_value,
        echo: args.echo || !stdin.is_terminal(),
    };
    tracing::info!(?config, "starting shell");

    let mut stack = MinMaxStack::<i64>::new();
    let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), config);
    shell.run(&mut stack)?;
    Ok(())
}
