#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "nvset", about = "Named-value set inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Pretty-print a marshalled container.
	Show(cmd::show::Args),
	/// Merge two containers; existing entries in the base win.
	Merge(cmd::merge::Args),
	/// Check whether one container is a subset of another.
	Subset(cmd::subset::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> nvset::nvs::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Show(args) => cmd::show::run(args),
		Commands::Merge(args) => cmd::merge::run(args),
		Commands::Subset(args) => cmd::subset::run(args),
	}
}
