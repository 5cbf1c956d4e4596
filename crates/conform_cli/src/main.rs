#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "conform", about = "Coerce JSON input into the shape of a JSON template")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Coerce an input document into the template's shape.
	Apply {
		template: PathBuf,
		/// Input JSON file, or `-` for stdin. Omit to treat the input as absent.
		#[arg(long)]
		input: Option<PathBuf>,
		/// Use the earliest string/number rules (no trimming, truthiness number fallback).
		#[arg(long)]
		legacy: bool,
		/// Keep surrounding whitespace in string outputs.
		#[arg(long)]
		no_trim: bool,
		#[command(flatten)]
		output: OutputArgs,
	},
	/// Print the template's fully populated default value.
	Defaults {
		template: PathBuf,
		#[command(flatten)]
		output: OutputArgs,
	},
	/// Report the shape of a JSON document.
	Shape {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
	/// Indent JSON output.
	#[arg(long)]
	pretty: bool,
	/// Print a human-readable tree instead of JSON.
	#[arg(long, conflicts_with = "pretty")]
	tree: bool,
}

impl From<OutputArgs> for cmd::OutputMode {
	fn from(args: OutputArgs) -> Self {
		if args.tree {
			Self::Tree
		} else if args.pretty {
			Self::PrettyJson
		} else {
			Self::Json
		}
	}
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Apply {
			template,
			input,
			legacy,
			no_trim,
			output,
		} => cmd::apply::run(template, input, legacy, no_trim, output.into()),
		Commands::Defaults { template, output } => cmd::defaults::run(template, output.into()),
		Commands::Shape { path, json } => cmd::shape::run(path, json),
	}
}
