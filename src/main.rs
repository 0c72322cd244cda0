#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "propdoc", about = "Serialized scene-object inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info {
		path: PathBuf,
	},
	Kinds,
	Show {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
	MakeSample {
		path: PathBuf,
		#[arg(long)]
		compress: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> propdoc::prop::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info { path } => cmd::info::run(path),
		Commands::Kinds => cmd::kinds::run(),
		Commands::Show { path, json } => cmd::show::run(path, json),
		Commands::MakeSample { path, compress } => cmd::make_sample::run(path, compress),
	}
}
