//! Command-line front end for the insertion engine.
//!
//! Owns everything the engine deliberately does not: argument parsing,
//! logging setup, reading and writing the manifest file, and user-facing
//! output. The manifest is read once, transformed in memory, and written
//! back only when the whole batch succeeded.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use pbxweave_engine::{Addition, Engine, ManifestLayout};
use tracing::info;

#[cfg(test)]
mod tests;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "pbxweave")]
#[command(about = "Insert source files into an Xcode project manifest")]
struct Args {
	/// Path to the project.pbxproj to edit
	project: PathBuf,

	/// Additions as GROUP/FILE pairs, e.g. `Views/SignInView.swift`
	#[arg(value_name = "GROUP/FILE")]
	additions: Vec<String>,

	/// JSON plan file: an array of {"file": ..., "group": ...} objects
	#[arg(long, value_name = "PATH")]
	plan: Option<PathBuf>,

	/// Group that newly created groups are parented under
	#[arg(long, default_value = "Sources")]
	root_group: String,

	/// JSON file overriding the manifest layout (section and phase names)
	#[arg(long, value_name = "PATH")]
	layout: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// Splits a `GROUP/FILE` pair; the file part may itself contain slashes.
fn parse_pair(raw: &str) -> anyhow::Result<Addition> {
	match raw.split_once('/') {
		Some((group, file)) if !group.is_empty() && !file.is_empty() => {
			Ok(Addition::new(file, group))
		}
		_ => bail!("expected GROUP/FILE, got `{raw}`"),
	}
}

fn run(args: &Args) -> anyhow::Result<()> {
	let mut additions = Vec::new();
	if let Some(path) = &args.plan {
		let raw = fs::read_to_string(path)
			.with_context(|| format!("reading plan {}", path.display()))?;
		let planned: Vec<Addition> = serde_json::from_str(&raw)
			.with_context(|| format!("parsing plan {}", path.display()))?;
		additions.extend(planned);
	}
	for raw in &args.additions {
		additions.push(parse_pair(raw)?);
	}
	if additions.is_empty() {
		bail!("no additions requested; pass GROUP/FILE pairs or --plan");
	}

	let layout: ManifestLayout = match &args.layout {
		Some(path) => {
			let raw = fs::read_to_string(path)
				.with_context(|| format!("reading layout {}", path.display()))?;
			serde_json::from_str(&raw).with_context(|| format!("parsing layout {}", path.display()))?
		}
		None => ManifestLayout::xcode(&args.root_group),
	};

	let manifest = fs::read_to_string(&args.project)
		.with_context(|| format!("reading {}", args.project.display()))?;
	let mutated = Engine::new(layout).apply(&manifest, &additions)?;
	fs::write(&args.project, &mutated)
		.with_context(|| format!("writing {}", args.project.display()))?;
	info!(count = additions.len(), project = %args.project.display(), "manifest updated");

	println!("Added {} file(s) to {}:", additions.len(), args.project.display());
	for addition in &additions {
		println!("  - {}/{}", addition.group, addition.logical_path);
	}
	Ok(())
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	run(&args)
}
