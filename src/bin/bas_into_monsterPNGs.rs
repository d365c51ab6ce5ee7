#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{Context, Result},
	clap::{value_parser, Parser},
	log::info,
	std::{fs, path::PathBuf},
	zargon_asset_extract::{bas, config, ega::ZARGON_PALETTE, initLogging, saveAll, sheet, Image},
};

fn main() -> Result<()> {
	/// Renders the monster sprites stored as DATA statements in ZARGON.BAS as PNGs.
	#[derive(Parser, Debug)]
	struct Args {
		basFile: PathBuf,
		#[clap(short, long, default_value = "extracted_monsters")]
		output: PathBuf,
		/// Nearest-neighbor scale factor
		#[clap(short, long, default_value_t = 1, value_parser = value_parser!(u32).range(1..))]
		scale: u32,
		/// Also write every monster into monster_sheet.png
		#[clap(long)]
		sheet: bool,
		/// Monsters per sheet row
		#[clap(long, default_value_t = 4, value_parser = value_parser!(u32).range(1..))]
		columns: u32,
		/// TOML table of [[sprite]] entries to use instead of the built-in list
		#[clap(long)]
		sprites: Option<PathBuf>,
	}
	let Args { basFile, output, scale, sheet: makeSheet, columns, sprites } = Args::parse();
	initLogging();

	let entries = config::loadSpriteTable(sprites.as_deref()).context("loading the sprite table")?;
	let source = String::from_utf8_lossy(
		&fs::read(&basFile).with_context(|| format!("reading {}", basFile.display()))?,
	)
	.into_owned();
	let monsters: Vec<(&str, Image)> = entries
		.iter()
		.map(|entry| (entry.name.as_str(), bas::extract(&source, entry).render(&ZARGON_PALETTE).scaled(scale as _)))
		.collect();
	let saved = saveAll(&output, monsters.iter().map(|(name, monster)| (*name, monster)))?;
	info!("Extracted {saved} monsters to {}", output.display());

	if makeSheet {
		sheet::writeSheet(&output.join("monster_sheet.png"), monsters.iter().map(|(_, monster)| monster), columns as _)?;
	}
	Ok(())
}
