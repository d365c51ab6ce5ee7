#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{Context, Result},
	clap::{value_parser, Parser},
	log::info,
	std::{fs::File, io::BufReader, path::PathBuf},
	zargon_asset_extract::{ega::ZARGON_PALETTE, initLogging, saveAll, sheet, wad, Image},
};

fn main() -> Result<()> {
	/// Extracts the EGA tiles of a tiles.wad archive as PNGs.
	#[derive(Parser, Debug)]
	struct Args {
		wadFile: PathBuf,
		#[clap(short, long, default_value = "extracted_tiles")]
		output: PathBuf,
		/// Nearest-neighbor scale factor
		#[clap(short, long, default_value_t = 1, value_parser = value_parser!(u32).range(1..))]
		scale: u32,
		/// Also write every tile into tile_sheet.png
		#[clap(long)]
		sheet: bool,
		/// Tiles per sheet row
		#[clap(long, default_value_t = 8, value_parser = value_parser!(u32).range(1..))]
		columns: u32,
		/// Print the palette before extracting
		#[clap(long)]
		palette: bool,
	}
	let Args { wadFile, output, scale, sheet: makeSheet, columns, palette } = Args::parse();
	initLogging();

	if palette {
		println!("Zargon EGA palette:");
		for line in ZARGON_PALETTE.describe() {
			println!("{line}");
		}
		println!();
	}

	let records = wad::readArchive(&mut BufReader::new(
		File::open(&wadFile).with_context(|| format!("opening {}", wadFile.display()))?,
	))
	.with_context(|| format!("reading {}", wadFile.display()))?;
	let tiles: Vec<(&str, Image)> = records
		.iter()
		.map(|record| (record.name.as_str(), record.render(&ZARGON_PALETTE).scaled(scale as _)))
		.collect();
	let saved = saveAll(&output, tiles.iter().map(|(name, tile)| (*name, tile)))?;
	info!("Extracted {saved} tiles to {}", output.display());

	if makeSheet {
		sheet::writeSheet(&output.join("tile_sheet.png"), tiles.iter().map(|(_, tile)| tile), columns as _)?;
	}
	Ok(())
}
