#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{Context, Result},
	clap::{value_parser, Parser},
	log::info,
	std::{fs, path::PathBuf},
	zargon_asset_extract::{
		ega::ZARGON_PALETTE,
		initLogging, saveAll, sheet,
		sht::{self, Background},
		Image,
	},
};

fn main() -> Result<()> {
	/// Renders the sprites of a .sht text sheet as PNGs.
	#[derive(Parser, Debug)]
	struct Args {
		shtFile: PathBuf,
		#[clap(short, long, default_value = "extracted_sprites")]
		output: PathBuf,
		/// Nearest-neighbor scale factor
		#[clap(short, long, default_value_t = 1, value_parser = value_parser!(u32).range(1..))]
		scale: u32,
		/// Also write every sprite into sprite_sheet.png
		#[clap(long)]
		sheet: bool,
		/// Sprites per sheet row
		#[clap(long, default_value_t = 8, value_parser = value_parser!(u32).range(1..))]
		columns: u32,
		/// Render color 0 as opaque black instead of transparent
		#[clap(long)]
		opaque: bool,
	}
	let Args { shtFile, output, scale, sheet: makeSheet, columns, opaque } = Args::parse();
	initLogging();

	let text = String::from_utf8_lossy(
		&fs::read(&shtFile).with_context(|| format!("reading {}", shtFile.display()))?,
	)
	.into_owned();
	let background = if opaque { Background::Opaque } else { Background::Transparent };
	let sprites = sht::parse(&text);
	let images: Vec<(&str, Image)> = sprites
		.iter()
		.map(|sprite| (sprite.name.as_str(), sprite.render(&ZARGON_PALETTE, background).scaled(scale as _)))
		.collect();
	let saved = saveAll(&output, images.iter().map(|(name, image)| (*name, image)))?;
	info!("Extracted {saved} sprites to {}", output.display());

	if makeSheet {
		sheet::writeSheet(&output.join("sprite_sheet.png"), images.iter().map(|(_, image)| image), columns as _)?;
	}
	Ok(())
}
