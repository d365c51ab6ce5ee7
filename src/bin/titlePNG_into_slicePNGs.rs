#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{Context, Result},
	clap::Parser,
	log::{error, info},
	std::{path::PathBuf, process::ExitCode},
	zargon_asset_extract::{config, initLogging, slice, Image},
};

fn main() -> Result<ExitCode> {
	/// Cuts the named asset regions out of a title screen mockup.
	#[derive(Parser, Debug)]
	struct Args {
		inputImage: PathBuf,
		#[clap(default_value = "sliced_assets")]
		outputDir: PathBuf,
		/// TOML table of [[region]] entries to use instead of the built-in list
		#[clap(long)]
		regions: Option<PathBuf>,
	}
	let Args { inputImage, outputDir, regions } = Args::parse();
	initLogging();

	if !inputImage.exists() {
		error!("Input image {} not found", inputImage.display());
		return Ok(ExitCode::FAILURE);
	}
	let regions = config::loadRegionTable(regions.as_deref()).context("loading the region table")?;
	let image = Image::open(&inputImage).with_context(|| format!("reading {}", inputImage.display()))?;
	info!("Image size: {}x{}", image.width, image.height);
	slice::sliceAll(&image, &regions, &outputDir)?;
	Ok(ExitCode::SUCCESS)
}
