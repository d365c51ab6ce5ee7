#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub mod bas;
pub mod config;
pub mod ega;
pub mod error;
pub mod image;
pub mod sheet;
pub mod sht;
pub mod slice;
pub mod wad;

pub use {
	error::{Error, Result},
	image::Image,
};

use {
	log::info,
	std::{fs, path::Path},
};

pub type Vec2 = [usize; 2];
pub type Rectangle = [Vec2; 2];

pub const X: usize = 0;
pub const Y: usize = 1;
pub const WIDTH: usize = X;
pub const HEIGHT: usize = Y;
pub const POINT: usize = 0;
pub const DIMENSIONS: usize = 1;

pub const RGB_SIZE: usize = 3;
pub const RGBA_SIZE: usize = 4;

/// Lowercases `name` and turns dashes and spaces into underscores, e.g. `"Rock-1"` -> `"rock_1"`.
pub fn safeName(name: &str) -> String {
	name.to_lowercase().replace(['-', ' '], "_")
}

/// `info` unless overridden with `RUST_LOG`.
pub fn initLogging() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp(None)
		.init();
}

/// Writes every image as `<outputDir>/<safeName(name)>.png`, creating `outputDir` if needed.
pub fn saveAll<'a>(outputDir: &Path, images: impl IntoIterator<Item = (&'a str, &'a Image)>) -> Result<usize> {
	fs::create_dir_all(outputDir)?;
	let mut count = 0;
	for (name, image) in images {
		let path = outputDir.join(format!("{}.png", safeName(name)));
		image.writePNG(&path)?;
		info!("Saved {} ({}x{})", path.display(), image.width, image.height);
		count += 1;
	}
	Ok(count)
}
