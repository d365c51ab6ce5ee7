//! Cutting named rectangles out of a single image, e.g. the title screen mockup.

use {
	crate::{safeName, Error, Image, Rectangle, Result, Vec2, HEIGHT, WIDTH},
	log::{error, info},
	serde::Deserialize,
	std::{fs, path::Path},
};

/// One edge coordinate, possibly relative to the image size. In TOML: `20`, `{ fromEnd = 120 }` or
/// `{ fromCenter = -100 }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Coord {
	Absolute(i64),
	FromEnd { fromEnd: i64 },
	FromCenter { fromCenter: i64 },
}

impl Coord {
	#[allow(clippy::cast_possible_wrap)]
	pub fn resolve(self, extent: usize) -> i64 {
		let extent = extent as i64;
		match self {
			Coord::Absolute(coord) => coord,
			Coord::FromEnd { fromEnd } => extent - fromEnd,
			Coord::FromCenter { fromCenter } => extent / 2 + fromCenter,
		}
	}
}

const fn at(coord: i64) -> Coord {
	Coord::Absolute(coord)
}
const fn fromEnd(fromEnd: i64) -> Coord {
	Coord::FromEnd { fromEnd }
}
const fn fromCenter(fromCenter: i64) -> Coord {
	Coord::FromCenter { fromCenter }
}

/// Corners `(x1, y1)` inclusive and `(x2, y2)` exclusive.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Region {
	pub name: String,
	pub x1: Coord,
	pub y1: Coord,
	pub x2: Coord,
	pub y2: Coord,
}

impl Region {
	pub fn new(name: &str, [x1, y1, x2, y2]: [Coord; 4]) -> Region {
		Region { name: name.to_owned(), x1, y1, x2, y2 }
	}

	pub fn corners(&self, dimensions: Vec2) -> [i64; 4] {
		let [width, height] = [dimensions[WIDTH], dimensions[HEIGHT]];
		[self.x1.resolve(width), self.y1.resolve(height), self.x2.resolve(width), self.y2.resolve(height)]
	}

	/// The resolved rectangle, which must be non-empty and inside `dimensions`.
	pub fn rectangle(&self, dimensions: Vec2) -> Result<Rectangle> {
		let corners @ [x1, y1, x2, y2] = self.corners(dimensions);
		let fits = |start: i64, end: i64, extent: usize| {
			let (start, end) = (usize::try_from(start).ok()?, usize::try_from(end).ok()?);
			(start < end && end <= extent).then_some([start, end - start])
		};
		match (fits(x1, x2, dimensions[WIDTH]), fits(y1, y2, dimensions[HEIGHT])) {
			(Some([x, width]), Some([y, height])) => Ok([[x, y], [width, height]]),
			_ => Err(self.outOfBounds(corners, dimensions)),
		}
	}

	fn outOfBounds(&self, corners: [i64; 4], imageDimensions: Vec2) -> Error {
		Error::CropOutOfBounds { name: self.name.clone(), corners, imageDimensions }
	}

	pub fn crop(&self, image: &Image) -> Result<Image> {
		let dimensions = image.dimensions();
		let rectangle = self.rectangle(dimensions)?;
		image.cropped(rectangle).ok_or_else(|| self.outOfBounds(self.corners(dimensions), dimensions))
	}
}

/// Asset regions of the title screen mockup, laid out against its edges and center line.
pub fn titleScreenRegions() -> Vec<Region> {
	vec![
		Region::new("torch_left", [at(20), at(150), at(120), at(400)]),
		Region::new("torch_right", [fromEnd(120), at(150), fromEnd(20), at(400)]),
		Region::new("demon_head", [fromCenter(-100), at(10), fromCenter(100), at(120)]),
		Region::new("title_frame", [at(120), at(80), fromEnd(120), at(280)]),
		Region::new("parchment_banner", [at(200), at(290), fromEnd(200), at(380)]),
		Region::new("slot_frame", [at(150), at(390), fromEnd(150), at(530)]),
		Region::new("candle_left", [at(20), at(980), at(120), fromEnd(20)]),
		Region::new("candle_right", [fromEnd(120), at(1080), fromEnd(20), fromEnd(20)]),
		Region::new("coin_pile", [at(0), fromEnd(250), at(150), fromEnd(0)]),
		Region::new("chains", [fromEnd(180), at(950), fromEnd(0), fromEnd(100)]),
		Region::new("sword", [fromEnd(200), fromEnd(180), fromEnd(20), fromEnd(0)]),
		Region::new("pillar_left", [at(0), at(200), at(120), at(600)]),
		Region::new("pillar_right", [fromEnd(120), at(200), fromEnd(0), at(600)]),
		Region::new("stone_wall_bg", [fromCenter(-100), at(700), fromCenter(100), at(900)]),
	]
}

/// Crops and saves every region as `<outputDir>/<name>.png`. A region that fails is logged and skipped;
/// only failing to create `outputDir` is an error. Returns how many regions were saved.
pub fn sliceAll(image: &Image, regions: &[Region], outputDir: &Path) -> Result<usize> {
	fs::create_dir_all(outputDir)?;
	let mut saved = 0;
	for region in regions {
		let path = outputDir.join(format!("{}.png", safeName(&region.name)));
		match region.crop(image).and_then(|crop| crop.writePNG(&path).map(|()| crop.dimensions())) {
			Ok([width, height]) => {
				info!("Saved {} ({width}x{height})", path.display());
				saved += 1;
			}
			Err(err) => error!("Failed to save {}: {err}", region.name),
		}
	}
	info!("{saved} of {} assets saved to {}", regions.len(), outputDir.display());
	Ok(saved)
}
