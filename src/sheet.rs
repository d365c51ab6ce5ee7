//! Contact sheets: every image in a fixed-column grid of uniform cells.

use {
	crate::{Image, Result, Vec2, HEIGHT, RGBA_SIZE, WIDTH, X, Y},
	log::{info, warn},
	std::path::Path,
};

pub const PADDING: usize = 2;
pub const BACKGROUND: [u8; RGBA_SIZE] = [64, 64, 64, 255];

/// Dimensions of a sheet holding `count` cells of `cellDimensions` in `columns` columns.
pub fn sheetDimensions(count: usize, columns: usize, cellDimensions: Vec2) -> Vec2 {
	let rows = count.div_ceil(columns);
	[columns * (cellDimensions[WIDTH] + PADDING) + PADDING, rows * (cellDimensions[HEIGHT] + PADDING) + PADDING]
}

/// Lays the images out row-major in input order. `None` for an empty input.
///
/// # Panics
///
/// If `columns` is zero.
pub fn composite<'a>(images: impl IntoIterator<Item = &'a Image>, columns: usize) -> Option<Image> {
	assert_ne!(columns, 0);
	let images: Vec<&Image> = images.into_iter().collect();
	if images.is_empty() {
		return None;
	}
	let cellDimensions = images.iter().fold([0, 0], |[width, height], image| {
		[width.max(image.width), height.max(image.height)]
	});
	let [width, height] = sheetDimensions(images.len(), columns, cellDimensions);
	let mut sheet = Image::filled(width, height, BACKGROUND);
	for (i, image) in images.iter().enumerate() {
		let (row, column) = (i / columns, i % columns);
		let mut destPoint = [0; 2];
		destPoint[X] = column * (cellDimensions[WIDTH] + PADDING) + PADDING;
		destPoint[Y] = row * (cellDimensions[HEIGHT] + PADDING) + PADDING;
		sheet.blitPixelsRectangle(destPoint, image.dimensions(), image, [0, 0]);
	}
	info!("Composited {} images into a {width}x{height} sheet", images.len());
	Some(sheet)
}

/// Composites `images` and writes the sheet to `path`. Nothing is written for an empty input.
pub fn writeSheet<'a>(path: &Path, images: impl IntoIterator<Item = &'a Image>, columns: usize) -> Result<()> {
	match composite(images, columns) {
		Some(sheet) => {
			sheet.writePNG(path)?;
			info!("Created sheet {} ({}x{})", path.display(), sheet.width, sheet.height);
		}
		None => warn!("Nothing to put on {}", path.display()),
	}
	Ok(())
}
