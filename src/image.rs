use {
	crate::{Rectangle, Result, Vec2, DIMENSIONS, HEIGHT, POINT, RGBA_SIZE, WIDTH, X, Y},
	::image::{DynamicImage, RgbaImage},
	png::{BitDepth, ColorType},
	std::{
		fs::File,
		io::{BufWriter, Write},
		path::Path,
	},
};

pub const FULLY_TRANSPARENT: [u8; RGBA_SIZE] = [0, 0, 0, 0];

/// Row-major RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
	pub width: usize,
	pub height: usize,
	pub data: Vec<u8>,
}

impl Image {
	pub fn fromWidthHeight(width: usize, height: usize) -> Image {
		Image::filled(width, height, FULLY_TRANSPARENT)
	}

	pub fn filled(width: usize, height: usize, rgba: [u8; RGBA_SIZE]) -> Image {
		Image { width, height, data: rgba.repeat(width * height) }
	}

	#[inline]
	pub fn dimensions(&self) -> Vec2 {
		[self.width, self.height]
	}

	#[inline]
	fn offset(&self, point: Vec2) -> usize {
		(point[Y] * self.width + point[X]) * RGBA_SIZE
	}

	#[inline]
	pub fn pixel(&self, point: Vec2) -> [u8; RGBA_SIZE] {
		let offset = self.offset(point);
		let mut rgba = FULLY_TRANSPARENT;
		rgba.copy_from_slice(&self.data[offset..offset + RGBA_SIZE]);
		rgba
	}

	#[inline]
	pub fn putpixel(&mut self, point: Vec2, rgba: [u8; RGBA_SIZE]) {
		let offset = self.offset(point);
		self.data[offset..offset + RGBA_SIZE].copy_from_slice(&rgba);
	}

	pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
		self.data.chunks_exact(self.width * RGBA_SIZE)
	}

	/// Copies `dimensions` pixels from `src` at `srcPoint` to `self` at `destPoint`, replacing alpha as well.
	pub fn blitPixelsRectangle(&mut self, destPoint: Vec2, dimensions: Vec2, src: &Image, srcPoint: Vec2) {
		let rowLen = dimensions[WIDTH] * RGBA_SIZE;
		for y in 0..dimensions[HEIGHT] {
			let (destOffset, srcOffset) =
				(self.offset([destPoint[X], destPoint[Y] + y]), src.offset([srcPoint[X], srcPoint[Y] + y]));
			self.data[destOffset..destOffset + rowLen].copy_from_slice(&src.data[srcOffset..srcOffset + rowLen]);
		}
	}

	/// `None` unless the rectangle is non-empty and lies entirely inside the image.
	pub fn cropped(&self, rectangle: Rectangle) -> Option<Image> {
		let [point, dimensions] = [rectangle[POINT], rectangle[DIMENSIONS]];
		if dimensions.contains(&0)
			|| point[X] + dimensions[WIDTH] > self.width
			|| point[Y] + dimensions[HEIGHT] > self.height
		{
			return None;
		}
		let mut image = Image::fromWidthHeight(dimensions[WIDTH], dimensions[HEIGHT]);
		image.blitPixelsRectangle([0, 0], dimensions, self, point);
		Some(image)
	}

	/// Nearest-neighbor upscale by an integer factor; a factor of 0 or 1 returns a copy.
	pub fn scaled(&self, factor: usize) -> Image {
		if factor <= 1 || self.data.is_empty() {
			return self.clone();
		}
		let (width, rowLen) = (self.width * factor, self.width * factor * RGBA_SIZE);
		let mut data = Vec::with_capacity(rowLen * self.height * factor);
		for row in self.rows() {
			let start = data.len();
			for rgba in row.chunks_exact(RGBA_SIZE) {
				for _ in 0..factor {
					data.extend_from_slice(rgba);
				}
			}
			for _ in 1..factor {
				data.extend_from_within(start..start + rowLen);
			}
		}
		Image { width, height: self.height * factor, data }
	}

	#[allow(clippy::cast_possible_truncation)]
	pub fn encodePNG(&self, writer: impl Write) -> Result<()> {
		let mut png = png::Encoder::new(writer, self.width as _, self.height as _);
		png.set_color(ColorType::Rgba);
		png.set_depth(BitDepth::Eight);
		png.write_header()?.write_image_data(&self.data)?;
		Ok(())
	}

	pub fn writePNG(&self, path: &Path) -> Result<()> {
		self.encodePNG(BufWriter::new(File::create(path)?))
	}

	/// Decodes any raster format the `image` crate recognizes, normalizing to RGBA8.
	pub fn decode(bytes: &[u8]) -> Result<Image> {
		Ok(::image::load_from_memory(bytes)?.into())
	}

	pub fn open(path: &Path) -> Result<Image> {
		Ok(::image::open(path)?.into())
	}
}

impl From<DynamicImage> for Image {
	fn from(image: DynamicImage) -> Image {
		let rgba: RgbaImage = image.into_rgba8();
		Image { width: rgba.width() as _, height: rgba.height() as _, data: rgba.into_raw() }
	}
}
