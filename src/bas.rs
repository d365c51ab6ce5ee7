//! Sprites embedded in QBASIC source as `DATA` statements, one comma-separated color index per pixel.

use {
	crate::{ega::Palette, image::FULLY_TRANSPARENT, Image},
	log::info,
	serde::Deserialize,
};

/// Token that marks a pixel as see-through.
pub const TRANSPARENT_TOKEN: &str = "x";

/// Where a sprite's `DATA` statements begin in the source.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SpriteEntry {
	pub name: String,
	pub width: usize,
	pub height: usize,
	/// 1-based line number of the first `DATA` statement.
	pub line: usize,
}

impl SpriteEntry {
	pub fn new(name: &str, width: usize, height: usize, line: usize) -> SpriteEntry {
		SpriteEntry { name: name.to_owned(), width, height, line }
	}
}

/// The monsters read by the game's `readjunk` routine in `ZARGON.BAS`.
pub fn zargonSprites() -> Vec<SpriteEntry> {
	vec![
		SpriteEntry::new("joe", 18, 30, 262),
		SpriteEntry::new("bat", 17, 15, 294),
		SpriteEntry::new("slime", 17, 15, 316),
		SpriteEntry::new("ghost", 27, 26, 333),
		SpriteEntry::new("joeattax", 21, 30, 361),
		SpriteEntry::new("flame", 80, 4, 393),
		SpriteEntry::new("beleth", 39, 32, 400),
		SpriteEntry::new("babble", 27, 10, 434),
		SpriteEntry::new("spook", 25, 26, 446),
	]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
	pub name: String,
	pub width: usize,
	pub height: usize,
	/// Row-major, exactly `width * height` cells. `None` is transparent.
	pub cells: Vec<Option<i64>>,
}

/// Strips a `DATA` keyword of any case.
fn dataPayload(line: &str) -> Option<&str> {
	let keyword = line.get(..4)?;
	keyword.eq_ignore_ascii_case("DATA").then(|| &line[4..])
}

/// Comma-separated values after the `DATA` keyword. Anything but an integer is transparent.
fn parseValues(payload: &str) -> impl Iterator<Item = Option<i64>> + '_ {
	payload
		.split(',')
		.map(str::trim)
		.map(|token| if token.eq_ignore_ascii_case(TRANSPARENT_TOKEN) { None } else { token.parse().ok() })
}

/// Values of one `DATA` statement, with or without the keyword.
pub fn parseDataLine(line: &str) -> Vec<Option<i64>> {
	parseValues(dataPayload(line.trim()).unwrap_or(line)).collect()
}

/// Collects values from `DATA` statements starting at the 1-based `startLine`. Blank lines and `'` comments
/// are passed over; any other statement ends the sprite once values have been found.
pub fn collectValues(source: &str, startLine: usize, needed: usize) -> Vec<Option<i64>> {
	let mut values = Vec::with_capacity(needed);
	for line in source.lines().skip(startLine.saturating_sub(1)).map(str::trim) {
		if values.len() >= needed {
			break;
		}
		if let Some(payload) = dataPayload(line) {
			values.extend(parseValues(payload));
		} else if !line.is_empty() && !line.starts_with('\'') && !values.is_empty() {
			break;
		}
	}
	values
}

pub fn extract(source: &str, entry: &SpriteEntry) -> Sprite {
	let needed = entry.width * entry.height;
	let mut cells = collectValues(source, entry.line, needed);
	info!(
		"Extracting {:?} ({}x{}) from line {}: {} of {needed} values",
		entry.name,
		entry.width,
		entry.height,
		entry.line,
		cells.len().min(needed)
	);
	cells.resize(needed, None);
	Sprite { name: entry.name.clone(), width: entry.width, height: entry.height, cells }
}

impl Sprite {
	pub fn render(&self, palette: &Palette) -> Image {
		let data = self
			.cells
			.iter()
			.flat_map(|&cell| cell.map_or(FULLY_TRANSPARENT, |value| palette.rgba(value, u8::MAX)))
			.collect();
		Image { width: self.width, height: self.height, data }
	}
}
