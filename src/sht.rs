//! `.sht` text sprite sheets.
//!
//! Each block is a width line, a height line, a `"quoted"` name line and then `height` lines of
//! whitespace-separated color indices. Blocks simply follow one another.

use {
	crate::{
		ega::{colorIndex, Palette},
		Image,
	},
	log::{debug, info, warn},
	memchr::memchr,
};

/// Larger headers are treated as garbage.
pub const MAX_SPRITE_PIXELS: usize = 1 << 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
	pub name: String,
	pub width: usize,
	pub height: usize,
	/// Exactly `height` rows of exactly `width` raw values.
	pub rows: Vec<Vec<i64>>,
}

/// What color index 0 renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Background {
	Transparent,
	Opaque,
}

enum Malformed {
	BadDimension,
	BadName,
	Eof,
}

/// The name between the leading quote and the next one, if non-empty.
fn quotedName(line: &str) -> Option<&str> {
	let rest = line.strip_prefix('"')?;
	let end = memchr(b'"', rest.as_bytes())?;
	(end > 0).then(|| &rest[..end])
}

fn parseDimension(line: &str) -> Result<usize, Malformed> {
	match line.parse() {
		Ok(0) | Err(_) => Err(Malformed::BadDimension),
		Ok(dimension) => Ok(dimension),
	}
}

fn parseRow(line: &str, width: usize) -> Vec<i64> {
	let mut row: Vec<i64> = line.split_whitespace().map(|token| token.parse().unwrap_or(0)).collect();
	row.resize(width, 0);
	row
}

/// Parses the block starting at `lines[start]`, returning it and the index of the line after it.
fn parseBlock(lines: &[&str], start: usize) -> Result<(Sprite, usize), Malformed> {
	let header = lines.get(start..start + 3).ok_or(Malformed::Eof)?;
	let width = parseDimension(header[0])?;
	let height = parseDimension(header[1])?;
	width.checked_mul(height).filter(|&pixels| pixels <= MAX_SPRITE_PIXELS).ok_or(Malformed::BadDimension)?;
	let name = quotedName(header[2]).ok_or(Malformed::BadName)?.to_owned();
	let body = &lines[start + 3..];
	let mut rows: Vec<_> = body.iter().take(height).map(|line| parseRow(line, width)).collect();
	let next = start + 3 + rows.len();
	rows.resize(height, vec![0; width]);
	Ok((Sprite { name, width, height, rows }, next))
}

/// Every well-formed block in `text`. A malformed header is skipped one line at a time until the next
/// block parses, so a damaged sheet still yields all of its intact sprites.
pub fn parse(text: &str) -> Vec<Sprite> {
	let lines: Vec<&str> = text.trim().lines().map(str::trim).collect();
	let (mut sprites, mut i) = (Vec::new(), 0);
	while i < lines.len() {
		match parseBlock(&lines, i) {
			Ok((sprite, next)) => {
				info!("Found sprite {:?} ({}x{})", sprite.name, sprite.width, sprite.height);
				sprites.push(sprite);
				i = next;
			}
			Err(malformed) => {
				match malformed {
					Malformed::BadName => {
						warn!("Expected sprite name at line {}, got: {}", i + 3, lines[i + 2]);
					}
					Malformed::BadDimension => debug!("Skipping line {}: {:?}", i + 1, lines[i]),
					Malformed::Eof => debug!("Skipping line {}: incomplete block at end of file", i + 1),
				}
				i += 1;
			}
		}
	}
	info!("Extracted {} sprites", sprites.len());
	sprites
}

impl Sprite {
	pub fn render(&self, palette: &Palette, background: Background) -> Image {
		let data = self
			.rows
			.iter()
			.flatten()
			.flat_map(|&value| {
				let isBackground = background == Background::Transparent && colorIndex(value) == 0;
				palette.rgba(value, if isBackground { 0 } else { u8::MAX })
			})
			.collect();
		Image { width: self.width, height: self.height, data }
	}
}
