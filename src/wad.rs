//! `tiles.wad`: a directory of named records, each a QBASIC `GET` array of an EGA (`SCREEN 9`) bitmap.
//!
//! ```text
//! u32 LE                record count
//! [u8; 15] + u32 LE     name, absolute offset (per record)
//! at each offset:
//!   u16 LE              width
//!   u16 LE              height
//!   u16 LE              data length in bytes
//!   [u8; data length]   GET array
//! ```
//!
//! The GET array is a sequence of LE 16-bit words. The first two repeat width and height. Then, for each
//! scanline, the four bit planes follow one another, each plane row padded to a whole word.

use {
	crate::{ega::Palette, Error, Image, Result},
	byteorder::{ByteOrder, ReadBytesExt, LE},
	log::info,
	std::io::{Read, Seek, SeekFrom},
};

pub const NAME_LEN: usize = 15;
pub const NUM_PLANES: usize = 4;
const HEADER_WORDS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
	pub name: String,
	pub offset: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
	pub name: String,
	pub width: u16,
	pub height: u16,
	pub data: Vec<u8>,
}

trait ReadExt: Read + Seek {
	fn readU16(&mut self, what: &'static str) -> Result<u16> {
		let offset = self.stream_position()?;
		self.read_u16::<LE>().map_err(|err| Error::truncated(err, what, offset))
	}

	fn readU32(&mut self, what: &'static str) -> Result<u32> {
		let offset = self.stream_position()?;
		self.read_u32::<LE>().map_err(|err| Error::truncated(err, what, offset))
	}

	fn readBytes(&mut self, len: usize, what: &'static str) -> Result<Vec<u8>> {
		let (offset, mut bytes) = (self.stream_position()?, vec![0; len]);
		self.read_exact(&mut bytes).map_err(|err| Error::truncated(err, what, offset))?;
		Ok(bytes)
	}
}
impl<R: Read + Seek> ReadExt for R {}

/// Drops non-ASCII bytes and trims the space/NUL padding.
fn decodeName(bytes: &[u8]) -> String {
	let name: String = bytes.iter().filter(|byte| byte.is_ascii()).map(|&byte| char::from(byte)).collect();
	name.trim_matches(|c: char| c.is_whitespace() || c == '\0').to_owned()
}

pub fn readDirectory(reader: &mut (impl Read + Seek)) -> Result<Vec<DirectoryEntry>> {
	reader.seek(SeekFrom::Start(0))?;
	let count = reader.readU32("record count")?;
	info!("Number of tile records: {count}");
	let mut entries = Vec::new();
	for i in 0..count {
		let name = decodeName(&reader.readBytes(NAME_LEN, "record name")?);
		let offset = reader.readU32("record offset")?;
		info!("  Tile {i}: {name:?} at offset {offset}");
		entries.push(DirectoryEntry { name, offset });
	}
	Ok(entries)
}

pub fn readRecord(reader: &mut (impl Read + Seek), entry: &DirectoryEntry) -> Result<Record> {
	reader.seek(SeekFrom::Start(entry.offset.into()))?;
	let width = reader.readU16("record width")?;
	let height = reader.readU16("record height")?;
	let len = reader.readU16("record data length")?;
	info!("Extracting {:?}: {width}x{height}, {len} bytes", entry.name);
	let data = reader.readBytes(len.into(), "record data")?;
	Ok(Record { name: entry.name.clone(), width, height, data })
}

/// Reads the directory and then every record it lists. The first unreadable field aborts the whole archive.
pub fn readArchive(reader: &mut (impl Read + Seek)) -> Result<Vec<Record>> {
	readDirectory(reader)?.iter().map(|entry| readRecord(reader, entry)).collect()
}

/// Color indices (0..16) of a `width` x `height` GET array, row-major. Words missing from `data` read as zero.
pub fn decodePlanar(data: &[u8], width: usize, height: usize) -> Vec<u8> {
	let words: Vec<u16> = data.chunks_exact(2).map(LE::read_u16).collect();
	let wordsPerPlaneRow = width.div_ceil(8).div_ceil(2);
	let planeByte = |y: usize, plane: usize, byte: usize| -> u8 {
		let wordIndex = HEADER_WORDS + (y * NUM_PLANES + plane) * wordsPerPlaneRow + byte / 2;
		words.get(wordIndex).map_or(0, |&word| word.to_le_bytes()[byte % 2])
	};
	let mut indices = Vec::with_capacity(width * height);
	for y in 0..height {
		for x in 0..width {
			let (byte, bit) = (x / 8, 7 - x % 8);
			let mut index = 0;
			for plane in 0..NUM_PLANES {
				index |= ((planeByte(y, plane, byte) >> bit) & 1) << plane;
			}
			indices.push(index);
		}
	}
	indices
}

impl Record {
	pub fn indices(&self) -> Vec<u8> {
		decodePlanar(&self.data, self.width.into(), self.height.into())
	}

	/// Every pixel is opaque; the archive has no transparency.
	pub fn render(&self, palette: &Palette) -> Image {
		let data = self.indices().into_iter().flat_map(|index| palette.rgba(index.into(), u8::MAX)).collect();
		Image { width: self.width.into(), height: self.height.into(), data }
	}
}
