use {std::io, thiserror::Error};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error(transparent)]
	Io(#[from] io::Error),

	/// A fixed-size field could not be read in full, e.g. a directory offset pointing past the end of the archive.
	#[error("unexpected end of file reading {what} at offset {offset}")]
	Truncated { what: &'static str, offset: u64 },

	#[error("PNG encoding failed: {0}")]
	PngEncoding(#[from] png::EncodingError),

	#[error("image decoding failed: {0}")]
	Raster(#[from] image::ImageError),

	#[error("region {name:?} with corners {corners:?} does not fit inside a {}x{} image", .imageDimensions[0], .imageDimensions[1])]
	CropOutOfBounds { name: String, corners: [i64; 4], imageDimensions: [usize; 2] },

	#[error("invalid table: {0}")]
	Config(#[from] toml::de::Error),
}

impl Error {
	/// Turns an `UnexpectedEof` into [`Error::Truncated`], passing any other I/O error through.
	pub(crate) fn truncated(err: io::Error, what: &'static str, offset: u64) -> Self {
		if err.kind() == io::ErrorKind::UnexpectedEof {
			Error::Truncated { what, offset }
		} else {
			Error::Io(err)
		}
	}
}
