//! TOML tables that replace the built-in sprite and region lists.
//!
//! ```toml
//! [[sprite]]
//! name = "joe"
//! width = 18
//! height = 30
//! line = 262
//!
//! [[region]]
//! name = "torch_right"
//! x1 = { fromEnd = 120 }
//! y1 = 150
//! x2 = { fromEnd = 20 }
//! y2 = 400
//! ```

use {
	crate::{
		bas::{self, SpriteEntry},
		slice::{self, Region},
		Result,
	},
	log::info,
	serde::{de::DeserializeOwned, Deserialize},
	std::{fs, path::Path},
};

#[derive(Debug, Deserialize)]
pub struct SpriteTable {
	#[serde(rename = "sprite", default)]
	pub sprites: Vec<SpriteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RegionTable {
	#[serde(rename = "region", default)]
	pub regions: Vec<Region>,
}

pub fn loadToml<T: DeserializeOwned>(path: &Path) -> Result<T> {
	info!("Loading {}", path.display());
	Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

/// The table at `path`, or the game's own sprite list without one.
pub fn loadSpriteTable(path: Option<&Path>) -> Result<Vec<SpriteEntry>> {
	path.map_or_else(|| Ok(bas::zargonSprites()), |path| Ok(loadToml::<SpriteTable>(path)?.sprites))
}

/// The table at `path`, or the title screen regions without one.
pub fn loadRegionTable(path: Option<&Path>) -> Result<Vec<Region>> {
	path.map_or_else(|| Ok(slice::titleScreenRegions()), |path| Ok(loadToml::<RegionTable>(path)?.regions))
}
