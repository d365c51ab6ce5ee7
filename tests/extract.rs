#![allow(non_snake_case)]

use {
	byteorder::{WriteBytesExt, LE},
	std::{
		fs::{self, File},
		io::{BufReader, Write},
		path::{Path, PathBuf},
		process::{self, Command},
	},
	zargon_asset_extract::{
		bas, config,
		ega::ZARGON_PALETTE,
		saveAll, sheet,
		sht::{self, Background},
		wad, Image,
	},
};

/// A fresh scratch directory, unique per test and per run.
fn scratchDir(test: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("zargon_asset_extract_{test}_{}", process::id()));
	let _ = fs::remove_dir_all(&dir);
	fs::create_dir_all(&dir).unwrap();
	dir
}

fn wadBytes(records: &[(&str, u16, u16, &[u8])]) -> Vec<u8> {
	let mut bytes = Vec::new();
	bytes.write_u32::<LE>(records.len() as _).unwrap();
	let mut offset = 4 + records.len() * (wad::NAME_LEN + 4);
	for &(name, _, _, data) in records {
		bytes.write_all(format!("{name:<15}").as_bytes()).unwrap();
		bytes.write_u32::<LE>(offset as _).unwrap();
		offset += 6 + data.len();
	}
	for &(_, width, height, data) in records {
		for field in [width, height, data.len() as _] {
			bytes.write_u16::<LE>(field).unwrap();
		}
		bytes.write_all(data).unwrap();
	}
	bytes
}

fn readBack(path: &Path) -> Image {
	Image::open(path).unwrap_or_else(|err| panic!("{}: {err}", path.display()))
}

#[test]
fn tiles_are_written_as_pngs_with_a_sheet() {
	let dir = scratchDir("tiles");
	let wadPath = dir.join("tiles.wad");
	let solid5: &[u8] = &[8, 0, 1, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0];
	fs::write(&wadPath, wadBytes(&[("Rock-1", 8, 1, solid5), ("Grass", 16, 2, &[16, 0, 2, 0])])).unwrap();

	let records = wad::readArchive(&mut BufReader::new(File::open(&wadPath).unwrap())).unwrap();
	let tiles: Vec<_> = records.iter().map(|record| (record.name.as_str(), record.render(&ZARGON_PALETTE))).collect();
	let output = dir.join("out");
	assert_eq!(saveAll(&output, tiles.iter().map(|(name, tile)| (*name, tile))).unwrap(), 2);
	sheet::writeSheet(&output.join("tile_sheet.png"), tiles.iter().map(|(_, tile)| tile), 8).unwrap();

	let rock = readBack(&output.join("rock_1.png"));
	assert_eq!(rock.dimensions(), [8, 1]);
	assert!((0..8).all(|x| rock.pixel([x, 0]) == ZARGON_PALETTE.rgba(5, 255)));
	let grass = readBack(&output.join("grass.png"));
	assert_eq!(grass.dimensions(), [16, 2]);
	assert_eq!(grass.pixel([15, 1]), ZARGON_PALETTE.rgba(0, 255));

	let tileSheet = readBack(&output.join("tile_sheet.png"));
	assert_eq!(tileSheet.dimensions(), [8 * (16 + 2) + 2, 2 + 2 + 2]);
	assert_eq!(tileSheet.pixel([2, 2]), ZARGON_PALETTE.rgba(5, 255));
	assert_eq!(tileSheet.pixel([0, 0]), sheet::BACKGROUND);
}

#[test]
fn scaling_multiplies_tile_dimensions() {
	let bytes = wadBytes(&[("Wide", 24, 3, &[24, 0, 3, 0])]);
	let records = wad::readArchive(&mut std::io::Cursor::new(bytes)).unwrap();
	let tile = records[0].render(&ZARGON_PALETTE);
	assert_eq!(tile.scaled(1).dimensions(), [24, 3]);
	assert_eq!(tile.scaled(2).dimensions(), [48, 6]);
}

#[test]
fn text_sheet_sprites_round_trip_through_png() {
	let dir = scratchDir("sprites");
	let shtPath = dir.join("zargon.sht");
	fs::write(&shtPath, "3\r\n2\r\n\"Bomb\"\r\n0 1 2\r\n3 4\r\noops\r\n1\r\n1\r\n\"dot\"\r\n15\r\n").unwrap();

	let sprites = sht::parse(&fs::read_to_string(&shtPath).unwrap());
	assert_eq!(sprites.len(), 2);
	let output = dir.join("out");
	let images: Vec<_> = sprites
		.iter()
		.map(|sprite| (sprite.name.as_str(), sprite.render(&ZARGON_PALETTE, Background::Transparent)))
		.collect();
	saveAll(&output, images.iter().map(|(name, image)| (*name, image))).unwrap();

	let bomb = readBack(&output.join("bomb.png"));
	assert_eq!(bomb.dimensions(), [3, 2]);
	assert_eq!(bomb.pixel([0, 0])[3], 0);
	assert_eq!(bomb.pixel([2, 1])[3], 0);
	assert_eq!(bomb.pixel([1, 0]), ZARGON_PALETTE.rgba(1, 255));
	assert_eq!(readBack(&output.join("dot.png")).pixel([0, 0]), ZARGON_PALETTE.rgba(15, 255));
}

#[test]
fn monsters_come_from_a_custom_sprite_table() {
	let dir = scratchDir("monsters");
	let basPath = dir.join("ZARGON.BAS");
	fs::write(&basPath, "CLS\nreadjunk:\nDATA 2,x\nDATA x,2\nRETURN\n").unwrap();
	let tablePath = dir.join("sprites.toml");
	fs::write(&tablePath, "[[sprite]]\nname = \"Tiny Bat\"\nwidth = 2\nheight = 2\nline = 3\n").unwrap();

	let entries = config::loadSpriteTable(Some(&tablePath)).unwrap();
	let source = fs::read_to_string(&basPath).unwrap();
	let monsters: Vec<_> =
		entries.iter().map(|entry| (entry.name.as_str(), bas::extract(&source, entry).render(&ZARGON_PALETTE))).collect();
	let output = dir.join("out");
	saveAll(&output, monsters.iter().map(|(name, monster)| (*name, monster))).unwrap();

	let bat = readBack(&output.join("tiny_bat.png"));
	assert_eq!(bat.dimensions(), [2, 2]);
	assert_eq!(bat.pixel([0, 0]), ZARGON_PALETTE.rgba(2, 255));
	assert_eq!(bat.pixel([1, 0])[3], 0);
	assert_eq!(bat.pixel([0, 1])[3], 0);
	assert_eq!(bat.pixel([1, 1]), ZARGON_PALETTE.rgba(2, 255));
}

const SLICER: &str = env!("CARGO_BIN_EXE_titlePNG_into_slicePNGs");

#[test]
fn slicer_fails_on_a_missing_input() {
	let dir = scratchDir("slicer_missing");
	let status = Command::new(SLICER).arg(dir.join("nope.png")).arg(dir.join("out")).status().unwrap();
	assert_eq!(status.code(), Some(1));
	assert!(!dir.join("out").exists());
}

#[test]
fn slicer_skips_regions_outside_the_image() {
	let dir = scratchDir("slicer");
	let mut mockup = Image::filled(64, 48, [10, 20, 30, 255]);
	mockup.putpixel([60, 40], [200, 0, 0, 255]);
	let inputPath = dir.join("title.png");
	mockup.writePNG(&inputPath).unwrap();
	let regionsPath = dir.join("regions.toml");
	fs::write(
		&regionsPath,
		r#"
[[region]]
name = "Corner"
x1 = { fromEnd = 8 }
y1 = { fromEnd = 8 }
x2 = { fromEnd = 0 }
y2 = { fromEnd = 0 }

[[region]]
name = "too_wide"
x1 = 0
y1 = 0
x2 = 100
y2 = 10

[[region]]
name = "middle"
x1 = { fromCenter = -4 }
y1 = 0
x2 = { fromCenter = 4 }
y2 = 4
"#,
	)
	.unwrap();

	let output = dir.join("out");
	let status =
		Command::new(SLICER).arg(&inputPath).arg(&output).arg("--regions").arg(&regionsPath).status().unwrap();
	assert!(status.success());

	let corner = readBack(&output.join("corner.png"));
	assert_eq!(corner.dimensions(), [8, 8]);
	assert_eq!(corner.pixel([4, 0]), [200, 0, 0, 255]);
	assert_eq!(readBack(&output.join("middle.png")).dimensions(), [8, 4]);
	assert!(!output.join("too_wide.png").exists());
}

#[test]
fn slicer_reads_non_png_mockups() {
	let dir = scratchDir("slicer_bmp");
	let mut mockup = image::RgbImage::from_pixel(40, 30, image::Rgb([10, 20, 30]));
	mockup.put_pixel(35, 25, image::Rgb([0, 200, 0]));
	let inputPath = dir.join("title.bmp");
	mockup.save(&inputPath).unwrap();
	let regionsPath = dir.join("regions.toml");
	fs::write(&regionsPath, "[[region]]\nname = \"tail\"\nx1 = 30\ny1 = 20\nx2 = 40\ny2 = 30\n").unwrap();

	let output = dir.join("out");
	let status =
		Command::new(SLICER).arg(&inputPath).arg(&output).arg("--regions").arg(&regionsPath).status().unwrap();
	assert!(status.success());

	let tail = readBack(&output.join("tail.png"));
	assert_eq!(tail.dimensions(), [10, 10]);
	assert_eq!(tail.pixel([5, 5]), [0, 200, 0, 255]);
	assert_eq!(tail.pixel([0, 0]), [10, 20, 30, 255]);
}
