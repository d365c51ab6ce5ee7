//! The 16-color EGA palette as programmed by the game with `PALETTE n, v`.

use crate::RGB_SIZE;

pub const NUM_COLORS: usize = 16;

/// `PALETTE` values set by the game's palette routine, one per color index.
pub const ZARGON_EGA_VALUES: [u8; NUM_COLORS] = [0, 4, 48, 2, 6, 54, 10, 38, 46, 5, 25, 7, 57, 63, 9, 59];

pub const ZARGON_PALETTE: Palette = Palette::fromEgaValues(ZARGON_EGA_VALUES);

/*
	EGA color bits are rgbRGB:

	bit 5 : red   low intensity
	bit 4 : green low intensity
	bit 3 : blue  low intensity
	bit 2 : red   high intensity
	bit 1 : green high intensity
	bit 0 : blue  high intensity

	Each channel's 2-bit intensity (high << 1 | low) is scaled by 85.
*/
pub const fn egaToRgb(value: u8) -> [u8; RGB_SIZE] {
	[
		85 * (((value >> 1) & 2) | ((value >> 5) & 1)),
		85 * ((value & 2) | ((value >> 4) & 1)),
		85 * (((value << 1) & 2) | ((value >> 3) & 1)),
	]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
	pub egaValues: [u8; NUM_COLORS],
	pub colors: [[u8; RGB_SIZE]; NUM_COLORS],
}

impl Palette {
	pub const fn fromEgaValues(egaValues: [u8; NUM_COLORS]) -> Palette {
		let mut colors = [[0; RGB_SIZE]; NUM_COLORS];
		let mut i = 0;
		while i < NUM_COLORS {
			colors[i] = egaToRgb(egaValues[i]);
			i += 1;
		}
		Palette { egaValues, colors }
	}

	/// Any integer is accepted; it is reduced modulo 16 first.
	#[inline]
	pub fn rgb(&self, index: i64) -> [u8; RGB_SIZE] {
		self.colors[colorIndex(index)]
	}

	#[inline]
	pub fn rgba(&self, index: i64, alpha: u8) -> [u8; 4] {
		let [r, g, b] = self.rgb(index);
		[r, g, b, alpha]
	}

	pub fn describe(&self) -> impl Iterator<Item = String> + '_ {
		self.colors.iter().zip(self.egaValues).enumerate().map(|(i, (&[r, g, b], egaValue))| {
			format!("Color {i:2}: palette value {egaValue:2} -> RGB({r:3}, {g:3}, {b:3})")
		})
	}
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn colorIndex(value: i64) -> usize {
	value.rem_euclid(NUM_COLORS as i64) as usize
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_channel_is_a_two_bit_intensity() {
		for value in 0..=u8::MAX {
			for channel in egaToRgb(value) {
				assert!([0, 85, 170, 255].contains(&channel), "{value} -> {channel}");
			}
			assert_eq!(egaToRgb(value), egaToRgb(value & 0x3F));
		}
	}

	#[test]
	fn primary_bits_map_to_expected_colors() {
		assert_eq!(egaToRgb(0), [0, 0, 0]);
		assert_eq!(egaToRgb(63), [255, 255, 255]);
		assert_eq!(egaToRgb(0b000_100), [170, 0, 0]);
		assert_eq!(egaToRgb(0b100_000), [85, 0, 0]);
		assert_eq!(egaToRgb(0b000_010), [0, 170, 0]);
		assert_eq!(egaToRgb(0b000_001), [0, 0, 170]);
		// brown: red high + green low
		assert_eq!(egaToRgb(20), [170, 85, 0]);
	}

	#[test]
	fn zargon_palette_entries() {
		assert_eq!(ZARGON_PALETTE.colors[0], [0, 0, 0]);
		assert_eq!(ZARGON_PALETTE.colors[1], [170, 0, 0]);
		assert_eq!(ZARGON_PALETTE.colors[2], [85, 85, 0]);
		assert_eq!(ZARGON_PALETTE.colors[5], [255, 255, 0]);
		assert_eq!(ZARGON_PALETTE.colors[13], [255, 255, 255]);
	}

	#[test]
	fn color_index_wraps_negative_and_large_values() {
		assert_eq!(colorIndex(5), 5);
		assert_eq!(colorIndex(21), 5);
		assert_eq!(colorIndex(-3), 13);
		assert_eq!(ZARGON_PALETTE.rgba(16, 255), [0, 0, 0, 255]);
	}

	#[test]
	fn describe_lists_all_sixteen_colors() {
		let lines: Vec<_> = ZARGON_PALETTE.describe().collect();
		assert_eq!(lines.len(), NUM_COLORS);
		assert_eq!(lines[13], "Color 13: palette value 63 -> RGB(255, 255, 255)");
	}
}
