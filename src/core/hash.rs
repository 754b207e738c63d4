//! Perceptual hash value type and Hamming-distance comparison

use image::{GrayImage, Luma};
use std::fmt;

use crate::core::HashError;

/// A perceptual image hash paired with the algorithm that produced it.
///
/// Every bit summarizes a section of the source image (hue, brightness,
/// frequency component, depending on the producing algorithm). Hashes are
/// only comparable when they come from the same algorithm with the same
/// settings, which is what `algorithm_id` encodes.
///
/// The payload stores exactly `bit_length` bits, big-endian, right-aligned
/// in its byte capacity. Construction trusts the caller: nothing checks that
/// `bit_length` matches what the producing algorithm actually emitted.
#[derive(Debug, Clone)]
pub struct Hash {
	bits: Vec<u8>,
	bit_length: u32,
	algorithm_id: u64,
}

impl Hash {
	/// Create a hash from big-endian payload bytes.
	///
	/// The payload is sized to `ceil(bit_length / 8)` bytes; extra leading
	/// bytes and any bits above `bit_length` are discarded.
	pub fn new(bits: Vec<u8>, bit_length: u32, algorithm_id: u64) -> Self {
		Self {
			bits: normalize(&bits, bit_length),
			bit_length,
			algorithm_id,
		}
	}

	/// Create a hash of at most 64 bits from an integer value.
	pub fn from_u64(value: u64, bit_length: u32, algorithm_id: u64) -> Self {
		Self::new(value.to_be_bytes().to_vec(), bit_length, algorithm_id)
	}

	/// Reconstruct a hash from its wire form (see [`Hash::to_byte_array`]).
	///
	/// The wire form carries a marker bit directly above the data bits; it
	/// is dropped here, so `from_byte_array(h.to_byte_array(), ..)` restores
	/// an equal hash.
	pub fn from_byte_array(bytes: &[u8], bit_length: u32, algorithm_id: u64) -> Self {
		Self::new(bytes.to_vec(), bit_length, algorithm_id)
	}

	/// Hamming distance to another hash produced by the same algorithm.
	///
	/// Counts the bits that differ between the two payloads. The distance
	/// falls within [0, bit length]; lower values indicate closer similarity.
	/// A distance of 0 means the hashes are bit-identical, not that the
	/// source images were.
	///
	/// Fails with [`HashError::IncompatibleAlgorithm`] when the hashes were
	/// created by different algorithms. When compatibility is already known,
	/// [`Hash::hamming_distance_fast`] skips the check.
	pub fn hamming_distance(&self, other: &Hash) -> Result<u32, HashError> {
		if self.algorithm_id != other.algorithm_id {
			return Err(HashError::IncompatibleAlgorithm {
				left: self.algorithm_id,
				right: other.algorithm_id,
			});
		}
		Ok(self.hamming_distance_fast(other))
	}

	/// Hamming distance without the algorithm compatibility check.
	///
	/// Intended for bulk comparison where the caller has already established
	/// that both hashes come from the same algorithm. Comparing hashes from
	/// different algorithms returns a number with no meaning.
	pub fn hamming_distance_fast(&self, other: &Hash) -> u32 {
		xor_popcount(&self.bits, &other.bits)
	}

	/// Hamming distance to a bare big-endian payload, without a `Hash` wrapper.
	///
	/// Useful when scanning externally stored payloads. Bits above this
	/// hash's bit length are ignored, so both the wire form and the raw
	/// payload of a stored hash compare correctly.
	pub fn hamming_distance_to_raw(&self, raw: &[u8]) -> u32 {
		xor_popcount(&self.bits, &normalize(raw, self.bit_length))
	}

	/// Hamming distance scaled to [0.0, 1.0] by the bit length.
	///
	/// Normalization makes distances comparable across algorithm
	/// configurations with different bit resolutions, at the cost of the
	/// absolute bit count. Checked like [`Hash::hamming_distance`].
	pub fn normalized_hamming_distance(&self, other: &Hash) -> Result<f64, HashError> {
		Ok(self.hamming_distance(other)? as f64 / self.bit_length as f64)
	}

	/// Normalized Hamming distance without the compatibility check.
	pub fn normalized_hamming_distance_fast(&self, other: &Hash) -> f64 {
		self.hamming_distance_fast(other) as f64 / self.bit_length as f64
	}

	/// The canonical wire encoding of this hash.
	///
	/// Emits `ceil((bit_length + 1) / 8)` big-endian bytes holding the
	/// payload with a single marker bit set directly above the data bits.
	/// This reproduces the historical storage layout byte for byte, so
	/// previously persisted hashes keep loading; [`Hash::from_byte_array`]
	/// is the inverse.
	pub fn to_byte_array(&self) -> Vec<u8> {
		let total_bits = self.bit_length as usize + 1;
		let len = (total_bits + 7) / 8;
		let mut out = vec![0u8; len];

		let offset = len - self.bits.len();
		out[offset..].copy_from_slice(&self.bits);

		let marker_byte = len - 1 - (self.bit_length / 8) as usize;
		out[marker_byte] |= 1 << (self.bit_length % 8);
		out
	}

	/// Render the hash as a black and white grid for visual inspection.
	///
	/// Produces a `side * block_size` square image where `side` is
	/// `floor(sqrt(bit_length))`; trailing bits that don't fill a full
	/// square are not drawn. Bits are consumed from the most significant
	/// data bit downward, bit 1 painting a black block and bit 0 a white
	/// one.
	///
	/// The output is rotated and mirrored relative to the section layout the
	/// producing algorithm scanned. Kept as is so existing debug images stay
	/// comparable.
	///
	/// `block_size` must be positive.
	pub fn to_image(&self, block_size: u32) -> GrayImage {
		let side = (self.bit_length as f64).sqrt() as u32;
		let mut img = GrayImage::new(side * block_size, side * block_size);

		let mut index = self.bit_length;
		for row in 0..side {
			for col in 0..side {
				index -= 1;
				let shade = if self.bit(index) { 0u8 } else { 255u8 };
				for dy in 0..block_size {
					for dx in 0..block_size {
						img.put_pixel(col * block_size + dx, row * block_size + dy, Luma([shade]));
					}
				}
			}
		}
		img
	}

	/// Identifier of the algorithm and settings that produced this hash.
	pub fn algorithm_id(&self) -> u64 {
		self.algorithm_id
	}

	/// The raw big-endian payload, without the wire marker bit.
	pub fn raw_value(&self) -> &[u8] {
		&self.bits
	}

	/// The hash resolution in bits.
	pub fn bit_resolution(&self) -> u32 {
		self.bit_length
	}

	fn bit(&self, index: u32) -> bool {
		let byte = self.bits.len() - 1 - (index / 8) as usize;
		(self.bits[byte] >> (index % 8)) & 1 == 1
	}

	/// Payload with leading zero bytes stripped, for value comparison.
	fn significant_bits(&self) -> &[u8] {
		let start = self.bits.iter().position(|&b| b != 0).unwrap_or(self.bits.len());
		&self.bits[start..]
	}
}

/// Equality covers the algorithm id and the payload value. The bit length is
/// implied by the algorithm's configuration and is deliberately excluded.
impl PartialEq for Hash {
	fn eq(&self, other: &Self) -> bool {
		self.algorithm_id == other.algorithm_id
			&& self.significant_bits() == other.significant_bits()
	}
}

impl Eq for Hash {}

impl std::hash::Hash for Hash {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		std::hash::Hash::hash(&self.algorithm_id, state);
		std::hash::Hash::hash(self.significant_bits(), state);
	}
}

/// Fixed-width binary rendering, zero-padded to the full bit length.
impl fmt::Display for Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut binary = String::with_capacity(self.bit_length as usize);
		for index in (0..self.bit_length).rev() {
			binary.push(if self.bit(index) { '1' } else { '0' });
		}
		write!(f, "Hash: {} [algo id: {}]", binary, self.algorithm_id)
	}
}

/// Resize a big-endian payload to exactly `bit_length` bits.
fn normalize(bytes: &[u8], bit_length: u32) -> Vec<u8> {
	let capacity = (bit_length as usize + 7) / 8;
	let mut out = vec![0u8; capacity];

	let take = bytes.len().min(capacity);
	out[capacity - take..].copy_from_slice(&bytes[bytes.len() - take..]);

	let excess = capacity * 8 - bit_length as usize;
	if excess > 0 {
		out[0] &= 0xFF >> excess;
	}
	out
}

/// Population count of the XOR of two big-endian payloads, right-aligned.
fn xor_popcount(a: &[u8], b: &[u8]) -> u32 {
	let longest = a.len().max(b.len());
	let mut total = 0;
	for back in 0..longest {
		let byte_a = if back < a.len() { a[a.len() - 1 - back] } else { 0 };
		let byte_b = if back < b.len() { b[b.len() - 1 - back] } else { 0 };
		total += (byte_a ^ byte_b).count_ones();
	}
	total
}
