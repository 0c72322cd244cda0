use crate::prop::value::Color32;
use crate::prop::{PropError, Result};

/// Sanity limit for length-prefixed strings.
pub const MAX_STRING_BYTES: usize = 1024 * 1024;

/// Byte-order corrections applied at the stream boundary for a target platform.
///
/// Packed colors are written in host layout; one big-endian embedded target
/// stores them reversed and needs a fixup after read. Everywhere else this is
/// a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformRules {
	/// Reverse packed color bytes after read.
	pub reverse_packed_colors: bool,
}

impl PlatformRules {
	/// Rules for the host platform. No corrections.
	pub fn host() -> Self {
		Self::default()
	}

	/// Rules for the big-endian embedded target.
	pub fn big_endian_target() -> Self {
		Self { reverse_packed_colors: true }
	}
}

/// Bounded little-endian cursor over an immutable byte slice.
pub struct Reader<'a> {
	bytes: &'a [u8],
	pos: usize,
	platform: PlatformRules,
}

impl<'a> Reader<'a> {
	/// Create a cursor at position 0 with host platform rules.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self::with_platform(bytes, PlatformRules::host())
	}

	/// Create a cursor carrying explicit platform rules.
	pub fn with_platform(bytes: &'a [u8], platform: PlatformRules) -> Self {
		Self { bytes, pos: 0, platform }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance the cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PropError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(u16::from_le_bytes(buf))
	}

	/// Read a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(i16::from_le_bytes(buf))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(i32::from_le_bytes(buf))
	}

	/// Read a little-endian `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(f32::from_le_bytes(buf))
	}

	/// Read a length-prefixed UTF-8 string.
	pub fn read_string(&mut self) -> Result<String> {
		let at = self.pos;
		let len = self.read_u32_le()? as usize;
		if len > MAX_STRING_BYTES {
			return Err(PropError::StringTooLarge {
				len,
				max: MAX_STRING_BYTES,
			});
		}

		let raw = self.read_exact(len)?;
		String::from_utf8(raw.to_vec()).map_err(|_| PropError::InvalidString { at })
	}

	/// Read a packed color, applying the platform byte-order correction.
	pub fn read_color(&mut self) -> Result<Color32> {
		let raw = Color32(self.read_u32_le()?);
		if self.platform.reverse_packed_colors {
			Ok(raw.reversed())
		} else {
			Ok(raw)
		}
	}
}

/// Growable little-endian encoder mirroring [`Reader`].
#[derive(Debug, Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	/// Empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Whether nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Borrow the encoded bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the writer, returning the encoded bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Append raw bytes.
	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Append one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.buf.push(value);
	}

	/// Append a little-endian `u16`.
	pub fn write_u16(&mut self, value: u16) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i16`.
	pub fn write_i16(&mut self, value: i16) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `u32`.
	pub fn write_u32(&mut self, value: u32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `i32`.
	pub fn write_i32(&mut self, value: i32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a little-endian `f32`.
	pub fn write_f32(&mut self, value: f32) {
		self.buf.extend_from_slice(&value.to_le_bytes());
	}

	/// Append a length-prefixed UTF-8 string.
	pub fn write_string(&mut self, value: &str) -> Result<()> {
		if value.len() > MAX_STRING_BYTES {
			return Err(PropError::StringTooLarge {
				len: value.len(),
				max: MAX_STRING_BYTES,
			});
		}

		self.write_u32(value.len() as u32);
		self.buf.extend_from_slice(value.as_bytes());
		Ok(())
	}

	/// Append a packed color in canonical host layout.
	pub fn write_color(&mut self, value: Color32) {
		self.write_u32(value.0);
	}
}
