use std::fs;
use std::path::Path;

use crate::prop::compression::{Compression, compress_bytes, decode_bytes};
use crate::prop::list::{read_properties, write_properties};
use crate::prop::property::Property;
use crate::prop::stream::{PlatformRules, Reader, Writer};
use crate::prop::{PropError, Result};

/// Leading magic of serialized object files.
pub const OBJECT_MAGIC: [u8; 4] = *b"POBJ";
/// Current object container format version.
pub const FORMAT_VERSION: u16 = 1;

/// Parsed object file header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectHeader {
	/// Object container format version.
	pub format_version: u16,
	/// Serialized object type name.
	pub type_name: String,
}

/// One serialized object: header plus positional property payload.
#[derive(Debug)]
pub struct ObjectFile {
	/// Parsed header.
	pub header: ObjectHeader,
	/// Compression mode the file was stored with.
	pub compression: Compression,
	bytes: Vec<u8>,
	payload_offset: usize,
}

impl ObjectFile {
	/// Read and parse an object file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse an object stream, decompressing if needed.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;

		let mut reader = Reader::new(&bytes);
		let mut magic = [0_u8; 4];
		magic.copy_from_slice(reader.read_exact(4)?);
		if magic != OBJECT_MAGIC {
			return Err(PropError::InvalidHeader);
		}

		let format_version = reader.read_u16_le()?;
		if format_version != FORMAT_VERSION {
			return Err(PropError::UnsupportedFormatVersion { version: format_version });
		}

		let type_name = reader.read_string()?;
		let payload_offset = reader.pos();

		Ok(Self {
			header: ObjectHeader { format_version, type_name },
			compression,
			bytes,
			payload_offset,
		})
	}

	/// Property payload bytes, after the header.
	pub fn payload(&self) -> &[u8] {
		&self.bytes[self.payload_offset..]
	}

	/// Field count marker at the head of the payload.
	pub fn field_count(&self) -> Result<u32> {
		Reader::new(self.payload()).read_u32_le()
	}

	/// Deserialize the payload into a freshly gathered matching list.
	pub fn read_into(&self, props: &mut [Property], platform: PlatformRules) -> Result<()> {
		let mut reader = Reader::with_platform(self.payload(), platform);
		read_properties(&mut reader, props)
	}

	/// Encode header and property list into a raw object stream.
	pub fn encode(type_name: &str, props: &[Property]) -> Result<Vec<u8>> {
		let mut writer = Writer::new();
		writer.write_bytes(&OBJECT_MAGIC);
		writer.write_u16(FORMAT_VERSION);
		writer.write_string(type_name)?;
		write_properties(&mut writer, props)?;
		Ok(writer.into_bytes())
	}

	/// Write an uncompressed object file.
	pub fn save(path: impl AsRef<Path>, type_name: &str, props: &[Property]) -> Result<()> {
		fs::write(path, Self::encode(type_name, props)?)?;
		Ok(())
	}

	/// Write a zstd-compressed object file.
	pub fn save_compressed(path: impl AsRef<Path>, type_name: &str, props: &[Property]) -> Result<()> {
		let raw = Self::encode(type_name, props)?;
		fs::write(path, compress_bytes(&raw)?)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests;
