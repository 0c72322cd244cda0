use thiserror::Error;

use crate::prop::kind::DatumKind;
use crate::prop::owner::OwnerId;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PropError>;

/// Errors produced by datum access, the change protocol, and object streams.
#[derive(Debug, Error)]
pub enum PropError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Element index outside the datum's current count.
	#[error("index {index} out of range for count {count}")]
	OutOfRange {
		/// Requested element index.
		index: usize,
		/// Current element count.
		count: usize,
	},
	/// Typed accessor invoked against a datum of a different kind.
	#[error("kind mismatch: datum holds {expected}, accessor wants {got}")]
	KindMismatch {
		/// Kind the datum was constructed with.
		expected: DatumKind,
		/// Kind the accessor requested.
		got: DatumKind,
	},
	/// Uniform value write carrying a kind the datum does not accept.
	#[error("value kind {value} not accepted by {kind} datum")]
	ValueMismatch {
		/// Kind the datum was constructed with.
		kind: DatumKind,
		/// Label of the offending value kind.
		value: &'static str,
	},
	/// Enum write whose index falls outside the property's string table.
	#[error("enum index {index} out of range for {count} entries")]
	EnumIndexOutOfRange {
		/// Offending enum index.
		index: i32,
		/// Number of entries in the enum table.
		count: usize,
	},
	/// Raw write attempted on a property that has a change handler installed.
	#[error("property {name:?} has a change handler; route writes through apply_change")]
	HandlerInstalled {
		/// Name of the guarded property.
		name: String,
	},
	/// Owner handle no longer resolves through the registry.
	#[error("owner {owner:?} is not registered")]
	OwnerNotFound {
		/// Dangling owner handle.
		owner: OwnerId,
	},
	/// Vector operation invoked on a non-vector property.
	#[error("property {name:?} is not a vector")]
	NotVector {
		/// Name of the property.
		name: String,
	},
	/// Vector length would leave the declared bounds. Never clamped.
	#[error("vector length {requested} outside bounds {min}..={max}")]
	VectorBounds {
		/// Length the operation would have produced.
		requested: usize,
		/// Declared minimum element count.
		min: u8,
		/// Declared maximum element count.
		max: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// String length prefix exceeded the stream sanity limit.
	#[error("string length {len} exceeds limit {max}")]
	StringTooLarge {
		/// Declared string length.
		len: usize,
		/// Maximum permitted length.
		max: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 in string at offset {at}")]
	InvalidString {
		/// Stream offset of the length prefix.
		at: usize,
	},
	/// Stream field count does not match the reconstructed gather list.
	#[error("field count mismatch: gathered {expected}, stream has {got}")]
	FieldCountMismatch {
		/// Field count of the gathered property list.
		expected: usize,
		/// Field count marker read from the stream.
		got: usize,
	},
	/// Unknown leading file magic.
	#[error("unsupported compression or not an object file (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream did not start with the object magic.
	#[error("decompressed data does not start with POBJ magic")]
	NotObjectAfterDecompress,
	/// Unsupported object container version.
	#[error("unsupported object format version {version} (expected 1)")]
	UnsupportedFormatVersion {
		/// Parsed format version.
		version: u16,
	},
	/// Invalid or malformed object header.
	#[error("invalid object header")]
	InvalidHeader,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Serialized type name has no registered constructor.
	#[error("unknown object type: {type_name}")]
	UnknownObjectType {
		/// Type name read from the object header.
		type_name: String,
	},
}
