use std::fmt;

/// Closed set of kinds a datum can hold.
///
/// The set is fixed: serialization is positional and untagged, so writer and
/// reader must agree on the kind of every field from schema position alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatumKind {
	/// Single flag, one byte on the wire.
	Bool,
	/// Unsigned 8-bit value.
	Byte,
	/// Signed 16-bit value.
	Short,
	/// Signed 32-bit value.
	Integer,
	/// Single-precision float.
	Float,
	/// Length-prefixed UTF-8 string.
	String,
	/// Two-component float vector.
	Vector2,
	/// Three-component float vector.
	Vector3,
	/// Four-component float vector.
	Vector4,
	/// Packed 32-bit RGBA color.
	Color,
	/// Asset reference, serialized as the asset name.
	Asset,
	/// Scene object reference, serialized as a node id.
	Node,
	/// Index into a property-supplied string table, stored as an i32.
	Enum,
}

impl DatumKind {
	/// Every kind, in registry order.
	pub const ALL: [DatumKind; 13] = [
		DatumKind::Bool,
		DatumKind::Byte,
		DatumKind::Short,
		DatumKind::Integer,
		DatumKind::Float,
		DatumKind::String,
		DatumKind::Vector2,
		DatumKind::Vector3,
		DatumKind::Vector4,
		DatumKind::Color,
		DatumKind::Asset,
		DatumKind::Node,
		DatumKind::Enum,
	];

	/// Fixed per-element wire width, or `None` for variable-width kinds.
	pub fn element_size(self) -> Option<usize> {
		match self {
			Self::Bool | Self::Byte => Some(1),
			Self::Short => Some(2),
			Self::Integer | Self::Float | Self::Color | Self::Node | Self::Enum => Some(4),
			Self::Vector2 => Some(8),
			Self::Vector3 => Some(12),
			Self::Vector4 => Some(16),
			Self::String | Self::Asset => None,
		}
	}

	/// Kind of the underlying storage element. Enum values live as integers.
	pub fn storage_kind(self) -> DatumKind {
		match self {
			Self::Enum => Self::Integer,
			other => other,
		}
	}

	/// Render the kind as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Byte => "byte",
			Self::Short => "short",
			Self::Integer => "integer",
			Self::Float => "float",
			Self::String => "string",
			Self::Vector2 => "vector2",
			Self::Vector3 => "vector3",
			Self::Vector4 => "vector4",
			Self::Color => "color",
			Self::Asset => "asset",
			Self::Node => "node",
			Self::Enum => "enum",
		}
	}
}

impl fmt::Display for DatumKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
