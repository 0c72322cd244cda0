use glam::{Vec2, Vec3, Vec4};

use crate::prop::kind::DatumKind;

/// Packed 32-bit RGBA color, `0xRRGGBBAA` in host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color32(pub u32);

impl Color32 {
	/// Pack four channel bytes.
	pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self(u32::from(r) << 24 | u32::from(g) << 16 | u32::from(b) << 8 | u32::from(a))
	}

	/// Red channel.
	pub fn r(self) -> u8 {
		(self.0 >> 24) as u8
	}

	/// Green channel.
	pub fn g(self) -> u8 {
		(self.0 >> 16) as u8
	}

	/// Blue channel.
	pub fn b(self) -> u8 {
		(self.0 >> 8) as u8
	}

	/// Alpha channel.
	pub fn a(self) -> u8 {
		self.0 as u8
	}

	/// Byte-order flipped copy, for targets with reversed packed layout.
	pub fn reversed(self) -> Self {
		Self(self.0.swap_bytes())
	}
}

/// Asset reference resolved by name. An empty name is the null reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct AssetRef {
	/// Referenced asset name.
	pub name: String,
}

impl AssetRef {
	/// Reference to a named asset.
	pub fn named(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}

	/// The null reference.
	pub fn null() -> Self {
		Self::default()
	}

	/// Whether this reference points at nothing.
	pub fn is_null(&self) -> bool {
		self.name.is_empty()
	}
}

/// Scene object reference by id. Zero is the null reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
	/// The null reference.
	pub const NULL: NodeId = NodeId(0);

	/// Whether this reference points at nothing.
	pub fn is_null(self) -> bool {
		self.0 == 0
	}
}

/// Uniform typed view of a single datum element.
///
/// Enum-kinded data travels as [`Value::Integer`] carrying the index into the
/// property's string table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Bool element.
	Bool(bool),
	/// Byte element.
	Byte(u8),
	/// Short element.
	Short(i16),
	/// Integer element, also the transport for enum indices.
	Integer(i32),
	/// Float element.
	Float(f32),
	/// String element.
	String(String),
	/// Two-component vector element.
	Vector2(Vec2),
	/// Three-component vector element.
	Vector3(Vec3),
	/// Four-component vector element.
	Vector4(Vec4),
	/// Packed color element.
	Color(Color32),
	/// Asset reference element.
	Asset(AssetRef),
	/// Scene object reference element.
	Node(NodeId),
}

impl Value {
	/// Kind this value would occupy in a datum.
	pub fn kind(&self) -> DatumKind {
		match self {
			Self::Bool(_) => DatumKind::Bool,
			Self::Byte(_) => DatumKind::Byte,
			Self::Short(_) => DatumKind::Short,
			Self::Integer(_) => DatumKind::Integer,
			Self::Float(_) => DatumKind::Float,
			Self::String(_) => DatumKind::String,
			Self::Vector2(_) => DatumKind::Vector2,
			Self::Vector3(_) => DatumKind::Vector3,
			Self::Vector4(_) => DatumKind::Vector4,
			Self::Color(_) => DatumKind::Color,
			Self::Asset(_) => DatumKind::Asset,
			Self::Node(_) => DatumKind::Node,
		}
	}

	/// Stable label for error reporting.
	pub fn kind_label(&self) -> &'static str {
		self.kind().as_str()
	}

	/// Whether a datum of `kind` accepts this value.
	pub fn matches_kind(&self, kind: DatumKind) -> bool {
		self.kind() == kind || (kind == DatumKind::Enum && self.kind() == DatumKind::Integer)
	}
}
