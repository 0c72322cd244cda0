use std::cell::RefCell;
use std::rc::Rc;

use glam::{Vec2, Vec3, Vec4};

use crate::prop::kind::DatumKind;
use crate::prop::value::{AssetRef, Color32, NodeId, Value};

/// Shared backing cell for a reflected object field.
///
/// The long-lived owning object declares its editable fields as `Field<T>` and
/// binds them into transient properties without giving up ownership. Scalar
/// fields hold exactly one element; vector fields hold the live sequence.
#[derive(Debug, Clone)]
pub struct Field<T>(Rc<RefCell<Vec<T>>>);

impl<T: Clone> Field<T> {
	/// Scalar field holding one element.
	pub fn new(value: T) -> Self {
		Self(Rc::new(RefCell::new(vec![value])))
	}

	/// Sequence field, for vector properties.
	pub fn from_vec(values: Vec<T>) -> Self {
		Self(Rc::new(RefCell::new(values)))
	}

	/// Scalar accessor over element 0. The field must not be empty.
	pub fn get(&self) -> T {
		self.0.borrow()[0].clone()
	}

	/// Scalar write to element 0. The field must not be empty.
	pub fn set(&self, value: T) {
		self.0.borrow_mut()[0] = value;
	}

	/// Current element count.
	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	/// Whether the field holds no elements.
	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Element at `index`, if present.
	pub fn at(&self, index: usize) -> Option<T> {
		self.0.borrow().get(index).cloned()
	}

	/// Copy of the whole sequence.
	pub fn to_vec(&self) -> Vec<T> {
		self.0.borrow().clone()
	}
}

impl<T: DatumElem> Field<T> {
	/// Bind this field as caller-owned datum storage.
	pub fn bind(&self) -> DatumData {
		T::wrap(Store::Shared(self.clone()))
	}
}

impl Field<i32> {
	/// Bind this field as enum-kinded storage over its i32 indices.
	pub fn bind_enum(&self) -> DatumData {
		DatumData::Enum(Store::Shared(self.clone()))
	}
}

/// Element buffer of a datum: owned by the datum, or a view over a caller field.
#[derive(Debug, Clone)]
pub enum Store<T> {
	/// Buffer owned by the datum, freed with it.
	Owned(Vec<T>),
	/// Caller-owned buffer; reads and writes go through the live field.
	Shared(Field<T>),
}

impl<T: Clone + Default> Store<T> {
	/// Current element count.
	pub fn len(&self) -> usize {
		match self {
			Self::Owned(items) => items.len(),
			Self::Shared(field) => field.len(),
		}
	}

	/// Whether the store holds no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether the buffer is caller-owned.
	pub fn is_shared(&self) -> bool {
		matches!(self, Self::Shared(_))
	}

	/// Element at `index`, if present.
	pub fn get(&self, index: usize) -> Option<T> {
		match self {
			Self::Owned(items) => items.get(index).cloned(),
			Self::Shared(field) => field.at(index),
		}
	}

	/// Write `value` at `index`. Returns false when `index` is out of range.
	pub fn set(&mut self, index: usize, value: T) -> bool {
		match self {
			Self::Owned(items) => match items.get_mut(index) {
				Some(slot) => {
					*slot = value;
					true
				}
				None => false,
			},
			Self::Shared(field) => {
				let mut items = field.0.borrow_mut();
				match items.get_mut(index) {
					Some(slot) => {
						*slot = value;
						true
					}
					None => false,
				}
			}
		}
	}

	/// Append a default element.
	pub fn push_default(&mut self) {
		match self {
			Self::Owned(items) => items.push(T::default()),
			Self::Shared(field) => field.0.borrow_mut().push(T::default()),
		}
	}

	/// Remove the element at `index`, shifting the tail down.
	pub fn remove(&mut self, index: usize) {
		match self {
			Self::Owned(items) => {
				items.remove(index);
			}
			Self::Shared(field) => {
				field.0.borrow_mut().remove(index);
			}
		}
	}

	/// Grow or shrink to `count`, filling new elements with defaults.
	pub fn resize_default(&mut self, count: usize) {
		match self {
			Self::Owned(items) => items.resize(count, T::default()),
			Self::Shared(field) => field.0.borrow_mut().resize(count, T::default()),
		}
	}

	/// Copy of the whole sequence.
	pub fn snapshot(&self) -> Vec<T> {
		match self {
			Self::Owned(items) => items.clone(),
			Self::Shared(field) => field.to_vec(),
		}
	}

	/// Independently owned copy of the current contents.
	pub fn to_owned_store(&self) -> Store<T> {
		Store::Owned(self.snapshot())
	}
}

/// Tagged element storage: the type-erasure seam of the datum model.
///
/// Accessors pattern-match on the tag and fail on mismatch; there are no
/// caller-trusted casts anywhere in the value path.
#[derive(Debug, Clone)]
pub enum DatumData {
	/// Bool elements.
	Bool(Store<bool>),
	/// Byte elements.
	Byte(Store<u8>),
	/// Short elements.
	Short(Store<i16>),
	/// Integer elements.
	Integer(Store<i32>),
	/// Float elements.
	Float(Store<f32>),
	/// String elements.
	String(Store<String>),
	/// Two-component vector elements.
	Vector2(Store<Vec2>),
	/// Three-component vector elements.
	Vector3(Store<Vec3>),
	/// Four-component vector elements.
	Vector4(Store<Vec4>),
	/// Packed color elements.
	Color(Store<Color32>),
	/// Asset reference elements.
	Asset(Store<AssetRef>),
	/// Node reference elements.
	Node(Store<NodeId>),
	/// Enum indices, stored as integers.
	Enum(Store<i32>),
}

macro_rules! each_store {
	($data:expr, $store:ident => $body:expr) => {
		match $data {
			DatumData::Bool($store) => $body,
			DatumData::Byte($store) => $body,
			DatumData::Short($store) => $body,
			DatumData::Integer($store) => $body,
			DatumData::Float($store) => $body,
			DatumData::String($store) => $body,
			DatumData::Vector2($store) => $body,
			DatumData::Vector3($store) => $body,
			DatumData::Vector4($store) => $body,
			DatumData::Color($store) => $body,
			DatumData::Asset($store) => $body,
			DatumData::Node($store) => $body,
			DatumData::Enum($store) => $body,
		}
	};
}

macro_rules! each_store_map {
	($data:expr, $store:ident => $body:expr) => {
		match $data {
			DatumData::Bool($store) => DatumData::Bool($body),
			DatumData::Byte($store) => DatumData::Byte($body),
			DatumData::Short($store) => DatumData::Short($body),
			DatumData::Integer($store) => DatumData::Integer($body),
			DatumData::Float($store) => DatumData::Float($body),
			DatumData::String($store) => DatumData::String($body),
			DatumData::Vector2($store) => DatumData::Vector2($body),
			DatumData::Vector3($store) => DatumData::Vector3($body),
			DatumData::Vector4($store) => DatumData::Vector4($body),
			DatumData::Color($store) => DatumData::Color($body),
			DatumData::Asset($store) => DatumData::Asset($body),
			DatumData::Node($store) => DatumData::Node($body),
			DatumData::Enum($store) => DatumData::Enum($body),
		}
	};
}

impl DatumData {
	/// Kind tag of this storage.
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
			Self::Enum(_) => DatumKind::Enum,
		}
	}

	/// Current element count.
	pub fn len(&self) -> usize {
		each_store!(self, store => store.len())
	}

	/// Whether the storage holds no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Whether the buffer is caller-owned.
	pub fn is_shared(&self) -> bool {
		each_store!(self, store => store.is_shared())
	}

	/// Independently owned copy of the current contents, same kind.
	pub fn to_owned_data(&self) -> DatumData {
		each_store_map!(self, store => store.to_owned_store())
	}

	pub(crate) fn push_default(&mut self) {
		each_store!(self, store => store.push_default());
	}

	pub(crate) fn remove(&mut self, index: usize) {
		each_store!(self, store => store.remove(index));
	}

	pub(crate) fn resize_default(&mut self, count: usize) {
		each_store!(self, store => store.resize_default(count));
	}

	/// Drop the buffer, keeping the kind. Caller-owned buffers are released,
	/// never freed.
	pub(crate) fn reset(&mut self) {
		*self = each_store_map!(&*self, store => {
			let _ = store;
			Store::Owned(Vec::new())
		});
	}
}

/// Storage element type for one datum kind.
///
/// Wires a Rust type to its kind tag, its store projection out of
/// [`DatumData`], and its [`Value`] conversions. Powers the generic typed
/// accessors and field binding.
pub trait DatumElem: Clone + Default + 'static {
	/// Kind tag this element type occupies.
	const KIND: DatumKind;

	/// Wrap a store of this element type into tagged storage.
	fn wrap(store: Store<Self>) -> DatumData;

	/// Project the matching store out of tagged storage.
	fn store(data: &DatumData) -> Option<&Store<Self>>;

	/// Mutable projection of the matching store.
	fn store_mut(data: &mut DatumData) -> Option<&mut Store<Self>>;

	/// Lift this element into the uniform value view.
	fn into_value(self) -> Value;

	/// Extract this element type from the uniform value view.
	fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! datum_elem {
	($ty:ty, $tag:ident) => {
		impl DatumElem for $ty {
			const KIND: DatumKind = DatumKind::$tag;

			fn wrap(store: Store<Self>) -> DatumData {
				DatumData::$tag(store)
			}

			fn store(data: &DatumData) -> Option<&Store<Self>> {
				match data {
					DatumData::$tag(store) => Some(store),
					_ => None,
				}
			}

			fn store_mut(data: &mut DatumData) -> Option<&mut Store<Self>> {
				match data {
					DatumData::$tag(store) => Some(store),
					_ => None,
				}
			}

			fn into_value(self) -> Value {
				Value::$tag(self)
			}

			fn from_value(value: &Value) -> Option<Self> {
				match value {
					Value::$tag(inner) => Some(inner.clone()),
					_ => None,
				}
			}
		}
	};
}

datum_elem!(bool, Bool);
datum_elem!(u8, Byte);
datum_elem!(i16, Short);
datum_elem!(f32, Float);
datum_elem!(String, String);
datum_elem!(Vec2, Vector2);
datum_elem!(Vec3, Vector3);
datum_elem!(Vec4, Vector4);
datum_elem!(Color32, Color);
datum_elem!(AssetRef, Asset);
datum_elem!(NodeId, Node);

// Integers also project out of enum-kinded storage, since enum indices are
// stored as i32.
impl DatumElem for i32 {
	const KIND: DatumKind = DatumKind::Integer;

	fn wrap(store: Store<Self>) -> DatumData {
		DatumData::Integer(store)
	}

	fn store(data: &DatumData) -> Option<&Store<Self>> {
		match data {
			DatumData::Integer(store) | DatumData::Enum(store) => Some(store),
			_ => None,
		}
	}

	fn store_mut(data: &mut DatumData) -> Option<&mut Store<Self>> {
		match data {
			DatumData::Integer(store) | DatumData::Enum(store) => Some(store),
			_ => None,
		}
	}

	fn into_value(self) -> Value {
		Value::Integer(self)
	}

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Integer(inner) => Some(*inner),
			_ => None,
		}
	}
}
