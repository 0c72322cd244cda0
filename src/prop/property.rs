use crate::prop::category::current_category;
use crate::prop::datum::Datum;
use crate::prop::handler::ChangeHandler;
use crate::prop::kind::DatumKind;
use crate::prop::owner::OwnerId;
use crate::prop::store::{DatumData, DatumElem};
use crate::prop::stream::{Reader, Writer};
use crate::prop::value::Value;
use crate::prop::{PropError, Result};

/// A datum with identity: name, owner, editor metadata, and a change hook.
///
/// Properties are transient. An owner's gather pass constructs them fresh
/// over its live fields; they are not cached across passes and the backing
/// storage outlives them.
#[derive(Debug, Clone)]
pub struct Property {
	datum: Datum,
	name: String,
	owner: OwnerId,
	handler: Option<ChangeHandler>,
	extra: i32,
	enum_strings: Vec<String>,
	category: String,
	is_vector: bool,
	min_count: u8,
	max_count: u8,
}

impl Property {
	/// Property over the given storage, capturing the active category.
	pub fn new(name: impl Into<String>, owner: OwnerId, data: DatumData) -> Self {
		Self {
			datum: Datum::new(data),
			name: name.into(),
			owner,
			handler: None,
			extra: 0,
			enum_strings: Vec::new(),
			category: current_category(),
			is_vector: false,
			min_count: 0,
			max_count: u8::MAX,
		}
	}

	/// Install a change handler. All external writes must then route through
	/// [`apply_change`](crate::prop::apply_change).
	pub fn with_handler(mut self, handler: ChangeHandler) -> Self {
		self.handler = Some(handler);
		self
	}

	/// Kind-specific auxiliary data, e.g. the expected asset subtype.
	pub fn with_extra(mut self, extra: i32) -> Self {
		self.extra = extra;
		self
	}

	/// Attach the enum string table. Meaningful for enum-kinded properties.
	pub fn with_enum_strings(mut self, strings: &[&str]) -> Self {
		self.enum_strings = strings.iter().map(|item| (*item).to_owned()).collect();
		self
	}

	/// Convert into a vector property with the given length bounds.
	pub fn make_vector(mut self, min_count: u8, max_count: u8) -> Self {
		self.is_vector = true;
		self.min_count = min_count;
		self.max_count = max_count;
		self
	}

	/// Identity key, unique within an owner's gather list.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Handle of the owning object.
	pub fn owner(&self) -> OwnerId {
		self.owner
	}

	/// Installed change handler, if any.
	pub fn handler(&self) -> Option<&ChangeHandler> {
		self.handler.as_ref()
	}

	/// Kind-specific auxiliary data.
	pub fn extra(&self) -> i32 {
		self.extra
	}

	/// Editor grouping label captured at construction.
	pub fn category(&self) -> &str {
		&self.category
	}

	/// Enum string table.
	pub fn enum_strings(&self) -> &[String] {
		&self.enum_strings
	}

	/// Enum label for `index`.
	pub fn enum_string(&self, index: usize) -> Result<&str> {
		self.enum_strings.get(index).map(String::as_str).ok_or(PropError::EnumIndexOutOfRange {
			index: index as i32,
			count: self.enum_strings.len(),
		})
	}

	/// Kind of the underlying datum.
	pub fn kind(&self) -> DatumKind {
		self.datum.kind()
	}

	/// Current element count.
	pub fn count(&self) -> usize {
		self.datum.count()
	}

	/// Whether the buffer is caller-owned.
	pub fn is_external(&self) -> bool {
		self.datum.is_external()
	}

	/// Borrow the underlying datum.
	pub fn datum(&self) -> &Datum {
		&self.datum
	}

	/// Declared minimum vector length.
	pub fn min_count(&self) -> u8 {
		self.min_count
	}

	/// Declared maximum vector length.
	pub fn max_count(&self) -> u8 {
		self.max_count
	}

	/// Whether this is a dynamic-length vector property.
	pub fn is_vector(&self) -> bool {
		self.is_vector
	}

	/// Whether this is a fixed multi-element property (immutable length).
	pub fn is_array(&self) -> bool {
		!self.is_vector && self.count() > 1
	}

	/// Typed read of the element at `index`.
	pub fn get<T: DatumElem>(&self, index: usize) -> Result<T> {
		self.datum.get(index)
	}

	/// Uniform read of the element at `index`.
	pub fn value(&self, index: usize) -> Result<Value> {
		self.datum.value(index)
	}

	/// Raw fallback write, for pure data fields with no derived state.
	///
	/// Refused when a change handler is installed: such writes must route
	/// through [`apply_change`](crate::prop::apply_change) so the owner can
	/// react.
	pub fn set_value(&mut self, index: usize, value: &Value) -> Result<()> {
		if self.handler.is_some() {
			return Err(PropError::HandlerInstalled { name: self.name.clone() });
		}
		self.check_enum_value(value)?;
		self.datum.set_value(index, value)
	}

	/// Append an element to a vector property. `None` appends the kind's
	/// default value.
	///
	/// Structural vector edits bypass the change handler by design: they are
	/// driven by the owner's own list UI action, not a single-field change.
	pub fn push_back_vector(&mut self, value: Option<Value>) -> Result<()> {
		if !self.is_vector {
			return Err(PropError::NotVector { name: self.name.clone() });
		}

		let count = self.count();
		if count >= usize::from(self.max_count) {
			return Err(PropError::VectorBounds {
				requested: count + 1,
				min: self.min_count,
				max: self.max_count,
			});
		}

		if let Some(value) = &value {
			if !value.matches_kind(self.kind()) {
				return Err(PropError::ValueMismatch {
					kind: self.kind(),
					value: value.kind_label(),
				});
			}
			self.check_enum_value(value)?;
		}

		self.datum.push_default();
		if let Some(value) = value {
			self.datum.set_value(count, &value)?;
		}
		Ok(())
	}

	/// Remove the element at `index` from a vector property.
	pub fn erase_vector(&mut self, index: usize) -> Result<()> {
		if !self.is_vector {
			return Err(PropError::NotVector { name: self.name.clone() });
		}

		let count = self.count();
		if index >= count {
			return Err(PropError::OutOfRange { index, count });
		}
		if count <= usize::from(self.min_count) {
			return Err(PropError::VectorBounds {
				requested: count.saturating_sub(1),
				min: self.min_count,
				max: self.max_count,
			});
		}

		self.datum.remove(index);
		Ok(())
	}

	/// Grow or shrink a vector property to `count`, filling with defaults.
	pub fn resize_vector(&mut self, count: usize) -> Result<()> {
		if !self.is_vector {
			return Err(PropError::NotVector { name: self.name.clone() });
		}
		self.check_vector_len(count)?;
		self.datum.resize_default(count);
		Ok(())
	}

	/// Serialize this property's value.
	///
	/// Vector properties prefix their element count; fixed properties write
	/// elements only, the count being implicit from schema position.
	pub fn write_stream(&self, writer: &mut Writer) -> Result<()> {
		if self.is_vector {
			writer.write_u32(self.count() as u32);
		}
		self.datum.write_stream(writer)
	}

	/// Deserialize this property's value in place.
	///
	/// A vector property resizes its backing sequence to the stream count,
	/// still subject to the declared bounds.
	pub fn read_stream(&mut self, reader: &mut Reader<'_>) -> Result<()> {
		if self.is_vector {
			let count = reader.read_u32_le()? as usize;
			self.check_vector_len(count)?;
			self.datum.resize_default(count);
		}
		self.datum.read_stream(reader)
	}

	/// Exact byte size [`Property::write_stream`] will produce.
	pub fn serialization_size(&self) -> usize {
		let prefix = if self.is_vector { 4 } else { 0 };
		prefix + self.datum.serialization_size()
	}

	/// Copy this property, including identity and handler.
	///
	/// With `force_internal_storage` the copy owns its buffer and stays valid
	/// after the source object's backing field is destroyed.
	pub fn deep_copy(&self, force_internal_storage: bool) -> Property {
		Property {
			datum: self.datum.deep_copy(force_internal_storage),
			name: self.name.clone(),
			owner: self.owner,
			handler: self.handler.clone(),
			extra: self.extra,
			enum_strings: self.enum_strings.clone(),
			category: self.category.clone(),
			is_vector: self.is_vector,
			min_count: self.min_count,
			max_count: self.max_count,
		}
	}

	/// Clear value and identity state. The kind is kept.
	pub fn reset(&mut self) {
		self.datum.reset();
		self.name.clear();
		self.handler = None;
		self.extra = 0;
		self.enum_strings.clear();
		self.category.clear();
		self.is_vector = false;
		self.min_count = 0;
		self.max_count = u8::MAX;
	}

	pub(crate) fn check_enum_value(&self, value: &Value) -> Result<()> {
		if self.kind() != DatumKind::Enum {
			return Ok(());
		}
		if let Value::Integer(index) = value {
			let count = self.enum_strings.len();
			if *index < 0 || *index as usize >= count {
				return Err(PropError::EnumIndexOutOfRange { index: *index, count });
			}
		}
		Ok(())
	}

	fn check_vector_len(&self, count: usize) -> Result<()> {
		if count < usize::from(self.min_count) || count > usize::from(self.max_count) {
			return Err(PropError::VectorBounds {
				requested: count,
				min: self.min_count,
				max: self.max_count,
			});
		}
		Ok(())
	}
}
