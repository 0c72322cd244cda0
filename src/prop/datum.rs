use crate::prop::kind::DatumKind;
use crate::prop::store::{DatumData, DatumElem, Store};
use crate::prop::stream::{Reader, Writer};
use crate::prop::value::{AssetRef, NodeId, Value};
use crate::prop::{PropError, Result};

/// Type-erased scalar-or-array value holder with a fixed kind.
///
/// The kind is immutable after construction; the element count changes only
/// through explicit resize operations. Storage is either owned by the datum
/// or a live view over a caller field (see [`Store`]).
#[derive(Debug, Clone)]
pub struct Datum {
	data: DatumData,
}

impl Datum {
	/// Wrap tagged storage.
	pub fn new(data: DatumData) -> Self {
		Self { data }
	}

	/// Datum owning the given elements.
	pub fn of<T: DatumElem>(values: Vec<T>) -> Self {
		Self {
			data: T::wrap(Store::Owned(values)),
		}
	}

	/// Kind this datum was constructed with.
	pub fn kind(&self) -> DatumKind {
		self.data.kind()
	}

	/// Current element count.
	pub fn count(&self) -> usize {
		self.data.len()
	}

	/// Whether the buffer is caller-owned.
	pub fn is_external(&self) -> bool {
		self.data.is_shared()
	}

	/// Borrow the tagged storage.
	pub fn data(&self) -> &DatumData {
		&self.data
	}

	/// Typed read of the element at `index`.
	pub fn get<T: DatumElem>(&self, index: usize) -> Result<T> {
		let store = T::store(&self.data).ok_or(PropError::KindMismatch {
			expected: self.kind(),
			got: T::KIND,
		})?;
		store.get(index).ok_or(PropError::OutOfRange {
			index,
			count: self.count(),
		})
	}

	/// Typed write of the element at `index`. No implicit growth.
	pub fn set<T: DatumElem>(&mut self, index: usize, value: T) -> Result<()> {
		let count = self.count();
		let kind = self.kind();
		let store = T::store_mut(&mut self.data).ok_or(PropError::KindMismatch {
			expected: kind,
			got: T::KIND,
		})?;
		if !store.set(index, value) {
			return Err(PropError::OutOfRange { index, count });
		}
		Ok(())
	}

	/// Uniform read of the element at `index`.
	pub fn value(&self, index: usize) -> Result<Value> {
		let count = self.count();
		let oob = PropError::OutOfRange { index, count };
		let value = match &self.data {
			DatumData::Bool(s) => Value::Bool(s.get(index).ok_or(oob)?),
			DatumData::Byte(s) => Value::Byte(s.get(index).ok_or(oob)?),
			DatumData::Short(s) => Value::Short(s.get(index).ok_or(oob)?),
			DatumData::Integer(s) | DatumData::Enum(s) => Value::Integer(s.get(index).ok_or(oob)?),
			DatumData::Float(s) => Value::Float(s.get(index).ok_or(oob)?),
			DatumData::String(s) => Value::String(s.get(index).ok_or(oob)?),
			DatumData::Vector2(s) => Value::Vector2(s.get(index).ok_or(oob)?),
			DatumData::Vector3(s) => Value::Vector3(s.get(index).ok_or(oob)?),
			DatumData::Vector4(s) => Value::Vector4(s.get(index).ok_or(oob)?),
			DatumData::Color(s) => Value::Color(s.get(index).ok_or(oob)?),
			DatumData::Asset(s) => Value::Asset(s.get(index).ok_or(oob)?),
			DatumData::Node(s) => Value::Node(s.get(index).ok_or(oob)?),
		};
		Ok(value)
	}

	/// Uniform write of the element at `index`, kind-checked against the tag.
	pub fn set_value(&mut self, index: usize, value: &Value) -> Result<()> {
		let count = self.count();
		if index >= count {
			return Err(PropError::OutOfRange { index, count });
		}

		let written = match (&mut self.data, value) {
			(DatumData::Bool(s), Value::Bool(v)) => s.set(index, *v),
			(DatumData::Byte(s), Value::Byte(v)) => s.set(index, *v),
			(DatumData::Short(s), Value::Short(v)) => s.set(index, *v),
			(DatumData::Integer(s), Value::Integer(v)) => s.set(index, *v),
			(DatumData::Enum(s), Value::Integer(v)) => s.set(index, *v),
			(DatumData::Float(s), Value::Float(v)) => s.set(index, *v),
			(DatumData::String(s), Value::String(v)) => s.set(index, v.clone()),
			(DatumData::Vector2(s), Value::Vector2(v)) => s.set(index, *v),
			(DatumData::Vector3(s), Value::Vector3(v)) => s.set(index, *v),
			(DatumData::Vector4(s), Value::Vector4(v)) => s.set(index, *v),
			(DatumData::Color(s), Value::Color(v)) => s.set(index, *v),
			(DatumData::Asset(s), Value::Asset(v)) => s.set(index, v.clone()),
			(DatumData::Node(s), Value::Node(v)) => s.set(index, *v),
			(data, value) => {
				return Err(PropError::ValueMismatch {
					kind: data.kind(),
					value: value.kind_label(),
				});
			}
		};

		if !written {
			return Err(PropError::OutOfRange { index, count });
		}
		Ok(())
	}

	/// Serialize every element in kind-specific wire form.
	///
	/// Neither the kind nor the count is written; both are implicit from the
	/// field's schema position.
	pub fn write_stream(&self, writer: &mut Writer) -> Result<()> {
		match &self.data {
			DatumData::Bool(s) => {
				for item in s.snapshot() {
					writer.write_u8(u8::from(item));
				}
			}
			DatumData::Byte(s) => {
				for item in s.snapshot() {
					writer.write_u8(item);
				}
			}
			DatumData::Short(s) => {
				for item in s.snapshot() {
					writer.write_i16(item);
				}
			}
			DatumData::Integer(s) | DatumData::Enum(s) => {
				for item in s.snapshot() {
					writer.write_i32(item);
				}
			}
			DatumData::Float(s) => {
				for item in s.snapshot() {
					writer.write_f32(item);
				}
			}
			DatumData::String(s) => {
				for item in s.snapshot() {
					writer.write_string(&item)?;
				}
			}
			DatumData::Vector2(s) => {
				for item in s.snapshot() {
					writer.write_f32(item.x);
					writer.write_f32(item.y);
				}
			}
			DatumData::Vector3(s) => {
				for item in s.snapshot() {
					writer.write_f32(item.x);
					writer.write_f32(item.y);
					writer.write_f32(item.z);
				}
			}
			DatumData::Vector4(s) => {
				for item in s.snapshot() {
					writer.write_f32(item.x);
					writer.write_f32(item.y);
					writer.write_f32(item.z);
					writer.write_f32(item.w);
				}
			}
			DatumData::Color(s) => {
				for item in s.snapshot() {
					writer.write_color(item);
				}
			}
			DatumData::Asset(s) => {
				for item in s.snapshot() {
					writer.write_string(&item.name)?;
				}
			}
			DatumData::Node(s) => {
				for item in s.snapshot() {
					writer.write_u32(item.0);
				}
			}
		}
		Ok(())
	}

	/// Deserialize `count` elements in place, through the store.
	///
	/// A shared store populates the caller's live field directly; this is how
	/// a long-lived object's own field is filled without a temporary buffer.
	pub fn read_stream(&mut self, reader: &mut Reader<'_>) -> Result<()> {
		let count = self.count();
		match &mut self.data {
			DatumData::Bool(s) => {
				for index in 0..count {
					let item = reader.read_u8()? != 0;
					s.set(index, item);
				}
			}
			DatumData::Byte(s) => {
				for index in 0..count {
					let item = reader.read_u8()?;
					s.set(index, item);
				}
			}
			DatumData::Short(s) => {
				for index in 0..count {
					let item = reader.read_i16_le()?;
					s.set(index, item);
				}
			}
			DatumData::Integer(s) | DatumData::Enum(s) => {
				for index in 0..count {
					let item = reader.read_i32_le()?;
					s.set(index, item);
				}
			}
			DatumData::Float(s) => {
				for index in 0..count {
					let item = reader.read_f32_le()?;
					s.set(index, item);
				}
			}
			DatumData::String(s) => {
				for index in 0..count {
					let item = reader.read_string()?;
					s.set(index, item);
				}
			}
			DatumData::Vector2(s) => {
				for index in 0..count {
					let x = reader.read_f32_le()?;
					let y = reader.read_f32_le()?;
					s.set(index, glam::Vec2::new(x, y));
				}
			}
			DatumData::Vector3(s) => {
				for index in 0..count {
					let x = reader.read_f32_le()?;
					let y = reader.read_f32_le()?;
					let z = reader.read_f32_le()?;
					s.set(index, glam::Vec3::new(x, y, z));
				}
			}
			DatumData::Vector4(s) => {
				for index in 0..count {
					let x = reader.read_f32_le()?;
					let y = reader.read_f32_le()?;
					let z = reader.read_f32_le()?;
					let w = reader.read_f32_le()?;
					s.set(index, glam::Vec4::new(x, y, z, w));
				}
			}
			DatumData::Color(s) => {
				for index in 0..count {
					let item = reader.read_color()?;
					s.set(index, item);
				}
			}
			DatumData::Asset(s) => {
				for index in 0..count {
					let name = reader.read_string()?;
					s.set(index, AssetRef { name });
				}
			}
			DatumData::Node(s) => {
				for index in 0..count {
					let item = NodeId(reader.read_u32_le()?);
					s.set(index, item);
				}
			}
		}
		Ok(())
	}

	/// Exact byte size [`Datum::write_stream`] will produce for the current
	/// contents.
	pub fn serialization_size(&self) -> usize {
		match &self.data {
			DatumData::String(s) => s.snapshot().iter().map(|item| 4 + item.len()).sum(),
			DatumData::Asset(s) => s.snapshot().iter().map(|item| 4 + item.name.len()).sum(),
			_ => self.count() * self.kind().element_size().unwrap_or(0),
		}
	}

	/// Copy kind, count, and contents.
	///
	/// With `force_internal_storage` the copy always owns its buffer, even
	/// when this datum aliases a caller field; required for snapshots that
	/// must outlive the source object.
	pub fn deep_copy(&self, force_internal_storage: bool) -> Datum {
		if force_internal_storage {
			Datum {
				data: self.data.to_owned_data(),
			}
		} else {
			self.clone()
		}
	}

	/// Release any internally-owned buffer and zero the count. The kind is
	/// kept; caller-owned buffers are detached, never freed.
	pub fn reset(&mut self) {
		self.data.reset();
	}

	pub(crate) fn push_default(&mut self) {
		self.data.push_default();
	}

	pub(crate) fn remove(&mut self, index: usize) {
		self.data.remove(index);
	}

	pub(crate) fn resize_default(&mut self, count: usize) {
		self.data.resize_default(count);
	}
}

#[cfg(test)]
mod tests;
