mod category;
mod compression;
mod datum;
mod error;
mod file;
mod handler;
mod kind;
mod list;
mod owner;
mod property;
mod store;
mod stream;
mod value;

/// Scoped editor-category stack for gather passes.
pub use category::{CategoryScope, current_category};
/// Compression detection and object payload codecs.
pub use compression::{Compression, ZSTD_MAGIC, compress_bytes, decode_bytes};
/// Type-erased scalar-or-array value holder.
pub use datum::Datum;
/// Error and result aliases.
pub use error::{PropError, Result};
/// Serialized object file container.
pub use file::{FORMAT_VERSION, OBJECT_MAGIC, ObjectFile, ObjectHeader};
/// Change-notification protocol types and entry point.
pub use handler::{ChangeHandler, NativeHandler, apply_change};
/// Closed value-kind registry.
pub use kind::DatumKind;
/// Gather-order property list serialization.
pub use list::{properties_size, read_properties, write_properties};
/// Owner capability handles and registry.
pub use owner::{OwnerId, OwnerRegistry, PropertyOwner};
/// Property identity, editor metadata, and vector extension.
pub use property::Property;
/// Shared field cells and tagged element storage.
pub use store::{DatumData, DatumElem, Field, Store};
/// Bounded byte cursor, stream writer, and platform byte-order rules.
pub use stream::{MAX_STRING_BYTES, PlatformRules, Reader, Writer};
/// Uniform typed values and reference types.
pub use value::{AssetRef, Color32, NodeId, Value};
