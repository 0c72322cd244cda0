use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::prop::property::Property;
use crate::prop::value::Value;
use crate::prop::{PropError, Result};

/// Opaque capability handle for a registered property owner.
///
/// Replaces a raw owner pointer: a handle is non-null by construction and can
/// only be minted by a registry, so a change handler is never invoked against
/// a wrong-typed or freed owner. The remaining failure mode, an unregistered
/// handle, surfaces as a typed error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u32);

/// An object that exposes reflected fields as properties.
pub trait PropertyOwner: 'static {
	/// Stable type name, also the object-file type tag.
	fn type_name(&self) -> &'static str;

	/// Append one property per reflected field, in fixed, meaningful order.
	///
	/// Serialization is positional: writer and reader must produce the exact
	/// same list, so the order here is part of the on-disk contract.
	fn gather_properties(&self, owner: OwnerId, out: &mut Vec<Property>);

	/// Dispatch a named script hook for a property change.
	///
	/// The default recognizes nothing; objects with scripted fields override.
	fn handle_script_change(&mut self, hook: &str, prop: &Property, index: usize, value: &Value) -> Result<bool> {
		let _ = (hook, prop, index, value);
		Ok(false)
	}

	/// Upcast for handler-side downcasting.
	fn as_any(&self) -> &dyn Any;

	/// Mutable upcast for handler-side downcasting.
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Registry minting and resolving owner handles.
#[derive(Default)]
pub struct OwnerRegistry {
	next_id: u32,
	owners: HashMap<u32, Rc<RefCell<dyn PropertyOwner>>>,
}

impl OwnerRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an owner, returning its handle. Handles start at 1.
	pub fn register(&mut self, owner: Rc<RefCell<dyn PropertyOwner>>) -> OwnerId {
		self.next_id += 1;
		self.owners.insert(self.next_id, owner);
		OwnerId(self.next_id)
	}

	/// Drop an owner. Returns whether the handle was registered.
	pub fn unregister(&mut self, id: OwnerId) -> bool {
		self.owners.remove(&id.0).is_some()
	}

	/// Resolve a handle to its owner.
	pub fn resolve(&self, id: OwnerId) -> Result<Rc<RefCell<dyn PropertyOwner>>> {
		self.owners.get(&id.0).cloned().ok_or(PropError::OwnerNotFound { owner: id })
	}

	/// Run an owner's gather pass, returning its transient property list.
	pub fn gather(&self, id: OwnerId) -> Result<Vec<Property>> {
		let owner = self.resolve(id)?;
		let mut out = Vec::new();
		owner.borrow().gather_properties(id, &mut out);
		Ok(out)
	}

	/// Number of registered owners.
	pub fn len(&self) -> usize {
		self.owners.len()
	}

	/// Whether no owners are registered.
	pub fn is_empty(&self) -> bool {
		self.owners.is_empty()
	}
}
