use crate::prop::owner::{OwnerRegistry, PropertyOwner};
use crate::prop::property::Property;
use crate::prop::value::Value;
use crate::prop::{PropError, Result};

/// Native change callback: inspects the property name, dispatches to the
/// owner's real setter, and returns whether it recognized and applied the
/// change.
pub type NativeHandler = fn(owner: &mut dyn PropertyOwner, prop: &Property, index: usize, value: &Value) -> Result<bool>;

/// Owner-supplied callback invoked on every externally driven mutation.
#[derive(Debug, Clone)]
pub enum ChangeHandler {
	/// Plain function callback.
	Native(NativeHandler),
	/// Named hook dispatched through the owner's script surface.
	Script(String),
}

/// Apply an external mutation through the change protocol.
///
/// This is the single entry point editor and script consumers use. Invalid
/// input (kind mismatch, index out of range, enum index outside the table)
/// errors out before the handler is consulted. With no handler installed the
/// write lands directly in the buffer. With a handler, the verdict is the
/// handler's: `Ok(true)` means the owner recognized and applied the change
/// through its own setter; `Ok(false)` means not applied, which the caller
/// surfaces as rejection feedback, not an error. The buffer is never touched
/// here when a handler is present.
pub fn apply_change(registry: &OwnerRegistry, prop: &mut Property, index: usize, value: &Value) -> Result<bool> {
	if !value.matches_kind(prop.kind()) {
		return Err(PropError::ValueMismatch {
			kind: prop.kind(),
			value: value.kind_label(),
		});
	}
	if index >= prop.count() {
		return Err(PropError::OutOfRange {
			index,
			count: prop.count(),
		});
	}
	prop.check_enum_value(value)?;

	let handler = prop.handler().cloned();
	match handler {
		None => {
			prop.set_value(index, value)?;
			Ok(true)
		}
		Some(ChangeHandler::Native(callback)) => {
			let owner = registry.resolve(prop.owner())?;
			let mut owner = owner.borrow_mut();
			callback(&mut *owner, prop, index, value)
		}
		Some(ChangeHandler::Script(hook)) => {
			let owner = registry.resolve(prop.owner())?;
			let mut owner = owner.borrow_mut();
			owner.handle_script_change(&hook, prop, index, value)
		}
	}
}
