use std::cell::RefCell;

thread_local! {
	static CATEGORY_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Editor category captured by properties constructed while a scope is alive.
///
/// Scopes nest: dropping an inner scope restores the outer category on every
/// exit path, including early returns.
#[must_use = "the category is popped when the scope is dropped"]
pub struct CategoryScope(());

impl CategoryScope {
	/// Push `name` as the active category until this scope is dropped.
	pub fn new(name: &str) -> Self {
		CATEGORY_STACK.with(|stack| stack.borrow_mut().push(name.to_owned()));
		Self(())
	}
}

impl Drop for CategoryScope {
	fn drop(&mut self) {
		CATEGORY_STACK.with(|stack| {
			stack.borrow_mut().pop();
		});
	}
}

/// The active category, or the empty string outside any scope.
pub fn current_category() -> String {
	CATEGORY_STACK.with(|stack| stack.borrow().last().cloned()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::{CategoryScope, current_category};

	#[test]
	fn scopes_nest_and_restore() {
		assert_eq!(current_category(), "");
		{
			let _outer = CategoryScope::new("Mesh");
			assert_eq!(current_category(), "Mesh");
			{
				let _inner = CategoryScope::new("Lighting");
				assert_eq!(current_category(), "Lighting");
			}
			assert_eq!(current_category(), "Mesh", "inner scope must restore the outer category");
		}
		assert_eq!(current_category(), "");
	}

	#[test]
	fn early_drop_pops_immediately() {
		let scope = CategoryScope::new("Physics");
		assert_eq!(current_category(), "Physics");
		drop(scope);
		assert_eq!(current_category(), "");
	}
}
