use propdoc::prop::DatumKind;

/// Print the kind registry with per-element wire widths.
pub fn run() -> propdoc::prop::Result<()> {
	for kind in DatumKind::ALL {
		match kind.element_size() {
			Some(size) => println!("{:<10} {size} bytes", kind.as_str()),
			None => println!("{:<10} variable", kind.as_str()),
		}
	}

	Ok(())
}
