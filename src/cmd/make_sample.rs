use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use propdoc::prop::{ObjectFile, OwnerRegistry};

use crate::cmd::sample::SampleQuad;

/// Write a sample object file usable as a fixture for the other commands.
pub fn run(path: PathBuf, compress: bool) -> propdoc::prop::Result<()> {
	let quad = Rc::new(RefCell::new(SampleQuad::fixture()));
	let mut registry = OwnerRegistry::new();
	let id = registry.register(quad);
	let props = registry.gather(id)?;

	if compress {
		ObjectFile::save_compressed(&path, "Quad", &props)?;
	} else {
		ObjectFile::save(&path, "Quad", &props)?;
	}

	println!("wrote {} ({} fields)", path.display(), props.len());
	Ok(())
}
