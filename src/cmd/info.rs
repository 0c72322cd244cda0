use std::path::PathBuf;

use propdoc::prop::ObjectFile;

/// Print header-level information for an object file.
pub fn run(path: PathBuf) -> propdoc::prop::Result<()> {
	let file = ObjectFile::open(&path)?;

	println!("path: {}", path.display());
	println!("type: {}", file.header.type_name);
	println!("version: {}", file.header.format_version);
	println!("compression: {}", file.compression.as_str());
	println!("fields: {}", file.field_count()?);
	println!("payload_bytes: {}", file.payload().len());

	Ok(())
}
