use crate::prop::property::Property;
use crate::prop::stream::{Reader, Writer};
use crate::prop::{PropError, Result};

/// Serialize a gathered property list in order, preceded by a field count.
///
/// The per-field layout carries no type tags; the count marker is the one
/// self-description concession, turning a writer/reader gather mismatch into
/// a detectable error instead of silent garbage.
pub fn write_properties(writer: &mut Writer, props: &[Property]) -> Result<()> {
	writer.write_u32(props.len() as u32);
	for prop in props {
		prop.write_stream(writer)?;
	}
	Ok(())
}

/// Deserialize into a freshly gathered matching property list, in place.
///
/// The reconstructed list must have the same kinds in the same order as the
/// writer's; only the field count is verified here.
pub fn read_properties(reader: &mut Reader<'_>, props: &mut [Property]) -> Result<()> {
	let got = reader.read_u32_le()? as usize;
	if got != props.len() {
		return Err(PropError::FieldCountMismatch {
			expected: props.len(),
			got,
		});
	}

	for prop in props {
		prop.read_stream(reader)?;
	}
	Ok(())
}

/// Exact byte size [`write_properties`] will produce.
pub fn properties_size(props: &[Property]) -> usize {
	4 + props.iter().map(Property::serialization_size).sum::<usize>()
}

#[cfg(test)]
mod tests;
