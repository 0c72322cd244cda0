use std::path::PathBuf;

use propdoc::prop::{DatumKind, ObjectFile, OwnerRegistry, PlatformRules, PropError, Property, Value};

use crate::cmd::sample::build_object;

#[derive(serde::Serialize)]
struct ShowJson {
	path: String,
	type_name: String,
	version: u16,
	compression: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	kind: String,
	category: String,
	count: usize,
	vector: bool,
	values: Vec<serde_json::Value>,
}

/// Decode an object file into its registered type and print every property.
pub fn run(path: PathBuf, json: bool) -> propdoc::prop::Result<()> {
	let file = ObjectFile::open(&path)?;
	let object = build_object(&file.header.type_name).ok_or_else(|| PropError::UnknownObjectType {
		type_name: file.header.type_name.clone(),
	})?;

	let mut registry = OwnerRegistry::new();
	let id = registry.register(object);
	let mut props = registry.gather(id)?;
	file.read_into(&mut props, PlatformRules::host())?;

	if json {
		let payload = ShowJson {
			path: path.display().to_string(),
			type_name: file.header.type_name.clone(),
			version: file.header.format_version,
			compression: file.compression.as_str().to_owned(),
			fields: props.iter().map(field_json).collect::<propdoc::prop::Result<_>>()?,
		};
		println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("type: {}", file.header.type_name);
	println!("fields: {}", props.len());
	for prop in &props {
		print_property(prop)?;
	}

	Ok(())
}

fn field_json(prop: &Property) -> propdoc::prop::Result<FieldJson> {
	let mut values = Vec::with_capacity(prop.count());
	for index in 0..prop.count() {
		values.push(value_json(prop, index)?);
	}

	Ok(FieldJson {
		name: prop.name().to_owned(),
		kind: prop.kind().as_str().to_owned(),
		category: prop.category().to_owned(),
		count: prop.count(),
		vector: prop.is_vector(),
		values,
	})
}

fn value_json(prop: &Property, index: usize) -> propdoc::prop::Result<serde_json::Value> {
	let value = prop.value(index)?;
	let out = match value {
		Value::Bool(v) => serde_json::json!(v),
		Value::Byte(v) => serde_json::json!(v),
		Value::Short(v) => serde_json::json!(v),
		Value::Integer(v) => {
			if prop.kind() == DatumKind::Enum {
				match prop.enum_string(v as usize) {
					Ok(label) => serde_json::json!(label),
					Err(_) => serde_json::json!(v),
				}
			} else {
				serde_json::json!(v)
			}
		}
		Value::Float(v) => serde_json::json!(v),
		Value::String(v) => serde_json::json!(v),
		Value::Vector2(v) => serde_json::json!([v.x, v.y]),
		Value::Vector3(v) => serde_json::json!([v.x, v.y, v.z]),
		Value::Vector4(v) => serde_json::json!([v.x, v.y, v.z, v.w]),
		Value::Color(v) => serde_json::json!(format!("#{:08x}", v.0)),
		Value::Asset(v) => {
			if v.is_null() {
				serde_json::Value::Null
			} else {
				serde_json::json!(v.name)
			}
		}
		Value::Node(v) => {
			if v.is_null() {
				serde_json::Value::Null
			} else {
				serde_json::json!(v.0)
			}
		}
	};
	Ok(out)
}

fn print_property(prop: &Property) -> propdoc::prop::Result<()> {
	let category = if prop.category().is_empty() {
		String::new()
	} else {
		format!("[{}] ", prop.category())
	};

	let shape = if prop.is_vector() {
		format!("{}, vector x{}", prop.kind().as_str(), prop.count())
	} else if prop.count() > 1 {
		format!("{} x{}", prop.kind().as_str(), prop.count())
	} else {
		prop.kind().as_str().to_owned()
	};

	let mut rendered = Vec::with_capacity(prop.count());
	for index in 0..prop.count() {
		rendered.push(render_value(prop, index)?);
	}
	let joined = if prop.count() == 1 && !prop.is_vector() {
		rendered.remove(0)
	} else {
		format!("[{}]", rendered.join(", "))
	};

	println!("  {category}{} ({shape}) = {joined}", prop.name());
	Ok(())
}

fn render_value(prop: &Property, index: usize) -> propdoc::prop::Result<String> {
	let value = prop.value(index)?;
	let out = match value {
		Value::Bool(v) => v.to_string(),
		Value::Byte(v) => v.to_string(),
		Value::Short(v) => v.to_string(),
		Value::Integer(v) => {
			if prop.kind() == DatumKind::Enum {
				match prop.enum_string(v as usize) {
					Ok(label) => label.to_owned(),
					Err(_) => v.to_string(),
				}
			} else {
				v.to_string()
			}
		}
		Value::Float(v) => v.to_string(),
		Value::String(v) => format!("{v:?}"),
		Value::Vector2(v) => format!("({}, {})", v.x, v.y),
		Value::Vector3(v) => format!("({}, {}, {})", v.x, v.y, v.z),
		Value::Vector4(v) => format!("({}, {}, {}, {})", v.x, v.y, v.z, v.w),
		Value::Color(v) => format!("#{:08x}", v.0),
		Value::Asset(v) => {
			if v.is_null() {
				"<none>".to_owned()
			} else {
				v.name
			}
		}
		Value::Node(v) => {
			if v.is_null() {
				"<none>".to_owned()
			} else {
				format!("node:{}", v.0)
			}
		}
	};
	Ok(out)
}
