use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use propdoc::prop::{
	AssetRef, CategoryScope, ChangeHandler, Color32, Field, OwnerId, Property, PropertyOwner, Result, Value,
};

/// Expected asset subtype for texture references.
pub const TEXTURE_ASSET_TYPE: i32 = 2;

/// Blend mode labels for the sample quad's enum property.
pub const BLEND_MODES: [&str; 3] = ["Opaque", "Masked", "Additive"];

/// Sample textured quad, the built-in object type `show` can decode.
pub struct SampleQuad {
	texture: Field<AssetRef>,
	tint: Field<Color32>,
	uv_scale: Field<Vec2>,
	visible: Field<bool>,
	blend_mode: Field<i32>,
	tags: Field<String>,
}

impl SampleQuad {
	/// Quad with default field values, the target for deserialization.
	pub fn new() -> Self {
		Self {
			texture: Field::new(AssetRef::null()),
			tint: Field::new(Color32::from_rgba(255, 255, 255, 255)),
			uv_scale: Field::new(Vec2::ONE),
			visible: Field::new(true),
			blend_mode: Field::new(0),
			tags: Field::from_vec(Vec::new()),
		}
	}

	/// Quad populated with fixture values for `make-sample`.
	pub fn fixture() -> Self {
		let quad = Self::new();
		quad.texture.set(AssetRef::named("T_Crate"));
		quad.tint.set(Color32::from_rgba(64, 32, 16, 255));
		quad.uv_scale.set(Vec2::new(2.0, 2.0));
		quad.blend_mode.set(1);
		Self {
			tags: Field::from_vec(vec!["deco".to_owned(), "props".to_owned()]),
			..quad
		}
	}

	fn set_texture(&mut self, value: &AssetRef) {
		self.texture.set(value.clone());
	}

	fn set_visible(&mut self, value: bool) {
		self.visible.set(value);
	}

	fn set_blend_mode(&mut self, value: i32) {
		self.blend_mode.set(value);
	}
}

impl Default for SampleQuad {
	fn default() -> Self {
		Self::new()
	}
}

fn handle_prop_change(owner: &mut dyn PropertyOwner, prop: &Property, _index: usize, value: &Value) -> Result<bool> {
	let Some(quad) = owner.as_any_mut().downcast_mut::<SampleQuad>() else {
		return Ok(false);
	};

	match (prop.name(), value) {
		("Texture", Value::Asset(item)) => {
			quad.set_texture(item);
			Ok(true)
		}
		("Visible", Value::Bool(item)) => {
			quad.set_visible(*item);
			Ok(true)
		}
		("Blend Mode", Value::Integer(item)) => {
			quad.set_blend_mode(*item);
			Ok(true)
		}
		_ => Ok(false),
	}
}

impl PropertyOwner for SampleQuad {
	fn type_name(&self) -> &'static str {
		"Quad"
	}

	fn gather_properties(&self, owner: OwnerId, out: &mut Vec<Property>) {
		let _category = CategoryScope::new("Quad");

		out.push(
			Property::new("Texture", owner, self.texture.bind())
				.with_handler(ChangeHandler::Native(handle_prop_change))
				.with_extra(TEXTURE_ASSET_TYPE),
		);
		out.push(Property::new("Tint", owner, self.tint.bind()));
		out.push(Property::new("UV Scale", owner, self.uv_scale.bind()));
		out.push(Property::new("Visible", owner, self.visible.bind()).with_handler(ChangeHandler::Native(handle_prop_change)));
		out.push(
			Property::new("Blend Mode", owner, self.blend_mode.bind_enum())
				.with_enum_strings(&BLEND_MODES)
				.with_handler(ChangeHandler::Native(handle_prop_change)),
		);
		out.push(Property::new("Tags", owner, self.tags.bind()).make_vector(0, 8));
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

/// Construct a registered object instance for a serialized type name.
pub fn build_object(type_name: &str) -> Option<Rc<RefCell<dyn PropertyOwner>>> {
	match type_name {
		"Quad" => Some(Rc::new(RefCell::new(SampleQuad::new()))),
		_ => None,
	}
}
