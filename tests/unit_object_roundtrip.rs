#![allow(missing_docs)]

use std::any::Any;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use propdoc::prop::{
	AssetRef, CategoryScope, ChangeHandler, Color32, Field, NodeId, ObjectFile, OwnerId, OwnerRegistry, PlatformRules,
	Property, PropertyOwner, Result, Value, apply_change,
};

struct Lamp {
	mesh: Field<AssetRef>,
	color: Field<Color32>,
	intensity: Field<f32>,
	offset: Field<Vec3>,
	uv: Field<Vec2>,
	enabled: Field<bool>,
	parent: Field<NodeId>,
	tags: Field<String>,
	rebuilds: usize,
}

impl Lamp {
	fn new() -> Self {
		Self {
			mesh: Field::new(AssetRef::null()),
			color: Field::new(Color32::from_rgba(255, 255, 255, 255)),
			intensity: Field::new(1.0),
			offset: Field::new(Vec3::ZERO),
			uv: Field::new(Vec2::ONE),
			enabled: Field::new(true),
			parent: Field::new(NodeId::NULL),
			tags: Field::from_vec(Vec::new()),
			rebuilds: 0,
		}
	}

	fn fixture() -> Self {
		let lamp = Self::new();
		lamp.mesh.set(AssetRef::named("SM_Lantern"));
		lamp.color.set(Color32::from_rgba(0x20, 0x40, 0x80, 0xFF));
		lamp.intensity.set(2.5);
		lamp.offset.set(Vec3::new(0.0, 1.5, -0.25));
		lamp.uv.set(Vec2::new(4.0, 4.0));
		lamp.enabled.set(false);
		lamp.parent.set(NodeId(12));
		Self {
			tags: Field::from_vec(vec!["interior".to_owned(), "warm".to_owned()]),
			..lamp
		}
	}

	fn set_mesh(&mut self, value: &AssetRef) {
		self.mesh.set(value.clone());
		self.rebuilds += 1;
	}
}

fn handle_lamp_change(owner: &mut dyn PropertyOwner, prop: &Property, _index: usize, value: &Value) -> Result<bool> {
	let Some(lamp) = owner.as_any_mut().downcast_mut::<Lamp>() else {
		return Ok(false);
	};

	match (prop.name(), value) {
		("Mesh", Value::Asset(item)) => {
			lamp.set_mesh(item);
			Ok(true)
		}
		_ => Ok(false),
	}
}

impl PropertyOwner for Lamp {
	fn type_name(&self) -> &'static str {
		"Lamp"
	}

	fn gather_properties(&self, owner: OwnerId, out: &mut Vec<Property>) {
		let _category = CategoryScope::new("Lamp");

		out.push(Property::new("Mesh", owner, self.mesh.bind()).with_handler(ChangeHandler::Native(handle_lamp_change)));
		out.push(Property::new("Color", owner, self.color.bind()));
		out.push(Property::new("Intensity", owner, self.intensity.bind()));
		out.push(Property::new("Offset", owner, self.offset.bind()));
		out.push(Property::new("UV", owner, self.uv.bind()));
		out.push(Property::new("Enabled", owner, self.enabled.bind()));
		out.push(Property::new("Parent", owner, self.parent.bind()));
		out.push(Property::new("Tags", owner, self.tags.bind()).make_vector(0, 16));
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

fn temp_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("propdoc_{}_{}", std::process::id(), name))
}

#[test]
fn saved_object_reloads_into_a_fresh_gather_list() {
	let path = temp_path("lamp.pobj");

	let source = Rc::new(RefCell::new(Lamp::fixture()));
	let mut registry = OwnerRegistry::new();
	let source_id = registry.register(source.clone());
	let props = registry.gather(source_id).expect("gather succeeds");
	ObjectFile::save(&path, "Lamp", &props).expect("save succeeds");

	let file = ObjectFile::open(&path).expect("file opens");
	assert_eq!(file.header.type_name, "Lamp");
	assert_eq!(file.field_count().expect("marker reads"), 8);

	let dest = Rc::new(RefCell::new(Lamp::new()));
	let dest_id = registry.register(dest.clone());
	let mut dest_props = registry.gather(dest_id).expect("gather succeeds");
	file.read_into(&mut dest_props, PlatformRules::host()).expect("payload reads");

	let loaded = dest.borrow();
	assert_eq!(loaded.mesh.get(), AssetRef::named("SM_Lantern"));
	assert_eq!(loaded.color.get(), Color32::from_rgba(0x20, 0x40, 0x80, 0xFF));
	assert_eq!(loaded.intensity.get(), 2.5);
	assert_eq!(loaded.offset.get(), Vec3::new(0.0, 1.5, -0.25));
	assert_eq!(loaded.uv.get(), Vec2::new(4.0, 4.0));
	assert!(!loaded.enabled.get());
	assert_eq!(loaded.parent.get(), NodeId(12));
	assert_eq!(loaded.tags.to_vec(), vec!["interior".to_owned(), "warm".to_owned()]);

	drop(loaded);
	let _ = std::fs::remove_file(&path);
}

#[test]
fn compressed_save_round_trips() {
	let path = temp_path("lamp_packed.pobj");

	let source = Rc::new(RefCell::new(Lamp::fixture()));
	let mut registry = OwnerRegistry::new();
	let source_id = registry.register(source);
	let props = registry.gather(source_id).expect("gather succeeds");
	ObjectFile::save_compressed(&path, "Lamp", &props).expect("compressed save succeeds");

	let file = ObjectFile::open(&path).expect("file opens");
	assert_eq!(file.compression.as_str(), "zstd");

	let dest = Rc::new(RefCell::new(Lamp::new()));
	let dest_id = registry.register(dest.clone());
	let mut dest_props = registry.gather(dest_id).expect("gather succeeds");
	file.read_into(&mut dest_props, PlatformRules::host()).expect("payload reads");
	assert_eq!(dest.borrow().intensity.get(), 2.5);

	let _ = std::fs::remove_file(&path);
}

#[test]
fn embedded_target_reload_reverses_packed_colors() {
	let path = temp_path("lamp_dolphin.pobj");

	let source = Rc::new(RefCell::new(Lamp::fixture()));
	let mut registry = OwnerRegistry::new();
	let source_id = registry.register(source);
	let props = registry.gather(source_id).expect("gather succeeds");
	ObjectFile::save(&path, "Lamp", &props).expect("save succeeds");

	let file = ObjectFile::open(&path).expect("file opens");
	let dest = Rc::new(RefCell::new(Lamp::new()));
	let dest_id = registry.register(dest.clone());
	let mut dest_props = registry.gather(dest_id).expect("gather succeeds");
	file.read_into(&mut dest_props, PlatformRules::big_endian_target()).expect("payload reads");

	assert_eq!(
		dest.borrow().color.get(),
		Color32::from_rgba(0xFF, 0x80, 0x40, 0x20),
		"packed colors must be byte-reversed for the big-endian target"
	);
	assert_eq!(dest.borrow().intensity.get(), 2.5, "floats are not byte-order corrected");

	let _ = std::fs::remove_file(&path);
}

#[test]
fn editor_style_mutation_runs_through_the_handler() {
	let lamp = Rc::new(RefCell::new(Lamp::new()));
	let mut registry = OwnerRegistry::new();
	let id = registry.register(lamp.clone());
	let mut props = registry.gather(id).expect("gather succeeds");

	let mesh_prop = props.iter_mut().find(|prop| prop.name() == "Mesh").expect("mesh property gathered");
	let applied = apply_change(&registry, mesh_prop, 0, &Value::Asset(AssetRef::named("SM_Sconce"))).expect("change applies");

	assert!(applied);
	assert_eq!(lamp.borrow().mesh.get(), AssetRef::named("SM_Sconce"));
	assert_eq!(lamp.borrow().rebuilds, 1, "the owner's real setter must run");
}
