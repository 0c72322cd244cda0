mod list_streams {
	use std::any::Any;
	use std::cell::RefCell;
	use std::rc::Rc;

	use crate::prop::stream::{Reader, Writer};
	use crate::prop::{
		Field, OwnerId, OwnerRegistry, PropError, Property, PropertyOwner, properties_size, read_properties,
		write_properties,
	};

	struct Inert;

	impl PropertyOwner for Inert {
		fn type_name(&self) -> &'static str {
			"Inert"
		}

		fn gather_properties(&self, _owner: OwnerId, _out: &mut Vec<Property>) {}

		fn as_any(&self) -> &dyn Any {
			self
		}

		fn as_any_mut(&mut self) -> &mut dyn Any {
			self
		}
	}

	fn inert_owner() -> OwnerId {
		OwnerRegistry::new().register(Rc::new(RefCell::new(Inert)))
	}

	struct Sheet {
		enabled: Field<bool>,
		opacity: Field<f32>,
		label: Field<String>,
	}

	impl Sheet {
		fn new(enabled: bool, opacity: f32, label: &str) -> Self {
			Self {
				enabled: Field::new(enabled),
				opacity: Field::new(opacity),
				label: Field::new(label.to_owned()),
			}
		}

		fn gather(&self, owner: OwnerId) -> Vec<Property> {
			vec![
				Property::new("Enabled", owner, self.enabled.bind()),
				Property::new("Opacity", owner, self.opacity.bind()),
				Property::new("Label", owner, self.label.bind()),
			]
		}
	}

	#[test]
	fn three_field_list_round_trips() {
		let owner = inert_owner();
		let source = Sheet::new(true, 3.5, "hi");
		let props = source.gather(owner);

		let mut writer = Writer::new();
		write_properties(&mut writer, &props).expect("list writes");
		assert_eq!(writer.len(), properties_size(&props), "declared size must match produced bytes");

		let bytes = writer.into_bytes();
		let dest = Sheet::new(false, 0.0, "");
		let mut dest_props = dest.gather(owner);
		read_properties(&mut Reader::new(&bytes), &mut dest_props).expect("list reads");

		assert!(dest.enabled.get());
		assert_eq!(dest.opacity.get(), 3.5);
		assert_eq!(dest.label.get(), "hi");
	}

	#[test]
	fn field_count_marker_detects_desync() {
		let owner = inert_owner();
		let source = Sheet::new(true, 1.0, "x");
		let props = source.gather(owner);

		let mut writer = Writer::new();
		write_properties(&mut writer, &props).expect("list writes");
		let bytes = writer.into_bytes();

		let dest = Sheet::new(false, 0.0, "");
		let mut short_list = dest.gather(owner);
		short_list.truncate(2);

		let err = read_properties(&mut Reader::new(&bytes), &mut short_list).expect_err("marker must catch the mismatch");
		assert!(matches!(err, PropError::FieldCountMismatch { expected: 2, got: 3 }));
	}
}
