mod object_files {
	use std::any::Any;
	use std::cell::RefCell;
	use std::rc::Rc;

	use crate::prop::stream::Writer;
	use crate::prop::{
		Compression, Field, OBJECT_MAGIC, ObjectFile, OwnerId, OwnerRegistry, PlatformRules, PropError, Property,
		PropertyOwner, compress_bytes,
	};

	struct Pin {
		id: Field<i32>,
		label: Field<String>,
	}

	impl Pin {
		fn new(id: i32, label: &str) -> Self {
			Self {
				id: Field::new(id),
				label: Field::new(label.to_owned()),
			}
		}
	}

	impl PropertyOwner for Pin {
		fn type_name(&self) -> &'static str {
			"Pin"
		}

		fn gather_properties(&self, owner: OwnerId, out: &mut Vec<Property>) {
			out.push(Property::new("Id", owner, self.id.bind()));
			out.push(Property::new("Label", owner, self.label.bind()));
		}

		fn as_any(&self) -> &dyn Any {
			self
		}

		fn as_any_mut(&mut self) -> &mut dyn Any {
			self
		}
	}

	fn encode_pin(id: i32, label: &str) -> Vec<u8> {
		let pin = Rc::new(RefCell::new(Pin::new(id, label)));
		let mut registry = OwnerRegistry::new();
		let handle = registry.register(pin);
		let props = registry.gather(handle).expect("gather succeeds");
		ObjectFile::encode("Pin", &props).expect("encode succeeds")
	}

	#[test]
	fn encoded_object_parses_and_reads_back() {
		let bytes = encode_pin(7, "spawn");
		let file = ObjectFile::from_bytes(bytes).expect("raw stream parses");

		assert_eq!(file.header.type_name, "Pin");
		assert_eq!(file.compression, Compression::None);
		assert_eq!(file.field_count().expect("marker reads"), 2);

		let dest = Rc::new(RefCell::new(Pin::new(0, "")));
		let mut registry = OwnerRegistry::new();
		let handle = registry.register(dest.clone());
		let mut props = registry.gather(handle).expect("gather succeeds");
		file.read_into(&mut props, PlatformRules::host()).expect("payload reads");

		assert_eq!(dest.borrow().id.get(), 7);
		assert_eq!(dest.borrow().label.get(), "spawn");
	}

	#[test]
	fn compressed_object_is_detected_and_decoded() {
		let raw = encode_pin(3, "door");
		let packed = compress_bytes(&raw).expect("compression succeeds");
		assert_ne!(packed, raw);

		let file = ObjectFile::from_bytes(packed).expect("compressed stream parses");
		assert_eq!(file.compression, Compression::Zstd);
		assert_eq!(file.header.type_name, "Pin");
		assert_eq!(file.field_count().expect("marker reads"), 2);
	}

	#[test]
	fn foreign_magic_is_rejected() {
		let err = ObjectFile::from_bytes(b"JUNKDATA".to_vec()).expect_err("foreign magic must fail");
		assert!(matches!(err, PropError::UnknownMagic { magic: [b'J', b'U', b'N', b'K'] }));
	}

	#[test]
	fn unsupported_version_is_rejected() {
		let mut writer = Writer::new();
		writer.write_bytes(&OBJECT_MAGIC);
		writer.write_u16(9);
		writer.write_string("Pin").expect("name encodes");

		let err = ObjectFile::from_bytes(writer.into_bytes()).expect_err("future version must fail");
		assert!(matches!(err, PropError::UnsupportedFormatVersion { version: 9 }));
	}

	#[test]
	fn truncated_header_reports_eof() {
		let err = ObjectFile::from_bytes(b"POBJ\x01".to_vec()).expect_err("truncated header must fail");
		assert!(matches!(err, PropError::UnexpectedEof { .. }));
	}
}
