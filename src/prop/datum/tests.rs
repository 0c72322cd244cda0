mod datum_core {
	use glam::{Vec2, Vec3, Vec4};

	use crate::prop::store::{DatumElem, Store};
	use crate::prop::stream::{Reader, Writer};
	use crate::prop::value::{AssetRef, Color32, NodeId};
	use crate::prop::{Datum, DatumData, DatumKind, Field, PropError, Value};

	fn assert_round_trip<T>(values: Vec<T>)
	where
		T: DatumElem + PartialEq + std::fmt::Debug,
	{
		let source = Datum::of(values.clone());
		let mut writer = Writer::new();
		source.write_stream(&mut writer).expect("write succeeds");
		assert_eq!(writer.len(), source.serialization_size(), "declared size must match produced bytes");

		let bytes = writer.into_bytes();
		let mut dest = Datum::of(vec![T::default(); values.len()]);
		let mut reader = Reader::new(&bytes);
		dest.read_stream(&mut reader).expect("read succeeds");
		assert_eq!(reader.remaining(), 0, "reader must consume the whole stream");

		for (index, value) in values.iter().enumerate() {
			assert_eq!(&dest.get::<T>(index).expect("element reads"), value);
		}
	}

	#[test]
	fn every_kind_round_trips() {
		assert_round_trip(vec![true, false, true]);
		assert_round_trip(vec![0_u8, 127, 255]);
		assert_round_trip(vec![-5_i16, 0, 9999]);
		assert_round_trip(vec![i32::MIN, -1, i32::MAX]);
		assert_round_trip(vec![0.0_f32, -3.5, f32::MAX]);
		assert_round_trip(vec![String::new(), "hi".to_owned(), "プロパティ".to_owned()]);
		assert_round_trip(vec![Vec2::new(1.0, -2.0), Vec2::ZERO]);
		assert_round_trip(vec![Vec3::new(1.0, 2.0, 3.0)]);
		assert_round_trip(vec![Vec4::new(1.0, 2.0, 3.0, 4.0)]);
		assert_round_trip(vec![Color32::from_rgba(1, 2, 3, 4), Color32::default()]);
		assert_round_trip(vec![AssetRef::named("T_Crate"), AssetRef::null()]);
		assert_round_trip(vec![NodeId(77), NodeId::NULL]);
	}

	#[test]
	fn enum_storage_round_trips_as_integers() {
		let source = Datum::new(DatumData::Enum(Store::Owned(vec![0_i32, 2])));
		let mut writer = Writer::new();
		source.write_stream(&mut writer).expect("write succeeds");
		assert_eq!(writer.len(), source.serialization_size());

		let bytes = writer.into_bytes();
		let mut dest = Datum::new(DatumData::Enum(Store::Owned(vec![0_i32, 0])));
		dest.read_stream(&mut Reader::new(&bytes)).expect("read succeeds");
		assert_eq!(dest.kind(), DatumKind::Enum);
		assert_eq!(dest.get::<i32>(1).expect("index reads"), 2);
	}

	#[test]
	fn typed_access_rejects_wrong_kind() {
		let datum = Datum::of(vec![1.5_f32]);
		let err = datum.get::<i32>(0).expect_err("kind must mismatch");
		match err {
			PropError::KindMismatch { expected, got } => {
				assert_eq!(expected, DatumKind::Float);
				assert_eq!(got, DatumKind::Integer);
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn out_of_range_access_is_refused() {
		let mut datum = Datum::of(vec![1_i32, 2]);
		assert!(matches!(datum.get::<i32>(2), Err(PropError::OutOfRange { index: 2, count: 2 })));
		assert!(matches!(datum.set(5, 9_i32), Err(PropError::OutOfRange { index: 5, count: 2 })));
	}

	#[test]
	fn set_value_rejects_foreign_kind() {
		let mut datum = Datum::of(vec![1_i32]);
		let err = datum.set_value(0, &Value::Float(2.0)).expect_err("value kind must mismatch");
		assert!(matches!(err, PropError::ValueMismatch { kind: DatumKind::Integer, value: "float" }));
	}

	#[test]
	fn shared_storage_reads_land_in_the_live_field() {
		let field = Field::new(0_i32);
		let mut writer = Writer::new();
		writer.write_i32(42);
		let bytes = writer.into_bytes();

		let mut datum = Datum::new(field.bind());
		assert!(datum.is_external());
		datum.read_stream(&mut Reader::new(&bytes)).expect("read succeeds");
		assert_eq!(field.get(), 42, "shared store must populate the caller field in place");
	}

	#[test]
	fn deep_copy_with_internal_storage_detaches() {
		let field = Field::new(7_i32);
		let datum = Datum::new(field.bind());

		let snapshot = datum.deep_copy(true);
		let alias = datum.deep_copy(false);
		field.set(100);
		drop(field);

		assert!(!snapshot.is_external());
		assert_eq!(snapshot.get::<i32>(0).expect("snapshot survives"), 7);
		assert_eq!(alias.get::<i32>(0).expect("alias follows"), 100);
	}

	#[test]
	fn reset_zeroes_count_and_keeps_kind() {
		let mut datum = Datum::of(vec!["a".to_owned(), "b".to_owned()]);
		datum.reset();
		assert_eq!(datum.kind(), DatumKind::String);
		assert_eq!(datum.count(), 0);
		assert_eq!(datum.serialization_size(), 0);
	}
}
