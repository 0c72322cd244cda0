//! Reflective property core for scene objects and their serialized form.

/// Datum/Property value model, change protocol, and object stream codecs.
pub mod prop;
