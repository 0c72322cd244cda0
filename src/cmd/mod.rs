/// Object file header information command.
pub mod info;
/// Kind registry listing command.
pub mod kinds;
/// Sample object file generation command.
pub mod make_sample;
/// Built-in sample object types.
pub mod sample;
/// Decoded property display command.
pub mod show;
