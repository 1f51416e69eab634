//! Typed records for the VRM avatar extensions of glTF, with a lossless
//! mapping to and from their JSON form.
//!
//! Each schema generation lives in its own module under [`extensions`]:
//! plain VRM 0.x and 1.0 records keep unknown JSON members in `extras`,
//! while the [`extensions::vrmc`] layout uses fixed-size vectors and drops
//! them.

pub mod enumeration;
pub mod error;
pub mod extensions;
pub mod loader;
pub mod marshal;
pub mod record;

pub use error::SchemaError;
pub use extensions::{Extension, Placement};
pub use loader::{load_maybe_glb, VrmDocument, VrmError, VrmVersion};
pub use marshal::{JsonObject, Marshal};
pub use record::{Extras, Record};
