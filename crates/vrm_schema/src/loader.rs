use std::borrow::Cow;

use gltf::Glb;
use serde_json::Value;
use thiserror::Error;

use crate::error::SchemaError;
use crate::extensions::{vrm0, vrm1, Extension, Placement};
use crate::marshal::JsonObject;

/// An error that occurs when reading or writing the VRM blocks of a glTF file.
#[derive(Error, Debug)]
pub enum VrmError {
    #[error("invalid glTF file: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("invalid glTF JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("glTF JSON is not an object")]
    NotAnObject,
    #[error("extension {0} is missing")]
    MissingExtension(&'static str),
    #[error("{extension} belongs to {placement:?} objects")]
    Placement {
        extension: &'static str,
        placement: Placement,
    },
    #[error("no {collection} entry at index {index}")]
    MissingElement {
        collection: &'static str,
        index: usize,
    },
    #[error("invalid {extension} extension: {source}")]
    Schema {
        extension: &'static str,
        #[source]
        source: SchemaError,
    },
}

/// The VRM major version whose root extension a document carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VrmVersion {
    Vrm0,
    Vrm1,
}

/// Reads a GLB container, or plain glTF JSON when the magic is missing.
pub fn load_maybe_glb(src: &[u8]) -> Result<Glb<'_>, gltf::Error> {
    if src.starts_with(b"glTF") {
        Ok(Glb::from_slice(src)?)
    } else {
        tracing::debug!("no GLB header, reading input as glTF JSON");
        Ok(Glb {
            header: gltf::binary::Header {
                magic: [0, 0, 0, 0],
                version: 0,
                length: 0,
            },
            json: src.into(),
            bin: None,
        })
    }
}

/// A glTF document held as JSON, with its binary chunk kept aside.
#[derive(Clone, Debug, Default)]
pub struct VrmDocument {
    json: JsonObject,
    bin: Option<Vec<u8>>,
}

impl VrmDocument {
    pub fn from_slice(src: &[u8]) -> Result<Self, VrmError> {
        let glb = load_maybe_glb(src)?;
        let Value::Object(json) = serde_json::from_slice::<Value>(&glb.json)? else {
            return Err(VrmError::NotAnObject);
        };
        Ok(Self {
            json,
            bin: glb.bin.map(Cow::into_owned),
        })
    }

    pub fn from_json(json: JsonObject) -> Self {
        Self { json, bin: None }
    }

    pub fn json(&self) -> &JsonObject {
        &self.json
    }

    pub fn bin(&self) -> Option<&[u8]> {
        self.bin.as_deref()
    }

    fn root_extensions(&self) -> Option<&JsonObject> {
        self.json.get("extensions").and_then(Value::as_object)
    }

    /// `VRMC_vrm` takes precedence when a converted file carries both blocks.
    pub fn detect(&self) -> Option<VrmVersion> {
        let extensions = self.root_extensions()?;
        if extensions.contains_key(vrm1::Vrm::KEY) {
            Some(VrmVersion::Vrm1)
        } else if extensions.contains_key(vrm0::Vrm::KEY) {
            Some(VrmVersion::Vrm0)
        } else {
            None
        }
    }

    /// The raw JSON of a root extension.
    pub fn root_extension_json(&self, key: &str) -> Option<&Value> {
        self.root_extensions()?.get(key)
    }

    pub fn root_extension<T: Extension>(&self) -> Result<T, VrmError> {
        check_root::<T>()?;
        let value = self
            .root_extension_json(T::KEY)
            .ok_or(VrmError::MissingExtension(T::KEY))?;
        decode_extension(value)
    }

    /// Decodes `T` from every material or node, by index.
    pub fn attached_extensions<T: Extension>(&self) -> Result<Vec<Option<T>>, VrmError> {
        let Some(collection) = collection_of::<T>() else {
            return Err(VrmError::Placement {
                extension: T::KEY,
                placement: T::PLACEMENT,
            });
        };
        let Some(items) = self.json.get(collection).and_then(Value::as_array) else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                item.get("extensions")
                    .and_then(|extensions| extensions.get(T::KEY))
                    .map(decode_extension)
                    .transpose()
            })
            .collect()
    }

    /// Encodes `record` into the root `extensions` object, replacing any
    /// previous block.
    pub fn set_root_extension<T: Extension>(&mut self, record: &T) -> Result<(), VrmError> {
        check_root::<T>()?;
        let value = encode_extension(record)?;
        insert_extension(&mut self.json, T::KEY, value);
        self.mark_used(T::KEY);
        Ok(())
    }

    pub fn set_attached_extension<T: Extension>(
        &mut self,
        index: usize,
        record: &T,
    ) -> Result<(), VrmError> {
        let Some(collection) = collection_of::<T>() else {
            return Err(VrmError::Placement {
                extension: T::KEY,
                placement: T::PLACEMENT,
            });
        };
        let value = encode_extension(record)?;
        let item = self
            .json
            .get_mut(collection)
            .and_then(Value::as_array_mut)
            .and_then(|items| items.get_mut(index))
            .and_then(Value::as_object_mut)
            .ok_or(VrmError::MissingElement { collection, index })?;
        insert_extension(item, T::KEY, value);
        self.mark_used(T::KEY);
        Ok(())
    }

    fn mark_used(&mut self, key: &str) {
        let used = self
            .json
            .entry("extensionsUsed")
            .or_insert_with(|| Value::Array(Vec::new()));
        match used.as_array_mut() {
            Some(used) => {
                if !used.iter().any(|name| name.as_str() == Some(key)) {
                    used.push(Value::from(key));
                }
            }
            None => tracing::warn!(key, "extensionsUsed is not an array, leaving it alone"),
        }
    }

    /// Writes the document as glTF JSON. The binary chunk is not included.
    pub fn to_json(&self) -> Result<Vec<u8>, VrmError> {
        Ok(serde_json::to_vec(&self.json)?)
    }

    /// Writes the document as a GLB container, keeping the binary chunk.
    pub fn to_glb(&self) -> Result<Vec<u8>, VrmError> {
        let json = serde_json::to_vec(&self.json)?;
        let glb = Glb {
            header: gltf::binary::Header {
                magic: *b"glTF",
                version: 2,
                length: 0,
            },
            json: json.into(),
            bin: self.bin.as_deref().map(Cow::Borrowed),
        };
        let mut out = Vec::new();
        glb.to_writer(&mut out)?;
        Ok(out)
    }
}

fn check_root<T: Extension>() -> Result<(), VrmError> {
    match T::PLACEMENT {
        Placement::Root => Ok(()),
        placement => Err(VrmError::Placement {
            extension: T::KEY,
            placement,
        }),
    }
}

fn collection_of<T: Extension>() -> Option<&'static str> {
    match T::PLACEMENT {
        Placement::Root => None,
        Placement::Material => Some("materials"),
        Placement::Node => Some("nodes"),
    }
}

fn decode_extension<T: Extension>(value: &Value) -> Result<T, VrmError> {
    T::from_value(value).map_err(|source| VrmError::Schema {
        extension: T::KEY,
        source,
    })
}

fn encode_extension<T: Extension>(record: &T) -> Result<Value, VrmError> {
    record.to_value().map_err(|source| VrmError::Schema {
        extension: T::KEY,
        source,
    })
}

fn insert_extension(target: &mut JsonObject, key: &str, value: Value) {
    let extensions = target
        .entry("extensions")
        .or_insert_with(|| Value::Object(JsonObject::new()));
    if !extensions.is_object() {
        tracing::warn!(key, "replacing non-object extensions member");
        *extensions = Value::Object(JsonObject::new());
    }
    if let Value::Object(extensions) = extensions {
        extensions.insert(key.to_owned(), value);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::extensions::vrm1::mtoon::MToon;
    use crate::extensions::vrm1::spring_bone::SpringBone;

    fn document(value: Value) -> VrmDocument {
        match value {
            Value::Object(json) => VrmDocument::from_json(json),
            _ => panic!("fixture is not an object"),
        }
    }

    #[test]
    fn plain_json_is_accepted() {
        let glb = load_maybe_glb(br#"{"asset":{"version":"2.0"}}"#).unwrap();
        assert!(glb.bin.is_none());
        let document = VrmDocument::from_slice(&glb.json).unwrap();
        assert_eq!(document.json()["asset"]["version"], "2.0");
        assert_eq!(document.detect(), None);
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(matches!(VrmDocument::from_slice(b"[1, 2]"), Err(VrmError::NotAnObject)));
    }

    #[test]
    fn glb_round_trip_keeps_bin_chunk() {
        let mut source = document(json!({ "asset": { "version": "2.0" } }));
        source.bin = Some(vec![1, 2, 3, 4, 5]);
        let bytes = source.to_glb().unwrap();
        assert!(bytes.starts_with(b"glTF"));
        assert_eq!(bytes.len() % 4, 0);

        let reread = VrmDocument::from_slice(&bytes).unwrap();
        assert_eq!(reread.json(), source.json());
        assert_eq!(&reread.bin().unwrap()[..5], &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn json_output_reads_back() {
        let mut doc = document(json!({
            "asset": { "version": "2.0" },
            "extensions": { "VRMC_springBone": { "specVersion": "1.0" } },
        }));
        doc.bin = Some(vec![9; 8]);
        let bytes = doc.to_json().unwrap();
        assert!(bytes.starts_with(b"{"));

        let reread = VrmDocument::from_slice(&bytes).unwrap();
        assert_eq!(reread.json(), doc.json());
        assert!(reread.bin().is_none());
        assert_eq!(reread.root_extension::<SpringBone>().unwrap().spec_version, "1.0");
    }

    #[test]
    fn newer_root_extension_wins() {
        let both = document(json!({ "extensions": { "VRM": {}, "VRMC_vrm": {} } }));
        assert_eq!(both.detect(), Some(VrmVersion::Vrm1));
        let old = document(json!({ "extensions": { "VRM": {} } }));
        assert_eq!(old.detect(), Some(VrmVersion::Vrm0));
    }

    #[test]
    fn missing_and_misplaced_extensions() {
        let doc = document(json!({ "extensions": {} }));
        assert!(matches!(
            doc.root_extension::<SpringBone>(),
            Err(VrmError::MissingExtension("VRMC_springBone"))
        ));
        assert!(matches!(doc.root_extension::<MToon>(), Err(VrmError::Placement { .. })));
        assert!(matches!(doc.attached_extensions::<SpringBone>(), Err(VrmError::Placement { .. })));
    }

    #[test]
    fn schema_errors_name_the_extension() {
        let doc = document(json!({
            "extensions": { "VRMC_springBone": { "springs": [{ "joints": [{}] }] } },
        }));
        let err = doc.root_extension::<SpringBone>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid VRMC_springBone extension: required field not found: node"
        );
    }

    #[test]
    fn material_extensions_by_index() {
        let doc = document(json!({
            "materials": [
                { "name": "body" },
                { "name": "hair", "extensions": { "VRMC_materials_mtoon": { "shadingToonyFactor": 0.5 } } },
            ],
        }));
        let mtoon = doc.attached_extensions::<MToon>().unwrap();
        assert_eq!(mtoon.len(), 2);
        assert!(mtoon[0].is_none());
        assert_eq!(mtoon[1].as_ref().unwrap().shading_toony_factor, 0.5);
    }

    #[test]
    fn setting_extensions_registers_them() {
        let mut doc = document(json!({
            "extensionsUsed": ["KHR_materials_unlit"],
            "materials": [{ "name": "face" }],
        }));
        let spring_bone = SpringBone {
            spec_version: "1.0".into(),
            ..Default::default()
        };
        doc.set_root_extension(&spring_bone).unwrap();
        doc.set_root_extension(&spring_bone).unwrap();
        doc.set_attached_extension(0, &MToon::default()).unwrap();
        assert!(matches!(
            doc.set_attached_extension(3, &MToon::default()),
            Err(VrmError::MissingElement { collection: "materials", index: 3 })
        ));

        assert_eq!(
            doc.json()["extensionsUsed"],
            json!(["KHR_materials_unlit", "VRMC_springBone", "VRMC_materials_mtoon"])
        );
        assert_eq!(doc.root_extension::<SpringBone>().unwrap(), spring_bone);
        assert_eq!(doc.json()["materials"][0]["extensions"]["VRMC_materials_mtoon"], json!({}));
    }
}
