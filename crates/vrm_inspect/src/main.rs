use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;
use vrm_schema::extensions::{vrm0, vrm1, vrmc};
use vrm_schema::{Extension, JsonObject, Placement, Record, VrmDocument, VrmError, VrmVersion};

/// Which set of records to decode the VRM blocks with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Layout {
    /// `VRM` with array vectors, unknown members kept.
    Vrm0,
    /// `VRMC_vrm` and friends, unknown members kept.
    Vrm1,
    /// `VRM` with `{x, y, z}` vectors, as UniVRM writes it.
    VrmcVrm0,
    /// `VRMC_vrm` and friends with typed vectors.
    VrmcVrm1,
}

impl Layout {
    /// UniVRM 0.x exports write vectors as objects, so 0.x files default to
    /// the closed layout.
    fn for_version(version: VrmVersion) -> Self {
        match version {
            VrmVersion::Vrm0 => Layout::VrmcVrm0,
            VrmVersion::Vrm1 => Layout::Vrm1,
        }
    }
}

#[derive(Parser)]
#[command(about = "Decode the VRM extension blocks of a .vrm, .glb or .gltf file")]
struct Options {
    pub path: PathBuf,
    /// Decode with this layout instead of picking one from the file.
    #[arg(long, value_enum)]
    pub schema: Option<Layout>,
    #[arg(long)]
    pub compact: bool,
    /// Write the document with the re-encoded blocks here, as glTF JSON for
    /// `.gltf`/`.json` paths and GLB otherwise.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct AttachedExtension {
    extension: &'static str,
    collection: &'static str,
    index: usize,
    value: Value,
}

#[derive(Serialize)]
struct Report {
    layout: Layout,
    extensions: JsonObject,
    attached: Vec<AttachedExtension>,
}

/// Decodes blocks from a document, writes them back in canonical form and
/// records what was found.
struct Inspector {
    document: VrmDocument,
    report: Report,
}

impl Inspector {
    fn new(document: VrmDocument, layout: Layout) -> Self {
        Self {
            document,
            report: Report {
                layout,
                extensions: JsonObject::new(),
                attached: Vec::new(),
            },
        }
    }

    fn root<T: Extension>(&mut self, required: bool) -> anyhow::Result<()> {
        let record = match self.document.root_extension::<T>() {
            Ok(record) => record,
            Err(VrmError::MissingExtension(key)) if !required => {
                tracing::debug!(key, "extension not present");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        tracing::info!(extension = T::KEY, "decoded");
        self.document.set_root_extension(&record)?;
        self.report
            .extensions
            .insert(T::KEY.to_owned(), record.to_value()?);
        Ok(())
    }

    fn attached<T: Extension>(&mut self) -> anyhow::Result<()> {
        let collection = match T::PLACEMENT {
            Placement::Material => "materials",
            Placement::Node => "nodes",
            Placement::Root => bail!("{} is a root extension", T::KEY),
        };
        let records = self.document.attached_extensions::<T>()?;
        for (index, record) in records.into_iter().enumerate() {
            let Some(record) = record else { continue };
            tracing::info!(extension = T::KEY, collection, index, "decoded");
            self.document.set_attached_extension(index, &record)?;
            self.report.attached.push(AttachedExtension {
                extension: T::KEY,
                collection,
                index,
                value: record.to_value()?,
            });
        }
        Ok(())
    }

    fn run(&mut self) -> anyhow::Result<()> {
        match self.report.layout {
            Layout::Vrm0 => self.root::<vrm0::Vrm>(true)?,
            Layout::VrmcVrm0 => self.root::<vrmc::vrm0::Vrm>(true)?,
            Layout::Vrm1 => {
                self.root::<vrm1::Vrm>(true)?;
                self.root::<vrm1::spring_bone::SpringBone>(false)?;
                self.attached::<vrm1::mtoon::MToon>()?;
                self.attached::<vrm1::mtoon::HdrEmissiveMultiplier>()?;
                self.attached::<vrm1::node_constraint::NodeConstraint>()?;
            }
            Layout::VrmcVrm1 => {
                self.root::<vrmc::vrm1::Vrm>(true)?;
                self.root::<vrmc::vrm1::spring_bone::SpringBone>(false)?;
                self.attached::<vrmc::vrm1::mtoon::MToon>()?;
                self.attached::<vrmc::vrm1::mtoon::HdrEmissiveMultiplier>()?;
                self.attached::<vrmc::vrm1::node_constraint::NodeConstraint>()?;
            }
        }
        Ok(())
    }
}

/// `.gltf` and `.json` outputs get glTF JSON, anything else a GLB.
fn writes_json(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            extension.eq_ignore_ascii_case("gltf") || extension.eq_ignore_ascii_case("json")
        })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let options = Options::parse();

    let src = fs::read(&options.path)
        .with_context(|| format!("failed to read {}", options.path.display()))?;
    let document = VrmDocument::from_slice(&src)
        .with_context(|| format!("failed to load {}", options.path.display()))?;

    let layout = match (options.schema, document.detect()) {
        (Some(layout), _) => layout,
        (None, Some(version)) => Layout::for_version(version),
        (None, None) => bail!("{} has no VRM extension", options.path.display()),
    };
    tracing::info!(?layout, path = %options.path.display(), "inspecting");

    let mut inspector = Inspector::new(document, layout);
    inspector.run()?;

    let mut stdout = std::io::stdout().lock();
    if options.compact {
        serde_json::to_writer(&mut stdout, &inspector.report)?;
    } else {
        serde_json::to_writer_pretty(&mut stdout, &inspector.report)?;
    }
    writeln!(stdout)?;

    if let Some(output) = options.output {
        let bytes = if writes_json(&output) {
            if inspector.document.bin().is_some() {
                tracing::warn!("binary chunk is not written to glTF JSON output");
            }
            inspector.document.to_json()?
        } else {
            inspector.document.to_glb()?
        };
        fs::write(&output, bytes).with_context(|| format!("failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), "wrote output");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document(value: Value) -> VrmDocument {
        match value {
            Value::Object(json) => VrmDocument::from_json(json),
            _ => panic!("fixture is not an object"),
        }
    }

    #[test]
    fn options_parse() {
        let options =
            Options::try_parse_from(["vrm_inspect", "avatar.vrm", "--schema", "vrmc-vrm1", "-o", "out.glb"])
                .unwrap();
        assert_eq!(options.schema, Some(Layout::VrmcVrm1));
        assert_eq!(options.output, Some(PathBuf::from("out.glb")));
        assert!(!options.compact);

        assert!(Options::try_parse_from(["vrm_inspect", "avatar.vrm", "--schema", "vrm2"]).is_err());
    }

    #[test]
    fn output_format_follows_extension() {
        assert!(writes_json(Path::new("out.gltf")));
        assert!(writes_json(Path::new("out.JSON")));
        assert!(!writes_json(Path::new("out.vrm")));
        assert!(!writes_json(Path::new("out")));
    }

    #[test]
    fn zero_x_files_use_object_vectors() {
        assert_eq!(Layout::for_version(VrmVersion::Vrm0), Layout::VrmcVrm0);
        assert_eq!(Layout::for_version(VrmVersion::Vrm1), Layout::Vrm1);
    }

    #[test]
    fn report_lists_root_and_material_blocks() {
        let document = document(json!({
            "extensions": {
                "VRMC_vrm": {
                    "specVersion": "1.0",
                    "meta": { "name": "A", "authors": ["B"], "licenseUrl": "https://example.com" },
                    "humanoid": { "humanBones": {} },
                },
            },
            "materials": [
                {},
                { "extensions": { "VRMC_materials_mtoon": { "shadingToonyFactor": 0.5 } } },
            ],
        }));
        let mut inspector = Inspector::new(document, Layout::Vrm1);
        // The humanoid lacks every required bone.
        assert!(inspector.run().is_err());

        let document = document_with_bones();
        let mut inspector = Inspector::new(document, Layout::VrmcVrm1);
        inspector.run().unwrap();
        let report = serde_json::to_value(&inspector.report).unwrap();
        assert_eq!(report["layout"], "vrmc-vrm1");
        assert_eq!(report["extensions"]["VRMC_vrm"]["meta"]["name"], "A");
        assert!(report["extensions"].get("VRMC_springBone").is_none());
        assert_eq!(report["attached"][0]["collection"], "materials");
        assert_eq!(report["attached"][0]["index"], 1);
        assert_eq!(report["attached"][0]["value"]["shadingToonyFactor"], 0.5);
    }

    fn document_with_bones() -> VrmDocument {
        let bones = [
            "hips", "spine", "head", "leftUpperLeg", "leftLowerLeg", "leftFoot", "rightUpperLeg",
            "rightLowerLeg", "rightFoot", "leftUpperArm", "leftLowerArm", "leftHand",
            "rightUpperArm", "rightLowerArm", "rightHand",
        ];
        let human_bones: JsonObject = bones
            .iter()
            .enumerate()
            .map(|(node, name)| (name.to_string(), json!({ "node": node })))
            .collect();
        document(json!({
            "extensions": {
                "VRMC_vrm": {
                    "specVersion": "1.0",
                    "meta": { "name": "A", "authors": ["B"], "licenseUrl": "https://example.com" },
                    "humanoid": { "humanBones": human_bones },
                },
            },
            "materials": [
                {},
                { "extensions": { "VRMC_materials_mtoon": { "specVersion": "1.0", "shadingToonyFactor": 0.5 } } },
            ],
        }))
    }
}
