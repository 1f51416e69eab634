use crate::enumeration::wire_enum;
use crate::extensions::{Extension, Placement};
use crate::record::record;

wire_enum! {
    pub enum ObjectSpace {
        Model = "model",
        Local = "local",
    }
}

record! {
    pub struct AimConstraint [extras] {
        source: u32 => "source", required;
        source_space: ObjectSpace => "sourceSpace", omit_default;
        destination_space: ObjectSpace => "destinationSpace", omit_default;
        aim_vector: Vec<f32> => "aimVector", default(vec![0.0, 0.0, 1.0]);
        up_vector: Vec<f32> => "upVector", default(vec![0.0, 0.0, 1.0]);
        freeze_axes: Vec<bool> => "freezeAxes", default(vec![true, true]);
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    pub struct PositionConstraint [extras] {
        source: u32 => "source", required;
        source_space: ObjectSpace => "sourceSpace", omit_default;
        destination_space: ObjectSpace => "destinationSpace", omit_default;
        freeze_axes: Vec<bool> => "freezeAxes", default(vec![true, true, true]);
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    pub struct RotationConstraint [extras] {
        source: u32 => "source", required;
        source_space: ObjectSpace => "sourceSpace", omit_default;
        destination_space: ObjectSpace => "destinationSpace", omit_default;
        freeze_axes: Vec<bool> => "freezeAxes", default(vec![true, true, true]);
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    pub struct Constraint [extras] {
        position: Option<PositionConstraint> => "position", omit_default;
        rotation: Option<RotationConstraint> => "rotation", omit_default;
        aim: Option<AimConstraint> => "aim", omit_default;
    }
}

record! {
    pub struct NodeConstraint [extras] {
        spec_version: String => "specVersion", omit_default;
        constraint: Constraint => "constraint", optional;
    }
}

impl Extension for NodeConstraint {
    const KEY: &'static str = "VRMC_node_constraint";
    const PLACEMENT: Placement = Placement::Node;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::record::Record;

    #[test]
    fn aim_constraint_defaults() {
        let extension = NodeConstraint::from_value(&json!({
            "specVersion": "1.0-draft",
            "constraint": { "aim": { "source": 3, "sourceSpace": "local", "weight": 0.5 } },
        }))
        .unwrap();
        let aim = extension.constraint.aim.as_ref().unwrap();
        assert_eq!(aim.source_space, ObjectSpace::Local);
        assert_eq!(aim.destination_space, ObjectSpace::Model);
        assert_eq!(aim.freeze_axes, vec![true, true]);
        assert_eq!(aim.aim_vector, vec![0.0, 0.0, 1.0]);
        assert!(extension.constraint.position.is_none());

        assert_eq!(
            extension.to_value().unwrap(),
            json!({
                "specVersion": "1.0-draft",
                "constraint": { "aim": { "source": 3, "sourceSpace": "local", "weight": 0.5 } },
            })
        );
    }

    #[test]
    fn unknown_space_falls_back_to_model() {
        let rotation = RotationConstraint::from_value(&json!({ "source": 1, "sourceSpace": "world" }))
            .unwrap();
        assert_eq!(rotation.source_space, ObjectSpace::Model);
    }
}
