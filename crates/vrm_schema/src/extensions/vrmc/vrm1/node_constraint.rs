use crate::enumeration::wire_enum;
use crate::extensions::{Extension, Placement};
use crate::record::record;

wire_enum! {
    pub enum AimAxis {
        PositiveX = "PositiveX",
        NegativeX = "NegativeX",
        PositiveY = "PositiveY",
        NegativeY = "NegativeY",
        PositiveZ = "PositiveZ",
        NegativeZ = "NegativeZ",
    }
}

wire_enum! {
    pub enum RollAxis {
        X = "X",
        Y = "Y",
        Z = "Z",
    }
}

record! {
    pub struct AimConstraint {
        source: u32 => "source", required;
        aim_axis: AimAxis => "aimAxis", required;
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    pub struct RollConstraint {
        source: u32 => "source", required;
        roll_axis: RollAxis => "rollAxis", required;
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    pub struct RotationConstraint {
        source: u32 => "source", required;
        weight: f32 => "weight", default(1.0);
    }
}

record! {
    /// At most one constraint is expected per node.
    pub struct Constraint {
        roll: Option<RollConstraint> => "roll", omit_default;
        aim: Option<AimConstraint> => "aim", omit_default;
        rotation: Option<RotationConstraint> => "rotation", omit_default;
    }
}

record! {
    pub struct NodeConstraint {
        spec_version: String => "specVersion", required;
        constraint: Constraint => "constraint", required;
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
    use crate::enumeration::{token_for_code, WireEnum};
    use crate::error::SchemaError;
    use crate::record::Record;

    #[test]
    fn roll_constraint() {
        let extension = NodeConstraint::from_value(&json!({
            "specVersion": "1.0",
            "constraint": { "roll": { "source": 12, "rollAxis": "Y", "weight": 0.5 } },
        }))
        .unwrap();
        let roll = extension.constraint.roll.as_ref().unwrap();
        assert_eq!(roll.roll_axis, RollAxis::Y);
        assert_eq!(roll.weight, 0.5);
    }

    #[test]
    fn constraint_block_is_required() {
        let err = NodeConstraint::from_value(&json!({ "specVersion": "1.0" })).unwrap_err();
        assert_eq!(err, SchemaError::MissingRequiredField("constraint".into()));
    }

    #[test]
    fn unknown_axis_is_ignored() {
        let aim = AimConstraint::from_value(&json!({ "source": 1, "aimAxis": "Up" })).unwrap();
        assert_eq!(aim.aim_axis, AimAxis::PositiveX);
    }

    #[test]
    fn axis_codes_out_of_range_fail() {
        assert_eq!(token_for_code::<AimAxis>(AimAxis::NegativeZ.code()).unwrap(), "NegativeZ");
        assert_eq!(
            token_for_code::<RollAxis>(3),
            Err(SchemaError::InvalidEnumerator { enum_type: "RollAxis", code: 3 })
        );
    }
}
