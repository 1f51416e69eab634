use crate::extensions::{Extension, Placement};
use crate::record::record;

record! {
    pub struct ColliderShapeSphere [extras] {
        offset: Vec<f32> => "offset", default(vec![0.0, 0.0, 0.0]);
        radius: f32 => "radius", omit_default;
    }
}

record! {
    pub struct ColliderShapeCapsule [extras] {
        offset: Vec<f32> => "offset", default(vec![0.0, 0.0, 0.0]);
        radius: f32 => "radius", omit_default;
        tail: Vec<f32> => "tail", default(vec![0.0, 0.0, 0.0]);
    }
}

record! {
    /// Exactly one of the shapes is expected to be set.
    pub struct ColliderShape [extras] {
        sphere: Option<ColliderShapeSphere> => "sphere", omit_default;
        capsule: Option<ColliderShapeCapsule> => "capsule", omit_default;
    }
}

record! {
    pub struct Collider [extras] {
        node: u32 => "node", required;
        shape: ColliderShape => "shape", required;
    }
}

record! {
    pub struct ColliderGroup [extras] {
        name: String => "name", omit_default;
        /// Indices into `SpringBone::colliders`.
        colliders: Vec<u32> => "colliders", required;
    }
}

record! {
    pub struct SpringBoneJoint [extras] {
        node: u32 => "node", required;
        hit_radius: f32 => "hitRadius", omit_default;
        stiffness: f32 => "stiffness", default(1.0);
        gravity_power: f32 => "gravityPower", omit_default;
        gravity_dir: Vec<f32> => "gravityDir", default(vec![0.0, -1.0, 0.0]);
        drag_force: f32 => "dragForce", default(0.5);
    }
}

record! {
    pub struct Spring [extras] {
        name: String => "name", omit_default;
        joints: Vec<SpringBoneJoint> => "joints", required;
        collider_groups: Vec<u32> => "colliderGroups", omit_default;
    }
}

record! {
    pub struct SpringBone [extras] {
        spec_version: String => "specVersion", omit_default;
        colliders: Vec<Collider> => "colliders", omit_default;
        collider_groups: Vec<ColliderGroup> => "colliderGroups", omit_default;
        springs: Vec<Spring> => "springs", omit_default;
    }
}

impl Extension for SpringBone {
    const KEY: &'static str = "VRMC_springBone";
    const PLACEMENT: Placement = Placement::Root;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::SchemaError;
    use crate::record::Record;

    #[test]
    fn joint_defaults() {
        let joint = SpringBoneJoint::from_value(&json!({ "node": 12 })).unwrap();
        assert_eq!(joint.stiffness, 1.0);
        assert_eq!(joint.drag_force, 0.5);
        assert_eq!(joint.gravity_dir, vec![0.0, -1.0, 0.0]);
        assert_eq!(joint.to_value().unwrap(), json!({ "node": 12 }));

        let err = SpringBoneJoint::from_value(&json!({ "hitRadius": 0.1 })).unwrap_err();
        assert_eq!(err, SchemaError::MissingRequiredField("node".into()));
    }

    #[test]
    fn collider_shapes() {
        let collider = Collider::from_value(&json!({
            "node": 4,
            "shape": { "capsule": { "radius": 0.05, "tail": [0, 0.1, 0] } },
        }))
        .unwrap();
        assert!(collider.shape.sphere.is_none());
        let capsule = collider.shape.capsule.as_ref().unwrap();
        assert_eq!(capsule.offset, vec![0.0, 0.0, 0.0]);
        assert_eq!(capsule.tail, vec![0.0, 0.1, 0.0]);

        let encoded = collider.to_value().unwrap();
        assert!(encoded["shape"].get("sphere").is_none());
        assert!(encoded["shape"]["capsule"].get("offset").is_none());
    }

    #[test]
    fn spring_round_trip() {
        let spring = Spring {
            name: "hair".into(),
            joints: vec![
                SpringBoneJoint {
                    node: 20,
                    hit_radius: 0.02,
                    drag_force: 0.4,
                    ..Default::default()
                },
                SpringBoneJoint {
                    node: 21,
                    gravity_power: 0.3,
                    gravity_dir: vec![0.0, 0.0, -1.0],
                    ..Default::default()
                },
            ],
            collider_groups: vec![0, 2],
            ..Default::default()
        };
        assert_eq!(Spring::from_value(&spring.to_value().unwrap()).unwrap(), spring);
    }

    #[test]
    fn unencodable_radius_is_an_error() {
        let joint = SpringBoneJoint {
            node: 1,
            hit_radius: f32::NAN,
            ..Default::default()
        };
        let err = joint.to_value().unwrap_err();
        assert_eq!(err.field(), Some("hitRadius"));

        let spring = Spring {
            joints: vec![joint],
            ..Default::default()
        };
        assert_eq!(spring.to_value().unwrap_err().field(), Some("hitRadius"));
    }

    #[test]
    fn named_keys_in_extras_are_not_written() {
        let mut joint = SpringBoneJoint {
            node: 1,
            ..Default::default()
        };
        joint.extras.insert("stiffness".into(), json!(9));
        let encoded = joint.to_value().unwrap();
        assert_eq!(encoded, json!({ "node": 1 }));
        assert_eq!(SpringBoneJoint::from_value(&encoded).unwrap().stiffness, 1.0);
    }
}
