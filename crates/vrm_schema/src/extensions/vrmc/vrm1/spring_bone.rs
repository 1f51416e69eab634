use glam::Vec3;

use crate::extensions::{Extension, Placement};
use crate::record::record;

record! {
    pub struct ColliderShapeSphere {
        offset: Vec3 => "offset", default(Vec3::ZERO);
        radius: f32 => "radius", omit_default;
    }
}

record! {
    pub struct ColliderShapeCapsule {
        offset: Vec3 => "offset", default(Vec3::ZERO);
        radius: f32 => "radius", omit_default;
        tail: Vec3 => "tail", default(Vec3::ZERO);
    }
}

record! {
    pub struct ColliderShape {
        sphere: Option<ColliderShapeSphere> => "sphere", omit_default;
        capsule: Option<ColliderShapeCapsule> => "capsule", omit_default;
    }
}

record! {
    pub struct Collider {
        node: u32 => "node", required;
        shape: ColliderShape => "shape", required;
    }
}

record! {
    pub struct ColliderGroup {
        name: String => "name", omit_default;
        colliders: Vec<u32> => "colliders", required;
    }
}

record! {
    pub struct SpringBoneJoint {
        node: u32 => "node", required;
        hit_radius: f32 => "hitRadius", omit_default;
        stiffness: f32 => "stiffness", default(1.0);
        gravity_power: f32 => "gravityPower", omit_default;
        gravity_dir: Vec3 => "gravityDir", default(Vec3::NEG_Y);
        drag_force: f32 => "dragForce", default(0.5);
    }
}

record! {
    pub struct Spring {
        name: String => "name", omit_default;
        joints: Vec<SpringBoneJoint> => "joints", required;
        collider_groups: Vec<u32> => "colliderGroups", optional;
        /// Node whose space the simulation runs in; 0 when unset.
        center: u32 => "center", omit_default;
    }
}

record! {
    pub struct SpringBone {
        spec_version: String => "specVersion", required;
        colliders: Vec<Collider> => "colliders", optional;
        collider_groups: Vec<ColliderGroup> => "colliderGroups", optional;
        springs: Vec<Spring> => "springs", optional;
    }
}

impl SpringBone {
    /// Node indices of every joint, spring by spring.
    pub fn joint_nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.springs
            .iter()
            .flat_map(|spring| spring.joints.iter().map(|joint| joint.node))
    }
}

impl Extension for SpringBone {
    const KEY: &'static str = "VRMC_springBone";
    const PLACEMENT: Placement = Placement::Root;
}
