use std::collections::BTreeMap;

use glam::Vec3;

use crate::extensions::{Extension, Placement};
use crate::record::record;

pub use crate::extensions::vrm0::{
    AllowedUserName, Bone, CommercialUsage, LicenseName, LookAtTypeName, PresetName,
    SexualUsage, ViolentUsage,
};

record! {
    /// A 3-vector written as `{"x": .., "y": .., "z": ..}`.
    #[derive(Copy)]
    pub struct Vector3 {
        x: f32 => "x", required;
        y: f32 => "y", required;
        z: f32 => "z", required;
    }
}

impl From<Vector3> for Vec3 {
    fn from(value: Vector3) -> Self {
        Vec3::new(value.x, value.y, value.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(value: Vec3) -> Self {
        Vector3 {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

record! {
    pub struct SecondaryAnimationSpring {
        comment: String => "comment", omit_default;
        stiffness: f32 => "stiffiness", omit_default;
        gravity_power: f32 => "gravityPower", omit_default;
        gravity_dir: Vector3 => "gravityDir", optional;
        drag_force: f32 => "dragForce", omit_default;
        center: i32 => "center", omit_default;
        hit_radius: f32 => "hitRadius", omit_default;
        bones: Vec<i32> => "bones", optional;
        collider_groups: Vec<i32> => "colliderGroups", optional;
    }
}

record! {
    pub struct SecondaryAnimationCollider {
        offset: Vector3 => "offset", optional;
        radius: f32 => "radius", omit_default;
    }
}

record! {
    pub struct SecondaryAnimationColliderGroup {
        node: i32 => "node", omit_default;
        colliders: Vec<SecondaryAnimationCollider> => "colliders", optional;
    }
}

record! {
    pub struct SecondaryAnimation {
        bone_groups: Vec<SecondaryAnimationSpring> => "boneGroups", optional;
        collider_groups: Vec<SecondaryAnimationColliderGroup> => "colliderGroups", optional;
    }
}

record! {
    pub struct BlendShapeBind {
        mesh: i32 => "mesh", omit_default;
        index: i32 => "index", omit_default;
        weight: f32 => "weight", omit_default;
    }
}

record! {
    pub struct BlendShapeMaterialBind {
        material_name: String => "materialName", omit_default;
        property_name: String => "propertyName", omit_default;
        target_value: Vec<f32> => "targetValue", optional;
    }
}

record! {
    pub struct BlendShapeGroup {
        name: String => "name", omit_default;
        preset_name: PresetName => "presetName", omit_default;
        binds: Vec<BlendShapeBind> => "binds", optional;
        material_values: Vec<BlendShapeMaterialBind> => "materialValues", optional;
        is_binary: bool => "isBinary", omit_default;
    }
}

record! {
    pub struct BlendShapeMaster {
        blend_shape_groups: Vec<BlendShapeGroup> => "blendShapeGroups", optional;
    }
}

record! {
    pub struct FirstPersonDegreeMap {
        curve: Vec<f32> => "curve", optional;
        x_range: f32 => "xRange", omit_default;
        y_range: f32 => "yRange", omit_default;
    }
}

record! {
    pub struct FirstPersonMeshAnnotation {
        mesh: i32 => "mesh", omit_default;
        first_person_flag: String => "firstPersonFlag", omit_default;
    }
}

record! {
    pub struct FirstPerson {
        first_person_bone: i32 => "firstPersonBone", omit_default;
        first_person_bone_offset: Vector3 => "firstPersonBoneOffset", optional;
        mesh_annotations: Vec<FirstPersonMeshAnnotation> => "meshAnnotations", optional;
        look_at_type_name: LookAtTypeName => "lookAtTypeName", omit_default;
        look_at_horizontal_inner: FirstPersonDegreeMap => "lookAtHorizontalInner", optional;
        look_at_horizontal_outer: FirstPersonDegreeMap => "lookAtHorizontalOuter", optional;
        look_at_vertical_down: FirstPersonDegreeMap => "lookAtVerticalDown", optional;
        look_at_vertical_up: FirstPersonDegreeMap => "lookAtVerticalUp", optional;
    }
}

record! {
    pub struct HumanoidBone {
        bone: Bone => "bone", omit_default;
        node: i32 => "node", omit_default;
        use_default_values: bool => "useDefaultValues", omit_default;
        min: Vector3 => "min", optional;
        max: Vector3 => "max", optional;
        center: Vector3 => "center", optional;
        axis_length: f32 => "axisLength", omit_default;
    }
}

record! {
    pub struct Humanoid {
        human_bones: Vec<HumanoidBone> => "humanBones", optional;
        arm_stretch: f32 => "armStretch", omit_default;
        leg_stretch: f32 => "legStretch", omit_default;
        upper_arm_twist: f32 => "upperArmTwist", omit_default;
        lower_arm_twist: f32 => "lowerArmTwist", omit_default;
        upper_leg_twist: f32 => "upperLegTwist", omit_default;
        lower_leg_twist: f32 => "lowerLegTwist", omit_default;
        feet_spacing: f32 => "feetSpacing", omit_default;
        has_translation_dof: bool => "hasTranslationDoF", omit_default;
    }
}

impl Humanoid {
    pub fn bone_node(&self, bone: Bone) -> Option<i32> {
        self.human_bones
            .iter()
            .find(|human_bone| human_bone.bone == bone)
            .map(|human_bone| human_bone.node)
    }
}

record! {
    pub struct Material {
        name: String => "name", omit_default;
        shader: String => "shader", omit_default;
        render_queue: i32 => "renderQueue", omit_default;
        float_properties: BTreeMap<String, f32> => "floatProperties", optional;
        vector_properties: BTreeMap<String, Vec<f32>> => "vectorProperties", optional;
        texture_properties: BTreeMap<String, i32> => "textureProperties", optional;
        keyword_map: BTreeMap<String, bool> => "keywordMap", optional;
        tag_map: BTreeMap<String, String> => "tagMap", optional;
    }
}

record! {
    pub struct Meta {
        title: String => "title", omit_default;
        version: String => "version", omit_default;
        author: String => "author", omit_default;
        contact_information: String => "contactInformation", omit_default;
        reference: String => "reference", omit_default;
        texture: i32 => "texture", omit_default;
        allowed_user_name: AllowedUserName => "allowedUserName", omit_default;
        violent_usage: ViolentUsage => "violentUssageName", omit_default;
        sexual_usage: SexualUsage => "sexualUssageName", omit_default;
        commercial_usage: CommercialUsage => "commercialUssageName", omit_default;
        other_permission_url: String => "otherPermissionUrl", omit_default;
        license_name: LicenseName => "licenseName", omit_default;
        other_license_url: String => "otherLicenseUrl", omit_default;
    }
}

record! {
    pub struct Vrm {
        exporter_version: String => "exporterVersion", omit_default;
        spec_version: String => "specVersion", omit_default;
        meta: Meta => "meta", optional;
        humanoid: Humanoid => "humanoid", optional;
        first_person: FirstPerson => "firstPerson", optional;
        blend_shape_master: BlendShapeMaster => "blendShapeMaster", optional;
        secondary_animation: SecondaryAnimation => "secondaryAnimation", optional;
        material_properties: Vec<Material> => "materialProperties", optional;
    }
}

impl Extension for Vrm {
    const KEY: &'static str = "VRM";
    const PLACEMENT: Placement = Placement::Root;
}
