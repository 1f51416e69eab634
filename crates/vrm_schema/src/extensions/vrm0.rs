//! The `VRM` extension of VRM 0.x files.
//!
//! Every field is optional. Index fields are signed since exporters write
//! `-1` for "none".

use std::collections::BTreeMap;

use crate::enumeration::wire_enum;
use crate::extensions::{Extension, Placement};
use crate::record::record;

wire_enum! {
    pub enum PresetName {
        Unknown = "unknown",
        Neutral = "neutral",
        A = "a",
        I = "i",
        U = "u",
        E = "e",
        O = "o",
        Blink = "blink",
        Joy = "joy",
        Angry = "angry",
        Sorrow = "sorrow",
        Fun = "fun",
        LookUp = "lookup",
        LookDown = "lookdown",
        LookLeft = "lookleft",
        LookRight = "lookright",
        BlinkL = "blink_l",
        BlinkR = "blink_r",
    }
}

wire_enum! {
    pub enum LookAtTypeName {
        Bone = "Bone",
        BlendShape = "BlendShape",
    }
}

wire_enum! {
    pub enum Bone {
        Hips = "hips",
        LeftUpperLeg = "leftUpperLeg",
        RightUpperLeg = "rightUpperLeg",
        LeftLowerLeg = "leftLowerLeg",
        RightLowerLeg = "rightLowerLeg",
        LeftFoot = "leftFoot",
        RightFoot = "rightFoot",
        Spine = "spine",
        Chest = "chest",
        Neck = "neck",
        Head = "head",
        LeftShoulder = "leftShoulder",
        RightShoulder = "rightShoulder",
        LeftUpperArm = "leftUpperArm",
        RightUpperArm = "rightUpperArm",
        LeftLowerArm = "leftLowerArm",
        RightLowerArm = "rightLowerArm",
        LeftHand = "leftHand",
        RightHand = "rightHand",
        LeftToes = "leftToes",
        RightToes = "rightToes",
        LeftEye = "leftEye",
        RightEye = "rightEye",
        Jaw = "jaw",
        LeftThumbProximal = "leftThumbProximal",
        LeftThumbIntermediate = "leftThumbIntermediate",
        LeftThumbDistal = "leftThumbDistal",
        LeftIndexProximal = "leftIndexProximal",
        LeftIndexIntermediate = "leftIndexIntermediate",
        LeftIndexDistal = "leftIndexDistal",
        LeftMiddleProximal = "leftMiddleProximal",
        LeftMiddleIntermediate = "leftMiddleIntermediate",
        LeftMiddleDistal = "leftMiddleDistal",
        LeftRingProximal = "leftRingProximal",
        LeftRingIntermediate = "leftRingIntermediate",
        LeftRingDistal = "leftRingDistal",
        LeftLittleProximal = "leftLittleProximal",
        LeftLittleIntermediate = "leftLittleIntermediate",
        LeftLittleDistal = "leftLittleDistal",
        RightThumbProximal = "rightThumbProximal",
        RightThumbIntermediate = "rightThumbIntermediate",
        RightThumbDistal = "rightThumbDistal",
        RightIndexProximal = "rightIndexProximal",
        RightIndexIntermediate = "rightIndexIntermediate",
        RightIndexDistal = "rightIndexDistal",
        RightMiddleProximal = "rightMiddleProximal",
        RightMiddleIntermediate = "rightMiddleIntermediate",
        RightMiddleDistal = "rightMiddleDistal",
        RightRingProximal = "rightRingProximal",
        RightRingIntermediate = "rightRingIntermediate",
        RightRingDistal = "rightRingDistal",
        RightLittleProximal = "rightLittleProximal",
        RightLittleIntermediate = "rightLittleIntermediate",
        RightLittleDistal = "rightLittleDistal",
        UpperChest = "upperChest",
    }
}

wire_enum! {
    pub enum AllowedUserName {
        OnlyAuthor = "OnlyAuthor",
        ExplicitlyLicensedPerson = "ExplicitlyLicensedPerson",
        Everyone = "Everyone",
    }
}

wire_enum! {
    pub enum ViolentUsage {
        Disallow = "Disallow",
        Allow = "Allow",
    }
}

wire_enum! {
    pub enum SexualUsage {
        Disallow = "Disallow",
        Allow = "Allow",
    }
}

wire_enum! {
    pub enum CommercialUsage {
        Disallow = "Disallow",
        Allow = "Allow",
    }
}

wire_enum! {
    pub enum LicenseName {
        RedistributionProhibited = "Redistribution_Prohibited",
        Cc0 = "CC0",
        CcBy = "CC_BY",
        CcByNc = "CC_BY_NC",
        CcBySa = "CC_BY_SA",
        CcByNcSa = "CC_BY_NC_SA",
        CcByNd = "CC_BY_ND",
        CcByNcNd = "CC_BY_NC_ND",
        Other = "Other",
    }
}

record! {
    pub struct SecondaryAnimationSpring [extras] {
        comment: String => "comment", omit_default;
        // Misspelled on the wire.
        stiffness: f32 => "stiffiness", omit_default;
        gravity_power: f32 => "gravityPower", omit_default;
        gravity_dir: Vec<f32> => "gravityDir", omit_default;
        drag_force: f32 => "dragForce", omit_default;
        center: i32 => "center", omit_default;
        hit_radius: f32 => "hitRadius", omit_default;
        bones: Vec<i32> => "bones", omit_default;
        collider_groups: Vec<i32> => "colliderGroups", omit_default;
    }
}

record! {
    pub struct SecondaryAnimationCollider [extras] {
        offset: Vec<f32> => "offset", omit_default;
        radius: f32 => "radius", omit_default;
    }
}

record! {
    pub struct SecondaryAnimationColliderGroup [extras] {
        node: i32 => "node", omit_default;
        colliders: Vec<SecondaryAnimationCollider> => "colliders", omit_default;
    }
}

record! {
    pub struct SecondaryAnimation [extras] {
        bone_groups: Vec<SecondaryAnimationSpring> => "boneGroups", omit_default;
        collider_groups: Vec<SecondaryAnimationColliderGroup> => "colliderGroups", omit_default;
    }
}

record! {
    pub struct BlendShapeBind [extras] {
        mesh: i32 => "mesh", omit_default;
        index: i32 => "index", omit_default;
        weight: f32 => "weight", omit_default;
    }
}

record! {
    pub struct BlendShapeMaterialBind [extras] {
        material_name: String => "materialName", omit_default;
        property_name: String => "propertyName", omit_default;
        target_value: Vec<f32> => "targetValue", omit_default;
    }
}

record! {
    pub struct BlendShapeGroup [extras] {
        name: String => "name", omit_default;
        preset_name: PresetName => "presetName", omit_default;
        binds: Vec<BlendShapeBind> => "binds", omit_default;
        material_values: Vec<BlendShapeMaterialBind> => "materialValues", omit_default;
        is_binary: bool => "isBinary", omit_default;
    }
}

record! {
    pub struct BlendShapeMaster [extras] {
        blend_shape_groups: Vec<BlendShapeGroup> => "blendShapeGroups", omit_default;
    }
}

record! {
    pub struct FirstPersonDegreeMap [extras] {
        curve: Vec<f32> => "curve", omit_default;
        x_range: f32 => "xRange", omit_default;
        y_range: f32 => "yRange", omit_default;
    }
}

record! {
    pub struct FirstPersonMeshAnnotation [extras] {
        mesh: i32 => "mesh", omit_default;
        /// One of `Auto`, `Both`, `ThirdPersonOnly` or `FirstPersonOnly`,
        /// kept verbatim.
        first_person_flag: String => "firstPersonFlag", omit_default;
    }
}

record! {
    pub struct FirstPerson [extras] {
        first_person_bone: i32 => "firstPersonBone", omit_default;
        first_person_bone_offset: Vec<f32> => "firstPersonBoneOffset", omit_default;
        mesh_annotations: Vec<FirstPersonMeshAnnotation> => "meshAnnotations", omit_default;
        look_at_type_name: LookAtTypeName => "lookAtTypeName", omit_default;
        look_at_horizontal_inner: FirstPersonDegreeMap => "lookAtHorizontalInner", optional;
        look_at_horizontal_outer: FirstPersonDegreeMap => "lookAtHorizontalOuter", optional;
        look_at_vertical_down: FirstPersonDegreeMap => "lookAtVerticalDown", optional;
        look_at_vertical_up: FirstPersonDegreeMap => "lookAtVerticalUp", optional;
    }
}

record! {
    pub struct HumanoidBone [extras] {
        bone: Bone => "bone", omit_default;
        node: i32 => "node", omit_default;
        use_default_values: bool => "useDefaultValues", omit_default;
        min: Vec<f32> => "min", omit_default;
        max: Vec<f32> => "max", omit_default;
        center: Vec<f32> => "center", omit_default;
        axis_length: f32 => "axisLength", omit_default;
    }
}

record! {
    pub struct Humanoid [extras] {
        human_bones: Vec<HumanoidBone> => "humanBones", omit_default;
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
    /// The node mapped to `bone`, if the avatar maps it.
    pub fn bone_node(&self, bone: Bone) -> Option<i32> {
        self.human_bones
            .iter()
            .find(|human_bone| human_bone.bone == bone)
            .map(|human_bone| human_bone.node)
    }
}

record! {
    /// Unity material properties for one glTF material, matched by position.
    pub struct Material [extras] {
        name: String => "name", omit_default;
        shader: String => "shader", omit_default;
        render_queue: i32 => "renderQueue", omit_default;
        float_properties: BTreeMap<String, f32> => "floatProperties", omit_default;
        vector_properties: BTreeMap<String, Vec<f32>> => "vectorProperties", omit_default;
        texture_properties: BTreeMap<String, i32> => "textureProperties", omit_default;
        keyword_map: BTreeMap<String, bool> => "keywordMap", omit_default;
        tag_map: BTreeMap<String, String> => "tagMap", omit_default;
    }
}

record! {
    pub struct Meta [extras] {
        title: String => "title", omit_default;
        version: String => "version", omit_default;
        author: String => "author", omit_default;
        contact_information: String => "contactInformation", omit_default;
        reference: String => "reference", omit_default;
        /// Thumbnail texture index.
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
    pub struct Vrm [extras] {
        exporter_version: String => "exporterVersion", omit_default;
        spec_version: String => "specVersion", omit_default;
        meta: Meta => "meta", optional;
        humanoid: Humanoid => "humanoid", optional;
        first_person: FirstPerson => "firstPerson", optional;
        blend_shape_master: BlendShapeMaster => "blendShapeMaster", optional;
        secondary_animation: SecondaryAnimation => "secondaryAnimation", optional;
        material_properties: Vec<Material> => "materialProperties", omit_default;
    }
}

impl Extension for Vrm {
    const KEY: &'static str = "VRM";
    const PLACEMENT: Placement = Placement::Root;
}
