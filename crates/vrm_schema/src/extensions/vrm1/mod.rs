//! The VRM 1.0 extension family, keeping unknown members of every record.

use std::collections::BTreeMap;

use crate::enumeration::wire_enum;
use crate::extensions::{human_bones, Extension, Placement};
use crate::record::record;

pub mod mtoon;
pub mod node_constraint;
pub mod spring_bone;

wire_enum! {
    pub enum MaterialColorType {
        Color = "color",
        EmissionColor = "emissionColor",
        ShadeColor = "shadeColor",
        RimColor = "rimColor",
        OutlineColor = "outlineColor",
    }
}

wire_enum! {
    pub enum MeshAnnotationType {
        Auto = "auto",
        Both = "both",
        ThirdPersonOnly = "thirdPersonOnly",
        FirstPersonOnly = "firstPersonOnly",
    }
}

wire_enum! {
    pub enum AvatarPermission {
        OnlyAuthor = "onlyAuthor",
        OnlySeparatelyLicensedPerson = "onlySeparatelyLicensedPerson",
        Everyone = "everyone",
    }
}

wire_enum! {
    pub enum CommercialUsage {
        PersonalNonProfit = "personalNonProfit",
        PersonalProfit = "personalProfit",
        Corporation = "corporation",
    }
}

wire_enum! {
    pub enum CreditNotation {
        Required = "required",
        Unnecessary = "unnecessary",
    }
}

wire_enum! {
    pub enum Modification {
        Prohibited = "prohibited",
        AllowModification = "allowModification",
        AllowModificationRedistribution = "allowModificationRedistribution",
    }
}

wire_enum! {
    pub enum ExpressionOverride {
        None = "none",
        Block = "block",
        Blend = "blend",
    }
}

wire_enum! {
    pub enum LookAtMode {
        Bone = "bone",
        Expression = "expression",
    }
}

record! {
    pub struct MaterialColorBind [extras] {
        material: u32 => "material", required;
        kind: MaterialColorType => "type", required;
        target_value: Vec<f32> => "targetValue", required;
    }
}

record! {
    pub struct MorphTargetBind [extras] {
        node: u32 => "node", required;
        index: u32 => "index", required;
        weight: f32 => "weight", required;
    }
}

record! {
    pub struct TextureTransformBind [extras] {
        material: u32 => "material", required;
        scale: Vec<f32> => "scale", default(vec![1.0, 1.0]);
        offset: Vec<f32> => "offset", default(vec![0.0, 0.0]);
    }
}

record! {
    pub struct Expression [extras] {
        morph_target_binds: Vec<MorphTargetBind> => "morphTargetBinds", omit_default;
        material_color_binds: Vec<MaterialColorBind> => "materialColorBinds", omit_default;
        texture_transform_binds: Vec<TextureTransformBind> => "textureTransformBinds", omit_default;
        is_binary: bool => "isBinary", omit_default;
        override_blink: ExpressionOverride => "overrideBlink", omit_default;
        override_look_at: ExpressionOverride => "overrideLookAt", omit_default;
        override_mouth: ExpressionOverride => "overrideMouth", omit_default;
    }
}

record! {
    pub struct ExpressionPresets [extras] {
        happy: Option<Expression> => "happy", omit_default;
        angry: Option<Expression> => "angry", omit_default;
        sad: Option<Expression> => "sad", omit_default;
        relaxed: Option<Expression> => "relaxed", omit_default;
        surprised: Option<Expression> => "surprised", omit_default;
        aa: Option<Expression> => "aa", omit_default;
        ih: Option<Expression> => "ih", omit_default;
        ou: Option<Expression> => "ou", omit_default;
        ee: Option<Expression> => "ee", omit_default;
        oh: Option<Expression> => "oh", omit_default;
        blink: Option<Expression> => "blink", omit_default;
        blink_left: Option<Expression> => "blinkLeft", omit_default;
        blink_right: Option<Expression> => "blinkRight", omit_default;
        look_up: Option<Expression> => "lookUp", omit_default;
        look_down: Option<Expression> => "lookDown", omit_default;
        look_left: Option<Expression> => "lookLeft", omit_default;
        look_right: Option<Expression> => "lookRight", omit_default;
    }
}

record! {
    pub struct Expressions [extras] {
        preset: ExpressionPresets => "preset", optional;
        /// Avatar-specific expressions by name.
        custom: BTreeMap<String, Expression> => "custom", omit_default;
    }
}

record! {
    pub struct MeshAnnotation [extras] {
        node: u32 => "node", required;
        kind: MeshAnnotationType => "type", required;
    }
}

record! {
    pub struct FirstPerson [extras] {
        mesh_annotations: Vec<MeshAnnotation> => "meshAnnotations", omit_default;
    }
}

record! {
    pub struct HumanBone [extras] {
        node: u32 => "node", required;
    }
}

human_bones! {
    pub struct HumanBones [extras] {
        required {
            hips => "hips",
            spine => "spine",
            head => "head",
            left_upper_leg => "leftUpperLeg",
            left_lower_leg => "leftLowerLeg",
            left_foot => "leftFoot",
            right_upper_leg => "rightUpperLeg",
            right_lower_leg => "rightLowerLeg",
            right_foot => "rightFoot",
            left_upper_arm => "leftUpperArm",
            left_lower_arm => "leftLowerArm",
            left_hand => "leftHand",
            right_upper_arm => "rightUpperArm",
            right_lower_arm => "rightLowerArm",
            right_hand => "rightHand",
        }
        optional {
            chest => "chest",
            upper_chest => "upperChest",
            neck => "neck",
            left_eye => "leftEye",
            right_eye => "rightEye",
            jaw => "jaw",
            left_toes => "leftToes",
            right_toes => "rightToes",
            left_shoulder => "leftShoulder",
            right_shoulder => "rightShoulder",
            left_thumb_metacarpal => "leftThumbMetacarpal",
            left_thumb_proximal => "leftThumbProximal",
            left_thumb_distal => "leftThumbDistal",
            left_index_proximal => "leftIndexProximal",
            left_index_intermediate => "leftIndexIntermediate",
            left_index_distal => "leftIndexDistal",
            left_middle_proximal => "leftMiddleProximal",
            left_middle_intermediate => "leftMiddleIntermediate",
            left_middle_distal => "leftMiddleDistal",
            left_ring_proximal => "leftRingProximal",
            left_ring_intermediate => "leftRingIntermediate",
            left_ring_distal => "leftRingDistal",
            left_little_proximal => "leftLittleProximal",
            left_little_intermediate => "leftLittleIntermediate",
            left_little_distal => "leftLittleDistal",
            right_thumb_metacarpal => "rightThumbMetacarpal",
            right_thumb_proximal => "rightThumbProximal",
            right_thumb_distal => "rightThumbDistal",
            right_index_proximal => "rightIndexProximal",
            right_index_intermediate => "rightIndexIntermediate",
            right_index_distal => "rightIndexDistal",
            right_middle_proximal => "rightMiddleProximal",
            right_middle_intermediate => "rightMiddleIntermediate",
            right_middle_distal => "rightMiddleDistal",
            right_ring_proximal => "rightRingProximal",
            right_ring_intermediate => "rightRingIntermediate",
            right_ring_distal => "rightRingDistal",
            right_little_proximal => "rightLittleProximal",
            right_little_intermediate => "rightLittleIntermediate",
            right_little_distal => "rightLittleDistal",
        }
    }
}

record! {
    pub struct Humanoid [extras] {
        human_bones: HumanBones => "humanBones", required;
    }
}

record! {
    pub struct LookAtRangeMap [extras] {
        input_max_value: f32 => "inputMaxValue", omit_default;
        output_scale: f32 => "outputScale", omit_default;
    }
}

record! {
    pub struct LookAt [extras] {
        offset_from_head_bone: Vec<f32> => "offsetFromHeadBone", omit_default;
        mode: LookAtMode => "type", omit_default;
        range_map_horizontal_inner: LookAtRangeMap => "rangeMapHorizontalInner", optional;
        range_map_horizontal_outer: LookAtRangeMap => "rangeMapHorizontalOuter", optional;
        range_map_vertical_down: LookAtRangeMap => "rangeMapVerticalDown", optional;
        range_map_vertical_up: LookAtRangeMap => "rangeMapVerticalUp", optional;
    }
}

record! {
    pub struct Meta [extras] {
        name: String => "name", required;
        version: String => "version", omit_default;
        authors: Vec<String> => "authors", required;
        copyright_information: String => "copyrightInformation", omit_default;
        contact_information: String => "contactInformation", omit_default;
        references: Vec<String> => "references", omit_default;
        third_party_licenses: String => "thirdPartyLicenses", omit_default;
        thumbnail_image: u32 => "thumbnailImage", omit_default;
        license_url: String => "licenseUrl", required;
        avatar_permission: AvatarPermission => "avatarPermission", omit_default;
        allow_excessively_violent_usage: bool => "allowExcessivelyViolentUsage", omit_default;
        allow_excessively_sexual_usage: bool => "allowExcessivelySexualUsage", omit_default;
        commercial_usage: CommercialUsage => "commercialUsage", omit_default;
        allow_political_or_religious_usage: bool => "allowPoliticalOrReligiousUsage", omit_default;
        allow_antisocial_or_hate_usage: bool => "allowAntisocialOrHateUsage", omit_default;
        credit_notation: CreditNotation => "creditNotation", omit_default;
        allow_redistribution: bool => "allowRedistribution", omit_default;
        modification: Modification => "modification", omit_default;
        other_license_url: String => "otherLicenseUrl", omit_default;
    }
}

record! {
    pub struct Vrm [extras] {
        spec_version: String => "specVersion", required;
        meta: Meta => "meta", required;
        humanoid: Humanoid => "humanoid", required;
        first_person: FirstPerson => "firstPerson", optional;
        look_at: LookAt => "lookAt", optional;
        expressions: Expressions => "expressions", optional;
    }
}

impl Extension for Vrm {
    const KEY: &'static str = "VRMC_vrm";
    const PLACEMENT: Placement = Placement::Root;
}
