use std::collections::BTreeMap;

use glam::{Vec2, Vec3, Vec4};

use crate::extensions::{human_bones, Extension, Placement};
use crate::record::record;

pub use crate::extensions::vrm1::{
    AvatarPermission, CommercialUsage, CreditNotation, ExpressionOverride, LookAtMode,
    MaterialColorType, MeshAnnotationType, Modification,
};

pub mod mtoon;
pub mod node_constraint;
pub mod spring_bone;

record! {
    pub struct MaterialColorBind {
        material: u32 => "material", required;
        kind: MaterialColorType => "type", required;
        target_value: Vec4 => "targetValue", required;
    }
}

record! {
    pub struct MorphTargetBind {
        node: u32 => "node", required;
        index: u32 => "index", required;
        weight: f32 => "weight", required;
    }
}

record! {
    pub struct TextureTransformBind {
        material: u32 => "material", required;
        scale: Vec2 => "scale", default(Vec2::ONE);
        offset: Vec2 => "offset", default(Vec2::ZERO);
    }
}

record! {
    pub struct Expression {
        morph_target_binds: Vec<MorphTargetBind> => "morphTargetBinds", optional;
        material_color_binds: Vec<MaterialColorBind> => "materialColorBinds", optional;
        texture_transform_binds: Vec<TextureTransformBind> => "textureTransformBinds", optional;
        is_binary: bool => "isBinary", omit_default;
        override_blink: ExpressionOverride => "overrideBlink", omit_default;
        override_look_at: ExpressionOverride => "overrideLookAt", omit_default;
        override_mouth: ExpressionOverride => "overrideMouth", omit_default;
    }
}

record! {
    pub struct ExpressionPresets {
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
        neutral: Option<Expression> => "neutral", omit_default;
    }
}

record! {
    pub struct Expressions {
        preset: ExpressionPresets => "preset", optional;
        custom: BTreeMap<String, Expression> => "custom", optional;
    }
}

record! {
    pub struct MeshAnnotation {
        node: u32 => "node", required;
        kind: MeshAnnotationType => "type", required;
    }
}

record! {
    pub struct FirstPerson {
        mesh_annotations: Vec<MeshAnnotation> => "meshAnnotations", optional;
    }
}

record! {
    pub struct HumanBone {
        node: u32 => "node", required;
    }
}

human_bones! {
    pub struct HumanBones {
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
    pub struct Humanoid {
        human_bones: HumanBones => "humanBones", required;
    }
}

record! {
    pub struct LookAtRangeMap {
        input_max_value: f32 => "inputMaxValue", omit_default;
        output_scale: f32 => "outputScale", omit_default;
    }
}

record! {
    pub struct LookAt {
        offset_from_head_bone: Vec3 => "offsetFromHeadBone", optional;
        mode: LookAtMode => "type", omit_default;
        range_map_horizontal_inner: LookAtRangeMap => "rangeMapHorizontalInner", optional;
        range_map_horizontal_outer: LookAtRangeMap => "rangeMapHorizontalOuter", optional;
        range_map_vertical_down: LookAtRangeMap => "rangeMapVerticalDown", optional;
        range_map_vertical_up: LookAtRangeMap => "rangeMapVerticalUp", optional;
    }
}

impl LookAt {
    /// Input limits in the order horizontal inner, horizontal outer,
    /// vertical down, vertical up.
    pub fn input_max_values(&self) -> Vec4 {
        Vec4::new(
            self.range_map_horizontal_inner.input_max_value,
            self.range_map_horizontal_outer.input_max_value,
            self.range_map_vertical_down.input_max_value,
            self.range_map_vertical_up.input_max_value,
        )
    }

    /// Output scales in the same order as [`LookAt::input_max_values`].
    pub fn output_scales(&self) -> Vec4 {
        Vec4::new(
            self.range_map_horizontal_inner.output_scale,
            self.range_map_horizontal_outer.output_scale,
            self.range_map_vertical_down.output_scale,
            self.range_map_vertical_up.output_scale,
        )
    }
}

record! {
    pub struct Meta {
        name: String => "name", required;
        version: String => "version", omit_default;
        authors: Vec<String> => "authors", required;
        copyright_information: String => "copyrightInformation", omit_default;
        contact_information: String => "contactInformation", omit_default;
        references: Vec<String> => "references", optional;
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
    pub struct Vrm {
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

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::SchemaError;
    use crate::record::Record;

    #[test]
    fn color_binds_are_four_component() {
        let bind = MaterialColorBind::from_value(&json!({
            "material": 2,
            "type": "rimColor",
            "targetValue": [0.5, 0.25, 0, 1],
        }))
        .unwrap();
        assert_eq!(bind.target_value, Vec4::new(0.5, 0.25, 0.0, 1.0));
        assert_eq!(bind.kind, MaterialColorType::RimColor);

        let err = MaterialColorBind::from_value(&json!({
            "material": 2,
            "type": "rimColor",
            "targetValue": [0.5, 0.25, 0],
        }))
        .unwrap_err();
        assert_eq!(err, SchemaError::mismatch("targetValue", "4-component vector"));
    }

    #[test]
    fn neutral_preset() {
        let expressions = Expressions::from_value(&json!({
            "preset": { "neutral": { "isBinary": true } },
        }))
        .unwrap();
        assert!(expressions.preset.neutral.as_ref().unwrap().is_binary);
        assert_eq!(
            expressions.to_value().unwrap(),
            json!({
                "preset": {
                    "neutral": {
                        "morphTargetBinds": [],
                        "materialColorBinds": [],
                        "textureTransformBinds": [],
                        "isBinary": true,
                    },
                },
                "custom": {},
            })
        );
    }

    #[test]
    fn texture_transform_uses_vec2_defaults() {
        let bind = TextureTransformBind {
            material: 1,
            offset: Vec2::new(0.5, 0.0),
            ..Default::default()
        };
        assert_eq!(bind.scale, Vec2::ONE);
        assert_eq!(bind.to_value().unwrap(), json!({ "material": 1, "offset": [0.5, 0.0] }));
    }

    #[test]
    fn thumb_intermediate_is_dropped() {
        let mut bones: serde_json::Map<String, serde_json::Value> = HumanBones::REQUIRED_BONES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), json!({ "node": i })))
            .collect();
        bones.insert("rightThumbIntermediate".into(), json!({ "node": 40 }));
        let humanoid = Humanoid::from_value(&json!({ "humanBones": bones })).unwrap();
        assert!(humanoid.human_bones.right_thumb_metacarpal.is_none());
        assert_eq!(humanoid.human_bones.iter().count(), 15);
        let encoded = humanoid.to_value().unwrap();
        assert!(encoded["humanBones"].get("rightThumbIntermediate").is_none());
    }

    #[test]
    fn look_at_range_vectors() {
        let look_at = LookAt::from_value(&json!({
            "offsetFromHeadBone": [0, 0.06, 0.02],
            "rangeMapHorizontalInner": { "inputMaxValue": 90, "outputScale": 8 },
            "rangeMapHorizontalOuter": { "inputMaxValue": 90, "outputScale": 12 },
            "rangeMapVerticalDown": { "inputMaxValue": 90, "outputScale": 10 },
            "rangeMapVerticalUp": { "inputMaxValue": 90, "outputScale": 10 },
        }))
        .unwrap();
        assert_eq!(look_at.offset_from_head_bone, Vec3::new(0.0, 0.06, 0.02));
        assert_eq!(look_at.input_max_values(), Vec4::splat(90.0));
        assert_eq!(look_at.output_scales(), Vec4::new(8.0, 12.0, 10.0, 10.0));
    }

    #[test]
    fn vrm_requires_core_blocks() {
        let err = Vrm::from_value(&json!({ "specVersion": "1.0" })).unwrap_err();
        assert_eq!(err, SchemaError::MissingRequiredField("meta".into()));
    }
}
