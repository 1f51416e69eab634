use glam::Vec3;

use crate::extensions::{Extension, Placement};
use crate::record::record;

pub use crate::extensions::vrm1::mtoon::OutlineWidthMode;

record! {
    pub struct TextureInfo {
        index: u32 => "index", required;
        tex_coord: u32 => "texCoord", omit_default;
    }
}

record! {
    pub struct ShadingShiftTextureInfo {
        index: u32 => "index", omit_default;
        tex_coord: u32 => "texCoord", omit_default;
        scale: f32 => "scale", default(1.0);
    }
}

record! {
    pub struct MToon {
        spec_version: String => "specVersion", required;
        transparent_with_z_write: bool => "transparentWithZWrite", omit_default;
        render_queue_offset_number: i32 => "renderQueueOffsetNumber", omit_default;
        shade_color_factor: Vec3 => "shadeColorFactor", default(Vec3::ONE);
        shade_multiply_texture: Option<TextureInfo> => "shadeMultiplyTexture", omit_default;
        shading_shift_factor: f32 => "shadingShiftFactor", omit_default;
        shading_shift_texture: Option<ShadingShiftTextureInfo> => "shadingShiftTexture", omit_default;
        shading_toony_factor: f32 => "shadingToonyFactor", default(0.9);
        gi_equalization_factor: f32 => "giEqualizationFactor", default(0.9);
        matcap_factor: Vec3 => "matcapFactor", default(Vec3::ONE);
        matcap_texture: Option<TextureInfo> => "matcapTexture", omit_default;
        parametric_rim_color_factor: Vec3 => "parametricRimColorFactor", default(Vec3::ZERO);
        rim_multiply_texture: Option<TextureInfo> => "rimMultiplyTexture", omit_default;
        rim_lighting_mix_factor: f32 => "rimLightingMixFactor", omit_default;
        parametric_rim_fresnel_power_factor: f32 => "parametricRimFresnelPowerFactor", default(1.0);
        parametric_rim_lift_factor: f32 => "parametricRimLiftFactor", omit_default;
        outline_width_mode: OutlineWidthMode => "outlineWidthMode", omit_default;
        outline_width_factor: f32 => "outlineWidthFactor", omit_default;
        outline_width_multiply_texture: Option<TextureInfo> => "outlineWidthMultiplyTexture", omit_default;
        outline_color_factor: Vec3 => "outlineColorFactor", default(Vec3::ZERO);
        outline_lighting_mix_factor: f32 => "outlineLightingMixFactor", default(1.0);
        uv_animation_mask_texture: Option<TextureInfo> => "uvAnimationMaskTexture", omit_default;
        uv_animation_scroll_x_speed_factor: f32 => "uvAnimationScrollXSpeedFactor", omit_default;
        uv_animation_scroll_y_speed_factor: f32 => "uvAnimationScrollYSpeedFactor", omit_default;
        uv_animation_rotation_speed_factor: f32 => "uvAnimationRotationSpeedFactor", omit_default;
    }
}

impl Extension for MToon {
    const KEY: &'static str = "VRMC_materials_mtoon";
    const PLACEMENT: Placement = Placement::Material;
}

record! {
    pub struct HdrEmissiveMultiplier {
        emissive_multiplier: f32 => "emissiveMultiplier", required(1.0);
    }
}

impl Extension for HdrEmissiveMultiplier {
    const KEY: &'static str = "VRMC_materials_hdr_emissiveMultiplier";
    const PLACEMENT: Placement = Placement::Material;
}
