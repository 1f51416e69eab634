use crate::enumeration::wire_enum;
use crate::extensions::{Extension, Placement};
use crate::record::record;

wire_enum! {
    pub enum OutlineWidthMode {
        None = "none",
        WorldCoordinates = "worldCoordinates",
        ScreenCoordinates = "screenCoordinates",
    }
}

record! {
    pub struct TextureInfo [extras] {
        index: u32 => "index", required;
        tex_coord: u32 => "texCoord", omit_default;
    }
}

record! {
    pub struct ShadingShiftTextureInfo [extras] {
        index: u32 => "index", omit_default;
        tex_coord: u32 => "texCoord", omit_default;
        scale: f32 => "scale", default(1.0);
    }
}

record! {
    pub struct MToon [extras] {
        spec_version: String => "specVersion", omit_default;
        transparent_with_z_write: bool => "transparentWithZWrite", omit_default;
        render_queue_offset_number: i32 => "renderQueueOffsetNumber", omit_default;
        shade_color_factor: Vec<f32> => "shadeColorFactor", default(vec![1.0, 1.0, 1.0]);
        shade_multiply_texture: Option<TextureInfo> => "shadeMultiplyTexture", omit_default;
        shading_shift_factor: f32 => "shadingShiftFactor", omit_default;
        shading_shift_texture: Option<ShadingShiftTextureInfo> => "shadingShiftTexture", omit_default;
        shading_toony_factor: f32 => "shadingToonyFactor", default(0.9);
        gi_equalization_factor: f32 => "giEqualizationFactor", default(0.9);
        matcap_factor: Vec<f32> => "matcapFactor", default(vec![1.0, 1.0, 1.0]);
        matcap_texture: Option<TextureInfo> => "matcapTexture", omit_default;
        parametric_rim_color_factor: Vec<f32> => "parametricRimColorFactor", default(vec![0.0, 0.0, 0.0]);
        rim_multiply_texture: Option<TextureInfo> => "rimMultiplyTexture", omit_default;
        rim_lighting_mix_factor: f32 => "rimLightingMixFactor", omit_default;
        parametric_rim_fresnel_power_factor: f32 => "parametricRimFresnelPowerFactor", default(1.0);
        parametric_rim_lift_factor: f32 => "parametricRimLiftFactor", omit_default;
        outline_width_mode: OutlineWidthMode => "outlineWidthMode", omit_default;
        outline_width_factor: f32 => "outlineWidthFactor", omit_default;
        outline_width_multiply_texture: Option<TextureInfo> => "outlineWidthMultiplyTexture", omit_default;
        outline_color_factor: Vec<f32> => "outlineColorFactor", default(vec![0.0, 0.0, 0.0]);
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
    pub struct HdrEmissiveMultiplier [extras] {
        emissive_multiplier: f32 => "emissiveMultiplier", required(1.0);
    }
}

impl Extension for HdrEmissiveMultiplier {
    const KEY: &'static str = "VRMC_materials_hdr_emissiveMultiplier";
    const PLACEMENT: Placement = Placement::Material;
}
