use serde::Serialize;

use crate::enums::{
    control_type::ControlType, depth_preprocessor::DepthPreprocessor,
    output_format::OutputFormat, soft_edge_preprocessor::SoftEdgePreprocessor,
};

/// Input for `xlabs-ai/flux-dev-controlnet` predictions.
///
/// Documented defaults and ranges are enforced by Replicate, not here.
/// Unset optionals are left out of the payload so Replicate applies its
/// own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    /// Url of the image to control the generation with.
    pub control_image: String,
    pub prompt: String,
    /// Strength of the control net. Canny works best with 0.5, soft edge
    /// with 0.4, depth between 0.5 and 0.75. Default 0.5, range 0 to 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_strength: Option<f64>,
    /// Default depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_type: Option<ControlType>,
    /// Preprocessor for the depth control net. Default DepthAnything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth_preprocessor: Option<DepthPreprocessor>,
    /// Default 3.5, range 0 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    /// 0 uses none of the control image, 1 returns it as is. Values up
    /// to 0.25 work best. Default 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_to_image_strength: Option<f64>,
    /// Default 1, range -1 to 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_strength: Option<f64>,
    /// HuggingFace .safetensors, Replicate .tar, or CivitAI download url.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lora_url: Option<String>,
    /// Things to keep out of the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    /// Default 80, range 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_quality: Option<u8>,
    /// Also return the preprocessed control image. Default false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_preprocessed_image: Option<bool>,
    /// Random when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Preprocessor for the soft edge control net.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_edge_preprocessor: Option<SoftEdgePreprocessor>,
    /// Default 28, range 1 to 50.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u8>,
}

impl InputSpec {
    pub fn new(control_image: &str, prompt: &str) -> Self {
        Self {
            control_image: control_image.to_string(),
            prompt: prompt.to_string(),
            control_strength: None,
            control_type: None,
            depth_preprocessor: None,
            guidance_scale: None,
            image_to_image_strength: None,
            lora_strength: None,
            lora_url: None,
            negative_prompt: None,
            output_format: None,
            output_quality: None,
            return_preprocessed_image: None,
            seed: None,
            soft_edge_preprocessor: None,
            steps: None,
        }
    }
}
