use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub enum DepthPreprocessor {
    Midas,
    Zoe,
    DepthAnything,
    #[serde(rename = "Zoe-DepthAnything")]
    ZoeDepthAnything,
}
