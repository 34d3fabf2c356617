use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub enum SoftEdgePreprocessor {
    #[serde(rename = "HED")]
    Hed,
    #[serde(rename = "TEED")]
    Teed,
    PiDiNet,
}
