use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlType {
    Canny,
    Depth,
    SoftEdge,
}
