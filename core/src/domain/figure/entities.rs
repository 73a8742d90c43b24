//! Serializable 3D scatter figure. Field names follow the plotly.js figure
//! schema so the dashboard can pass the JSON straight to `Plotly.react`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Figure {
    pub data: Vec<Scatter3dTrace>,
    pub layout: Layout,
}

impl Figure {
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|trace| trace.x.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scatter3dTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub text: Vec<String>,
    /// Unscaled values shown in the tooltip.
    pub customdata: Vec<Vec<f64>>,
    pub hoverinfo: String,
    pub hovertemplate: String,
    pub marker: Marker,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum MarkerColor {
    Uniform(String),
    PerPoint(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Marker {
    pub size: u32,
    pub color: MarkerColor,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorBar {
    pub title: Title,
    pub thickness: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Layout {
    pub scene: Scene,
    pub margin: Margin,
    pub legend: Legend,
    pub hoverlabel: HoverLabel,
    pub paper_bgcolor: String,
    pub showlegend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Scene {
    pub xaxis: SceneAxis,
    pub yaxis: SceneAxis,
    pub zaxis: SceneAxis,
    pub bgcolor: String,
    pub camera: Camera,
    pub aspectmode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SceneAxis {
    pub title: Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Camera {
    pub up: Vec3,
    pub center: Vec3,
    pub eye: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            up: Vec3::new(0.0, 0.0, 1.0),
            center: Vec3::new(0.0, 0.0, 0.0),
            eye: Vec3::new(1.5, 1.5, 1.5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Legend {
    pub yanchor: String,
    pub y: f64,
    pub xanchor: String,
    pub x: f64,
    pub bgcolor: String,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            yanchor: "top".to_string(),
            y: 0.99,
            xanchor: "right".to_string(),
            x: 0.99,
            bgcolor: "rgba(255, 255, 255, 0.8)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HoverLabel {
    pub bgcolor: String,
    pub font: Font,
}

impl Default for HoverLabel {
    fn default() -> Self {
        Self {
            bgcolor: "white".to_string(),
            font: Font {
                size: 16,
                family: "Rockwell".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Font {
    pub size: u32,
    pub family: String,
}
