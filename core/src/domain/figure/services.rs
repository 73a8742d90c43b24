use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    dataset::entities::{Axis, DatasetKind, Record, Table, TableSchema},
    figure::entities::{
        Camera, ColorBar, Figure, HoverLabel, Layout, Legend, Margin, Marker, MarkerColor,
        Scatter3dTrace, Scene, SceneAxis, Title,
    },
    transform::{AxisScaleFactors, ColorAssignment},
};

pub const DEFAULT_MARKER_SIZE: u32 = 8;
pub const MARKER_OPACITY: f64 = 0.8;
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FigureOptions {
    pub marker_size: u32,
    /// Equal visual scale on all axes. Meant for same-unit quantities.
    pub cube_aspect: bool,
}

impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            marker_size: DEFAULT_MARKER_SIZE,
            cube_aspect: false,
        }
    }
}

pub fn build(
    table: &Table,
    scale_factors: &AxisScaleFactors,
    colors: &ColorAssignment,
    options: FigureOptions,
) -> Figure {
    let schema = table.schema();
    let hovertemplate = hover_template(schema);

    let data = match colors {
        ColorAssignment::Discrete { groups } => groups
            .iter()
            .map(|group_color| {
                let rows = table
                    .records()
                    .iter()
                    .filter(|r| r.group.as_deref() == Some(group_color.group.as_str()));
                let mut trace = points_trace(rows, scale_factors, &hovertemplate);
                trace.name = Some(group_color.group.clone());
                trace.showlegend = true;
                trace.marker = uniform_marker(options.marker_size, &group_color.color);
                trace
            })
            .collect(),
        ColorAssignment::Continuous {
            colorscale,
            title,
            min,
            max,
        } => {
            let mut trace = points_trace(table.records().iter(), scale_factors, &hovertemplate);
            let values = table
                .records()
                .iter()
                .map(|r| r.metric.unwrap_or_default())
                .collect();
            trace.marker = Marker {
                size: options.marker_size,
                color: MarkerColor::PerPoint(values),
                opacity: MARKER_OPACITY,
                colorscale: Some(colorscale.clone()),
                cmin: *min,
                cmax: *max,
                showscale: Some(true),
                colorbar: Some(ColorBar {
                    title: Title {
                        text: title.clone(),
                    },
                    thickness: 20,
                }),
            };
            vec![trace]
        }
        ColorAssignment::Uniform { color } => {
            let mut trace = points_trace(table.records().iter(), scale_factors, &hovertemplate);
            trace.marker = uniform_marker(options.marker_size, color);
            vec![trace]
        }
    };

    Figure {
        data,
        layout: layout(
            schema,
            options,
            matches!(colors, ColorAssignment::Discrete { .. }),
        ),
    }
}

/// Tooltip reading unscaled values from `customdata`. The trailing
/// `<extra></extra>` suppresses plotly's secondary box.
pub fn hover_template(schema: &TableSchema) -> String {
    let (coordinate_format, unit) = match schema.kind {
        DatasetKind::Dishes => (".2f", ""),
        DatasetKind::Macronutrients => (".1f", " g"),
    };

    let mut template = format!("{}: %{{text}}<br>", schema.label_title);
    for axis in Axis::ALL {
        template.push_str(&format!(
            "{}: %{{customdata[{}]:{}}}{}<br>",
            schema.axis_title(axis),
            axis.index(),
            coordinate_format,
            unit
        ));
    }
    if let Some(metric_title) = &schema.metric_title {
        let metric_format = match schema.kind {
            DatasetKind::Macronutrients => ".0f",
            DatasetKind::Dishes => ".2f",
        };
        template.push_str(&format!(
            "{}: %{{customdata[3]:{}}}<br>",
            metric_title, metric_format
        ));
    }
    template.push_str("<extra></extra>");
    template
}

fn points_trace<'a>(
    rows: impl Iterator<Item = &'a Record>,
    scale_factors: &AxisScaleFactors,
    hovertemplate: &str,
) -> Scatter3dTrace {
    let mut trace = Scatter3dTrace {
        trace_type: "scatter3d".to_string(),
        mode: "markers".to_string(),
        name: None,
        x: Vec::new(),
        y: Vec::new(),
        z: Vec::new(),
        text: Vec::new(),
        customdata: Vec::new(),
        hoverinfo: "text".to_string(),
        hovertemplate: hovertemplate.to_string(),
        marker: uniform_marker(DEFAULT_MARKER_SIZE, ""),
        showlegend: false,
    };

    for record in rows {
        let [x, y, z] = scale_factors.apply(record);
        trace.x.push(x);
        trace.y.push(y);
        trace.z.push(z);
        trace.text.push(record.label.clone());

        let mut raw = record.coordinates.to_vec();
        if let Some(metric) = record.metric {
            raw.push(metric);
        }
        trace.customdata.push(raw);
    }

    trace
}

fn uniform_marker(size: u32, color: &str) -> Marker {
    Marker {
        size,
        color: MarkerColor::Uniform(color.to_string()),
        opacity: MARKER_OPACITY,
        colorscale: None,
        cmin: None,
        cmax: None,
        showscale: None,
        colorbar: None,
    }
}

fn layout(schema: &TableSchema, options: FigureOptions, showlegend: bool) -> Layout {
    let axis = |axis: Axis| SceneAxis {
        title: Title {
            text: schema.axis_title(axis).to_string(),
        },
    };

    Layout {
        scene: Scene {
            xaxis: axis(Axis::X),
            yaxis: axis(Axis::Y),
            zaxis: axis(Axis::Z),
            bgcolor: TRANSPARENT.to_string(),
            camera: Camera::default(),
            aspectmode: if options.cube_aspect { "cube" } else { "auto" }.to_string(),
        },
        margin: Margin::default(),
        legend: Legend::default(),
        hoverlabel: HoverLabel::default(),
        paper_bgcolor: TRANSPARENT.to_string(),
        showlegend,
    }
}
