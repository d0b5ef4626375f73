use flo_draw::canvas::*;
use log::debug;

/// Height and width of the square canvas figures are drawn on.
pub const CANVAS_SIZE: f32 = 1000.0;

/// Space left between the axes and the edge of the canvas.
const MARGIN: f32 = 80.0;

/// Radius of a circle marker, and half the span of a star marker.
const MARKER_SIZE: f32 = 8.0;

/// Glyph used to draw each point of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Star,
    Circle,
}

impl Marker {
    fn color(self) -> Color {
        match self {
            Marker::Star => Color::Rgba(0.1, 0.3, 0.8, 1.0),
            Marker::Circle => Color::Rgba(0.8, 0.3, 0.1, 1.0),
        }
    }
}

/// A labelled set of points drawn with the same [Marker].
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub points: Vec<(f64, f64)>,
}

/// The smallest rectangle containing every point on a [Figure].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Map a point into the unit square. A flat axis maps to its middle.
    pub fn to_unit(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = |value: f64, min: f64, max: f64| {
            if max > min {
                (value - min) / (max - min)
            } else {
                0.5
            }
        };

        (
            scale(x, self.x_min, self.x_max),
            scale(y, self.y_min, self.y_max),
        )
    }

    /// Map a point onto the plot area of the canvas. The canvas origin is the
    /// bottom-left corner, so larger `y` values are drawn higher up.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f32, f32) {
        let (u, v) = self.to_unit(x, y);
        let span = CANVAS_SIZE - 2.0 * MARGIN;
        (MARGIN + u as f32 * span, MARGIN + v as f32 * span)
    }
}

/// Any number of point series sharing one pair of axes.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    pub title: String,
    series: Vec<Series>,
}

impl Figure {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            series: Vec::new(),
        }
    }

    /// Add one point for each pair of `xs` and `ys`.
    pub fn scatter(&mut self, label: &str, xs: &[f64], ys: &[f64], marker: Marker) {
        self.series.push(Series {
            label: label.to_string(),
            marker,
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
        });
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    fn points(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.series.iter().flat_map(|series| series.points.iter())
    }

    /// Get the bounds of all of the points, or `None` if there aren't any.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut points = self.points();
        let &(x, y) = points.next()?;
        let start = Bounds {
            x_min: x,
            x_max: x,
            y_min: y,
            y_max: y,
        };

        Some(points.fold(start, |bounds, &(x, y)| Bounds {
            x_min: bounds.x_min.min(x),
            x_max: bounds.x_max.max(x),
            y_min: bounds.y_min.min(y),
            y_max: bounds.y_max.max(y),
        }))
    }
}

fn draw_marker<Gc: GraphicsContext>(gc: &mut Gc, marker: Marker, x: f32, y: f32) {
    gc.new_path();
    match marker {
        Marker::Circle => {
            gc.circle(x, y, MARKER_SIZE);
            gc.fill();
        }
        Marker::Star => {
            for (dx, dy) in [(1.0, 0.0), (0.0, 1.0), (0.7, 0.7), (0.7, -0.7)] {
                gc.move_to(x - dx * MARKER_SIZE, y - dy * MARKER_SIZE);
                gc.line_to(x + dx * MARKER_SIZE, y + dy * MARKER_SIZE);
            }
            gc.stroke();
        }
    }
}

/// Draw the axes and every point of `figure` onto a fresh canvas.
pub fn draw_figure<Gc: GraphicsContext>(gc: &mut Gc, figure: &Figure) {
    gc.clear_canvas(Color::Rgba(1.0, 1.0, 1.0, 1.0));
    gc.canvas_height(CANVAS_SIZE);
    gc.center_region(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    // Axes along the left and bottom of the plot area.
    gc.line_width(2.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.new_path();
    gc.move_to(MARGIN, CANVAS_SIZE - MARGIN);
    gc.line_to(MARGIN, MARGIN);
    gc.line_to(CANVAS_SIZE - MARGIN, MARGIN);
    gc.stroke();

    let bounds = match figure.bounds() {
        Some(bounds) => bounds,
        None => return,
    };

    for series in figure.series() {
        debug!(
            "drawing {} with {} points as {:?}",
            series.label,
            series.points.len(),
            series.marker
        );

        gc.fill_color(series.marker.color());
        gc.stroke_color(series.marker.color());
        for &(x, y) in series.points.iter() {
            let (x, y) = bounds.to_canvas(x, y);
            draw_marker(gc, series.marker, x, y);
        }
    }
}
