use dioxus::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;
const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 48.0;

/// Distinct hue per series index using the golden angle.
pub fn series_color(index: usize) -> String {
    let hue = (index as f64 * 137.5) % 360.0;
    format!("hsl({hue}, 70%, 50%)")
}

/// Screen y for `value` on a 0..=y_max axis.
pub fn scale_y(value: f64, y_max: f64) -> f64 {
    let plot = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let ratio = if y_max <= 0.0 {
        0.0
    } else {
        (value / y_max).clamp(0.0, 1.0)
    };
    PAD_TOP + plot * (1.0 - ratio)
}

/// Centre x of slot `index` out of `count` evenly spaced slots.
pub fn slot_x(index: usize, count: usize) -> f64 {
    let plot = WIDTH - PAD_LEFT - PAD_RIGHT;
    let slot = plot / count.max(1) as f64;
    PAD_LEFT + slot * (index as f64 + 0.5)
}

/// `x,y` pairs for the points that exist, in order. Gaps are bridged.
pub fn polyline_points(values: &[Option<f64>], y_max: f64) -> String {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| format!("{:.1},{:.1}", slot_x(i, values.len()), scale_y(v, y_max))))
        .collect::<Vec<_>>()
        .join(" ")
}

fn ticks(y_max: f64) -> Vec<f64> {
    (0..=4).map(|i| y_max * f64::from(i) / 4.0).collect()
}

#[component]
fn Axes(labels: Vec<String>, y_max: f64) -> Element {
    let count = labels.len();
    rsx! {
        for tick in ticks(y_max) {
            line {
                class: "chart-grid",
                "x1": "{PAD_LEFT}",
                "x2": "{WIDTH - PAD_RIGHT}",
                "y1": "{scale_y(tick, y_max)}",
                "y2": "{scale_y(tick, y_max)}",
            }
            text {
                class: "chart-tick",
                "x": "{PAD_LEFT - 6.0}",
                "y": "{scale_y(tick, y_max) + 4.0}",
                "text-anchor": "end",
                "{tick:.0}"
            }
        }
        for (i, label) in labels.into_iter().enumerate() {
            text {
                class: "chart-tick",
                "x": "{slot_x(i, count)}",
                "y": "{HEIGHT - PAD_BOTTOM + 18.0}",
                "text-anchor": "middle",
                "{label}"
            }
        }
    }
}

/// One named line in a [`LineChart`]; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Multi-series line chart over shared x labels.
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<Series>, y_max: f64) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart",
            svg {
                "viewBox": "0 0 {WIDTH} {HEIGHT}",
                role: "img",
                "aria-label": "Line chart",
                Axes { labels: labels.clone(), y_max }
                for (i, s) in series.iter().enumerate() {
                    polyline {
                        key: "{s.name}",
                        class: "chart-line",
                        "fill": "none",
                        "stroke": series_color(i),
                        "points": polyline_points(&s.values, y_max),
                    }
                }
            }
            figcaption { class: "chart-legend",
                for (i, s) in series.iter().enumerate() {
                    span { key: "{s.name}", class: "chart-legend-item",
                        span { class: "chart-swatch", style: "background: {series_color(i)};" }
                        "{s.name}"
                    }
                }
            }
        }
    }
}

/// Single-series bar chart.
#[component]
pub fn BarChart(
    bars: Vec<(String, f64)>,
    y_max: f64,
    series_label: String,
    #[props(default = "#3b82f6".to_string())] color: String,
) -> Element {
    let count = bars.len();
    let plot = WIDTH - PAD_LEFT - PAD_RIGHT;
    let bar_width = plot / count.max(1) as f64 * 0.6;
    let labels: Vec<String> = bars.iter().map(|(l, _)| l.clone()).collect();
    let base = scale_y(0.0, y_max);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        figure { class: "chart",
            svg {
                "viewBox": "0 0 {WIDTH} {HEIGHT}",
                role: "img",
                "aria-label": "{series_label}",
                Axes { labels, y_max }
                for (i, (label, value)) in bars.iter().enumerate() {
                    rect {
                        key: "{label}",
                        class: "chart-bar",
                        "x": "{slot_x(i, count) - bar_width / 2.0}",
                        "y": "{scale_y(*value, y_max)}",
                        "width": "{bar_width}",
                        "height": "{base - scale_y(*value, y_max)}",
                        "fill": "{color}",
                        title { "{label}: {value:.2}" }
                    }
                }
            }
            figcaption { class: "chart-legend",
                span { class: "chart-legend-item",
                    span { class: "chart-swatch", style: "background: {color};" }
                    "{series_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_scale_is_inverted_and_clamped() {
        assert_eq!(scale_y(0.0, 100.0), HEIGHT - PAD_BOTTOM);
        assert_eq!(scale_y(100.0, 100.0), PAD_TOP);
        assert_eq!(scale_y(250.0, 100.0), PAD_TOP);
        assert_eq!(scale_y(5.0, 0.0), HEIGHT - PAD_BOTTOM);
    }

    #[test]
    fn missing_points_are_skipped() {
        let pts = polyline_points(&[Some(100.0), None, Some(0.0)], 100.0);
        assert_eq!(pts.split(' ').count(), 2);
    }

    #[test]
    fn colors_differ_per_series() {
        assert_eq!(series_color(0), "hsl(0, 70%, 50%)");
        assert_ne!(series_color(1), series_color(2));
    }
}
