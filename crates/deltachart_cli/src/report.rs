//! Text and JSON rendering of selections and axis bounds

use anyhow::Result;
use deltachart_charts::format::format_compact;
use deltachart_charts::time_format::format_datetime_minutes;
use deltachart_charts::{AxisBounds, SelectionSummary, SeriesDeltaRow};
use deltachart_core::ScalingMode;
use serde::Serialize;

const NOTHING_SELECTED: &str =
    "Nothing selected. Drag-select a part of the chart using the mouse to create a selection.";

#[derive(Debug, Serialize)]
struct SelectionJson<'a> {
    from: f64,
    to: f64,
    from_label: String,
    to_label: String,
    rows: &'a [SeriesDeltaRow],
}

#[derive(Debug, Serialize)]
struct BoundsJson {
    mode: ScalingMode,
    min: Option<f64>,
    max: Option<f64>,
}

pub fn selection_text(selection: Option<&SelectionSummary>) -> String {
    let Some(sel) = selection else {
        return NOTHING_SELECTED.to_string();
    };

    let mut out = format!(
        "From: {}\nTo:   {}\n",
        format_datetime_minutes(sel.range.from),
        format_datetime_minutes(sel.range.to)
    );
    // Width in chars: `{:<w$}` pads by char count, not bytes.
    let name_w = sel.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for row in &sel.rows {
        let d = &row.delta;
        out.push_str(&format!(
            "{:<name_w$}  {}  (from {} to {})\n",
            row.name,
            d.summary(),
            d.first.y,
            d.last.y
        ));
    }
    out
}

pub fn selection_json(selection: Option<&SelectionSummary>) -> Result<String> {
    let value = match selection {
        Some(sel) => serde_json::to_value(SelectionJson {
            from: sel.range.from,
            to: sel.range.to,
            from_label: format_datetime_minutes(sel.range.from),
            to_label: format_datetime_minutes(sel.range.to),
            rows: &sel.rows,
        })?,
        None => serde_json::Value::Null,
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn bounds_text(mode: ScalingMode, bounds: AxisBounds) -> String {
    match bounds {
        AxisBounds::Fixed { min, max } => format!(
            "mode: {mode}\nmin:  {}\nmax:  {}\n",
            format_compact(min),
            format_compact(max)
        ),
        AxisBounds::Auto => format!("mode: {mode}\nbounds follow the visible data\n"),
    }
}

pub fn bounds_json(mode: ScalingMode, bounds: AxisBounds) -> Result<String> {
    let (min, max) = match bounds {
        AxisBounds::Fixed { min, max } => (Some(min), Some(max)),
        AxisBounds::Auto => (None, None),
    };
    Ok(serde_json::to_string_pretty(&BoundsJson { mode, min, max })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deltachart_charts::compute_deltas;
    use deltachart_core::{Series, TimeRange};

    fn summary() -> SelectionSummary {
        let series = vec![
            Series::from_pairs("cpu", "#f00", [(60.0, 10.0), (120.0, 20.0), (180.0, 15.0)]),
            Series::from_pairs("disk", "#0f0", [(90.0, 0.0), (150.0, 3.0)]),
        ];
        let range = TimeRange::new(0.0, 240.0);
        SelectionSummary {
            range,
            rows: compute_deltas(range, &series),
        }
    }

    #[test]
    fn text_lists_each_series() {
        let text = selection_text(Some(&summary()));
        assert!(text.starts_with("From: 1970-01-01 00:00\nTo:   1970-01-01 00:04\n"));
        assert!(text.contains("cpu   +50.00% (+5)  (from 10 to 15)"));
        assert!(text.contains("disk  n/a (+3)  (from 0 to 3)"));
    }

    #[test]
    fn non_ascii_names_stay_aligned() {
        let series = vec![
            Series::from_pairs("débit", "#f00", [(60.0, 10.0), (120.0, 20.0)]),
            Series::from_pairs("latency", "#0f0", [(60.0, 1.0), (120.0, 2.0)]),
        ];
        let range = TimeRange::new(0.0, 240.0);
        let sel = SelectionSummary {
            range,
            rows: compute_deltas(range, &series),
        };
        let text = selection_text(Some(&sel));
        let columns: Vec<usize> = text
            .lines()
            .skip(2)
            .map(|l| l.chars().position(|c| c == '+').unwrap())
            .collect();
        assert_eq!(columns, vec![9, 9]);
    }

    #[test]
    fn empty_selection_prompts_user() {
        assert!(selection_text(None).starts_with("Nothing selected."));
        assert_eq!(selection_json(None).unwrap(), "null");
    }

    #[test]
    fn json_reports_undefined_percent_as_null() {
        let json = selection_json(Some(&summary())).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["rows"][0]["delta"]["percent_delta"], 50.0);
        assert!(v["rows"][1]["delta"]["percent_delta"].is_null());
        assert_eq!(v["to_label"], "1970-01-01 00:04");
    }

    #[test]
    fn bounds_render_both_shapes() {
        let fixed = AxisBounds::Fixed { min: -5.0, max: 110.0 };
        assert_eq!(
            bounds_text(ScalingMode::FixedIncludeZero, fixed),
            "mode: fixed-zero\nmin:  -5\nmax:  110\n"
        );
        let v: serde_json::Value =
            serde_json::from_str(&bounds_json(ScalingMode::AutoRescale, AxisBounds::Auto).unwrap())
                .unwrap();
        assert_eq!(v["mode"], "rescale");
        assert!(v["min"].is_null());
    }
}
