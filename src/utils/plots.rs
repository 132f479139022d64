//! tiny module to plot a one-variable expression to a PNG file

use crate::errors::CalcError;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::linspace;
use crate::utils::config::PlotSettings;
use std::path::PathBuf;

/// samples per plotted curve
const SAMPLES: usize = 400;

/// Renders `expr` as a function of `var` over the configured range and writes
/// the chart to `<dir>/plot_<expr>.png`. Points where the expression is
/// undefined or non-finite are skipped rather than failing the whole plot.
pub fn plot_expression(
    expr: &Expr,
    var: &str,
    settings: &PlotSettings,
) -> Result<PathBuf, CalcError> {
    use plotters::prelude::*;

    let (x_min, x_max) = settings.range;
    let series: Vec<(f64, f64)> = linspace(x_min, x_max, SAMPLES)
        .into_iter()
        .filter_map(|x| expr.eval_at(var, x).ok().map(|y| (x, y)))
        .collect();
    if series.is_empty() {
        return Err(CalcError::EvaluationError(format!(
            "'{}' has no finite values on [{}, {}]",
            expr, x_min, x_max
        )));
    }

    let y_min = series.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = series
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    // a flat line still needs a nonzero y span
    let pad = if y_max > y_min { 0.05 * (y_max - y_min) } else { 1.0 };

    let title = format!("Plot of {}", expr.sym_to_str());
    let filename = settings.dir.join(format!("plot_{}.png", sanitize(&expr.sym_to_str())));
    // the backend borrows the path, so the drawing objects live in their own
    // scope and are dropped before the path is returned
    {
        let root_area =
            BitMapBackend::new(&filename, (settings.width, settings.height)).into_drawing_area();
        root_area
            .fill(&WHITE)
            .map_err(|e| CalcError::PlotError(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root_area)
            .caption(&title, ("sans-serif", 30))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))
            .map_err(|e| CalcError::PlotError(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(var)
            .draw()
            .map_err(|e| CalcError::PlotError(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(series, &BLUE))
            .map_err(|e| CalcError::PlotError(e.to_string()))?;

        root_area
            .present()
            .map_err(|e| CalcError::PlotError(e.to_string()))?;
    }
    Ok(filename)
}

/// expression strings contain characters filesystems dislike
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
