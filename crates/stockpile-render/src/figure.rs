// File: crates/stockpile-render/src/figure.rs
// Summary: Maps a ChartSpec onto a plotly figure (stacked area traces + themed layout).

use plotly::common::{Anchor as PlotAnchor, Line, Mode, Orientation as PlotOrientation, Title};
use plotly::layout::themes::BuiltinTheme;
use plotly::layout::{Axis as PlotAxis, HoverMode as PlotHoverMode, Layout, Legend};
use plotly::{Plot, Scatter};

use stockpile_core::theme::{Anchor, HoverMode, LegendOptions, Orientation, Theme};
use stockpile_core::ChartSpec;

/// All entities share one stack group so their areas pile up. plotly.js fills
/// each band with its line color at half opacity.
const STACK_GROUP: &str = "1";

/// Build the plotly figure for `spec`. Pure: same spec, same figure.
pub fn build_plot(spec: &ChartSpec) -> Plot {
    let mut plot = Plot::new();

    for trace in spec.traces() {
        let hover = spec.hover_template(trace.entity);
        let area = Scatter::new(trace.years, trace.warheads)
            .name(trace.entity)
            .legend_group(trace.entity)
            .mode(Mode::Lines)
            .stack_group(STACK_GROUP)
            .line(Line::new().color(trace.color.to_string()))
            .hover_template(hover.as_str());
        plot.add_trace(area);
    }

    plot.set_layout(build_layout(spec));
    plot
}

fn build_layout(spec: &ChartSpec) -> Layout {
    let canvas = spec.canvas();
    let theme = &spec.layout.theme;

    Layout::new()
        .template(builtin_theme(theme).build())
        .title(Title::with_text(&spec.title))
        .width(canvas.width as usize)
        .height(canvas.height as usize)
        .hover_mode(hover_mode(spec.layout.hover_mode))
        .plot_background_color(theme.plot_background.to_css())
        .paper_background_color(theme.paper_background.to_css())
        .x_axis(PlotAxis::new().title(Title::with_text(&spec.x_axis.label)))
        .y_axis(PlotAxis::new().title(Title::with_text(spec.y_title())))
        .legend(legend(&spec.layout.legend))
}

fn builtin_theme(theme: &Theme) -> BuiltinTheme {
    match theme.template {
        "plotly_dark" => BuiltinTheme::PlotlyDark,
        _ => BuiltinTheme::Default,
    }
}

fn hover_mode(mode: HoverMode) -> PlotHoverMode {
    match mode {
        HoverMode::XUnified => PlotHoverMode::XUnified,
    }
}

fn legend(opts: &LegendOptions) -> Legend {
    Legend::new()
        .title(Title::with_text(&opts.title))
        .orientation(match opts.orientation {
            Orientation::Horizontal => PlotOrientation::Horizontal,
        })
        .x_anchor(anchor(opts.x_anchor))
        .x(opts.x)
        .y_anchor(anchor(opts.y_anchor))
        .y(opts.y)
}

fn anchor(a: Anchor) -> PlotAnchor {
    match a {
        Anchor::Right => PlotAnchor::Right,
        Anchor::Bottom => PlotAnchor::Bottom,
    }
}
