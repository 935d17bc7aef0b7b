use plotboard::api::{GeoFigureConfig, GeoFigureScope, bar_figure, geo_scatter_figure};
use plotboard::core::GeoPoint;
use plotboard::figure::{
    BarTrace, GeoScope, LocationMode, MarkerSymbol, ProjectionKind, Trace,
};

fn airports() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(-86.75, 34.64, "HSVHuntsville, ALArrivals: 105", 105.0),
        GeoPoint::new(-118.40, 33.94, "LAXLos Angeles, CAArrivals: 18000", 18000.0),
        GeoPoint::new(-80.29, 25.79, "MIAMiami, FLArrivals: 9200", 9200.0),
    ]
}

#[test]
fn weight_scale_is_anchored_at_zero_and_tops_at_the_heaviest_point() {
    let figure = geo_scatter_figure(&airports(), &GeoFigureConfig::new());
    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert_eq!(trace.marker.cmin, 0.0);
    assert_eq!(trace.marker.cmax, 18000.0);
    assert_eq!(trace.marker.color, [105.0, 18000.0, 9200.0]);
}

#[test]
fn no_points_still_build_a_valid_figure() {
    let figure = geo_scatter_figure(&[], &GeoFigureConfig::new());
    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert!(trace.lon.is_empty());
    assert_eq!(trace.marker.cmax, 0.0);
}

#[test]
fn markers_are_small_squares_on_a_reversed_scale() {
    let figure = geo_scatter_figure(&airports(), &GeoFigureConfig::new());
    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert_eq!(trace.marker.size, 8.0);
    assert_eq!(trace.marker.opacity, 0.8);
    assert!(trace.marker.reversescale);
    assert!(!trace.marker.autocolorscale);
    assert_eq!(trace.marker.symbol, MarkerSymbol::Square);
    assert_eq!(trace.marker.line.width, 1.0);
    assert_eq!(trace.marker.line.color, "rgba(102, 102, 102)");

    assert_eq!(trace.marker.colorscale.len(), 6);
    assert_eq!(trace.marker.colorscale[0].0, 0.0);
    assert_eq!(trace.marker.colorscale[0].1, "rgb(5, 10, 172)");
    assert_eq!(trace.marker.colorscale[5].0, 1.0);
    assert_eq!(trace.marker.colorscale[5].1, "rgb(220, 220, 220)");
}

#[test]
fn us_states_scope_uses_albers_projection_and_state_codes() {
    let config = GeoFigureConfig::new().with_title("Most trafficked US airports");
    let figure = geo_scatter_figure(&airports(), &config);

    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert_eq!(trace.locationmode, LocationMode::UsaStates);

    let geo = figure.layout.geo.as_ref().expect("geo");
    assert_eq!(geo.scope, Some(GeoScope::Usa));
    assert_eq!(
        geo.projection.map(|projection| projection.kind),
        Some(ProjectionKind::AlbersUsa)
    );
    assert_eq!(geo.showland, Some(true));

    let title = figure.layout.title.as_ref().expect("title");
    assert_eq!(title.text, "Most trafficked US airports");
}

#[test]
fn world_scope_switches_to_iso_codes_and_natural_earth() {
    let config = GeoFigureConfig::new().with_scope(GeoFigureScope::World);
    let figure = geo_scatter_figure(&airports(), &config);

    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert_eq!(trace.locationmode, LocationMode::Iso3);

    let geo = figure.layout.geo.as_ref().expect("geo");
    assert_eq!(geo.scope, Some(GeoScope::World));
    assert_eq!(
        geo.projection.map(|projection| projection.kind),
        Some(ProjectionKind::NaturalEarth)
    );
    assert_eq!(geo.showframe, Some(false));
}

#[test]
fn labels_pass_through_in_point_order() {
    let figure = geo_scatter_figure(&airports(), &GeoFigureConfig::new());
    let Trace::Scattergeo(trace) = &figure.data[0] else {
        panic!("expected scattergeo trace");
    };
    assert_eq!(trace.text[0], "HSVHuntsville, ALArrivals: 105");
    assert_eq!(trace.lon, [-86.75, -118.40, -80.29]);
    assert_eq!(trace.lat, [34.64, 33.94, 25.79]);
}

#[test]
fn colorbar_title_is_optional() {
    let titled = geo_scatter_figure(
        &airports(),
        &GeoFigureConfig::new().with_colorbar_title("Incoming flights"),
    );
    let Trace::Scattergeo(trace) = &titled.data[0] else {
        panic!("expected scattergeo trace");
    };
    let colorbar = trace.marker.colorbar.as_ref().expect("colorbar");
    assert_eq!(colorbar.title, "Incoming flights");

    let untitled = geo_scatter_figure(&airports(), &GeoFigureConfig::new());
    let json = untitled.to_json().expect("json");
    assert!(!json.contains("colorbar"));
}

#[test]
fn location_modes_serialize_their_plotly_spellings() {
    let us = geo_scatter_figure(&airports(), &GeoFigureConfig::new());
    assert!(us.to_json().expect("json").contains(r#""locationmode":"USA-states""#));
    let world = geo_scatter_figure(
        &airports(),
        &GeoFigureConfig::new().with_scope(GeoFigureScope::World),
    );
    assert!(world.to_json().expect("json").contains(r#""locationmode":"ISO-3""#));
}

#[test]
fn bar_figure_keeps_series_order_and_a_plain_title() {
    let figure = bar_figure(
        "US agriculture exports by state",
        vec![
            BarTrace::new("beef", ["AL", "AK"], [34.4, 0.2]),
            BarTrace::new("pork", ["AL", "AK"], [10.6, 0.1]),
        ],
    );

    assert_eq!(figure.data.len(), 2);
    let Trace::Bar(first) = &figure.data[0] else {
        panic!("expected bar trace");
    };
    assert_eq!(first.name, "beef");
    assert_eq!(first.x, ["AL", "AK"]);
    assert_eq!(first.y, [34.4, 0.2]);

    let title = figure.layout.title.as_ref().expect("title");
    assert_eq!(title.text, "US agriculture exports by state");
    assert_eq!(title.x, None);

    let json = figure.to_json().expect("json");
    assert!(json.contains(r#""type":"bar""#));
}

#[test]
fn bar_figure_without_series_is_just_a_title() {
    let figure = bar_figure("empty", Vec::new());
    assert!(figure.data.is_empty());
    assert!(figure.layout.title.is_some());
}
