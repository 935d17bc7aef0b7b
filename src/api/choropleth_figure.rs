//! World choropleth figure builder.

use crate::core::{IndicatorId, IndicatorTable};
use crate::error::{BoardError, BoardResult};
use crate::figure::{
    ChoroplethTrace, Figure, Geo, GeoProjection, GeoScope, Layout, ProjectionKind, Title, Trace,
};

/// World map of one indicator in one year, regions keyed by the derived
/// ISO alpha-3 codes.
///
/// The color domain (`zmin`/`zmid`/`zmax`) comes from the indicator's
/// full-table extents, so colors are comparable across years. Countries with
/// no value for the year are simply absent; countries whose code lookup
/// failed carry an empty location and are dropped by the renderer.
pub fn choropleth_figure(
    table: &IndicatorTable,
    indicator: IndicatorId,
    year: i32,
) -> BoardResult<Figure> {
    let label = table
        .catalog()
        .label(indicator)
        .ok_or(BoardError::UnknownIndicator { id: indicator })?;

    let mut locations = Vec::new();
    let mut z = Vec::new();
    let mut text = Vec::new();
    for country in table.country_names() {
        if let Some(value) = table.value(country, indicator, year) {
            let meta = table.country_meta(country);
            locations.push(meta.map(|m| m.code.clone()).unwrap_or_default());
            z.push(value);
            text.push(country.to_owned());
        }
    }

    let extents = table.extents(indicator);
    let trace = ChoroplethTrace {
        locations,
        z,
        text,
        zmax: extents.map_or(0.0, |e| e.max),
        zmid: extents.map_or(0.0, |e| e.mean),
        zmin: extents.map_or(0.0, |e| e.min),
        colorbar: None,
    };

    let layout = Layout {
        title: Some(Title::plain(format!("{label} in {year}"))),
        geo: Some(Geo {
            scope: Some(GeoScope::World),
            projection: Some(GeoProjection {
                kind: ProjectionKind::NaturalEarth,
            }),
            showframe: Some(false),
            showland: None,
        }),
        ..Layout::default()
    };

    Ok(Figure::new(vec![Trace::Choropleth(trace)], layout))
}
