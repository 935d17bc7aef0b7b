use criterion::{Criterion, criterion_group, criterion_main};
use plotboard::api::{pivot_groups, scatter_figure};
use plotboard::core::{IndicatorTable, Observation, Selection};
use std::hint::black_box;

const CONTINENTS: [&str; 6] = [
    "Africa",
    "Asia",
    "Europe",
    "North America",
    "Oceania",
    "South America",
];

fn synthetic_table(countries: usize, years: usize) -> IndicatorTable {
    let indicators = ["gdpPercap", "lifeExp", "pop"];
    let mut rows = Vec::with_capacity(countries * years * indicators.len());
    for c in 0..countries {
        let country = format!("Country {c:03}");
        let continent = CONTINENTS[c % CONTINENTS.len()];
        for y in 0..years {
            let year = 1950 + y as i32;
            for (k, indicator) in indicators.iter().enumerate() {
                let value = (c * 37 + y * 11 + k * 5) as f64 + 0.5;
                rows.push(
                    Observation::new(country.clone(), *indicator, year, value)
                        .with_location("", continent),
                );
            }
        }
    }
    IndicatorTable::from_observations(rows)
}

fn bench_table_build_9k(c: &mut Criterion) {
    let rows: Vec<Observation> = synthetic_table(50, 60).rows().to_vec();

    c.bench_function("table_build_9k", |b| {
        b.iter(|| {
            let _ = IndicatorTable::from_observations(black_box(rows.clone()));
        })
    });
}

fn bench_pivot_groups_50x60(c: &mut Criterion) {
    let table = synthetic_table(50, 60);
    let gdp = table.catalog().id("gdpPercap").expect("indicator");
    let life = table.catalog().id("lifeExp").expect("indicator");
    let pop = table.catalog().id("pop").expect("indicator");
    let selection = Selection::new([gdp, life, pop], 1980);

    c.bench_function("pivot_groups_50x60", |b| {
        b.iter(|| {
            let _ = pivot_groups(black_box(&table), black_box(&selection))
                .expect("pivot should succeed");
        })
    });
}

fn bench_scatter_figure_json(c: &mut Criterion) {
    let table = synthetic_table(50, 60);
    let gdp = table.catalog().id("gdpPercap").expect("indicator");
    let life = table.catalog().id("lifeExp").expect("indicator");
    let pop = table.catalog().id("pop").expect("indicator");
    let selection = Selection::new([gdp, life, pop], 1980);

    c.bench_function("scatter_figure_json_50x60", |b| {
        b.iter(|| {
            let figure = scatter_figure(black_box(&table), black_box(&selection))
                .expect("figure should build");
            let _ = figure.to_json().expect("figure should serialize");
        })
    });
}

criterion_group!(
    benches,
    bench_table_build_9k,
    bench_pivot_groups_50x60,
    bench_scatter_figure_json
);
criterion_main!(benches);
