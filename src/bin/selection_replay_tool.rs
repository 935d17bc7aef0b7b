use plotboard::api::{
    DashboardController, FigurePresenter, JsonWriterPresenter, Response, SelectionEvent,
};
use plotboard::core::{GroupKey, IndicatorTable, Selection};
use plotboard::figure::Figure;
use plotboard::ingest::{LongSchema, TableSchema, read_table_path};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    Inspect,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    scenario: PathBuf,
    output: Option<PathBuf>,
}

/// On-disk replay scenario: which dataset to load, how to read it, the
/// selection the dashboard starts from and the widget events to feed it.
#[derive(Debug, Clone, Deserialize)]
struct ScenarioFile {
    data: PathBuf,
    #[serde(default = "default_schema")]
    schema: TableSchema,
    selection: Selection,
    #[serde(default)]
    events: Vec<SelectionEvent>,
}

fn default_schema() -> TableSchema {
    TableSchema::Long(LongSchema::default())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = plotboard::telemetry::init_default_tracing();
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.scenario)
        .map_err(|err| format!("failed to read `{}`: {err}", args.scenario.display()))?;
    let scenario: ScenarioFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let table = read_table_path(&scenario.data, &scenario.schema)
        .map_err(|err| format!("failed to load `{}`: {err}", scenario.data.display()))?;

    match args.command {
        CommandKind::Replay => replay(table, scenario, args.output.as_deref()),
        CommandKind::Inspect => inspect(&table),
    }
}

/// Feeds every scenario event through the controller as one merged burst and
/// writes the resulting figure. A scenario without events renders its
/// starting selection instead.
fn replay(
    table: IndicatorTable,
    scenario: ScenarioFile,
    output: Option<&Path>,
) -> Result<(), String> {
    let ScenarioFile {
        selection, events, ..
    } = scenario;

    let mut controller = DashboardController::new(table, selection.clone());
    if events.is_empty() {
        controller.submit(SelectionEvent::SelectionReplaced(selection));
    } else {
        for event in events {
            controller.submit(event);
        }
    }

    let response = controller
        .process()
        .map_err(|err| format!("recompute failed: {err}"))?;
    match response {
        Response::Figure(figure) => write_figure(output, figure),
        Response::NoUpdate => {
            eprintln!("no figure produced for the final selection");
            Ok(())
        }
    }
}

fn write_figure(output: Option<&Path>, figure: Figure) -> Result<(), String> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .map_err(|err| format!("failed to create `{}`: {err}", path.display()))?;
            let mut presenter = JsonWriterPresenter::new(file);
            presenter
                .present(figure)
                .map_err(|err| format!("failed to write figure: {err}"))
        }
        None => {
            let mut presenter = JsonWriterPresenter::new(std::io::stdout().lock());
            presenter
                .present(figure)
                .map_err(|err| format!("failed to write figure: {err}"))
        }
    }
}

fn inspect(table: &IndicatorTable) -> Result<(), String> {
    println!("rows: {}", table.len());
    if let Some((first, last)) = table.year_bounds() {
        println!(
            "years: {first}..{last} ({} distinct)",
            table.years().len()
        );
    }
    println!("indicators: {}", table.catalog().len());
    for (id, label) in table.indicator_labels() {
        println!("  {id}  {label}");
    }
    let continents = table.group_values(GroupKey::Continent);
    if !continents.is_empty() {
        println!("continents: {}", continents.join(", "));
    }
    println!("countries: {}", table.country_names().count());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("inspect") => CommandKind::Inspect,
        _ => {
            return Err(
                "usage: selection_replay_tool <replay|inspect> --scenario <path> [--output <path>]"
                    .to_owned(),
            );
        }
    };

    let mut scenario = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--scenario" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --scenario".to_owned())?;
                scenario = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                return Err(
                    "usage: selection_replay_tool <replay|inspect> --scenario <path> [--output <path>]"
                        .to_owned(),
                );
            }
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let scenario = scenario.ok_or_else(|| "missing --scenario".to_owned())?;
    Ok(CliArgs {
        command,
        scenario,
        output,
    })
}
