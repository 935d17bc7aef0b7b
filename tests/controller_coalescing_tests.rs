use std::sync::mpsc;

use plotboard::api::{
    ControllerState, DashboardController, NullPresenter, RecordingPresenter, Response,
    SelectionEvent, scatter_figure,
};
use plotboard::core::{GroupKey, IndicatorId, IndicatorTable, Observation, Selection};

fn table() -> IndicatorTable {
    IndicatorTable::from_observations(vec![
        Observation::new("Chile", "gdpPercap", 1997, 10118.0).with_location("CHL", "South America"),
        Observation::new("Chile", "lifeExp", 1997, 75.8).with_location("CHL", "South America"),
        Observation::new("Chile", "pop", 1997, 14_599_929.0).with_location("CHL", "South America"),
        Observation::new("Japan", "gdpPercap", 1997, 28817.0).with_location("JPN", "Asia"),
        Observation::new("Japan", "lifeExp", 1997, 80.7).with_location("JPN", "Asia"),
        Observation::new("Chile", "gdpPercap", 2007, 13171.0).with_location("CHL", "South America"),
        Observation::new("Chile", "lifeExp", 2007, 78.6).with_location("CHL", "South America"),
    ])
}

fn id(table: &IndicatorTable, label: &str) -> IndicatorId {
    table.catalog().id(label).expect("indicator in catalog")
}

fn controller() -> DashboardController {
    let table = table();
    let initial = Selection::new([id(&table, "gdpPercap"), id(&table, "lifeExp")], 1997);
    DashboardController::new(table, initial)
}

#[test]
fn process_without_pending_changes_is_no_update() {
    let mut controller = controller();
    assert!(!controller.has_pending());
    assert_eq!(controller.process().expect("process"), Response::NoUpdate);
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn events_merge_field_by_field_before_processing() {
    let mut controller = controller();
    let pop = id(controller.table(), "pop");
    let gdp = id(controller.table(), "gdpPercap");
    let life = id(controller.table(), "lifeExp");

    controller.submit(SelectionEvent::YearChanged(2007));
    controller.submit(SelectionEvent::IndicatorsChanged(vec![gdp, life, pop]));
    controller.submit(SelectionEvent::GroupKeyChanged(GroupKey::Country));
    assert!(controller.has_pending());

    let response = controller.process().expect("process");
    assert!(matches!(response, Response::Figure(_)));

    let selection = controller.selection();
    assert_eq!(selection.year, 2007);
    assert_eq!(selection.indicators.as_slice(), [gdp, life, pop]);
    assert_eq!(selection.group_by, GroupKey::Country);
}

#[test]
fn repeated_changes_to_one_field_keep_only_the_last() {
    let mut controller = controller();
    controller.submit(SelectionEvent::YearChanged(1952));
    controller.submit(SelectionEvent::YearChanged(1977));
    controller.submit(SelectionEvent::YearChanged(2007));
    controller.process().expect("process");
    assert_eq!(controller.selection().year, 2007);
}

#[test]
fn replacement_overrides_earlier_field_changes() {
    let mut controller = controller();
    let gdp = id(controller.table(), "gdpPercap");
    let life = id(controller.table(), "lifeExp");

    controller.submit(SelectionEvent::YearChanged(1952));
    let replacement = Selection::new([life, gdp], 2007).with_group_by(GroupKey::Country);
    controller.submit(SelectionEvent::SelectionReplaced(replacement.clone()));
    controller.process().expect("process");
    assert_eq!(controller.selection(), &replacement);
}

#[test]
fn empty_indicator_list_keeps_the_last_figure() {
    let mut controller = controller();
    controller.submit(SelectionEvent::IndicatorsChanged(Vec::new()));
    let response = controller.process().expect("process");
    assert_eq!(response, Response::NoUpdate);
    // The widget state still moved.
    assert!(controller.selection().indicators.is_empty());
}

#[test]
fn unknown_indicator_keeps_the_last_figure_but_commits_the_selection() {
    let mut controller = controller();
    let gdp = id(controller.table(), "gdpPercap");
    let ghost = IndicatorId::from_raw(55);
    controller.submit(SelectionEvent::IndicatorsChanged(vec![gdp, ghost]));
    let response = controller.process().expect("process");
    assert_eq!(response, Response::NoUpdate);
    assert_eq!(controller.selection().indicators.as_slice(), [gdp, ghost]);
}

#[test]
fn single_indicator_produces_the_empty_figure() {
    let mut controller = controller();
    let gdp = id(controller.table(), "gdpPercap");
    controller.submit(SelectionEvent::IndicatorsChanged(vec![gdp]));
    let response = controller.process().expect("process");
    let Response::Figure(figure) = response else {
        panic!("expected a figure response");
    };
    assert!(figure.is_empty());
}

#[test]
fn run_coalesces_a_burst_into_one_presented_figure() {
    let mut controller = controller();
    let gdp = id(controller.table(), "gdpPercap");
    let life = id(controller.table(), "lifeExp");
    let pop = id(controller.table(), "pop");

    let (sender, receiver) = mpsc::channel();
    sender.send(SelectionEvent::YearChanged(1952)).expect("send");
    sender.send(SelectionEvent::YearChanged(2007)).expect("send");
    sender
        .send(SelectionEvent::IndicatorsChanged(vec![gdp, life, pop]))
        .expect("send");
    drop(sender);

    let mut presenter = RecordingPresenter::new();
    controller.run(&receiver, &mut presenter).expect("run");

    assert_eq!(presenter.presented.len(), 1);
    let expected = scatter_figure(
        controller.table(),
        &Selection::new([gdp, life, pop], 2007),
    )
    .expect("figure");
    assert_eq!(presenter.last(), Some(&expected));
}

#[test]
fn run_presents_nothing_when_the_burst_ends_unplottable() {
    let mut controller = controller();
    let (sender, receiver) = mpsc::channel();
    sender.send(SelectionEvent::YearChanged(2007)).expect("send");
    sender
        .send(SelectionEvent::IndicatorsChanged(Vec::new()))
        .expect("send");
    drop(sender);

    let mut presenter = RecordingPresenter::new();
    controller.run(&receiver, &mut presenter).expect("run");
    assert!(presenter.presented.is_empty());
}

#[test]
fn run_returns_once_every_sender_is_gone() {
    let mut controller = controller();
    let (sender, receiver) = mpsc::channel::<SelectionEvent>();
    drop(sender);
    controller
        .run(&receiver, &mut NullPresenter)
        .expect("run");
    assert_eq!(controller.state(), ControllerState::Idle);
}

#[test]
fn run_works_across_threads() {
    let mut controller = controller();
    let gdp = id(controller.table(), "gdpPercap");
    let life = id(controller.table(), "lifeExp");

    let (sender, receiver) = mpsc::channel();
    let feeder = std::thread::spawn(move || {
        for year in [1952, 1977, 2007] {
            sender.send(SelectionEvent::YearChanged(year)).expect("send");
        }
        sender
            .send(SelectionEvent::IndicatorsChanged(vec![life, gdp]))
            .expect("send");
    });

    let mut presenter = RecordingPresenter::new();
    controller.run(&receiver, &mut presenter).expect("run");
    feeder.join().expect("feeder thread");

    // However the sends interleave, the last presented figure reflects the
    // final merged selection.
    let expected = scatter_figure(
        controller.table(),
        &Selection::new([life, gdp], 2007),
    )
    .expect("figure");
    assert!(!presenter.presented.is_empty());
    assert_eq!(presenter.last(), Some(&expected));
}
