use std::time::Duration;

use stepwise_pathfinding::compare::run_to_completion;
use stepwise_pathfinding::prelude::*;
use stepwise_pathfinding::{CellKind, Playback, SessionError};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session(config: SessionConfig) -> Session {
    let mut session = Session::new(config);
    session.set_start((0, 0)).unwrap();
    session
        .set_goal((config.rows - 1, config.columns - 1))
        .unwrap();
    session
}

#[test]
fn driver_plays_like_a_direct_run() {
    init();
    for kind in StrategyKind::ALL {
        let mut session = session(SessionConfig::default());
        for row in 0..15 {
            session.toggle_wall((row, 10)).unwrap();
            session.toggle_wall((19 - row, 25)).unwrap();
        }
        session.set_strategy(kind);
        let expected = run_to_completion(session.grid(), kind, PathOrigin::Target).unwrap();

        let mut driver = Driver::for_session(&session);
        assert_eq!(driver.interval(), Duration::from_millis(20));
        driver.start(&mut session).unwrap();
        let mut elapsed = Duration::ZERO;
        while driver.playback() == Playback::Playing {
            driver.advance(&mut session, Duration::from_millis(35));
            elapsed += Duration::from_millis(35);
            assert!(elapsed < Duration::from_secs(60), "{} never finished", kind);
        }

        assert_eq!(driver.playback(), Playback::Finished(expected.result));
        assert_eq!(session.grid(), &expected.grid);
        assert_eq!(session.search().unwrap().path(), expected.path.as_ref());
    }
}

#[test]
fn editing_walls_cancels_playback() {
    init();
    let mut session = session(SessionConfig::SMALL);
    let mut driver = Driver::for_session(&session);
    driver.start(&mut session).unwrap();
    for _ in 0..5 {
        driver.tick(&mut session);
    }
    driver.pause();

    // Start and Goal are locked, Walls are not
    assert!(session.set_goal((3, 3)).is_err());
    assert_eq!(session.toggle_wall((5, 5)), Ok(true));
    assert!(!session.grid().has_search_marks());

    driver.resume();
    assert_eq!(driver.tick(&mut session), None);
    assert_eq!(driver.playback(), Playback::Idle);

    // a fresh run goes around the new Wall
    driver.start(&mut session).unwrap();
    driver.advance(&mut session, Duration::from_secs(60));
    assert_eq!(driver.playback(), Playback::Finished(StepResult::Found));
    assert_eq!(session.grid().kind((5, 5)), Some(CellKind::Wall));
}

#[test]
fn reset_keeps_layout_and_clear_does_not() {
    init();
    let mut session = session(SessionConfig::with_size(6, 6));
    session.toggle_wall((2, 2)).unwrap();
    session.start_search().unwrap();
    while session.step() == Some(StepResult::Continue) {}
    assert!(session.grid().has_search_marks());

    session.reset();
    assert!(!session.grid().has_search_marks());
    assert_eq!(session.grid().start(), Some((0, 0)));
    assert_eq!(session.grid().kind((2, 2)), Some(CellKind::Wall));

    session.clear();
    assert_eq!(session.grid().start(), None);
    assert_eq!(session.grid().goal(), None);
    assert_eq!(session.start_search(), Err(SessionError::MissingStart));
}

#[test]
fn parsed_grid_round_trips_through_a_session() {
    init();
    let text = "S..#\n.#..\n...G";
    let grid: Grid = text.parse().unwrap();
    let mut session = Session::with_grid(grid, SessionConfig::default());
    assert_eq!(session.grid().to_string(), text);

    session.select_strategy("BFS").unwrap();
    session.start_search().unwrap();
    while session.step() == Some(StepResult::Continue) {}
    assert_eq!(session.search().unwrap().path().unwrap().cost(), 5);
    session.reset();
    assert_eq!(session.grid().to_string(), text);
}

#[cfg(feature = "generate")]
#[test]
fn generated_terrain_keeps_start_and_goal() {
    use stepwise_pathfinding::terrain::TerrainConfig;

    init();
    let mut session = session(SessionConfig::default());
    session.start_search().unwrap();
    session.step();

    let walls = session.generate_terrain(&TerrainConfig::with_seed(17));
    assert!(session.search().is_none());
    assert_eq!(walls, session.grid().positions_of(CellKind::Wall).len());
    assert_eq!(session.grid().start(), Some((0, 0)));
    assert_eq!(session.grid().goal(), Some((19, 39)));

    session.start_search().unwrap();
    let mut result = StepResult::Continue;
    while let Some(next) = session.step() {
        result = next;
        if next.is_terminal() {
            break;
        }
    }
    assert!(result.is_terminal());
}
