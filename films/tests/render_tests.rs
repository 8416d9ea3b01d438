//! Full-page render tests using RenderHarness

use films::{
    action::Action,
    components::{Component, FilmsPage, FilmsPageProps, CACHE_HINT, REFETCH_LABEL},
    reducer::reducer,
    state::{AllFilms, AppState},
    testing::film,
};
use films_core::testing::*;
use films_core::EventKind;

fn render_page(state: &AppState) -> String {
    let mut render = RenderHarness::new(70, 20);
    let mut page = FilmsPage::new();
    render.render_to_string_plain(|frame| {
        page.render(frame, frame.area(), FilmsPageProps { state });
    })
}

fn state_after(actions: Vec<Action>) -> AppState {
    let mut state = AppState::new("https://swapi.example/graphql");
    for action in actions {
        reducer(&mut state, action);
    }
    state
}

#[test]
fn test_render_loading_state() {
    let state = state_after(vec![Action::FilmsStart]);

    let output = render_page(&state);

    assert!(output.contains("Star Wars Films"), "Should show heading");
    assert!(output.contains("Loading..."), "Should show loading text");
    assert!(!output.contains("Episode"), "Should not show any film");
    assert!(!output.contains("Error"), "Should not show error");
}

#[test]
fn test_render_film_rows_in_order() {
    let films = vec![
        film("A New Hope", 4, "George Lucas"),
        film("The Empire Strikes Back", 5, "Irvin Kershner"),
        film("Return of the Jedi", 6, "Richard Marquand"),
    ];
    let state = state_after(vec![
        Action::FilmsStart,
        Action::FilmsDidLoad(AllFilms::new(films)),
    ]);

    let output = render_page(&state);

    let rows: Vec<&str> = output.lines().filter(|l| l.contains("Episode")).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].contains("A New Hope"));
    assert!(rows[1].contains("The Empire Strikes Back"));
    assert!(rows[2].contains("Return of the Jedi"));
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_render_error_state() {
    let state = state_after(vec![
        Action::FilmsStart,
        Action::FilmsDidError("server responded with HTTP 502".into()),
    ]);

    let output = render_page(&state);

    assert!(output.contains("Error :("), "Should show error label");
    assert!(output.contains("HTTP 502"), "Should show error message");
    assert!(!output.contains("Loading..."));
}

#[test]
fn test_render_refetch_control_in_every_state() {
    let states = [
        state_after(vec![Action::FilmsStart]),
        state_after(vec![Action::FilmsStart, Action::FilmsDidError("x".into())]),
        state_after(vec![
            Action::FilmsStart,
            Action::FilmsDidLoad(AllFilms::default()),
        ]),
    ];

    for state in &states {
        let output = render_page(state);
        assert!(output.contains(REFETCH_LABEL), "Should show refetch button");
        assert!(output.contains(CACHE_HINT), "Should show cache hint");
        assert!(output.contains("quit"), "Should show help bar");
    }
}

#[test]
fn test_render_shows_endpoint() {
    let output = render_page(&state_after(vec![]));
    assert!(output.contains("https://swapi.example/graphql"));
}

#[test]
fn test_refetch_hides_previous_rows() {
    let state = state_after(vec![
        Action::FilmsStart,
        Action::FilmsDidLoad(AllFilms::new(vec![film("A New Hope", 4, "George Lucas")])),
        Action::FilmsRefetch,
    ]);

    let output = render_page(&state);

    assert!(output.contains("Loading..."));
    assert!(!output.contains("A New Hope"));
}

#[test]
fn test_long_list_reachable_by_scrolling() {
    let films = (1..=9)
        .map(|i| film(&format!("Film {i}"), i, "Someone"))
        .collect();
    let mut state = state_after(vec![
        Action::FilmsStart,
        Action::FilmsDidLoad(AllFilms::new(films)),
    ]);

    let mut render = RenderHarness::new(80, 16);
    let mut page = FilmsPage::new();
    let mut seen = std::collections::BTreeSet::new();

    loop {
        let output = render.render_to_string_plain(|frame| {
            page.render(frame, frame.area(), FilmsPageProps { state: &state });
        });
        for row in output.lines().filter(|l| l.contains("Episode")) {
            for i in 1..=9 {
                if row.contains(&format!("Film {i} ")) {
                    seen.insert(i);
                }
            }
        }

        let actions = page.handle_event(&EventKind::Key(key("down")), FilmsPageProps { state: &state });
        if actions.is_empty() {
            break;
        }
        for action in actions {
            reducer(&mut state, action);
        }
    }

    assert_eq!(seen.len(), 9, "every film should be reachable, saw {:?}", seen);
    assert_eq!(state.list_offset, 1);
}

#[test]
fn test_duplicate_episode_ids_render_twice() {
    let state = state_after(vec![
        Action::FilmsStart,
        Action::FilmsDidLoad(AllFilms::new(vec![
            film("A New Hope", 4, "George Lucas"),
            film("Star Wars", 4, "George Lucas"),
        ])),
    ]);

    let output = render_page(&state);

    let rows: Vec<&str> = output.lines().filter(|l| l.contains("Episode 4")).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("A New Hope"));
    assert!(rows[1].contains("Star Wars"));
}
