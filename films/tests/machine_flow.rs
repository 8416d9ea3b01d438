//! End-to-end flow: runtime + reducer + effects + in-memory GraphQL server

use std::time::Duration;

use films::{
    action::Action,
    api::FilmsClient,
    components::{Component, FilmsPage, FilmsPageProps},
    effect::FilmsEffects,
    graphql::{FetchPolicy, GraphQlClient},
    machine::StateValue,
    reducer::reducer,
    state::{AllFilms, AppState},
    testing::{film, MockReply, MockTransport},
};
use films_core::testing::RenderHarness;
use films_core::EffectRuntime;

type Runtime = EffectRuntime<AppState, Action, films::effect::Effect>;

fn runtime() -> Runtime {
    EffectRuntime::new(AppState::default(), reducer)
}

fn effects(transport: MockTransport, policy: FetchPolicy) -> FilmsEffects<MockTransport> {
    FilmsEffects::new(FilmsClient::new(
        GraphQlClient::new(transport).with_fetch_policy(policy),
    ))
}

/// Dispatch `action`, then dispatch the result of the fetch it started.
async fn dispatch_and_settle(
    runtime: &mut Runtime,
    effects: &FilmsEffects<MockTransport>,
    action: Action,
) -> Action {
    runtime.dispatch(action, |e, ctx| effects.handle(e, ctx));
    let result = runtime.next_action().await.expect("fetch result");
    runtime.dispatch(result.clone(), |e, ctx| effects.handle(e, ctx));
    result
}

async fn nothing_queued(runtime: &mut Runtime) -> bool {
    tokio::time::timeout(Duration::from_millis(20), runtime.next_action())
        .await
        .is_err()
}

#[tokio::test]
async fn test_new_hope_end_to_end() {
    let transport = MockTransport::serving(&[film("A New Hope", 4, "George Lucas")]);
    let effects = effects(transport, FetchPolicy::CacheFirst);
    let mut runtime = runtime();

    assert!(runtime.state().machine.matches(StateValue::Loading));
    dispatch_and_settle(&mut runtime, &effects, Action::FilmsStart).await;

    assert!(runtime.state().machine.matches(StateValue::Success));

    let mut render = RenderHarness::new(60, 16);
    let mut page = FilmsPage::new();
    let output = render.render_to_string_plain(|frame| {
        page.render(
            frame,
            frame.area(),
            FilmsPageProps {
                state: runtime.state(),
            },
        );
    });

    let rows: Vec<&str> = output.lines().filter(|l| l.contains("Episode")).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("A New Hope"));
}

#[tokio::test]
async fn test_each_refetch_runs_one_fetch() {
    let transport = MockTransport::serving(&[film("A New Hope", 4, "George Lucas")]);
    let effects = effects(transport, FetchPolicy::NetworkOnly);
    let mut runtime = runtime();

    dispatch_and_settle(&mut runtime, &effects, Action::FilmsStart).await;
    assert_eq!(effects.client().graphql().transport().calls(), 1);

    dispatch_and_settle(&mut runtime, &effects, Action::FilmsRefetch).await;
    assert_eq!(effects.client().graphql().transport().calls(), 2);
    assert!(runtime.state().machine.matches(StateValue::Success));
}

#[tokio::test]
async fn test_refetch_while_loading_does_not_fetch_again() {
    let transport = MockTransport::serving(&[film("A New Hope", 4, "George Lucas")]);
    let effects = effects(transport, FetchPolicy::NetworkOnly);
    let mut runtime = runtime();

    runtime.dispatch(Action::FilmsStart, |e, ctx| effects.handle(e, ctx));
    let changed = runtime.dispatch(Action::FilmsRefetch, |e, ctx| effects.handle(e, ctx));
    assert!(!changed);

    let result = runtime.next_action().await.expect("fetch result");
    assert!(matches!(result, Action::FilmsDidLoad(_)));
    assert!(nothing_queued(&mut runtime).await);
    assert_eq!(effects.client().graphql().transport().calls(), 1);
}

#[tokio::test]
async fn test_cache_first_refetch_served_from_cache() {
    let films = vec![film("A New Hope", 4, "George Lucas")];
    let effects = effects(MockTransport::serving(&films), FetchPolicy::CacheFirst);
    let mut runtime = runtime();

    dispatch_and_settle(&mut runtime, &effects, Action::FilmsStart).await;
    let result = dispatch_and_settle(&mut runtime, &effects, Action::FilmsRefetch).await;

    assert_eq!(result, Action::FilmsDidLoad(AllFilms::new(films)));
    assert_eq!(effects.client().graphql().transport().calls(), 1);
}

#[tokio::test]
async fn test_error_then_refetch_recovers() {
    let transport = MockTransport::new()
        .push(MockReply::Errors(vec!["rate limited".into()]))
        .push(MockReply::Data(films::testing::all_films_data(&[film(
            "A New Hope",
            4,
            "George Lucas",
        )])));
    let effects = effects(transport, FetchPolicy::CacheFirst);
    let mut runtime = runtime();

    dispatch_and_settle(&mut runtime, &effects, Action::FilmsStart).await;
    assert!(runtime.state().machine.matches(StateValue::Error));
    assert_eq!(
        runtime.state().machine.error(),
        Some("GraphQL error: rate limited")
    );

    dispatch_and_settle(&mut runtime, &effects, Action::FilmsRefetch).await;
    assert!(runtime.state().machine.matches(StateValue::Success));
    assert_eq!(effects.client().graphql().transport().calls(), 2);
}
