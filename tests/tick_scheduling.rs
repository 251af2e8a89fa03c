use std::{sync::Arc, time::Duration};
use tokio::time::sleep;

use countdown_clock::{
    state::AppState,
    tasks::{tick_dispatch_task, TokioScheduler},
    timer::{Direction, TimerBounds, TimerCore, TimerState},
};

fn spawn_state() -> Arc<AppState> {
    let (state, ticks) = AppState::new(0, "127.0.0.1".to_string(), TimerBounds::default());
    let state = Arc::new(state);
    tokio::spawn(tick_dispatch_task(Arc::clone(&state), ticks));
    state
}

fn scheduler_active(state: &AppState) -> bool {
    state.timer.lock().unwrap().scheduler().is_active()
}

#[tokio::test(start_paused = true)]
async fn counts_down_once_per_second_and_stops_on_reset() {
    let state = spawn_state();

    state.adjust(Direction::Add).unwrap();
    let view = state.toggle().unwrap();
    assert_eq!(view.remaining_seconds, 120);
    assert!(view.is_running);
    assert!(scheduler_active(&state));

    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(state.get_view().unwrap().remaining_seconds, 117);

    let view = state.reset().unwrap();
    assert_eq!(view.remaining_seconds, 60);
    assert!(!view.is_running);
    assert!(!scheduler_active(&state));

    sleep(Duration::from_secs(10)).await;
    let view = state.get_view().unwrap();
    assert_eq!(view.remaining_seconds, 60);
    assert!(!view.is_running);
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_and_resume_continues() {
    let state = spawn_state();

    state.toggle().unwrap();
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(state.get_view().unwrap().remaining_seconds, 58);

    state.toggle().unwrap();
    sleep(Duration::from_secs(10)).await;
    assert_eq!(state.get_view().unwrap().remaining_seconds, 58);

    state.toggle().unwrap();
    sleep(Duration::from_millis(1_200)).await;
    assert_eq!(state.get_view().unwrap().remaining_seconds, 57);
}

#[tokio::test(start_paused = true)]
async fn rapid_toggles_never_double_the_tick_rate() {
    let state = spawn_state();

    for _ in 0..9 {
        state.toggle().unwrap();
    }
    assert!(state.get_view().unwrap().is_running);

    sleep(Duration::from_millis(5_500)).await;
    assert_eq!(state.get_view().unwrap().remaining_seconds, 55);
}

#[tokio::test(start_paused = true)]
async fn holds_at_zero_while_running() {
    let state = spawn_state();

    state.toggle().unwrap();
    sleep(Duration::from_secs(75)).await;

    let view = state.get_view().unwrap();
    assert_eq!(view.remaining_seconds, 0);
    assert!(view.is_running);
    assert_eq!((view.minutes_display.as_str(), view.seconds_display.as_str()), ("00", "00"));
}

#[tokio::test(start_paused = true)]
async fn stale_tick_after_pause_is_rejected() {
    let state = spawn_state();

    state.toggle().unwrap();
    let stale = state.timer.lock().unwrap().active_tick().unwrap();
    state.toggle().unwrap();

    assert!(!state.apply_tick(stale).unwrap());
    assert_eq!(state.get_view().unwrap().remaining_seconds, 60);
}

#[tokio::test(start_paused = true)]
async fn watchers_see_every_tick() {
    let state = spawn_state();
    let mut updates = state.subscribe();

    state.toggle().unwrap();
    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().is_running);

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().remaining_seconds, 59);
}

#[tokio::test(start_paused = true)]
async fn teardown_releases_tick_source() {
    let state = spawn_state();

    state.toggle().unwrap();
    state.teardown().unwrap();
    assert!(!scheduler_active(&state));

    sleep(Duration::from_secs(5)).await;
    let view = state.get_view().unwrap();
    assert_eq!(view.remaining_seconds, 60);
    assert!(!view.is_running);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_core_stops_its_ticks() {
    let (scheduler, mut ticks) = TokioScheduler::new();
    let mut core = TimerCore::new(TimerBounds::default(), scheduler);

    core.toggle_running();
    assert_eq!(
        core.state(),
        TimerState {
            remaining_seconds: 60,
            is_running: true
        }
    );
    drop(core);

    sleep(Duration::from_secs(3)).await;
    assert_eq!(ticks.recv().await, None);
}
