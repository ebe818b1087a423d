use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::config::PageConfig;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(14)
}

#[test]
fn spawned_hearts_stay_in_range() {
    let mut rng = rng();
    let mut state = HeartsState::default();
    for _ in 0..500 {
        state.spawn(&mut rng);
    }
    for heart in &state.live {
        assert!(LEFT_VW_RANGE.contains(&heart.left_vw), "left {}", heart.left_vw);
        assert!(DURATION_S_RANGE.contains(&heart.duration_s), "duration {}", heart.duration_s);
    }
}

#[test]
fn ids_are_unique() {
    let mut rng = rng();
    let mut state = HeartsState::default();
    let a = state.spawn(&mut rng);
    let b = state.spawn(&mut rng);
    state.remove(a);
    let c = state.spawn(&mut rng);
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
}

#[test]
fn remove_only_drops_matching_heart() {
    let mut rng = rng();
    let mut state = HeartsState::default();
    let a = state.spawn(&mut rng);
    let b = state.spawn(&mut rng);
    assert!(state.remove(a));
    assert!(!state.remove(a));
    assert_eq!(state.live.len(), 1);
    assert_eq!(state.live[0].id, b);
}

#[test]
fn style_carries_position_and_duration() {
    let heart = Heart { id: 0, left_vw: 12.5, duration_s: 4.25 };
    assert_eq!(heart.style(), "left: 12.5vw; animation-duration: 4.25s;");
}

#[test]
fn live_count_is_bounded_and_returns_to_baseline() {
    let config = PageConfig::default();
    let mut rng = rng();
    let mut state = HeartsState::default();
    let mut pending: Vec<(u32, u64)> = Vec::new();

    // Spawn for 20 s, then keep running the clock until every removal fires.
    let spawn_until = 20_000;
    let end = spawn_until + config.heart_lifetime_ms;
    let mut now = 0;
    while now <= end {
        pending.retain(|&(due, id)| {
            if due <= now {
                state.remove(id);
                false
            } else {
                true
            }
        });
        if now > 0 && now <= spawn_until && now % config.heart_interval_ms == 0 {
            let id = state.spawn(&mut rng);
            pending.push((now + config.heart_lifetime_ms, id));
        }
        assert!(state.len() <= config.max_live_hearts() as usize);
        now += 500;
    }
    assert!(state.is_empty());
    assert!(pending.is_empty());
}
