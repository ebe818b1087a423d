use super::*;

fn with_len(len: usize) -> SlideshowState {
    let mut state = SlideshowState::default();
    state.load(len);
    state
}

// =============================================================
// advance
// =============================================================

#[test]
fn next_wraps_to_first() {
    let mut state = with_len(3);
    state.advance(Direction::Next);
    state.advance(Direction::Next);
    assert_eq!(state.current, 2);
    state.advance(Direction::Next);
    assert_eq!(state.current, 0);
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut state = with_len(4);
    state.advance(Direction::Prev);
    assert_eq!(state.current, 3);
}

#[test]
fn n_advances_return_to_start_for_any_len() {
    for len in 1..=12 {
        for direction in [Direction::Next, Direction::Prev] {
            let mut state = with_len(len);
            for _ in 0..len {
                state.advance(direction);
                assert!(state.current < len);
            }
            assert_eq!(state.current, 0, "len {len}, {direction:?}");
        }
    }
}

#[test]
fn single_slide_stays_put() {
    let mut state = with_len(1);
    state.advance(Direction::Next);
    state.advance(Direction::Prev);
    assert_eq!(state.current, 0);
    assert!(state.is_active(0));
}

#[test]
fn advance_without_slides_is_noop() {
    let mut state = SlideshowState::default();
    state.advance(Direction::Next);
    state.advance(Direction::Prev);
    assert_eq!(state, SlideshowState::default());
}

// =============================================================
// load / is_active
// =============================================================

#[test]
fn load_resets_index() {
    let mut state = with_len(5);
    state.advance(Direction::Prev);
    state.load(2);
    assert_eq!(state.current, 0);
    assert_eq!(state.len, 2);
}

#[test]
fn exactly_one_slide_is_active() {
    let mut state = with_len(4);
    state.advance(Direction::Next);
    let active: Vec<usize> = (0..4).filter(|&i| state.is_active(i)).collect();
    assert_eq!(active, vec![1]);
}

#[test]
fn nothing_active_without_slides() {
    assert!(!SlideshowState::default().is_active(0));
}
