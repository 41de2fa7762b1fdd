//! Menu click behaviour tests

use sleeper::core::state::PREFERENCES_ALERT;
use sleeper::{Alert, AppState, Outcome, TrayAction};

fn click(state: &mut AppState, action: TrayAction) -> Outcome {
    // Same path as the event loop: menu id -> action -> state transition
    let action = TrayAction::from_menu_id(&action.menu_id()).expect("known menu id");
    state.apply(action)
}

#[test]
fn test_allow_sleep_click_toggles_prior_value() {
    for initial in [false, true] {
        let mut state = AppState::new(initial);
        assert_eq!(
            click(&mut state, TrayAction::ToggleSleep),
            Outcome::SleepToggled { allowed: !initial }
        );
        assert_eq!(state.sleep.is_allowed(), !initial);

        // A second click restores the original value
        click(&mut state, TrayAction::ToggleSleep);
        assert_eq!(state.sleep.is_allowed(), initial);
    }
}

#[test]
fn test_preferences_always_shows_same_alert() {
    let mut state = AppState::default();
    let expected = Outcome::Alert(Alert::new(PREFERENCES_ALERT));

    for _ in 0..3 {
        assert_eq!(click(&mut state, TrayAction::Preferences), expected);
    }
    // Interleaved toggles don't change the alert
    click(&mut state, TrayAction::ToggleSleep);
    assert_eq!(click(&mut state, TrayAction::Preferences), expected);
    assert_eq!(PREFERENCES_ALERT, "No preferences yet");
}

#[test]
fn test_quit_click_requests_exit() {
    let mut state = AppState::new(true);
    assert_eq!(click(&mut state, TrayAction::Quit), Outcome::Quit);
    assert!(state.sleep.is_allowed());
}
