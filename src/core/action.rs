//! # Actions
//!
//! Everything that can happen in werkbar becomes an `Action`.
//! User clicks a button? That's `Action::Activate(id)`.
//! The catalog fetch finishes? That's `Action::WorksLoaded(outcome)`.
//!
//! The `update()` function takes the current state and an action and applies
//! it. Side effects never happen here. They come back as `Effect` values
//! for the event loop to perform.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply an action, assert on the state and
//! the returned effect.

use log::{debug, info};

use crate::catalog::LoadOutcome;
use crate::core::gesture::SwipeDirection;
use crate::core::state::App;
use crate::core::work::WorkId;

/// Everything that can happen in the app.
#[derive(Debug)]
pub enum Action {
    /// A load attempt finished (successfully or degraded to the fallback).
    WorksLoaded(LoadOutcome),
    /// A tagged button was activated (pointer click).
    Activate(WorkId),
    /// Move to the previous work in the list.
    Previous,
    /// Move to the next work in the list.
    Next,
    /// A completed swipe gesture.
    Swipe(SwipeDirection),
    /// Re-run the loader without tearing down input bindings.
    Refresh,
    Quit,
}

/// Side effects the event loop performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn a catalog fetch (refresh path; nothing is in flight).
    SpawnLoad,
    /// The location changed: abort any in-flight fetch, then load for the
    /// new page.
    Reload,
    Quit,
}

/// The only mutation path for `App`.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::WorksLoaded(outcome) => {
            app.works = outcome.list;
            app.is_loaded = outcome.loaded;
            app.load_warning = outcome.warning;
            app.is_loading = false;
            app.status_message = if app.is_loaded {
                format!("{} works available", app.works.len())
            } else {
                String::new()
            };
            Effect::None
        }
        Action::Activate(target) => {
            if target == app.current_work {
                debug!("Ignoring activation of the active work {target}");
                return Effect::None;
            }
            navigate(app, target)
        }
        Action::Previous => match app.previous_target().cloned() {
            Some(target) => navigate(app, target),
            None => Effect::None,
        },
        Action::Next => match app.next_target().cloned() {
            Some(target) => navigate(app, target),
            None => Effect::None,
        },
        Action::Swipe(SwipeDirection::Previous) => update(app, Action::Previous),
        Action::Swipe(SwipeDirection::Next) => update(app, Action::Next),
        Action::Refresh => {
            if app.is_loading {
                debug!("Refresh requested while a load is in flight, ignoring");
                app.status_message = "Refresh already in progress".to_string();
                return Effect::None;
            }
            app.begin_load();
            Effect::SpawnLoad
        }
        Action::Quit => Effect::Quit,
    }
}

/// Full page transition: rebuild the location with the target's parameter
/// value, re-derive the current work, and reload the catalog for the new
/// page.
fn navigate(app: &mut App, target: WorkId) -> Effect {
    let next = app.location.with_werk(target.param_value());
    info!("Navigating to {target} ({next})");
    app.apply_location(next);
    app.begin_load();
    Effect::Reload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LoadOutcome, WorkList, LOAD_WARNING};
    use crate::test_support::test_app_with_works;

    const WORKS: &[&str] = &["bwv3", "bwv7", "bwv1006"];

    #[test]
    fn test_previous_at_list_start_is_noop() {
        let mut app = test_app_with_works(WORKS, "?werk=3");
        let before = app.location.clone();
        assert_eq!(update(&mut app, Action::Previous), Effect::None);
        assert_eq!(app.location, before);
        assert_eq!(app.current_work.as_str(), "bwv3");
    }

    #[test]
    fn test_next_at_list_end_is_noop() {
        let mut app = test_app_with_works(WORKS, "?werk=1006");
        assert_eq!(update(&mut app, Action::Next), Effect::None);
        assert_eq!(app.current_work.as_str(), "bwv1006");
    }

    #[test]
    fn test_prev_next_noop_when_current_not_listed() {
        let mut app = test_app_with_works(WORKS, "?werk=999");
        assert_eq!(update(&mut app, Action::Previous), Effect::None);
        assert_eq!(update(&mut app, Action::Next), Effect::None);
    }

    #[test]
    fn test_next_navigates_to_adjacent_work() {
        let mut app = test_app_with_works(WORKS, "?werk=3");
        assert_eq!(update(&mut app, Action::Next), Effect::Reload);
        assert_eq!(app.current_work.as_str(), "bwv7");
        assert_eq!(app.location.werk_param().as_deref(), Some("7"));
        assert!(app.is_loading);
    }

    #[test]
    fn test_previous_navigates_to_adjacent_work() {
        let mut app = test_app_with_works(WORKS, "?werk=1006");
        assert_eq!(update(&mut app, Action::Previous), Effect::Reload);
        assert_eq!(app.current_work.as_str(), "bwv7");
    }

    #[test]
    fn test_activate_current_work_is_noop() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        let before = app.location.clone();
        assert_eq!(
            update(&mut app, Action::Activate(WorkId::new("bwv7"))),
            Effect::None
        );
        assert_eq!(app.location, before);
        assert!(!app.is_loading);
    }

    #[test]
    fn test_activate_other_work_reloads() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        assert_eq!(
            update(&mut app, Action::Activate(WorkId::new("bwv1006"))),
            Effect::Reload
        );
        assert_eq!(app.current_work.as_str(), "bwv1006");
        assert_eq!(app.location.werk_param().as_deref(), Some("1006"));
    }

    #[test]
    fn test_activate_opaque_work_keeps_token_verbatim() {
        let mut app = test_app_with_works(&["bwv3", "foo"], "?werk=3");
        assert_eq!(
            update(&mut app, Action::Activate(WorkId::new("foo"))),
            Effect::Reload
        );
        assert_eq!(app.current_work.as_str(), "foo");
        assert_eq!(app.location.werk_param().as_deref(), Some("foo"));
    }

    #[test]
    fn test_swipe_maps_to_adjacent_navigation() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        assert_eq!(
            update(&mut app, Action::Swipe(SwipeDirection::Next)),
            Effect::Reload
        );
        assert_eq!(app.current_work.as_str(), "bwv1006");

        let mut app = test_app_with_works(WORKS, "?werk=7");
        assert_eq!(
            update(&mut app, Action::Swipe(SwipeDirection::Previous)),
            Effect::Reload
        );
        assert_eq!(app.current_work.as_str(), "bwv3");
    }

    #[test]
    fn test_refresh_spawns_load() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        assert_eq!(update(&mut app, Action::Refresh), Effect::SpawnLoad);
        assert!(app.is_loading);
    }

    #[test]
    fn test_refresh_is_serialized() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        app.begin_load();
        assert_eq!(update(&mut app, Action::Refresh), Effect::None);
        assert_eq!(app.status_message, "Refresh already in progress");
    }

    #[test]
    fn test_works_loaded_success() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        app.begin_load();
        let outcome = LoadOutcome {
            list: WorkList::from_raw(vec![WorkId::new("bwv7"), WorkId::new("bwv3")]),
            loaded: true,
            warning: None,
        };
        assert_eq!(update(&mut app, Action::WorksLoaded(outcome)), Effect::None);
        assert!(app.is_loaded);
        assert!(!app.is_loading);
        assert!(app.load_warning.is_none());
        assert_eq!(app.works.len(), 2);
        assert_eq!(app.status_message, "2 works available");
    }

    #[test]
    fn test_works_loaded_degraded_keeps_warning() {
        let mut app = test_app_with_works(WORKS, "?werk=7");
        app.begin_load();
        let outcome = LoadOutcome {
            list: WorkList::fallback(&WorkId::new("bwv1006")),
            loaded: false,
            warning: Some(LOAD_WARNING.to_string()),
        };
        update(&mut app, Action::WorksLoaded(outcome));
        assert!(!app.is_loaded);
        assert_eq!(app.load_warning.as_deref(), Some(LOAD_WARNING));
        assert_eq!(app.works.len(), 1);
    }
}
