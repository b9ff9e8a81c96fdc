// Timeline pointer adapter
//
// Feeds egui pointer input for the timeline surface into the schedule
// controller's drag state machine.
// - press on the surface starts a session; a press on a block also reports a click
// - movement inside the visible surface updates the session
// - leaving the visible surface or releasing the button ends it

use egui::{Pos2, Rect};

use crate::services::interaction::Interaction;
use crate::services::schedule::ScheduleController;

/// Clickable area of a rendered event block
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventHitbox {
    pub rect: Rect,
    pub event_id: i64,
}

/// Event under `pos`, preferring the block drawn last (topmost).
pub fn hit_test(hitboxes: &[EventHitbox], pos: Pos2) -> Option<i64> {
    hitboxes
        .iter()
        .rev()
        .find(|hitbox| hitbox.rect.contains(pos))
        .map(|hitbox| hitbox.event_id)
}

/// Pointer sample taken once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub position: Option<Pos2>,
}

impl PointerSample {
    pub fn from_ui(ui: &egui::Ui) -> Self {
        ui.input(|i| Self {
            pressed: i.pointer.primary_pressed(),
            released: i.pointer.primary_released(),
            position: i.pointer.interact_pos(),
        })
    }
}

/// Apply one frame of pointer input.
///
/// `timeline` is the full timeline rectangle (offsets are measured from its
/// top) and `visible` the part of it currently on screen. `hovered` tells
/// whether nothing else (a dialog, a popup) sits above the timeline.
pub fn drive_pointer(
    controller: &mut ScheduleController,
    sample: PointerSample,
    timeline: Rect,
    visible: Rect,
    hovered: bool,
    hitboxes: &[EventHitbox],
) -> Interaction {
    let offset_of = |pos: Pos2| pos.y - timeline.top();
    let on_surface = |pos: Pos2| visible.contains(pos);
    let mut outcome = Interaction::Nothing;

    if sample.pressed && hovered {
        if let Some(pos) = sample.position.filter(|&pos| on_surface(pos)) {
            controller.pointer_down(offset_of(pos));
            if let Some(event_id) = hit_test(hitboxes, pos) {
                outcome = controller.click_event(event_id);
            }
        }
    }

    if controller.is_dragging() {
        match sample.position {
            Some(pos) if on_surface(pos) => controller.pointer_move(offset_of(pos)),
            _ => return controller.pointer_leave(),
        }
    }

    if sample.released && controller.is_dragging() {
        outcome = controller.pointer_up();
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time_range::TimeRange;
    use crate::services::event::EventStore;
    use chrono::NaiveDate;
    use egui::{pos2, vec2};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    fn timeline() -> Rect {
        Rect::from_min_size(pos2(0.0, -500.0), vec2(400.0, 1440.0))
    }

    fn visible() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 600.0))
    }

    fn sample(pressed: bool, released: bool, y: f32) -> PointerSample {
        PointerSample {
            pressed,
            released,
            position: Some(pos2(100.0, y)),
        }
    }

    fn controller() -> ScheduleController {
        ScheduleController::new(EventStore::new(), day())
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let boxes = [
            EventHitbox {
                rect: Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)),
                event_id: 1,
            },
            EventHitbox {
                rect: Rect::from_min_size(pos2(50.0, 50.0), vec2(100.0, 100.0)),
                event_id: 2,
            },
        ];
        assert_eq!(hit_test(&boxes, pos2(75.0, 75.0)), Some(2));
        assert_eq!(hit_test(&boxes, pos2(10.0, 10.0)), Some(1));
        assert_eq!(hit_test(&boxes, pos2(300.0, 300.0)), None);
    }

    #[test]
    fn test_press_drag_release_uses_timeline_offsets() {
        let mut controller = controller();
        // Screen y 40 is offset 540 because the timeline is scrolled by 500.
        let none = drive_pointer(&mut controller, sample(true, false, 40.0), timeline(), visible(), true, &[]);
        assert_eq!(none, Interaction::Nothing);
        drive_pointer(&mut controller, sample(false, false, 50.0), timeline(), visible(), true, &[]);

        let outcome = drive_pointer(&mut controller, sample(false, true, 60.0), timeline(), visible(), true, &[]);
        assert_eq!(
            outcome,
            Interaction::CreateRange(TimeRange::new(
                day().and_hms_opt(9, 0, 0).unwrap(),
                day().and_hms_opt(9, 20, 0).unwrap(),
            ))
        );
    }

    #[test]
    fn test_press_on_event_edits_on_release() {
        let mut controller = controller();
        let boxes = [EventHitbox {
            rect: Rect::from_min_size(pos2(0.0, 30.0), vec2(200.0, 60.0)),
            event_id: 5,
        }];
        drive_pointer(&mut controller, sample(true, false, 40.0), timeline(), visible(), true, &boxes);
        let outcome = drive_pointer(&mut controller, sample(false, true, 40.0), timeline(), visible(), true, &boxes);
        assert_eq!(outcome, Interaction::EditEvent(5));
    }

    #[test]
    fn test_leaving_surface_commits() {
        let mut controller = controller();
        drive_pointer(&mut controller, sample(true, false, 100.0), timeline(), visible(), true, &[]);
        let outcome = drive_pointer(&mut controller, sample(false, false, 700.0), timeline(), visible(), true, &[]);
        assert!(matches!(outcome, Interaction::CreateRange(_)));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_press_while_covered_is_ignored() {
        let mut controller = controller();
        drive_pointer(&mut controller, sample(true, false, 100.0), timeline(), visible(), false, &[]);
        assert!(!controller.is_dragging());
    }
}
