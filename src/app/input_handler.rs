use eframe::egui;

use super::render_helper::CanvasView;
use super::state::FrameInput;
use crate::PainterApp;
use crate::tools::KeyInput;
use crate::utils::geometry::Point;

/// Map a screen position to the canvas pixel under it. May be off the canvas.
pub fn screen_to_canvas(pos: egui::Pos2, view: &CanvasView) -> Point {
    let local = pos - view.origin;
    Point::new(local.x.floor() as i32, local.y.floor() as i32)
}

/// Keys the text tool cares about, in the order they were typed.
pub fn collect_keys(events: &[egui::Event]) -> Vec<KeyInput> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Text(text) => Some(KeyInput::Text(text.clone())),
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Backspace => Some(KeyInput::Backspace),
                egui::Key::Escape
                | egui::Key::Tab
                | egui::Key::Enter
                | egui::Key::ArrowUp
                | egui::Key::ArrowDown
                | egui::Key::ArrowLeft
                | egui::Key::ArrowRight => Some(KeyInput::Navigation),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Feed this frame's pointer and keyboard state to the session.
pub fn handle_input(app: &mut PainterApp, ctx: &egui::Context, view: &CanvasView) {
    let (pos, down, pressed, released, events) = ctx.input(|i| {
        (
            i.pointer.latest_pos(),
            i.pointer.primary_down(),
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.events.clone(),
        )
    });
    let keys = collect_keys(&events);

    // presses that egui routed to a widget other than the canvas belong to that widget
    let pressed = pressed && view.response.hovered();

    let Some(pos) = pos else {
        app.pointer = None;
        return;
    };
    let pointer = screen_to_canvas(pos, view);
    app.pointer = app
        .session
        .canvas()
        .contains(pointer.x, pointer.y)
        .then_some(pointer);

    app.session.frame(&FrameInput {
        pointer,
        button_down: down,
        pressed,
        released,
        keys,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_editing_keys_are_mapped() {
        let events = vec![
            egui::Event::Text("a".into()),
            egui::Event::Key {
                key: egui::Key::Backspace,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            },
            egui::Event::Key {
                key: egui::Key::Enter,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            },
            egui::Event::Key {
                key: egui::Key::Backspace,
                physical_key: None,
                pressed: false,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            },
        ];
        assert_eq!(
            collect_keys(&events),
            vec![
                KeyInput::Text("a".into()),
                KeyInput::Backspace,
                KeyInput::Navigation
            ]
        );
    }
}
