use crate::canvas::surface::Surface;
use crate::utils::profiler::ScopeTimer;

/// Snapshot-based undo stack.
///
/// `stack` holds full copies of the canvas taken before each committed edit, with
/// the initial blank canvas at the bottom; it never drops below one entry.
/// `baseline` is a copy of the canvas as of the most recent commit. Preview tools
/// redraw from it every frame, and it is what gets pushed on the next commit.
pub struct History {
    stack: Vec<Surface>,
    baseline: Surface,
}

impl History {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: &Surface) -> Self {
        Self {
            stack: vec![initial.clone()],
            baseline: initial.clone(),
        }
    }

    /// Number of stored snapshots, always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Canvas state as of the last commit or undo.
    pub fn baseline(&self) -> &Surface {
        &self.baseline
    }

    /// Record a finished edit: push the pre-edit baseline and adopt a copy of `canvas`.
    pub fn commit(&mut self, canvas: &Surface) {
        let _timer = ScopeTimer::new("history_commit");
        let previous = std::mem::replace(&mut self.baseline, canvas.clone());
        self.stack.push(previous);
        log::debug!("history commit, depth {}", self.stack.len());
    }

    /// Step back one edit, writing the restored state into `canvas`.
    /// With a single entry left this just re-displays it.
    pub fn undo(&mut self, canvas: &mut Surface) {
        if self.stack.len() > 1 {
            if let Some(snapshot) = self.stack.pop() {
                canvas.copy_from(&snapshot);
                self.baseline = snapshot;
            }
        } else if let Some(first) = self.stack.first() {
            canvas.copy_from(first);
            self.baseline.copy_from(first);
        }
        log::debug!("history undo, depth {}", self.stack.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    #[test]
    fn commit_pushes_pre_edit_state() {
        let mut canvas = Surface::new(2, 2, Color32::WHITE);
        let mut history = History::new(&canvas);

        canvas.set(0, 0, Color32::RED);
        history.commit(&canvas);
        assert_eq!(history.len(), 2);
        assert_eq!(history.baseline(), &canvas);

        canvas.set(1, 1, Color32::BLUE);
        history.commit(&canvas);
        let after_second = canvas.clone();

        canvas.set(0, 1, Color32::GREEN);
        history.commit(&canvas);

        history.undo(&mut canvas);
        assert_eq!(canvas, after_second);
        assert_eq!(history.baseline(), &after_second);
    }

    #[test]
    fn undo_never_empties_the_stack() {
        let blank = Surface::new(3, 3, Color32::WHITE);
        let mut canvas = blank.clone();
        let mut history = History::new(&canvas);

        canvas.fill(Color32::BLACK);
        history.commit(&canvas);

        for _ in 0..5 {
            history.undo(&mut canvas);
            assert_eq!(history.len(), 1);
            assert_eq!(canvas, blank);
        }
    }

    #[test]
    fn baseline_is_a_copy_not_a_reference() {
        let mut canvas = Surface::new(2, 1, Color32::WHITE);
        let mut history = History::new(&canvas);
        history.commit(&canvas);
        canvas.fill(Color32::RED);
        assert!(history.baseline().pixels().iter().all(|&p| p == Color32::WHITE));
    }
}
