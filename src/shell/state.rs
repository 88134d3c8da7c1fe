//! Session states and the transition table between them.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellState {
    /// Waiting for the user to name an image (or type `exit`).
    AwaitImage,
    /// An image is loaded; waiting for a filter choice.
    ChooseFilter,
    /// A filter ran; asking whether to save, then whether to load another.
    ConfirmSave,
    Exit,
}

/// Outcome of one step of the shell, fed to [`ShellState::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellEvent {
    ImageLoaded,
    LoadFailed,
    FilterApplied,
    FilterFailed,
    /// Save step done; `load_new` is the answer to "load a new image?".
    Finished { load_new: bool },
    /// The user asked to exit, or input ended.
    Quit,
}

impl ShellState {
    /// Next state for `event`, or `None` when the event cannot happen in
    /// this state.
    pub fn next(self, event: ShellEvent) -> Option<ShellState> {
        use ShellEvent::*;
        use ShellState::*;
        let next = match (self, event) {
            (Exit, _) => return None,
            (_, Quit) => Exit,
            (AwaitImage, ImageLoaded) => ChooseFilter,
            (AwaitImage, LoadFailed) => AwaitImage,
            (ChooseFilter, FilterApplied) => ConfirmSave,
            (ChooseFilter, FilterFailed) => ChooseFilter,
            (ConfirmSave, Finished { load_new: true }) => AwaitImage,
            (ConfirmSave, Finished { load_new: false }) => ChooseFilter,
            _ => return None,
        };
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::ShellEvent::*;
    use super::ShellState::*;

    #[test]
    fn happy_path_cycles_back_to_filters() {
        let mut s = AwaitImage;
        for (event, expected) in [
            (ImageLoaded, ChooseFilter),
            (FilterApplied, ConfirmSave),
            (Finished { load_new: false }, ChooseFilter),
            (FilterApplied, ConfirmSave),
            (Finished { load_new: true }, AwaitImage),
        ] {
            s = s.next(event).unwrap();
            assert_eq!(s, expected);
        }
    }

    #[test]
    fn failures_stay_in_place() {
        assert_eq!(AwaitImage.next(LoadFailed), Some(AwaitImage));
        assert_eq!(ChooseFilter.next(FilterFailed), Some(ChooseFilter));
    }

    #[test]
    fn quit_exits_from_any_live_state() {
        for s in [AwaitImage, ChooseFilter, ConfirmSave] {
            assert_eq!(s.next(Quit), Some(Exit));
        }
        assert_eq!(Exit.next(Quit), None);
    }

    #[test]
    fn impossible_events_are_rejected() {
        assert_eq!(AwaitImage.next(FilterApplied), None);
        assert_eq!(ChooseFilter.next(ImageLoaded), None);
        assert_eq!(ConfirmSave.next(LoadFailed), None);
    }
}
