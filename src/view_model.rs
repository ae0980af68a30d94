//! State the UI binds to: the selected color and the palette.

use crate::{
    color::{
        Color,
        state::ColorState,
    },
    palette_store::{
        LoadError,
        PaletteStore,
    },
};

/// User actions, e.g. triggered by buttons or menu entries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::VariantArray,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    Add,
    Delete,
    Open,
    Save,
    ChooseColor,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Delete => "Delete",
            Self::Open => "Open...",
            Self::Save => "Save...",
            Self::ChooseColor => "Choose Color...",
        }
    }
}

/// What [`ViewModel::dispatch`] did with an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Changed,
    Unchanged,
    /// The caller should ask the user for a palette file and pass its lines to
    /// [`ViewModel::load_from`].
    PickFileToOpen,
    /// The caller should ask the user where to save the output of
    /// [`ViewModel::save_to`].
    PickFileToSave,
    /// The caller should show a color picker and pass the result to
    /// [`ColorState::set_color`].
    PickColor,
}

#[derive(Clone, Debug, Default)]
pub struct ViewModel {
    pub color: ColorState,
    palette: PaletteStore,
}

impl ViewModel {
    pub fn new(initial_color: Color) -> Self {
        Self {
            color: ColorState::new(initial_color),
            palette: PaletteStore::default(),
        }
    }

    pub fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    pub fn selection(&self) -> Color {
        self.color.color()
    }

    pub fn is_selected(&self, color: Color) -> bool {
        self.selection() == color
    }

    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        let changed = match action {
            Action::Add => self.add_current(),
            Action::Delete => self.delete_current(),
            Action::Open => return ActionOutcome::PickFileToOpen,
            Action::Save if self.palette.is_empty() => false,
            Action::Save => return ActionOutcome::PickFileToSave,
            Action::ChooseColor => return ActionOutcome::PickColor,
        };

        if changed {
            ActionOutcome::Changed
        }
        else {
            ActionOutcome::Unchanged
        }
    }

    pub fn add_current(&mut self) -> bool {
        let color = self.selection();
        let added = self.palette.add(color);
        if added {
            tracing::debug!(%color, "added to palette");
        }
        added
    }

    pub fn delete_current(&mut self) -> bool {
        self.delete(self.selection())
    }

    /// Removes `color` from the palette. If it was selected, the first
    /// remaining entry becomes the selection.
    pub fn delete(&mut self, color: Color) -> bool {
        let deleted = self.palette.delete(color);
        if deleted {
            tracing::debug!(%color, "deleted from palette");
            if self.is_selected(color) {
                self.color.set_color(self.palette.first_or_empty());
            }
        }
        deleted
    }

    /// Selects the palette entry at `index`.
    pub fn select(&mut self, index: usize) -> Option<Color> {
        let color = self.palette.get(index)?;
        tracing::debug!(index, %color, "selected");
        self.color.set_color(color);
        Some(color)
    }

    /// Replaces the palette. On success the first entry is selected, on
    /// failure nothing changes.
    pub fn load_from<I, S>(&mut self, lines: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.palette.load_from(lines)?;
        self.color.set_color(self.palette.first_or_empty());
        Ok(())
    }

    /// Lines to write to a palette file, or `None` if there is nothing to
    /// save.
    pub fn save_to(&self) -> Option<Vec<String>> {
        (!self.palette.is_empty()).then(|| self.palette.save_to())
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use crate::{
        color::Color,
        palette_store::EMPTY_SELECTION,
        view_model::{
            Action,
            ActionOutcome,
            ViewModel,
        },
    };

    #[test]
    fn adding_twice_keeps_one_entry() {
        let mut view_model = ViewModel::default();
        assert_eq!(view_model.dispatch(Action::Add), ActionOutcome::Changed);
        assert_eq!(view_model.dispatch(Action::Add), ActionOutcome::Unchanged);
        assert_eq!(view_model.palette().colors(), &[Color::RED]);
    }

    #[test]
    fn deleting_last_selected_entry_selects_sentinel() {
        let mut view_model = ViewModel::new(Color::new(10, 20, 30));
        view_model.add_current();

        assert_eq!(view_model.dispatch(Action::Delete), ActionOutcome::Changed);
        assert!(view_model.palette().is_empty());
        assert_eq!(view_model.selection(), EMPTY_SELECTION);
    }

    #[test]
    fn deleting_selected_entry_selects_first_remaining() {
        let mut view_model = ViewModel::default();
        view_model
            .load_from(["#010101", "#020202", "#030303"])
            .unwrap();
        view_model.select(2);

        assert!(view_model.delete_current());
        assert_eq!(view_model.selection(), Color::new(1, 1, 1));
    }

    #[test]
    fn deleting_unselected_entry_keeps_selection() {
        let mut view_model = ViewModel::default();
        view_model.load_from(["#010101", "#020202"]).unwrap();
        view_model.select(0);

        assert!(view_model.delete(Color::new(2, 2, 2)));
        assert_eq!(view_model.selection(), Color::new(1, 1, 1));
    }

    #[test]
    fn deleting_color_not_in_palette_does_nothing() {
        let mut view_model = ViewModel::new(Color::new(4, 5, 6));
        assert_eq!(
            view_model.dispatch(Action::Delete),
            ActionOutcome::Unchanged
        );
        assert_eq!(view_model.selection(), Color::new(4, 5, 6));
    }

    #[test]
    fn select_out_of_range_does_nothing() {
        let mut view_model = ViewModel::default();
        assert_eq!(view_model.select(0), None);
        assert_eq!(view_model.selection(), Color::RED);
    }

    #[test]
    fn load_selects_first_entry() {
        let mut view_model = ViewModel::default();
        view_model.load_from(["#00FF00", "#0000FF"]).unwrap();
        assert_eq!(view_model.selection(), Color::new(0, 255, 0));

        view_model.load_from(Vec::<String>::new()).unwrap();
        assert_eq!(view_model.selection(), EMPTY_SELECTION);
    }

    #[test]
    fn failed_load_changes_nothing() {
        let mut view_model = ViewModel::new(Color::new(1, 2, 3));
        view_model.add_current();
        view_model.color.set_color(Color::WHITE);

        assert!(view_model.load_from(["not-a-color"]).is_err());
        assert_eq!(view_model.palette().colors(), &[Color::new(1, 2, 3)]);
        assert_eq!(view_model.selection(), Color::WHITE);
    }

    #[test]
    fn save_is_skipped_when_empty() {
        let mut view_model = ViewModel::default();
        assert_eq!(view_model.save_to(), None);
        assert_eq!(view_model.dispatch(Action::Save), ActionOutcome::Unchanged);

        view_model.add_current();
        assert_eq!(view_model.save_to(), Some(vec!["#FF0000".to_owned()]));
        assert_eq!(
            view_model.dispatch(Action::Save),
            ActionOutcome::PickFileToSave
        );
    }

    #[test]
    fn collaborator_actions_are_delegated() {
        let mut view_model = ViewModel::default();
        assert_eq!(
            view_model.dispatch(Action::Open),
            ActionOutcome::PickFileToOpen
        );
        assert_eq!(
            view_model.dispatch(Action::ChooseColor),
            ActionOutcome::PickColor
        );
    }

    #[test]
    fn actions_have_distinct_kebab_case_names() {
        let names = Action::VARIANTS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(names, ["add", "delete", "open", "save", "choose-color"]);
    }
}
