use crate::ui::mvi::Reducer;
use crate::ui::theme::intent::ThemeIntent;
use crate::ui::theme::state::ThemeSetting;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeSetting;
    type Intent = ThemeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::Toggle => state.toggled(),
            ThemeIntent::Set(setting) => setting,
        }
    }
}
