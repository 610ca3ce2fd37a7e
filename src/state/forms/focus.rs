//! Focus traversal over the content entry form

use crate::state::{Draft, ListKind};

/// Which part of the form receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    CompanyInfo,
    /// Row `index` of one of the lists
    Item(ListKind, usize),
    PostsPerWeek,
    /// The action panel on the right
    Actions,
}

impl FormFocus {
    /// All focus targets in Tab order for the given draft
    pub fn order(draft: &Draft) -> Vec<FormFocus> {
        let mut order = vec![FormFocus::CompanyInfo];
        for kind in ListKind::ALL {
            order.extend((0..draft.list(kind).len()).map(|i| FormFocus::Item(kind, i)));
        }
        order.push(FormFocus::PostsPerWeek);
        order.push(FormFocus::Actions);
        order
    }

    /// Move to the next target (wraps around)
    pub fn next(self, draft: &Draft) -> Self {
        let order = Self::order(draft);
        let current = self.position_in(&order);
        order[(current + 1) % order.len()]
    }

    /// Move to the previous target (wraps around)
    pub fn prev(self, draft: &Draft) -> Self {
        let order = Self::order(draft);
        let current = self.position_in(&order);
        if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        }
    }

    /// Pull an item focus back inside its list after the list shrank
    pub fn clamp(self, draft: &Draft) -> Self {
        match self {
            FormFocus::Item(kind, index) => {
                let len = draft.list(kind).len();
                FormFocus::Item(kind, index.min(len.saturating_sub(1)))
            }
            other => other,
        }
    }

    /// The list this focus points into, if any
    pub fn list_kind(self) -> Option<ListKind> {
        match self {
            FormFocus::Item(kind, _) => Some(kind),
            _ => None,
        }
    }

    fn position_in(self, order: &[FormFocus]) -> usize {
        let clamped = match self {
            FormFocus::Item(kind, index) => {
                let last = order
                    .iter()
                    .filter(|f| f.list_kind() == Some(kind))
                    .count()
                    .saturating_sub(1);
                FormFocus::Item(kind, index.min(last))
            }
            other => other,
        };
        order.iter().position(|f| *f == clamped).unwrap_or(0)
    }
}

/// Buttons of the action panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionButton {
    #[default]
    Submit,
    Reset,
    Quit,
}

impl ActionButton {
    pub const ALL: [ActionButton; 3] = [ActionButton::Submit, ActionButton::Reset, ActionButton::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Reset => "Reset",
            Self::Quit => "Quit",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Quit,
            Self::Quit => Self::Submit,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Submit => Self::Quit,
            Self::Reset => Self::Submit,
            Self::Quit => Self::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemId;

    #[test]
    fn test_order_for_initial_draft() {
        let order = FormFocus::order(&Draft::initial());
        assert_eq!(
            order,
            vec![
                FormFocus::CompanyInfo,
                FormFocus::Item(ListKind::Personas, 0),
                FormFocus::Item(ListKind::Personas, 1),
                FormFocus::Item(ListKind::Subreddits, 0),
                FormFocus::Item(ListKind::Queries, 0),
                FormFocus::PostsPerWeek,
                FormFocus::Actions,
            ]
        );
    }

    #[test]
    fn test_next_wraps_around() {
        let draft = Draft::initial();
        assert_eq!(FormFocus::Actions.next(&draft), FormFocus::CompanyInfo);
        assert_eq!(
            FormFocus::CompanyInfo.next(&draft),
            FormFocus::Item(ListKind::Personas, 0)
        );
    }

    #[test]
    fn test_prev_wraps_around() {
        let draft = Draft::initial();
        assert_eq!(FormFocus::CompanyInfo.prev(&draft), FormFocus::Actions);
        assert_eq!(
            FormFocus::PostsPerWeek.prev(&draft),
            FormFocus::Item(ListKind::Queries, 0)
        );
    }

    #[test]
    fn test_next_moves_across_lists() {
        let draft = Draft::initial();
        assert_eq!(
            FormFocus::Item(ListKind::Personas, 1).next(&draft),
            FormFocus::Item(ListKind::Subreddits, 0)
        );
    }

    #[test]
    fn test_clamp_after_shrink() {
        let draft = Draft::initial().with_item_added(ListKind::Queries, ItemId::new(5));
        let focus = FormFocus::Item(ListKind::Queries, 1);
        let shrunk = draft.with_item_removed(ListKind::Queries, ItemId::new(5));
        assert_eq!(focus.clamp(&shrunk), FormFocus::Item(ListKind::Queries, 0));
        assert_eq!(FormFocus::PostsPerWeek.clamp(&shrunk), FormFocus::PostsPerWeek);
    }

    #[test]
    fn test_stale_item_index_still_traverses() {
        let draft = Draft::initial();
        assert_eq!(
            FormFocus::Item(ListKind::Subreddits, 4).next(&draft),
            FormFocus::Item(ListKind::Queries, 0)
        );
    }

    #[test]
    fn test_action_button_cycle() {
        let mut button = ActionButton::default();
        for _ in 0..ActionButton::ALL.len() {
            button = button.next();
        }
        assert_eq!(button, ActionButton::Submit);
        assert_eq!(ActionButton::Submit.prev(), ActionButton::Quit);
    }
}
