use std::path::PathBuf;

/// Boundary to the interactive surface. The core never talks to a widget
/// toolkit; whatever renders the application implements this and forwards
/// the strings produced by the session, gating its select / compress / reset
/// affordances on the session's `can_*` queries.
pub trait Frontend {
    /// Multi-select file prompt. An empty result is a valid selection.
    fn pick_files(&mut self) -> Vec<PathBuf>;

    /// Directory prompt; `None` when the user dismissed it.
    fn pick_directory(&mut self) -> Option<PathBuf>;

    fn show_warning(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    /// Selection-count text ("1 image", "3 images", ...).
    fn set_selection_count(&mut self, text: &str);

    /// Compression status text ("Prêt", "Terminé", or empty).
    fn set_status(&mut self, text: &str);

    /// Aggregate size summary line.
    fn set_summary(&mut self, text: &str);
}

/// The two screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPane {
    #[default]
    Workbench,
    ExportDirSetup,
}

impl ViewPane {
    pub fn other(self) -> Self {
        match self {
            ViewPane::Workbench => ViewPane::ExportDirSetup,
            ViewPane::ExportDirSetup => ViewPane::Workbench,
        }
    }
}

/// Explicit two-state container model: every navigation tears the previous
/// pane down and flips the expansion flag, as one enter/exit transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContainer {
    pane: ViewPane,
    expanded: bool,
}

impl Default for ViewContainer {
    fn default() -> Self {
        Self {
            pane: ViewPane::Workbench,
            expanded: true,
        }
    }
}

impl ViewContainer {
    pub fn pane(&self) -> ViewPane {
        self.pane
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Exits the current pane and enters `to`, flipping expansion.
    pub fn navigate(&mut self, to: ViewPane) {
        self.pane = to;
        self.expanded = !self.expanded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_pane_other_is_involutive() {
        assert_eq!(ViewPane::Workbench.other(), ViewPane::ExportDirSetup);
        assert_eq!(ViewPane::Workbench.other().other(), ViewPane::Workbench);
    }

    #[test]
    fn test_container_starts_on_expanded_workbench() {
        let container = ViewContainer::default();
        assert_eq!(container.pane(), ViewPane::Workbench);
        assert!(container.is_expanded());
    }

    #[test]
    fn test_navigation_flips_expansion_each_transition() {
        let mut container = ViewContainer::default();
        container.navigate(ViewPane::ExportDirSetup);
        assert_eq!(container.pane(), ViewPane::ExportDirSetup);
        assert!(!container.is_expanded());

        container.navigate(ViewPane::Workbench);
        assert_eq!(container.pane(), ViewPane::Workbench);
        assert!(container.is_expanded());
    }
}
