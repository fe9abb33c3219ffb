//! Document display mode

use strum::Display;

/// How the document pane shows a revision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ViewMode {
    /// Pages rasterized to images and drawn in the terminal
    #[default]
    Image,
    /// The hosted viewer, opened in the browser
    Native,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Image => Self::Native,
            Self::Native => Self::Image,
        }
    }
}
