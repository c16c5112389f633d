//! Page sections of the portfolio.

/// A full-screen section of the page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Skills,
}

impl Section {
    /// All sections in scroll order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
        }
    }

    /// Whether the section's background draws constellations.
    pub fn has_constellations(self) -> bool {
        matches!(self, Section::Home | Section::About)
    }

    /// Position of the section in scroll order.
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Skills => 3,
        }
    }

    /// Section at a scroll position, if any.
    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }

    /// Next section down the page, stopping at the last one.
    pub fn next(self) -> Section {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous section up the page, stopping at the first one.
    pub fn previous(self) -> Section {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(self)
    }
}

/// A project in the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Enso,
    Creative,
    BoostUp,
}

impl ProjectKind {
    /// All projects, left to right.
    pub const ALL: [ProjectKind; 3] = [ProjectKind::Enso, ProjectKind::Creative, ProjectKind::BoostUp];

    /// Project whose column contains `column` when `width` columns are split
    /// evenly between the projects.
    pub fn at_column(column: u16, width: u16) -> Option<ProjectKind> {
        if width == 0 || column >= width {
            return None;
        }
        let slot = column as usize * Self::ALL.len() / width as usize;
        Self::ALL.get(slot).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_navigation() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Skills.next(), Section::Skills);
        assert_eq!(Section::Home.previous(), Section::Home);
        assert_eq!(Section::Projects.previous(), Section::About);
    }

    #[test]
    fn test_section_constellations() {
        assert!(Section::Home.has_constellations());
        assert!(Section::About.has_constellations());
        assert!(!Section::Projects.has_constellations());
        assert!(!Section::Skills.has_constellations());
    }

    #[test]
    fn test_project_at_column() {
        assert_eq!(ProjectKind::at_column(0, 90), Some(ProjectKind::Enso));
        assert_eq!(ProjectKind::at_column(29, 90), Some(ProjectKind::Enso));
        assert_eq!(ProjectKind::at_column(30, 90), Some(ProjectKind::Creative));
        assert_eq!(ProjectKind::at_column(89, 90), Some(ProjectKind::BoostUp));
        assert_eq!(ProjectKind::at_column(90, 90), None);
        assert_eq!(ProjectKind::at_column(0, 0), None);
    }
}
