//! Site pages

/// Page currently loaded in the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Admissions,
    Contact,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 3] = [Page::Home, Page::Admissions, Page::Contact];

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Admissions => "Admissions",
            Page::Contact => "Contact Us",
        }
    }

    /// Heading shown above the page content
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Welcome",
            Page::Admissions => "Pupil Admission Form",
            Page::Contact => "Get in Touch",
        }
    }

    /// Page at a sidebar position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
