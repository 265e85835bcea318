use derive_more::Display;

/// Named region of the page with its own mount lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum ViewSection {
    #[display("navbar")]
    Navbar,
    #[display("hero")]
    Hero,
    #[display("about")]
    About,
    #[display("projects")]
    Projects,
    #[display("skills")]
    Skills,
    #[display("contact")]
    Contact,
    #[display("footer")]
    Footer,
}

impl ViewSection {
    /// Sections in page order
    pub const ALL: [ViewSection; 7] = [
        ViewSection::Navbar,
        ViewSection::Hero,
        ViewSection::About,
        ViewSection::Projects,
        ViewSection::Skills,
        ViewSection::Contact,
        ViewSection::Footer,
    ];
}
