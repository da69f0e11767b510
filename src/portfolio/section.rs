/// Page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Stacks,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Stacks,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Stacks => "stacks",
            Self::Portfolio => "portfolio",
            Self::Contact => "contato",
        }
    }

    /// Translation key of the navigation label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Stacks => "stacks",
            Self::Portfolio => "portfolio",
            Self::Contact => "contact",
        }
    }

    /// Navigation shortcut, `'1'` through `'5'`.
    pub fn shortcut(self) -> char {
        match self {
            Self::Home => '1',
            Self::About => '2',
            Self::Stacks => '3',
            Self::Portfolio => '4',
            Self::Contact => '5',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.shortcut() == c)
    }
}
