//! Setting catalog and stylesheet derivation

/// One of the five visual-presentation toggles offered by the panel.
///
/// Declaration order is load-bearing: it fixes both the derivation order of
/// the generated stylesheet and the order of the toggle buttons in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    Greyscale,
    HighContrast,
    NegativeContrast,
    UnderlineLinks,
    ReadableFont,
}

impl Setting {
    /// Every setting, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Greyscale,
        Self::HighContrast,
        Self::NegativeContrast,
        Self::UnderlineLinks,
        Self::ReadableFont,
    ];

    /// The CSS rule this setting contributes while enabled.
    ///
    /// The exact bytes are a compatibility contract with hosts that inspect
    /// the generated stylesheet.
    #[must_use]
    pub const fn css_rule(self) -> &'static str {
        match self {
            Self::Greyscale => "html { filter: grayscale(100%); }",
            Self::HighContrast => "html { filter: contrast(150%); }",
            Self::NegativeContrast => "html { filter: invert(100%); }",
            Self::UnderlineLinks => "a { text-decoration: underline !important; }",
            Self::ReadableFont => "body { font-family: Arial, sans-serif !important; }",
        }
    }

    /// Wire name accepted by the string-keyed toggle surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greyscale => "greyscale",
            Self::HighContrast => "highContrast",
            Self::NegativeContrast => "negativeContrast",
            Self::UnderlineLinks => "underlineLinks",
            Self::ReadableFont => "readableFont",
        }
    }

    /// Label shown on the setting's panel button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Greyscale => "Greyscale",
            Self::HighContrast => "High Contrast",
            Self::NegativeContrast => "Negative Contrast",
            Self::UnderlineLinks => "Underline Links",
            Self::ReadableFont => "Readable Font",
        }
    }

    /// Look up a setting by wire name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|setting| setting.name() == name)
    }
}

/// The five toggle flags, indexed by [`Setting`]. All start disabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags([bool; Setting::ALL.len()]);

impl Flags {
    #[must_use]
    pub const fn new() -> Self {
        Self([false; Setting::ALL.len()])
    }

    #[must_use]
    pub const fn is_enabled(self, setting: Setting) -> bool {
        self.0[setting as usize]
    }

    pub fn toggle(&mut self, setting: Setting) {
        self.0[setting as usize] = !self.0[setting as usize];
    }

    /// Derive the stylesheet text for the current flags.
    ///
    /// Pure and order-stable: enabled settings contribute their rules in
    /// declaration order, disabled settings contribute nothing.
    #[must_use]
    pub fn stylesheet(self) -> String {
        Setting::ALL
            .into_iter()
            .filter(|setting| self.is_enabled(*setting))
            .map(Setting::css_rule)
            .collect()
    }
}
