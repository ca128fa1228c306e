/// Pattern syntax table handed to the engine at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyntaxKind {
    #[default]
    Ruby,
    Perl,
    PerlNt,
    Java,
    /// Every character is literal
    Asis,
}

impl SyntaxKind {
    pub(crate) fn syntax(self) -> &'static onig::Syntax {
        match self {
            SyntaxKind::Ruby => onig::Syntax::ruby(),
            SyntaxKind::Perl => onig::Syntax::perl(),
            SyntaxKind::PerlNt => onig::Syntax::perl_ng(),
            SyntaxKind::Java => onig::Syntax::java(),
            SyntaxKind::Asis => onig::Syntax::asis(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOption {
    pub syntax: SyntaxKind,
    /// Initial slot count of a freshly created pattern cache
    pub cache_capacity: usize,
}

impl Default for EngineOption {
    fn default() -> Self {
        Self {
            syntax: SyntaxKind::Ruby,
            cache_capacity: 64,
        }
    }
}
