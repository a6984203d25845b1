use crate::model::ModuleId;

/// Static description of one course module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    id: ModuleId,
    slug: &'static str,
    title: &'static str,
}

impl ModuleEntry {
    #[must_use]
    pub fn id(&self) -> ModuleId {
        self.id
    }

    #[must_use]
    pub fn slug(&self) -> &'static str {
        self.slug
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Path of the markdown file, relative to the content base.
    #[must_use]
    pub fn content_path(&self) -> String {
        format!("content/module{}_{}.md", self.id, self.slug)
    }
}

const ENTRIES: [(&str, &str); ModuleId::COUNT] = [
    ("api_fundamentals", "API Fundamentals"),
    ("api_types", "API Types"),
    ("ai_apis", "AI APIs"),
    ("authentication", "Authentication"),
    ("vector_stores", "Vector Stores"),
    ("python_api_calls", "Python API Calls"),
    ("practical_applications", "Practical Applications"),
];

/// Fixed mapping from module number to its content file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleCatalog;

impl ModuleCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Looks up a module by raw number. Returns `None` for numbers outside the course.
    #[must_use]
    pub fn lookup(&self, number: u32) -> Option<ModuleEntry> {
        let id = ModuleId::new(number).ok()?;
        Some(self.entry(id))
    }

    #[must_use]
    pub fn entry(&self, id: ModuleId) -> ModuleEntry {
        let index = usize::try_from(id.value() - 1).unwrap_or_default();
        let (slug, title) = ENTRIES[index];
        ModuleEntry { id, slug, title }
    }

    pub fn entries(&self) -> impl Iterator<Item = ModuleEntry> + '_ {
        ModuleId::all().map(|id| self.entry(id))
    }
}
