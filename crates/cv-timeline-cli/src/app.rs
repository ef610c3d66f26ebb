use std::path::{Path, PathBuf};

use cv_timeline_config::Config;
use cv_timeline_engine::{
    CategoryFilter, Language, LoadError, Milestone, MilestoneSource, Translations, apply_filter,
    load_milestones,
};

/// Where the viewer persists the chosen language.
pub struct LanguageStore {
    pub config: Config,
    pub config_path: PathBuf,
}

impl LanguageStore {
    /// Saves into `config`, or into a new config for `document_path` when there is no config file yet.
    pub fn open(config: Option<Config>, document_path: &Path, config_path: PathBuf) -> Self {
        let config = config.unwrap_or_else(|| {
            log::debug!("no config file, language choice will create {}", config_path.display());
            let document_path = std::path::absolute(document_path)
                .unwrap_or_else(|_| document_path.to_path_buf());
            Config::new(document_path)
        });
        Self {
            config,
            config_path,
        }
    }
}

/// State of the interactive timeline viewer.
pub struct App {
    source: Box<dyn MilestoneSource>,
    pub translations: Translations,
    pub language: Language,
    pub timeline: Result<Vec<Milestone>, LoadError>,
    pub filter: CategoryFilter,
    pub scroll: u16,
    /// One-line message for the help bar, e.g. a failed save.
    pub status: Option<String>,
    store: Option<LanguageStore>,
}

impl App {
    pub fn new(
        source: Box<dyn MilestoneSource>,
        translations: Translations,
        language: Language,
        store: Option<LanguageStore>,
    ) -> Self {
        let timeline = load_milestones(source.as_ref(), language);
        Self {
            source,
            translations,
            language,
            timeline,
            filter: CategoryFilter::All,
            scroll: 0,
            status: None,
            store,
        }
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations.translate(self.language, key)
    }

    /// Re-reads and re-parses the document for the current language.
    pub fn reload(&mut self) {
        self.timeline = load_milestones(self.source.as_ref(), self.language);
        self.scroll = 0;
    }

    pub fn milestones(&self) -> &[Milestone] {
        self.timeline.as_deref().unwrap_or_default()
    }

    pub fn visible(&self) -> Vec<&Milestone> {
        apply_filter(self.milestones(), &self.filter)
    }

    pub fn available_filters(&self) -> Vec<CategoryFilter> {
        CategoryFilter::available(self.milestones())
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next_in(&self.available_filters());
        self.scroll = 0;
    }

    /// Moves to the next language, reloads its document and remembers the choice.
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        self.reload();
        self.persist_language();
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn persist_language(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        match store
            .config
            .save_language_to_path(self.language.code(), &store.config_path)
        {
            Ok(()) => {
                log::debug!("saved language {} to {}", self.language, store.config_path.display());
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Failed to save language: {e}")),
        }
    }
}
