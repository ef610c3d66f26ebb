use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use cv_timeline_config::Config;
use cv_timeline_engine::render::{PageContext, render_page, to_json};
use cv_timeline_engine::{
    FsSource, LOAD_FAILURE_MESSAGE, Language, Translations, io, load_milestones,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io::stdout, path::PathBuf, process};

mod app;
mod ui;

use app::{App, LanguageStore};

#[derive(Parser)]
#[command(name = "cv-timeline", version, about = "Render a markdown résumé as a timeline")]
struct Cli {
    /// Base milestone document (overrides the config file)
    #[arg(long, global = true, env = "CV_TIMELINE_DOCUMENT")]
    document: Option<PathBuf>,

    /// Language code: en, fr or zh
    #[arg(long, global = true)]
    lang: Option<String>,

    /// JSON file with UI label translations
    #[arg(long, global = true)]
    translations: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the timeline in the terminal (default)
    View,
    /// Write the timeline as a static HTML page
    Html {
        /// Output file; stdout when omitted
        #[arg(long, short, conflicts_with = "output_dir")]
        output: Option<PathBuf>,
        /// Write one `index.<lang>.html` per language into this directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Print the parsed milestones as JSON
    Json,
}

/// Command-line flags merged over the config file.
struct Settings {
    document_path: PathBuf,
    translations_path: Option<PathBuf>,
    language: Language,
    config: Option<Config>,
}

impl Settings {
    fn resolve(cli: &Cli) -> Self {
        let config_path = Config::config_path();
        log::debug!("Config path: {}", config_path.display());

        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                process::exit(1);
            }
        };

        let from_config = cli.document.is_none();
        let document_path = match (&cli.document, &config) {
            (Some(path), _) => path.clone(),
            (None, Some(config)) => config.resolved_document_path(),
            (None, None) => {
                eprintln!("Error: No document provided and no config file found");
                eprintln!("Usage: cv-timeline --document <mileStone.md> [view|html|json]");
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        };

        if let Err(e) = io::validate_document_path(&document_path) {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Document path '{}'{} is invalid: {e}",
                document_path.display(),
                source
            );
            process::exit(1);
        }

        let translations_path = cli
            .translations
            .clone()
            .or_else(|| config.as_ref().and_then(Config::resolved_translations_path));
        let saved_language = config.as_ref().and_then(|c| c.language.as_deref());
        let language = Language::resolve(cli.lang.as_deref(), saved_language);

        Self {
            document_path,
            translations_path,
            language,
            config,
        }
    }

    fn translations(&self) -> Translations {
        Translations::load_or_default(self.translations_path.as_deref())
    }
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli);

    match cli.command.unwrap_or(Command::View) {
        Command::View => run_viewer(settings),
        Command::Html { output, output_dir } => match output_dir {
            Some(dir) => write_all_pages(&settings, &dir),
            None => write_page(&settings, output),
        },
        Command::Json => print_json(&settings),
    }
}

fn write_page(settings: &Settings, output: Option<PathBuf>) -> Result<()> {
    let translations = settings.translations();
    let ctx = PageContext::standalone(settings.language, &translations);
    let page = render_page_for(settings, &ctx);
    match output {
        Some(path) => std::fs::write(&path, page)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{page}"),
    }
    Ok(())
}

fn write_all_pages(settings: &Settings, dir: &std::path::Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let translations = settings.translations();

    for language in Language::ALL {
        let path = dir.join(format!("index.{language}.html"));
        let page = render_page_for(settings, &PageContext::new(language, &translations));
        std::fs::write(&path, page)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn render_page_for(settings: &Settings, ctx: &PageContext<'_>) -> String {
    let source = FsSource::new(&settings.document_path);
    let timeline = load_milestones(&source, ctx.language);
    if timeline.is_err() {
        eprintln!("{LOAD_FAILURE_MESSAGE}");
    }
    render_page(timeline.as_deref(), ctx)
}

fn print_json(settings: &Settings) -> Result<()> {
    let source = FsSource::new(&settings.document_path);
    match load_milestones(&source, settings.language) {
        Ok(milestones) => {
            println!("{}", to_json(&milestones)?);
            Ok(())
        }
        Err(_) => {
            eprintln!("{LOAD_FAILURE_MESSAGE}");
            process::exit(1);
        }
    }
}

fn run_viewer(settings: Settings) -> Result<()> {
    let translations = settings.translations();
    let store = LanguageStore::open(
        settings.config,
        &settings.document_path,
        Config::config_path(),
    );
    let mut app = App::new(
        Box::new(FsSource::new(settings.document_path)),
        translations,
        settings.language,
        Some(store),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('f') | KeyCode::Tab => app.cycle_filter(),
                KeyCode::Char('l') => app.cycle_language(),
                KeyCode::Char('r') => app.reload(),
                _ => {}
            }
        }
    }
}
