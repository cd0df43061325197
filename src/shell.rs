//! Terminal Dashboard Shell
//!
//! Page chrome around the dispatcher: header, dataset sidebar that can be
//! shown or hidden, the rendered view, and a footer. Input is read line by
//! line and stays live while a request is in flight.

use chrono::{DateTime, Local};
use std::fmt::Write as _;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::DashboardConfig;
use crate::dataset::DatasetKey;
use crate::dispatcher::Dispatcher;
use crate::render::render;
use crate::render::text::{render_text, TextOptions};
use crate::state::FetchState;

const BRAND: &str = "YTube Data Visualizer";
const RULE_WIDTH: usize = 60;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// A line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(DatasetKey),
    ToggleSidebar,
    Reload,
    Help,
    Quit,
    Unknown(String),
    Nothing,
}

/// Interpret one input line.
///
/// Datasets are chosen by sidebar number (1-5) or by name; only sidebar
/// datasets can be selected here.
pub fn parse_command(line: &str) -> Command {
    let input = line.trim();

    match input.to_lowercase().as_str() {
        "" => return Command::Nothing,
        "q" | "quit" | "exit" => return Command::Quit,
        "m" | "menu" => return Command::ToggleSidebar,
        "r" | "reload" => return Command::Reload,
        "?" | "h" | "help" => return Command::Help,
        _ => {}
    }

    if let Ok(n) = input.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| DatasetKey::WIRED.get(i)) {
            Some(key) => Command::Select(*key),
            None => Command::Unknown(input.to_string()),
        };
    }

    match input.parse::<DatasetKey>() {
        Ok(key) if key.is_wired() => Command::Select(key),
        _ => Command::Unknown(input.to_string()),
    }
}

/// Interactive dashboard state that is not fetch state
pub struct Shell {
    sidebar_open: bool,
    show_help: bool,
    notice: Option<String>,
    last_updated: Option<DateTime<Local>>,
    options: TextOptions,
}

impl Shell {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            sidebar_open: config.sidebar_open,
            show_help: false,
            notice: None,
            last_updated: None,
            options: config.text_options(),
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Apply a command. Returns `false` when the shell should exit.
    pub fn apply(&mut self, command: Command, dispatcher: &Dispatcher) -> bool {
        self.notice = None;

        match command {
            Command::Select(key) => {
                // Detached; the dispatcher publishes the outcome
                drop(dispatcher.select(key));
            }
            Command::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Command::Reload => {
                if dispatcher.reload().is_none() {
                    self.notice = Some("Nothing to reload yet".to_string());
                }
            }
            Command::Help => self.show_help = !self.show_help,
            Command::Quit => return false,
            Command::Unknown(input) => {
                self.notice = Some(format!("Unknown command: {} (type ? for help)", input));
            }
            Command::Nothing => {}
        }

        true
    }

    /// Record a state published by the dispatcher
    pub fn observe(&mut self, state: &FetchState) {
        if state.is_settled() {
            self.last_updated = Some(Local::now());
        }
    }

    /// Full screen contents for `state`
    pub fn draw(&self, state: &FetchState) -> String {
        let mut out = String::new();

        // Header
        let _ = writeln!(out, "{}  |  Home  About  API Documentation", BRAND);
        let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

        if self.sidebar_open {
            for (i, key) in DatasetKey::WIRED.iter().enumerate() {
                let marker = if state.selected == Some(*key) { '>' } else { ' ' };
                let _ = writeln!(out, "{} [{}] {}", marker, i + 1, key.label());
            }
            let _ = writeln!(out, "  (m) hide menu  (r) reload  (?) help  (q) quit");
        } else {
            let _ = writeln!(out, "(m) menu");
        }

        if self.show_help {
            out.push('\n');
            out.push_str(HELP);
        }

        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
        out.push_str(&render_text(&render(state), &self.options));
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

        if let Some(notice) = &self.notice {
            let _ = writeln!(out, "{}", notice);
        }

        // Footer
        let updated = self
            .last_updated
            .map(|t| format!("Last updated {}", t.format("%H:%M:%S")))
            .unwrap_or_else(|| "Not loaded".to_string());
        let _ = writeln!(out, "Data Visualization Dashboard  |  {}", updated);

        out
    }

    /// Run until `q` or end of input
    pub async fn run(mut self, dispatcher: &Dispatcher) -> std::io::Result<()> {
        let mut rx = dispatcher.subscribe();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        let initial = rx.borrow_and_update().clone();
        self.redraw(&mut stdout, &initial).await?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.apply(parse_command(&line), dispatcher) {
                        break;
                    }
                    let state = rx.borrow().clone();
                    self.redraw(&mut stdout, &state).await?;
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = rx.borrow_and_update().clone();
                    self.observe(&state);
                    self.redraw(&mut stdout, &state).await?;
                }
            }
        }

        tracing::debug!("Shell exited");
        Ok(())
    }

    async fn redraw<W>(&self, out: &mut W, state: &FetchState) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        out.write_all(CLEAR_SCREEN.as_bytes()).await?;
        out.write_all(self.draw(state).as_bytes()).await?;
        out.write_all(b"> ").await?;
        out.flush().await
    }
}

const HELP: &str = "\
  1-5 or a dataset name   load a dataset
  m, menu                 show or hide the dataset menu
  r, reload               fetch the current dataset again
  ?, help                 toggle this help
  q, quit                 leave
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Payload, WordCount};
    use crate::dispatcher::DatasetSource;
    use crate::error::FetchResult;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StaticSource;

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn fetch(&self, _key: DatasetKey) -> FetchResult<Payload> {
            Ok(Payload::WordFrequency(vec![WordCount {
                word: "the".into(),
                count: 120.0,
            }]))
        }
    }

    fn shell() -> Shell {
        Shell::new(&DashboardConfig {
            color: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_command("1"), Command::Select(DatasetKey::WordFrequency));
        assert_eq!(parse_command(" 5 "), Command::Select(DatasetKey::TopicModeling));
        assert_eq!(parse_command("0"), Command::Unknown("0".into()));
        assert_eq!(parse_command("6"), Command::Unknown("6".into()));
    }

    #[test]
    fn test_parse_names_and_controls() {
        assert_eq!(
            parse_command("namedEntities"),
            Command::Select(DatasetKey::NamedEntities)
        );
        assert_eq!(
            parse_command("average-sentiment"),
            Command::Select(DatasetKey::AverageSentiment)
        );
        assert_eq!(parse_command("M"), Command::ToggleSidebar);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("r"), Command::Reload);
        assert_eq!(parse_command("   "), Command::Nothing);
    }

    #[test]
    fn test_dormant_datasets_not_selectable() {
        assert_eq!(parse_command("rawData"), Command::Unknown("rawData".into()));
        assert_eq!(parse_command("wordCloud"), Command::Unknown("wordCloud".into()));
    }

    #[test]
    fn test_draw_initial_screen() {
        let screen = shell().draw(&FetchState::default());
        assert!(screen.starts_with(BRAND));
        assert!(screen.contains("  [1] Word Frequency"));
        assert!(screen.contains("  [5] Topic Modeling"));
        assert!(screen.contains(crate::render::EMPTY_MESSAGE));
        assert!(screen.contains("Not loaded"));
    }

    #[tokio::test]
    async fn test_toggle_sidebar_and_select() {
        let dispatcher = Dispatcher::new(Arc::new(StaticSource));
        let mut shell = shell();

        assert!(shell.apply(Command::ToggleSidebar, &dispatcher));
        assert!(!shell.sidebar_open());
        let screen = shell.draw(&FetchState::default());
        assert!(!screen.contains("[1] Word Frequency"));

        shell.apply(Command::ToggleSidebar, &dispatcher);
        let mut rx = dispatcher.subscribe();
        shell.apply(Command::Select(DatasetKey::WordFrequency), &dispatcher);
        assert!(dispatcher.snapshot().loading);

        // Wait for the settled state
        rx.wait_for(|state| !state.loading).await.unwrap();
        let state = dispatcher.snapshot();
        shell.observe(&state);

        let screen = shell.draw(&state);
        assert!(screen.contains("> [1] Word Frequency"));
        assert!(screen.contains("Top 20 most frequent words"));
        assert!(screen.contains("Last updated"));
    }

    #[tokio::test]
    async fn test_unknown_and_quit() {
        let dispatcher = Dispatcher::new(Arc::new(StaticSource));
        let mut shell = shell();

        assert!(shell.apply(parse_command("bogus"), &dispatcher));
        assert!(shell
            .draw(&FetchState::default())
            .contains("Unknown command: bogus"));

        assert!(shell.apply(Command::Reload, &dispatcher));
        assert!(shell
            .draw(&FetchState::default())
            .contains("Nothing to reload yet"));

        assert!(!shell.apply(Command::Quit, &dispatcher));
    }
}
