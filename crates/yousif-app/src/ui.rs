use std::io::{self, Write};
use std::sync::Arc;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use kanal::AsyncReceiver;
use tokio::sync::RwLock;
use yousif_config::Config;
use yousif_core::render::{Rect, TokenStyle, TooltipState, render_sentences, token_at};
use yousif_types::{SearchHistoryItem, Theme, TooltipTarget, UiEvent, WordDefinition};

const PROMPT: &str = "search> ";

/// Width of the "  1. " prefix in front of each sentence
const SENTENCE_INDENT: usize = 5;

struct Palette {
    accent: Color,
    muted: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                accent: Color::DarkBlue,
                muted: Color::DarkGrey,
                error: Color::DarkRed,
            },
            Theme::Dark => Palette {
                accent: Color::Cyan,
                muted: Color::Grey,
                error: Color::Red,
            },
        }
    }
}

/// Line-oriented renderer of the app screens
pub struct TerminalUi<W: Write> {
    out: W,
    styled: bool,
    theme: Theme,
    online: bool,
    query: String,
    tooltips: TooltipState,
    /// Token boxes of the card on screen, per sentence
    layout: Vec<Vec<Rect>>,
    card: Option<WordDefinition>,
}

impl<W: Write> TerminalUi<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self {
            out,
            styled,
            theme: Theme::Light,
            online: true,
            query: String::new(),
            tooltips: TooltipState::new(),
            layout: Vec::new(),
            card: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn tooltips(&self) -> &TooltipState {
        &self.tooltips
    }

    fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    fn paint(&self, text: &str, style: TokenStyle) -> String {
        if !self.styled {
            return match style {
                TokenStyle::Emphasis => text.to_uppercase(),
                TokenStyle::Interactive => format!("_{text}_"),
                _ => text.to_string(),
            };
        }

        let palette = self.palette();
        match style {
            TokenStyle::Emphasis => text.bold().with(palette.accent).to_string(),
            TokenStyle::Interactive => text.underlined().to_string(),
            TokenStyle::Plain => text.with(palette.muted).to_string(),
            TokenStyle::Whitespace => text.to_string(),
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.styled {
            text.bold().with(self.palette().accent).to_string()
        } else {
            text.to_string()
        }
    }

    /// Returns false once the UI should stop
    pub fn handle(&mut self, event: UiEvent) -> io::Result<bool> {
        match event {
            UiEvent::Home { history } => {
                self.card = None;
                self.layout.clear();
                self.tooltips.leave();
                self.show_home(&history)?;
            }
            UiEvent::Loading { query } => {
                self.tooltips.leave();
                writeln!(self.out, "Thinking... ({query})")?;
            }
            UiEvent::ShowDefinition(definition) => self.show_card(definition)?,
            UiEvent::ShowError(message) => {
                let title = if self.styled {
                    "Search Update".bold().with(self.palette().error).to_string()
                } else {
                    "Search Update".to_string()
                };
                writeln!(self.out, "\n{title}\n{message}")?;
                writeln!(self.out, "Type :new to continue searching.")?;
            }
            UiEvent::ShowHistory(items) => self.show_history(&items)?,
            UiEvent::QueryChanged(query) => self.query = query,
            UiEvent::ShowTooltip(target) => self.show_tooltip(&target)?,
            UiEvent::HideTooltip => self.tooltips.leave(),
            UiEvent::ScrollToTop => {
                // Next screen starts at the top of the terminal
                if self.styled {
                    queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                }
            }
            UiEvent::FocusInput => {
                write!(self.out, "{PROMPT}{}", self.query)?;
            }
            UiEvent::ThemeChanged(theme) => {
                self.theme = theme;
                writeln!(self.out, "Theme: {}", theme.as_token())?;
            }
            UiEvent::Connectivity(online) => {
                self.online = online;
                writeln!(self.out, "{}", if online { "Connected" } else { "Offline" })?;
            }
            UiEvent::Status(message) => writeln!(self.out, "{message}")?,
            UiEvent::Shutdown => {
                self.out.flush()?;
                return Ok(false);
            }
        }

        self.out.flush()?;
        Ok(true)
    }

    fn show_home(&mut self, history: &[SearchHistoryItem]) -> io::Result<()> {
        let title = self.heading("Yousif AI Guide");
        writeln!(self.out, "\n{title}")?;
        writeln!(
            self.out,
            "Unlock vocabulary with Roman Urdu and English explanations instantly."
        )?;

        if !history.is_empty() {
            self.show_history(history)?;
        }
        Ok(())
    }

    fn show_history(&mut self, items: &[SearchHistoryItem]) -> io::Result<()> {
        if items.is_empty() {
            return writeln!(self.out, "No recent words yet.");
        }

        writeln!(self.out, "\nRecently Explored (:h <n>)")?;
        for (idx, item) in items.iter().enumerate() {
            writeln!(self.out, "  {}. {}", idx + 1, item.word)?;
        }
        Ok(())
    }

    fn show_card(&mut self, definition: WordDefinition) -> io::Result<()> {
        self.tooltips.leave();
        self.layout.clear();

        if let Some(suggested) = definition.correction() {
            writeln!(self.out, "\nShowing results for \"{suggested}\"")?;
        }

        writeln!(self.out, "\nUrdu Meanings | اردو کے معنی")?;
        writeln!(self.out, "  {}", definition.urdu_meanings.join(" ، "))?;
        let word = self.heading(&definition.word.to_uppercase());
        writeln!(self.out, "  {word}")?;

        writeln!(self.out, "\nIn Easy Roman Urdu")?;
        writeln!(self.out, "  \"{}\"", definition.roman_explanation)?;

        writeln!(self.out, "\nSimple Meaning")?;
        writeln!(self.out, "  {}", definition.simple_english_meaning)?;

        writeln!(self.out, "\nStudent Practice (underlined words: :hover <n>, :look <n>)")?;
        for (row, tokens) in render_sentences(&definition).into_iter().enumerate() {
            let mut line = format!("{:>3}. ", row + 1);
            let mut column = SENTENCE_INDENT;
            let mut rects = Vec::with_capacity(tokens.len());

            for token in &tokens {
                let width = token.text.chars().count();
                rects.push(Rect {
                    left: column as f32,
                    top: row as f32,
                    width: width as f32,
                    height: 1.0,
                });
                column += width;
                let painted = self.paint(&token.text, token.style());
                line.push_str(&painted);
            }

            self.layout.push(rects);
            writeln!(self.out, "{line}")?;
        }

        writeln!(self.out, "\nBack to Search / نیا لفظ تلاش کریں (:new)")?;
        self.card = Some(definition);
        Ok(())
    }

    fn show_tooltip(&mut self, target: &TooltipTarget) -> io::Result<()> {
        let Some(card) = self.card.as_ref() else {
            return Ok(());
        };
        let Some(rect) = self
            .layout
            .get(target.sentence)
            .and_then(|row| row.get(target.token))
            .copied()
        else {
            return Ok(());
        };
        let Some(token) = token_at(card, target) else {
            return Ok(());
        };

        let Some(tooltip) = self.tooltips.hover(&token, rect) else {
            return Ok(());
        };
        let (center, _) = tooltip.position();
        let bubble = format!("^ Meaning: {}", tooltip.meaning);

        writeln!(
            self.out,
            "{}{}",
            " ".repeat(center.max(0.0) as usize),
            bubble
        )
    }
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<UiEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let styled = {
        let config = config.read().await;
        config.ui.color && atty::is(atty::Stream::Stdout)
    };

    let mut ui = TerminalUi::new(io::stdout(), styled);

    while let Ok(event) = app_to_ui_rx.recv().await {
        if !ui.handle(event)? {
            break;
        }
    }

    tracing::info!("UI loop stopping");
    Ok(())
}
