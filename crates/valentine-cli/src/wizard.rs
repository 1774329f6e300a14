//! Interactive questionnaire on the terminal.
//!
//! [`TerminalSurface`] implements [`StepSurface`] on top of any writer, and
//! [`run`] feeds it lines from any reader, so the same loop serves a real
//! terminal and scripted input alike. Each input line is one command:
//!
//! | input                          | effect                         |
//! |--------------------------------|--------------------------------|
//! | `yes` / `y`, `no` / `n`        | answer the opening question    |
//! | `next`, `>`, →, empty line     | save this step and go forward  |
//! | `prev`, `back`, `<`, ←         | go back without saving         |
//! | `2099-02-14`                   | set the date (date step)       |
//! | `1 3 5`                        | toggle options (choice steps)  |
//! | `none`                         | clear the choices              |
//! | `export`, `download`, `d`      | save a JSON file (results)     |
//! | `email`, `send <address>`      | email the answers (results)    |
//! | `help`, `quit`                 |                                |

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, BufRead, Write},
};

use jiff::civil::Date;
use log::{debug, warn};
use valentine_core::{
    display::DATE_PLACEHOLDER, AnswerRecord, Category, Direction, EmailControl, OperationStatus,
    OptionCatalog, Outcome, Step, StepController, StepSurface, StepView, UiEvent, ValentineResponse,
};

use crate::renderer::TerminalRenderer;

const PROGRESS_WIDTH: usize = 20;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardCommand {
    /// Forwarded to the step controller
    Event(UiEvent),
    /// Raw date text typed on the date step
    SetDate(String),
    /// 1-based option positions to toggle
    Toggle(Vec<usize>),
    ClearSelection,
    Help,
    Quit,
    Unknown(String),
}

/// Interprets `line` in the context of `step`.
pub fn parse_command(line: &str, step: Step) -> WizardCommand {
    // Arrow keys arrive as raw escape sequences when the terminal is not in
    // raw mode.
    match line.trim_end_matches(['\r', '\n']) {
        "\x1b[C" => return WizardCommand::Event(UiEvent::Arrow(Direction::Right)),
        "\x1b[D" => return WizardCommand::Event(UiEvent::Arrow(Direction::Left)),
        _ => {}
    }

    let input = line.trim();
    let lowered = input.to_lowercase();

    if step == Step::Intro {
        match lowered.as_str() {
            "yes" | "y" => return WizardCommand::Event(UiEvent::Respond(ValentineResponse::Yes)),
            "no" | "n" => return WizardCommand::Event(UiEvent::Respond(ValentineResponse::No)),
            _ => {}
        }
    }

    match lowered.as_str() {
        "" | "next" | ">" => return WizardCommand::Event(UiEvent::Next),
        "prev" | "previous" | "back" | "<" => return WizardCommand::Event(UiEvent::Previous),
        "help" | "?" => return WizardCommand::Help,
        "quit" | "exit" | "q" => return WizardCommand::Quit,
        _ => {}
    }

    if step == Step::Results {
        match lowered.as_str() {
            "export" | "download" | "d" => return WizardCommand::Event(UiEvent::Export),
            "email" => return WizardCommand::Event(UiEvent::ToggleEmailForm),
            "send" => {
                return WizardCommand::Event(UiEvent::SendEmail {
                    to: String::new(),
                })
            }
            _ => {}
        }
        if lowered.starts_with("send ") {
            return WizardCommand::Event(UiEvent::SendEmail {
                to: input.get("send ".len()..).unwrap_or_default().trim().to_string(),
            });
        }
    }

    if step == Step::Date {
        return WizardCommand::SetDate(input.to_string());
    }

    if step.category().is_some() {
        if lowered == "none" {
            return WizardCommand::ClearSelection;
        }
        let positions: Option<Vec<usize>> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| token.parse().ok())
            .collect();
        if let Some(positions) = positions {
            return WizardCommand::Toggle(positions);
        }
    }

    WizardCommand::Unknown(input.to_string())
}

/// Terminal rendition of the questionnaire screens.
///
/// Holds the values of the date input and the option checkboxes between
/// steps, the way form fields keep their state in a page.
pub struct TerminalSurface<'r, W: Write> {
    out: W,
    renderer: &'r TerminalRenderer,
    catalog: OptionCatalog,
    today: Date,
    current: Step,
    date: Option<Date>,
    checked: BTreeMap<Category, BTreeSet<String>>,
    email: EmailControl,
}

impl<'r, W: Write> TerminalSurface<'r, W> {
    pub fn new(out: W, renderer: &'r TerminalRenderer, catalog: OptionCatalog, today: Date) -> Self {
        Self {
            out,
            renderer,
            catalog,
            today,
            current: Step::Intro,
            date: None,
            checked: BTreeMap::new(),
            email: EmailControl::default(),
        }
    }

    /// Pre-fills the inputs with previously saved answers.
    pub fn with_record(mut self, record: &AnswerRecord) -> Self {
        self.date = record.date;
        for category in Category::ALL {
            self.checked
                .insert(category, record.selection(category).clone());
        }
        self
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Validates and stores typed date text. Past dates are refused.
    pub fn enter_date(&mut self, text: &str) {
        match text.parse::<Date>() {
            Ok(date) if date < self.today => {
                self.show_status(&OperationStatus::failure(format!(
                    "Please choose today ({}) or a later date",
                    self.today
                )));
            }
            Ok(date) => {
                self.date = Some(date);
                self.emit(&format!("Date set to **{date}**. Type **next** to continue.\n"));
            }
            Err(e) => {
                debug!("Rejected date input {text:?}: {e}");
                self.show_status(&OperationStatus::failure(
                    "Please enter a date as YYYY-MM-DD",
                ));
            }
        }
    }

    /// Flips the options at the given 1-based positions on the current
    /// choice step.
    pub fn toggle(&mut self, positions: &[usize]) {
        let Some(category) = self.current.category() else {
            return;
        };

        for &position in positions {
            let Some(option) = self.catalog.option_at(category, position) else {
                self.show_status(&OperationStatus::warning(format!(
                    "There is no option {position}"
                )));
                continue;
            };
            let option = option.to_string();
            let selected = self.checked.entry(category).or_default();
            if !selected.remove(&option) {
                selected.insert(option);
            }
        }
        self.render_options(category);
    }

    /// Unticks every option on the current choice step.
    pub fn clear_selection(&mut self) {
        if let Some(category) = self.current.category() {
            self.checked.remove(&category);
            self.render_options(category);
        }
    }

    pub fn show_help(&mut self) {
        let mut help = String::from("### Commands\n");
        help.push_str("- **next** (or Enter, `>`): save this step and continue\n");
        help.push_str("- **prev** (or `<`): go back\n");
        match self.current {
            Step::Intro => help.push_str("- **yes** / **no**: answer the question\n"),
            Step::Date => help.push_str("- `YYYY-MM-DD`: pick a date, today or later\n"),
            Step::Results => {
                help.push_str("- **export**: save your answers as a JSON file\n");
                help.push_str("- **email**: show the email form\n");
                help.push_str("- **send** `address`: email your answers\n");
            }
            step if step.category().is_some() => {
                help.push_str("- option numbers, e.g. `1 3`: toggle choices\n");
                help.push_str("- **none**: clear your choices\n");
            }
            _ => {}
        }
        help.push_str("- **quit**: leave; your answers stay saved\n");
        self.emit(&help);
    }

    /// Shown when moving forward from the opening question before "yes".
    pub fn remind_to_answer(&mut self) {
        self.show_status(&OperationStatus::warning(
            "Answer **yes** or **no** to continue",
        ));
    }

    pub fn show_unknown(&mut self, input: &str) {
        self.show_status(&OperationStatus::warning(format!(
            "Unrecognized input '{input}'. Type help for the available commands"
        )));
    }

    pub fn prompt(&mut self) {
        if let Err(e) = write!(self.out, "> ").and_then(|_| self.out.flush()) {
            warn!("Failed to write prompt: {e}");
        }
    }

    pub fn farewell(&mut self) {
        self.emit("Your answers are saved. See you soon!\n");
    }

    fn emit(&mut self, markdown: &str) {
        if let Err(e) = self.renderer.render_to(&mut self.out, markdown) {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn render_options(&mut self, category: Category) {
        let selected = self.checked.get(&category);
        let mut text = String::new();
        for (index, option) in self.catalog.options(category).iter().enumerate() {
            let mark = if selected.is_some_and(|s| s.contains(option)) {
                "x"
            } else {
                " "
            };
            text.push_str(&format!("{:>2}. [{mark}] {option}\n", index + 1));
        }
        self.emit(&text);
    }
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent) * PROGRESS_WIDTH / 100;
    format!(
        "`{}{}` {percent}%",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled)
    )
}

impl<W: Write> StepSurface for TerminalSurface<'_, W> {
    fn date_input(&self) -> Option<Date> {
        self.date
    }

    fn selected_items(&self, category: Category) -> Vec<String> {
        self.checked
            .get(&category)
            .map(|selected| selected.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn show_step(&mut self, view: &StepView) {
        self.current = view.step;

        let mut text = format!(
            "\n## {}\n{}\n",
            view.step.title(),
            progress_bar(view.progress_percent)
        );
        match view.step {
            Step::Intro => text.push_str("Answer **yes** or **no**.\n"),
            Step::Acknowledgment => {
                text.push_str("I knew you would say yes! Let's plan our perfect day.\n")
            }
            Step::Date => {
                let current = self
                    .date
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| DATE_PLACEHOLDER.to_string());
                text.push_str(&format!(
                    "Type a date as `YYYY-MM-DD`, {} or later. Current: **{current}**\n",
                    self.today
                ));
            }
            Step::Results => text.push_str(
                "Type **export** to save your answers as a file, or **email** to send them.\n",
            ),
            _ => {}
        }

        let nav = view.navigation;
        let hints: Vec<&str> = [
            nav.show_previous.then_some("**prev** to go back"),
            nav.show_next.then_some("**next** to continue"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !hints.is_empty() {
            text.push_str(&format!("*{}*\n", hints.join(", ")));
        }
        self.emit(&text);

        if let Some(category) = view.step.category() {
            self.emit("Type option numbers to toggle them, **none** to clear.\n");
            self.render_options(category);
        }
    }

    fn show_summary(&mut self, summary: &str) {
        self.emit(&format!("Here is what you picked:\n{summary}"));
    }

    fn show_nudge(&mut self, count: u32) {
        let emphasis = "!".repeat(count.min(10) as usize);
        self.emit(&format!(
            "*The no button shakes.* Are you sure? The **YES** button is right there{emphasis}\n"
        ));
    }

    fn show_status(&mut self, status: &OperationStatus) {
        self.emit(&status.to_string());
    }

    fn set_email_control(&mut self, control: EmailControl) {
        let previous = std::mem::replace(&mut self.email, control);
        if control.sending && !previous.sending {
            self.emit(&format!("{}\n", control.send_label()));
        }
        if control.visible != previous.visible {
            if control.visible {
                self.emit("Type **send** `address` to email your answers.\n");
            } else {
                self.emit("Email form closed.\n");
            }
        }
    }
}

/// Runs the questionnaire until the input ends or the user quits.
pub async fn run<R, W>(
    controller: &mut StepController<'_>,
    surface: &mut TerminalSurface<'_, W>,
    input: R,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    controller.start(surface);

    surface.prompt();
    for line in input.lines() {
        let line = line?;
        match parse_command(&line, controller.current_step()) {
            WizardCommand::Event(event) => {
                let forward = matches!(event, UiEvent::Next | UiEvent::Arrow(Direction::Right));
                let outcome = controller.dispatch(event, surface).await;
                if forward
                    && controller.current_step() == Step::Intro
                    && matches!(outcome, Outcome::Unchanged)
                {
                    surface.remind_to_answer();
                }
            }
            WizardCommand::SetDate(text) => surface.enter_date(&text),
            WizardCommand::Toggle(positions) => surface.toggle(&positions),
            WizardCommand::ClearSelection => surface.clear_selection(),
            WizardCommand::Help => surface.show_help(),
            WizardCommand::Quit => break,
            WizardCommand::Unknown(text) => surface.show_unknown(&text),
        }
        surface.prompt();
    }

    surface.farewell();
    Ok(())
}
