//! Interactive session: a line-editor form around the analysis controller

use super::command::SessionCommand;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::reporter::{ProgressMode, ProgressReporter};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::debug;
use verdict_application::AnalysisController;
use verdict_domain::{AnalysisInput, OutputFormat};

/// Interactive analysis session
///
/// Keeps the title/body being composed and forwards `/analyze` to the
/// controller. The controller keeps the displayed outcome.
pub struct InteractiveSession {
    controller: AnalysisController,
    input: AnalysisInput,
    format: OutputFormat,
    show_progress: bool,
}

impl InteractiveSession {
    pub fn new(controller: AnalysisController) -> Self {
        Self {
            controller,
            input: AnalysisInput::default(),
            format: OutputFormat::default(),
            show_progress: true,
        }
    }

    /// Set the outcome output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set whether to show a spinner while a request is in flight
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive loop until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("news-verdict".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let command = SessionCommand::parse(&line);
                    debug!("Interactive command: {:?}", command);
                    if self.handle(command).await {
                        break;
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one command. Returns true if the session should end.
    pub async fn handle(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::SetTitle(title) => {
                match title {
                    Some(title) => self.input.set_title(title),
                    None => self.input.clear_title(),
                }
                false
            }
            SessionCommand::SetBody(body) => {
                match body {
                    Some(body) => self.input.set_body(body),
                    None => self.input.clear_body(),
                }
                false
            }
            SessionCommand::AppendBody(line) => {
                self.input.append_body_line(&line);
                false
            }
            SessionCommand::Analyze => {
                self.analyze().await;
                false
            }
            SessionCommand::Clear => {
                self.controller.clear();
                println!("{}", "Result cleared.".dimmed());
                false
            }
            SessionCommand::Reset => {
                self.input.reset();
                self.controller.clear();
                println!("{}", "Input and result cleared.".dimmed());
                false
            }
            SessionCommand::Show => {
                self.print_state();
                false
            }
            SessionCommand::Help => {
                self.print_help();
                false
            }
            SessionCommand::Quit => {
                println!("Bye!");
                true
            }
            SessionCommand::Empty => false,
            SessionCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Current title/body being composed
    pub fn input(&self) -> &AnalysisInput {
        &self.input
    }

    pub fn controller(&self) -> &AnalysisController {
        &self.controller
    }

    async fn analyze(&self) {
        let reporter = ProgressReporter::new();
        let progress = ProgressMode::detect(self.show_progress).notifier(&reporter);

        let outcome = self
            .controller
            .submit_with_progress(&self.input, progress)
            .await;

        println!();
        println!("{}", ConsoleFormatter.render(&outcome, self.format));
    }

    fn print_state(&self) {
        println!();
        print!("{}", ConsoleFormatter::format_input(&self.input));
        match self.controller.outcome() {
            Some(outcome) => {
                println!();
                println!("{}", ConsoleFormatter.render(&outcome, self.format));
            }
            None => println!("{}", "No result.".dimmed()),
        }
        println!();
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         News Verdict - Interactive          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type or paste the news body; each line is appended.");
        self.print_help();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /title <text>, /t  - Set the title (no text clears it)");
        println!("  /body <text>, /b   - Replace the body (no text clears it)");
        println!("  /analyze, /a       - Submit title and body for analysis");
        println!("  /clear, /c         - Clear the displayed result");
        println!("  /reset             - Clear title, body and result");
        println!("  /show, /s          - Show current input and result");
        println!("  /help, /h, /?      - Show this help");
        println!("  /quit, /exit, /q   - Exit");
        println!();
    }
}
