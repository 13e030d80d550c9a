//! Line parsing for the interactive session

/// One line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// `/title [text]` (no text clears the title)
    SetTitle(Option<String>),
    /// `/body [text]` (no text clears the body)
    SetBody(Option<String>),
    /// Any line that is not a command
    AppendBody(String),
    Analyze,
    Clear,
    Reset,
    Show,
    Help,
    Quit,
    /// Whitespace-only line
    Empty,
    Unknown(String),
}

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if !trimmed.starts_with('/') {
            return Self::AppendBody(line.to_string());
        }

        let (name, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim_start())),
            None => (trimmed, None),
        };
        let argument = rest.filter(|r| !r.is_empty()).map(str::to_string);

        match name {
            "/title" | "/t" => Self::SetTitle(argument),
            "/body" | "/b" => Self::SetBody(argument),
            "/analyze" | "/a" => Self::Analyze,
            "/clear" | "/c" => Self::Clear,
            "/reset" => Self::Reset,
            "/show" | "/s" => Self::Show,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}
