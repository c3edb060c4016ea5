/// A UI event from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerCommand {
    /// "View Image" pressed with a `YYYY-MM-DD` date selected.
    ViewImage(String),
    /// "View Image" pressed with the n-th sidebar entry (1-based) selected.
    ViewEntry(usize),
    Close,
}

/// Turn a line of terminal input into a command.
///
/// `q`/`quit`/`exit` close the session, a bare positive number selects a
/// sidebar entry, anything else is treated as a date. Blank input yields
/// `None`.
pub fn parse_selection(input: &str) -> Option<ViewerCommand> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit") {
        return Some(ViewerCommand::Close);
    }
    match input.parse::<usize>() {
        Ok(entry) if entry > 0 => Some(ViewerCommand::ViewEntry(entry)),
        _ => Some(ViewerCommand::ViewImage(input.to_string())),
    }
}
