// Terminal commands.
//
// Each input line is either a page action (export, view/copy a row, ...) or
// the folder link itself. Anything that isn't a known action is submitted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Re-render the current page.
    List,
    Export,
    /// Show a file's view link (1-based row number).
    View(usize),
    /// Copy a file's view link to the clipboard.
    Copy(usize),
    /// Show a file's direct download link.
    Download(usize),
    /// Submit the folder field with this text (may be blank).
    Submit(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("`{0}` needs a row number, e.g. `{0} 1`")]
    MissingRow(&'static str),
    #[error("`{0}` is not a valid row number")]
    BadRow(String),
}

pub const HELP_TEXT: &str = "\
Paste a folder link or ID and press Enter to extract it.

Commands:
  view N       show the view link of file N
  copy N       copy the view link of file N to the clipboard
  download N   show the direct download link of file N
  export       save the list as drive-files.xls
  list         show the current page again
  help         show this help
  quit         exit";

fn parse_row(name: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingRow(name))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadRow(arg.to_string())),
    }
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    let arg = words.next();
    let extra = words.next().is_some();

    let command = match (head.to_ascii_lowercase().as_str(), extra) {
        ("help" | "?", false) if arg.is_none() => Command::Help,
        ("quit" | "exit", false) if arg.is_none() => Command::Quit,
        ("list", false) if arg.is_none() => Command::List,
        ("export", false) if arg.is_none() => Command::Export,
        ("view", false) => Command::View(parse_row("view", arg)?),
        ("copy", false) => Command::Copy(parse_row("copy", arg)?),
        ("download", false) => Command::Download(parse_row("download", arg)?),
        _ => Command::Submit(line.to_string()),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions() {
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("  EXIT "), Ok(Command::Quit));
        assert_eq!(parse_command("export"), Ok(Command::Export));
        assert_eq!(parse_command("list"), Ok(Command::List));
        assert_eq!(parse_command("view 3"), Ok(Command::View(3)));
        assert_eq!(parse_command("copy 1"), Ok(Command::Copy(1)));
        assert_eq!(parse_command("download 12"), Ok(Command::Download(12)));
    }

    #[test]
    fn test_bad_row_numbers() {
        assert_eq!(parse_command("view"), Err(CommandError::MissingRow("view")));
        assert_eq!(
            parse_command("copy 0"),
            Err(CommandError::BadRow("0".to_string()))
        );
        assert_eq!(
            parse_command("download x"),
            Err(CommandError::BadRow("x".to_string()))
        );
    }

    #[test]
    fn test_everything_else_is_submitted() {
        assert_eq!(
            parse_command("https://drive.google.com/drive/folders/ABC123"),
            Ok(Command::Submit(
                "https://drive.google.com/drive/folders/ABC123".to_string()
            ))
        );
        assert_eq!(parse_command(""), Ok(Command::Submit(String::new())));
        assert_eq!(parse_command("   "), Ok(Command::Submit("   ".to_string())));
        // Extra words mean it's not an action
        assert_eq!(
            parse_command("view 1 2"),
            Ok(Command::Submit("view 1 2".to_string()))
        );
        assert_eq!(
            parse_command("export now"),
            Ok(Command::Submit("export now".to_string()))
        );
    }
}
