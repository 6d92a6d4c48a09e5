//! 命令解析
//!
//! One command per input line. Commands that only need the controller map
//! straight to an [`AppEvent`]; the rest refer to rows on screen and are
//! resolved by the main loop.

use anyhow::{anyhow, bail, Result};
use fontview_core::AppEvent;

/// 帮助文本
pub const HELP: &str = "\
Commands:
  browse <path>     list the subdirectories of <path>
  open <n>          open entry <n> of the directory listing (0 scans it)
  scan [path]       scan <path> (default: current directory) for fonts
  folder            browse the current directory again
  installed         show the fonts installed on the server host
  text <sample>     change the preview text (empty restores the default)
  scroll <offset>   scroll the font list to <offset>
  down | up         scroll one page
  resize <height>   change the viewport height
  hover <n>         point at font row <n>
  leave <n>         stop pointing at font row <n>
  list              print the font list
  help              show this help
  quit              exit";

/// 用户命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 直接转发给控制器的事件
    Event(AppEvent),
    /// Entry of the last directory listing; `0` is the scan entry
    Open(usize),
    /// 扫描当前目录
    ScanCurrent,
    /// Scroll by this many viewport heights
    Page(f64),
    /// 1-based font row
    Hover(usize),
    Leave(usize),
    List,
    Help,
    Quit,
}

impl Command {
    /// 解析一行输入，空行返回 `None`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name {
            "browse" | "cd" => Self::Event(AppEvent::Browse(required(name, rest)?.to_string())),
            "open" => Self::Open(number(name, rest)?),
            "scan" if rest.is_empty() => Self::ScanCurrent,
            "scan" => Self::Event(AppEvent::Scan(rest.to_string())),
            "folder" => Self::Event(AppEvent::FontsInFolder),
            "installed" => Self::Event(AppEvent::InstalledFonts),
            "text" => Self::Event(AppEvent::SubmitSampleText(rest.to_string())),
            "scroll" => Self::Event(AppEvent::Scroll(distance(name, rest)?)),
            "down" => Self::Page(1.0),
            "up" => Self::Page(-1.0),
            "resize" => {
                let height = distance(name, rest)?;
                if height <= 0.0 {
                    bail!("resize: height must be positive");
                }
                Self::Event(AppEvent::Resize(height))
            }
            "hover" => Self::Hover(row(name, rest)?),
            "leave" => Self::Leave(row(name, rest)?),
            "list" | "ls" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command '{other}', try 'help'"),
        };
        Ok(Some(command))
    }
}

fn required<'a>(name: &str, rest: &'a str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("{name}: missing argument");
    }
    Ok(rest)
}

fn number(name: &str, rest: &str) -> Result<usize> {
    required(name, rest)?
        .parse()
        .map_err(|_| anyhow!("{name}: '{rest}' is not a number"))
}

fn row(name: &str, rest: &str) -> Result<usize> {
    match number(name, rest)? {
        0 => bail!("{name}: rows start at 1"),
        n => Ok(n),
    }
}

fn distance(name: &str, rest: &str) -> Result<f64> {
    let value: f64 = required(name, rest)?
        .parse()
        .map_err(|_| anyhow!("{name}: '{rest}' is not a number"))?;
    if !value.is_finite() {
        bail!("{name}: '{rest}' is not a finite number");
    }
    Ok(value)
}
