//! Interactive setup session
//!
//! Reads commands line by line and turns them into [`SetupEvent`]s. Typed
//! search input goes through a [`Debouncer`] so only the last keystroke
//! batch within the quiet period triggers a request.

use std::io::Write;
use std::time::Duration;

use application::ports::{LocationForm, SetupView};
use application::services::{Debouncer, SetupController, SetupEvent};
use domain::value_objects::TemperatureUnit;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::terminal_view::TerminalSetupView;

pub const HELP: &str = "\
指令：
  type <文字>               輸入搜尋文字（停止輸入後自動搜尋）
  search <文字>             立即搜尋
  select <n>                選擇第 n 筆搜尋結果
  form <名稱> <緯度> <經度>  填寫表單
  add [<名稱> <緯度> <經度>] 新增地點
  remove <n>                移除第 n 個地點
  interval <毫秒>           設定輪播間隔
  unit <celsius|fahrenheit> 設定溫度單位
  preview                   重新整理預覽
  copy                      複製小工具網址
  list                      顯示目前設定
  help                      顯示說明
  quit                      離開";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Raw search input, debounced
    Type(String),
    Search(String),
    /// 0-based result position
    Select(usize),
    Form(LocationForm),
    /// Add the current form, optionally replacing it first
    Add(Option<LocationForm>),
    /// 0-based location position
    Remove(usize),
    Interval(String),
    Unit(TemperatureUnit),
    Preview,
    Copy,
    List,
    Help,
    Quit,
}

/// Why a line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("未知的指令：{0}（輸入 help 查看說明）")]
    Unknown(String),

    #[error("缺少參數：{0}")]
    MissingArgument(&'static str),

    #[error("位置必須是從 1 開始的整數：{0}")]
    InvalidPosition(String),

    #[error("請選擇有效的溫度單位：{0}")]
    InvalidUnit(String),
}

/// Parse one line of input
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse_line(line: &str) -> Result<ReplCommand, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (command, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(command, rest)| (command, rest.trim()));

    match command {
        "type" => Ok(ReplCommand::Type(rest.to_string())),
        "search" => Ok(ReplCommand::Search(rest.to_string())),
        "select" => parse_position(rest, "n").map(ReplCommand::Select),
        "form" => parse_form(rest).map(ReplCommand::Form),
        "add" if rest.is_empty() => Ok(ReplCommand::Add(None)),
        "add" => parse_form(rest).map(|form| ReplCommand::Add(Some(form))),
        "remove" => parse_position(rest, "n").map(ReplCommand::Remove),
        "interval" if rest.is_empty() => Err(ParseError::MissingArgument("毫秒")),
        "interval" => Ok(ReplCommand::Interval(rest.to_string())),
        "unit" if rest.is_empty() => Err(ParseError::MissingArgument("celsius|fahrenheit")),
        "unit" => rest
            .parse()
            .map(ReplCommand::Unit)
            .map_err(|_| ParseError::InvalidUnit(rest.to_string())),
        "preview" => Ok(ReplCommand::Preview),
        "copy" => Ok(ReplCommand::Copy),
        "list" => Ok(ReplCommand::List),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" => Ok(ReplCommand::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// 1-based position in the terminal, 0-based in the controller
fn parse_position(raw: &str, name: &'static str) -> Result<usize, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument(name));
    }
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ParseError::InvalidPosition(raw.to_string())),
    }
}

/// `<name...> <lat> <lon>`; the name may contain spaces
fn parse_form(raw: &str) -> Result<LocationForm, ParseError> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    match tokens.as_slice() {
        [name @ .., lat, lon] if !name.is_empty() => {
            Ok(LocationForm::new(name.join(" "), *lat, *lon))
        },
        _ => Err(ParseError::MissingArgument("<名稱> <緯度> <經度>")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Setup session over a terminal view
pub struct Repl<W: Write + Send> {
    controller: SetupController<TerminalSetupView<W>>,
    debounce: Duration,
}

impl<W: Write + Send> std::fmt::Debug for Repl<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repl")
            .field("controller", &self.controller)
            .field("debounce", &self.debounce)
            .finish()
    }
}

impl<W: Write + Send> Repl<W> {
    pub const fn new(controller: SetupController<TerminalSetupView<W>>, debounce: Duration) -> Self {
        Self {
            controller,
            debounce,
        }
    }

    pub const fn controller(&self) -> &SetupController<TerminalSetupView<W>> {
        &self.controller
    }

    /// Restore state, then read commands until `quit` or end of input
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input fails.
    pub async fn run<R>(&mut self, input: R) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.controller.init().await;
        self.controller.view_mut().message(HELP);

        let (mut debouncer, mut queries) = Debouncer::new(self.debounce);
        let mut lines = input.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        break;
                    };
                    if self.handle_line(&line, &mut debouncer).await == Flow::Quit {
                        break;
                    }
                },
                Some(query) = queries.recv() => {
                    self.controller.dispatch(SetupEvent::Search(query)).await;
                },
            }
        }

        info!("Setup session ended");
        Ok(())
    }

    async fn handle_line(&mut self, line: &str, debouncer: &mut Debouncer<String>) -> Flow {
        let command = match parse_line(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Flow::Continue,
            Err(e) => {
                self.controller.view_mut().message(&e.to_string());
                return Flow::Continue;
            },
        };

        match command {
            ReplCommand::Type(text) => debouncer.push(text),
            ReplCommand::Search(query) => {
                debouncer.cancel();
                self.controller.dispatch(SetupEvent::Search(query)).await;
            },
            ReplCommand::Select(index) => {
                self.controller
                    .dispatch(SetupEvent::SelectResult(index))
                    .await;
            },
            ReplCommand::Form(form) => {
                self.controller.dispatch(SetupEvent::EditForm(form)).await;
            },
            ReplCommand::Add(form) => {
                if let Some(form) = form {
                    self.controller.dispatch(SetupEvent::EditForm(form)).await;
                }
                self.controller.dispatch(SetupEvent::AddLocation).await;
            },
            ReplCommand::Remove(index) => {
                self.controller
                    .dispatch(SetupEvent::RemoveLocation(index))
                    .await;
            },
            ReplCommand::Interval(interval) => {
                let unit = self.controller.state().config.unit;
                self.controller
                    .dispatch(SetupEvent::ChangeSettings { interval, unit })
                    .await;
            },
            ReplCommand::Unit(unit) => {
                let interval = self.controller.state().config.interval.to_string();
                self.controller
                    .dispatch(SetupEvent::ChangeSettings { interval, unit })
                    .await;
            },
            ReplCommand::Preview => self.controller.dispatch(SetupEvent::RefreshPreview).await,
            ReplCommand::Copy => self.controller.dispatch(SetupEvent::CopyUrl).await,
            ReplCommand::List => self.list(),
            ReplCommand::Help => self.controller.view_mut().message(HELP),
            ReplCommand::Quit => return Flow::Quit,
        }

        Flow::Continue
    }

    fn list(&mut self) {
        let state = self.controller.state();
        let config = state.config.clone();
        let url = state.url.clone();
        let view = self.controller.view_mut();
        view.sync_settings(config.interval, config.unit);
        view.render_locations(&config.locations);
        view.render_url(url.as_deref());
    }
}
