//! Line-oriented renderings of the setup surface and the widget

use std::io::Write;

use application::messages;
use application::ports::{LocationForm, SearchPanel, SetupView, WeatherCard, WidgetView};
use domain::value_objects::{Location, TemperatureUnit};
use tracing::warn;

/// Writes one line, logging instead of failing when the sink is gone
fn write_line<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        warn!(error = %e, "Failed to write to terminal");
    }
}

/// Setup surface printed to a writer (stdout in the binary)
#[derive(Debug)]
pub struct TerminalSetupView<W> {
    out: W,
}

impl<W: Write> TerminalSetupView<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Free-form line, used by the REPL for help and parse errors
    pub fn message(&mut self, text: &str) {
        write_line(&mut self.out, text);
    }

    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> SetupView for TerminalSetupView<W> {
    fn render_locations(&mut self, locations: &[Location]) {
        write_line(&mut self.out, "地點：");
        if locations.is_empty() {
            write_line(&mut self.out, &format!("  {}", messages::NO_LOCATIONS_YET));
            return;
        }
        for (i, location) in locations.iter().enumerate() {
            write_line(
                &mut self.out,
                &format!(
                    "  {}. {} ({:.4}, {:.4})",
                    i + 1,
                    location.name,
                    location.lat,
                    location.lon
                ),
            );
        }
    }

    fn render_url(&mut self, url: Option<&str>) {
        write_line(&mut self.out, &format!("小工具網址：{}", url.unwrap_or("")));
    }

    fn render_preview(&mut self, url: Option<&str>) {
        match url {
            Some(url) => write_line(&mut self.out, &format!("預覽：overlay-weather widget '{url}'")),
            None => write_line(&mut self.out, "預覽：（無）"),
        }
    }

    fn render_search_panel(&mut self, panel: &SearchPanel) {
        match panel {
            SearchPanel::Hidden => {},
            SearchPanel::Results(results) => {
                for (i, result) in results.iter().enumerate() {
                    write_line(&mut self.out, &format!("  [{}] {}", i + 1, result.label()));
                }
            },
            SearchPanel::NoResults => write_line(&mut self.out, messages::NO_MATCHING_LOCATIONS),
            SearchPanel::Failed => write_line(&mut self.out, messages::SEARCH_FAILED),
        }
    }

    fn render_form(&mut self, form: &LocationForm) {
        if form.is_empty() {
            return;
        }
        write_line(
            &mut self.out,
            &format!("表單：{} / {} / {}", form.name, form.lat, form.lon),
        );
    }

    fn clear_search_input(&mut self) {}

    fn sync_settings(&mut self, interval: u64, unit: TemperatureUnit) {
        write_line(
            &mut self.out,
            &format!("輪播間隔：{interval} ms　溫度單位：{}", unit.symbol()),
        );
    }

    fn alert(&mut self, message: &str) {
        write_line(&mut self.out, &format!("⚠️  {message}"));
    }

    fn show_copy_feedback(&mut self) {
        write_line(&mut self.out, &format!("✅ {}", messages::URL_COPIED));
    }
}

/// Widget printed as a card per rotation
#[derive(Debug)]
pub struct TerminalWidgetView<W> {
    out: W,
}

impl<W: Write> TerminalWidgetView<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> WidgetView for TerminalWidgetView<W> {
    fn show_loading(&mut self) {
        write_line(&mut self.out, messages::LOADING);
    }

    fn show_error(&mut self, message: &str) {
        write_line(&mut self.out, &format!("❌ {message}"));
    }

    fn show_display(&mut self) {}

    fn render_card(&mut self, card: &WeatherCard) {
        write_line(&mut self.out, "────────────");
        write_line(&mut self.out, &card.place_name);
        write_line(
            &mut self.out,
            &format!("{}  {}", card.description, card.temperature),
        );
        write_line(
            &mut self.out,
            &format!("最高 {} / 最低 {}", card.temperature_max, card.temperature_min),
        );
        write_line(
            &mut self.out,
            &format!("[{}] {}", card.icon_alt, card.icon_path),
        );
    }
}
