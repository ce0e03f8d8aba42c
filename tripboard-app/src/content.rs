//! Built-in panel content.
//!
//! Each view keeps its own local state and knows nothing about the grid it
//! is shown in. None of them talk to a network service.

use chrono::{Datelike, Local, Months, NaiveDate};
use eframe::egui;
use tripboard_panel_api::{ContentKind, ContentView};

/// Places offered by the travel view.
const PLACES: [(&str, &str); 6] = [
    ("Gyeongbokgung", "Seoul"),
    ("Haeundae Beach", "Busan"),
    ("Seongsan Ilchulbong", "Jeju"),
    ("Bulguksa", "Gyeongju"),
    ("Jeonju Hanok Village", "Jeonju"),
    ("Nami Island", "Chuncheon"),
];

/// Searchable list of places to visit.
#[derive(Debug, Default)]
pub struct TravelView {
    query: String,
    selected: Option<usize>,
    compact: bool,
}

impl TravelView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of the places matching the current query.
    pub fn matches(&self) -> Vec<usize> {
        let query = self.query.trim().to_lowercase();
        PLACES
            .iter()
            .enumerate()
            .filter(|(_, (name, region))| {
                query.is_empty()
                    || name.to_lowercase().contains(&query)
                    || region.to_lowercase().contains(&query)
            })
            .map(|(index, _)| index)
            .collect()
    }
}

impl ContentView for TravelView {
    fn kind(&self) -> ContentKind {
        ContentKind::Travel
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search");
            ui.text_edit_singleline(&mut self.query);
            ui.checkbox(&mut self.compact, "Compact");
        });
        ui.separator();

        let matches = self.matches();
        if matches.is_empty() {
            ui.weak("No place matches your search.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for index in matches {
                let (name, region) = PLACES[index];
                let label = if self.compact {
                    name.to_string()
                } else {
                    format!("{} · {}", name, region)
                };
                if ui.selectable_label(self.selected == Some(index), label).clicked() {
                    self.selected = Some(index);
                }
            }
        });
    }
}

/// Month grid with simple navigation.
#[derive(Debug)]
pub struct CalendarView {
    /// First day of the month on screen
    month: NaiveDate,
    selected_day: Option<u32>,
}

impl CalendarView {
    /// Calendar opened on the month containing `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            month: first_of_month(today),
            selected_day: None,
        }
    }

    pub fn year_month(&self) -> (i32, u32) {
        (self.month.year(), self.month.month())
    }

    pub fn previous_month(&mut self) {
        if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
            self.month = month;
            self.selected_day = None;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.checked_add_months(Months::new(1)) {
            self.month = month;
            self.selected_day = None;
        }
    }

    /// Empty cells before the 1st in a week starting on Sunday.
    pub fn leading_blanks(&self) -> u32 {
        self.month.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month)
    }
}

impl Default for CalendarView {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| u32::try_from((next - first).num_days()).ok())
        .unwrap_or(31)
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl ContentView for CalendarView {
    fn kind(&self) -> ContentKind {
        ContentKind::Calendar
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.small_button("◀").clicked() {
                self.previous_month();
            }
            ui.strong(self.month.format("%Y-%m").to_string());
            if ui.small_button("▶").clicked() {
                self.next_month();
            }
        });
        ui.separator();

        let blanks = self.leading_blanks();
        let days = self.days_in_month();
        egui::Grid::new("calendar_days").show(ui, |ui| {
            for name in WEEKDAYS {
                ui.weak(name);
            }
            ui.end_row();

            for _ in 0..blanks {
                ui.label("");
            }
            for day in 1..=days {
                if ui
                    .selectable_label(self.selected_day == Some(day), day.to_string())
                    .clicked()
                {
                    self.selected_day = Some(day);
                }
                if (blanks + day) % 7 == 0 {
                    ui.end_row();
                }
            }
        });

        if let Some(date) = self
            .selected_day
            .and_then(|day| self.month.with_day(day))
        {
            ui.separator();
            ui.label(format!("Selected {}", date.format("%Y-%m-%d")));
        }
    }
}

/// Temperature unit shown by the weather view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn format(&self, celsius: f64) -> String {
        match self {
            TemperatureUnit::Celsius => format!("{:.0}°C", celsius),
            TemperatureUnit::Fahrenheit => format!("{:.0}°F", celsius * 9.0 / 5.0 + 32.0),
        }
    }
}

/// Weekly outlook for one city.
#[derive(Debug)]
pub struct WeatherView {
    city: String,
    unit: TemperatureUnit,
    weekly: Vec<(&'static str, f64)>,
}

impl Default for WeatherView {
    fn default() -> Self {
        Self {
            city: "Seoul".to_string(),
            unit: TemperatureUnit::default(),
            weekly: vec![
                ("Mon", 18.0),
                ("Tue", 20.0),
                ("Wed", 17.0),
                ("Thu", 15.0),
                ("Fri", 19.0),
                ("Sat", 22.0),
                ("Sun", 21.0),
            ],
        }
    }
}

impl WeatherView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentView for WeatherView {
    fn kind(&self) -> ContentKind {
        ContentKind::Weather
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("City");
            ui.text_edit_singleline(&mut self.city);
        });
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.unit, TemperatureUnit::Celsius, "°C");
            ui.radio_value(&mut self.unit, TemperatureUnit::Fahrenheit, "°F");
        });
        ui.separator();

        ui.strong(format!("This week in {}", self.city.trim()));
        egui::Grid::new("weather_week").show(ui, |ui| {
            for (day, celsius) in &self.weekly {
                ui.label(*day);
                ui.label(self.unit.format(*celsius));
                ui.end_row();
            }
        });
    }
}

/// Place categories the map view can filter by.
pub const MAP_CATEGORIES: [&str; 4] = ["Food", "Cafe", "Hotel", "Sights"];

/// Map viewport with a category filter.
#[derive(Debug)]
pub struct MapView {
    zoom: u8,
    category: Option<usize>,
    search: String,
}

impl MapView {
    pub const MIN_ZOOM: u8 = 1;
    pub const MAX_ZOOM: u8 = 18;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_by(&mut self, delta: i8) {
        let zoom = i16::from(self.zoom) + i16::from(delta);
        self.zoom = zoom.clamp(i16::from(Self::MIN_ZOOM), i16::from(Self::MAX_ZOOM)) as u8;
    }

    /// Select `category`, or clear the filter if it is already selected.
    pub fn toggle_category(&mut self, category: usize) {
        self.category = match self.category {
            Some(current) if current == category => None,
            _ => Some(category),
        };
    }

    pub fn category(&self) -> Option<&'static str> {
        self.category.and_then(|index| MAP_CATEGORIES.get(index).copied())
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            zoom: 12,
            category: None,
            search: String::new(),
        }
    }
}

impl ContentView for MapView {
    fn kind(&self) -> ContentKind {
        ContentKind::Map
    }

    fn render(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.search);
            if ui.small_button("−").clicked() {
                self.zoom_by(-1);
            }
            ui.label(format!("zoom {}", self.zoom));
            if ui.small_button("+").clicked() {
                self.zoom_by(1);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for (index, name) in MAP_CATEGORIES.iter().enumerate() {
                if ui.selectable_label(self.category == Some(index), *name).clicked() {
                    self.toggle_category(index);
                }
            }
        });
        ui.separator();

        let (rect, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);
        let caption = match (self.category(), self.search.trim()) {
            (Some(category), "") => format!("{} nearby", category),
            (Some(category), search) => format!("{} near {}", category, search),
            (None, "") => "Map".to_string(),
            (None, search) => search.to_string(),
        };
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            caption,
            egui::FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_report_their_kind() {
        assert_eq!(TravelView::new().kind(), ContentKind::Travel);
        assert_eq!(CalendarView::default().kind(), ContentKind::Calendar);
        assert_eq!(WeatherView::new().kind(), ContentKind::Weather);
        assert_eq!(MapView::new().kind(), ContentKind::Map);
        assert_eq!(WeatherView::new().title(), ContentKind::Weather.display_name());
    }

    #[test]
    fn test_travel_search() {
        let mut view = TravelView::new();
        assert_eq!(view.matches().len(), PLACES.len());

        view.query = "  busan ".to_string();
        assert_eq!(view.matches(), vec![1]);

        view.query = "nowhere".to_string();
        assert!(view.matches().is_empty());
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_calendar_opens_on_given_month() {
        let view = CalendarView::new(date(2026, 10, 16));
        assert_eq!(view.year_month(), (2026, 10));
        assert_eq!(view.leading_blanks(), 4);
        assert_eq!(view.days_in_month(), 31);

        let today = Local::now().date_naive();
        assert_eq!(
            CalendarView::default().year_month(),
            (today.year(), today.month())
        );
    }

    #[test]
    fn test_calendar_navigation_wraps_years() {
        let mut view = CalendarView::new(date(2026, 1, 31));
        view.previous_month();
        assert_eq!(view.year_month(), (2025, 12));
        assert_eq!(view.leading_blanks(), 1);
        view.next_month();
        view.next_month();
        assert_eq!(view.year_month(), (2026, 2));
        assert_eq!(view.leading_blanks(), 0);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2026, 2, 1)), 28);
        assert_eq!(days_in_month(date(1900, 2, 1)), 28);
        assert_eq!(days_in_month(date(2000, 2, 1)), 29);
        assert_eq!(days_in_month(date(2026, 4, 30)), 30);
        assert_eq!(days_in_month(date(2026, 12, 1)), 31);
    }

    #[test]
    fn test_temperature_units() {
        assert_eq!(TemperatureUnit::Celsius.format(20.0), "20°C");
        assert_eq!(TemperatureUnit::Fahrenheit.format(20.0), "68°F");
    }

    #[test]
    fn test_map_zoom_and_category() {
        let mut view = MapView::new();
        view.zoom_by(100);
        assert_eq!(view.zoom(), MapView::MAX_ZOOM);
        view.zoom_by(-100);
        assert_eq!(view.zoom(), MapView::MIN_ZOOM);

        view.toggle_category(2);
        assert_eq!(view.category(), Some("Hotel"));
        view.toggle_category(2);
        assert_eq!(view.category(), None);
    }
}
