// Presenter: the menu banner, the choice prompt and the fixed-width car
// table. All layout constants live here.

use crate::model::Car;

pub const MENU: &str = "\
+------------------------------------------------------------------------------+
|                         Vintage Cars Database:  M E N U                      |
+==============================================================================+
| 1. List cars  | 2. Add new car  | 3. Delete car  | 4. Update car  | 5. Exit  |
+------------------------------------------------------------------------------+";

pub const CHOICE_PROMPT: &str = ">>> Enter your choice (1 - 5)";

/// Column names paired with their widths.
pub const COLUMNS: [(&str, usize); 5] = [
    ("id", 8),
    ("brand", 15),
    ("model", 18),
    ("production_year", 17),
    ("convertible", 13),
];

const SEPARATOR: &str = "| ";
const BORDER_WIDTH: usize = 78;

fn border() -> String {
    format!("+{}+", "-".repeat(BORDER_WIDTH))
}

fn row(cells: impl IntoIterator<Item = String>) -> String {
    cells
        .into_iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| format!("{:<width$}{}", cell, SEPARATOR, width = *width))
        .collect()
}

/// Border, upper-cased column names, border.
pub fn header_lines() -> Vec<String> {
    vec![
        border(),
        row(COLUMNS.iter().map(|(name, _)| name.to_uppercase())),
        border(),
    ]
}

pub fn car_line(car: &Car) -> String {
    row([
        car.id.to_string(),
        car.brand.clone(),
        car.model.clone(),
        car.production_year.to_string(),
        if car.convertible { "True" } else { "False" }.to_string(),
    ])
}

/// Header followed by one line per car.
pub fn render_table(cars: &[Car]) -> Vec<String> {
    let mut lines = header_lines();
    lines.extend(cars.iter().map(car_line));
    lines
}
