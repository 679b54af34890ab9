use crate::models::ResultSet;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// ASCII table of one source's results with `title` set into the top border.
pub fn render_table(results: &ResultSet, title: &str) -> String {
    let mut rows: Vec<[String; 4]> = vec![HEADERS.map(String::from)];
    rows.extend(results.iter().map(|(language, stats)| {
        [
            language.to_string(),
            stats.total.to_string(),
            stats.processed.to_string(),
            stats.average_salary.to_string(),
        ]
    }));

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let mut out = String::new();
    out.push_str(&titled_border(&separator, title));
    out.push('\n');

    for (index, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, width) in row.iter().zip(widths) {
            let pad = width - cell.chars().count();
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out.push('\n');

        if index == 0 {
            out.push_str(&separator);
            out.push('\n');
        }
    }

    out.push_str(&separator);
    out
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

// Title replaces the start of the border; dropped if it does not fit.
fn titled_border(separator: &str, title: &str) -> String {
    let title_len = title.chars().count();
    let inner_len = separator.chars().count() - 2;
    if title.is_empty() || title_len > inner_len {
        return separator.to_string();
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(separator.chars().skip(1 + title_len));
    line
}
