use std::fmt::Write;

use crate::core::Cat;

const HEADERS: [&str; 5] = ["ID", "Name", "Exp", "Breed", "Salary"];

pub fn render_table(cats: &[Cat]) -> String {
    if cats.is_empty() {
        return "(no cats)\n".to_string();
    }

    let rows: Vec<[String; 5]> = cats
        .iter()
        .map(|cat| {
            [
                cat.id.to_string(),
                cat.name.clone(),
                cat.experience_years.to_string(),
                cat.breed.clone(),
                cat.salary.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

pub fn render_breeds(breeds: &[String]) -> String {
    if breeds.is_empty() {
        return "(no breeds loaded)\n".to_string();
    }
    breeds.iter().enumerate().map(|(i, name)| format!("{:>3}. {}\n", i + 1, name)).collect()
}

/// Picks a breed from the loaded list by 1-based number or case-insensitive
/// name. Anything else leaves the breed unselected.
pub fn resolve_breed(breeds: &[String], input: &str) -> String {
    let input = input.trim();
    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| breeds.get(i)).cloned().unwrap_or_default();
    }
    breeds.iter().find(|b| b.eq_ignore_ascii_case(input)).cloned().unwrap_or_default()
}
