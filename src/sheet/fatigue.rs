// ABOUTME: Additional fatigue levels of the sheet
// ABOUTME: Generates the level selector options, the extra winded rows, and the CSS hiding unused rows

use super::error::Result;
use super::repeat::{repeat_template, RepeatSource};

/// Number of extra "winded" levels a character can unlock
pub const ADDITIONAL_FATIGUE_LEVELS: usize = 10;

const ADDITIONAL_LEVEL_ROW: &str = r#"<tr class="sheet-addfatigue-%(num)s">
    <td><input type="radio" class="sheet-radio_1" name="attr_Fatigue" value="%(value)s"><span></span></td>
    <td style="text-align:center;">0</td>
    <td>2 min.</td>
    <td data-i18n="winded" >Winded</td>
</tr>"#;

pub fn fatigue_levels_options() -> Result<String> {
    repeat_template(
        r#"<option value="%%">%%</option>"#,
        &RepeatSource::values(0..=ADDITIONAL_FATIGUE_LEVELS),
    )
}

/// Radio value of an extra level; small enough to leave the fatigue total unchanged
fn level_value(level: usize) -> String {
    (level as f64 / 1000.0).to_string()
}

pub fn additional_fatigue_levels() -> Result<String> {
    let rows = (1..=ADDITIONAL_FATIGUE_LEVELS)
        .map(|level| vec![level.to_string(), level_value(level)])
        .collect();
    repeat_template(
        ADDITIONAL_LEVEL_ROW,
        &RepeatSource::Tuples {
            rows,
            keys: &["num", "value"],
        },
    )
}

/// Hides each extra level row unless the fatigue proxy selects a level that shows it
pub fn fatigue_level_css() -> String {
    (1..=ADDITIONAL_FATIGUE_LEVELS)
        .map(|level| {
            let selectors: String = (level..=ADDITIONAL_FATIGUE_LEVELS)
                .map(|value| format!(r#":not(.sheet-fatigue-proxy[value="{value}"])"#))
                .collect();
            format!("{selectors} + table tr.sheet-addfatigue-{level} {{\n    display: none;\n}}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every fragment produced by this module, by name
pub fn fragments() -> Result<Vec<(String, String)>> {
    Ok(vec![
        ("fatigue_levels_options".to_string(), fatigue_levels_options()?),
        ("additional_fatigue_levels".to_string(), additional_fatigue_levels()?),
        ("fatigue_level_css".to_string(), fatigue_level_css()),
    ])
}
