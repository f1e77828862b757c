use super::format::{format_sets, name_stretch, time_ago, DisplayUnit};
use crate::types::errors::RenderError;
use crate::types::SessionBatch;
use chrono::{DateTime, Utc};
use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 675;

const PADDING: u32 = 56;
const HEADER_HEIGHT: u32 = 96;
const ROW_HEIGHT: u32 = 84;
const COLUMN_WIDTH: u32 = (CARD_WIDTH - PADDING * 2) / 2;

const CARD_TEMPLATE_NAME: &str = "card.svg";
const CARD_TEMPLATE: &str = include_str!("card.svg.j2");

/// One exercise slot on the card, positioned by its top-left corner.
#[derive(Debug, Serialize)]
struct CardRow {
    x: u32,
    y: u32,
    stretch: u32,
    name: String,
    sets: String,
}

fn card_environment() -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    // Every interpolated string is SVG text content or an attribute value.
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template(CARD_TEMPLATE_NAME, CARD_TEMPLATE)?;
    Ok(env)
}

/// Lay the batch out as a two-column SVG card.
///
/// Groups fill the left column top to bottom, then the right one.
pub fn render_card(
    batch: &SessionBatch,
    unit: DisplayUnit,
    now: DateTime<Utc>,
) -> Result<String, RenderError> {
    let last_updated = batch
        .latest_timestamp()
        .map(|t| time_ago(t, now))
        .unwrap_or_else(|| "never".to_string());

    let top = PADDING + HEADER_HEIGHT;
    let per_column = batch.groups.len().div_ceil(2).max(1);
    let rows: Vec<CardRow> = batch
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| CardRow {
            x: PADDING + (index / per_column) as u32 * COLUMN_WIDTH,
            y: top + (index % per_column) as u32 * ROW_HEIGHT,
            stretch: name_stretch(&group.exercise_name),
            name: group.exercise_name.clone(),
            sets: format_sets(group, unit),
        })
        .collect();

    let exercise_count = rows.len();
    let env = card_environment()?;
    let svg = env.get_template(CARD_TEMPLATE_NAME)?.render(context! {
        width => CARD_WIDTH,
        height => CARD_HEIGHT,
        padding => PADDING,
        badge_x => CARD_WIDTH - PADDING - 260,
        top => top,
        last_updated => last_updated,
        rows => rows,
    })?;
    log::debug!("Rendered card with {exercise_count} exercises");
    Ok(svg)
}
