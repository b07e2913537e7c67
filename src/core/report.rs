use crate::domain::model::TimeSlot;

const NOT_AVAILABLE: &str = "N/A";

/// Time part of a `"<date> <time>"` timestamp. Values without a space,
/// such as `N/A`, come back unchanged.
pub fn time_of_day(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map(|(_, time)| time)
        .unwrap_or(timestamp)
}

pub fn format_slot(slot: &TimeSlot, currency_symbol: &str) -> String {
    let window = slot.departure_window.as_ref();
    let earliest = window
        .and_then(|w| w.earliest.as_deref())
        .unwrap_or(NOT_AVAILABLE);
    let latest = window
        .and_then(|w| w.latest.as_deref())
        .unwrap_or(NOT_AVAILABLE);

    let price = slot
        .fare
        .as_ref()
        .and_then(|fare| fare.prices.as_ref())
        .and_then(|prices| prices.display_price.as_ref())
        .map(|price| price.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    format!(
        "  - Window: {} - {}, Price: {}{}",
        time_of_day(earliest),
        time_of_day(latest),
        currency_symbol,
        price
    )
}

/// Header plus one line per slot; nothing at all when `slots` is empty.
pub fn format_destination(
    origin: &str,
    destination: &str,
    slots: &[&TimeSlot],
    currency_symbol: &str,
) -> Vec<String> {
    if slots.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::with_capacity(slots.len() + 1);
    lines.push(format!(
        "Found {} available slot(s) for {} to {}:",
        slots.len(),
        origin,
        destination
    ));
    lines.extend(slots.iter().map(|slot| format_slot(slot, currency_symbol)));
    lines
}
