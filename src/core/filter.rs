use crate::domain::model::TimeSlot;

/// Slots that carry a fare, in their original order.
pub fn available_slots(slots: &[TimeSlot]) -> Vec<&TimeSlot> {
    slots.iter().filter(|slot| slot.is_available()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DepartureWindow, FareInfo};

    fn slot(earliest: &str, fare: bool) -> TimeSlot {
        TimeSlot {
            departure_window: Some(DepartureWindow {
                earliest: Some(earliest.to_string()),
                latest: None,
            }),
            fare: fare.then(FareInfo::default),
        }
    }

    #[test]
    fn test_keeps_only_slots_with_fare_in_order() {
        let slots = vec![
            slot("2025-10-22 07:00", true),
            slot("2025-10-22 08:00", false),
            slot("2025-10-22 09:00", true),
            slot("2025-10-22 10:00", false),
            slot("2025-10-22 11:00", true),
        ];

        let available = available_slots(&slots);
        let expected_count = slots.iter().filter(|s| s.fare.is_some()).count();
        assert_eq!(available.len(), expected_count);

        let earliest: Vec<_> = available
            .iter()
            .map(|s| s.departure_window.as_ref().unwrap().earliest.as_deref().unwrap())
            .collect();
        assert_eq!(
            earliest,
            vec!["2025-10-22 07:00", "2025-10-22 09:00", "2025-10-22 11:00"]
        );
    }

    #[test]
    fn test_empty_and_all_unavailable_inputs() {
        assert!(available_slots(&[]).is_empty());
        let slots = vec![slot("a", false), slot("b", false)];
        assert!(available_slots(&slots).is_empty());
    }
}
