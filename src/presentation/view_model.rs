use crate::domain::entities::Booking;
use chrono::NaiveDate;

/// Filter and paging parameters for a booking list view. Computed on demand
/// from an in-memory list; holds no state of its own.
#[derive(Debug, Clone)]
pub struct BookingListQuery {
    /// Matches booking id, customer name, or service type, case-insensitive.
    pub search: String,
    /// When set, keep only bookings with this sync state.
    pub synced: Option<bool>,
    /// Inclusive lower bound on the appointment day.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the appointment day.
    pub date_to: Option<NaiveDate>,
    /// 1-based page number, clamped into range.
    pub page: usize,
    pub page_size: usize,
}

impl Default for BookingListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            synced: None,
            date_from: None,
            date_to: None,
            page: 1,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingListPage {
    pub items: Vec<Booking>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
}

impl BookingListPage {
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }
}

impl BookingListQuery {
    pub fn apply(&self, bookings: &[Booking]) -> BookingListPage {
        let mut filtered: Vec<Booking> = bookings
            .iter()
            .filter(|b| self.matches(b))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.appointment_at.cmp(&a.appointment_at));

        let total = filtered.len();
        let page_size = self.page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = self.page.clamp(1, total_pages);

        let items = filtered
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        BookingListPage {
            items,
            total,
            page,
            total_pages,
            page_size,
        }
    }

    fn matches(&self, booking: &Booking) -> bool {
        let term = self.search.trim();
        if !term.is_empty() {
            let term = term.to_lowercase();
            let hit = booking.id.as_str().to_lowercase().contains(&term)
                || booking.customer_name.to_lowercase().contains(&term)
                || booking.service_type.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        if let Some(synced) = self.synced {
            if booking.is_synced != synced {
                return false;
            }
        }

        let day = booking.appointment_at.date_naive();
        if let Some(from) = self.date_from {
            if day < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if day > to {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::BookingId;
    use chrono::{Duration, Utc};

    fn booking(id: &str, name: &str, service: &str, days_ahead: i64) -> Booking {
        Booking {
            id: BookingId::parse(id).unwrap(),
            customer_name: name.to_string(),
            phone_number: String::new(),
            email: String::new(),
            service_type: service.to_string(),
            appointment_at: Utc::now() + Duration::days(days_ahead),
            is_synced: false,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Booking> {
        vec![
            booking("b1", "John Doe", "Wash", 0),
            booking("b2", "Jane Roe", "Interior", 1),
            booking("b3", "Jack Moe", "Full Valet", 2).mark_synced(),
        ]
    }

    #[test]
    fn search_matches_name_id_and_service() {
        let all = sample();

        let by_name = BookingListQuery {
            search: "jane".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.apply(&all).items[0].id.as_str(), "b2");

        let by_id = BookingListQuery {
            search: "B3".to_string(),
            ..Default::default()
        };
        assert_eq!(by_id.apply(&all).items[0].id.as_str(), "b3");

        let by_service = BookingListQuery {
            search: "valet".to_string(),
            ..Default::default()
        };
        assert_eq!(by_service.apply(&all).total, 1);
    }

    #[test]
    fn synced_filter_partitions_list() {
        let all = sample();

        let unsynced = BookingListQuery {
            synced: Some(false),
            ..Default::default()
        };
        assert_eq!(unsynced.apply(&all).total, 2);

        let synced = BookingListQuery {
            synced: Some(true),
            ..Default::default()
        };
        assert_eq!(synced.apply(&all).total, 1);
    }

    #[test]
    fn orders_newest_appointment_first() {
        let all = sample();
        let page = BookingListQuery::default().apply(&all);
        let ids: Vec<&str> = page.items.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b2", "b1"]);
    }

    #[test]
    fn paging_clamps_out_of_range_page() {
        let all = sample();
        let query = BookingListQuery {
            page: 99,
            page_size: 2,
            ..Default::default()
        };

        let page = query.apply(&all);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
        assert!(page.can_prev());
        assert!(!page.can_next());
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let page = BookingListQuery::default().apply(&[]);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn date_bounds_are_inclusive_on_the_day() {
        let all = sample();
        let today = Utc::now().date_naive();

        let query = BookingListQuery {
            date_from: Some(today + Duration::days(1)),
            date_to: Some(today + Duration::days(2)),
            ..Default::default()
        };
        let page = query.apply(&all);
        let ids: Vec<&str> = page.items.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b2"]);
    }
}
