//! Sales-history port.
//!
//! The calculator never owns sales data; it reads a snapshot through this
//! trait so the backing store (database, file import, in-memory fixture) can
//! be swapped without touching the business rules.

use panerp_sales::{Period, Sale};

/// Read-only source of sales records for a calculation run.
pub trait SalesHistory {
    /// Sales dated inside `period`, both bounds inclusive.
    ///
    /// Implementations filter by date only; status filtering stays with the
    /// calculator so every caller applies the same eligibility test.
    fn sales_in(&self, period: &Period) -> Vec<Sale>;
}

/// In-memory sales history.
///
/// Intended for tests/dev. Not optimized for large histories.
#[derive(Debug, Default, Clone)]
pub struct InMemorySalesHistory {
    sales: Vec<Sale>,
}

impl InMemorySalesHistory {
    pub fn new(sales: Vec<Sale>) -> Self {
        Self { sales }
    }

    pub fn push(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

impl SalesHistory for InMemorySalesHistory {
    fn sales_in(&self, period: &Period) -> Vec<Sale> {
        self.sales
            .iter()
            .filter(|s| period.contains(s.date))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use panerp_core::OrderNumber;
    use panerp_sales::SaleStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sale(order: &str, on: NaiveDate) -> Sale {
        Sale {
            order: OrderNumber::new(order).unwrap(),
            date: on,
            customer: "Cafetería Centro".to_string(),
            status: SaleStatus::Completed,
            lines: Vec::new(),
        }
    }

    #[test]
    fn filters_by_date_only() {
        let mut history = InMemorySalesHistory::default();
        history.push(sale("V-00001", date(2024, 6, 1)));
        history.push(sale("V-00002", date(2024, 5, 31)));
        history.push(sale("V-00003", date(2024, 6, 30)));

        let period = Period::new(date(2024, 6, 1), date(2024, 6, 30)).unwrap();
        let in_june = history.sales_in(&period);
        assert_eq!(in_june.len(), 2);
        assert_eq!(in_june[0].order.as_str(), "V-00001");
        assert_eq!(in_june[1].order.as_str(), "V-00003");
    }
}
